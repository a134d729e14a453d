//! Host references and store resolution
//!
//! Jobs refer to a host either through a descriptor that already carries a
//! store, or through a bare hostname. Bare hostnames get a throwaway
//! in-memory store so older call sites keep working, with no persistence.

use crate::config::{Config, ConfigManager, StoreBackend};
use crate::info::HostInfo;
use crate::store::{FileBackend, HostInfoStore, InMemoryHostInfoStore};
use std::path::Path;
use tracing::debug;

/// Host descriptor with its store attached
pub struct MachineDescriptor {
    /// Host name
    pub hostname: String,

    /// Store holding this host's info
    pub host_info_store: HostInfoStore,
}

/// Reference to a host
pub enum Machine {
    /// Descriptor carrying a constructed store
    Descriptor(MachineDescriptor),
    /// Bare hostname with no store
    Hostname(String),
}

impl std::fmt::Debug for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Machine::Descriptor(descriptor) => f
                .debug_struct("Descriptor")
                .field("hostname", &descriptor.hostname)
                .finish_non_exhaustive(),
            Machine::Hostname(hostname) => f.debug_tuple("Hostname").field(hostname).finish(),
        }
    }
}

impl Machine {
    /// Host name of the referenced machine
    pub fn hostname(&self) -> &str {
        match self {
            Machine::Descriptor(descriptor) => &descriptor.hostname,
            Machine::Hostname(hostname) => hostname,
        }
    }

    /// Whether the machine carries a real store
    pub fn has_store(&self) -> bool {
        matches!(self, Machine::Descriptor(_))
    }
}

/// Obtain the host info store for a machine.
///
/// Descriptors hand back their own store untouched. Bare hostnames get a
/// fresh in-memory store seeded with empty host info.
pub fn get_store_from_machine(machine: Machine) -> HostInfoStore {
    match machine {
        Machine::Descriptor(descriptor) => descriptor.host_info_store,
        Machine::Hostname(hostname) => {
            debug!("No host info store for {}, using in-memory store", hostname);
            InMemoryHostInfoStore::in_memory(HostInfo::default()).into_boxed()
        }
    }
}

/// Build a machine reference for `hostname` from configuration.
///
/// `store_dir` overrides the configured directory for file-backed stores.
pub fn create_machine(config: &Config, hostname: &str, store_dir: Option<&Path>) -> Machine {
    match config.store.backend {
        StoreBackend::File => {
            let dir = store_dir
                .map(Path::to_path_buf)
                .or_else(|| config.store.dir.clone())
                .unwrap_or_else(ConfigManager::hosts_dir);
            let backend = FileBackend::for_host(&dir, hostname);
            debug!("Using file store {} for {}", backend.path().display(), hostname);

            Machine::Descriptor(MachineDescriptor {
                hostname: hostname.to_string(),
                host_info_store: HostInfoStore::new(Box::new(backend)),
            })
        }
        StoreBackend::Memory => Machine::Hostname(hostname.to_string()),
    }
}
