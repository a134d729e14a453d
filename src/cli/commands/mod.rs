//! CLI command implementations

pub mod attr;
pub mod config;
pub mod create;
pub mod label;
pub mod show;

pub use attr::execute as attr;
pub use config::execute as config;
pub use create::execute as create;
pub use label::execute as label;
pub use show::execute as show;

use crate::config::Config;
use crate::error::{HostInfoError, HostInfoResult};
use crate::machine::{create_machine, Machine};
use std::path::PathBuf;

/// Host selection shared by every host-level command
#[derive(Debug, Clone, Default)]
pub struct Target {
    /// Host name from --host / HOSTINFO_HOST
    pub host: Option<String>,

    /// Store directory override from --store-dir / HOSTINFO_STORE_DIR
    pub store_dir: Option<PathBuf>,
}

impl Target {
    /// Resolve the target into a machine reference
    pub fn machine(&self, config: &Config) -> HostInfoResult<Machine> {
        let host = self.host.as_deref().ok_or_else(|| {
            HostInfoError::User("No host given. Pass --host <name> or set HOSTINFO_HOST".into())
        })?;
        validate_hostname(host)?;
        Ok(create_machine(config, host, self.store_dir.as_deref()))
    }
}

/// Hostnames become file names, so reject anything path-like.
fn validate_hostname(host: &str) -> HostInfoResult<()> {
    if host.is_empty() || host.starts_with('.') || host.contains(['/', '\\']) {
        return Err(HostInfoError::User(format!("Invalid hostname: '{}'", host)));
    }
    Ok(())
}
