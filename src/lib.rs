//! hostinfo - cached host label and attribute store
//!
//! Gives callers a copy-isolated, cached view of a host's labels and
//! attributes, and pushes their edits back to a pluggable backend.

pub mod cli;
pub mod config;
pub mod error;
pub mod info;
pub mod machine;
pub mod provision;
pub mod store;
pub mod ui;

pub use error::{HostInfoError, HostInfoResult};
pub use info::HostInfo;
pub use machine::{get_store_from_machine, Machine, MachineDescriptor};
pub use store::{CachingHostInfoStore, HostInfoBackend, HostInfoStore};
