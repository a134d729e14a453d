//! In-memory backend
//!
//! Gives tests direct access to the backing record through `info`.

use super::{CachingHostInfoStore, HostInfoBackend};
use crate::error::HostInfoResult;
use crate::info::HostInfo;
use async_trait::async_trait;

/// Backend holding the authoritative record in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    /// Backing record
    pub info: HostInfo,
}

impl InMemoryBackend {
    /// Seed the backend with an initial record
    pub fn new(info: HostInfo) -> Self {
        Self { info }
    }
}

#[async_trait]
impl HostInfoBackend for InMemoryBackend {
    async fn load(&mut self) -> HostInfoResult<HostInfo> {
        Ok(self.info.clone())
    }

    async fn persist(&mut self, info: HostInfo) -> HostInfoResult<()> {
        self.info = info;
        Ok(())
    }

    fn describe(&self) -> String {
        "InMemoryBackend".to_string()
    }
}

/// Caching store over an in-memory backend
pub type InMemoryHostInfoStore = CachingHostInfoStore<InMemoryBackend>;

impl InMemoryHostInfoStore {
    /// Create an in-memory store seeded with `info`
    pub fn in_memory(info: HostInfo) -> Self {
        Self::new(InMemoryBackend::new(info))
    }
}
