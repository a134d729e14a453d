//! Single-slot host info cache

use crate::info::HostInfo;

/// Cache slot that copies on every read and write.
///
/// The held record is never handed out by reference, so callers cannot
/// alias or mutate it.
#[derive(Debug, Default)]
pub(crate) struct CachedInfo {
    slot: Option<HostInfo>,
}

impl CachedInfo {
    /// Independent copy of the cached record, if any
    pub(crate) fn get(&self) -> Option<HostInfo> {
        self.slot.clone()
    }

    /// Replace the cached record with a copy of `info`
    pub(crate) fn set(&mut self, info: &HostInfo) {
        self.slot = Some(info.clone());
    }

    /// Drop the cached record
    pub(crate) fn clear(&mut self) {
        self.slot = None;
    }

    pub(crate) fn is_populated(&self) -> bool {
        self.slot.is_some()
    }
}

impl std::fmt::Display for CachedInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.slot {
            Some(info) => write!(f, "{}", info),
            None => write!(f, "None"),
        }
    }
}
