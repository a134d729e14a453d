//! Caching host info store
//!
//! `CachingHostInfoStore` keeps a single cached `HostInfo` in front of a
//! backend that knows how to load and persist the authoritative record.
//! Concrete backends:
//! - `FileBackend`: a JSON document on local disk
//! - `InMemoryBackend`: plain in-process value, for tests and fallbacks
//!
//! Every record crossing the store boundary is copied, so neither callers
//! nor backends ever share storage with the cache. Any backend failure
//! clears the cache, forcing the next `get` to reload.

mod cache;
pub mod file;
pub mod json;
pub mod memory;

pub use file::{FileBackend, FileHostInfoStore};
pub use memory::{InMemoryBackend, InMemoryHostInfoStore};

use crate::error::HostInfoResult;
use crate::info::HostInfo;
use async_trait::async_trait;
use cache::CachedInfo;
use tracing::debug;

/// Uncached access to an authoritative host info source
#[async_trait]
pub trait HostInfoBackend: Send + Sync {
    /// Read a fresh record from the source
    async fn load(&mut self) -> HostInfoResult<HostInfo>;

    /// Write a record to the source
    async fn persist(&mut self, info: HostInfo) -> HostInfoResult<()>;

    /// Human-readable backend description for log lines
    fn describe(&self) -> String;
}

#[async_trait]
impl<B: HostInfoBackend + ?Sized> HostInfoBackend for Box<B> {
    async fn load(&mut self) -> HostInfoResult<HostInfo> {
        (**self).load().await
    }

    async fn persist(&mut self, info: HostInfo) -> HostInfoResult<()> {
        (**self).persist(info).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Store over a type-erased backend, as carried by machine descriptors
pub type HostInfoStore = CachingHostInfoStore<Box<dyn HostInfoBackend>>;

/// Host info store with a single-entry, copy-isolated cache
pub struct CachingHostInfoStore<B> {
    backend: B,
    cache: CachedInfo,
}

impl<B: HostInfoBackend> CachingHostInfoStore<B> {
    /// Create a store with an empty cache
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: CachedInfo::default(),
        }
    }

    /// Obtain (possibly cached) host info.
    ///
    /// With `force_refresh` the backend is always consulted and the cache
    /// repopulated from it.
    pub async fn get(&mut self, force_refresh: bool) -> HostInfoResult<HostInfo> {
        if force_refresh {
            return self.get_uncached().await;
        }

        match self.cache.get() {
            Some(info) => Ok(info),
            None => self.get_uncached().await,
        }
    }

    /// Write host info to the backend, then cache it.
    ///
    /// On failure the cache is cleared and the backend error returned
    /// unchanged. No retry is attempted.
    pub async fn commit(&mut self, info: &HostInfo) -> HostInfoResult<()> {
        debug!("Committing HostInfo to store {}", self.backend.describe());
        match self.backend.persist(info.clone()).await {
            Ok(()) => {
                self.cache.set(info);
                debug!("HostInfo updated to: {}", info);
                Ok(())
            }
            Err(e) => {
                self.cache.clear();
                debug!("Commit failed, cache invalidated: {}", e);
                Err(e)
            }
        }
    }

    async fn get_uncached(&mut self) -> HostInfoResult<HostInfo> {
        debug!("Refreshing HostInfo using store {}", self.backend.describe());
        debug!("Old host_info: {}", self.cache);

        let info = match self.backend.load().await {
            Ok(info) => info,
            Err(e) => {
                self.cache.clear();
                debug!("Refresh failed, cache invalidated: {}", e);
                return Err(e);
            }
        };

        self.cache.set(&info);
        debug!("New host_info: {}", info);
        Ok(info)
    }

    /// Check whether a record is currently cached
    pub fn is_cached(&self) -> bool {
        self.cache.is_populated()
    }

    /// Backend description
    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Borrow the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the backend, bypassing the cache
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: HostInfoBackend + 'static> CachingHostInfoStore<B> {
    /// Erase the backend type, keeping the cache state
    pub fn into_boxed(self) -> HostInfoStore {
        CachingHostInfoStore {
            backend: Box::new(self.backend),
            cache: self.cache,
        }
    }
}
