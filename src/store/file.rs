//! File-backed host info store
//!
//! Each host is one JSON document (see [`super::json`]). Writes go to a
//! sibling temporary file that is renamed over the target.

use super::{json, CachingHostInfoStore, HostInfoBackend};
use crate::error::{HostInfoError, HostInfoResult};
use crate::info::HostInfo;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Backend reading and writing a host info JSON file
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend for `<dir>/<hostname>.json`
    pub fn for_host(dir: &Path, hostname: &str) -> Self {
        Self::new(dir.join(format!("{}.json", hostname)))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl HostInfoBackend for FileBackend {
    async fn load(&mut self) -> HostInfoResult<HostInfo> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(HostInfoError::not_found(self.describe()));
            }
            Err(e) => return Err(HostInfoError::load(self.describe(), e)),
        };

        let info =
            json::deserialize(&content).map_err(|e| HostInfoError::load(self.describe(), e))?;

        debug!("Read host info from {}", self.path.display());
        Ok(info)
    }

    async fn persist(&mut self, info: HostInfo) -> HostInfoResult<()> {
        let content =
            json::serialize(&info).map_err(|e| HostInfoError::persist(self.describe(), e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HostInfoError::persist(self.describe(), e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, content)
            .await
            .map_err(|e| HostInfoError::persist(self.describe(), e))?;

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(HostInfoError::persist(self.describe(), e));
        }

        debug!("Wrote host info to {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("FileBackend({})", self.path.display())
    }
}

/// Caching store over a JSON file
pub type FileHostInfoStore = CachingHostInfoStore<FileBackend>;
