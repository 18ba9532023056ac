//! Load-once dataset cache
//!
//! The dashboard recomputes its panel on every interaction, but the
//! source file rarely changes. `DatasetCache` owns the normalized
//! observation set and only re-reads the file when its identity (path
//! plus modification time) changes. It is an explicitly owned object so
//! tests can construct independent instances instead of sharing a
//! process-wide singleton.

use super::error::DatasetResult;
use super::loader::WideTableLoader;
use super::types::Observation;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Identity of a loaded source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    path: PathBuf,
    modified: Option<SystemTime>,
}

impl SourceKey {
    /// Compute the current key for a path
    ///
    /// Modification time is best-effort; if the filesystem does not
    /// report one the key degrades to path-only identity.
    pub fn for_path(path: &Path) -> std::io::Result<Self> {
        let modified = std::fs::metadata(path)?.modified().ok();
        Ok(Self {
            path: path.to_path_buf(),
            modified,
        })
    }

    /// Path this key identifies
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Cache holding one normalized observation set
pub struct DatasetCache {
    loader: WideTableLoader,
    cached: Option<(SourceKey, Arc<Vec<Observation>>)>,
}

impl DatasetCache {
    /// Create an empty cache using the given loader
    pub fn new(loader: WideTableLoader) -> Self {
        Self {
            loader,
            cached: None,
        }
    }

    /// Load the observations for `path`, reusing the cached set when
    /// the source identity is unchanged
    pub fn load(&mut self, path: &Path) -> DatasetResult<Arc<Vec<Observation>>> {
        let key = SourceKey::for_path(path)?;

        if let Some((cached_key, observations)) = &self.cached {
            if *cached_key == key {
                tracing::debug!(path = %path.display(), "dataset cache hit");
                return Ok(Arc::clone(observations));
            }
        }

        tracing::info!(path = %path.display(), "loading dataset");
        let observations = Arc::new(self.loader.load(path)?);
        self.cached = Some((key, Arc::clone(&observations)));
        Ok(observations)
    }

    /// Drop the cached set, forcing a re-read on the next load
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Whether the cache currently holds a dataset
    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(WideTableLoader::new())
    }
}
