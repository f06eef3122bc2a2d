//! Remote server file store abstraction.
//!
//! The processor treats the server side as an opaque byte-stream provider:
//! it fetches a named file, stores a named file, and lists what is there.
//! Connection management, retries and authentication belong to the
//! transport implementation, not to the core.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{Error, Result};

/// Byte-level access to the canonical server files
///
/// A production deployment backs this with an FTP client; tests and the
/// bundled CLI use [`DirStore`] over a local directory.
pub trait RemoteStore: Send + Sync {
    /// Fetch the named server file as bytes
    fn fetch(&self, name: &str) -> Result<Vec<u8>>;

    /// Store bytes under the given server file name, replacing any
    /// previous content
    fn store(&self, name: &str, bytes: &[u8]) -> Result<()>;

    /// List available server file names
    fn list(&self) -> Result<Vec<String>>;
}

/// Server file store rooted at a local directory
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        // Server file names are flat; a path separator would escape the root.
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(Error::store(name, "invalid server file name"));
        }
        Ok(self.root.join(name))
    }
}

impl RemoteStore for DirStore {
    fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        debug!("Fetching server file: {}", path.display());
        fs::read(&path).map_err(|e| Error::store(name, format!("fetch failed: {}", e)))
    }

    fn store(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::store(name, format!("store failed: {}", e)))?;
        }
        fs::write(&path, bytes).map_err(|e| Error::store(name, format!("store failed: {}", e)))?;
        info!("Stored server file '{}' ({} bytes)", name, bytes.len());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.root)
            .map_err(|e| Error::store(self.root.to_string_lossy(), format!("list failed: {}", e)))?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Convenience constructor for a store rooted at an existing directory
pub fn open_dir_store(root: &Path) -> Result<DirStore> {
    if !root.is_dir() {
        return Err(Error::configuration(format!(
            "store root is not a directory: {}",
            root.display()
        )));
    }
    Ok(DirStore::new(root))
}
