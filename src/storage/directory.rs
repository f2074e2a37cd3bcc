use crate::storage::{ResourceStore, StorageError, StorageResult};
use std::path::{Path, PathBuf};

/// Writes resources as plain files inside one directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Opens `root`, creating it (and its parents) if needed
    pub fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// The directory files are written to
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceStore for DirectoryStore {
    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<PathBuf> {
        let path_like = name.contains(|c: char| c == '/' || c == '\\');
        if name.is_empty() || name == "." || name == ".." || path_like {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        let path = self.root.join(name);
        std::fs::write(&path, bytes).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
