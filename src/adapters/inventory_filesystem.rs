use std::fs;
use std::path::Path;

use crate::domain::{AppError, InventoryDocument};
use crate::ports::InventoryStore;

/// Inventory files on local disk. Writes replace the file in place without locking.
#[derive(Debug, Clone, Default)]
pub struct FilesystemInventoryStore;

impl FilesystemInventoryStore {
    pub fn new() -> Self {
        Self
    }
}

impl InventoryStore for FilesystemInventoryStore {
    fn load(&self, path: &Path) -> Result<InventoryDocument, AppError> {
        let content = fs::read_to_string(path)?;
        InventoryDocument::parse(&content, path)
    }

    fn save(&self, document: &InventoryDocument, path: &Path) -> Result<(), AppError> {
        let content = document.to_yaml()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        log::debug!("Wrote inventory {}", path.display());
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_GROUP, HostName, HostVars};
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_io_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemInventoryStore::new().load(&dir.path().join("absent.yml")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemInventoryStore::new();
        let mut document =
            InventoryDocument::parse("all:\n  children:\n    alpamayo:\n      hosts: {}\n", "src.yml")
                .unwrap();
        let host = HostName::new("demo").unwrap();
        document.set_host(DEFAULT_GROUP, &host, HostVars::new()).unwrap();

        let target = dir.path().join("nested/out.yml");
        store.save(&document, &target).unwrap();

        let reloaded = store.load(&target).unwrap();
        assert!(reloaded.host(DEFAULT_GROUP, "demo").is_some());
    }

    #[test]
    fn remove_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemInventoryStore::new();
        let target = dir.path().join(".site.overlay-run-1.yml");
        fs::write(&target, "all: {}\n").unwrap();

        store.remove(&target).unwrap();
        assert!(!target.exists());
        store.remove(&target).unwrap();
    }
}
