use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, InventoryDocument};
use crate::ports::InventoryStore;

/// In-memory inventory store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventoryStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    saved: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
        self
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Last content saved to `path`, even if it was removed afterwards.
    pub fn last_saved(&self, path: &Path) -> Option<String> {
        let saved = self.saved.lock().unwrap();
        saved.iter().rev().find(|(p, _)| p == path).map(|(_, content)| content.clone())
    }
}

impl InventoryStore for MemoryInventoryStore {
    fn load(&self, path: &Path) -> Result<InventoryDocument, AppError> {
        let content = self.content(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })?;
        InventoryDocument::parse(&content, path)
    }

    fn save(&self, document: &InventoryDocument, path: &Path) -> Result<(), AppError> {
        let content = document.to_yaml()?;
        self.saved.lock().unwrap().push((path.to_path_buf(), content.clone()));
        self.files.lock().unwrap().insert(path.to_path_buf(), content);
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<(), AppError> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }
}
