use std::path::Path;

use crate::domain::{AppError, InventoryDocument};

/// Whole-file inventory persistence.
pub trait InventoryStore {
    /// Read and parse the inventory at `path`.
    fn load(&self, path: &Path) -> Result<InventoryDocument, AppError>;

    /// Serialize `document` and write it to `path`, replacing any previous content.
    fn save(&self, document: &InventoryDocument, path: &Path) -> Result<(), AppError>;

    /// Delete a scratch inventory. A missing file is not an error.
    fn remove(&self, path: &Path) -> Result<(), AppError>;
}
