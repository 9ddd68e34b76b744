use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{InventoryAction, InventoryInspector, InventoryView};

#[derive(Default)]
pub struct FakeInventoryInspector {
    pub calls: Mutex<Vec<(PathBuf, InventoryAction)>>,
}

impl InventoryInspector for FakeInventoryInspector {
    fn inspect(
        &self,
        inventory: &Path,
        action: &InventoryAction,
    ) -> Result<InventoryView, AppError> {
        self.calls.lock().unwrap().push((inventory.to_path_buf(), action.clone()));
        Ok(match action {
            InventoryAction::Graph => InventoryView::Text("@all:\n  |--@ungrouped:\n".into()),
            InventoryAction::List => InventoryView::Json(serde_json::json!({
                "_meta": {"hostvars": {}},
                "all": {"children": ["ungrouped"]}
            })),
            InventoryAction::Host(_) => InventoryView::Json(serde_json::json!({})),
        })
    }
}
