use crate::app::AppContext;
use crate::app::commands::resources;
use crate::domain::AppError;
use crate::ports::{
    InventoryAction, InventoryInspector, InventoryStore, InventoryView, PlaybookRunner,
};

/// Ask the inventory tool about `inventory` (first discovered inventory when `None`).
pub fn inspect<S, R, I>(
    ctx: &AppContext<S, R, I>,
    inventory: Option<&str>,
    action: &InventoryAction,
) -> Result<InventoryView, AppError>
where
    S: InventoryStore,
    R: PlaybookRunner,
    I: InventoryInspector,
{
    let inventory_dir = &ctx.paths().inventory_dir;
    let discovered = match inventory {
        Some(_) => Vec::new(),
        None => resources::discover(ctx.paths())?.inventories,
    };
    let path = resources::resolve(inventory_dir, inventory, &discovered, "Inventory")?;
    ctx.inspector().inspect(&path, action)
}
