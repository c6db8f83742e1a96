//! Custom actions for the Product actor.

/// Stock operations that are neither create nor update.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Adds units to the stock. Moves the version like any other change.
    Restock(u32),
}

/// Results from [`ProductAction`]s, one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    /// Stock level after the restock.
    Restock(u32),
}
