use crate::commands::CmdResult;
use crate::error::{DukaanError, Result};
use crate::store::CatalogStore;

/// Look up a single product by exact id, variants and all.
pub fn run<S: CatalogStore>(store: &S, id: &str) -> Result<CmdResult> {
    let products = store.load_products()?;
    let product = products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DukaanError::ProductNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}
