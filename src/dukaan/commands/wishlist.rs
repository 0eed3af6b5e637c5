use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Add the id to the wishlist if absent, remove it if present.
pub fn toggle<S: CatalogStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut ids = store.load_wishlist()?;
    let mut result = CmdResult::default();

    // Use the product name in messages when the id is still in the catalog
    let label = store
        .load_products()?
        .iter()
        .find(|p| p.id == id)
        .map_or_else(|| id.to_string(), |p| p.name.clone());

    if let Some(position) = ids.iter().position(|entry| entry == id) {
        ids.remove(position);
        result.add_message(CmdMessage::info(format!("Removed from wishlist: {}", label)));
    } else {
        ids.push(id.to_string());
        result.add_message(CmdMessage::success(format!("Added to wishlist: {}", label)));
    }

    store.save_wishlist(&ids)?;
    Ok(result)
}

/// The wishlisted products in catalog order. Ids without a catalog entry
/// (deleted products) are skipped here but deliberately left in storage.
pub fn list<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let ids = store.load_wishlist()?;
    let products = store.load_products()?;
    let listed = products
        .into_iter()
        .filter(|p| ids.contains(&p.id))
        .collect();
    Ok(CmdResult::default().with_listed_products(listed))
}
