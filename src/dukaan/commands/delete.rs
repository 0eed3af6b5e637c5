use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Remove a product by exact id and persist the result. Deleting an id the
/// catalog does not contain is a no-op, not an error. The updated catalog
/// comes back in `listed_products` so callers can refresh their view
/// without a reload.
pub fn run<S: CatalogStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut products = store.load_products()?;
    let removed = products.iter().find(|p| p.id == id).cloned();

    products.retain(|p| p.id != id);
    store.save_products(&products)?;

    let mut result = CmdResult::default().with_listed_products(products);
    match removed {
        Some(product) => {
            result.add_message(CmdMessage::success(format!(
                "Product removed ({}): {}",
                product.id, product.name
            )));
            result.affected_products.push(product);
        }
        None => result.add_message(CmdMessage::info(format!(
            "No product with id {}, nothing removed",
            id
        ))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_exactly_the_matching_entry() {
        let fixture = StoreFixture::seeded();
        let mut store = fixture.store;

        let result = run(&mut store, "4").unwrap();
        assert_eq!(result.listed_products.len(), 5);
        assert!(result.listed_products.iter().all(|p| p.id != "4"));
        assert_eq!(result.affected_products[0].name, "Classic Running Shoes");

        // Persisted too
        assert_eq!(store.load_products().unwrap().len(), 5);
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let fixture = StoreFixture::seeded();
        let mut store = fixture.store;

        let result = run(&mut store, "does-not-exist").unwrap();
        assert_eq!(result.listed_products.len(), 6);
        assert!(result.affected_products.is_empty());
        assert_eq!(store.load_products().unwrap().len(), 6);
    }
}
