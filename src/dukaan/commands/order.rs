use crate::commands::CmdResult;
use crate::error::{DukaanError, Result};
use crate::store::CatalogStore;

/// Build the prefilled WhatsApp deep link for ordering a product,
/// optionally pinned to one of its variants. A selected variant overrides
/// the quoted price. This is fire-and-forget: the link is the whole
/// checkout flow, there is no confirmation round trip.
pub fn run<S: CatalogStore>(store: &S, id: &str, variant_id: Option<&str>) -> Result<CmdResult> {
    let products = store.load_products()?;
    let product = products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DukaanError::ProductNotFound(id.to_string()))?;

    let (price, variant_text) = match variant_id {
        Some(vid) => {
            let variant = product.variant(vid).ok_or_else(|| {
                DukaanError::Api(format!("No variant '{}' on {}", vid, product.name))
            })?;
            (variant.price, format!(" (Variant: {})", variant.name))
        }
        None => (product.effective_price(), String::new()),
    };

    let config = store.load_config()?;
    let message = format!(
        "Hello! I would like to purchase: {}{}. Price: ₹{}.",
        product.name, variant_text, price
    );
    let link = format!(
        "https://wa.me/{}?text={}",
        config.contact.whatsapp,
        urlencoding::encode(&message)
    );
    Ok(CmdResult::default().with_order_link(link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn link_targets_the_configured_number() {
        let fixture = StoreFixture::seeded();
        let result = run(&fixture.store, "3", None).unwrap();
        let link = result.order_link.unwrap();
        assert!(link.starts_with("https://wa.me/919846750898?text="));
        assert!(link.contains("Minimalist%20Wall%20Clock"));
        // No sale price on the clock, so the base price is quoted
        assert!(link.contains("1299"));
    }

    #[test]
    fn sale_price_is_quoted_when_present() {
        let fixture = StoreFixture::seeded();
        let link = run(&fixture.store, "1", None).unwrap().order_link.unwrap();
        assert!(link.contains("999"));
        assert!(!link.contains("1499"));
    }

    #[test]
    fn variant_selection_overrides_the_price() {
        let fixture = StoreFixture::seeded();
        // Headphones: sale 4499, Silver variant 4699
        let link = run(&fixture.store, "2", Some("v2"))
            .unwrap()
            .order_link
            .unwrap();
        assert!(link.contains("4699"));
        assert!(link.contains("Silver"));
    }

    #[test]
    fn unknown_product_or_variant_errors() {
        let fixture = StoreFixture::seeded();
        assert!(matches!(
            run(&fixture.store, "missing", None),
            Err(DukaanError::ProductNotFound(_))
        ));
        assert!(matches!(
            run(&fixture.store, "3", Some("v9")),
            Err(DukaanError::Api(_))
        ));
    }
}
