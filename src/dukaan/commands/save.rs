use crate::commands::{CmdMessage, CmdResult, ProductDraft};
use crate::error::Result;
use crate::model::{compute_discount, Product};
use crate::store::CatalogStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Create or update a catalog entry and persist the whole catalog.
///
/// Derived fields are always recomputed here: `discount_percent` from the
/// price pair, `created_at` set once at creation and preserved afterwards.
/// Optional containers come out as empty lists, never absent.
pub fn run<S: CatalogStore>(store: &mut S, draft: ProductDraft) -> Result<CmdResult> {
    let mut products = store.load_products()?;

    // A zero sale price means "no sale"
    let sale_price = draft.sale_price.filter(|sp| !sp.is_zero());
    let discount_percent = compute_discount(draft.price, sale_price);

    let existing = draft
        .id
        .as_deref()
        .and_then(|id| products.iter().position(|p| p.id == id));

    let (id, created_at, created): (String, DateTime<Utc>, bool) = match existing {
        Some(index) => (products[index].id.clone(), products[index].created_at, false),
        None => (
            draft
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            now_millis(),
            true,
        ),
    };

    let product = Product {
        id,
        name: draft.name,
        description: draft.description,
        price: draft.price,
        sale_price,
        discount_percent,
        image_url: draft.image_url,
        images: draft.images,
        variants: draft.variants,
        category: draft.category,
        stock: draft.stock.unwrap_or(0),
        active: draft.active,
        featured: draft.featured,
        created_at,
    };

    match existing {
        Some(index) => products[index] = product.clone(),
        None => products.push(product.clone()),
    }
    store.save_products(&products)?;

    let mut result = CmdResult::default().with_affected_products(vec![product.clone()]);
    let verb = if created { "added" } else { "updated" };
    result.add_message(CmdMessage::success(format!(
        "Product {} ({}): {}",
        verb, product.id, product.name
    )));
    Ok(result)
}

fn now_millis() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap_or_else(Utc::now)
}
