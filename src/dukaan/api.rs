//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every dukaan operation, regardless of the UI driving it.
//!
//! It dispatches to the command functions, enforces the owner gate on
//! mutating operations, and returns structured `Result<CmdResult>` values.
//! It deliberately contains no business logic (that lives in
//! `commands/*.rs`), performs no I/O of its own, and never formats output.
//!
//! ## Generic Over Storage and Verification
//!
//! `DukaanApi<S, V>` is generic over the storage backend and the owner-code
//! verifier:
//! - Production: `DukaanApi<FileStore, WeakCodeVerifier>`
//! - Testing: `DukaanApi<InMemoryStore, _>`, optionally with a stub verifier

use crate::auth::{Verifier, WeakCodeVerifier};
use crate::commands::{self, CmdResult, ProductDraft};
use crate::error::{DukaanError, Result};
use crate::query::CatalogQuery;
use crate::store::CatalogStore;

pub struct DukaanApi<S: CatalogStore, V: Verifier = WeakCodeVerifier> {
    store: S,
    verifier: V,
}

impl<S: CatalogStore> DukaanApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            verifier: WeakCodeVerifier,
        }
    }
}

impl<S: CatalogStore, V: Verifier> DukaanApi<S, V> {
    pub fn with_verifier(store: S, verifier: V) -> Self {
        Self { store, verifier }
    }

    /// The filtered, sorted storefront view.
    pub fn browse(&self, query: &CatalogQuery) -> Result<CmdResult> {
        commands::browse::run(&self.store, query)
    }

    /// One product by id, for the detail view.
    pub fn show(&self, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn save_product(&mut self, draft: ProductDraft) -> Result<CmdResult> {
        self.require_owner()?;
        commands::save::run(&mut self.store, draft)
    }

    pub fn delete_product(&mut self, id: &str) -> Result<CmdResult> {
        self.require_owner()?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn login(&mut self, code: &str) -> Result<CmdResult> {
        commands::auth::login(&mut self.store, &self.verifier, code)
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        commands::auth::logout(&mut self.store)
    }

    pub fn auth_status(&self) -> Result<CmdResult> {
        commands::auth::status(&self.store)
    }

    pub fn wishlist_toggle(&mut self, id: &str) -> Result<CmdResult> {
        commands::wishlist::toggle(&mut self.store, id)
    }

    pub fn wishlist(&self) -> Result<CmdResult> {
        commands::wishlist::list(&self.store)
    }

    /// Prefilled WhatsApp order link for a product, optionally a variant.
    pub fn order_link(&self, id: &str, variant_id: Option<&str>) -> Result<CmdResult> {
        commands::order::run(&self.store, id, variant_id)
    }

    /// Reading the configuration is public (the storefront shows it);
    /// changing it is owner-only.
    pub fn config(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        if matches!(action, commands::config::ConfigAction::Set(_, _)) {
            self.require_owner()?;
        }
        commands::config::run(&mut self.store, action)
    }

    /// Force the first-load seeding and report the catalog size.
    pub fn init(&mut self) -> Result<CmdResult> {
        let products = self.store.load_products()?;
        let mut result = CmdResult::default();
        result.add_message(commands::CmdMessage::info(format!(
            "Store ready with {} products.",
            products.len()
        )));
        Ok(result.with_listed_products(products))
    }

    fn require_owner(&self) -> Result<()> {
        if self.store.is_authed()? {
            Ok(())
        } else {
            Err(DukaanError::Unauthorized(
                "Owner mode required. Run `dukaan login <code>` first.".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::InMemoryStore;
    use rust_decimal::Decimal;

    fn draft() -> ProductDraft {
        ProductDraft::new("Desk Lamp", Decimal::from(799), Category::Electronics)
    }

    #[test]
    fn mutations_are_gated_until_login() {
        let mut api = DukaanApi::new(InMemoryStore::seeded());

        assert!(matches!(
            api.save_product(draft()),
            Err(DukaanError::Unauthorized(_))
        ));
        assert!(matches!(
            api.delete_product("1"),
            Err(DukaanError::Unauthorized(_))
        ));

        api.login("Bismillah").unwrap();
        assert!(api.save_product(draft()).is_ok());
        assert!(api.delete_product("1").is_ok());
    }

    #[test]
    fn config_show_is_public_but_set_is_gated() {
        use crate::commands::config::{ConfigAction, ConfigKey};

        let mut api = DukaanApi::new(InMemoryStore::new());
        assert!(api.config(ConfigAction::Show).is_ok());
        assert!(matches!(
            api.config(ConfigAction::Set(ConfigKey::Phone, "123".to_string())),
            Err(DukaanError::Unauthorized(_))
        ));
    }

    #[test]
    fn reads_are_public() {
        let api = DukaanApi::new(InMemoryStore::seeded());
        assert_eq!(api.browse(&CatalogQuery::default()).unwrap().listed_products.len(), 6);
        assert!(api.show("1").is_ok());
        assert!(api.order_link("1", None).is_ok());
        assert!(api.wishlist().is_ok());
    }

    #[test]
    fn failed_login_keeps_the_gate_closed() {
        let mut api = DukaanApi::new(InMemoryStore::seeded());
        api.login("wrong").unwrap();
        assert!(matches!(
            api.save_product(draft()),
            Err(DukaanError::Unauthorized(_))
        ));
    }
}
