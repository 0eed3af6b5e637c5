//! # Storage Layer
//!
//! Four independent records live behind the [`CatalogStore`] trait: the
//! product catalog, the storefront configuration, the owner auth flag, and
//! the wishlist. Each is a self-contained JSON document replaced wholesale
//! on save; the store enforces no relational integrity between them
//! (deleting a product does not prune its wishlist entry — readers filter
//! stale ids out at display time).
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the command layer
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage
//!   - `products.json` — catalog, seeded with the sample catalog on first
//!     load; a malformed file is logged and replaced by the seed in memory
//!     without clobbering the stored bytes
//!   - `config.json` — storefront configuration, defaults when absent,
//!     never written implicitly
//!   - `auth.json` — owner flag (`true`), removed on logout
//!   - `wishlist.json` — array of product ids
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests; starts with an
//!   empty catalog so tests construct exactly the state they need
//!
//! All operations are synchronous, and a save replaces the whole record:
//! there is no merge, versioning, or cross-process locking. Two writers
//! race as last-write-wins by design.

use crate::error::Result;
use crate::model::{Product, StoreConfig};

pub mod fs;
pub mod memory;

/// Abstract interface over the four persisted records.
pub trait CatalogStore {
    /// Load the full catalog. Implementations seed an absent record with the
    /// sample catalog and fall back to it (non-fatally) when the stored
    /// value cannot be parsed.
    fn load_products(&self) -> Result<Vec<Product>>;

    /// Replace the whole catalog.
    fn save_products(&mut self, products: &[Product]) -> Result<()>;

    /// Load the storefront configuration, defaulting when absent. No
    /// seeding write occurs.
    fn load_config(&self) -> Result<StoreConfig>;

    /// Replace the whole configuration.
    fn save_config(&mut self, config: &StoreConfig) -> Result<()>;

    /// Read the owner flag; anything unreadable counts as logged out.
    fn is_authed(&self) -> Result<bool>;

    /// Persist the owner flag; `false` removes the record.
    fn set_authed(&mut self, authed: bool) -> Result<()>;

    /// Load the wishlisted product ids, empty when absent.
    fn load_wishlist(&self) -> Result<Vec<String>>;

    /// Replace the wishlist.
    fn save_wishlist(&mut self, ids: &[String]) -> Result<()>;
}
