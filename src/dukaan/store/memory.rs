use super::CatalogStore;
use crate::error::Result;
use crate::model::{Product, StoreConfig};
use crate::seed;

/// In-memory storage for testing and development.
/// Does NOT persist data. The catalog starts empty (no seeding) so tests
/// construct exactly the state they assert on.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    config: Option<StoreConfig>,
    authed: bool,
    wishlist: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the sample catalog.
    pub fn seeded() -> Self {
        Self {
            products: seed::initial_products(),
            ..Self::default()
        }
    }
}

impl CatalogStore for InMemoryStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        Ok(())
    }

    fn load_config(&self) -> Result<StoreConfig> {
        Ok(self.config.clone().unwrap_or_else(seed::default_config))
    }

    fn save_config(&mut self, config: &StoreConfig) -> Result<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn is_authed(&self) -> Result<bool> {
        Ok(self.authed)
    }

    fn set_authed(&mut self, authed: bool) -> Result<()> {
        self.authed = authed;
        Ok(())
    }

    fn load_wishlist(&self) -> Result<Vec<String>> {
        Ok(self.wishlist.clone())
    }

    fn save_wishlist(&mut self, ids: &[String]) -> Result<()> {
        self.wishlist = ids.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    /// A bare active product for tests that only care about a few fields.
    pub fn sample_product(id: &str, name: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price: Decimal::from(price),
            sale_price: None,
            discount_percent: 0,
            image_url: None,
            images: Vec::new(),
            variants: Vec::new(),
            category: Category::Electronics,
            stock: 10,
            active: true,
            featured: false,
            created_at: Utc::now(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::seeded(),
            }
        }

        pub fn with_product(mut self, id: &str, name: &str, price: i64) -> Self {
            let mut products = self.store.load_products().unwrap();
            let mut product = sample_product(id, name, price);
            // Stagger creation times so later additions are strictly newer
            product.created_at = Utc::now() + Duration::milliseconds(products.len() as i64);
            products.push(product);
            self.store.save_products(&products).unwrap();
            self
        }

        pub fn with_authed(mut self) -> Self {
            self.store.set_authed(true).unwrap();
            self
        }

        pub fn with_wishlist(mut self, ids: &[&str]) -> Self {
            let ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
            self.store.save_wishlist(&ids).unwrap();
            self
        }
    }
}
