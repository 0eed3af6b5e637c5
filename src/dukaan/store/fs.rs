use super::CatalogStore;
use crate::error::{DukaanError, Result};
use crate::model::{Product, StoreConfig};
use crate::seed;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PRODUCTS_FILE: &str = "products.json";
const CONFIG_FILE: &str = "config.json";
const AUTH_FILE: &str = "auth.json";
const WISHLIST_FILE: &str = "wishlist.json";

/// File-backed store: one JSON document per record under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DukaanError::Io)?;
        }
        Ok(())
    }

    fn write_json<T: serde::Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(DukaanError::Serialization)?;
        fs::write(self.root.join(filename), content).map_err(DukaanError::Io)?;
        debug!(file = filename, "record written");
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        let path = self.root.join(PRODUCTS_FILE);
        if !path.exists() {
            // First load seeds the catalog so the storefront is never empty
            let products = seed::initial_products();
            self.write_json(PRODUCTS_FILE, &products)?;
            return Ok(products);
        }

        let content = fs::read_to_string(&path).map_err(DukaanError::Io)?;
        match serde_json::from_str(&content) {
            Ok(products) => Ok(products),
            Err(e) => {
                // Parse failure is non-fatal: fall back to the seed catalog
                // in memory, leaving the stored bytes for inspection.
                warn!(error = %e, "could not parse products.json, using seed catalog");
                Ok(seed::initial_products())
            }
        }
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.write_json(PRODUCTS_FILE, &products)
    }

    fn load_config(&self) -> Result<StoreConfig> {
        let path = self.root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(seed::default_config());
        }
        let content = fs::read_to_string(&path).map_err(DukaanError::Io)?;
        serde_json::from_str(&content).map_err(DukaanError::Serialization)
    }

    fn save_config(&mut self, config: &StoreConfig) -> Result<()> {
        self.write_json(CONFIG_FILE, config)
    }

    fn is_authed(&self) -> Result<bool> {
        let path = self.root.join(AUTH_FILE);
        if !path.exists() {
            return Ok(false);
        }
        let content = fs::read_to_string(&path).map_err(DukaanError::Io)?;
        // Anything but a literal true counts as logged out
        Ok(serde_json::from_str::<bool>(content.trim()).unwrap_or(false))
    }

    fn set_authed(&mut self, authed: bool) -> Result<()> {
        if authed {
            self.write_json(AUTH_FILE, &true)
        } else {
            let path = self.root.join(AUTH_FILE);
            if path.exists() {
                fs::remove_file(path).map_err(DukaanError::Io)?;
            }
            Ok(())
        }
    }

    fn load_wishlist(&self) -> Result<Vec<String>> {
        let path = self.root.join(WISHLIST_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(DukaanError::Io)?;
        match serde_json::from_str(&content) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!(error = %e, "could not parse wishlist.json, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_wishlist(&mut self, ids: &[String]) -> Result<()> {
        self.write_json(WISHLIST_FILE, &ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn first_load_seeds_the_catalog() {
        let (dir, store) = store();
        let products = store.load_products().unwrap();
        assert_eq!(products.len(), 6);
        assert!(products.iter().all(|p| p.active));
        assert!(dir.path().join(PRODUCTS_FILE).exists());

        // Second load reads the seeded file, not a fresh seed
        let again = store.load_products().unwrap();
        assert_eq!(again, products);
    }

    #[test]
    fn corrupt_catalog_falls_back_to_seed_without_rewriting() {
        let (dir, store) = store();
        let path = dir.path().join(PRODUCTS_FILE);
        fs::write(&path, "{not json").unwrap();

        let products = store.load_products().unwrap();
        assert_eq!(products.len(), 6);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn catalog_round_trips() {
        let (_dir, mut store) = store();
        let mut products = store.load_products().unwrap();
        products.retain(|p| p.id != "3");
        store.save_products(&products).unwrap();

        let loaded = store.load_products().unwrap();
        assert_eq!(loaded, products);
        assert_eq!(loaded.len(), 5);
    }

    #[test]
    fn config_defaults_without_a_seeding_write() {
        let (dir, store) = store();
        let config = store.load_config().unwrap();
        assert_eq!(config, crate::seed::default_config());
        assert!(!dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn config_round_trips_wholesale() {
        let (_dir, mut store) = store();
        let mut config = crate::seed::default_config();
        config.hero_title = "Everything".to_string();
        config.contact.whatsapp = "910000000000".to_string();
        store.save_config(&config).unwrap();

        assert_eq!(store.load_config().unwrap(), config);
    }

    #[test]
    fn auth_flag_lifecycle() {
        let (dir, mut store) = store();
        assert!(!store.is_authed().unwrap());

        store.set_authed(true).unwrap();
        assert!(store.is_authed().unwrap());
        assert_eq!(
            fs::read_to_string(dir.path().join(AUTH_FILE)).unwrap().trim(),
            "true"
        );

        store.set_authed(false).unwrap();
        assert!(!store.is_authed().unwrap());
        assert!(!dir.path().join(AUTH_FILE).exists());
    }

    #[test]
    fn garbage_auth_record_counts_as_logged_out() {
        let (dir, store) = store();
        fs::write(dir.path().join(AUTH_FILE), "yes please").unwrap();
        assert!(!store.is_authed().unwrap());
    }

    #[test]
    fn wishlist_round_trips_and_defaults_empty() {
        let (_dir, mut store) = store();
        assert!(store.load_wishlist().unwrap().is_empty());

        let ids = vec!["1".to_string(), "zombie".to_string()];
        store.save_wishlist(&ids).unwrap();
        assert_eq!(store.load_wishlist().unwrap(), ids);
    }
}
