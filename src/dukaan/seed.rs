//! Fixed records used to seed an empty store: the 6-product sample catalog
//! and the default storefront configuration.

use crate::model::{Category, ContactBlock, Product, ProductVariant, StoreConfig};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

fn now_millis() -> DateTime<Utc> {
    // Persisted timestamps are epoch milliseconds; keep in-memory values at
    // the same precision so a round trip compares equal.
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap_or_else(Utc::now)
}

fn variant(id: &str, name: &str, price: i64, stock: u32) -> ProductVariant {
    ProductVariant {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
        stock,
        image: None,
    }
}

/// The sample catalog written on first load. All products are active.
pub fn initial_products() -> Vec<Product> {
    let now = now_millis();
    vec![
        Product {
            id: "1".to_string(),
            name: "Premium Leather Wallet".to_string(),
            description: Some(
                "Handcrafted genuine leather wallet with RFID protection. \
                 Available in multiple finishes."
                    .to_string(),
            ),
            price: Decimal::from(1499),
            sale_price: Some(Decimal::from(999)),
            discount_percent: 33,
            image_url: Some(
                "https://images.unsplash.com/photo-1627123424574-18bd03048ca3?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ),
            images: vec![
                "https://images.unsplash.com/photo-1627123424574-18bd03048ca3?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
                "https://images.unsplash.com/photo-1517254797898-04ecd252b33f?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ],
            variants: vec![
                variant("v1", "Black Leather", 999, 20),
                variant("v2", "Brown Leather", 999, 30),
            ],
            category: Category::Fashion,
            stock: 50,
            active: true,
            featured: true,
            created_at: now,
        },
        Product {
            id: "2".to_string(),
            name: "Wireless Noise Cancelling Headphones".to_string(),
            description: Some(
                "Immersive sound experience with 30-hour battery life.".to_string(),
            ),
            price: Decimal::from(5999),
            sale_price: Some(Decimal::from(4499)),
            discount_percent: 25,
            image_url: Some(
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ),
            images: vec![
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
                "https://images.unsplash.com/photo-1583394838336-acd977736f90?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ],
            variants: vec![
                variant("v1", "Matte Black", 4499, 10),
                variant("v2", "Silver", 4699, 5),
            ],
            category: Category::Electronics,
            stock: 15,
            active: true,
            featured: true,
            created_at: now - Duration::milliseconds(100_000),
        },
        Product {
            id: "3".to_string(),
            name: "Minimalist Wall Clock".to_string(),
            description: Some(
                "Modern design silent sweep quartz movement wall clock.".to_string(),
            ),
            price: Decimal::from(1299),
            sale_price: None,
            discount_percent: 0,
            image_url: Some(
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ),
            images: Vec::new(),
            variants: Vec::new(),
            category: Category::HomeDecor,
            stock: 30,
            active: true,
            featured: false,
            created_at: now - Duration::milliseconds(200_000),
        },
        Product {
            id: "4".to_string(),
            name: "Classic Running Shoes".to_string(),
            description: Some(
                "Lightweight and breathable mesh running shoes for daily use.".to_string(),
            ),
            price: Decimal::from(2999),
            sale_price: Some(Decimal::from(2499)),
            discount_percent: 16,
            image_url: Some(
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ),
            images: vec![
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
                "https://images.unsplash.com/photo-1608231387042-66d1773070a5?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ],
            variants: vec![
                variant("v1", "Size 8", 2499, 20),
                variant("v2", "Size 9", 2499, 20),
                variant("v3", "Size 10", 2499, 20),
            ],
            category: Category::Fashion,
            stock: 100,
            active: true,
            featured: true,
            created_at: now - Duration::milliseconds(300_000),
        },
        Product {
            id: "5".to_string(),
            name: "Organic Premium Almonds (1kg)".to_string(),
            description: Some(
                "High-quality raw almonds, rich in protein and fiber. Perfect for \
                 healthy snacking."
                    .to_string(),
            ),
            price: Decimal::from(999),
            sale_price: Some(Decimal::from(850)),
            discount_percent: 15,
            image_url: Some(
                "https://images.unsplash.com/photo-1623428187969-5da2dcea5ebf?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ),
            images: Vec::new(),
            variants: Vec::new(),
            category: Category::GroceriesFood,
            stock: 200,
            active: true,
            featured: true,
            created_at: now - Duration::milliseconds(350_000),
        },
        Product {
            id: "6".to_string(),
            name: "Organic Face Serum".to_string(),
            description: Some("Vitamin C enriched serum for glowing skin.".to_string()),
            price: Decimal::from(899),
            sale_price: None,
            discount_percent: 0,
            image_url: Some(
                "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?auto=format&fit=crop&q=80&w=400"
                    .to_string(),
            ),
            images: Vec::new(),
            variants: Vec::new(),
            category: Category::BeautyPersonalCare,
            stock: 45,
            active: true,
            featured: true,
            created_at: now - Duration::milliseconds(500_000),
        },
    ]
}

/// Configuration returned when none has been saved yet. Never written to
/// storage implicitly.
pub fn default_config() -> StoreConfig {
    StoreConfig {
        hero_title: "Your Ultimate".to_string(),
        hero_highlight: "Shopping Hub".to_string(),
        hero_subtitle: "Discover a world of premium products curated for the modern \
                        aesthetic. Direct WhatsApp ordering for personalized service."
            .to_string(),
        hero_images: [
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=600&auto=format&fit=crop"
                .to_string(),
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=600&auto=format&fit=crop"
                .to_string(),
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?q=80&w=600&auto=format&fit=crop"
                .to_string(),
            "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?q=80&w=600&auto=format&fit=crop"
                .to_string(),
        ],
        contact: ContactBlock {
            phone: "+91 98467 50898".to_string(),
            whatsapp: "919846750898".to_string(),
            email: "mohdnihadkp@gmail.com".to_string(),
            instagram: "https://www.instagram.com/mohdnihadkp".to_string(),
            twitter: "https://x.com/mohdnihadkp".to_string(),
            address: "Calicut, Kerala, India - 673001".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_six_active_products() {
        let products = initial_products();
        assert_eq!(products.len(), 6);
        assert!(products.iter().all(|p| p.active));
    }

    #[test]
    fn seed_catalog_is_newest_first() {
        let products = initial_products();
        for pair in products.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
    }

    #[test]
    fn default_config_has_four_hero_images() {
        let config = default_config();
        assert_eq!(config.hero_images.len(), 4);
        assert_eq!(config.contact.whatsapp, "919846750898");
    }
}
