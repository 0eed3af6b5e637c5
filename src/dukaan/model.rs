use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of storefront categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "Fashion")]
    Fashion,
    #[serde(rename = "Groceries & Food")]
    GroceriesFood,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    #[serde(rename = "Home Decor")]
    HomeDecor,
    #[serde(rename = "Beauty & Personal Care")]
    BeautyPersonalCare,
    #[serde(rename = "Health & Wellness")]
    HealthWellness,
    #[serde(rename = "Toys & Games")]
    ToysGames,
    #[serde(rename = "Books & Stationery")]
    BooksStationery,
    #[serde(rename = "Automotive")]
    Automotive,
    #[serde(rename = "Sports & Outdoors")]
    SportsOutdoors,
    #[serde(rename = "Baby Products")]
    BabyProducts,
    #[serde(rename = "Pet Supplies")]
    PetSupplies,
    #[serde(rename = "Garden & Tools")]
    GardenTools,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    #[serde(rename = "Arts & Crafts")]
    ArtsCrafts,
    #[serde(rename = "Musical Instruments")]
    MusicalInstruments,
    #[serde(rename = "Industrial & Scientific")]
    IndustrialScientific,
    #[serde(rename = "Jewelry & Watches")]
    JewelryWatches,
    #[serde(rename = "Luggage & Bags")]
    LuggageBags,
    #[serde(rename = "Video Games")]
    VideoGames,
}

impl Category {
    pub const ALL: [Category; 21] = [
        Category::Electronics,
        Category::Fashion,
        Category::GroceriesFood,
        Category::HomeKitchen,
        Category::HomeDecor,
        Category::BeautyPersonalCare,
        Category::HealthWellness,
        Category::ToysGames,
        Category::BooksStationery,
        Category::Automotive,
        Category::SportsOutdoors,
        Category::BabyProducts,
        Category::PetSupplies,
        Category::GardenTools,
        Category::OfficeSupplies,
        Category::ArtsCrafts,
        Category::MusicalInstruments,
        Category::IndustrialScientific,
        Category::JewelryWatches,
        Category::LuggageBags,
        Category::VideoGames,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::GroceriesFood => "Groceries & Food",
            Category::HomeKitchen => "Home & Kitchen",
            Category::HomeDecor => "Home Decor",
            Category::BeautyPersonalCare => "Beauty & Personal Care",
            Category::HealthWellness => "Health & Wellness",
            Category::ToysGames => "Toys & Games",
            Category::BooksStationery => "Books & Stationery",
            Category::Automotive => "Automotive",
            Category::SportsOutdoors => "Sports & Outdoors",
            Category::BabyProducts => "Baby Products",
            Category::PetSupplies => "Pet Supplies",
            Category::GardenTools => "Garden & Tools",
            Category::OfficeSupplies => "Office Supplies",
            Category::ArtsCrafts => "Arts & Crafts",
            Category::MusicalInstruments => "Musical Instruments",
            Category::IndustrialScientific => "Industrial & Scientific",
            Category::JewelryWatches => "Jewelry & Watches",
            Category::LuggageBags => "Luggage & Bags",
            Category::VideoGames => "Video Games",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive match against the canonical category names.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", wanted))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    /// e.g. "Size M", "Matte Black", "128GB"
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    /// Variant-specific image, overrides the product image when shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_price: Option<Decimal>,
    /// Derived from price/sale_price on every save, never edited directly
    #[serde(default)]
    pub discount_percent: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub category: Category,
    #[serde(default)]
    pub stock: u32,
    pub active: bool,
    pub featured: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Sale price when present and non-zero, else the base price.
    pub fn effective_price(&self) -> Decimal {
        match self.sale_price {
            Some(sale) if !sale.is_zero() => sale,
            _ => self.price,
        }
    }

    pub fn variant(&self, variant_id: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// Main image followed by the additional gallery images.
    pub fn display_images(&self) -> Vec<&str> {
        self.image_url
            .iter()
            .chain(self.images.iter())
            .map(String::as_str)
            .collect()
    }
}

/// Percent off, rounded half away from zero. Zero when there is no sale
/// price, the sale price is zero, or the base price is non-positive.
pub fn compute_discount(price: Decimal, sale_price: Option<Decimal>) -> u8 {
    match sale_price {
        Some(sale) if !sale.is_zero() && price > Decimal::ZERO => {
            let percent = (price - sale) / price * Decimal::from(100);
            percent
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u8()
                .unwrap_or(0)
        }
        _ => 0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBlock {
    pub phone: String,
    /// Digits-only number used for wa.me links (e.g. 919846750898)
    pub whatsapp: String,
    pub email: String,
    /// Full profile URL
    pub instagram: String,
    /// Full profile URL
    pub twitter: String,
    pub address: String,
}

/// Singleton storefront configuration. Saved wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub hero_title: String,
    pub hero_highlight: String,
    pub hero_subtitle: String,
    /// Exactly four rotating hero images
    pub hero_images: [String; 4],
    pub contact: ContactBlock,
}
