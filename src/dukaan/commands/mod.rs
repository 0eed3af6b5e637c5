use crate::model::{Category, Product, ProductVariant, StoreConfig};
use rust_decimal::Decimal;

pub mod auth;
pub mod browse;
pub mod config;
pub mod delete;
pub mod order;
pub mod save;
pub mod view;
pub mod wishlist;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result returned by every command; the CLI decides how to
/// render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products a mutation touched
    pub affected_products: Vec<Product>,
    /// Products a read produced, in display order
    pub listed_products: Vec<Product>,
    pub config: Option<StoreConfig>,
    pub order_link: Option<String>,
    pub authed: Option<bool>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_order_link(mut self, link: String) -> Self {
        self.order_link = Some(link);
        self
    }

    pub fn with_authed(mut self, authed: bool) -> Self {
        self.authed = Some(authed);
        self
    }
}

/// Editable product fields as supplied by a caller. The save command turns
/// a draft into a catalog entry, generating the id and derived fields.
///
/// Callers validate `name` non-empty and `price > 0` before handing a draft
/// over; the command layer does not re-check.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    /// `None` creates; `Some` updates the matching entry
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub variants: Vec<ProductVariant>,
    pub category: Category,
    pub stock: Option<u32>,
    pub active: bool,
    pub featured: bool,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Decimal, category: Category) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            sale_price: None,
            image_url: None,
            images: Vec::new(),
            variants: Vec::new(),
            category,
            stock: None,
            active: true,
            featured: false,
        }
    }

    /// Start a draft from an existing product, for edit flows.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            sale_price: product.sale_price,
            image_url: product.image_url.clone(),
            images: product.images.clone(),
            variants: product.variants.clone(),
            category: product.category,
            stock: Some(product.stock),
            active: product.active,
            featured: product.featured,
        }
    }
}
