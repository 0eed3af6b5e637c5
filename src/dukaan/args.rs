use clap::{Parser, Subcommand};
use dukaan::model::Category;
use dukaan::query::SortOrder;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " ", env!("GIT_HASH"));

#[derive(Parser, Debug)]
#[command(name = "dukaan")]
#[command(version = LONG_VERSION)]
#[command(about = "Local-first product catalog with WhatsApp ordering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory override (also honored via DUKAAN_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

/// A variant given on the command line as `name:price:stock`,
/// e.g. `"Matte Black:4499:10"`.
#[derive(Debug, Clone)]
pub struct VariantSpec {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl FromStr for VariantSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let stock = parts.next();
        let price = parts.next();
        let name = parts.next();
        match (name, price, stock) {
            (Some(name), Some(price), Some(stock)) if !name.is_empty() => Ok(VariantSpec {
                name: name.to_string(),
                price: price
                    .parse()
                    .map_err(|_| format!("Invalid variant price: {}", price))?,
                stock: stock
                    .parse()
                    .map_err(|_| format!("Invalid variant stock: {}", stock))?,
            }),
            _ => Err(format!(
                "Invalid variant '{}' (expected name:price:stock)",
                s
            )),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products with storefront filters
    #[command(alias = "ls")]
    List {
        /// Substring to match against name or description
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category (see `dukaan categories`)
        #[arg(short, long)]
        category: Option<Category>,

        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Lowest effective price to include (inclusive)
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Highest effective price to include (inclusive)
        #[arg(long)]
        max_price: Option<Decimal>,

        /// newest, price-low or price-high
        #[arg(long, default_value = "newest")]
        sort: SortOrder,
    },

    /// Show one product in full, variants included
    #[command(alias = "v")]
    Show {
        /// Product id
        id: String,
    },

    /// Add a product to the catalog (owner)
    Add {
        /// Product name
        name: String,

        /// Base price, must be positive
        price: Decimal,

        /// Category (see `dukaan categories`)
        category: Category,

        #[arg(long)]
        description: Option<String>,

        /// Discounted price; must be below the base price
        #[arg(long)]
        sale_price: Option<Decimal>,

        /// Main image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Additional gallery image URL (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,

        /// Variant as name:price:stock (repeatable)
        #[arg(long = "variant")]
        variants: Vec<VariantSpec>,

        #[arg(long, default_value_t = 0)]
        stock: u32,

        /// Highlight on the storefront home view
        #[arg(long)]
        featured: bool,

        /// Create hidden from the storefront
        #[arg(long)]
        hidden: bool,
    },

    /// Edit an existing product; omitted flags keep their current value (owner)
    Edit {
        /// Product id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<Decimal>,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long)]
        description: Option<String>,

        /// Discounted price; 0 clears the sale
        #[arg(long)]
        sale_price: Option<Decimal>,

        #[arg(long)]
        image_url: Option<String>,

        /// Replace the gallery images (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,

        /// Replace the variants, as name:price:stock (repeatable)
        #[arg(long = "variant")]
        variants: Vec<VariantSpec>,

        #[arg(long)]
        stock: Option<u32>,

        /// true shows the product on the storefront, false hides it
        #[arg(long)]
        active: Option<bool>,

        #[arg(long)]
        featured: Option<bool>,
    },

    /// Remove a product from the catalog (owner)
    #[command(alias = "rm")]
    Remove {
        /// Product id
        id: String,
    },

    /// Enter owner mode
    Login {
        /// Owner code
        code: String,
    },

    /// Leave owner mode
    Logout,

    /// Show whether owner mode is on
    Status,

    /// Toggle a product on the wishlist, or list it when no id is given
    #[command(alias = "wl")]
    Wishlist {
        /// Product id to toggle
        id: Option<String>,
    },

    /// Print a prefilled WhatsApp order link
    Order {
        /// Product id
        id: String,

        /// Variant id (e.g. v2)
        #[arg(long)]
        variant: Option<String>,
    },

    /// Show or change the storefront configuration
    Config {
        /// Configuration key (e.g. hero-title, whatsapp, hero-image-1)
        key: Option<String>,

        /// Value to set (owner; if omitted, shows the configuration)
        value: Option<String>,
    },

    /// List the available categories
    Categories,

    /// Seed the store on first run
    Init,
}
