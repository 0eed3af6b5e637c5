use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use dukaan::api::DukaanApi;
use dukaan::commands::config::{ConfigAction, ConfigKey};
use dukaan::commands::{CmdMessage, MessageLevel, ProductDraft};
use dukaan::error::{DukaanError, Result};
use dukaan::model::{Category, Product, ProductVariant, StoreConfig};
use dukaan::query::CatalogQuery;
use dukaan::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, VariantSpec};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            category,
            featured,
            min_price,
            max_price,
            sort,
        }) => {
            let query = CatalogQuery {
                search,
                category,
                featured_only: featured,
                price_min: min_price,
                price_max: max_price,
                sort,
            };
            let result = api.browse(&query)?;
            print_products(&result.listed_products);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let result = api.show(&id)?;
            for product in &result.listed_products {
                print_product_detail(product);
            }
            Ok(())
        }
        Some(Commands::Add {
            name,
            price,
            category,
            description,
            sale_price,
            image_url,
            images,
            variants,
            stock,
            featured,
            hidden,
        }) => {
            validate_product_input(&name, price)?;
            let mut draft = ProductDraft::new(name, price, category);
            draft.description = description;
            draft.sale_price = sale_price;
            draft.image_url = image_url;
            draft.images = images;
            draft.variants = build_variants(&variants);
            draft.stock = Some(stock);
            draft.featured = featured;
            draft.active = !hidden;
            let result = api.save_product(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Edit {
            id,
            name,
            price,
            category,
            description,
            sale_price,
            image_url,
            images,
            variants,
            stock,
            active,
            featured,
        }) => {
            let current = api.show(&id)?;
            let product = current
                .listed_products
                .first()
                .ok_or_else(|| DukaanError::ProductNotFound(id.clone()))?;

            let mut draft = ProductDraft::from_product(product);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(description) = description {
                draft.description = Some(description);
            }
            if let Some(sale_price) = sale_price {
                // 0 clears the sale; the save command treats zero as "no sale"
                draft.sale_price = Some(sale_price);
            }
            if let Some(image_url) = image_url {
                draft.image_url = Some(image_url);
            }
            if !images.is_empty() {
                draft.images = images;
            }
            if !variants.is_empty() {
                draft.variants = build_variants(&variants);
            }
            if let Some(stock) = stock {
                draft.stock = Some(stock);
            }
            if let Some(active) = active {
                draft.active = active;
            }
            if let Some(featured) = featured {
                draft.featured = featured;
            }

            validate_product_input(&draft.name, draft.price)?;
            let result = api.save_product(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Remove { id }) => {
            let result = api.delete_product(&id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Login { code }) => {
            let result = api.login(&code)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Logout) => {
            let result = api.logout()?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Status) => {
            let result = api.auth_status()?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Wishlist { id }) => {
            let result = match id {
                Some(id) => api.wishlist_toggle(&id)?,
                None => {
                    let result = api.wishlist()?;
                    print_products(&result.listed_products);
                    result
                }
            };
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Order { id, variant }) => {
            let result = api.order_link(&id, variant.as_deref())?;
            if let Some(link) = &result.order_link {
                println!("{}", link);
            }
            Ok(())
        }
        Some(Commands::Config { key, value }) => {
            let action = match (&key, value) {
                (None, _) => ConfigAction::Show,
                (Some(key), Some(value)) => {
                    let key: ConfigKey = key.parse().map_err(DukaanError::Api)?;
                    ConfigAction::Set(key, value)
                }
                (Some(_), None) => ConfigAction::Show,
            };
            let result = api.config(action)?;
            if let Some(config) = &result.config {
                match key.as_deref() {
                    Some(raw) if result.messages.is_empty() => {
                        let parsed: ConfigKey = raw.parse().map_err(DukaanError::Api)?;
                        println!("{} = {}", raw, config_value(config, parsed));
                    }
                    _ => print_config(config),
                }
            }
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Categories) => {
            for category in Category::ALL {
                println!("{}", category);
            }
            Ok(())
        }
        Some(Commands::Init) => {
            let result = api.init()?;
            print_messages(&result.messages);
            Ok(())
        }
        None => {
            let result = api.browse(&CatalogQuery::default())?;
            print_products(&result.listed_products);
            Ok(())
        }
    }
}

fn init_api(cli: &Cli) -> Result<DukaanApi<FileStore>> {
    let root = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var_os("DUKAAN_HOME").map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "dukaan", "dukaan").map(|dirs| dirs.data_dir().to_path_buf())
        })
        .ok_or_else(|| DukaanError::Store("Could not determine a data directory".to_string()))?;
    Ok(DukaanApi::new(FileStore::new(root)))
}

/// Required-field checks happen here, before anything reaches the mutation
/// layer: no partial save can occur.
fn validate_product_input(name: &str, price: rust_decimal::Decimal) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DukaanError::Api("Product name cannot be empty".to_string()));
    }
    if price <= rust_decimal::Decimal::ZERO {
        return Err(DukaanError::Api("Price must be positive".to_string()));
    }
    Ok(())
}

fn build_variants(specs: &[VariantSpec]) -> Vec<ProductVariant> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| ProductVariant {
            id: format!("v{}", i + 1),
            name: spec.name.clone(),
            price: spec.price,
            stock: spec.stock,
            image: None,
        })
        .collect()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const FEATURED_MARKER: &str = "★";

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    for product in products {
        let id_col = format!("{:<10}", short_id(&product.id));
        let price_plain = plain_price(product);
        let stock_plain = if product.stock == 0 {
            "out of stock".to_string()
        } else {
            format!("stock {}", product.stock)
        };
        let marker = if product.featured { FEATURED_MARKER } else { " " };
        let time_ago = format_time_ago(product.created_at);

        // Column math runs on the uncolored strings; escape codes have no
        // display width.
        let fixed = id_col.width() + price_plain.width() + stock_plain.width() + TIME_WIDTH + 8;
        let available = LINE_WIDTH.saturating_sub(fixed).max(20);
        let label = truncate_to_width(
            &format!("{}  {}", product.name, product.category.name()),
            available,
        );
        let padding = available.saturating_sub(label.width());

        let price = if product.discount_percent > 0 {
            format!(
                "{} {}",
                price_plain,
                format!("({}% off)", product.discount_percent).green()
            )
        } else {
            price_plain.clone()
        };
        let stock = if product.stock == 0 {
            stock_plain.red().to_string()
        } else {
            stock_plain
        };
        let marker = if product.featured {
            marker.yellow().to_string()
        } else {
            marker.to_string()
        };

        println!(
            "{} {}{} {}  {} {}  {}",
            id_col,
            label,
            " ".repeat(padding),
            price,
            marker,
            stock,
            time_ago.dimmed()
        );
    }
}

fn print_product_detail(product: &Product) {
    println!(
        "{} {}",
        product.name.bold(),
        if product.featured {
            FEATURED_MARKER.yellow().to_string()
        } else {
            String::new()
        }
    );
    println!("--------------------------------");
    println!("id:        {}", product.id);
    println!("category:  {}", product.category);
    println!("price:     {}", format_price(product));
    println!("stock:     {}", product.stock);
    if !product.active {
        println!("{}", "hidden from storefront".yellow());
    }
    if let Some(description) = &product.description {
        println!("\n{}", description);
    }
    let images = product.display_images();
    if !images.is_empty() {
        println!();
        for url in images {
            println!("  {}", url.dimmed());
        }
    }
    if !product.variants.is_empty() {
        println!("\nvariants:");
        for variant in &product.variants {
            println!(
                "  {:<4} {:<24} ₹{:<10} stock {}",
                variant.id, variant.name, variant.price, variant.stock
            );
        }
    }
}

fn print_config(config: &StoreConfig) {
    println!("hero-title      = {}", config.hero_title);
    println!("hero-highlight  = {}", config.hero_highlight);
    println!("hero-subtitle   = {}", config.hero_subtitle);
    for (i, url) in config.hero_images.iter().enumerate() {
        println!("hero-image-{}    = {}", i + 1, url);
    }
    println!("phone           = {}", config.contact.phone);
    println!("whatsapp        = {}", config.contact.whatsapp);
    println!("email           = {}", config.contact.email);
    println!("instagram       = {}", config.contact.instagram);
    println!("twitter         = {}", config.contact.twitter);
    println!("address         = {}", config.contact.address);
}

fn config_value(config: &StoreConfig, key: ConfigKey) -> String {
    match key {
        ConfigKey::HeroTitle => config.hero_title.clone(),
        ConfigKey::HeroHighlight => config.hero_highlight.clone(),
        ConfigKey::HeroSubtitle => config.hero_subtitle.clone(),
        ConfigKey::HeroImage(n) => config.hero_images[n - 1].clone(),
        ConfigKey::Phone => config.contact.phone.clone(),
        ConfigKey::Whatsapp => config.contact.whatsapp.clone(),
        ConfigKey::Email => config.contact.email.clone(),
        ConfigKey::Instagram => config.contact.instagram.clone(),
        ConfigKey::Twitter => config.contact.twitter.clone(),
        ConfigKey::Address => config.contact.address.clone(),
    }
}

fn format_price(product: &Product) -> String {
    if product.discount_percent > 0 {
        format!(
            "₹{} {} {}",
            product.effective_price(),
            format!("₹{}", product.price).dimmed().strikethrough(),
            format!("({}% off)", product.discount_percent).green()
        )
    } else {
        format!("₹{}", product.effective_price())
    }
}

fn plain_price(product: &Product) -> String {
    format!("₹{}", product.effective_price())
}

fn short_id(id: &str) -> String {
    if id.chars().count() <= 10 {
        id.to_string()
    } else {
        let head: String = id.chars().take(8).collect();
        format!("{}…", head)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
