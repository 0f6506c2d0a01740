//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default) against DATABASE_URI
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 500
//!
//! # Wipe the table first and point at another database
//! cargo run -p catalog-db --bin seed -- --reset --url postgresql://localhost/catalog
//! ```
//!
//! ## Generated Products
//! Names cycle through a fixed list per category. Prices and availability
//! are derived from the product index, so two runs with the same count
//! produce the same catalog.

use std::env;
use std::time::Instant;

use catalog_core::{Category, Money, Product};
use catalog_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Sample product names per category
const CATALOG: &[(Category, &[&str])] = &[
    (Category::Cloths, &["Hat", "Pants", "Shirt", "Socks", "Scarf"]),
    (Category::Food, &["Apple", "Banana", "Bread", "Cheese", "Coffee"]),
    (Category::Housewares, &["Pots", "Towels", "Lamp", "Kettle", "Rug"]),
    (Category::Automotive, &["Ford", "Chevy", "Tires", "Wipers", "Motor Oil"]),
    (Category::Tools, &["Hammer", "Wrench", "Pliers", "Saw", "Drill"]),
];

const DEFAULT_COUNT: usize = 50;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug,sqlx=warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut url: Option<String> = None;
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--url" | "-u" => {
                if i + 1 < args.len() {
                    url = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Product Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {DEFAULT_COUNT})");
                println!("  -u, --url <URL>    Database URL (default: $DATABASE_URI)");
                println!("      --reset        Delete existing products first");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {other}"),
        }
        i += 1;
    }

    let mut config = DbConfig::from_env()?;
    if let Some(url) = url {
        config.database_url = url;
    }

    println!("Product Catalog Seed Data Generator");
    println!("===================================");
    println!("Database: {}", config.redacted_url());
    println!("Products: {count}");
    println!();

    let db = Database::new(config).await?;
    let repo = db.products();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = repo.count().await?;
    if existing > 0 {
        if !reset {
            println!("⚠ Database already has {existing} products");
            println!("  Skipping seed to avoid duplicates.");
            println!("  Pass --reset to clear the table first.");
            db.close().await;
            return Ok(());
        }
        let removed = repo.delete_all().await?;
        println!("✓ Removed {removed} existing products");
    }

    println!();
    println!("Generating products...");

    let start = Instant::now();
    let mut created = Vec::with_capacity(count);

    for index in 0..count {
        let mut product = generate_product(index);

        if let Err(e) = repo.create(&mut product).await {
            eprintln!("Failed to insert {product}: {e}");
            continue;
        }

        created.push(product);

        if created.len() % 100 == 0 {
            println!("  Generated {} products...", created.len());
        }
    }

    let elapsed = start.elapsed();
    let total_value: Money = created.iter().map(|p| p.price).sum();

    println!();
    println!("✓ Generated {} products in {elapsed:?}", created.len());
    println!("  Total list value: {total_value}");

    // Verify lookups
    println!();
    println!("Products per category:");
    for category in Category::ALL {
        let in_category = repo.find_by_category(category).count().await?;
        println!("  {category:<12} {in_category}");
    }
    let available = repo.find_by_availability(true).count().await?;
    println!("  Available: {available}");

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Builds the product at `index` in the deterministic sample catalog.
fn generate_product(index: usize) -> Product {
    let (category, names) = CATALOG[index % CATALOG.len()];
    let name = names[(index / CATALOG.len()) % names.len()];

    // $0.99 - $199.99
    let price_cents = 99 + ((index * 7919) % 19_901) as i64;

    // Every fifth product is out of stock
    let available = index % 5 != 4;

    Product::new(
        name,
        format!("{name} from the {} aisle", category.as_str().to_lowercase()),
        Money::from_cents(price_cents),
        available,
        category,
    )
}
