//! # Seed Data Generator
//!
//! Populates a data directory with sample products and clients for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default data directory
//! cargo run -p tienda-store --bin seed
//!
//! # Custom directory and product count
//! cargo run -p tienda-store --bin seed -- --dir ./data --count 40
//! ```
//!
//! Each product gets a deterministic pseudo-random price, cost, and stock
//! derived from its index, so repeated runs over a wiped directory produce
//! the same catalog.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tienda_core::{Client, Product};
use tienda_store::{new_record_id, Store, StoreConfig};

/// Product names for realistic corner-store test data.
const PRODUCT_NAMES: &[&str] = &[
    "Coca-Cola 600ml",
    "Agua Ciel 1L",
    "Jugo del Valle Mango",
    "Cafe de olla 500g",
    "Pan dulce concha",
    "Bolillo",
    "Tortillas 1kg",
    "Leche Lala entera 1L",
    "Queso Oaxaca 400g",
    "Crema acida 200ml",
    "Huevos docena",
    "Frijol negro 1kg",
    "Arroz 1kg",
    "Azucar estandar 1kg",
    "Sal de mesa 1kg",
    "Aceite vegetal 1L",
    "Sabritas original",
    "Galletas Marias",
    "Chocolate Abuelita",
    "Jabon Zote",
    "Papel higienico 4 rollos",
    "Detergente 1kg",
    "Veladora",
    "Chiles jalapenos lata",
    "Atun en agua lata",
];

/// Client names for sample records.
const CLIENT_NAMES: &[&str] = &[
    "Maria Lopez",
    "Pedro Ramirez",
    "Lucia Fernandez",
    "Jorge Castillo",
    "Ana Torres",
    "Miguel Soto",
    "Carmen Diaz",
    "Raul Mendoza",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = PRODUCT_NAMES.len();
    let mut dir: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(PRODUCT_NAMES.len());
                    i += 1;
                }
            }
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    dir = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tienda POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate");
                println!("  -d, --dir <PATH>   Data directory (default: per-user data dir)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = match dir {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::default_dir()?,
    };

    println!("Tienda POS Seed Data Generator");
    println!("==============================");
    println!("Data dir: {}", config.data_dir().display());
    println!("Products: {}", count);
    println!();

    let store = Store::open(config);

    // Refuse to seed over existing data
    let existing = store.products().count()?;
    if existing > 0 {
        println!("Data directory already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the JSON documents to regenerate.");
        return Ok(());
    }

    println!("Generating products...");
    let mut products = Vec::with_capacity(count);
    for seed in 0..count {
        products.push(generate_product(seed));
    }
    store.products().save_all(&products)?;
    info!(count = products.len(), "Products seeded");

    println!("Generating clients...");
    let clients: Vec<Client> = CLIENT_NAMES
        .iter()
        .enumerate()
        .map(|(seed, name)| generate_client(seed, name))
        .collect();
    for client in &clients {
        store.clients().upsert(client)?;
    }
    info!(count = clients.len(), "Clients seeded");

    println!();
    println!("Seeded {} products, {} clients", products.len(), clients.len());
    println!("Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic pseudo-random data.
fn generate_product(seed: usize) -> Product {
    let name = PRODUCT_NAMES[seed % PRODUCT_NAMES.len()];

    // Price: $0.99 - $8.99, cost 60-80% of price, stock 0-60
    let price_cents = 99 + ((seed * 37) % 800) as i64;
    let cost_pct = 60 + (seed % 20) as i64;
    let stock = ((seed * 13) % 61) as i64;

    Product::new(new_record_id(), name, price_cents)
        .with_cost(price_cents * cost_pct / 100)
        .with_stock(stock)
}

/// Generates a single client record.
fn generate_client(seed: usize, name: &str) -> Client {
    let mut client = Client::new(new_record_id(), name);
    client.phone = Some(format!("555-01{:02}", seed));
    client.email = Some(format!(
        "{}@example.com",
        name.to_lowercase().replace(' ', ".")
    ));
    client
}
