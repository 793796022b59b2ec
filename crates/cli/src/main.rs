//! Comercial Torres client - catalog browsing, cart, and checkout.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! torres products
//! torres products --search zapatillas --category HOMBRE
//! torres products show 1
//!
//! # Drive the cart (persisted in the data directory)
//! torres cart add 1 --size 42 --color Negro
//! torres cart show
//! torres cart remove 1
//! torres cart clear
//!
//! # Sign in and check out
//! torres login ana@example.com
//! torres checkout
//! ```
//!
//! The cart lives in `<data-dir>/cart.json` and survives runs, like the
//! browser local storage it replaces. The backend is only consulted to
//! resolve products and to ship analytics events.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod analytics;
mod api;
mod commands;
mod session;
mod storage;

use commands::Context;

#[derive(Parser)]
#[command(name = "torres")]
#[command(author, version, about = "Comercial Torres client")]
struct Cli {
    /// Backend API base URL
    #[arg(
        long,
        global = true,
        env = "TORRES_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    /// Directory holding device-local state (cart, session, receipts)
    #[arg(long, global = true, env = "TORRES_DATA_DIR", default_value = ".torres")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        /// Case-insensitive search against name and brand
        #[arg(long)]
        search: Option<String>,

        /// Category label (HOMBRE, MUJER, INFANTIL)
        #[arg(long)]
        category: Option<String>,

        #[command(subcommand)]
        action: Option<ProductsAction>,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Sign in locally as the given email
    Login {
        /// Email address
        email: String,
    },
    /// Sign out
    Logout,
    /// Complete the order in the cart
    Checkout,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// Show one product in detail
    Show {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart contents
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: i32,

        /// Size selection (e.g. 38)
        #[arg(long)]
        size: Option<String>,

        /// Color selection (e.g. Negro)
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a product (all its variants)
    Remove {
        /// Product id
        id: i32,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::new(&cli.api_url, cli.data_dir);

    match cli.command {
        Commands::Products {
            search,
            category,
            action,
        } => match action {
            Some(ProductsAction::Show { id }) => commands::products::show(&ctx, id).await?,
            None => {
                commands::products::list(&ctx, search.as_deref(), category.as_deref()).await?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx)?,
            CartAction::Add { id, size, color } => {
                commands::cart::add(&ctx, id, size, color).await?;
            }
            CartAction::Remove { id } => commands::cart::remove(&ctx, id)?,
            CartAction::Clear => commands::cart::clear(&ctx)?,
        },
        Commands::Login { email } => commands::auth::login(&ctx, &email).await?,
        Commands::Logout => commands::auth::logout(&ctx).await?,
        Commands::Checkout => commands::checkout::run(&ctx).await?,
    }
    Ok(())
}
