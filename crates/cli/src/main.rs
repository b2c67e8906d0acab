//! Brightcart CLI - catalog checks, cart simulation and auth tools.
//!
//! # Usage
//!
//! ```bash
//! # List the compiled-in mock catalog
//! bc-cli catalog list
//!
//! # Check a catalog file before pointing STOREFRONT_CATALOG_PATH at it
//! bc-cli catalog validate catalog.json
//!
//! # Search products
//! bc-cli search "water bottle"
//!
//! # Add products to a fresh cart and print the resulting state
//! bc-cli cart simulate atomic-habits echo-dot-4
//!
//! # Send credentials to the authentication service
//! bc-cli auth login -e shopper@example.com -p hunter2
//! ```
//!
//! # Commands
//!
//! - `catalog` - List or validate catalogs
//! - `search` - Search a catalog
//! - `cart simulate` - Replay add-to-cart actions
//! - `auth login` - Call the authenticate endpoint (needs `AUTH_BASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bc-cli")]
#[command(author, version, about = "Brightcart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect product catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Search products by title and description
    Search {
        /// Search text (case-insensitive)
        query: String,

        /// Catalog JSON file (defaults to the mock catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Drive a cart from the command line
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Call the authentication service
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products with their prices
    List {
        /// Catalog JSON file (defaults to the mock catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Parse a catalog file and report problems
    Validate {
        /// Catalog JSON file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add each product to an empty cart and print the store snapshot
    Simulate {
        /// Product ids, in the order they are added
        #[arg(required = true)]
        ids: Vec<String>,

        /// Catalog JSON file (defaults to the mock catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Send email and password to the authenticate endpoint
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brightcart=info,bc_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { catalog } => commands::catalog::list(catalog.as_deref())?,
            CatalogAction::Validate { file } => commands::catalog::validate(&file)?,
        },
        Commands::Search { query, catalog } => {
            commands::catalog::search(&query, catalog.as_deref())?;
        }
        Commands::Cart { action } => match action {
            CartAction::Simulate { ids, catalog } => {
                commands::cart::simulate(&ids, catalog.as_deref())?;
            }
        },
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => {
                commands::auth::login(&email, password).await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cart_simulate_requires_ids() {
        assert!(Cli::try_parse_from(["bc-cli", "cart", "simulate"]).is_err());
        assert!(Cli::try_parse_from(["bc-cli", "cart", "simulate", "echo-dot-4"]).is_ok());
    }
}
