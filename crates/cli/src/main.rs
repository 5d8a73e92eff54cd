//! Cartwheel CLI - the user-facing storefront surface.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! cartwheel catalog
//!
//! # Show the current cart with totals
//! cartwheel cart show
//!
//! # Add one unit of product 1
//! cartwheel cart add --id 1
//!
//! # Set a line item's quantity
//! cartwheel cart set-qty --id 1 --quantity 3
//!
//! # Remove a line item
//! cartwheel cart remove --id 1
//!
//! # Check out: print a confirmation with the total, then clear the cart
//! cartwheel checkout
//! ```
//!
//! Configuration comes from the environment (see
//! `cartwheel_storefront::config`); the cart persists between invocations
//! in the configured storage directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cartwheel")]
#[command(author, version, about = "Cartwheel storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Catalog,
    /// Inspect or mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out the current cart
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product id from the catalog
        #[arg(short, long)]
        id: i64,
    },
    /// Remove a line item from the cart
    Remove {
        /// Product id of the line item
        #[arg(short, long)]
        id: i64,
    },
    /// Set a line item's quantity (0 removes it)
    SetQty {
        /// Product id of the line item
        #[arg(short, long)]
        id: i64,

        /// New quantity; validated as a non-negative integer
        #[arg(short, long)]
        quantity: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let session = commands::Session::from_env()?;

    match cli.command {
        Commands::Catalog => commands::catalog::list(&session).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&session)?,
            CartAction::Add { id } => commands::cart::add(&session, id).await?,
            CartAction::Remove { id } => commands::cart::remove(&session, id)?,
            CartAction::SetQty { id, quantity } => {
                commands::cart::set_quantity(&session, id, &quantity)?;
            }
        },
        Commands::Checkout => commands::cart::checkout(&session)?,
    }
    Ok(())
}
