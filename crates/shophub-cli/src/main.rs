mod browse;
mod cart;
mod checkout;
mod theme;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shophub_catalog::{CatalogClient, ProductSource};
use shophub_core::{AppConfig, CategoryFilter, SortKey};
use shophub_store::{CartStore, LocalStore};
use tracing_subscriber::EnvFilter;

use crate::cart::CartCommands;
use crate::checkout::CheckoutArgs;
use crate::theme::ThemeCommands;

#[derive(Debug, Parser)]
#[command(name = "shophub")]
#[command(about = "ShopHub storefront command line client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products from the catalog and the supplemental list
    Products {
        /// Case-insensitive match on title or category
        #[arg(long)]
        search: Option<String>,
        /// Restrict to one category label, or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// default, price-low, price-high, or rating
        #[arg(long, default_value_t = SortKey::Default)]
        sort: SortKey,
    },
    /// Show one product in detail
    Product { id: u64 },
    /// List categories, or the products in one category
    Categories {
        #[arg(long)]
        category: Option<String>,
    },
    /// Inspect or change the persisted cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
    /// Submit the cart as an order
    Checkout(CheckoutArgs),
    /// Show or change the colour theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = shophub_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Products {
            search,
            category,
            sort,
        }) => {
            let source = build_product_source(&config)?;
            let carts = open_cart_store(&config)?;
            browse::run_products(&source, &carts, search.as_deref(), &category, sort).await;
        }
        Some(Commands::Product { id }) => {
            let source = build_product_source(&config)?;
            browse::run_product(&source, id).await?;
        }
        Some(Commands::Categories { category }) => {
            let source = build_product_source(&config)?;
            browse::run_categories(&source, category.as_deref()).await;
        }
        Some(Commands::Cart { command }) => {
            let mut carts = open_cart_store(&config)?;
            cart::run_cart(command, &config, &mut carts).await?;
        }
        Some(Commands::Checkout(args)) => {
            let mut carts = open_cart_store(&config)?;
            checkout::run_checkout(&config, args, &mut carts).await?;
        }
        Some(Commands::Theme { command }) => {
            let store = open_local_store(&config)?;
            theme::run_theme(&store, command)?;
        }
        None => {
            let source = build_product_source(&config)?;
            let carts = open_cart_store(&config)?;
            browse::run_products(&source, &carts, None, &CategoryFilter::All, SortKey::Default)
                .await;
        }
    }

    Ok(())
}

/// Logs go to stderr so command output on stdout stays pipeable.
fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_product_source(config: &AppConfig) -> anyhow::Result<ProductSource> {
    let client = CatalogClient::from_config(config).context("failed to build catalog client")?;
    let supplemental = shophub_core::supplemental_products(config.supplemental_path.as_deref())
        .context("failed to load supplemental products")?;
    Ok(ProductSource::new(client, supplemental))
}

fn open_local_store(config: &AppConfig) -> anyhow::Result<LocalStore> {
    LocalStore::open(config.data_dir.clone()).with_context(|| {
        format!(
            "failed to open data directory {}",
            config.data_dir.display()
        )
    })
}

fn open_cart_store(config: &AppConfig) -> anyhow::Result<CartStore> {
    let store = open_local_store(config)?;
    CartStore::open(store).context("failed to load stored cart")
}
