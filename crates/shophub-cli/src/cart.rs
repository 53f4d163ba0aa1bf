//! Cart command handlers. Every change is persisted before the handler returns.

use clap::Subcommand;
use shophub_core::{format_currency, AppConfig, Cart, OrderTotals};
use shophub_store::CartStore;

use crate::browse::truncate;

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Show cart lines and totals
    Show,
    /// Add a product (or more of one already in the cart)
    Add {
        id: u64,
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        qty: u32,
    },
    /// Set a line's quantity; zero or less removes it
    Set {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove { id: u64 },
    /// Empty the cart
    Clear,
}

/// # Errors
///
/// Returns an error if the product to add cannot be found, the change is
/// rejected, or the cart cannot be persisted. Only `add` reads the catalog.
pub(crate) async fn run_cart(
    command: CartCommands,
    config: &AppConfig,
    carts: &mut CartStore,
) -> anyhow::Result<()> {
    match command {
        CartCommands::Show => {}
        CartCommands::Add { id, qty } => {
            let source = crate::build_product_source(config)?;
            let product = source
                .product_by_id(id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("product {id} not found"))?;
            carts.add(&product, qty)?;
            println!("added {qty} x {}", product.title);
        }
        CartCommands::Set { id, quantity } => {
            if carts.cart().line(id).is_none() {
                anyhow::bail!("product {id} is not in the cart");
            }
            carts.set_quantity(id, quantity)?;
        }
        CartCommands::Remove { id } => {
            if !carts.remove(id)? {
                println!("product {id} was not in the cart");
            }
        }
        CartCommands::Clear => {
            carts.clear()?;
            println!("cart cleared");
            return Ok(());
        }
    }

    print_cart(carts.cart())
}

/// # Errors
///
/// Returns an error if a stored line or the cart total does not fit in a
/// `Decimal`.
pub(crate) fn print_cart(cart: &Cart) -> anyhow::Result<()> {
    if cart.is_empty() {
        println!("your cart is empty");
        return Ok(());
    }

    println!(
        "{:<6}{:<6}{:<11}{:<11}TITLE",
        "ID", "QTY", "PRICE", "TOTAL"
    );
    for line in cart.lines() {
        println!(
            "{:<6}{:<6}{:<11}{:<11}{}",
            line.product.id,
            line.quantity,
            format_currency(line.product.price),
            format_currency(line.line_total()?),
            truncate(&line.product.title, 40)
        );
    }

    let totals = OrderTotals::from_subtotal(cart.subtotal()?)?;
    println!();
    println!("Items:    {}", cart.item_count());
    println!("Subtotal: {}", format_currency(totals.subtotal));
    println!("Tax (8%): {}", format_currency(totals.tax));
    println!("Total:    {}", format_currency(totals.total));
    Ok(())
}
