use anyhow::Context;
use chrono::Utc;
use clap::Args;
use shophub_core::{format_currency, AppConfig, CheckoutForm};
use shophub_orders::{place_order, OrderClient};
use shophub_store::CartStore;

/// Contact and shipping details for `checkout`.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    /// Street address
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub zip: String,
    /// Defaults to `SHOPHUB_DEFAULT_COUNTRY`
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl CheckoutArgs {
    fn into_form(self, default_country: &str) -> CheckoutForm {
        CheckoutForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone.unwrap_or_default(),
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip,
            country: self
                .country
                .unwrap_or_else(|| default_country.to_string()),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

/// Place an order for the current cart.
///
/// On a relay failure the cart is left in place and the error says so, so
/// the same command can simply be run again.
///
/// # Errors
///
/// Returns an error for an empty cart, a blank required field, or a failed
/// submission.
pub(crate) async fn run_checkout(
    config: &AppConfig,
    args: CheckoutArgs,
    carts: &mut CartStore,
) -> anyhow::Result<()> {
    let form = args.into_form(&config.default_country);
    let client = OrderClient::from_config(config).context("failed to build order client")?;

    match place_order(&client, carts, &form, Utc::now()).await {
        Ok(receipt) => {
            println!("Order placed successfully!");
            println!(
                "{} items, total {} (subtotal {} + tax {})",
                receipt.total_items,
                format_currency(receipt.totals.total),
                format_currency(receipt.totals.subtotal),
                format_currency(receipt.totals.tax)
            );
            println!("A confirmation email will be sent to {}.", form.email.trim());
            if !receipt.cart_cleared {
                println!(
                    "Order placed, but the local cart could not be cleared; \
                     run `shophub cart clear` before checking out again."
                );
            }
            Ok(())
        }
        Err(e) if e.is_submission_failure() => Err(anyhow::Error::new(e)
            .context("order submission failed; your cart was kept, please try again")),
        Err(e) => Err(e.into()),
    }
}
