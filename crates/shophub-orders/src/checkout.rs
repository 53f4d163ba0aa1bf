//! The checkout flow: validate, submit once, clear the cart on success.

use chrono::{DateTime, Utc};
use shophub_core::{CheckoutForm, OrderTotals};
use shophub_store::CartStore;

use crate::client::OrderClient;
use crate::error::OrderError;
use crate::submission::OrderSubmission;

/// What the user is shown after a successful order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderReceipt {
    pub totals: OrderTotals,
    pub total_items: u64,
    pub order_date: DateTime<Utc>,
    /// `false` when the relay accepted the order but the stored cart could
    /// not be removed. The order must not be submitted again.
    pub cart_cleared: bool,
}

/// Submits the current cart as an order.
///
/// Validation happens before any request is made. The relay is contacted
/// exactly once; on success the cart is cleared (its stored key removed),
/// on failure the cart is left as it was so the user can try again.
///
/// Once the relay has accepted the order a receipt is always returned. A
/// failure to clear the cart afterwards is logged and reported through
/// [`OrderReceipt::cart_cleared`].
///
/// # Errors
///
/// - [`OrderError::EmptyCart`] if there is nothing to order.
/// - [`OrderError::MissingField`] for the first blank required field.
/// - [`OrderError::Amount`] if the cart cannot be totalled.
/// - [`OrderError::Http`] / [`OrderError::UnexpectedStatus`] if the relay
///   cannot be reached or rejects the order.
pub async fn place_order(
    client: &OrderClient,
    carts: &mut CartStore,
    form: &CheckoutForm,
    now: DateTime<Utc>,
) -> Result<OrderReceipt, OrderError> {
    if carts.cart().is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if let Some(field) = form.first_missing_field() {
        return Err(OrderError::MissingField(field));
    }

    let submission = OrderSubmission::new(form, carts.cart(), now)?;
    let fields = submission.to_form_fields()?;

    if let Err(e) = client.submit(&fields).await {
        tracing::warn!(
            host = client.host(),
            error = %e,
            items = submission.total_items,
            "order submission failed; cart kept"
        );
        return Err(e);
    }

    let cart_cleared = match carts.clear() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                error = %e,
                items = submission.total_items,
                "order placed, but the local cart could not be cleared"
            );
            false
        }
    };
    tracing::info!(
        items = submission.total_items,
        total = %submission.totals.total,
        "order placed"
    );

    Ok(OrderReceipt {
        totals: submission.totals,
        total_items: submission.total_items,
        order_date: submission.order_date,
        cart_cleared,
    })
}
