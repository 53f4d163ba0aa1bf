//! The order payload sent to the relay.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shophub_core::{format_currency, Cart, CartLine, CheckoutForm, CoreError, OrderTotals};

use crate::error::OrderError;

const NO_NOTES: &str = "No additional notes";

/// One product in the submitted order, rendered into the `products` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub id: u64,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl TryFrom<&CartLine> for OrderLine {
    type Error = CoreError;

    fn try_from(line: &CartLine) -> Result<Self, Self::Error> {
        Ok(Self {
            id: line.product.id,
            title: line.product.title.clone(),
            price: line.product.price,
            quantity: line.quantity,
            total: line.line_total()?,
        })
    }
}

/// Snapshot of a checkout: who is ordering, what, and for how much.
///
/// Built once per attempt from the form and the current cart. It does not
/// borrow the cart, so the cart can be cleared after a successful send.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub form: CheckoutForm,
    pub lines: Vec<OrderLine>,
    pub totals: OrderTotals,
    pub total_items: u64,
    pub order_date: DateTime<Utc>,
}

impl OrderSubmission {
    /// # Errors
    ///
    /// Returns [`OrderError::Amount`] if a line total, the subtotal, or the
    /// taxed total does not fit in a `Decimal`.
    pub fn new(
        form: &CheckoutForm,
        cart: &Cart,
        order_date: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        let lines = cart
            .lines()
            .iter()
            .map(OrderLine::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            form: form.clone(),
            lines,
            totals: OrderTotals::from_subtotal(cart.subtotal()?)?,
            total_items: cart.item_count(),
            order_date,
        })
    }

    /// The form fields in the order the relay receives them.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Serialize`] if the order lines cannot be
    /// rendered as JSON.
    pub fn to_form_fields(&self) -> Result<Vec<(&'static str, String)>, OrderError> {
        let products =
            serde_json::to_string_pretty(&self.lines).map_err(|e| OrderError::Serialize {
                context: "order lines".to_string(),
                source: e,
            })?;

        let notes = match self.form.notes.trim() {
            "" => NO_NOTES.to_string(),
            notes => notes.to_string(),
        };

        Ok(vec![
            ("name", self.form.full_name()),
            ("email", self.form.email.trim().to_string()),
            ("phone", self.form.phone.trim().to_string()),
            ("shippingAddress", self.form.shipping_address()),
            ("products", products),
            ("subtotal", format_currency(self.totals.subtotal)),
            ("tax", format_currency(self.totals.tax)),
            ("totalPrice", format_currency(self.totals.total)),
            ("totalItems", self.total_items.to_string()),
            ("notes", notes),
            (
                "orderDate",
                self.order_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        ])
    }
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
