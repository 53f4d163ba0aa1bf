use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Sales tax applied to every order: 8%.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Contact and shipping details collected at checkout. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub notes: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "United States".to_string(),
            notes: String::new(),
        }
    }
}

impl CheckoutForm {
    /// `"{first} {last}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// `"{address}, {city}, {state} {zip}, {country}"`.
    #[must_use]
    pub fn shipping_address(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip_code.trim(),
            self.country.trim()
        )
    }

    /// Name of the first required field that is blank, if any.
    ///
    /// Phone, country, and notes are optional.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("street address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("ZIP code", &self.zip_code),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Subtotal, tax, and total for an order, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// `tax = subtotal × 0.08`, `total = subtotal × 1.08`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AmountOverflow`] if the tax or total does not
    /// fit in a `Decimal`.
    pub fn from_subtotal(subtotal: Decimal) -> Result<Self, CoreError> {
        let tax = subtotal
            .checked_mul(TAX_RATE)
            .ok_or_else(|| CoreError::AmountOverflow("order tax".to_string()))?;
        let total = subtotal
            .checked_mul(Decimal::ONE + TAX_RATE)
            .ok_or_else(|| CoreError::AmountOverflow("order total".to_string()))?;
        Ok(Self {
            subtotal: to_cents(subtotal),
            tax: to_cents(tax),
            total: to_cents(total),
        })
    }
}

fn to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as dollars with two decimals, e.g. `"$1199.99"`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", to_cents(amount))
}
