//! Cart reducer: add, set quantity, remove, and clear over lines keyed by
//! product id.
//!
//! The cart keeps insertion order and at most one line per product id. A
//! line whose quantity would drop to zero or below is removed instead.
//!
//! Mutations that would push a quantity past `u32::MAX`, or any amount
//! (line total, subtotal, taxed total) past the `Decimal` range, are
//! rejected and leave the cart as it was.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checkout::OrderTotals;
use crate::products::Product;
use crate::CoreError;

/// One product in the cart together with its quantity.
///
/// Serialized flat (product fields plus `quantity`), the same shape the
/// cart has always been stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always `>= 1` for lines produced by [`Cart`] operations.
    pub quantity: u32,
}

impl CartLine {
    /// `price × quantity` for this line.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AmountOverflow`] if the product of price and
    /// quantity does not fit in a `Decimal`.
    pub fn line_total(&self) -> Result<Decimal, CoreError> {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                CoreError::AmountOverflow(format!("line total for product {}", self.product.id))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps lines as loaded from storage, without re-validating them.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn line(&self, id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price × quantity` across all lines.
    ///
    /// Carts built through [`Cart::add`] and [`Cart::set_quantity`] always
    /// succeed here; a cart loaded from storage may not.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AmountOverflow`] if a line total or the sum does
    /// not fit in a `Decimal`.
    pub fn subtotal(&self) -> Result<Decimal, CoreError> {
        self.lines.iter().try_fold(Decimal::ZERO, |acc, line| {
            acc.checked_add(line.line_total()?)
                .ok_or_else(|| CoreError::AmountOverflow("cart subtotal".to_string()))
        })
    }

    /// Adds `qty` units of `product`, incrementing an existing line or
    /// appending a new one. `qty == 0` leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// - [`CoreError::QuantityOverflow`] if the line would exceed `u32::MAX` units.
    /// - [`CoreError::AmountOverflow`] if the order total would leave the `Decimal` range.
    ///
    /// The cart is unchanged on error.
    pub fn add(&mut self, product: &Product, qty: u32) -> Result<(), CoreError> {
        if qty == 0 {
            return Ok(());
        }

        let mut lines = self.lines.clone();
        if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line
                .quantity
                .checked_add(qty)
                .ok_or(CoreError::QuantityOverflow {
                    id: product.id,
                    max: u32::MAX,
                })?;
        } else {
            lines.push(CartLine {
                product: product.clone(),
                quantity: qty,
            });
        }
        self.commit(lines)
    }

    /// Overwrites the quantity of line `id`; `n <= 0` removes the line.
    /// Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Cart::add`]; `n > u32::MAX` is a [`CoreError::QuantityOverflow`].
    pub fn set_quantity(&mut self, id: u64, n: i64) -> Result<(), CoreError> {
        if n <= 0 {
            self.remove(id);
            return Ok(());
        }
        if self.line(id).is_none() {
            return Ok(());
        }

        let quantity = u32::try_from(n).map_err(|_| CoreError::QuantityOverflow {
            id,
            max: u32::MAX,
        })?;
        let mut lines = self.lines.clone();
        for line in lines.iter_mut().filter(|l| l.product.id == id) {
            line.quantity = quantity;
        }
        self.commit(lines)
    }

    /// Removes line `id`. Returns `true` if a line was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Replaces the lines only if the resulting cart can still be totalled.
    fn commit(&mut self, lines: Vec<CartLine>) -> Result<(), CoreError> {
        let candidate = Cart { lines };
        OrderTotals::from_subtotal(candidate.subtotal()?)?;
        *self = candidate;
        Ok(())
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
