//! The cart, persisted as a whole after every mutation.

use shophub_core::{Cart, CartLine, Product};

use crate::error::StoreError;
use crate::local::{LocalStore, CART_KEY};

/// A [`Cart`] bound to a [`LocalStore`].
///
/// The stored cart is read once in [`CartStore::open`]. Each mutation applies
/// the reducer and then writes the entire cart back synchronously. `clear`
/// deletes the stored key rather than writing an empty list.
#[derive(Debug)]
pub struct CartStore {
    store: LocalStore,
    cart: Cart,
}

impl CartStore {
    /// Loads the stored cart, or starts empty if none is stored.
    ///
    /// Stored lines are taken as-is; only the JSON shape is checked.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Deserialize`] if the stored cart is malformed,
    /// or [`StoreError::Io`] if it cannot be read.
    pub fn open(store: LocalStore) -> Result<Self, StoreError> {
        let lines: Vec<CartLine> = store.get(CART_KEY)?.unwrap_or_default();
        tracing::debug!(lines = lines.len(), "loaded cart");
        Ok(Self {
            store,
            cart: Cart::from_lines(lines),
        })
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Adds `qty` units of `product` and persists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Cart`] if the reducer rejects the change (nothing
    /// is written), or another [`StoreError`] if the cart cannot be written.
    pub fn add(&mut self, product: &Product, qty: u32) -> Result<(), StoreError> {
        self.cart.add(product, qty)?;
        self.persist()
    }

    /// Overwrites the quantity of line `id` (removing it when `n <= 0`) and persists.
    ///
    /// # Errors
    ///
    /// Same as [`CartStore::add`].
    pub fn set_quantity(&mut self, id: u64, n: i64) -> Result<(), StoreError> {
        self.cart.set_quantity(id, n)?;
        self.persist()
    }

    /// Removes line `id` and persists. Returns `true` if a line was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be written.
    pub fn remove(&mut self, id: u64) -> Result<bool, StoreError> {
        let removed = self.cart.remove(id);
        self.persist()?;
        Ok(removed)
    }

    /// Deletes the stored cart, then empties the in-memory one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the stored cart cannot be deleted; the
    /// in-memory cart is then left as it was.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(CART_KEY)?;
        self.cart.clear();
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.set(CART_KEY, &self.cart)
    }
}
