//! Local persistent state: a directory-backed key-value store, the cart
//! kept in it, and the theme preference.

pub mod cart_store;
pub mod error;
pub mod local;
pub mod theme;

pub use cart_store::CartStore;
pub use error::StoreError;
pub use local::{LocalStore, CART_KEY, THEME_KEY};
pub use theme::{load_theme, save_theme, ThemePreference};
