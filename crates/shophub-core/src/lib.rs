pub mod app_config;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;
pub mod supplemental;

pub use app_config::{AppConfig, Environment};
pub use browse::{distinct_categories, filter_products, matches_query, CategoryFilter, SortKey};
pub use cart::{Cart, CartLine};
pub use checkout::{format_currency, CheckoutForm, OrderTotals, TAX_RATE};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Product, Rating};
pub use supplemental::{builtin_supplemental, load_supplemental, supplemental_products};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read supplemental products file {path}: {source}")]
    SupplementalIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse supplemental products: {0}")]
    SupplementalParse(#[from] serde_yaml::Error),

    #[error("supplemental products validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid sort key \"{0}\": expected default, price-low, price-high, or rating")]
    InvalidSortKey(String),

    /// A price, line total, or order total does not fit in a `Decimal`.
    #[error("{0} is out of range")]
    AmountOverflow(String),

    #[error("quantity for product {id} would exceed {max}")]
    QuantityOverflow { id: u64, max: u32 },
}
