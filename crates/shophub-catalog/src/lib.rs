pub mod client;
pub mod error;
pub mod source;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use source::ProductSource;
