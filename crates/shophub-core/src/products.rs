use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as served by the catalog API (or authored in the supplemental
/// list). Field names match the catalog's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier, unique across the merged product list.
    pub id: u64,
    pub title: String,
    /// Unit price. Catalog responses carry a JSON number, e.g. `109.95`.
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    /// Category label, e.g. `"men's clothing"`.
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Average review score and number of reviews.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score in `0.0..=5.0`.
    pub rate: f64,
    pub count: u32,
}

impl Rating {
    /// Number of filled stars when rendering the score on a five-star scale.
    #[must_use]
    pub fn full_stars(&self) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = self.rate.clamp(0.0, 5.0).floor() as usize;
        stars
    }
}
