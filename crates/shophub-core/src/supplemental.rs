//! The hand-authored product list merged after the catalog response.
//!
//! A default list is embedded at build time; a YAML file with the same shape
//! can replace it via `SHOPHUB_SUPPLEMENTAL_PATH`.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::products::Product;
use crate::ConfigError;

const BUILTIN_SUPPLEMENTAL_YAML: &str = include_str!("../data/supplemental_products.yaml");

#[derive(Debug, Deserialize)]
pub struct SupplementalFile {
    pub products: Vec<Product>,
}

/// Parse and validate the embedded supplemental list.
///
/// # Errors
///
/// Returns `ConfigError` if the embedded YAML fails to parse or validate.
pub fn builtin_supplemental() -> Result<Vec<Product>, ConfigError> {
    parse_supplemental(BUILTIN_SUPPLEMENTAL_YAML)
}

/// Load and validate a supplemental list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_supplemental(path: &Path) -> Result<Vec<Product>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SupplementalIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_supplemental(&content)
}

/// The configured supplemental list: `path` when given, otherwise the
/// embedded default.
///
/// # Errors
///
/// Propagates errors from [`load_supplemental`] or [`builtin_supplemental`].
pub fn supplemental_products(path: Option<&Path>) -> Result<Vec<Product>, ConfigError> {
    match path {
        Some(p) => load_supplemental(p),
        None => builtin_supplemental(),
    }
}

fn parse_supplemental(content: &str) -> Result<Vec<Product>, ConfigError> {
    let file: SupplementalFile = serde_yaml::from_str(content)?;
    validate_supplemental(&file)?;
    Ok(file.products)
}

fn validate_supplemental(file: &SupplementalFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for product in &file.products {
        if product.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product {} has an empty title",
                product.id
            )));
        }

        if product.category.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty category",
                product.title
            )));
        }

        if product.price < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "product '{}' has negative price {}",
                product.title, product.price
            )));
        }

        if !(0.0..=5.0).contains(&product.rating.rate) {
            return Err(ConfigError::Validation(format!(
                "product '{}' has rating {} outside 0-5",
                product.title, product.rating.rate
            )));
        }

        if !seen_ids.insert(product.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "supplemental_test.rs"]
mod tests;
