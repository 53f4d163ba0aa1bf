//! The browsable product list: catalog response followed by the
//! supplemental list.
//!
//! Catalog failures never reach the browsing flow. They are logged and the
//! source degrades to the supplemental data alone.

use shophub_core::{distinct_categories, filter_products, CategoryFilter, Product, SortKey};

use crate::client::{extract_host, CatalogClient};
use crate::error::CatalogError;

/// Merges live catalog data with a fixed supplemental list.
///
/// Nothing is cached: every call re-fetches from the catalog.
pub struct ProductSource {
    client: CatalogClient,
    supplemental: Vec<Product>,
}

impl ProductSource {
    #[must_use]
    pub fn new(client: CatalogClient, supplemental: Vec<Product>) -> Self {
        Self {
            client,
            supplemental,
        }
    }

    #[must_use]
    pub fn supplemental(&self) -> &[Product] {
        &self.supplemental
    }

    /// Catalog products followed by the supplemental list, or only the
    /// supplemental list if the catalog request fails.
    pub async fn all_products(&self) -> Vec<Product> {
        match self.client.fetch_products().await {
            Ok(mut products) => {
                tracing::debug!(
                    catalog = products.len(),
                    supplemental = self.supplemental.len(),
                    "merged catalog with supplemental products"
                );
                products.extend(self.supplemental.iter().cloned());
                products
            }
            Err(e) => {
                self.log_fallback(&e, "products");
                self.supplemental.clone()
            }
        }
    }

    /// Category labels from the catalog, or the supplemental list's
    /// categories (first-seen order) if the catalog request fails.
    pub async fn categories(&self) -> Vec<String> {
        match self.client.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                self.log_fallback(&e, "categories");
                distinct_categories(&self.supplemental)
            }
        }
    }

    /// Products whose category equals `category` exactly.
    pub async fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.all_products()
            .await
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search on title or category.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        self.browse(query, &CategoryFilter::All, SortKey::Default)
            .await
    }

    /// Fetches the merged list and applies search, category filter, and sort.
    pub async fn browse(
        &self,
        query: &str,
        category: &CategoryFilter,
        sort: SortKey,
    ) -> Vec<Product> {
        let products = self.all_products().await;
        filter_products(&products, query, category, sort)
    }

    /// Looks up one product. Supplemental ids resolve locally; anything else
    /// goes to `GET /products/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from the single-product request. A
    /// missing product is `Ok(None)`, not an error.
    pub async fn product_by_id(&self, id: u64) -> Result<Option<Product>, CatalogError> {
        if let Some(product) = self.supplemental.iter().find(|p| p.id == id) {
            return Ok(Some(product.clone()));
        }
        self.client.fetch_product(id).await
    }

    fn log_fallback(&self, error: &CatalogError, what: &str) {
        tracing::warn!(
            host = %extract_host(self.client.base_url().as_str()),
            error = %error,
            "catalog {what} unavailable; falling back to supplemental list"
        );
    }
}
