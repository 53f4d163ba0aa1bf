//! HTTP client for the product catalog API.

mod endpoint;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shophub_core::Product;

use crate::error::CatalogError;

pub(crate) use endpoint::extract_host;

/// HTTP client for the read-only catalog endpoints:
/// `GET /products`, `GET /products/categories`, and `GET /products/{id}`.
///
/// Every call is a single request: there is no retry, caching, or
/// pagination. Non-2xx responses surface as typed errors.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with a configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if `base_url` is not an
    /// http(s) URL, or [`CatalogError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let base_url = endpoint::normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates a client from application config.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &shophub_core::AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.catalog_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// The normalised base URL (always ends in `/`).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the full product list.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] on HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`CatalogError::Http`] on network or TLS failure.
    /// - [`CatalogError::Deserialize`] if the body is not a product array.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint_url("products")?;
        let body = self.get_text(&url).await?;
        parse_json(&body, "product list")
    }

    /// Fetches the category labels.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_products`].
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint_url("products/categories")?;
        let body = self.get_text(&url).await?;
        parse_json(&body, "category list")
    }

    /// Fetches a single product by id.
    ///
    /// Returns `Ok(None)` on HTTP 404, and also when the catalog answers
    /// `200` with an empty or `null` body, which is how the public catalog
    /// reports unknown ids.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] on a non-2xx status other than 404.
    /// - [`CatalogError::Http`] on network or TLS failure.
    /// - [`CatalogError::Deserialize`] if a non-empty body is not a product.
    pub async fn fetch_product(&self, id: u64) -> Result<Option<Product>, CatalogError> {
        let url = self.endpoint_url(&format!("products/{id}"))?;
        let body = match self.get_text(&url).await {
            Ok(body) => body,
            Err(CatalogError::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            tracing::debug!(id, "catalog returned an empty body for product");
            return Ok(None);
        }

        parse_json(trimmed, &format!("product {id}")).map(Some)
    }

    /// Joins `path` onto the base URL.
    fn endpoint_url(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }

    /// Sends a GET, maps non-2xx statuses to typed errors, and returns the body.
    async fn get_text(&self, url: &Url) -> Result<String, CatalogError> {
        tracing::debug!(url = %url, "catalog request");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

fn parse_json<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, CatalogError> {
    serde_json::from_str::<T>(body).map_err(|e| CatalogError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
