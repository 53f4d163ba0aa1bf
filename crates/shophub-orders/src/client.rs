//! HTTP client for the order relay.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::error::OrderError;

/// Posts form-encoded orders to a single relay endpoint.
///
/// One request per call. Retrying is left to the user.
pub struct OrderClient {
    client: Client,
    endpoint: Url,
}

impl OrderClient {
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidEndpoint`] if `endpoint` is not an
    /// http(s) URL, or [`OrderError::Http`] if the `reqwest::Client` cannot
    /// be built.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, OrderError> {
        let endpoint = Url::parse(endpoint).map_err(|e| OrderError::InvalidEndpoint {
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(OrderError::InvalidEndpoint {
                reason: format!("unsupported scheme {}", endpoint.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// # Errors
    ///
    /// See [`OrderClient::new`].
    pub fn from_config(config: &shophub_core::AppConfig) -> Result<Self, OrderError> {
        Self::new(
            &config.order_endpoint,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Host of the relay. The full URL carries the form id and is kept out
    /// of logs and errors.
    #[must_use]
    pub fn host(&self) -> &str {
        self.endpoint.host_str().unwrap_or("unknown")
    }

    /// Sends `fields` as `application/x-www-form-urlencoded`, preserving order.
    ///
    /// Only the status is inspected; the response body is discarded.
    ///
    /// # Errors
    ///
    /// - [`OrderError::Http`] on network, TLS, or timeout failure.
    /// - [`OrderError::UnexpectedStatus`] on a non-2xx response.
    pub async fn submit(&self, fields: &[(&'static str, String)]) -> Result<(), OrderError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrderError::UnexpectedStatus {
                status: status.as_u16(),
                host: self.host().to_string(),
            });
        }

        tracing::debug!(
            host = self.host(),
            status = status.as_u16(),
            "order relay accepted submission"
        );
        Ok(())
    }
}
