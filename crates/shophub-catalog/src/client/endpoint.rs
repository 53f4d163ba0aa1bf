//! Base-URL normalisation and host extraction for the catalog client.

use reqwest::Url;

use crate::error::CatalogError;

/// Parses `base_url` and forces exactly one trailing slash, so that
/// `Url::join("products")` appends to the configured path instead of
/// replacing its last segment.
///
/// Given `"https://fakestoreapi.com"`, returns `"https://fakestoreapi.com/"`;
/// given `"http://localhost:9000/api/"`, returns `"http://localhost:9000/api/"`.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<Url, CatalogError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: "expected an http(s) URL".to_owned(),
        });
    }

    Ok(url)
}

/// Extracts the hostname from a URL for log fields.
///
/// Falls back to the full URL string if parsing fails.
pub(crate) fn extract_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
