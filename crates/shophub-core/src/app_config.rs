use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the product catalog API, without a trailing `/products`.
    pub catalog_url: String,
    /// Form-relay URL that accepts checkout submissions.
    pub order_endpoint: String,
    /// Directory backing the local key-value store (cart, theme).
    pub data_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Replaces the built-in supplemental product list when set.
    pub supplemental_path: Option<PathBuf>,
    pub default_country: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The relay form id is a write credential.
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog_url", &self.catalog_url)
            .field("order_endpoint", &"[redacted]")
            .field("data_dir", &self.data_dir)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("supplemental_path", &self.supplemental_path)
            .field("default_country", &self.default_country)
            .finish()
    }
}
