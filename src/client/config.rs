//! Client configuration

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

/// Default Socie API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.socie.nl";

/// Default app type sent with login requests
pub const DEFAULT_APP_TYPE: &str = "CHURCH";

/// Configuration for the Socie client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Community (app) identifier used in collection URLs
    pub app_id: String,
    /// App type sent with login requests
    pub app_type: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config for the given community id with defaults
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: app_id.into(),
            app_type: DEFAULT_APP_TYPE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("socie-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Read the config from the environment.
    ///
    /// `SOCIE_APP_ID` is required; `SOCIE_BASE_URL` and `SOCIE_APP_TYPE`
    /// override the defaults.
    pub fn from_env() -> Result<Self> {
        let app_id = env::var("SOCIE_APP_ID").map_err(|_| Error::missing_field("SOCIE_APP_ID"))?;

        let mut config = Self::new(app_id);
        if let Ok(base_url) = env::var("SOCIE_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(app_type) = env::var("SOCIE_APP_TYPE") {
            config.app_type = app_type;
        }
        Ok(config)
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the app type
    #[must_use]
    pub fn with_app_type(mut self, app_type: impl Into<String>) -> Self {
        self.app_type = app_type.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Login credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `SOCIE_EMAIL` and `SOCIE_PASSWORD`
    pub fn from_env() -> Result<Self> {
        let email = env::var("SOCIE_EMAIL").map_err(|_| Error::missing_field("SOCIE_EMAIL"))?;
        let password =
            env::var("SOCIE_PASSWORD").map_err(|_| Error::missing_field("SOCIE_PASSWORD"))?;
        Ok(Self { email, password })
    }
}
