//! Socie API client
//!
//! A thin wrapper around the remote API: login, URL building, and
//! collection retrieval. All schema work happens in [`crate::schema`].

use super::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use crate::models::{Membership, Module};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token_type: String,
    access_token: String,
}

/// Client for the Socie community API
#[derive(Debug, Clone)]
pub struct SocieClient {
    client: Client,
    config: ClientConfig,
    auth_header: Option<String>,
}

impl SocieClient {
    /// Create a new client for the given config
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            auth_header: None,
        }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check whether login succeeded earlier on this client
    pub fn is_logged_in(&self) -> bool {
        self.auth_header.is_some()
    }

    /// Log in and store the bearer token for subsequent requests
    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        let url = format!("{}/login/socie", self.config.base_url.trim_end_matches('/'));
        let payload = json!({
            "email": credentials.email,
            "password": credentials.password,
            "appType": self.config.app_type,
        });

        debug!("Logging in via {url}");
        let response = self
            .with_default_headers(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Login failed with status {}", status.as_u16());
            return Err(Error::auth(format!("HTTP {}: {body}", status.as_u16())));
        }

        let login: LoginResponse = response.json().await?;
        self.auth_header = Some(format!("{} {}", login.token_type, login.access_token));
        Ok(())
    }

    /// Build the URL for a community collection endpoint
    pub fn build_url(&self, postfix: &str) -> Result<Url> {
        let url = format!(
            "{}/communities/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.app_id,
            postfix.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Fetch a collection as raw records.
    ///
    /// This is the sample source for schema inference: the response must be
    /// a JSON array, typically of objects.
    pub async fn collection(&self, postfix: &str) -> Result<Vec<Value>> {
        let value: Value = self.get_json(postfix).await?;
        match value {
            Value::Array(records) => Ok(records),
            _ => Err(Error::invalid_sample(postfix)),
        }
    }

    /// Fetch all modules of the community
    pub async fn modules(&self) -> Result<Vec<Module>> {
        self.get_json("modules").await
    }

    /// Fetch all memberships of the community
    pub async fn memberships(&self) -> Result<Vec<Membership>> {
        self.get_json("memberships").await
    }

    /// Find a module by its display name
    pub async fn module_by_name(&self, name: &str) -> Result<Option<Module>> {
        let modules = self.modules().await?;
        Ok(modules.into_iter().find(|m| m.name == name))
    }

    /// Find a module by its id
    pub async fn module_by_id(&self, id: &str) -> Result<Option<Module>> {
        let modules = self.modules().await?;
        Ok(modules.into_iter().find(|m| m.id == id))
    }

    /// GET a collection endpoint and parse the JSON response
    async fn get_json<T: DeserializeOwned>(&self, postfix: &str) -> Result<T> {
        let auth = self.auth_header.as_deref().ok_or(Error::NotLoggedIn)?;
        let url = self.build_url(postfix)?;

        debug!("GET {url}");
        let response = self
            .with_default_headers(self.client.get(url.clone()))
            .header("authorization", auth)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {url} failed with status {}", status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }

    /// Headers sent with every request
    fn with_default_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("platform", "website")
            .header("content-type", "application/json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = SocieClient::new(ClientConfig::new("abc123"));
        let url = client.build_url("modules").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.socie.nl/communities/abc123/modules"
        );
    }

    #[test]
    fn test_build_url_trims_slashes() {
        let config = ClientConfig::new("abc123").with_base_url("https://example.com/");
        let client = SocieClient::new(config);
        let url = client.build_url("/memberships").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/communities/abc123/memberships"
        );
    }

    #[test]
    fn test_not_logged_in() {
        let client = SocieClient::new(ClientConfig::new("abc123"));
        assert!(!client.is_logged_in());

        let result = tokio_test::block_on(client.collection("modules"));
        assert!(matches!(result, Err(Error::NotLoggedIn)));
    }
}
