//! Bakery API client implementation.

use bakery_core::{BakeryError, Result};
use reqwest::Response;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

/// Client for interacting with a Bakery API server.
#[derive(Clone)]
pub struct BakeryClient {
    /// Base URL of the server, without a trailing slash.
    base_url: String,

    /// HTTP client.
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RootResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

impl BakeryClient {
    /// Create a client without contacting the server.
    pub fn new(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Connect to a server, verifying it answers on `/`.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Self::new(url);
        let message = client.status().await?;
        debug!("Connected to {}: {}", client.base_url, message);
        Ok(client)
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the server's status message.
    pub async fn status(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| BakeryError::Connection(e.to_string()))?;

        let root: RootResponse = decode(response).await?;
        Ok(root.message)
    }

    /// Ask whether an item is on the menu.
    pub async fn check_item(&self, item: &str) -> Result<String> {
        let url = format!("{}/check", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("item", item)])
            .send()
            .await
            .map_err(|e| BakeryError::Connection(e.to_string()))?;

        let check: CheckResponse = decode(response).await?;
        Ok(check.response)
    }

    /// Send a free-text query.
    pub async fn submit_query(&self, query: &str) -> Result<String> {
        let url = format!("{}/check", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| BakeryError::Connection(e.to_string()))?;

        let check: CheckResponse = decode(response).await?;
        Ok(check.response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(BakeryError::Http {
            status: status.as_u16(),
            message,
        });
    }

    response.json().await.map_err(|e| BakeryError::Parse {
        context: "response body".to_string(),
        message: e.to_string(),
    })
}
