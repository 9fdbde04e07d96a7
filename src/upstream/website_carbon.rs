//! Website Carbon API client
//!
//! Issues `GET <endpoint>?url=<percent-encoded target>` and decodes the JSON body.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::CarbonApi;
use crate::error::{ProxyError, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct WebsiteCarbonClient {
    client: Client,
    endpoint: String,
}

impl WebsiteCarbonClient {
    /// Creates a client for `endpoint`, e.g. `https://api.websitecarbon.com/site`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Full upstream URL for `target`.
    pub fn request_url(&self, target: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}url={}",
            self.endpoint,
            separator,
            urlencoding::encode(target)
        )
    }
}

#[async_trait]
impl CarbonApi for WebsiteCarbonClient {
    async fn site(&self, target: &str) -> Result<Value> {
        let request_url = self.request_url(target);
        debug!("Sending request to {}", request_url);

        let response = self.client.get(&request_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream returned {} for {}", status, target);
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Upstream returned undecodable body for {}: {}", target, e);
                Err(ProxyError::Upstream {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
