//! HTTP directory source.

use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::{DirectorySource, RawResponse};
use crate::config::Config;
use crate::error::{Error, Result};

/// Fetches a batch from the randomuser.me-compatible endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    /// Create a source from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = &config.source;
        let mut url = Url::parse(&source.endpoint).map_err(|e| {
            Error::config_validation(format!("invalid endpoint {}: {e}", source.endpoint))
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("results", &source.batch_size.to_string());
            if !source.nationality.is_empty() {
                query.append_pair("nat", &source.nationality);
            }
            if let Some(seed) = &source.seed {
                query.append_pair("seed", seed);
            }
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, url })
    }

    /// The full request URL, query included.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait::async_trait]
impl DirectorySource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_batch(&self) -> Result<RawResponse> {
        debug!(url = %self.url, "GET");
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "Directory source returned an error status");
            return Err(Error::HttpStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
