use crate::config::DocsConfig;
use crate::error::{ConfigError, FetchError};
use crate::format::format_byte_size;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// Source of raw documentation pages
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches pages over HTTP with a bounded wait
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &DocsConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            timeout: config.fetch_timeout()?,
        })
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        ::log::debug!("Fetching {}", url);
        let start = Instant::now();

        match timeout(self.timeout, self.get(url)).await {
            Ok(Ok(body)) => {
                ::log::debug!(
                    "Fetched {} ({}) in {:.2} seconds",
                    url,
                    format_byte_size(body.len() as u64),
                    start.elapsed().as_secs_f64()
                );
                Ok(body)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                ::log::warn!("Timed out after {:?} fetching {}", self.timeout, url);
                Err(FetchError::Timeout {
                    url: url.to_string(),
                })
            }
        }
    }
}
