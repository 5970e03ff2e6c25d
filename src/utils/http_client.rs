use async_trait::async_trait;
use reqwest::{Client, StatusCode, redirect};
use std::time::Duration;
use tracing::{debug, trace};

use crate::config::FetchConfig;
use crate::config::defaults::DEFAULT_MAX_REDIRECTS;
use crate::errors::{AppResult, SourceError, SourceResult};
use crate::utils::url::UrlUtils;

/// Retrieves raw image bytes from a URL
///
/// Implementations must treat anything other than a `200` with a non-empty
/// body as a failure, and must give up once `timeout` elapses.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> SourceResult<Vec<u8>>;
}

/// reqwest-backed fetcher following up to ten redirects
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config(config: &FetchConfig) -> AppResult<Self> {
        Self::new(&config.user_agent)
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> SourceResult<Vec<u8>> {
        let safe_url = UrlUtils::obfuscate_credentials(url);
        trace!("GET {} (timeout {:?})", safe_url, timeout);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| SourceError::from_reqwest(safe_url.clone(), &e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SourceError::Http {
                status: status.as_u16(),
                url: safe_url,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::from_reqwest(safe_url.clone(), &e))?;
        if bytes.is_empty() {
            return Err(SourceError::EmptyBody { url: safe_url });
        }

        debug!("Fetched {} bytes from {}", bytes.len(), safe_url);
        Ok(bytes.to_vec())
    }
}
