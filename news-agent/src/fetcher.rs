use crate::types::{AgentError, FetchConfig, Result};
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

const BYTES_PER_MB: usize = 1024 * 1024;

/// Downloads feed documents. Retries only when `max_retries` is raised above
/// zero, and only for failures a retry can plausibly fix.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn backoff(&self) -> ExponentialBackoff<backoff::SystemClock> {
        let delay = self.config.retry_delay_seconds;
        ExponentialBackoff {
            current_interval: Duration::from_secs(delay),
            initial_interval: Duration::from_secs(delay),
            max_interval: Duration::from_secs(delay * 32),
            multiplier: 2.0,
            max_elapsed_time: Some(Duration::from_secs(delay * 60)),
            ..Default::default()
        }
    }

    fn is_retryable(err: &AgentError) -> bool {
        match err {
            AgentError::Http(_) => true,
            AgentError::HttpStatus { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            _ => false,
        }
    }

    /// Fetch the body behind `url` as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let start_time = Instant::now();
        let mut backoff = self.backoff();
        let mut attempt = 0;

        loop {
            match self.fetch_once(url).await {
                Ok(body) => {
                    info!(
                        "Fetched {} ({} bytes in {}ms)",
                        url,
                        body.len(),
                        start_time.elapsed().as_millis()
                    );
                    return Ok(body);
                }
                Err(e) if attempt < self.config.max_retries && Self::is_retryable(&e) => {
                    let Some(delay) = backoff.next_backoff() else {
                        return Err(e);
                    };
                    attempt += 1;
                    warn!("Attempt {} failed for {}, retrying in {:?}: {}", attempt, url, delay, e);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    if attempt > 0 {
                        error!("Giving up on {} after {} attempts", url, attempt + 1);
                    }
                    return Err(e);
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let limit = self.config.max_feed_size_mb * BYTES_PER_MB;
        if let Some(length) = response.content_length() {
            if length as usize > limit {
                return Err(AgentError::FeedTooLarge {
                    size_mb: length as usize / BYTES_PER_MB,
                });
            }
        }

        let body = response.text().await?;
        if body.len() > limit {
            return Err(AgentError::FeedTooLarge {
                size_mb: body.len() / BYTES_PER_MB,
            });
        }
        Ok(body)
    }
}
