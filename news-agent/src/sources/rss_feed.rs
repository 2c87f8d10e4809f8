use crate::rss_utils::url::{extract_domain, is_valid_feed_url};
use crate::traits::FeedClient;
use crate::types::{AgentError, FetchConfig, RawFeed, Result};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use tracing::{debug, info};

/// Feed client backed by HTTP: download with [`Fetcher`], parse with [`FeedParser`].
pub struct HttpFeedClient {
    fetcher: Fetcher,
}

impl HttpFeedClient {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(&self, url: &str) -> Result<RawFeed> {
        url::Url::parse(url)?;
        if !is_valid_feed_url(url) {
            return Err(AgentError::General(format!("Unsupported feed scheme: {}", url)));
        }

        debug!(
            "Pulling feed from {}",
            extract_domain(url).unwrap_or_else(|| url.to_string())
        );
        let content = self.fetcher.fetch_text(url).await?;
        if !FeedParser::is_valid_feed_content(&content) {
            return Err(AgentError::Parse(format!("No RSS or Atom document at {}", url)));
        }
        let feed = FeedParser::parse(&content)?;

        info!("Parsed {} items from {}", feed.items.len(), url);
        Ok(feed)
    }

    fn client_name(&self) -> String {
        format!("http ({})", self.fetcher.config().user_agent)
    }
}
