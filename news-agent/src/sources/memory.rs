use crate::traits::FeedClient;
use crate::types::{AgentError, RawFeed, Result};
use crate::FeedParser;
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Canned {
    Feed(RawFeed),
    Failure(String),
}

/// Serves canned feeds by URL. Unknown URLs fail like an unreachable host.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeedClient {
    feeds: HashMap<String, Canned>,
}

impl MemoryFeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, feed: RawFeed) -> Self {
        self.feeds.insert(url.to_string(), Canned::Feed(feed));
        self
    }

    /// Register a feed document in RSS or Atom form.
    pub fn with_document(self, url: &str, xml: &str) -> Result<Self> {
        let feed = FeedParser::parse(xml)?;
        Ok(self.with_feed(url, feed))
    }

    pub fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.feeds
            .insert(url.to_string(), Canned::Failure(message.to_string()));
        self
    }
}

#[async_trait]
impl FeedClient for MemoryFeedClient {
    async fn fetch(&self, url: &str) -> Result<RawFeed> {
        match self.feeds.get(url) {
            Some(Canned::Feed(feed)) => Ok(feed.clone()),
            Some(Canned::Failure(message)) => Err(AgentError::General(message.clone())),
            None => Err(AgentError::FeedUnavailable {
                url: url.to_string(),
            }),
        }
    }

    fn client_name(&self) -> String {
        format!("memory ({} feeds)", self.feeds.len())
    }
}
