use serde::{Deserialize, Serialize};

pub use interfaces::{
    Audience, ContentSection, GenerationRequest, GenerationResult, Hero, ResultMeta, SourceLink,
    Voice, WritingLength, WritingMode,
};

/// Static description of one configured feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDescriptor {
    pub url: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FeedDescriptor {
    pub fn new(url: &str, label: &str, tags: &[&str]) -> Self {
        Self {
            url: url.to_string(),
            label: label.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// One item as the feed client hands it over. Nothing is guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub guid: Option<String>,
    pub pub_date: Option<String>,
    pub iso_date: Option<String>,
    pub content_snippet: Option<String>,
    pub content: Option<String>,
    pub content_encoded: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeed {
    pub title: Option<String>,
    pub items: Vec<RawFeedItem>,
}

/// Canonical article, one per canonical URL once aggregation finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedArticle {
    pub id: String,
    pub title: String,
    pub url: String,
    pub publisher: String,
    pub published_at: Option<String>,
    pub summary: String,
    pub content: String,
    pub categories: Vec<String>,
    pub score: f64,
}

impl AggregatedArticle {
    pub fn with_score(self, score: f64) -> Self {
        Self { score, ..self }
    }

    pub fn source_link(&self) -> SourceLink {
        SourceLink {
            title: self.title.clone(),
            url: self.url.clone(),
            publisher: self.publisher.clone(),
            published_at: self.published_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "News-Agent/1.0".to_string(),
            timeout_seconds: 10,
            max_retries: 0,
            retry_delay_seconds: 1,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

pub const NO_RELEVANT_STORIES: &str =
    "No relevant stories found for that topic just yet. Try broadening the search.";

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("Feed not registered: {url}")]
    FeedUnavailable { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidRequest(#[from] interfaces::RequestError),

    #[error("No relevant stories found for that topic just yet. Try broadening the search.")]
    NoRelevantStories,

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;
