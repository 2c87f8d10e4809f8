use crate::rss_utils::time;
use crate::traits::JitterSource;
use crate::types::{AggregatedArticle, GenerationRequest, Voice};
use chrono::{DateTime, Utc};

pub const RECENCY_CEILING: f64 = 3.0;
pub const URGENT_CEILING: f64 = 2.5;
pub const TOPIC_BOOST: f64 = 4.0;

/// Lowercased, trimmed topic used for matching.
pub fn topic_query(topic: &str) -> String {
    topic.trim().to_lowercase()
}

/// Case-insensitive substring match against title and summary. An empty
/// query matches everything.
pub fn matches_topic(article: &AggregatedArticle, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    format!("{} {}", article.title, article.summary)
        .to_lowercase()
        .contains(query)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub recency: f64,
    pub topic: f64,
    pub voice: f64,
    pub jitter: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.recency + self.topic + self.voice + self.jitter
    }
}

/// Relevance components for one article at `now`.
pub fn score_breakdown(
    article: &AggregatedArticle,
    request: &GenerationRequest,
    matches_topic: bool,
    now: DateTime<Utc>,
    jitter: &dyn JitterSource,
) -> ScoreBreakdown {
    let published = article.published_at.as_deref().and_then(time::parse_timestamp);
    let age = time::hours_old(published, now).ln();

    ScoreBreakdown {
        recency: (RECENCY_CEILING - age).max(0.0),
        topic: if matches_topic { TOPIC_BOOST } else { 0.0 },
        voice: match request.voice {
            Voice::Urgent => (URGENT_CEILING - age).max(0.0),
            _ => 0.0,
        },
        jitter: jitter.jitter(),
    }
}

/// Returns the article carrying its computed score.
pub fn score_article(
    article: AggregatedArticle,
    request: &GenerationRequest,
    matches_topic: bool,
    now: DateTime<Utc>,
    jitter: &dyn JitterSource,
) -> AggregatedArticle {
    let score = score_breakdown(&article, request, matches_topic, now, jitter).total();
    article.with_score(score)
}
