use crate::normalizer::{normalize_item, resolve_publisher};
use crate::scoring::{matches_topic, score_article, topic_query};
use crate::traits::{FeedClient, JitterSource, RandomJitter};
use crate::types::{AggregatedArticle, FeedDescriptor, GenerationRequest, RawFeed, WritingLength};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Summaries at or below this many characters are too thin to write about.
pub const MIN_SUMMARY_CHARS: usize = 40;

pub fn article_limit(length: WritingLength) -> usize {
    match length {
        WritingLength::Deep => 8,
        _ => 6,
    }
}

/// Outcome of one feed fetch. `feed` is `None` when the fetch failed.
#[derive(Debug, Clone)]
pub struct FeedBatch {
    pub descriptor: FeedDescriptor,
    pub feed: Option<RawFeed>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    Replaced,
    KeptExisting,
    Rejected,
    Suppressed,
}

/// Keyed merge of scored candidates. Admission checks the topic once per URL;
/// after that, duplicates compete on score alone.
#[derive(Debug, Default)]
pub struct ArticleMerger {
    articles: Vec<AggregatedArticle>,
    index: HashMap<String, usize>,
    rejected: HashSet<String>,
}

impl ArticleMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, article: AggregatedArticle, admissible: bool) -> MergeOutcome {
        if let Some(&slot) = self.index.get(&article.url) {
            // A challenger is not re-checked against the topic here.
            if article.score > self.articles[slot].score {
                self.articles[slot] = article;
                return MergeOutcome::Replaced;
            }
            return MergeOutcome::KeptExisting;
        }

        if self.rejected.contains(&article.url) {
            return MergeOutcome::Suppressed;
        }

        if !admissible {
            self.rejected.insert(article.url);
            return MergeOutcome::Rejected;
        }

        self.index.insert(article.url.clone(), self.articles.len());
        self.articles.push(article);
        MergeOutcome::Inserted
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Filter thin summaries, rank by score and keep the top `limit`.
    pub fn finish(self, limit: usize) -> Vec<AggregatedArticle> {
        let mut ranked: Vec<AggregatedArticle> = self
            .articles
            .into_iter()
            .filter(|a| a.summary.chars().count() > MIN_SUMMARY_CHARS)
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);
        ranked
    }
}

pub struct NewsAggregator {
    feeds: Vec<FeedDescriptor>,
    client: Arc<dyn FeedClient>,
    jitter: Arc<dyn JitterSource>,
}

impl NewsAggregator {
    pub fn new(feeds: Vec<FeedDescriptor>, client: Arc<dyn FeedClient>) -> Self {
        Self {
            feeds,
            client,
            jitter: Arc::new(RandomJitter),
        }
    }

    pub fn with_jitter(mut self, jitter: Arc<dyn JitterSource>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Fetch every configured feed concurrently. A failing feed yields an
    /// empty batch and never affects its siblings.
    pub async fn fetch_all_feeds(&self) -> Vec<FeedBatch> {
        info!(
            "Fetching {} feeds with {}",
            self.feeds.len(),
            self.client.client_name()
        );

        let handles = self.feeds.iter().map(|descriptor| {
            let client = self.client.clone();
            let url = descriptor.url.clone();
            tokio::spawn(async move { client.fetch(&url).await })
        });
        let outcomes = join_all(handles).await;

        let mut successful = 0;
        let batches: Vec<FeedBatch> = self
            .feeds
            .iter()
            .zip(outcomes)
            .map(|(descriptor, outcome)| {
                let feed = match outcome {
                    Ok(Ok(feed)) => {
                        successful += 1;
                        info!("Feed {}: {} items", descriptor.url, feed.items.len());
                        Some(feed)
                    }
                    Ok(Err(e)) => {
                        warn!("Failed to fetch feed {}: {}", descriptor.url, e);
                        None
                    }
                    Err(e) => {
                        warn!("Fetch task for feed {} aborted: {}", descriptor.url, e);
                        None
                    }
                };
                FeedBatch {
                    descriptor: descriptor.clone(),
                    feed,
                }
            })
            .collect();

        info!("Successfully fetched {}/{} feeds", successful, self.feeds.len());
        batches
    }

    /// Normalize, score, merge and rank everything the batches contain.
    pub fn rank(
        &self,
        batches: &[FeedBatch],
        request: &GenerationRequest,
        now: DateTime<Utc>,
    ) -> Vec<AggregatedArticle> {
        let query = topic_query(&request.topic);
        let mut merger = ArticleMerger::new();
        let mut candidates = 0usize;

        for batch in batches {
            let Some(feed) = &batch.feed else {
                continue;
            };
            let publisher = resolve_publisher(&batch.descriptor, feed.title.as_deref());

            for item in &feed.items {
                let Some(article) = normalize_item(item, &batch.descriptor, &publisher) else {
                    continue;
                };
                candidates += 1;
                let matched = matches_topic(&article, &query);
                let scored = score_article(article, request, matched, now, self.jitter.as_ref());
                let outcome = merger.offer(scored, matched || query.is_empty());
                debug!("Merge outcome {:?}", outcome);
            }
        }

        let admitted = merger.len();
        let ranked = merger.finish(article_limit(request.length));
        info!(
            "Ranked {} articles from {} candidates ({} admitted) for topic '{}'",
            ranked.len(),
            candidates,
            admitted,
            request.topic
        );
        ranked
    }

    /// Full aggregation run for one request.
    pub async fn collect_articles(&self, request: &GenerationRequest) -> Vec<AggregatedArticle> {
        let batches = self.fetch_all_feeds().await;
        self.rank(&batches, request, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str, score: f64, summary_len: usize) -> AggregatedArticle {
        AggregatedArticle {
            id: url.into(),
            title: url.into(),
            url: url.into(),
            publisher: "p".into(),
            published_at: None,
            summary: "s".repeat(summary_len),
            content: "c".into(),
            categories: vec![],
            score,
        }
    }

    #[test]
    fn merger_keeps_higher_score_in_first_slot() {
        let mut merger = ArticleMerger::new();
        assert_eq!(merger.offer(article("a", 1.0, 50), true), MergeOutcome::Inserted);
        assert_eq!(merger.offer(article("b", 2.0, 50), true), MergeOutcome::Inserted);
        assert_eq!(merger.offer(article("a", 0.5, 50), true), MergeOutcome::KeptExisting);
        assert_eq!(merger.offer(article("a", 3.0, 60), false), MergeOutcome::Replaced);
        assert_eq!(merger.len(), 2);

        let ranked = merger.finish(6);
        assert_eq!(ranked[0].url, "a");
        assert_eq!(ranked[0].score, 3.0);
        assert_eq!(ranked[0].summary.len(), 60);
    }

    #[test]
    fn rejected_url_stays_rejected() {
        let mut merger = ArticleMerger::new();
        assert_eq!(merger.offer(article("a", 1.0, 50), false), MergeOutcome::Rejected);
        assert_eq!(merger.offer(article("a", 9.0, 50), true), MergeOutcome::Suppressed);
        assert!(merger.is_empty());
    }

    #[test]
    fn finish_filters_sorts_and_truncates() {
        let mut merger = ArticleMerger::new();
        for i in 0..10 {
            merger.offer(article(&format!("u{i}"), i as f64, 41), true);
        }
        merger.offer(article("thin", 100.0, 40), true);

        let ranked = merger.finish(6);
        assert_eq!(ranked.len(), 6);
        assert!(ranked.iter().all(|a| a.url != "thin"));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].url, "u9");
    }

    #[test]
    fn ties_keep_admission_order() {
        let mut merger = ArticleMerger::new();
        merger.offer(article("first", 1.0, 50), true);
        merger.offer(article("second", 1.0, 50), true);
        let ranked = merger.finish(6);
        assert_eq!(ranked[0].url, "first");
        assert_eq!(ranked[1].url, "second");
    }

    #[test]
    fn limits_follow_length() {
        assert_eq!(article_limit(WritingLength::Deep), 8);
        assert_eq!(article_limit(WritingLength::Standard), 6);
        assert_eq!(article_limit(WritingLength::Brief), 6);
    }
}
