use crate::aggregator::NewsAggregator;
use crate::digest::assemble;
use crate::types::{AgentError, GenerationRequest, GenerationResult, Result};
use chrono::Utc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Runs one generation end to end: aggregate, assemble, post-process.
pub struct NewsAgent {
    aggregator: NewsAggregator,
}

impl NewsAgent {
    pub fn new(aggregator: NewsAggregator) -> Self {
        Self { aggregator }
    }

    /// Generate a document for `request`. Fails with
    /// [`AgentError::NoRelevantStories`] when nothing survives aggregation;
    /// a partial document is never returned.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "generation",
            run_id = %run_id,
            topic = %request.topic,
            mode = %request.mode
        );

        async {
            let articles = self.aggregator.collect_articles(request).await;
            if articles.is_empty() {
                warn!("No relevant stories for topic '{}'", request.topic);
                return Err(AgentError::NoRelevantStories);
            }

            let mut result = assemble(&articles, request, Utc::now());
            if !request.include_sources {
                result.strip_sources();
            }

            info!(
                "Generated {} with {} sections ({} words, {} min read)",
                result.mode,
                result.sections.len(),
                result.meta.word_count,
                result.meta.reading_time_minutes
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
