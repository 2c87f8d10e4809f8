pub mod types;
pub mod traits;
pub mod rss_utils;
pub mod normalizer;
pub mod scoring;
pub mod aggregator;
pub mod utils;
pub mod composer;
pub mod digest;
pub mod agent;
pub mod render;
pub mod config;
pub mod fetcher;
pub mod parser;
pub mod sources;

pub use types::*;
pub use traits::{FeedClient, FixedJitter, JitterSource, NoJitter, RandomJitter};
pub use aggregator::NewsAggregator;
pub use agent::NewsAgent;
pub use config::AgentConfig;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use render::render_markdown;
pub use sources::{default_feeds, HttpFeedClient, MemoryFeedClient};
