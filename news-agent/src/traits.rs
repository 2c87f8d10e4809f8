use crate::types::{RawFeed, Result};
use async_trait::async_trait;
use rand::Rng;

/// Capability for turning a feed URL into raw items.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetch and parse the feed behind `url`. Any failure is reported as an
    /// error; callers decide whether that is fatal.
    async fn fetch(&self, url: &str) -> Result<RawFeed>;

    /// Human-readable name, used in logs.
    fn client_name(&self) -> String;
}

/// Source of the tie-break jitter added to every score.
pub trait JitterSource: Send + Sync {
    /// A value in `[0, MAX_JITTER)`.
    fn jitter(&self) -> f64;
}

pub const MAX_JITTER: f64 = 0.3;

/// Uniform jitter from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..MAX_JITTER)
    }
}

/// Always zero, for deterministic ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter(&self) -> f64 {
        self.0
    }
}
