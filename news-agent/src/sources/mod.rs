pub mod catalog;
pub mod memory;
pub mod rss_feed;

pub use catalog::default_feeds;
pub use memory::MemoryFeedClient;
pub use rss_feed::HttpFeedClient;
