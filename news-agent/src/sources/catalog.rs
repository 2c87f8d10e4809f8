use crate::types::FeedDescriptor;

/// Feeds used when configuration supplies none.
pub fn default_feeds() -> Vec<FeedDescriptor> {
    vec![
        FeedDescriptor::new(
            "https://rss.nytimes.com/services/xml/rss/nyt/Technology.xml",
            "NYTimes Technology",
            &["technology", "innovation", "business"],
        ),
        FeedDescriptor::new(
            "https://feeds.a.dj.com/rss/RSSWorldNews.xml",
            "WSJ World News",
            &["world", "geopolitics", "economy"],
        ),
        FeedDescriptor::new(
            "https://www.theverge.com/rss/index.xml",
            "The Verge",
            &["technology", "culture", "gadgets"],
        ),
        FeedDescriptor::new(
            "https://feeds.feedburner.com/TechCrunch/",
            "TechCrunch",
            &["startups", "venture", "innovation"],
        ),
        FeedDescriptor::new(
            "https://www.reddit.com/r/worldnews/.rss",
            "Reddit World News",
            &["world", "trending", "breaking"],
        ),
        FeedDescriptor::new(
            "https://hnrss.org/frontpage",
            "Hacker News Front Page",
            &["technology", "startups", "engineering"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rss_utils::url::is_valid_feed_url;

    #[test]
    fn catalogue_is_well_formed() {
        let feeds = default_feeds();
        assert_eq!(feeds.len(), 6);
        for feed in &feeds {
            assert!(is_valid_feed_url(&feed.url), "bad url {}", feed.url);
            assert!(!feed.label.is_empty());
            assert_eq!(feed.tags.len(), 3);
        }
    }
}
