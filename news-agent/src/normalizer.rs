use crate::rss_utils::{feed, url};
use crate::types::{AggregatedArticle, FeedDescriptor, RawFeedItem};
use tracing::debug;

pub const FALLBACK_CONTENT: &str = "A notable development shaping the current news cycle.";
pub const FALLBACK_PUBLISHER: &str = "Latest Feed";

/// Sanitized, non-empty text or `None`.
fn sanitize(text: Option<&str>) -> Option<String> {
    text.map(feed::collapse_whitespace).filter(|t| !t.is_empty())
}

fn stripped(html: Option<&str>) -> Option<String> {
    html.map(feed::strip_html).filter(|t| !t.is_empty())
}

/// First field that carries any characters at all.
fn first_present<'a>(fields: &[Option<&'a str>]) -> Option<&'a str> {
    fields.iter().flatten().copied().find(|f| !f.is_empty())
}

/// Publisher for every item of a feed: configured label, else the feed's own
/// title, else a generic name.
pub fn resolve_publisher(descriptor: &FeedDescriptor, feed_title: Option<&str>) -> String {
    let label = descriptor.label.trim();
    if !label.is_empty() {
        return label.to_string();
    }
    stripped(feed_title).unwrap_or_else(|| FALLBACK_PUBLISHER.to_string())
}

/// Turn one raw item into an unscored article. Items without a usable URL or
/// title produce nothing.
pub fn normalize_item(
    item: &RawFeedItem,
    descriptor: &FeedDescriptor,
    publisher: &str,
) -> Option<AggregatedArticle> {
    let raw_url = [item.link.as_deref(), item.guid.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|u| !u.is_empty());

    let Some(raw_url) = raw_url else {
        debug!("Dropping item without link or guid: {:?}", item.title);
        return None;
    };
    let canonical = url::canonicalize(raw_url);
    if canonical.is_empty() {
        debug!("Dropping item whose link is only a tracking suffix: {}", raw_url);
        return None;
    }

    // A present but blank title is not replaced by the link.
    let title = match item.title.as_deref() {
        Some(title) => sanitize(Some(title)),
        None => sanitize(item.link.as_deref()),
    };
    let Some(title) = title else {
        debug!("Dropping untitled item: {}", canonical);
        return None;
    };

    let summary = match item.content_snippet.as_deref().filter(|s| !s.is_empty()) {
        Some(snippet) => sanitize(Some(snippet)),
        None => stripped(item.content.as_deref()),
    }
    .unwrap_or_else(|| FALLBACK_CONTENT.to_string());

    let content = stripped(first_present(&[
        item.content_encoded.as_deref(),
        item.content.as_deref(),
    ]))
    .unwrap_or_else(|| summary.clone());

    let published_at = [item.iso_date.as_deref(), item.pub_date.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty())
        .map(str::to_string);

    Some(AggregatedArticle {
        id: canonical.to_string(),
        title,
        url: canonical.to_string(),
        publisher: publisher.to_string(),
        published_at,
        summary,
        content,
        categories: descriptor.tags.clone(),
        score: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> FeedDescriptor {
        FeedDescriptor::new("https://example.com/rss", "Example Wire", &["technology", "markets"])
    }

    fn item() -> RawFeedItem {
        RawFeedItem {
            title: Some("  Chipmakers   rally ".into()),
            link: Some("https://example.com/chips?ref=rss".into()),
            guid: Some("guid-1".into()),
            pub_date: Some("Wed, 01 May 2024 12:00:00 GMT".into()),
            iso_date: None,
            content_snippet: None,
            content: Some("<p>Chipmakers rallied on Tuesday.</p> <p>Analysts expect more.</p>".into()),
            content_encoded: Some("<div>Full <b>story</b> here.</div>".into()),
        }
    }

    #[test]
    fn normalizes_a_complete_item() {
        let article = normalize_item(&item(), &descriptor(), "Example Wire").unwrap();
        assert_eq!(article.url, "https://example.com/chips");
        assert_eq!(article.id, article.url);
        assert_eq!(article.title, "Chipmakers rally");
        assert_eq!(article.summary, "Chipmakers rallied on Tuesday. Analysts expect more.");
        assert_eq!(article.content, "Full story here.");
        assert_eq!(article.published_at.as_deref(), Some("Wed, 01 May 2024 12:00:00 GMT"));
        assert_eq!(article.categories, vec!["technology", "markets"]);
        assert_eq!(article.score, 0.0);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let first = normalize_item(&item(), &descriptor(), "Example Wire").unwrap();
        let second = normalize_item(&item(), &descriptor(), "Example Wire").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn falls_back_when_text_is_missing() {
        let raw = RawFeedItem {
            title: Some("Bare".into()),
            link: Some("https://example.com/bare".into()),
            ..Default::default()
        };
        let article = normalize_item(&raw, &descriptor(), "Example Wire").unwrap();
        assert_eq!(article.summary, FALLBACK_CONTENT);
        assert_eq!(article.content, FALLBACK_CONTENT);
        assert_eq!(article.published_at, None);

        let snippet_only = RawFeedItem {
            content_snippet: Some("Snippet text.".into()),
            ..raw
        };
        let article = normalize_item(&snippet_only, &descriptor(), "Example Wire").unwrap();
        assert_eq!(article.summary, "Snippet text.");
        assert_eq!(article.content, "Snippet text.");
    }

    #[test]
    fn guid_and_link_fallbacks() {
        let guid_only = RawFeedItem {
            title: Some("Guid story".into()),
            guid: Some("https://example.com/guid".into()),
            ..Default::default()
        };
        assert_eq!(
            normalize_item(&guid_only, &descriptor(), "p").unwrap().url,
            "https://example.com/guid"
        );

        let untitled = RawFeedItem {
            link: Some("https://example.com/untitled".into()),
            ..Default::default()
        };
        assert_eq!(
            normalize_item(&untitled, &descriptor(), "p").unwrap().title,
            "https://example.com/untitled"
        );
    }

    #[test]
    fn malformed_items_are_dropped() {
        let no_url = RawFeedItem {
            title: Some("Nowhere".into()),
            ..Default::default()
        };
        assert!(normalize_item(&no_url, &descriptor(), "p").is_none());

        let no_title = RawFeedItem {
            guid: Some("https://example.com/x".into()),
            title: Some("   ".into()),
            ..Default::default()
        };
        assert!(normalize_item(&no_title, &descriptor(), "p").is_none());

        let blank_title_with_link = RawFeedItem {
            title: Some("   ".into()),
            link: Some("https://example.com/a".into()),
            ..Default::default()
        };
        assert!(normalize_item(&blank_title_with_link, &descriptor(), "p").is_none());
    }

    #[test]
    fn publisher_resolution_order() {
        assert_eq!(resolve_publisher(&descriptor(), Some("Own Title")), "Example Wire");
        let unlabeled = FeedDescriptor::new("https://example.com/rss", "", &[]);
        assert_eq!(resolve_publisher(&unlabeled, Some("<b>Own</b> Title")), "Own Title");
        assert_eq!(resolve_publisher(&unlabeled, None), FALLBACK_PUBLISHER);
    }
}
