use crate::types::{AgentError, RawFeed, RawFeedItem, Result};
use feed_rs::parser;
use tracing::debug;

/// Maps RSS and Atom documents onto the loosely-typed `RawFeed` shape.
pub struct FeedParser;

impl FeedParser {
    pub fn parse(content: &str) -> Result<RawFeed> {
        debug!("Parsing feed content ({} bytes)", content.len());

        // Entries without an id keep it empty instead of getting a generated one.
        let feed = parser::Builder::new()
            .id_generator(|_, _, _| String::new())
            .build()
            .parse(content.as_bytes())
            .map_err(|e| AgentError::Parse(format!("Failed to parse feed: {}", e)))?;

        let items: Vec<RawFeedItem> = feed.entries.into_iter().map(Self::convert_entry).collect();
        debug!("Parsed feed with {} entries", items.len());

        Ok(RawFeed {
            title: feed.title.map(|t| t.content),
            items,
        })
    }

    fn convert_entry(entry: feed_rs::model::Entry) -> RawFeedItem {
        let guid = Some(entry.id).filter(|id| !id.is_empty());
        let link = entry.links.into_iter().next().map(|l| l.href);
        let timestamp = entry.published.or(entry.updated).map(|dt| dt.to_rfc3339());

        RawFeedItem {
            title: entry.title.map(|t| t.content),
            link,
            guid,
            pub_date: None,
            iso_date: timestamp,
            content_snippet: None,
            content: entry.summary.map(|s| s.content),
            content_encoded: entry.content.and_then(|c| c.body),
        }
    }

    /// Cheap sniff for RSS/Atom markers before handing content to the parser.
    pub fn is_valid_feed_content(content: &str) -> bool {
        let content_lower = content.to_lowercase();
        content_lower.contains("<rss")
            || content_lower.contains("<feed")
            || content_lower.contains("<channel")
            || content_lower.contains("<rdf:rdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize_item;
    use crate::types::FeedDescriptor;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Example Wire</title>
    <link>https://example.com</link>
    <description>Tech news</description>
    <item>
      <title>Chipmakers rally</title>
      <link>https://example.com/chips?ref=rss</link>
      <guid>https://example.com/chips</guid>
      <pubDate>Wed, 01 May 2024 12:00:00 GMT</pubDate>
      <description>&lt;p&gt;Chipmakers rallied on Tuesday.&lt;/p&gt;</description>
      <content:encoded><![CDATA[<div>Full story.</div>]]></content:encoded>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Desk</title>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <updated>2024-05-01T12:00:00Z</updated>
  <entry>
    <title>Rates hold steady</title>
    <link href="https://atom.example.com/rates"/>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <updated>2024-05-01T12:00:00Z</updated>
    <summary>Central bank keeps rates unchanged.</summary>
  </entry>
</feed>"#;

    #[test]
    fn parses_rss_items() {
        let feed = FeedParser::parse(RSS).unwrap();
        assert_eq!(feed.title.as_deref(), Some("Example Wire"));
        assert_eq!(feed.items.len(), 1);

        let item = &feed.items[0];
        assert_eq!(item.title.as_deref(), Some("Chipmakers rally"));
        assert_eq!(item.link.as_deref(), Some("https://example.com/chips?ref=rss"));
        assert_eq!(item.guid.as_deref(), Some("https://example.com/chips"));
        assert!(item.iso_date.as_deref().unwrap().starts_with("2024-05-01T12:00:00"));
        assert!(item.content.as_deref().unwrap().contains("Chipmakers rallied"));
        assert!(item.content_encoded.as_deref().unwrap().contains("Full story."));
    }

    #[test]
    fn parses_atom_entries() {
        let feed = FeedParser::parse(ATOM).unwrap();
        assert_eq!(feed.title.as_deref(), Some("Atom Desk"));
        let item = &feed.items[0];
        assert_eq!(item.link.as_deref(), Some("https://atom.example.com/rates"));
        assert_eq!(item.content.as_deref(), Some("Central bank keeps rates unchanged."));
        assert!(item.iso_date.is_some());
    }

    #[test]
    fn item_without_link_or_guid_has_no_url() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Loose Wire</title>
    <item>
      <title>No link here</title>
      <description>Something happened somewhere, but nobody linked to it.</description>
    </item>
  </channel>
</rss>"#;
        let feed = FeedParser::parse(rss).unwrap();
        let item = &feed.items[0];
        assert_eq!(item.link, None);
        assert_eq!(item.guid, None);

        let descriptor = FeedDescriptor::new("https://loose.test/rss", "Loose Wire", &[]);
        assert!(normalize_item(item, &descriptor, "Loose Wire").is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(FeedParser::parse("definitely not xml").is_err());
        assert!(!FeedParser::is_valid_feed_content("hello"));
        assert!(FeedParser::is_valid_feed_content(RSS));
        assert!(FeedParser::is_valid_feed_content(ATOM));
    }
}
