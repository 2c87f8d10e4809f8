/// Feed-level helpers shared by the normalizer and scorer

/// URL utilities for feed items
pub mod url {
    use url::Url;

    /// Marker that precedes tracking parameters on syndicated links.
    pub const TRACKING_MARKER: &str = "?ref";

    /// Drop everything from the first `?ref` onwards so tracking variants of
    /// the same story collapse onto one key.
    pub fn canonicalize(url_str: &str) -> &str {
        match url_str.find(TRACKING_MARKER) {
            Some(idx) => &url_str[..idx],
            None => url_str,
        }
    }

    /// Extract domain from URL
    pub fn extract_domain(url_str: &str) -> Option<String> {
        Url::parse(url_str)
            .ok()
            .and_then(|url| url.domain().map(|d| d.to_string()))
    }

    /// Validate feed URL format
    pub fn is_valid_feed_url(url_str: &str) -> bool {
        if let Ok(url) = Url::parse(url_str) {
            url.scheme() == "http" || url.scheme() == "https"
        } else {
            false
        }
    }
}

/// Time utilities for recency scoring
pub mod time {
    use chrono::{DateTime, Utc};

    /// Parse a feed timestamp. Feeds mix RFC 3339 (Atom, `isoDate`) and
    /// RFC 2822 (RSS `pubDate`); anything else is treated as unknown.
    pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    /// Age in hours, never below one. Unknown or future timestamps count as fresh.
    pub fn hours_old(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
        let Some(published) = published else {
            return 1.0;
        };
        let millis = now.signed_duration_since(published).num_milliseconds() as f64;
        (millis / 3_600_000.0).max(1.0)
    }
}

/// Text cleanup for feed payloads
pub mod feed {
    /// Replace every `<...>` run with a space, then collapse whitespace.
    /// A `<` with no closing `>` (or an empty `<>`) is kept as text.
    pub fn strip_html(html: &str) -> String {
        let mut text = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(open) = rest.find('<') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('>') {
                Some(close) if close > 0 => {
                    text.push(' ');
                    rest = &after[close + 1..];
                }
                _ => {
                    text.push('<');
                    rest = after;
                }
            }
        }
        text.push_str(rest);

        collapse_whitespace(&text)
    }

    /// Collapse whitespace runs to single spaces and trim.
    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
