use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::ParseLiteralError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingMode {
    Newsletter,
    Blog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Analytical,
    Optimistic,
    Urgent,
    Casual,
    Visionary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Executives,
    Builders,
    Investors,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingLength {
    Brief,
    Standard,
    Deep,
}

/// Literal names shared by `Display`, `FromStr` and serde.
macro_rules! literal_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $lit:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $lit),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseLiteralError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($ty::$variant),)+
                    other => Err(ParseLiteralError {
                        field: $field,
                        literal: other.to_owned(),
                    }),
                }
            }
        }
    };
}

literal_enum!(WritingMode, "mode", { Newsletter => "newsletter", Blog => "blog" });
literal_enum!(Voice, "voice", {
    Analytical => "analytical",
    Optimistic => "optimistic",
    Urgent => "urgent",
    Casual => "casual",
    Visionary => "visionary",
});
literal_enum!(Audience, "audience", {
    Executives => "executives",
    Builders => "builders",
    Investors => "investors",
    General => "general",
});
literal_enum!(WritingLength, "length", { Brief => "brief", Standard => "standard", Deep => "deep" });

/// What the caller asked for. Built once at the boundary, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub mode: WritingMode,
    pub voice: Voice,
    pub audience: Audience,
    pub length: WritingLength,
    pub include_sources: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLink {
    pub title: String,
    pub url: String,
    pub publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub title: String,
    pub summary: String,
    pub bullets: Vec<String>,
    pub insight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub kicker: String,
    pub headline: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMeta {
    pub word_count: usize,
    pub reading_time_minutes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub mode: WritingMode,
    pub topic: String,
    pub audience: Audience,
    pub voice: Voice,
    pub length: WritingLength,
    pub generated_at: DateTime<Utc>,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    pub sections: Vec<ContentSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    pub sources: Vec<SourceLink>,
    pub meta: ResultMeta,
}

impl GenerationResult {
    /// Drops every citation, both the flat list and the per-section links.
    pub fn strip_sources(&mut self) {
        self.sources.clear();
        for section in &mut self.sections {
            section.source = None;
        }
    }
}

// Object style note:
// Everything in this crate is plain data. The engine that produces a
// `GenerationResult` lives in `news-agent`; nothing here holds state or
// performs I/O, so results can be handed to any caller by value.
