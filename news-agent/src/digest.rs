use crate::composer::{
    build_bullets, craft_highlight, craft_insight, sentence_budget, tone_modifier,
};
use crate::types::{
    AggregatedArticle, Audience, ContentSection, GenerationRequest, GenerationResult, Hero,
    ResultMeta, Voice, WritingLength, WritingMode,
};
use crate::utils::{count_words, summarize};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

const HIGHLIGHT_COUNT: usize = 3;
const BLOG_INTRO_ARTICLES: usize = 2;

const VISIONARY_CONCLUSION: &str = "These signals sketch the outline of the next wave. Set bold goals, back them with resources, and communicate the narrative before rivals do.";
const DEFAULT_CONCLUSION: &str = "Stay close to these moves, translate them into action items, and update stakeholders before momentum shifts again.";
const SPRINT_PROMPT: &str =
    "Leverage this development by crafting a response plan within the next sprint.";

/// Number of sections a document of this length carries, given what is available.
pub fn section_count(length: WritingLength, available: usize) -> usize {
    let target = match length {
        WritingLength::Brief => 3,
        WritingLength::Standard => 4,
        WritingLength::Deep => 6,
    };
    available.min(target)
}

pub fn reading_time_minutes(word_count: usize, words_per_minute: usize) -> usize {
    let minutes = (word_count as f64 / words_per_minute as f64).round() as usize;
    minutes.max(1)
}

/// Tokens across every piece of prose a reader sees. Sources and highlights
/// are not counted.
pub fn word_count(result: &GenerationResult) -> usize {
    let sections: Vec<String> = result
        .sections
        .iter()
        .map(|s| format!("{} {} {} {}", s.title, s.summary, s.bullets.join(" "), s.insight))
        .collect();

    let hero = result.hero.as_ref();
    let parts = [
        hero.map(|h| h.headline.as_str()),
        hero.map(|h| h.excerpt.as_str()),
        result.introduction.as_deref(),
    ]
    .into_iter()
    .chain(sections.iter().map(|s| Some(s.as_str())))
    .chain([result.conclusion.as_deref(), result.call_to_action.as_deref()])
    .flatten();

    count_words(parts)
}

/// One way of turning ranked articles into a finished document.
pub trait DocumentModel {
    const MODE: WritingMode;
    const WORDS_PER_MINUTE: usize;

    /// Build every field except `meta`.
    fn compose(
        articles: &[AggregatedArticle],
        request: &GenerationRequest,
        generated_at: DateTime<Utc>,
    ) -> GenerationResult;

    fn assemble(
        articles: &[AggregatedArticle],
        request: &GenerationRequest,
        generated_at: DateTime<Utc>,
    ) -> GenerationResult {
        let mut result = Self::compose(articles, request, generated_at);
        let words = word_count(&result);
        result.meta = ResultMeta {
            word_count: words,
            reading_time_minutes: reading_time_minutes(words, Self::WORDS_PER_MINUTE),
        };
        debug!(
            "Assembled {} with {} sections, {} words",
            Self::MODE,
            result.sections.len(),
            words
        );
        result
    }
}

fn skeleton(
    mode: WritingMode,
    selected: &[AggregatedArticle],
    request: &GenerationRequest,
    generated_at: DateTime<Utc>,
) -> GenerationResult {
    GenerationResult {
        mode,
        topic: request.topic.clone(),
        audience: request.audience,
        voice: request.voice,
        length: request.length,
        generated_at,
        highlights: selected.iter().take(HIGHLIGHT_COUNT).map(craft_highlight).collect(),
        hero: None,
        introduction: None,
        sections: Vec::new(),
        conclusion: None,
        call_to_action: None,
        sources: selected.iter().map(AggregatedArticle::source_link).collect(),
        meta: ResultMeta {
            word_count: 0,
            reading_time_minutes: 0,
        },
    }
}

pub struct NewsletterModel;

impl NewsletterModel {
    fn call_to_action(audience: Audience) -> &'static str {
        match audience {
            Audience::Executives => {
                "Share with your leadership team and align the next operating review."
            }
            Audience::Investors => "Send to LPs with your perspective before the weekly update.",
            _ => "Forward to your community with a quick note on how to react.",
        }
    }
}

impl DocumentModel for NewsletterModel {
    const MODE: WritingMode = WritingMode::Newsletter;
    const WORDS_PER_MINUTE: usize = 220;

    fn compose(
        articles: &[AggregatedArticle],
        request: &GenerationRequest,
        generated_at: DateTime<Utc>,
    ) -> GenerationResult {
        let selected = &articles[..section_count(request.length, articles.len())];
        let budget = sentence_budget(request.length);

        let mut result = skeleton(Self::MODE, selected, request, generated_at);
        result.hero = selected.first().map(|lead| Hero {
            kicker: lead.publisher.clone(),
            headline: lead.title.clone(),
            excerpt: summarize(&lead.summary, budget),
        });
        result.sections = selected
            .iter()
            .map(|article| ContentSection {
                title: article.title.clone(),
                summary: summarize(&article.summary, budget),
                bullets: build_bullets(article, request.length, request.voice),
                insight: craft_insight(article, request.audience),
                source: Some(article.source_link()),
            })
            .collect();
        result.call_to_action = Some(Self::call_to_action(request.audience).to_string());
        result
    }
}

pub struct BlogModel;

impl BlogModel {
    fn conclusion(voice: Voice) -> &'static str {
        match voice {
            Voice::Visionary => VISIONARY_CONCLUSION,
            _ => DEFAULT_CONCLUSION,
        }
    }

    fn call_to_action(audience: Audience) -> &'static str {
        match audience {
            Audience::Builders => "Invite readers to comment with the experiments they are running.",
            Audience::Investors => "Prompt readers to subscribe for weekly deal-flow signals.",
            _ => "Ask readers to share their perspective and subscribe for more breakdowns.",
        }
    }
}

impl DocumentModel for BlogModel {
    const MODE: WritingMode = WritingMode::Blog;
    const WORDS_PER_MINUTE: usize = 210;

    fn compose(
        articles: &[AggregatedArticle],
        request: &GenerationRequest,
        generated_at: DateTime<Utc>,
    ) -> GenerationResult {
        let selected = &articles[..section_count(request.length, articles.len())];
        let budget = sentence_budget(request.length) + 1;
        let tone = tone_modifier(request.voice, request.audience);

        let opening = selected
            .iter()
            .take(BLOG_INTRO_ARTICLES)
            .map(|a| summarize(&a.summary, 1))
            .collect::<Vec<_>>()
            .join(" ");

        let mut result = skeleton(Self::MODE, selected, request, generated_at);
        result.introduction = Some(if opening.is_empty() {
            tone.clone()
        } else {
            format!("{} {}", opening, tone)
        });
        result.sections = selected
            .iter()
            .enumerate()
            .map(|(i, article)| ContentSection {
                title: format!("Trend {}: {}", i + 1, article.title),
                summary: summarize(&article.content, budget),
                bullets: build_bullets(article, request.length, request.voice),
                insight: format!("{} {}", tone, SPRINT_PROMPT),
                source: Some(article.source_link()),
            })
            .collect();
        result.conclusion = Some(Self::conclusion(request.voice).to_string());
        result.call_to_action = Some(Self::call_to_action(request.audience).to_string());
        result
    }
}

/// Dispatch on the requested mode.
pub fn assemble(
    articles: &[AggregatedArticle],
    request: &GenerationRequest,
    generated_at: DateTime<Utc>,
) -> GenerationResult {
    info!(
        "Assembling {} from {} ranked articles",
        request.mode,
        articles.len()
    );
    match request.mode {
        WritingMode::Newsletter => NewsletterModel::assemble(articles, request, generated_at),
        WritingMode::Blog => BlogModel::assemble(articles, request, generated_at),
    }
}
