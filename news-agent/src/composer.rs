use crate::types::{AggregatedArticle, Audience, Voice, WritingLength};
use crate::utils::{contains_any, split_sentences, summarize};

const IMPACT_SIGNALS: &[&str] = &["impact", "implication", "means", "could"];
const FORWARD_SIGNALS: &[&str] = &["next", "looking", "expects", "forecast", "watch"];

/// Summary sentence budget per requested length.
pub fn sentence_budget(length: WritingLength) -> usize {
    match length {
        WritingLength::Brief => 2,
        WritingLength::Standard => 3,
        WritingLength::Deep => 5,
    }
}

pub fn voice_directive(voice: Voice) -> &'static str {
    match voice {
        Voice::Analytical => "Focus on the signal and quantify the impact.",
        Voice::Optimistic => "Spot the opportunity and highlight upside potential.",
        Voice::Urgent => "Flag what needs immediate attention and outline actions.",
        Voice::Casual => "Keep it conversational and relatable.",
        Voice::Visionary => "Connect the dots to the bigger-picture future.",
    }
}

pub fn audience_directive(audience: Audience) -> &'static str {
    match audience {
        Audience::Executives => "Prioritise strategic implications and bottom-line significance.",
        Audience::Builders => "Surface technical shifts and implementation tips.",
        Audience::Investors => "Watch for leading indicators and capital flows.",
        Audience::General => "Explain why this matters in plain language.",
    }
}

/// Voice directive followed by audience directive. Seeds blog copy.
pub fn tone_modifier(voice: Voice, audience: Audience) -> String {
    format!("{} {}", voice_directive(voice), audience_directive(audience))
}

pub fn craft_highlight(article: &AggregatedArticle) -> String {
    format!("{}: {}", article.publisher, summarize(&article.summary, 1))
}

/// Ordered bullets: what happened, why it matters, what comes next, and a
/// counterpoint for deep reads. Brief reads keep at most three.
pub fn build_bullets(article: &AggregatedArticle, length: WritingLength, voice: Voice) -> Vec<String> {
    let details = split_sentences(&article.content);
    let impact = details.iter().find(|s| contains_any(s, IMPACT_SIGNALS));
    let forward = details.iter().find(|s| contains_any(s, FORWARD_SIGNALS));

    let mut bullets = vec![format!("What happened: {}", summarize(&article.summary, 1))];

    bullets.push(match impact {
        Some(sentence) => format!("Why it matters: {}", sentence),
        None if voice == Voice::Visionary => {
            "Why it matters: Signals an inflection worth preparing for.".to_string()
        }
        None => "Why it matters: Indicates a shift with near-term consequences.".to_string(),
    });

    bullets.push(match forward {
        Some(sentence) => format!("What to watch: {}", sentence),
        None if voice == Voice::Optimistic => {
            "Opportunity: Position teams to capture the upswing early.".to_string()
        }
        None => "Next move: Track follow-on announcements and reactions.".to_string(),
    });

    if length == WritingLength::Deep {
        bullets.push(format!(
            "Counterpoint: Balance this with {} coverage for blind spots.",
            article.publisher
        ));
    }

    if length == WritingLength::Brief {
        bullets.truncate(3);
    }
    bullets
}

/// Publisher framing plus an audience-specific closing clause.
pub fn craft_insight(article: &AggregatedArticle, audience: Audience) -> String {
    let base = format!(
        "{} frames this as {}",
        article.publisher,
        summarize(&article.summary, 1).to_lowercase()
    );
    let closing = match audience {
        Audience::Executives => {
            "Translate that into board-ready talking points and align cross-functional owners."
        }
        Audience::Investors => "Map the likely capital rotations and risk signals across the sector.",
        Audience::Builders => "Plan the technical backlog adjustments before momentum compounds.",
        Audience::General => "Make it tangible with a real-world example for readers.",
    };
    format!("{}. {}", base, closing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(summary: &str, content: &str) -> AggregatedArticle {
        AggregatedArticle {
            id: "https://example.com/a".into(),
            title: "Fab Expansion".into(),
            url: "https://example.com/a".into(),
            publisher: "The Verge".into(),
            published_at: None,
            summary: summary.into(),
            content: content.into(),
            categories: vec!["technology".into()],
            score: 1.0,
        }
    }

    #[test]
    fn bullets_pick_signal_sentences() {
        let a = article(
            "Foundry doubles output. More to come.",
            "Foundry doubles output. This means cheaper chips. Analysts expects prices to fall.",
        );
        let bullets = build_bullets(&a, WritingLength::Standard, Voice::Analytical);
        assert_eq!(
            bullets,
            vec![
                "What happened: Foundry doubles output.",
                "Why it matters: This means cheaper chips.",
                "What to watch: Analysts expects prices to fall.",
            ]
        );
    }

    #[test]
    fn bullets_fall_back_by_voice() {
        let a = article("Quiet update.", "Nothing notable.");

        let visionary = build_bullets(&a, WritingLength::Standard, Voice::Visionary);
        assert_eq!(visionary[1], "Why it matters: Signals an inflection worth preparing for.");
        assert_eq!(visionary[2], "Next move: Track follow-on announcements and reactions.");

        let optimistic = build_bullets(&a, WritingLength::Standard, Voice::Optimistic);
        assert_eq!(optimistic[1], "Why it matters: Indicates a shift with near-term consequences.");
        assert_eq!(optimistic[2], "Opportunity: Position teams to capture the upswing early.");
    }

    #[test]
    fn bullet_count_follows_length() {
        let a = article("Quiet update.", "Nothing notable.");
        assert_eq!(build_bullets(&a, WritingLength::Brief, Voice::Casual).len(), 3);
        assert_eq!(build_bullets(&a, WritingLength::Standard, Voice::Casual).len(), 3);

        let deep = build_bullets(&a, WritingLength::Deep, Voice::Casual);
        assert_eq!(deep.len(), 4);
        assert_eq!(deep[3], "Counterpoint: Balance this with The Verge coverage for blind spots.");
    }

    #[test]
    fn highlight_and_insight() {
        let a = article("Foundry Doubles Output. Second sentence.", "");
        assert_eq!(craft_highlight(&a), "The Verge: Foundry Doubles Output.");
        assert_eq!(
            craft_insight(&a, Audience::Builders),
            "The Verge frames this as foundry doubles output.. Plan the technical backlog adjustments before momentum compounds."
        );
        assert!(craft_insight(&a, Audience::General).ends_with("Make it tangible with a real-world example for readers."));
    }

    #[test]
    fn tone_joins_voice_and_audience() {
        assert_eq!(
            tone_modifier(Voice::Casual, Audience::Investors),
            "Keep it conversational and relatable. Watch for leading indicators and capital flows."
        );
    }

    #[test]
    fn budgets() {
        assert_eq!(sentence_budget(WritingLength::Brief), 2);
        assert_eq!(sentence_budget(WritingLength::Standard), 3);
        assert_eq!(sentence_budget(WritingLength::Deep), 5);
    }
}
