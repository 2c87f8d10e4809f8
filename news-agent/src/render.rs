use crate::types::{ContentSection, GenerationResult, WritingMode};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

fn render_section(section: &ContentSection) -> String {
    let bullets = section
        .bullets
        .iter()
        .map(|b| format!("- {}", b))
        .collect::<Vec<_>>()
        .join("\n");
    let source = section
        .source
        .as_ref()
        .map(|s| format!("\n\n[Source]({}) — {}", s.url, s.publisher))
        .unwrap_or_default();

    format!(
        "### {}\n{}\n\n{}\n\n{}{}\n",
        section.title, section.summary, bullets, section.insight, source
    )
}

/// Markdown view of a finished document, suitable for pasting into an editor.
pub fn render_markdown(result: &GenerationResult) -> String {
    let kind = match result.mode {
        WritingMode::Newsletter => "Newsletter",
        WritingMode::Blog => "Blog",
    };

    let mut out = format!("# {}: {}\n", kind, result.topic);
    out.push_str(&format!(
        "*Audience:* {}\n\n*Voice:* {}\n\n*Generated:* {}\n\n",
        result.audience,
        result.voice,
        result.generated_at.format(TIMESTAMP_FORMAT)
    ));

    if let Some(hero) = &result.hero {
        out.push_str(&format!("## {}\n{}\n\n", hero.headline, hero.excerpt));
    } else if let Some(intro) = &result.introduction {
        out.push_str(&format!("## Introduction\n{}\n\n", intro));
    }

    out.push_str(
        &result
            .sections
            .iter()
            .map(render_section)
            .collect::<Vec<_>>()
            .join("\n"),
    );

    if let Some(conclusion) = &result.conclusion {
        out.push_str(&format!("\n## Conclusion\n{}\n", conclusion));
    }
    if let Some(cta) = &result.call_to_action {
        out.push_str(&format!("\n> {}\n", cta));
    }
    if !result.sources.is_empty() {
        let links = result
            .sources
            .iter()
            .map(|s| format!("- [{}]({})", s.title, s.url))
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str(&format!("\n## Sources\n{}\n", links));
    }

    out.trim().to_string()
}
