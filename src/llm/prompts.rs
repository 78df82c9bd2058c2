use crate::models::{ContentBrief, Tone};

/// System prompt for the research stage
pub const RESEARCH_SYSTEM_PROMPT: &str = r#"You are an idea researcher for a blog-writing team.

Given a topic, audience, and tone, produce:
1. 6-10 concise bullet points covering the key ideas, facts, angles, and common misconceptions a writer should address.
2. A final line starting with "Keywords:" listing 6-10 SEO keywords, comma-separated.

Be specific and factual. Do not write the post itself."#;

/// System prompt for the outline stage
pub const OUTLINE_SYSTEM_PROMPT: &str = r#"You are an expert content outliner.

Turn research notes into a blog post outline in Markdown:
- Use H2 (##) for main sections and H3 (###) for subsections.
- Start with an introduction section and end with a conclusion section.
- Under each heading, add 1-3 short bullets describing what it covers.
- Work the provided keywords into section topics where they fit naturally.

Output only the outline."#;

/// System prompt for draft writing (initial and revision passes)
pub const WRITER_SYSTEM_PROMPT: &str = r#"You are a professional blog writer.

Write a complete blog post in Markdown following the provided outline:
- Begin with an H1 title and a short TL;DR.
- Keep the outline's section structure with clear, focused paragraphs.
- Match the requested tone and stay close to the target word count.
- When supervisor notes are provided, address every note.

Output only the post."#;

/// System prompt for the review stage
pub const SUPERVISOR_SYSTEM_PROMPT: &str = r#"You are a strict editorial supervisor reviewing a blog post draft.

Respond in exactly one of two ways:

1. If the draft needs work: a numbered list of 3-6 concrete improvement notes. Each note names the problem and the fix.
2. If the draft is ready to publish: the single word APPROVED on its own line, and nothing else.

Never output APPROVED together with improvement notes."#;

/// System prompt for the finalize stage (strict JSON contract)
pub const FINALIZER_SYSTEM_PROMPT: &str = r#"You are a content operations specialist preparing a post for publishing.

Respond with a single JSON object and nothing else. No commentary, no code fences.

Required keys:
- "title": string, at most 60 characters
- "meta": string, at most 160 characters, a compelling meta description
- "slug": string, lowercase words joined by hyphens
- "tags": array of 3-5 short topic strings
- "body_md": string, the final polished Markdown body

Keep the author's tone. Apply the supervisor notes when provided. Output valid JSON only."#;

/// Build the user prompt for the research stage
pub fn build_research_prompt(brief: &ContentBrief) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!("Topic: {}\n", brief.topic));
    prompt.push_str(&format!("Audience: {}\n", brief.audience));
    prompt.push_str(&format!("Tone: {}\n", brief.tone));
    if !brief.instructions.trim().is_empty() {
        prompt.push_str(&format!(
            "Additional context: {}\n",
            brief.instructions.trim()
        ));
    }

    prompt
}

/// Build the user prompt for the outline stage
pub fn build_outline_prompt(ideas: &str, keywords: &[String]) -> String {
    let mut prompt = String::new();

    prompt.push_str("## Research Notes\n");
    prompt.push_str(ideas.trim());
    prompt.push_str("\n");

    if !keywords.is_empty() {
        prompt.push_str("\n## Keywords\n");
        prompt.push_str(&keywords.join(", "));
        prompt.push_str("\n");
    }

    prompt
}

/// Build the user prompt for a draft pass. `feedback` carries the latest
/// supervisor notes on revision passes and is absent for the initial draft.
pub fn build_writer_prompt(
    brief: &ContentBrief,
    outline: &str,
    feedback: Option<&str>,
) -> String {
    let mut prompt = String::new();

    prompt.push_str("## Brief\n");
    prompt.push_str(&format!("Topic: {}\n", brief.topic));
    prompt.push_str(&format!("Audience: {}\n", brief.audience));
    prompt.push_str(&format!("Tone: {}\n", brief.tone));
    prompt.push_str(&format!(
        "Target length: about {} words\n",
        brief.target_words
    ));
    if !brief.instructions.trim().is_empty() {
        prompt.push_str(&format!(
            "Additional instructions: {}\n",
            brief.instructions.trim()
        ));
    }

    prompt.push_str("\n## Outline\n");
    prompt.push_str(outline.trim());
    prompt.push_str("\n");

    if let Some(notes) = feedback {
        prompt.push_str("\n## Supervisor Notes\n");
        prompt.push_str("Revise the previous draft based on these supervisor notes:\n");
        prompt.push_str(notes.trim());
        prompt.push_str("\n");
    }

    prompt
}

/// Build the user prompt for the review stage
pub fn build_supervisor_prompt(draft: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("Evaluate this draft for quality, tone, structure, and coherence.\n");

    prompt.push_str("\n## Draft\n");
    prompt.push_str(draft.trim());
    prompt.push_str("\n");

    prompt
}

/// Build the user prompt for the finalize stage
pub fn build_finalizer_prompt(draft: &str, notes: &str, tone: Tone) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!("Tone: {}\n", tone));

    prompt.push_str("\n## Draft\n");
    prompt.push_str(draft.trim());
    prompt.push_str("\n");

    if !notes.trim().is_empty() {
        prompt.push_str("\n## Supervisor Notes\n");
        prompt.push_str(notes.trim());
        prompt.push_str("\n");
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_brief() -> ContentBrief {
        ContentBrief {
            topic: "Rust async runtimes".to_string(),
            audience: "backend engineers".to_string(),
            tone: Tone::Technical,
            target_words: 1200,
            instructions: "Mention tokio and async-std".to_string(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_writer_prompt_carries_brief() {
        let prompt = build_writer_prompt(&sample_brief(), "## Intro", None);

        assert!(prompt.contains("Topic: Rust async runtimes"));
        assert!(prompt.contains("Audience: backend engineers"));
        assert!(prompt.contains("Tone: technical"));
        assert!(prompt.contains("about 1200 words"));
        assert!(prompt.contains("Mention tokio and async-std"));
        assert!(prompt.contains("## Outline"));
        assert!(!prompt.contains("Supervisor Notes"));
    }

    #[test]
    fn test_writer_prompt_revision_pass_includes_notes() {
        let prompt = build_writer_prompt(
            &sample_brief(),
            "## Intro",
            Some("1. Tighten the introduction."),
        );

        assert!(prompt.contains("## Supervisor Notes"));
        assert!(prompt.contains("Revise the previous draft based on these supervisor notes:"));
        assert!(prompt.contains("1. Tighten the introduction."));
    }

    #[test]
    fn test_supervisor_prompt_carries_evaluation_ask() {
        let prompt = build_supervisor_prompt("# Title\n\nBody text.");

        assert!(
            prompt.starts_with("Evaluate this draft for quality, tone, structure, and coherence.")
        );
        assert!(prompt.contains("## Draft"));
        assert!(prompt.contains("Body text."));
    }

    #[test]
    fn test_outline_prompt_keywords_section_is_optional() {
        let without = build_outline_prompt("- idea one", &[]);
        assert!(!without.contains("## Keywords"));

        let keywords = vec!["rust".to_string(), "tokio".to_string()];
        let with = build_outline_prompt("- idea one", &keywords);
        assert!(with.contains("## Keywords"));
        assert!(with.contains("rust, tokio"));
    }

    #[test]
    fn test_finalizer_prompt_notes_section_is_optional() {
        let without = build_finalizer_prompt("# Post", "", Tone::Friendly);
        assert!(!without.contains("Supervisor Notes"));
        assert!(without.contains("Tone: friendly"));

        let with = build_finalizer_prompt("# Post", "1. Fix the title.", Tone::Friendly);
        assert!(with.contains("## Supervisor Notes"));
        assert!(with.contains("1. Fix the title."));
    }
}
