use anyhow::{Context, Result};
use tracing::info;

use crate::llm::{GroqClient, Usage, WRITER_SYSTEM_PROMPT, build_writer_prompt};
use crate::models::{ContentBrief, Draft};

/// Result of a draft pass
#[derive(Debug)]
pub struct DraftResult {
    /// The written (or rewritten) draft
    pub draft: Draft,
    /// Token usage for the call
    pub usage: Usage,
}

/// Execute one writer pass. The initial draft runs with no feedback;
/// revision passes regenerate the full post from the same outline with the
/// latest supervisor notes appended to the prompt.
pub async fn execute_draft(
    client: &GroqClient,
    brief: &ContentBrief,
    outline: &str,
    feedback: Option<&str>,
    revision: u32,
) -> Result<DraftResult> {
    if feedback.is_some() {
        info!("Draft: revision {} for \"{}\"", revision, brief.topic);
    } else {
        info!("Draft: initial draft for \"{}\"", brief.topic);
    }

    let prompt = build_writer_prompt(brief, outline, feedback);
    let completion = client
        .chat(WRITER_SYSTEM_PROMPT, &prompt)
        .await
        .context("Draft stage failed")?;

    let draft = Draft {
        body: completion.content,
        revision,
    };
    info!(
        "Draft {}: {} words (target {}, {} tokens)",
        revision,
        draft.word_count(),
        brief.target_words,
        completion.usage.total_tokens
    );

    Ok(DraftResult {
        draft,
        usage: completion.usage,
    })
}
