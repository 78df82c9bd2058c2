use anyhow::{Context, Result};
use tracing::info;

use crate::llm::{GroqClient, OUTLINE_SYSTEM_PROMPT, Usage, build_outline_prompt};

/// Result of the outline stage
#[derive(Debug)]
pub struct OutlineResult {
    /// Markdown outline with H2/H3 sections
    pub outline: String,
    /// Token usage for the call
    pub usage: Usage,
}

/// Execute the outline stage: turn the research notes into a sectioned
/// Markdown outline, weaving in any caller-supplied keywords.
pub async fn execute_outline(
    client: &GroqClient,
    ideas: &str,
    keywords: &[String],
) -> Result<OutlineResult> {
    info!("Outline: structuring post ({} keywords)", keywords.len());

    let prompt = build_outline_prompt(ideas, keywords);
    let completion = client
        .chat(OUTLINE_SYSTEM_PROMPT, &prompt)
        .await
        .context("Outline stage failed")?;

    let section_count = completion
        .content
        .lines()
        .filter(|line| line.trim_start().starts_with("##"))
        .count();
    info!(
        "Outline: {} sections ({} tokens)",
        section_count, completion.usage.total_tokens
    );

    Ok(OutlineResult {
        outline: completion.content,
        usage: completion.usage,
    })
}
