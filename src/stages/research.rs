use anyhow::{Context, Result};
use tracing::info;

use crate::llm::{GroqClient, RESEARCH_SYSTEM_PROMPT, Usage, build_research_prompt};
use crate::models::{ContentBrief, ResearchPack};

/// Result of the research stage
#[derive(Debug)]
pub struct ResearchResult {
    /// Idea bullets and keyword suggestions for the writer
    pub pack: ResearchPack,
    /// Token usage for the call
    pub usage: Usage,
}

/// Execute the research stage: collect idea bullets and SEO keyword
/// suggestions for the brief in a single call.
pub async fn execute_research(
    client: &GroqClient,
    brief: &ContentBrief,
) -> Result<ResearchResult> {
    info!("Research: gathering ideas for \"{}\"", brief.topic);

    let prompt = build_research_prompt(brief);
    let completion = client
        .chat(RESEARCH_SYSTEM_PROMPT, &prompt)
        .await
        .context("Research stage failed")?;

    info!(
        "Research: {} chars of notes ({} tokens)",
        completion.content.len(),
        completion.usage.total_tokens
    );

    Ok(ResearchResult {
        pack: ResearchPack {
            ideas: completion.content,
        },
        usage: completion.usage,
    })
}
