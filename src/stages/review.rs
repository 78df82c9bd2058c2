use anyhow::{Context, Result};
use tracing::info;

use crate::llm::{
    GroqClient, SUPERVISOR_SYSTEM_PROMPT, Usage, build_supervisor_prompt, parse_verdict,
};
use crate::models::{Draft, ReviewOutcome, Verdict};

/// Result of a review round
#[derive(Debug)]
pub struct ReviewResult {
    /// Verdict and notes for this round
    pub outcome: ReviewOutcome,
    /// Token usage for the call
    pub usage: Usage,
}

/// Execute one supervisor review over a draft and parse the verdict from
/// the response.
pub async fn execute_review(
    client: &GroqClient,
    draft: &Draft,
    round: u32,
) -> Result<ReviewResult> {
    info!(
        "Review round {}: checking draft revision {}",
        round, draft.revision
    );

    let prompt = build_supervisor_prompt(&draft.body);
    let completion = client
        .chat(SUPERVISOR_SYSTEM_PROMPT, &prompt)
        .await
        .context("Review stage failed")?;

    let verdict = parse_verdict(&completion.content);
    let outcome = ReviewOutcome {
        round,
        verdict,
        notes: completion.content,
    };

    match outcome.verdict {
        Verdict::Approved => info!("Review round {}: approved", round),
        Verdict::Revise => info!(
            "Review round {}: revision requested ({} notes)",
            round,
            outcome.note_count()
        ),
    }

    Ok(ReviewResult {
        usage: completion.usage,
        outcome,
    })
}
