use anyhow::Result;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm::{GroqClient, Usage};
use crate::models::{
    Approval, ContentBrief, ContentBundle, Draft, ResearchPack, ReviewOutcome, Verdict,
};
use crate::stages::{
    FinalizeConfig, execute_draft, execute_finalize, execute_outline, execute_research,
    execute_review,
};

/// Configuration for a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Revision drafts allowed after the initial one
    pub max_revisions: u32,
    /// Finalize stage settings
    pub finalize: FinalizeConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_revisions: 2,
            finalize: FinalizeConfig::default(),
        }
    }
}

/// Everything a completed run produced
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Unique id for this run
    pub run_id: String,
    /// Research stage output
    pub research: ResearchPack,
    /// Outline Markdown
    pub outline: String,
    /// The draft that was finalized
    pub draft: Draft,
    /// Every review round, in order
    pub reviews: Vec<ReviewOutcome>,
    /// How the revision loop ended
    pub approval: Approval,
    /// Sanitized publish-ready bundle
    pub bundle: ContentBundle,
    /// Whether the finalize fallback was used
    pub used_fallback: bool,
    /// Token usage across all calls
    pub usage: Usage,
}

/// What the pipeline does after a review round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    Finalize(Approval),
    Revise,
}

/// Loop decision for round `round` (0-based): approval finalizes
/// immediately; otherwise revise until the round index reaches
/// `max_revisions`, then finalize the latest draft anyway.
fn next_step(verdict: Verdict, round: u32, max_revisions: u32) -> NextStep {
    match verdict {
        Verdict::Approved => NextStep::Finalize(Approval::Approved),
        Verdict::Revise if round >= max_revisions => NextStep::Finalize(Approval::RevisionLimit),
        Verdict::Revise => NextStep::Revise,
    }
}

/// Run the full pipeline for a brief:
///
/// 1. Research ideas and keywords
/// 2. Outline the post
/// 3. Write the initial draft
/// 4. Review; while revision is requested and the revision budget remains,
///    rewrite from the latest notes and review again
/// 5. Finalize the latest draft into a publish-ready bundle
///
/// The loop runs at most `max_revisions + 1` reviews and the same number of
/// writer passes, so every run terminates.
pub async fn run_pipeline(
    client: &GroqClient,
    brief: &ContentBrief,
    config: &PipelineConfig,
) -> Result<PipelineOutcome> {
    brief.validate()?;

    let run_id = Uuid::new_v4().to_string();
    info!(
        "Run {}: \"{}\" for {} ({} revisions max)",
        run_id, brief.topic, brief.audience, config.max_revisions
    );

    let mut usage = Usage::default();

    let research_result = execute_research(client, brief).await?;
    usage.merge(research_result.usage);

    let outline_result =
        execute_outline(client, &research_result.pack.ideas, &brief.keywords).await?;
    usage.merge(outline_result.usage);

    let initial = execute_draft(client, brief, &outline_result.outline, None, 0).await?;
    usage.merge(initial.usage);
    let mut draft = initial.draft;

    let mut reviews: Vec<ReviewOutcome> = Vec::new();
    let approval = loop {
        let round = reviews.len() as u32;
        let review_result = execute_review(client, &draft, round).await?;
        usage.merge(review_result.usage);
        let verdict = review_result.outcome.verdict;
        reviews.push(review_result.outcome);

        match next_step(verdict, round, config.max_revisions) {
            NextStep::Finalize(approval) => break approval,
            NextStep::Revise => {
                let notes = reviews[reviews.len() - 1].notes.as_str();
                let revised =
                    execute_draft(client, brief, &outline_result.outline, Some(notes), round + 1)
                        .await?;
                usage.merge(revised.usage);
                draft = revised.draft;
            }
        }
    };

    if approval == Approval::RevisionLimit {
        warn!(
            "Run {}: revision limit reached after {} rounds, finalizing latest draft",
            run_id,
            reviews.len()
        );
    }

    let notes = reviews.last().map(|r| r.notes.as_str()).unwrap_or_default();
    let finalize_result =
        execute_finalize(client, &draft, notes, brief.tone, &config.finalize).await?;
    usage.merge(finalize_result.usage);

    info!(
        "Run {}: complete ({} reviews, {} revisions, {} words, {} tokens)",
        run_id,
        reviews.len(),
        draft.revision,
        draft.word_count(),
        usage.total_tokens
    );

    Ok(PipelineOutcome {
        run_id,
        research: research_result.pack,
        outline: outline_result.outline,
        draft,
        reviews,
        approval,
        bundle: finalize_result.bundle,
        used_fallback: finalize_result.used_fallback,
        usage,
    })
}
