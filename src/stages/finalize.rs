use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::llm::{
    FINALIZER_SYSTEM_PROMPT, GroqClient, Usage, build_finalizer_prompt, parse_bundle,
};
use crate::models::{ContentBundle, Draft, Tone};

/// Configuration for the finalize stage
#[derive(Debug, Clone)]
pub struct FinalizeConfig {
    /// Maximum retries when a response violates the bundle contract
    pub max_retries: u32,
}

impl Default for FinalizeConfig {
    fn default() -> Self {
        Self { max_retries: 2 }
    }
}

/// Result of the finalize stage
#[derive(Debug)]
pub struct FinalizeResult {
    /// Sanitized publish-ready bundle
    pub bundle: ContentBundle,
    /// Whether the wrapped-response fallback was used
    pub used_fallback: bool,
    /// Token usage across all attempts
    pub usage: Usage,
}

/// Execute the finalize stage: request the strict-JSON bundle for the
/// draft.
///
/// Transport and API errors fail the stage. Contract violations (a
/// response that is not a valid bundle) are retried up to
/// `config.max_retries` times; if every attempt violates the contract, the
/// last response text is wrapped in a fallback bundle instead of failing
/// the run. Every returned bundle is sanitized.
pub async fn execute_finalize(
    client: &GroqClient,
    draft: &Draft,
    notes: &str,
    tone: Tone,
    config: &FinalizeConfig,
) -> Result<FinalizeResult> {
    info!("Finalize: packaging draft revision {}", draft.revision);

    let prompt = build_finalizer_prompt(&draft.body, notes, tone);

    let mut usage = Usage::default();
    let mut last_raw: Option<String> = None;

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            info!("Finalize: retry {} of {}", attempt, config.max_retries);
        }

        let completion = client
            .chat(FINALIZER_SYSTEM_PROMPT, &prompt)
            .await
            .context("Finalize stage failed")?;
        usage.merge(completion.usage);

        match parse_bundle(&completion.content) {
            Ok(bundle) => {
                let bundle = bundle.sanitized();
                info!(
                    "Finalize: bundle \"{}\" ({} tags, {} tokens)",
                    bundle.title,
                    bundle.tags.len(),
                    usage.total_tokens
                );
                return Ok(FinalizeResult {
                    bundle,
                    used_fallback: false,
                    usage,
                });
            }
            Err(e) => {
                warn!("Finalize: response violated the bundle contract: {}", e);
                last_raw = Some(completion.content);
            }
        }
    }

    warn!(
        "Finalize: wrapping raw response after {} failed attempts",
        config.max_retries + 1
    );
    let raw = last_raw.unwrap_or_default();

    Ok(FinalizeResult {
        bundle: ContentBundle::fallback(&raw).sanitized(),
        used_fallback: true,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_config_default() {
        let config = FinalizeConfig::default();
        assert_eq!(config.max_retries, 2);
    }
}
