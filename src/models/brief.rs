use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Lower bound for the requested article length
pub const MIN_TARGET_WORDS: u32 = 300;
/// Upper bound for the requested article length
pub const MAX_TARGET_WORDS: u32 = 4000;
/// Target length used when the brief does not specify one
pub const DEFAULT_TARGET_WORDS: u32 = 900;

/// Voice the generated post should be written in
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Casual,
    Professional,
    Technical,
}

impl Tone {
    /// Lowercase name as used in prompts and serialized briefs
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Technical => "technical",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the pipeline needs to know about the post to write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBrief {
    /// Subject of the post
    pub topic: String,
    /// Who the post is written for
    pub audience: String,
    /// Requested voice
    #[serde(default)]
    pub tone: Tone,
    /// Requested length in words
    #[serde(default = "default_target_words")]
    pub target_words: u32,
    /// Free-text constraints, citations, style preferences
    #[serde(default)]
    pub instructions: String,
    /// SEO keywords the outline should work in, if the caller has any
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn default_target_words() -> u32 {
    DEFAULT_TARGET_WORDS
}

impl ContentBrief {
    /// Create a brief with default tone, length, and no extra instructions
    pub fn new(topic: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: audience.into(),
            tone: Tone::default(),
            target_words: DEFAULT_TARGET_WORDS,
            instructions: String::new(),
            keywords: Vec::new(),
        }
    }

    /// Check the brief against the constraints the pipeline relies on
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            anyhow::bail!("Brief has an empty topic");
        }
        if self.audience.trim().is_empty() {
            anyhow::bail!("Brief has an empty audience");
        }
        if !(MIN_TARGET_WORDS..=MAX_TARGET_WORDS).contains(&self.target_words) {
            anyhow::bail!(
                "Target word count {} is outside the supported range {}-{}",
                self.target_words,
                MIN_TARGET_WORDS,
                MAX_TARGET_WORDS
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_brief_defaults() {
        let brief = ContentBrief::new("Rust error handling", "library authors");
        assert_eq!(brief.tone, Tone::Friendly);
        assert_eq!(brief.target_words, DEFAULT_TARGET_WORDS);
        assert!(brief.instructions.is_empty());
        assert!(brief.keywords.is_empty());
        assert!(brief.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_topic() {
        let brief = ContentBrief::new("   ", "engineers");
        let err = brief.validate().unwrap_err();
        assert!(err.to_string().contains("topic"));
    }

    #[test]
    fn test_validate_rejects_empty_audience() {
        let brief = ContentBrief::new("Topic", "");
        let err = brief.validate().unwrap_err();
        assert!(err.to_string().contains("audience"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_target() {
        let mut brief = ContentBrief::new("Topic", "audience");
        brief.target_words = 100;
        assert!(brief.validate().is_err());
        brief.target_words = 5000;
        assert!(brief.validate().is_err());
        brief.target_words = MIN_TARGET_WORDS;
        assert!(brief.validate().is_ok());
        brief.target_words = MAX_TARGET_WORDS;
        assert!(brief.validate().is_ok());
    }

    #[test]
    fn test_tone_round_trip() {
        let json = serde_json::to_string(&Tone::Professional).unwrap();
        assert_eq!(json, "\"professional\"");
        let tone: Tone = serde_json::from_str("\"technical\"").unwrap();
        assert_eq!(tone, Tone::Technical);
        assert_eq!(tone.to_string(), "technical");
    }
}
