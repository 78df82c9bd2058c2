use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ContentBrief;

/// Parse a JSON brief file into a ContentBrief
pub fn parse_brief_file(path: &Path) -> Result<ContentBrief> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_brief_json(&content)
}

/// Parse a JSON brief string; optional fields take their defaults
pub fn parse_brief_json(json: &str) -> Result<ContentBrief> {
    serde_json::from_str(json).context("Failed to parse brief JSON")
}

/// Read a draft or notes file for the standalone review and finalize
/// commands
pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Split a comma-separated keyword flag into trimmed, non-empty keywords
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|k| k.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_TARGET_WORDS, Tone};

    #[test]
    fn test_parse_minimal_brief() {
        let json = r#"{
            "topic": "Why borrow checkers matter",
            "audience": "junior developers"
        }"#;

        let brief = parse_brief_json(json).unwrap();

        assert_eq!(brief.topic, "Why borrow checkers matter");
        assert_eq!(brief.audience, "junior developers");
        assert_eq!(brief.tone, Tone::Friendly);
        assert_eq!(brief.target_words, DEFAULT_TARGET_WORDS);
        assert!(brief.instructions.is_empty());
        assert!(brief.keywords.is_empty());
    }

    #[test]
    fn test_parse_full_brief() {
        let json = r#"{
            "topic": "Zero-downtime deploys",
            "audience": "SREs",
            "tone": "technical",
            "target_words": 1500,
            "instructions": "Cover blue-green and canary strategies",
            "keywords": ["kubernetes", "rollout"]
        }"#;

        let brief = parse_brief_json(json).unwrap();

        assert_eq!(brief.tone, Tone::Technical);
        assert_eq!(brief.target_words, 1500);
        assert_eq!(brief.keywords, vec!["kubernetes", "rollout"]);
    }

    #[test]
    fn test_parse_malformed_brief() {
        assert!(parse_brief_json("not json").is_err());
        assert!(parse_brief_json(r#"{"topic": "no audience"}"#).is_err());
    }

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(
            parse_keyword_list("rust, async,,  tokio "),
            vec!["rust", "async", "tokio"]
        );
        assert!(parse_keyword_list("").is_empty());
        assert!(parse_keyword_list(" , ,").is_empty());
    }
}
