use serde::{Deserialize, Serialize};

/// Maximum title length the finalizer contract allows
pub const TITLE_MAX_CHARS: usize = 60;
/// Maximum meta description length the finalizer contract allows
pub const META_MAX_CHARS: usize = 160;
/// Maximum number of tags in a bundle
pub const MAX_TAGS: usize = 5;

/// Title used when the finalizer fails to produce one
pub const FALLBACK_TITLE: &str = "Untitled";
/// Slug used when the finalizer fails to produce one
pub const FALLBACK_SLUG: &str = "untitled";

/// Publish-ready content package produced by the finalize stage.
///
/// This is the strict JSON contract the finalizer prompt demands from the
/// model: all five keys must be present with these types, or the response
/// is rejected and the fallback bundle is used instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Post title (<= 60 chars after sanitization)
    pub title: String,
    /// Meta description (<= 160 chars after sanitization)
    pub meta: String,
    /// URL slug
    pub slug: String,
    /// Topic tags (3-5 requested; capped at 5 after sanitization)
    pub tags: Vec<String>,
    /// Final Markdown body
    pub body_md: String,
}

impl ContentBundle {
    /// Best-effort bundle wrapping a response that violated the contract:
    /// the raw text becomes the body and every other field takes a
    /// placeholder value.
    pub fn fallback(raw_response: &str) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            meta: String::new(),
            slug: FALLBACK_SLUG.to_string(),
            tags: Vec::new(),
            body_md: raw_response.to_string(),
        }
    }

    /// Enforce the contract limits deterministically: trim and truncate the
    /// title and meta, normalize the slug (deriving one from the title when
    /// the model's slug normalizes to nothing), and drop blank or duplicate
    /// tags beyond the cap. The body is left untouched.
    pub fn sanitized(mut self) -> Self {
        self.title = truncate_chars(self.title.trim(), TITLE_MAX_CHARS);
        if self.title.is_empty() {
            self.title = FALLBACK_TITLE.to_string();
        }

        self.meta = truncate_chars(self.meta.trim(), META_MAX_CHARS);

        let mut slug = slugify(&self.slug);
        if slug.is_empty() {
            slug = slugify(&self.title);
        }
        if slug.is_empty() {
            slug = FALLBACK_SLUG.to_string();
        }
        self.slug = slug;

        let mut seen: Vec<String> = Vec::new();
        let mut tags = Vec::new();
        for tag in &self.tags {
            let trimmed = tag.trim();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            tags.push(trimmed.to_string());
            if tags.len() == MAX_TAGS {
                break;
            }
        }
        self.tags = tags;

        self
    }
}

/// Build a URL-friendly slug: lowercase, ASCII alphanumerics kept,
/// separators and punctuation collapsed to single hyphens, no leading or
/// trailing hyphen. Non-ASCII characters pass through unchanged.
pub fn slugify(input: &str) -> String {
    let mapped: String = input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || !c.is_ascii() {
                c
            } else {
                '-'
            }
        })
        .collect();

    let mut result = String::new();
    let mut prev_hyphen = false;
    for c in mapped.chars() {
        if c == '-' {
            if !prev_hyphen && !result.is_empty() {
                result.push(c);
                prev_hyphen = true;
            }
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_end_matches('-').to_string()
}

/// Truncate to at most `max` characters without splitting a code point
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let bundle = ContentBundle::fallback("raw model output");
        assert_eq!(bundle.title, "Untitled");
        assert_eq!(bundle.meta, "");
        assert_eq!(bundle.slug, "untitled");
        assert!(bundle.tags.is_empty());
        assert_eq!(bundle.body_md, "raw model output");
    }

    #[test]
    fn test_parse_requires_all_keys() {
        let missing_slug = r#"{"title": "T", "meta": "M", "tags": [], "body_md": "B"}"#;
        assert!(serde_json::from_str::<ContentBundle>(missing_slug).is_err());

        let complete = r#"{
            "title": "T", "meta": "M", "slug": "t", "tags": ["a"], "body_md": "B"
        }"#;
        let bundle: ContentBundle = serde_json::from_str(complete).unwrap();
        assert_eq!(bundle.tags, vec!["a"]);
    }

    #[test]
    fn test_sanitize_truncates_title_and_meta() {
        let bundle = ContentBundle {
            title: format!("  {}  ", "x".repeat(80)),
            meta: "y".repeat(200),
            slug: "slug".to_string(),
            tags: vec![],
            body_md: String::new(),
        }
        .sanitized();

        assert_eq!(bundle.title.chars().count(), TITLE_MAX_CHARS);
        assert_eq!(bundle.meta.chars().count(), META_MAX_CHARS);
    }

    #[test]
    fn test_sanitize_truncation_is_char_safe() {
        let bundle = ContentBundle {
            title: "é".repeat(70),
            meta: String::new(),
            slug: "s".to_string(),
            tags: vec![],
            body_md: String::new(),
        }
        .sanitized();

        assert_eq!(bundle.title.chars().count(), TITLE_MAX_CHARS);
        assert!(bundle.title.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_sanitize_empty_title_and_slug() {
        let bundle = ContentBundle {
            title: "   ".to_string(),
            meta: String::new(),
            slug: "!!!".to_string(),
            tags: vec![],
            body_md: String::new(),
        }
        .sanitized();

        assert_eq!(bundle.title, "Untitled");
        assert_eq!(bundle.slug, "untitled");
    }

    #[test]
    fn test_sanitize_derives_slug_from_title() {
        let bundle = ContentBundle {
            title: "Zero-Copy Parsing in Rust".to_string(),
            meta: String::new(),
            slug: "???".to_string(),
            tags: vec![],
            body_md: String::new(),
        }
        .sanitized();

        assert_eq!(bundle.slug, "zero-copy-parsing-in-rust");
    }

    #[test]
    fn test_sanitize_tags_dedupe_and_cap() {
        let bundle = ContentBundle {
            title: "T".to_string(),
            meta: String::new(),
            slug: "t".to_string(),
            tags: vec![
                " rust ".to_string(),
                "Rust".to_string(),
                "".to_string(),
                "async".to_string(),
                "tokio".to_string(),
                "serde".to_string(),
                "clap".to_string(),
                "tracing".to_string(),
            ],
            body_md: String::new(),
        }
        .sanitized();

        assert_eq!(bundle.tags, vec!["rust", "async", "tokio", "serde", "clap"]);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("RAG   in production"), "rag-in-production");
        assert_eq!(slugify("--already--slugged--"), "already-slugged");
        assert_eq!(slugify("Rust_2024_edition"), "rust-2024-edition");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }
}
