use serde::{Deserialize, Serialize};

/// Output of the research stage: idea bullets plus suggested SEO keywords,
/// kept as the single text blob the model produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchPack {
    pub ideas: String,
}

/// A draft of the post body at some point in the revision loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    /// Markdown body text
    pub body: String,
    /// 0 for the initial draft, incremented by each revision pass
    pub revision: u32,
}

impl Draft {
    /// First draft produced from the outline, or a draft loaded from disk
    pub fn initial(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            revision: 0,
        }
    }

    /// Whitespace-delimited word count, for comparing against the target
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let draft = Draft::initial("## Intro\n\nRust makes  invalid states\nunrepresentable.");
        assert_eq!(draft.word_count(), 7);
        assert_eq!(draft.revision, 0);
    }

    #[test]
    fn test_word_count_empty() {
        let draft = Draft::initial("   \n\n  ");
        assert_eq!(draft.word_count(), 0);
    }
}
