use serde::{Deserialize, Serialize};

/// Decision parsed from the supervisor's notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The draft is acceptable as-is
    Approved,
    /// The draft needs another pass; the notes carry the feedback
    Revise,
}

/// One round of supervisor review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOutcome {
    /// 0 for the review of the initial draft, then 1, 2, ...
    pub round: u32,
    pub verdict: Verdict,
    /// The supervisor's full response text
    pub notes: String,
}

impl ReviewOutcome {
    /// Rough count of feedback lines (non-empty lines in the notes)
    pub fn note_count(&self) -> usize {
        self.notes.lines().filter(|l| !l.trim().is_empty()).count()
    }
}

/// How the revision loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approval {
    /// The supervisor approved a draft
    Approved,
    /// The revision budget ran out; the latest draft was finalized anyway
    RevisionLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_count_skips_blank_lines() {
        let outcome = ReviewOutcome {
            round: 0,
            verdict: Verdict::Revise,
            notes: "1. Tighten the intro\n\n2. Add a TL;DR\n   \n3. Fix the close\n".to_string(),
        };
        assert_eq!(outcome.note_count(), 3);
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&Approval::RevisionLimit).unwrap(),
            "\"revision_limit\""
        );
    }
}
