use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::Usage;
use crate::models::{Approval, ContentBrief, ContentBundle, ReviewOutcome};
use crate::pipeline::PipelineOutcome;

/// Render a bundle as a Markdown document with YAML front matter.
///
/// The output is deterministic for a given bundle and date: quoted front
/// matter fields, tags as a flow sequence, and the body with exactly one
/// trailing newline.
pub fn render_markdown(bundle: &ContentBundle, date: NaiveDate) -> String {
    let mut doc = String::new();

    doc.push_str("---\n");
    doc.push_str(&format!("title: \"{}\"\n", yaml_escape(&bundle.title)));
    doc.push_str(&format!(
        "description: \"{}\"\n",
        yaml_escape(&bundle.meta)
    ));
    doc.push_str(&format!("slug: \"{}\"\n", yaml_escape(&bundle.slug)));
    let tags: Vec<String> = bundle
        .tags
        .iter()
        .map(|tag| format!("\"{}\"", yaml_escape(tag)))
        .collect();
    doc.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    doc.push_str(&format!("date: {}\n", date.format("%Y-%m-%d")));
    doc.push_str("---\n\n");

    doc.push_str(bundle.body_md.trim_end());
    doc.push('\n');

    doc
}

/// Write a bundle as a Markdown file dated today (UTC)
pub fn write_markdown(bundle: &ContentBundle, path: &Path) -> Result<()> {
    let rendered = render_markdown(bundle, Utc::now().date_naive());
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    write!(file, "{}", rendered)?;
    Ok(())
}

/// Escape a string for a double-quoted YAML scalar; newlines collapse to
/// spaces so front matter stays one line per field
fn yaml_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
}

/// Machine-readable record of a whole pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    /// RFC3339 creation timestamp
    pub created_at: String,
    /// Model that served every stage
    pub model: String,
    pub brief: ContentBrief,
    /// Research stage notes
    pub ideas: String,
    /// Outline Markdown
    pub outline: String,
    /// Every review round, in order
    pub reviews: Vec<ReviewOutcome>,
    /// Revision passes after the initial draft
    pub revisions_used: u32,
    pub approval: Approval,
    pub used_fallback: bool,
    pub bundle: ContentBundle,
    /// Word count of the published body
    pub word_count: usize,
    pub usage: Usage,
}

impl RunReport {
    /// Build a report from a finished run
    pub fn from_outcome(outcome: &PipelineOutcome, brief: &ContentBrief, model: &str) -> Self {
        Self {
            run_id: outcome.run_id.clone(),
            created_at: Utc::now().to_rfc3339(),
            model: model.to_string(),
            brief: brief.clone(),
            ideas: outcome.research.ideas.clone(),
            outline: outcome.outline.clone(),
            reviews: outcome.reviews.clone(),
            revisions_used: outcome.draft.revision,
            approval: outcome.approval,
            used_fallback: outcome.used_fallback,
            bundle: outcome.bundle.clone(),
            word_count: outcome.bundle.body_md.split_whitespace().count(),
            usage: outcome.usage,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}
