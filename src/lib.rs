pub mod io;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use io::{
    RunReport, parse_brief_file, parse_brief_json, parse_keyword_list, read_text_file,
    render_markdown, write_markdown,
};
pub use llm::{DEFAULT_MODEL, GroqClient, GroqConfig, Usage};
pub use models::{Approval, ContentBrief, ContentBundle, Draft, ReviewOutcome, Tone, Verdict};
pub use pipeline::{PipelineConfig, PipelineOutcome, run_pipeline};
pub use stages::{FinalizeConfig, execute_finalize, execute_review};
