use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use byline::{
    ContentBrief, Draft, FinalizeConfig, GroqClient, GroqConfig, PipelineConfig, RunReport, Tone,
    execute_finalize, execute_review, parse_brief_file, parse_keyword_list, read_text_file,
    run_pipeline, write_markdown,
};

#[derive(Parser)]
#[command(name = "byline")]
#[command(author, version, about = "Blog writing pipeline with supervised revision", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a post from a brief: research, outline, draft, supervised
    /// revision, and finalization
    Write {
        /// Topic of the post (required unless --brief is given)
        #[arg(long)]
        topic: Option<String>,

        /// Audience the post is written for (required unless --brief is given)
        #[arg(long)]
        audience: Option<String>,

        /// Voice the post should be written in
        #[arg(long, value_enum, default_value = "friendly")]
        tone: Tone,

        /// Requested length in words (300-4000)
        #[arg(long, default_value = "900")]
        target_words: u32,

        /// Extra instructions for the writer
        #[arg(long, default_value = "")]
        instructions: String,

        /// Comma-separated SEO keywords for the outline
        #[arg(long, default_value = "")]
        keywords: String,

        /// JSON brief file (replaces the brief flags above)
        #[arg(long)]
        brief: Option<PathBuf>,

        /// Output Markdown file
        #[arg(short, long)]
        output: PathBuf,

        /// Optional JSON run report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Revision drafts allowed after the initial one
        #[arg(long, default_value = "2")]
        max_revisions: u32,

        /// Model to use
        #[arg(long)]
        model: Option<String>,

        /// Sampling temperature (0-2)
        #[arg(long)]
        temperature: Option<f64>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the supervisor over an existing draft without changing it
    Review {
        /// Draft Markdown file to review
        #[arg(short, long)]
        draft: PathBuf,

        /// Model to use
        #[arg(long)]
        model: Option<String>,

        /// Sampling temperature (0-2)
        #[arg(long)]
        temperature: Option<f64>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Package an existing draft into a publish-ready post
    Finalize {
        /// Draft Markdown file to package
        #[arg(short, long)]
        draft: PathBuf,

        /// Supervisor notes file to apply
        #[arg(long)]
        notes: Option<PathBuf>,

        /// Voice of the post
        #[arg(long, value_enum, default_value = "friendly")]
        tone: Tone,

        /// Output Markdown file
        #[arg(short, long)]
        output: PathBuf,

        /// Model to use
        #[arg(long)]
        model: Option<String>,

        /// Sampling temperature (0-2)
        #[arg(long)]
        temperature: Option<f64>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Write {
            topic,
            audience,
            tone,
            target_words,
            instructions,
            keywords,
            brief,
            output,
            report,
            max_revisions,
            model,
            temperature,
            verbose,
        } => {
            setup_logging(verbose);
            let brief = resolve_brief(
                brief,
                topic,
                audience,
                tone,
                target_words,
                instructions,
                &keywords,
            )?;
            write_post(brief, output, report, max_revisions, model, temperature).await
        }
        Commands::Review {
            draft,
            model,
            temperature,
            verbose,
        } => {
            setup_logging(verbose);
            review_draft(draft, model, temperature).await
        }
        Commands::Finalize {
            draft,
            notes,
            tone,
            output,
            model,
            temperature,
            verbose,
        } => {
            setup_logging(verbose);
            finalize_draft(draft, notes, tone, output, model, temperature).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Build the brief from a file when one is given, otherwise from the flags
fn resolve_brief(
    brief_file: Option<PathBuf>,
    topic: Option<String>,
    audience: Option<String>,
    tone: Tone,
    target_words: u32,
    instructions: String,
    keywords: &str,
) -> Result<ContentBrief> {
    if let Some(path) = brief_file {
        info!("Loading brief from {:?}", path);
        return parse_brief_file(&path);
    }

    let topic = topic.context("--topic is required when no --brief file is given")?;
    let audience = audience.context("--audience is required when no --brief file is given")?;

    Ok(ContentBrief {
        topic,
        audience,
        tone,
        target_words,
        instructions,
        keywords: parse_keyword_list(keywords),
    })
}

fn build_client(model: Option<String>, temperature: Option<f64>) -> Result<GroqClient> {
    let mut config = GroqConfig::from_env()?;
    if let Some(model) = model {
        config.model = model;
    }
    if let Some(temperature) = temperature {
        config.temperature = temperature;
    }
    Ok(GroqClient::new(config))
}

async fn write_post(
    brief: ContentBrief,
    output: PathBuf,
    report: Option<PathBuf>,
    max_revisions: u32,
    model: Option<String>,
    temperature: Option<f64>,
) -> Result<()> {
    let client = build_client(model, temperature)?;

    let config = PipelineConfig {
        max_revisions,
        ..Default::default()
    };
    let outcome = run_pipeline(&client, &brief, &config).await?;

    write_markdown(&outcome.bundle, &output)?;
    info!("Post written to {:?}", output);

    if let Some(report_path) = report {
        let run_report = RunReport::from_outcome(&outcome, &brief, client.model());
        run_report.write_json(&report_path)?;
        info!("Run report written to {:?}", report_path);
    }

    info!(
        "Complete: \"{}\" ({} reviews, approval: {:?}, {} tokens)",
        outcome.bundle.title,
        outcome.reviews.len(),
        outcome.approval,
        outcome.usage.total_tokens
    );

    Ok(())
}

async fn review_draft(
    draft_path: PathBuf,
    model: Option<String>,
    temperature: Option<f64>,
) -> Result<()> {
    let client = build_client(model, temperature)?;

    info!("Loading draft from {:?}", draft_path);
    let draft = Draft::initial(read_text_file(&draft_path)?);

    let result = execute_review(&client, &draft, 0).await?;

    println!("Draft Review");
    println!("============");
    println!("Words: {}", draft.word_count());
    println!("Verdict: {:?}", result.outcome.verdict);
    println!();
    println!("{}", result.outcome.notes.trim());

    Ok(())
}

async fn finalize_draft(
    draft_path: PathBuf,
    notes_path: Option<PathBuf>,
    tone: Tone,
    output: PathBuf,
    model: Option<String>,
    temperature: Option<f64>,
) -> Result<()> {
    let client = build_client(model, temperature)?;

    info!("Loading draft from {:?}", draft_path);
    let draft = Draft::initial(read_text_file(&draft_path)?);

    let notes = match &notes_path {
        Some(path) => read_text_file(path)?,
        None => String::new(),
    };

    let result =
        execute_finalize(&client, &draft, &notes, tone, &FinalizeConfig::default()).await?;

    if result.used_fallback {
        warn!("Bundle contract was never satisfied; wrapped the raw response");
    }

    write_markdown(&result.bundle, &output)?;
    info!("Post written to {:?}", output);

    println!("Title: {}", result.bundle.title);
    println!("Slug: {}", result.bundle.slug);
    println!("Tags: {}", result.bundle.tags.join(", "));

    Ok(())
}
