//! `thai-sentiment` CLI.
//! Scores a single text, a comment batch, or a whole post (URL + comments)
//! and prints the result as JSON on stdout. Logs and metrics go to stderr.
//!
//! Comment files are JSON arrays of strings or `{ "text": .., "id": .. }`
//! records; pass `-` to read from stdin.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use thai_sentiment_analyzer::{
    telemetry, AnalyzerConfig, CommentInput, PostAnalyzer, SentimentAnalyzer,
};

#[derive(Debug, Parser)]
#[command(
    name = "thai-sentiment",
    version,
    about = "Rule-based Thai comment sentiment analyzer"
)]
struct Cli {
    /// Lexicon override (JSON or TOML).
    /// Defaults to $SENTIMENT_LEXICON_PATH, then config/lexicon.{toml,json}.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Print one-line JSON instead of pretty output.
    #[arg(long, global = true)]
    compact: bool,

    /// Print Prometheus metrics to stderr after the run.
    #[arg(long, global = true)]
    metrics: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single text.
    Text { text: String },
    /// Score a JSON array of comments.
    Batch {
        /// Path to the comments file, or `-` for stdin.
        input: PathBuf,
    },
    /// Full post report: post id, batch analysis and recommendations.
    Post {
        #[arg(long)]
        url: String,
        /// Path to the comments file, or `-` for stdin.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json);

    let prometheus = if cli.metrics {
        Some(telemetry::install_prometheus()?)
    } else {
        None
    };

    let cfg = match &cli.lexicon {
        Some(p) => AnalyzerConfig::with_lexicon_path(p),
        None => AnalyzerConfig::from_env()?,
    };
    debug!(?cfg, "resolved analyzer config");
    let analyzer = SentimentAnalyzer::from_config(&cfg)?;

    match &cli.command {
        Command::Text { text } => emit(&analyzer.analyze_sentiment(text), cli.compact)?,
        Command::Batch { input } => {
            let comments = read_comments(input)?;
            emit(&analyzer.analyze_batch(&comments), cli.compact)?;
        }
        Command::Post { url, input } => {
            let comments = read_comments(input)?;
            let report = PostAnalyzer::with_analyzer(analyzer).analyze_post(url, &comments);
            emit(&report, cli.compact)?;
        }
    }

    if let Some(handle) = prometheus {
        eprintln!("{}", handle.render());
    }
    Ok(())
}

fn emit<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn read_comments(path: &Path) -> Result<Vec<CommentInput>> {
    let raw = if path == Path::new("-") {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("reading comments from stdin")?;
        s
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("reading comments from {}", path.display()))?
    };
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing comments JSON from {}", path.display()))
}
