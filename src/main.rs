//! gemmit - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemmit::annotate::HistoryAnnotator;
use gemmit::config::{self, Language, MessageLength, Settings};
use gemmit::gemini::GeminiClient;
use gemmit::generate::generate_and_set;
use gemmit::git::check_git_installed;
use gemmit::host::ConsoleHost;

/// Generate Git commit messages from diffs using Gemini.
#[derive(Parser, Debug)]
#[command(name = "gemmit")]
#[command(about = "Generate Git commit messages from diffs using Gemini")]
#[command(version)]
struct Cli {
    /// Repositories to consider (defaults to the current directory)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Use staged changes only
    #[arg(long)]
    staged: bool,

    /// Message language
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Message length
    #[arg(long, value_enum)]
    length: Option<MessageLength>,

    /// Gemini model identifier
    #[arg(long)]
    model: Option<String>,

    /// Prompt for references (issue numbers) to append to the message
    #[arg(long)]
    refs: bool,

    /// Print the generated message without writing it
    #[arg(long)]
    dry_run: bool,

    /// Path to an alternate config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gemmit=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    check_git_installed().await.context("git is required")?;

    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.staged {
        settings.only_staged = true;
    }
    if cli.refs {
        settings.prompt_for_refs = true;
    }
    if let Some(language) = cli.language {
        settings.language = language;
    }
    if let Some(length) = cli.length {
        settings.message_length = length;
    }
    if let Some(model) = cli.model {
        settings.model = model;
    }

    let api_key = config::api_key()?;
    let client = GeminiClient::with_base_url(
        settings.api_base_url.clone(),
        api_key,
        settings.model.clone(),
    );

    let search_paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };
    let host = ConsoleHost::new(search_paths);
    let annotator = HistoryAnnotator::new(settings.only_staged);

    generate_and_set(&settings, &client, &host, &annotator, cli.dry_run).await
}
