mod chat;
mod docs;
mod viewer;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cookbook::{DEFAULT_MAX_DEPTH, DocSet, Language, LoadOptions};
use frames::conversation::DEFAULT_MODEL;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat request failed: {0}")]
    Status(u16),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Docs(#[from] cookbook::DocError),
    #[error("no document with id `{0}`")]
    UnknownDoc(String),
    #[error("environment info has no viewer URL")]
    NoViewer,
}

#[derive(Parser, Debug)]
#[command(name = "cookbook-cli", about = "Cookbook corpus and chat backend CLI")]
struct Cli {
    #[arg(long, env = "CHAT_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stream a conversation; reads prompts from stdin when none is given.
    Chat {
        #[arg(long, env = "CHAT_MODEL", default_value = DEFAULT_MODEL)]
        model: String,
        prompt: Option<String>,
    },
    /// Print the remote desktop viewer URL once it answers.
    Viewer {
        #[arg(long, default_value_t = 5)]
        attempts: u32,
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },
    Docs(DocsCommand),
}

#[derive(Args, Debug)]
struct DocsCommand {
    #[arg(long, env = "DOCS_DIR", default_value = "docs")]
    dir: PathBuf,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u8,

    #[command(subcommand)]
    command: DocsSubcommand,
}

#[derive(Subcommand, Debug)]
enum DocsSubcommand {
    List {
        #[arg(long, default_value = "zh")]
        lang: Language,
        #[arg(long, default_value = "")]
        query: String,
        /// Print every id in every language instead of one sidebar.
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    Headings {
        id: String,
    },
    Resolve {
        fragment: String,
        #[arg(long, default_value = "zh")]
        lang: Language,
    },
    Render {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Chat { model, prompt } => {
            let client = reqwest::Client::new();
            let mut stdout = io::stdout().lock();
            chat::run(&client, &cli.api_url, &model, prompt, io::stdin().lock(), &mut stdout).await
        }
        Command::Viewer { attempts, delay_ms } => run_viewer(&cli.api_url, attempts, delay_ms).await,
        Command::Docs(docs) => run_docs(docs),
    }
}

async fn run_viewer(api_url: &str, attempts: u32, delay_ms: u64) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let (url, readiness) = viewer::resolve(&client, api_url, viewer::policy(attempts, delay_ms)).await?;
    if !readiness.is_ready() {
        tracing::warn!(?readiness, "viewer not ready, printing URL anyway");
    }
    println!("{url}");
    Ok(())
}

fn run_docs(args: DocsCommand) -> Result<(), CliError> {
    let options = LoadOptions { max_depth: args.max_depth.clamp(1, 6) };
    let docs = DocSet::load_dir(&args.dir, options)?;
    tracing::debug!(docs = docs.len(), dir = %args.dir.display(), "corpus loaded");

    let output = match args.command {
        DocsSubcommand::List { all: true, .. } => docs::list_all(&docs),
        DocsSubcommand::List { lang, query, all: false } => docs::list(&docs, lang, &query),
        DocsSubcommand::Headings { id } => docs::headings(&docs, &id)?,
        DocsSubcommand::Resolve { fragment, lang } => docs::resolve(&docs, &fragment, lang),
        DocsSubcommand::Render { id } => docs::render(&docs, &id)?,
    };
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
