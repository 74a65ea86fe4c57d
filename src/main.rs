use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{info, warn};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use unicode_width::UnicodeWidthStr;

use lifeline::core::clipboard::FileClipboard;
use lifeline::core::config::{self, ResolvedConfig};
use lifeline::core::content::{ContentError, ContentIssue, ContentModel};
use lifeline::core::engine::{Navigator, NavigatorOptions};
use lifeline::core::markup;
use lifeline::core::store::{self, FileStore, MemoryStore, Store};
use lifeline::core::view::View;
use lifeline::tui;

const WRAP_WIDTH: usize = 80;

#[derive(Parser)]
#[command(
    name = "lifeline",
    version,
    about = "Technical Lifeline: step-by-step help for coding and Git trouble"
)]
struct Args {
    /// Language for localized advice (e.g. javascript, java, csharp)
    #[arg(short, long)]
    language: Option<String>,

    /// Decision tree JSON to use instead of the built-in one
    #[arg(short, long)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the decision tree and list any problems
    Check,
    /// Print one node of the tree as plain text
    Show {
        /// Node id, e.g. git_merge_conflict
        node: String,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let config = config::load_config().map_err(setup_error)?;
    let resolved = config::resolve(&config, args.language.as_deref(), args.content.as_deref());

    init_logging(args.command.is_none(), resolved.log_path.as_deref());
    info!("Lifeline starting up (content: {:?})", resolved.content_path);

    let content = load_content(&resolved).map_err(setup_error)?;

    match args.command {
        Some(Command::Check) => run_check(&content),
        Some(Command::Show { node }) => run_show(content, &resolved, &node),
        None => run_tui(content, &resolved),
    }
}

/// The TUI owns the terminal, so it logs to a file; subcommands log
/// warnings to stderr.
fn init_logging(tui_mode: bool, log_path: Option<&Path>) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if !tui_mode {
        let _ = TermLogger::init(
            LevelFilter::Warn,
            log_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
        return;
    }

    let Some(path) = log_path else { return };
    if let Some(dir) = path.parent()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

/// Keeps the readable message when `main` reports the error.
fn setup_error(e: impl std::fmt::Display) -> io::Error {
    io::Error::other(e.to_string())
}

fn load_content(resolved: &ResolvedConfig) -> Result<ContentModel, ContentError> {
    match &resolved.content_path {
        Some(path) => ContentModel::load(path),
        None => ContentModel::builtin(),
    }
}

fn run_check(content: &ContentModel) -> io::Result<()> {
    let issues = content.validate();
    if issues.is_empty() {
        println!("{} nodes, no issues", content.len());
        return Ok(());
    }
    for issue in &issues {
        println!("{issue}");
    }
    eprintln!("{} issue(s) found", issues.len());
    std::process::exit(1);
}

fn run_show(content: ContentModel, resolved: &ResolvedConfig, node: &str) -> io::Result<()> {
    // Read the saved language, but never write anything back.
    let persisted = resolved
        .store_path
        .as_ref()
        .and_then(|path| store::load_language(&FileStore::new(path)));
    let language = resolved
        .forced_language
        .clone()
        .or(persisted)
        .unwrap_or_else(|| resolved.default_language.clone());

    let mut navigator = Navigator::new(
        Arc::new(content),
        Box::new(MemoryStore::new()),
        NavigatorOptions {
            language,
            fallback_language: resolved.fallback_language.clone(),
        },
    );

    match navigator.enter(node, false) {
        View::Intro => {
            eprintln!("No node '{node}'");
            std::process::exit(1);
        }
        View::Question(question) => {
            println!("{}", textwrap::fill(&question.question, WRAP_WIDTH));
            println!();
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}  → {}", i + 1, option.text, option.next);
            }
        }
        View::Result(result) => {
            println!("{}", result.title);
            println!("{}", "=".repeat(result.title.width()));
            println!();
            for line in markup::plain_text(&result.body).lines() {
                println!("{}", textwrap::fill(line, WRAP_WIDTH));
            }
        }
    }
    Ok(())
}

fn run_tui(content: ContentModel, resolved: &ResolvedConfig) -> io::Result<()> {
    let issues = content.validate();
    report_issues(&issues);
    if resolved.strict_content && !issues.is_empty() {
        for issue in &issues {
            eprintln!("{issue}");
        }
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} content issue(s), refusing to start", issues.len()),
        ));
    }

    let store: Box<dyn Store> = match &resolved.store_path {
        Some(path) => Box::new(FileStore::new(path)),
        None => {
            warn!("No data directory, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    };

    let mut navigator = Navigator::open(
        Arc::new(content),
        store,
        NavigatorOptions {
            language: resolved.default_language.clone(),
            fallback_language: resolved.fallback_language.clone(),
        },
    );
    if let Some(language) = &resolved.forced_language {
        navigator.set_language(language);
    }

    let clipboard = FileClipboard::new(resolved.export_path.clone());
    tui::run(navigator, clipboard, resolved.languages.clone())
}

fn report_issues(issues: &[ContentIssue]) {
    for issue in issues {
        warn!("Content issue: {}", issue);
    }
}
