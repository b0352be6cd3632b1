use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use sectionmatch_loader::{load_document, load_topic_spec, DocumentScanner};
use sectionmatch_matcher::{group_topics, GroupedMatches, TopicEntry};
use std::fs;
use std::path::{Path, PathBuf};

mod render;

#[derive(Parser)]
#[command(name = "sectionmatch")]
#[command(about = "Cross-reference topic questions with document sections", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Match one document against a topic specification
    Match(MatchArgs),

    /// Match every JSON document in a directory against a topic specification
    Scan(ScanArgs),
}

#[derive(Args)]
struct MatchArgs {
    /// Path to the topic specification JSON
    spec: PathBuf,

    /// Path to the document JSON
    document: PathBuf,

    /// Output grouped records as JSON
    #[arg(long)]
    json: bool,

    /// Write grouped records as pretty JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct ScanArgs {
    /// Path to the topic specification JSON
    spec: PathBuf,

    /// Directory containing document JSON files
    dir: PathBuf,

    /// Output grouped records as JSON
    #[arg(long)]
    json: bool,

    /// Write grouped records as pretty JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON parsing when --json is used
    let json_output = match &cli.command {
        Commands::Match(args) => args.json,
        Commands::Scan(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Match(args) => run_match(args)?,
        Commands::Scan(args) => run_scan(args)?,
    }

    Ok(())
}

fn run_match(args: MatchArgs) -> Result<()> {
    let entries = load_spec(&args.spec)?;
    let document =
        load_document(&args.document).context("Failed to load document")?;

    let mut groups = GroupedMatches::new();
    group_topics(
        &entries,
        &document.sections,
        &source_label(&args.document),
        &mut groups,
    );

    emit(&groups, args.json, args.out.as_deref(), render::brief_lines)
}

fn run_scan(args: ScanArgs) -> Result<()> {
    let entries = load_spec(&args.spec)?;
    let files = DocumentScanner::new(&args.dir).scan();

    let mut groups = GroupedMatches::new();
    for path in &files {
        log::info!("Processing {}", path.display());
        let document = match load_document(path) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Skipping {}: {e}", path.display());
                continue;
            }
        };
        group_topics(&entries, &document.sections, &source_label(path), &mut groups);
    }
    log::info!(
        "Grouped {} records across {} topics",
        groups.record_count(),
        groups.topic_count()
    );

    emit(&groups, args.json, args.out.as_deref(), render::detailed_lines)
}

/// The topic specification is required; failing to load it aborts the run.
fn load_spec(path: &Path) -> Result<Vec<TopicEntry>> {
    load_topic_spec(path).context("Failed to load topic specification")
}

fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn emit(
    groups: &GroupedMatches,
    json: bool,
    out: Option<&Path>,
    to_lines: fn(&GroupedMatches) -> Vec<String>,
) -> Result<()> {
    if let Some(path) = out {
        persist(groups, path)?;
        log::info!("Wrote grouped records to {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(groups)?);
    } else if groups.is_empty() {
        eprintln!("No results to display.");
    } else {
        for line in to_lines(groups) {
            println!("{line}");
        }
    }
    Ok(())
}

fn persist(groups: &GroupedMatches, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(groups)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}
