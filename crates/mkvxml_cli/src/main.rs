//! mkvxml - chapter and tag XML utility for mkvmerge.
//!
//! Thin command-line driver over `mkvxml_core`: reads chapters out of a
//! media file (via mkvinfo) or a saved dump, and rewrites existing chapter
//! XML files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mkvxml_core::dump::{self, DEFAULT_TOOL};
use mkvxml_core::models::ChapterList;

#[derive(Parser, Debug)]
#[command(name = "mkvxml", version, about = "Chapter and tag XML for mkvmerge")]
struct Cli {
    /// Log more (repeat for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract chapters from a media file and emit chapter XML
    Chapters(ChaptersArgs),

    /// Re-emit an existing chapter XML file
    Reformat(ReformatArgs),
}

#[derive(clap::Args, Debug)]
struct ChaptersArgs {
    /// Media file to inspect, or a saved dump with --dump
    input: PathBuf,

    /// Treat INPUT as a saved mkvinfo dump instead of a media file
    #[arg(long)]
    dump: bool,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the chapter list as JSON instead of XML
    #[arg(long)]
    json: bool,

    /// Name of the inspection executable
    #[arg(long, default_value = DEFAULT_TOOL)]
    mkvinfo: String,
}

#[derive(clap::Args, Debug)]
struct ReformatArgs {
    /// Chapter XML file to read
    input: PathBuf,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Renumber chapters by position instead of keeping stored numbers
    #[arg(long)]
    renumber: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Chapters(args) => run_chapters(args),
        Commands::Reformat(args) => run_reformat(args),
    }
}

/// Tracing to stderr; RUST_LOG wins over the verbosity flag.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_chapters(args: ChaptersArgs) -> Result<()> {
    let chapters = if args.dump {
        let text = std::fs::read_to_string(&args.input)
            .with_context(|| format!("reading dump {}", args.input.display()))?;
        let roots = dump::parse_dump(&text)?;
        dump::chapters_from_dump(&roots)?
    } else {
        dump::read_chapters(&args.input, &args.mkvinfo)?
    };

    if chapters.is_empty() {
        tracing::warn!("no chapter entries in {}", args.input.display());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&chapters)?;
        emit_text(args.output.as_deref(), &json)
    } else {
        emit_chapters(args.output.as_deref(), &chapters)
    }
}

fn run_reformat(args: ReformatArgs) -> Result<()> {
    let stored = ChapterList::from_xml_file(&args.input)?;

    let chapters = if args.renumber {
        let mut renumbered = ChapterList::new();
        for chapter in stored.iter() {
            renumbered.add_chapter(chapter.start_time.clone(), chapter.title.clone());
        }
        renumbered
    } else {
        stored
    };

    emit_chapters(args.output.as_deref(), &chapters)
}

/// Write chapter XML to the output path, or to stdout.
fn emit_chapters(output: Option<&Path>, chapters: &ChapterList) -> Result<()> {
    match output {
        Some(path) => chapters.save(path)?,
        None => print!("{}", chapters.to_xml()?),
    }
    Ok(())
}

/// Write plain text to the output path, or to stdout.
fn emit_text(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}
