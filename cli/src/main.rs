//! uncv CLI - structured resume extraction tool
//!
//! Reads already-extracted resume text (`.txt`) or a pdf.js-style items
//! dump (`.json`) and prints the structured resume as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use uncv::{
    format_resume, segment_source, segment_text, to_json, JsonFormat, MemorySource, ParseOptions,
    ResumeDocument, SectionMap,
};

#[derive(Parser)]
#[command(name = "uncv")]
#[command(version)]
#[command(about = "Extract structured resume data from text layout dumps", long_about = None)]
struct Cli {
    /// Input file (.txt extracted text, .json items dump)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Minimum extracted characters before a parse is trusted
    #[arg(long, default_value = "64", global = true)]
    min_chars: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume and print the formatted JSON
    Parse {
        /// Input file (.txt extracted text, .json items dump)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print the internal document instead of the formatted shape
        #[arg(long)]
        raw: bool,
    },

    /// Show the detected sections and entry boundaries
    Sections {
        /// Input file (.txt extracted text, .json items dump)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Parse every resume in a directory
    Batch {
        /// Directory of input files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = ParseOptions::new().with_min_chars(cli.min_chars);

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            compact,
            raw,
        }) => cmd_parse(&input, output.as_deref(), compact, raw, &options),
        Some(Commands::Sections { input }) => cmd_sections(&input, &options),
        Some(Commands::Batch {
            input,
            output,
            compact,
        }) => cmd_batch(&input, output.as_deref(), compact, &options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_parse(&input, None, false, false, &options)
            } else {
                println!("{}", "Usage: uncv <FILE>".yellow());
                println!("       uncv --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Parse one input file into a structured document.
fn load_document(
    input: &Path,
    options: &ParseOptions,
) -> Result<ResumeDocument, Box<dyn std::error::Error>> {
    Ok(uncv::extract_resume(&load_sections(input, options)?))
}

/// Run the layout stages on one input file.
fn load_sections(
    input: &Path,
    options: &ParseOptions,
) -> Result<SectionMap, Box<dyn std::error::Error>> {
    let sections = if is_items_dump(input) {
        let json = fs::read_to_string(input)?;
        let source = MemorySource::from_json(&json)?;
        segment_source(&source, options)?
    } else {
        let text = fs::read_to_string(input)?;
        segment_text(&text, options)?
    };
    Ok(sections)
}

fn is_items_dump(input: &Path) -> bool {
    input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    raw: bool,
    options: &ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input, options)?;

    let json = if raw {
        if compact {
            serde_json::to_string(&doc)?
        } else {
            serde_json::to_string_pretty(&doc)?
        }
    } else {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        to_json(&format_resume(&doc), format)?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_sections(input: &Path, options: &ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let sections = load_sections(input, options)?;

    println!("{}", "Detected sections:".green().bold());
    for section in sections.iter() {
        match section.entry_count() {
            Some(entries) => println!(
                "  {} {} ({} lines, {} entries)",
                "├─".dimmed(),
                section.name.cyan(),
                section.line_count(),
                entries
            ),
            None => println!(
                "  {} {} ({} lines)",
                "├─".dimmed(),
                section.name.cyan(),
                section.line_count()
            ),
        }
    }
    println!(
        "  {} {} sections, {} content lines",
        "└─".dimmed(),
        sections.len(),
        sections.line_count()
    );

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.join("parsed"));
    fs::create_dir_all(&output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        println!("{}", "No .txt or .json inputs found".yellow());
        return Ok(());
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let mut failures = 0usize;
    for path in &inputs {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );

        match load_document(path, options) {
            Ok(doc) => {
                let stem = path.file_stem().unwrap_or_default().to_string_lossy();
                let json = to_json(&format_resume(&doc), format)?;
                fs::write(output_dir.join(format!("{}.json", stem)), json)?;
            }
            Err(e) => {
                failures += 1;
                log::warn!("failed to parse {}: {}", path.display(), e);
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    let parsed = inputs.len() - failures;
    println!(
        "\n{} {} parsed, {} failed, output in {}",
        "Batch:".green().bold(),
        parsed,
        failures,
        output_dir.display()
    );

    Ok(())
}

fn cmd_version() {
    println!("uncv {}", env!("CARGO_PKG_VERSION"));
}
