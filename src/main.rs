//! FileSleuth: project folder auditor.
//!
//! Thin binary entry point. All logic lives in the `filesleuth-core` crate;
//! this file only parses arguments, wires the configuration through and
//! prints reports.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use filesleuth_core::analysis::{
    category_breakdown, classify, directory_statistics_with_limit, resolve_language,
    find_duplicates, find_patterns, read_metadata, search_signatures,
};
use filesleuth_core::export::{
    render_duplicates, render_patterns, render_text, write_files_csv, write_json,
};
use filesleuth_core::organize::{apply_plan, plan_organization, OrganizeMode};
use filesleuth_core::scanner::collect_files;
use filesleuth_core::{AnalyzerConfig, RuleTable};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "filesleuth",
    version,
    about = "Classify project files by category and language and report statistics"
)]
struct Cli {
    /// JSON configuration file (categories, languages, ignore patterns, limits).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-language and per-extension statistics for a directory.
    Stats {
        dir: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the report here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only include files ending with these extensions (e.g. ".py").
        #[arg(short, long)]
        ext: Vec<String>,
    },
    /// Files sharing both name and size.
    Duplicates { dir: PathBuf },
    /// Families of numbered file names (report1, report2, ...).
    Patterns {
        dir: PathBuf,
        /// Minimum family size (defaults to the configured value).
        #[arg(long)]
        min_count: Option<usize>,
    },
    /// Count literal signature occurrences in text files.
    Search {
        dir: PathBuf,
        #[arg(required = true)]
        signatures: Vec<String>,
    },
    /// Show category and language of individual files.
    Classify {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Copy (or move) files into <dest>/<category>/ folders.
    Organize {
        src: PathBuf,
        dest: PathBuf,
        /// Move instead of copy.
        #[arg(long = "move")]
        move_files: bool,
        /// Print the plan without touching the filesystem.
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging on stderr so stdout carries only reports.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    let rules = config
        .rule_table()
        .context("failed to build classification rules")?;

    match cli.command {
        Command::Stats {
            dir,
            format,
            output,
            ext,
        } => {
            let mut options = config.scan_options();
            if !ext.is_empty() {
                options.extensions = Some(ext);
            }
            let files = collect_files(&dir, &options)?;
            let mut out = open_output(output.as_deref())?;
            match format {
                Format::Text => {
                    let stats = directory_statistics_with_limit(&files, &rules, config.top_n);
                    write!(out, "{}", render_text(&stats))?;
                    writeln!(out, "\nCategories:")?;
                    for cat in category_breakdown(&files, &rules) {
                        writeln!(out, "  {:<14} {:>6} files", cat.category, cat.file_count)?;
                    }
                }
                Format::Json => {
                    let stats = directory_statistics_with_limit(&files, &rules, config.top_n);
                    write_json(&stats, &mut out)?;
                    writeln!(out)?;
                }
                Format::Csv => {
                    let infos: Vec<_> = files
                        .iter()
                        .filter_map(|f| match read_metadata(f, &rules) {
                            Ok(info) => Some(info),
                            Err(e) => {
                                tracing::warn!("skipping: {e}");
                                None
                            }
                        })
                        .collect();
                    write_files_csv(&infos, &mut out)?;
                }
            }
            out.flush()?;
        }
        Command::Duplicates { dir } => {
            let files = collect_files(&dir, &config.scan_options())?;
            let groups = find_duplicates(&files);
            if groups.is_empty() {
                println!("No duplicates found.");
            } else {
                print!("{}", render_duplicates(&groups));
            }
        }
        Command::Patterns { dir, min_count } => {
            let files = collect_files(&dir, &config.scan_options())?;
            let patterns = find_patterns(&files, min_count.unwrap_or(config.min_pattern_count));
            if patterns.is_empty() {
                println!("No naming patterns found.");
            } else {
                print!("{}", render_patterns(&patterns));
            }
        }
        Command::Search { dir, signatures } => {
            let files = collect_files(&dir, &config.scan_options())?;
            for m in search_signatures(&files, &signatures, &rules) {
                println!("{}: {:?} x{}", m.path.display(), m.signature, m.occurrences);
            }
        }
        Command::Classify { files } => {
            for file in &files {
                print_classification(file, &rules);
            }
        }
        Command::Organize {
            src,
            dest,
            move_files,
            dry_run,
        } => {
            let files = collect_files(&src, &config.scan_options())?;
            let plan = plan_organization(&files, &rules, &dest);
            if dry_run {
                for step in &plan {
                    println!("{} -> {}", step.source.display(), step.destination.display());
                }
            } else {
                let mode = if move_files {
                    OrganizeMode::Move
                } else {
                    OrganizeMode::Copy
                };
                let summary = apply_plan(&plan, mode);
                println!(
                    "{} transferred, {} skipped, {} failed",
                    summary.transferred, summary.skipped, summary.failed
                );
            }
        }
    }

    Ok(())
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("cannot create {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn print_classification(file: &Path, rules: &RuleTable) {
    println!(
        "{}: category={} language={}",
        file.display(),
        classify(file, rules),
        resolve_language(file, rules)
    );
}
