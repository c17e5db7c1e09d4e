//! pagediff CLI - page-by-page document comparison tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagediff::{
    Comparator, CompareConfig, CompareOptions, CompareReport, DiffStats, JsonFormat, MarkAction,
    MarkKind, TextOptions,
};

#[derive(Parser)]
#[command(name = "pagediff")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Compare two paged documents and mark what changed", long_about = None)]
struct Cli {
    /// Original document
    #[arg(value_name = "FILE_A")]
    input_a: Option<PathBuf>,

    /// Revised document
    #[arg(value_name = "FILE_B")]
    input_b: Option<PathBuf>,

    /// Mark changed lines whole instead of refining to words
    #[arg(long)]
    lines_only: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents and write annotated outputs for both
    Compare {
        /// Original document
        #[arg(value_name = "FILE_A")]
        input_a: PathBuf,

        /// Revised document
        #[arg(value_name = "FILE_B")]
        input_b: PathBuf,

        /// Output for the original document [default: output_diff_1.pdf or .json]
        #[arg(long, value_name = "FILE")]
        out_a: Option<PathBuf>,

        /// Output for the revised document [default: output_diff_2.pdf or .json]
        #[arg(long, value_name = "FILE")]
        out_b: Option<PathBuf>,

        #[command(flatten)]
        diff: DiffArgs,

        /// Disable parallel marking of the two documents
        #[arg(long)]
        sequential: bool,

        /// Write compact JSON reports
        #[arg(long)]
        compact: bool,

        /// Print the comparison summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the changes that would be marked, without writing anything
    #[command(alias = "dry-run")]
    Plan {
        /// Original document
        #[arg(value_name = "FILE_A")]
        input_a: PathBuf,

        /// Revised document
        #[arg(value_name = "FILE_B")]
        input_b: PathBuf,

        #[command(flatten)]
        diff: DiffArgs,
    },

    /// Show the pages and lines extracted from a document
    Pages {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print every line, not just counts
        #[arg(short, long)]
        lines: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct DiffArgs {
    /// Mark changed lines whole instead of refining to words
    #[arg(long)]
    lines_only: bool,

    /// Collapse runs of spaces and tabs before comparing
    #[arg(long)]
    collapse_whitespace: bool,
}

impl DiffArgs {
    fn compare_options(&self) -> CompareOptions {
        if self.lines_only {
            CompareOptions::new().line_only()
        } else {
            CompareOptions::new()
        }
    }

    fn text_options(&self) -> TextOptions {
        TextOptions::new().with_collapse_whitespace(self.collapse_whitespace)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Compare {
            input_a,
            input_b,
            out_a,
            out_b,
            diff,
            sequential,
            compact,
            json,
        }) => cmd_compare(
            &input_a,
            &input_b,
            out_a.as_deref(),
            out_b.as_deref(),
            &diff,
            sequential,
            compact,
            json,
        ),
        Some(Commands::Plan {
            input_a,
            input_b,
            diff,
        }) => cmd_plan(&input_a, &input_b, &diff),
        Some(Commands::Pages { input, lines }) => cmd_pages(&input, lines),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: compare if both inputs are provided
            match (cli.input_a, cli.input_b) {
                (Some(a), Some(b)) => {
                    let diff = DiffArgs {
                        lines_only: cli.lines_only,
                        collapse_whitespace: false,
                    };
                    cmd_compare(&a, &b, None, None, &diff, false, false, false)
                }
                _ => {
                    println!("{}", "Usage: pagediff <FILE_A> <FILE_B>".yellow());
                    println!("       pagediff --help for more information");
                    Ok(())
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_compare(
    input_a: &Path,
    input_b: &Path,
    out_a: Option<&Path>,
    out_b: Option<&Path>,
    diff: &DiffArgs,
    sequential: bool,
    compact: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut text_options = diff.text_options();
    if compact {
        text_options = text_options.with_json_format(JsonFormat::Compact);
    }
    let compare_options = diff.compare_options().with_parallel(!sequential);

    let mut config = CompareConfig::new(input_a, input_b)
        .with_compare_options(compare_options)
        .with_text_options(text_options);
    if let Some(path) = out_a {
        config.output_a = path.to_path_buf();
    }
    if let Some(path) = out_b {
        config.output_b = path.to_path_buf();
    }
    log::debug!(
        "Comparing {} with {} ({})",
        input_a.display(),
        input_b.display(),
        if config.is_pdf() { "pdf" } else { "text" }
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Comparing and marking...");

    let result = pagediff::compare_files(&config);
    pb.finish_and_clear();
    let report = result?;

    log::info!(
        "Wrote {} and {}",
        config.output_a.display(),
        config.output_b.display()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(input_a, input_b, &report);

    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), config.output_a.display());
    println!("  {} {}", "└─".dimmed(), config.output_b.display());

    Ok(())
}

fn print_report(input_a: &Path, input_b: &Path, report: &CompareReport) {
    println!("{}", "Comparison Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!(
        "{}: {} ({} pages)",
        "A".bold(),
        input_a.display(),
        report.page_count_a
    );
    println!(
        "{}: {} ({} pages)",
        "B".bold(),
        input_b.display(),
        report.page_count_b
    );

    if report.has_page_count_mismatch() {
        println!(
            "{}",
            "Page counts differ; trailing pages were marked whole".yellow()
        );
    }

    if report.is_identical() {
        println!("\n{}", "No differences found".green().bold());
        return;
    }

    print_stats("A", &report.a);
    print_stats("B", &report.b);
}

fn print_stats(label: &str, stats: &DiffStats) {
    println!();
    println!("{} {}", "Document".cyan().bold(), label.cyan().bold());
    println!("  {}: {}", "Changed lines".bold(), stats.line_requests);
    println!("  {}: {}", "Changed words".bold(), stats.word_requests);
    println!("  {}: {}", "Whole pages".bold(), stats.whole_pages_marked);
    println!("  {}: {}", "Regions marked".bold(), stats.regions_marked);
    if stats.unlocated_spans > 0 {
        println!(
            "  {}: {}",
            "Not located".yellow().bold(),
            stats.unlocated_spans
        );
    }
}

fn cmd_plan(
    input_a: &Path,
    input_b: &Path,
    diff: &DiffArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let text_options = diff.text_options();
    let pages_a = pagediff::extract_file(input_a, &text_options)?;
    let pages_b = pagediff::extract_file(input_b, &text_options)?;

    let plan = Comparator::new(diff.compare_options()).plan(&pages_a, &pages_b);
    log::debug!(
        "Planned {} actions for A and {} for B",
        plan.a.len(),
        plan.b.len()
    );

    if plan.is_empty() {
        println!("{}", "No differences found".green().bold());
        return Ok(());
    }

    let mut actions: Vec<(&str, &MarkAction)> = plan
        .a
        .iter()
        .map(|action| ("A", action))
        .chain(plan.b.iter().map(|action| ("B", action)))
        .collect();
    actions.sort_by_key(|(_, action)| action.page());

    let mut current_page = None;
    for (label, action) in actions {
        if current_page != Some(action.page()) {
            current_page = Some(action.page());
            println!("{}", format!("Page {}", action.page() + 1).cyan().bold());
        }

        match action {
            MarkAction::WholePage(_) => {
                println!("  {} {}", label.bold(), "entire page".yellow());
            }
            MarkAction::Span(request) => {
                let kind = match request.kind {
                    MarkKind::WholeLine => "line".dimmed(),
                    _ => "word".red(),
                };
                let sign = if label == "A" { "-".red() } else { "+".green() };
                println!("  {} {} {} {}", label.bold(), sign, kind, request.span);
            }
        }
    }

    Ok(())
}

fn cmd_pages(input: &Path, show_lines: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pages = pagediff::extract_file(input, &TextOptions::default())?;
    log::debug!("Extracted {} pages from {}", pages.len(), input.display());

    println!("{}", "Document Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), pages.len());

    let bytes = fs::metadata(input)?.len();
    println!("{}: {}", "Size".bold(), bytes);
    println!();

    for (index, page) in pages.iter().enumerate() {
        let words: usize = page
            .lines
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum();
        println!(
            "{} {:>4}: {} lines, {} words",
            "Page".bold(),
            index + 1,
            page.line_count(),
            words
        );

        if show_lines {
            for line in &page.lines {
                println!("    {} {}", "│".dimmed(), line);
            }
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagediff".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page-by-page document comparison tool");
    println!();
    println!("License: MIT");
}
