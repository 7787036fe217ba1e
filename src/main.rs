//! CLI entry point for the assessment cleaning pipeline.

use anyhow::{anyhow, Result};
use assessment_cleaning::{CleaningConfig, CleaningSummary, Pipeline};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Cleaning pipeline for the assessments dataset",
    long_about = "Loads the assessments CSV, normalizes missing values, removes duplicate\n\
                  rows, trims text columns, coerces numeric columns, and writes a cleaned\n\
                  CSV plus a summary report.\n\n\
                  EXAMPLES:\n  \
                  # Canonical run (reads assessments.csv in the working directory)\n  \
                  assessment-cleaning\n\n  \
                  # Explicit paths\n  \
                  assessment-cleaning -i data/assessments.csv -o data/cleaned.csv"
)]
struct Args {
    /// Path to the CSV file to clean
    #[arg(short, long, default_value = "assessments.csv")]
    input: String,

    /// Path the cleaned CSV is written to
    #[arg(short, long, default_value = "cleaned_assessments.csv")]
    output: String,

    /// Path the summary report is written to
    #[arg(long, default_value = "README.md")]
    report: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the run summary as JSON to stdout
    ///
    /// Disables all progress logs; only outputs the final JSON summary.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !std::path::Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = CleaningConfig::builder()
        .input_path(&args.input)
        .output_path(&args.output)
        .report_path(&args.report)
        .build()?;

    info!("Cleaning {} -> {}", args.input, args.output);

    let summary = Pipeline::new(config)?
        .run()
        .map_err(|e| anyhow!("Pipeline failed: {}", e))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if !args.quiet {
        print_summary(&summary, &args);
    }

    Ok(())
}

/// Print a human-readable summary of the cleaning run.
///
/// This uses `println!` intentionally for user-facing CLI output; unlike
/// logging it should always be visible regardless of log level settings.
fn print_summary(summary: &CleaningSummary, args: &Args) {
    println!();
    println!("{}", "=".repeat(80));
    println!("CLEANING COMPLETE");
    println!("{}", "=".repeat(80));
    println!();

    println!(
        "Input:  {} ({} rows x {} columns)",
        args.input,
        summary.rows_before,
        summary.columns_before.len()
    );
    println!(
        "Output: {} ({} rows x {} columns)",
        args.output,
        summary.rows_after,
        summary.columns_after.len()
    );
    println!("Report: {}", args.report);
    println!();

    println!("Summary:");
    println!("  Duration: {}ms", summary.duration_ms);
    println!(
        "  Rows: {} -> {} ({} duplicates removed, {:.1}%)",
        summary.rows_before,
        summary.rows_after,
        summary.duplicates_removed,
        summary.rows_removed_percentage()
    );
    println!("  Remaining nulls: {}", summary.nulls_after());
    println!();

    println!("Column types after cleaning:");
    for col in &summary.columns_after {
        println!(
            "  {:<20} {:<10} ({} nulls)",
            col.name, col.dtype, col.null_count
        );
    }
    println!();

    if !summary.actions.is_empty() {
        println!("Actions Taken:");
        for action in &summary.actions {
            println!("  - {}", action);
        }
        println!();
    }

    println!("Use --json for machine-readable output");
    println!("{}", "=".repeat(80));
}
