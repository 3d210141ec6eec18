//! Report command implementation.
//!
//! The report command:
//! 1. Loads the order export
//! 2. Resolves the date range
//! 3. Runs the aggregations
//! 4. Writes outputs

use super::models::ReportArgs;
use crate::aggregator::{build_report, DateRange};
use crate::output::{render_summary, write_report, write_report_to};
use crate::parser::{load_orders, DashboardReport};
use crate::utils::config::MAX_TOP_CATEGORIES;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset cannot be opened or lacks required columns
/// * Date range is inverted or the dataset is empty
/// * Report file cannot be written
pub fn execute_report(args: &ReportArgs) -> Result<DashboardReport> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading dataset...");
    let dataset = load_orders(&args.data_path)
        .with_context(|| format!("Failed to load {}", args.data_path.display()))?;

    for row in dataset.row_errors.iter().take(5) {
        warn!("Skipped line {}: {}", row.line, row.message);
    }
    if dataset.row_errors.len() > 5 {
        warn!("... and {} more skipped rows", dataset.row_errors.len() - 5);
    }

    info!("Step 2/3: Resolving date range...");
    let range = DateRange::resolve(args.start, args.end, &dataset.records)
        .context("Invalid date range")?
        .context("Dataset has no valid orders; cannot derive a date range")?;

    debug!("Using range {} ..= {}", range.start(), range.end());

    info!("Step 3/3: Aggregating...");
    let source = args.data_path.display().to_string();
    let report = build_report(&dataset.records, &range, &source);

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_json {
        write_report_to(&report, std::io::stdout().lock())
            .context("Failed to print report JSON")?;
    }

    if args.wants_summary() {
        println!("\n{}", render_summary(&report, args.top_categories));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    if let (Some(start), Some(end)) = (args.start, args.end) {
        if start > end {
            anyhow::bail!("Start date {} is after end date {}", start, end);
        }
    }

    if args.top_categories == 0 {
        anyhow::bail!("top_categories must be greater than 0");
    }

    if args.top_categories > MAX_TOP_CATEGORIES {
        anyhow::bail!("top_categories is too large (max {})", MAX_TOP_CATEGORIES);
    }

    Ok(())
}
