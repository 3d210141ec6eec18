use crate::aggregator::DateRange;
use crate::output::{format_shipping_metric, read_report};
use crate::parser::load_orders;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Range: {} to {}", report.range.start, report.range.end);
    println!("  Total Orders: {}", report.total_orders);
    println!("  Categories: {}", report.category_orders.len());
    println!("  {}", format_shipping_metric(report.avg_shipping_days));

    Ok(())
}

/// Print the default date range and row counts of a dataset
pub fn show_range(data_path: &Path) -> Result<()> {
    let dataset = load_orders(data_path)
        .with_context(|| format!("Failed to load {}", data_path.display()))?;

    println!("Dataset: {}", data_path.display());
    println!("  Rows read: {}", dataset.rows_read);
    println!("  Valid orders: {}", dataset.records.len());
    println!("  Skipped rows: {}", dataset.row_errors.len());

    match DateRange::spanning(&dataset.records) {
        Some(range) => println!("  Purchase dates: {} to {}", range.start(), range.end()),
        None => println!("  Purchase dates: (no valid orders)"),
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Orderscope Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  source: string               - Dataset the report was built from");
        println!("  range: object                - Inclusive purchase-date range");
        println!("    start: string              - YYYY-MM-DD");
        println!("    end: string                - YYYY-MM-DD");
        println!("  total_orders: number         - Rows inside the range");
        println!("  yearly_orders: array         - {{year, total_orders}}, ascending");
        println!("  category_orders: array       - {{category, total_orders}}, descending");
        println!("  avg_shipping_days: number?   - Mean delivery days (null = no data)");
        println!("  payment_distribution: array  - {{payment_type, count}}, descending");
        println!("  review_shipping: array       - {{review_score, shipping_days}}, ascending");
        println!("  data_quality: object         - Counts of rows left out per aggregation");
        println!("  generated_at: string         - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Orderscope v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Order trend, category, payment and shipping summaries for e-commerce exports.");
}
