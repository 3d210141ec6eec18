//! Orderscope CLI
//!
//! Loads an order export, filters it by purchase date, and prints or
//! writes the dashboard summaries.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use orderscope::commands::{
    display_schema, display_version, execute_report, show_range, validate_args,
    validate_report_file, ReportArgs,
};
use orderscope::utils::config::{DATA_ENV_VAR, DEFAULT_TOP_CATEGORIES};

/// Orderscope - e-commerce order dashboard
#[derive(Parser, Debug)]
#[command(name = "orderscope")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate the dataset over a date range
    Report {
        /// Order export CSV
        #[arg(short, long, env = DATA_ENV_VAR)]
        data: PathBuf,

        /// First purchase date to include (YYYY-MM-DD, default: earliest)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last purchase date to include (YYYY-MM-DD, default: latest)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Output path for JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the JSON report to stdout
        #[arg(long)]
        json: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of categories shown in the summary
        #[arg(long, default_value_t = DEFAULT_TOP_CATEGORIES)]
        top_categories: usize,
    },

    /// Show the purchase-date span of a dataset
    Range {
        /// Order export CSV
        #[arg(short, long, env = DATA_ENV_VAR)]
        data: PathBuf,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            data,
            start,
            end,
            output,
            json,
            summary,
            top_categories,
        } => {
            let args = ReportArgs {
                data_path: data,
                start,
                end,
                output_json: output,
                print_json: json,
                print_summary: summary,
                top_categories,
            };

            validate_args(&args)?;
            execute_report(&args)?;
        }

        Commands::Range { data } => {
            show_range(&data)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
