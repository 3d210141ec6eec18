use crate::utils::config::DEFAULT_TOP_CATEGORIES;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Order export CSV
    pub data_path: PathBuf,

    /// First purchase date to include (None = earliest in dataset)
    pub start: Option<NaiveDate>,

    /// Last purchase date to include (None = latest in dataset)
    pub end: Option<NaiveDate>,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the JSON report to stdout
    pub print_json: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Categories shown in the text summary
    pub top_categories: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("orders.csv"),
            start: None,
            end: None,
            output_json: None,
            print_json: false,
            print_summary: false,
            top_categories: DEFAULT_TOP_CATEGORIES,
        }
    }
}

impl ReportArgs {
    /// Whether the text summary should be printed
    ///
    /// With nowhere else to send the report, it goes to the terminal.
    pub fn wants_summary(&self) -> bool {
        self.print_summary || (self.output_json.is_none() && !self.print_json)
    }
}
