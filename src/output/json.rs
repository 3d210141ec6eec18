//! JSON report writer and reader.
//!
//! Reports go either to a file (`--output`) or to stdout (`--json`), always
//! pretty-printed. Reading checks the schema version so `validate` rejects
//! reports from an incompatible release.

use crate::parser::schema::DashboardReport;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a report to a JSON file, creating parent directories
///
/// **Public** - used by the report command for `--output`
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_report(
    report: &DashboardReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    if output_path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }
    if output_path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create {}: {}", parent.display(), e))
            })?;
        }
    }

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_report_to(report, &mut writer)?;
    writer.flush()?;

    info!(
        "Report for {} orders written to {}",
        report.total_orders,
        output_path.display()
    );

    Ok(())
}

/// Serialize a report as pretty JSON into any writer
///
/// **Public** - used for `--json` (stdout) and by `write_report`
pub fn write_report_to<W: Write>(report: &DashboardReport, mut writer: W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - used by the validate command
///
/// # Errors
/// * `OutputError::ReadFailed` - file cannot be opened or read
/// * `OutputError::InvalidReport` - content is not a report
/// * `OutputError::UnsupportedVersion` - major schema version differs
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DashboardReport, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let report: DashboardReport =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::InvalidReport)?;

    if !is_compatible_version(&report.version) {
        return Err(OutputError::UnsupportedVersion {
            found: report.version,
            expected: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(report)
}

/// Reports share a major version with the current schema
fn is_compatible_version(version: &str) -> bool {
    let major = |v: &str| v.split('.').next().map(str::to_string);
    major(version).is_some_and(|m| Some(m) == major(SCHEMA_VERSION))
}
