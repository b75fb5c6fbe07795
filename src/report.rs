//! Terminal and CSV reporting.
//!
//! This module renders the aggregated rows as bordered tables on stdout
//! and appends per-provider summary rows to an optional CSV log. The two
//! outputs are independent: tables always print, and a CSV failure is
//! reported by the caller without suppressing them.

use crate::error::Result;
use crate::stats::{DetailRow, SummaryRow};
use chrono::Local;
use comfy_table::Table;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header written when the CSV log file is created.
const CSV_HEADER: &str = "provider_name,ip_address,overall_avg_query_time,timestamp";

/// Timestamp format used for CSV rows.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Print the detail and summary tables to stdout.
///
/// Timing cells are fixed five-decimal seconds. When no queries succeeded
/// at all there is nothing to tabulate and a notice is printed instead.
pub fn print_report(details: &[DetailRow], summary: &[SummaryRow]) {
    if details.is_empty() {
        println!("No successful queries; nothing to report.");
        return;
    }

    println!("{}", detail_table(details));
    println!("\nSummary:");
    println!("{}", summary_table(summary));
}

fn detail_table(details: &[DetailRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Provider Name",
        "IP Address",
        "Domain",
        "Avg Query Time",
        "Min Query Time",
        "Max Query Time",
    ]);

    for row in details {
        table.add_row(vec![
            row.provider.name.clone(),
            row.provider.ip.clone(),
            row.domain.clone(),
            format!("{:.5}", row.avg),
            format!("{:.5}", row.min),
            format!("{:.5}", row.max),
        ]);
    }

    table
}

fn summary_table(summary: &[SummaryRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Provider Name", "IP Address", "Overall Avg Query Time"]);

    for row in summary {
        table.add_row(vec![
            row.provider.name.clone(),
            row.provider.ip.clone(),
            format!("{:.5}", row.overall_avg),
        ]);
    }

    table
}

/// Append summary rows to a CSV log file.
///
/// The file is opened in append mode and the header row is written only
/// when the file is new or empty, so repeated runs accumulate history
/// under a single header. All rows of one run share one timestamp.
///
/// # Arguments
///
/// * `path` - CSV file to append to
/// * `summary` - Summary rows to record
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written. Existing
/// contents are never touched either way.
pub fn append_csv<P: AsRef<Path>>(path: P, summary: &[SummaryRow]) -> Result<()> {
    let path = path.as_ref();
    let needs_header = match std::fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    if needs_header {
        writeln!(writer, "{CSV_HEADER}")?;
    }

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    for row in summary {
        writeln!(
            writer,
            "{},{},{:.6},{}",
            csv_field(&row.provider.name),
            csv_field(&row.provider.ip),
            row.overall_avg,
            timestamp
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
