//! CSV output formatter for check results.
//!
//! Every leaf result becomes one row, regardless of verbosity, so the CSV is
//! a full export of the run. Records end in `\r\n`, the usual CSV
//! line terminator.

use crate::data::{ResultValue, TestResult};
use crate::results::TestResults;
use crate::utils::write_atomic;
use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::path::Path;

pub const HEADER: [&str; 5] = ["Test", "Subtest", "Result", "Notes", "Confidence"];

/// A single CSV record.
///
/// # Fields
/// * `test` - Top-level entry name
/// * `subtest` - Group member name, empty for single results
/// * `result` - `PASS`, `FAIL` or `SKIP`
/// * `notes` - Optional notes
/// * `confidence` - `sure` or `guess`
#[derive(Debug, serde::Serialize)]
pub struct CsvRow<'a> {
    pub test: &'a str,
    pub subtest: Option<&'a str>,
    pub result: &'static str,
    pub notes: Option<&'a str>,
    pub confidence: &'static str,
}

impl<'a> CsvRow<'a> {
    fn new(test: &'a str, subtest: Option<&'a str>, result: &'a TestResult) -> Self {
        Self {
            test,
            subtest,
            result: result.outcome.as_str(),
            notes: result.notes.as_deref(),
            confidence: result.confidence.as_str(),
        }
    }
}

/// Collects one [`CsvRow`] per leaf, in display order.
pub fn rows(results: &TestResults) -> Vec<CsvRow<'_>> {
    let mut rows = Vec::with_capacity(results.leaf_count());
    for entry in results {
        match &entry.result {
            ResultValue::Single(result) => rows.push(CsvRow::new(&entry.name, None, result)),
            ResultValue::Group(group) => rows.extend(
                group
                    .results()
                    .iter()
                    .map(|member| CsvRow::new(&entry.name, Some(member.name.as_str()), &member.result)),
            ),
        }
    }
    rows
}

/// Renders the results to CSV bytes: the header, then one row per leaf.
///
/// # Arguments
/// * `results` - The collection to export
///
/// # Returns
/// * The CSV document, each record terminated by `\r\n`
pub fn render(results: &TestResults) -> Result<Vec<u8>> {
    // The header is written by hand so it is present even with no rows.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for row in rows(results) {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish CSV output: {}", e.error()))
}

fn try_write(results: &TestResults, path: &Path) -> Result<()> {
    let data = render(results).context("Failed to render CSV")?;
    write_atomic(path, &data)
}

/// Writes the CSV report to `path`.
///
/// Failures are logged, not returned; the return value only reports whether
/// the file was written.
///
/// # Arguments
/// * `results` - The collection to export
/// * `path` - Destination file, replaced atomically
///
/// # Returns
/// * `true` if the file was written, `false` if a failure was logged
pub fn write(results: &TestResults, path: &Path) -> bool {
    log::info!("Preparing to write CSV file [ {} ]", path.display());
    match try_write(results, path) {
        Ok(()) => {
            log::info!("Writing CSV file [ {} ] successful", path.display());
            true
        }
        Err(e) => {
            log::error!("Unable to write CSV file [ {} ]: {:#}", path.display(), e);
            false
        }
    }
}
