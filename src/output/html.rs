//! Template-based HTML output formatter.
//!
//! The caller supplies a template containing [`RESULTS_MARKER`]; the marker is
//! replaced by one `<tr>` per visible row. Unlike CSV and JSON, the rows are
//! filtered by verbosity. Members of a group whose own row is hidden are still
//! listed when their outcome is shown, see [`TestResults::html_rows`].

use crate::data::Verbosity;
use crate::results::{Row, RowKind, TestResults};
use crate::utils::{html_escape, write_atomic};
use std::fs;
use std::path::Path;

/// Placeholder in the template that receives the generated rows.
pub const RESULTS_MARKER: &str = "$$$RESULTS$$$";

const INDENT_CLASS: &str = "result_indent";

/// Formats one table row. Group rows get an empty notes cell.
///
/// # Arguments
/// * `row` - The row to format
///
/// # Returns
/// * Five lines of markup: the `<tr>` line, three cells and `</tr>`
pub fn format_row(row: &Row<'_>) -> String {
    let result_class = format!(" class={}", row.outcome.css_class());
    let name_class = if row.kind == RowKind::Member {
        format!(" class={INDENT_CLASS}")
    } else {
        String::new()
    };
    let notes = match row.kind {
        RowKind::Group => String::new(),
        RowKind::Single | RowKind::Member => html_escape(row.notes.unwrap_or("")),
    };

    format!(
        "  <tr{result_class}>\n    <td{name_class}>{}</td>\n    <td{result_class}>{}</td>\n    <td>{notes}</td>\n  </tr>\n",
        html_escape(row.name),
        row.outcome.as_str(),
    )
}

/// Substitutes the rows visible at `verbosity` into `template`.
///
/// # Arguments
/// * `results` - The collection to report on
/// * `template` - Template text containing [`RESULTS_MARKER`]
/// * `verbosity` - Which rows to include
///
/// # Returns
/// * The template with every marker replaced by the generated rows
pub fn render(results: &TestResults, template: &str, verbosity: Verbosity) -> String {
    let rows: String = results
        .html_rows(verbosity)
        .iter()
        .map(format_row)
        .collect();
    template.replace(RESULTS_MARKER, &rows)
}

/// Reads `template_path`, fills it, and writes the report to `path`.
///
/// A missing template and an unwritable output are logged separately. In
/// either case no output file is produced.
///
/// # Arguments
/// * `results` - The collection to report on
/// * `path` - Destination of the report
/// * `template_path` - File containing [`RESULTS_MARKER`]
/// * `verbosity` - Which rows to include
///
/// # Returns
/// * `true` if the report was written, `false` if a failure was logged
pub fn write(
    results: &TestResults,
    path: &Path,
    template_path: &Path,
    verbosity: Verbosity,
) -> bool {
    log::info!("Preparing to write HTML file [ {} ]", path.display());

    let template = match fs::read_to_string(template_path) {
        Ok(template) => template,
        Err(e) => {
            log::error!(
                "Unable to open template file [ {} ]: {}",
                template_path.display(),
                e
            );
            return false;
        }
    };

    if !template.contains(RESULTS_MARKER) {
        log::warn!(
            "Template [ {} ] has no {} marker; report will contain no results",
            template_path.display(),
            RESULTS_MARKER
        );
    }

    let html = render(results, &template, verbosity);
    match write_atomic(path, html.as_bytes()) {
        Ok(()) => {
            log::info!("Successfully wrote HTML file [ {} ]", path.display());
            true
        }
        Err(e) => {
            log::error!(
                "Unable to open output file [ {} ] for writing: {:#}",
                path.display(),
                e
            );
            false
        }
    }
}
