//! Terminal output formatter for check results.
//!
//! The report is a fixed-width table: test name (60 columns), result (9),
//! confidence (11), and notes filling the rest of the terminal, but never
//! fewer than [`MIN_NOTES_WIDTH`] columns. Group members
//! are indented beneath their group row. Only rows passing the verbosity
//! filter are drawn.

use crate::config::TermColors;
use crate::data::{Confidence, Outcome, Verbosity};
use crate::results::{Row, RowKind, TestResults};
use crate::utils::{DEFAULT_TERM_WIDTH, truncate_notes};

pub const NAME_WIDTH: usize = 60;
pub const RESULT_WIDTH: usize = 9;
pub const CONFIDENCE_WIDTH: usize = 11;
/// Notes get at least this many columns, even on a terminal of 80 or less.
pub const MIN_NOTES_WIDTH: usize = 20;

const INDENT: &str = "     ";

/// Everything the terminal renderer needs besides the results themselves.
///
/// # Fields
/// * `use_color` - Wrap result text in the configured color escapes
/// * `verbosity` - Which rows to draw
/// * `colors` - Escape sequences per outcome
/// * `width` - Total terminal width in columns
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub use_color: bool,
    pub verbosity: Verbosity,
    pub colors: TermColors,
    pub width: usize,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            use_color: true,
            verbosity: Verbosity::default(),
            colors: TermColors::default(),
            width: DEFAULT_TERM_WIDTH,
        }
    }
}

impl TerminalOptions {
    /// Width of the notes column: whatever the fixed columns leave over,
    /// floored at [`MIN_NOTES_WIDTH`].
    pub fn notes_width(&self) -> usize {
        self.width
            .saturating_sub(NAME_WIDTH + RESULT_WIDTH + CONFIDENCE_WIDTH)
            .max(MIN_NOTES_WIDTH)
    }

    fn color_for(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Pass => &self.colors.pass,
            Outcome::Fail => &self.colors.fail,
            Outcome::Skip => &self.colors.skip,
        }
    }
}

fn confidence_text(confidence: Option<Confidence>) -> &'static str {
    match confidence {
        None | Some(Confidence::Sure) => "",
        Some(Confidence::Guess) => "guess",
    }
}

/// Formats a single table row (without trailing newline).
///
/// # Arguments
/// * `row` - The row to format
/// * `options` - Color, escape and width settings
///
/// # Returns
/// * The row text; two lines when the name overflows its column
pub fn format_row(row: &Row<'_>, options: &TerminalOptions) -> String {
    let mut line = String::new();

    let name = if row.kind == RowKind::Member {
        format!("{INDENT}{}", row.name)
    } else {
        row.name.to_string()
    };
    line.push_str(&format!("{name:<NAME_WIDTH$}"));
    // Long names get their own line; the rest of the row continues beneath,
    // aligned with the result column.
    if name.chars().count() > NAME_WIDTH {
        line.push('\n');
        line.push_str(&" ".repeat(NAME_WIDTH));
    }

    if options.use_color {
        line.push_str(options.color_for(row.outcome));
    }
    line.push_str(&format!("{:<RESULT_WIDTH$}", row.outcome.as_str()));
    if options.use_color {
        line.push_str(&options.colors.end);
    }

    line.push_str(&format!(
        "{:<CONFIDENCE_WIDTH$}",
        confidence_text(row.confidence)
    ));

    if let Some(notes) = row.notes {
        line.push_str(&truncate_notes(notes, options.notes_width()));
    }

    line
}

/// Formats the whole terminal report into a `String`.
///
/// # Arguments
/// * `results` - The collection to report on
/// * `options` - Verbosity, color and width settings
///
/// # Returns
/// * The header, one entry per visible row, and a closing blank line
pub fn format(results: &TestResults, options: &TerminalOptions) -> String {
    let banner = "=".repeat(options.width);
    let mut out = format!(
        "\n{banner}\n{:<NAME_WIDTH$}{:<RESULT_WIDTH$}{:<CONFIDENCE_WIDTH$}Notes\n{banner}\n",
        "Test Name", "Result", "Confidence"
    );

    for row in results.visible_rows(options.verbosity) {
        out.push_str(&format_row(&row, options));
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Prints the terminal report to stdout.
pub fn display(results: &TestResults, options: &TerminalOptions) {
    print!("{}", format(results, options));
}
