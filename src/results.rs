//! The results collection for a single run and the display policy over it.
//!
//! [`TestResults`] holds named entries in insertion order, which is also the
//! display order. [`should_display`] decides whether a row with a given
//! outcome is shown at a verbosity level. [`TestResults::visible_rows`] and
//! [`TestResults::html_rows`] apply that policy (plus the overall-only
//! override for parent rows) to produce the rows the terminal and HTML
//! renderers draw.

use crate::data::{Confidence, NamedResult, Outcome, ResultValue, Verbosity};
use std::path::Path;

/// Returns whether a row with `outcome` is shown at `verbosity`.
///
/// This is the leaf policy only. Callers additionally show top-level and
/// group rows unconditionally when `verbosity` is [`Verbosity::OverallOnly`].
pub fn should_display(outcome: Outcome, verbosity: Verbosity) -> bool {
    if verbosity == Verbosity::All {
        return true;
    }
    match outcome {
        Outcome::Fail => verbosity >= Verbosity::FailOnly,
        Outcome::Skip => verbosity >= Verbosity::NotPass,
        Outcome::Pass => false,
    }
}

/// What kind of row a [`Row`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A top-level single result.
    Single,
    /// The aggregate row of a group.
    Group,
    /// A member of a group, drawn indented beneath its group row.
    Member,
}

/// A display row borrowed from a [`TestResults`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub kind: RowKind,
    pub name: &'a str,
    pub outcome: Outcome,
    /// `None` for group aggregate rows, which have no confidence of their own.
    pub confidence: Option<Confidence>,
    pub notes: Option<&'a str>,
}

/// Whether group members need their group row to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberRows {
    UnderShownParent,
    Always,
}

/// Ordered collection of named results from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestResults {
    results: Vec<NamedResult>,
}

impl TestResults {
    /// Creates a collection from an initial, possibly empty, list of entries.
    pub fn new(results: Vec<NamedResult>) -> Self {
        Self { results }
    }

    /// Appends entries in the order given.
    pub fn add_results<I>(&mut self, new_results: I)
    where
        I: IntoIterator<Item = NamedResult>,
    {
        self.results.extend(new_results);
    }

    /// Returns true if any entry, or any group aggregate, failed.
    pub fn had_failures(&self) -> bool {
        self.results
            .iter()
            .any(|entry| entry.result.outcome() == Outcome::Fail)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of leaf results: single entries plus every group member.
    pub fn leaf_count(&self) -> usize {
        self.results
            .iter()
            .map(|entry| match &entry.result {
                ResultValue::Single(_) => 1,
                ResultValue::Group(group) => group.len(),
            })
            .sum()
    }

    /// Rows shown in the terminal report at `verbosity`, in display order.
    ///
    /// Top-level and group rows pass if [`should_display`] accepts them or
    /// the level is `OverallOnly`. Group members are filtered by
    /// [`should_display`] alone and are only emitted beneath a group row that
    /// is itself shown.
    pub fn visible_rows(&self, verbosity: Verbosity) -> Vec<Row<'_>> {
        self.rows(verbosity, MemberRows::UnderShownParent)
    }

    /// Rows shown in the HTML report at `verbosity`, in display order.
    ///
    /// Parent rows follow the same rule as [`TestResults::visible_rows`], but
    /// every member accepted by [`should_display`] is emitted, even when its
    /// group row is hidden.
    pub fn html_rows(&self, verbosity: Verbosity) -> Vec<Row<'_>> {
        self.rows(verbosity, MemberRows::Always)
    }

    fn rows(&self, verbosity: Verbosity, members: MemberRows) -> Vec<Row<'_>> {
        let overall = verbosity == Verbosity::OverallOnly;
        let mut rows = Vec::new();

        for entry in &self.results {
            match &entry.result {
                ResultValue::Single(result) => {
                    if should_display(result.outcome, verbosity) || overall {
                        rows.push(Row {
                            kind: RowKind::Single,
                            name: &entry.name,
                            outcome: result.outcome,
                            confidence: Some(result.confidence),
                            notes: result.notes.as_deref(),
                        });
                    }
                }
                ResultValue::Group(group) => {
                    let show_parent = should_display(group.outcome(), verbosity) || overall;
                    if show_parent {
                        rows.push(Row {
                            kind: RowKind::Group,
                            name: &entry.name,
                            outcome: group.outcome(),
                            confidence: None,
                            notes: None,
                        });
                    } else if members == MemberRows::UnderShownParent {
                        continue;
                    }
                    rows.extend(
                        group
                            .results()
                            .iter()
                            .filter(|member| should_display(member.result.outcome, verbosity))
                            .map(|member| Row {
                                kind: RowKind::Member,
                                name: &member.name,
                                outcome: member.result.outcome,
                                confidence: Some(member.result.confidence),
                                notes: member.result.notes.as_deref(),
                            }),
                    );
                }
            }
        }

        rows
    }

    /// Prints the terminal report to stdout.
    ///
    /// See [`crate::output::terminal`] for the layout.
    pub fn display_on_terminal(&self, options: &crate::output::TerminalOptions) {
        crate::output::terminal::display(self, options);
    }

    /// Writes every leaf result to a CSV file. Returns false on failure,
    /// which has already been logged.
    pub fn write_csv(&self, path: &Path) -> bool {
        crate::output::csv::write(self, path)
    }

    /// Writes every entry to a JSON file. Returns false on failure, which has
    /// already been logged.
    pub fn write_json(&self, path: &Path) -> bool {
        crate::output::json::write(self, path)
    }

    /// Fills `template` with the rows visible at `verbosity` and writes the
    /// result to `path`. Returns false on failure, which has already been
    /// logged.
    pub fn write_html(&self, path: &Path, template: &Path, verbosity: Verbosity) -> bool {
        crate::output::html::write(self, path, template, verbosity)
    }
}

impl<'a> IntoIterator for &'a TestResults {
    type Item = &'a NamedResult;
    type IntoIter = std::slice::Iter<'a, NamedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
