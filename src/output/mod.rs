//! Modular output system for `recon-report`.
//!
//! Each renderer consumes a [`TestResults`](crate::results::TestResults)
//! collection read-only and produces one artifact.
//!
//! # Available Formatters
//!
//! - **Terminal**: Fixed-width, optionally colored table on stdout, filtered
//!   by verbosity
//! - **CSV**: Every leaf result, one row each, unfiltered
//! - **JSON**: Every entry with nested group members, unfiltered
//! - **HTML**: Filtered table rows substituted into a caller-supplied template
//!
//! The file renderers are split into a pure `render` function that returns
//! the artifact contents and a `write` function that handles the file and
//! logs failures instead of returning them.

pub mod csv;
pub mod html;
pub mod json;
pub mod terminal;

pub use terminal::TerminalOptions;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

/// HTML output renderer function.
///
/// See [`html::render`] for full documentation.
pub use html::render as render_html;

/// JSON output renderer function.
///
/// See [`json::render`] for full documentation.
pub use json::render as render_json;

/// Terminal output renderer function.
///
/// See [`terminal::format`] for full documentation.
pub use terminal::format as render_terminal;
