//! Library crate for recon-report
//!
//! Collects the outcomes of security audit checks and renders them as a
//! terminal table, CSV, JSON, or a templated HTML report.
//!
//! # Modules
//!
//! - [`data`]: Outcome vocabulary and result records (`TestResult`, `GroupResult`)
//! - [`results`]: The `TestResults` collection and the visibility filter
//! - [`output`]: Renderers (terminal, CSV, JSON, HTML)
//! - [`config`]: Settings lookup and terminal colors
//! - [`input`]: Loading results from a JSON document
//! - [`cli`]: Command-line interface definitions
//! - [`utils`]: Terminal width, truncation, escaping and file writes
//!
//! # Example
//!
//! ```rust
//! use recon_report::{GroupResult, NamedResult, TestResult, TestResults, Verbosity};
//!
//! let mut ports = GroupResult::new();
//! ports.add_result("tcp/22", TestResult::pass());
//! ports.add_result("tcp/23", TestResult::fail().with_notes("telnet is listening"));
//!
//! let mut results = TestResults::default();
//! results.add_results(vec![
//!     NamedResult::new("firewall.enabled", TestResult::pass()),
//!     NamedResult::new("network.open_ports", ports),
//! ]);
//!
//! assert!(results.had_failures());
//! assert_eq!(results.visible_rows(Verbosity::FailOnly).len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod input;
pub mod output;
pub mod results;
pub mod utils;

pub use cli::Args;
pub use data::{Confidence, GroupResult, NamedResult, Outcome, ResultValue, TestResult, Verbosity};
pub use results::{TestResults, should_display};
