//! CLI interface definitions for the `recon-report` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs.
//!
//! # Example
//!
//! ```bash
//! recon-report results.json --level fail-only --csv out.csv --html out.html --template report.tpl
//! ```

use crate::data::Verbosity;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `recon-report`.
///
/// The terminal report is printed unless `--quiet` is given; each file
/// output is written only when its flag is present.
#[derive(Parser, Debug)]
#[command(name = "recon-report", version, about)]
pub struct Args {
    /// JSON results document to report on
    pub input: PathBuf,

    /// Which results to show in the terminal and HTML reports
    #[arg(long, value_enum, default_value_t = Verbosity::NotPass)]
    pub level: Verbosity,

    /// Disable colored result text
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Do not print the terminal report
    #[arg(long, short, default_value_t = false)]
    pub quiet: bool,

    /// Write every result to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write every result to a JSON file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Write an HTML report (requires --template)
    #[arg(long, value_name = "FILE", requires = "template")]
    pub html: Option<PathBuf>,

    /// HTML template containing the $$$RESULTS$$$ marker
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// TOML settings file (terminal colors under [output.terminal])
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Terminal width in columns (default: query the terminal). Notes always
    /// get at least 20 columns, so rows may run past a narrow width
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_and_values() {
        let args = Args::parse_from(["recon-report", "in.json"]);
        assert_eq!(args.level, Verbosity::NotPass);
        assert!(!args.no_color && !args.quiet);

        let args = Args::parse_from(["recon-report", "in.json", "--level", "overall-only", "-q"]);
        assert_eq!(args.level, Verbosity::OverallOnly);
        assert!(args.quiet);
    }

    #[test]
    fn test_html_requires_template() {
        assert!(Args::try_parse_from(["recon-report", "in.json", "--html", "out.html"]).is_err());
    }
}
