//! Main entry point for the `recon-report` CLI application.
//!
//! `recon-report` takes the results of a security audit run as a JSON
//! document and renders them for people and tools.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads results with [`input::load_results`]
//! - Prints the terminal report at the requested verbosity
//! - Writes each requested CSV, JSON and HTML artifact
//!
//! # Exit Status
//! - `0` when no check failed
//! - `1` when at least one check or group failed
//! - `2` when the input or config could not be loaded, or an output failed

use anyhow::Result;
use clap::Parser;
use recon_report::config::{Settings, TermColors};
use recon_report::output::TerminalOptions;
use recon_report::utils::term_width;
use recon_report::{Args, input};
use std::process::ExitCode;

/// Builds terminal options from CLI arguments and settings.
fn terminal_options(args: &Args, settings: &Settings) -> TerminalOptions {
    TerminalOptions {
        use_color: !args.no_color,
        verbosity: args.level,
        colors: TermColors::from_settings(settings),
        width: args.width.unwrap_or_else(term_width),
    }
}

/// Runs the report and returns whether every requested output was written
/// and whether any check failed.
fn run(args: &Args) -> Result<(bool, bool)> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let results = input::load_results(&args.input)?;
    log::debug!(
        "Loaded {} entries ({} leaf results) from {}",
        results.len(),
        results.leaf_count(),
        args.input.display()
    );

    if !args.quiet {
        results.display_on_terminal(&terminal_options(args, &settings));
    }

    let mut written = true;
    if let Some(path) = &args.csv {
        written &= results.write_csv(path);
    }
    if let Some(path) = &args.json {
        written &= results.write_json(path);
    }
    if let (Some(path), Some(template)) = (&args.html, &args.template) {
        written &= results.write_html(path, template, args.level);
    }

    Ok((written, results.had_failures()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok((true, false)) => ExitCode::SUCCESS,
        Ok((true, true)) => ExitCode::from(1),
        Ok((false, _)) => ExitCode::from(2),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
