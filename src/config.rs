//! Configuration lookup for rendering parameters.
//!
//! Settings come from an optional TOML file and are looked up by dotted key
//! (`output.terminal.term_color_pass`) with a caller-supplied default.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const TC_PASS: &str = "\x1b[92m";
pub const TC_FAIL: &str = "\x1b[91m";
pub const TC_SKIP: &str = "\x1b[93m";
pub const TC_END: &str = "\x1b[0m";

/// Key/value settings loaded from a TOML document.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    root: toml::Table,
}

impl Settings {
    /// Reads and parses a TOML settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: '{}'", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Invalid config file: '{}'", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let root: toml::Table = text.parse().context("Failed to parse TOML")?;
        Ok(Self { root })
    }

    /// Returns the string at dotted `key`, or `default` when the key is
    /// missing or does not hold a string.
    pub fn get_config(&self, key: &str, default: &str) -> String {
        let mut parts = key.split('.');
        let Some(first) = parts.next() else {
            return default.to_string();
        };
        let mut value = self.root.get(first);
        for part in parts {
            value = value.and_then(|v| v.get(part));
        }
        value
            .and_then(|v| v.as_str())
            .unwrap_or(default)
            .to_string()
    }
}

/// Rewrites an escape sequence into canonical `ESC[` form.
///
/// Configured values may spell the escape in any way (`\033[92m`, `\e[92m`,
/// a raw ESC byte); only the SGR parameters after the first `[` are kept.
/// Returns `None` if the value has no `[`.
pub fn normalize_escape(raw: &str) -> Option<String> {
    let params = raw.split('[').nth(1)?;
    Some(format!("\x1b[{params}"))
}

/// Terminal escape sequences used to color result text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermColors {
    pub pass: String,
    pub fail: String,
    pub skip: String,
    pub end: String,
}

impl Default for TermColors {
    fn default() -> Self {
        Self {
            pass: TC_PASS.to_string(),
            fail: TC_FAIL.to_string(),
            skip: TC_SKIP.to_string(),
            end: TC_END.to_string(),
        }
    }
}

impl TermColors {
    /// Resolves the four color keys from `settings`, falling back to the
    /// built-in colors for missing or unusable values.
    pub fn from_settings(settings: &Settings) -> Self {
        let lookup = |key: &str, default: &str| {
            let raw = settings.get_config(key, default);
            normalize_escape(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring malformed color for [ {key} ]: {raw:?}");
                default.to_string()
            })
        };
        Self {
            pass: lookup("output.terminal.term_color_pass", TC_PASS),
            fail: lookup("output.terminal.term_color_fail", TC_FAIL),
            skip: lookup("output.terminal.term_color_skip", TC_SKIP),
            end: lookup("output.terminal.term_color_end", TC_END),
        }
    }
}
