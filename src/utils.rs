//! Utility functions for the report renderers.
//!
//! This module provides:
//! - Terminal width discovery via `stty -a`
//! - Notes truncation for fixed-width columns
//! - HTML escaping for free-text fields
//! - Whole-file writes that never leave a partial artifact behind

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Width assumed when the terminal cannot be queried.
pub const DEFAULT_TERM_WIDTH: usize = 80;

/// Returns the terminal width in columns, or [`DEFAULT_TERM_WIDTH`] if
/// `stty` is missing, fails, or reports nothing usable.
pub fn term_width() -> usize {
    // stty reads the settings of its stdin, so it must see ours.
    let output = match Command::new("stty")
        .arg("-a")
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return DEFAULT_TERM_WIDTH,
    };

    let text = String::from_utf8_lossy(&output.stdout);
    parse_stty_columns(&text).unwrap_or(DEFAULT_TERM_WIDTH)
}

/// Extracts the column count from `stty -a` output.
///
/// Settings are `;`-separated. Linux prints `columns 120`, BSD and macOS
/// print `120 columns`.
pub fn parse_stty_columns(text: &str) -> Option<usize> {
    for line in text.lines() {
        for setting in line.split(';') {
            let Some((first, second)) = setting.trim().split_once(' ') else {
                continue;
            };
            let (first, second) = (first.trim(), second.trim());
            if first == "columns" {
                if let Ok(n) = second.parse() {
                    return Some(n);
                }
            } else if second == "columns" {
                if let Ok(n) = first.parse() {
                    return Some(n);
                }
            }
        }
    }
    None
}

/// Truncates `notes` to at most `width` characters.
///
/// Over-long notes keep their first `width - 3` characters followed by
/// `"..."`, so the result is exactly `width` characters. Columns narrower
/// than the ellipsis get as much of `"..."` as fits.
pub fn truncate_notes(notes: &str, width: usize) -> String {
    if notes.chars().count() <= width {
        return notes.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let mut truncated: String = notes.chars().take(width - 3).collect();
    truncated.push_str("...");
    truncated
}

/// HTML-escapes a string for embedding in markup.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Writes `data` to `path` so that the target is either left untouched or
/// replaced by the complete contents.
///
/// The data goes to a temporary file in the destination directory, which is
/// then renamed over `path`. If the directory does not exist nothing is
/// created. A new file gets the mode a plain create would give it; an
/// existing file keeps its mode. When `path` is a symlink the file it points
/// to is replaced and the link is left in place.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let target = resolve_symlink(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = new_temp_file(dir)
        .with_context(|| format!("Unable to open '{}' for writing", path.display()))?;
    if let Ok(metadata) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .with_context(|| format!("Unable to copy permissions of '{}'", path.display()))?;
    }
    tmp.write_all(data)
        .with_context(|| format!("Failed writing '{}'", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed flushing '{}'", path.display()))?;
    tmp.persist(&target)
        .with_context(|| format!("Unable to replace '{}'", path.display()))?;
    Ok(())
}

/// Follows `path` if it is a symlink. Dangling links resolve to their
/// destination so the write creates it.
fn resolve_symlink(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(path)
            .or_else(|_| {
                fs::read_link(path).map(|link| match path.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                })
            })
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

#[cfg(unix)]
fn new_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // 0o666 less the umask, as for any newly created file.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stty_linux() {
        let out = "speed 38400 baud; rows 50; columns 132; line = 0;\nintr = ^C; quit = ^\\;";
        assert_eq!(parse_stty_columns(out), Some(132));
    }

    #[test]
    fn test_parse_stty_bsd() {
        let out = "speed 9600 baud; 24 rows; 100 columns;\nlflags: icanon isig";
        assert_eq!(parse_stty_columns(out), Some(100));
    }

    #[test]
    fn test_parse_stty_garbage() {
        assert_eq!(parse_stty_columns(""), None);
        assert_eq!(parse_stty_columns("columns wide; rows 3"), None);
    }

    #[test]
    fn test_truncate_notes() {
        assert_eq!(truncate_notes("short", 10), "short");
        assert_eq!(truncate_notes("exactly10!", 10), "exactly10!");
        let t = truncate_notes("this note is far too long", 10);
        assert_eq!(t, "this no...");
        assert_eq!(t.chars().count(), 10);
        assert_eq!(truncate_notes("abcdef", 2), "..");
        assert_eq!(truncate_notes("abcdef", 0), "");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
