//! Loading results from a JSON document.
//!
//! The accepted shape is the one the JSON renderer writes, with an optional
//! `confidence` (`"sure"` or `"guess"`) on any leaf:
//!
//! ```json
//! [
//!     {"name": "ssh.root_login", "result": "FAIL", "notes": "PermitRootLogin yes"},
//!     {"name": "kernel.sysctl", "result": [
//!         {"name": "kernel.randomize_va_space", "result": "PASS", "notes": null},
//!         {"name": "fs.suid_dumpable", "result": "SKIP", "confidence": "guess"}
//!     ]}
//! ]
//! ```

use crate::data::{Confidence, GroupResult, NamedResult, Outcome, ResultValue, TestResult};
use crate::results::TestResults;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct InputLeaf {
    name: String,
    result: Outcome,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    confidence: Confidence,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputResult {
    Single(Outcome),
    Group(Vec<InputLeaf>),
}

#[derive(Debug, Deserialize)]
struct InputEntry {
    name: String,
    result: InputResult,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    confidence: Confidence,
}

impl From<InputEntry> for NamedResult {
    fn from(entry: InputEntry) -> Self {
        let value = match entry.result {
            InputResult::Single(outcome) => ResultValue::Single(TestResult {
                outcome,
                notes: entry.notes,
                confidence: entry.confidence,
            }),
            InputResult::Group(leaves) => {
                let mut group = GroupResult::new();
                for leaf in leaves {
                    group.add_result(
                        leaf.name,
                        TestResult {
                            outcome: leaf.result,
                            notes: leaf.notes,
                            confidence: leaf.confidence,
                        },
                    );
                }
                ResultValue::Group(group)
            }
        };
        NamedResult {
            name: entry.name,
            result: value,
        }
    }
}

/// Parses a results document from a string.
pub fn parse_results(text: &str) -> Result<TestResults> {
    let entries: Vec<InputEntry> =
        serde_json::from_str(text).context("Malformed results document")?;
    Ok(TestResults::new(entries.into_iter().map(Into::into).collect()))
}

/// Reads and parses a results document from `path`.
pub fn load_results(path: &Path) -> Result<TestResults> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results file: '{}'", path.display()))?;
    parse_results(&text).with_context(|| format!("Invalid results file: '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_and_group() {
        let results = parse_results(
            r#"[
                {"name": "a", "result": "PASS"},
                {"name": "b", "result": "SKIP", "notes": "n/a", "confidence": "guess"},
                {"name": "g", "result": [
                    {"name": "s1", "result": "PASS"},
                    {"name": "s2", "result": "FAIL", "notes": "bad"}
                ]}
            ]"#,
        )
        .unwrap();

        let entries: Vec<&NamedResult> = results.iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].result, ResultValue::Single(TestResult::pass()));
        assert_eq!(
            entries[1].result,
            ResultValue::Single(
                TestResult::skip()
                    .with_notes("n/a")
                    .with_confidence(Confidence::Guess)
            )
        );
        match &entries[2].result {
            ResultValue::Group(group) => {
                assert_eq!(group.len(), 2);
                assert_eq!(group.outcome(), Outcome::Fail);
            }
            other => panic!("expected group, got {other:?}"),
        }
        assert!(results.had_failures());
    }

    #[test]
    fn test_rejects_unknown_outcome() {
        assert!(parse_results(r#"[{"name": "a", "result": "MAYBE"}]"#).is_err());
        assert!(parse_results(r#"[{"name": "a", "result": "PASS", "confidence": "meh"}]"#).is_err());
    }

    #[test]
    fn test_reads_renderer_output() {
        let mut group = GroupResult::new();
        group.add_result("s1", TestResult::fail().with_notes("x"));
        let original = TestResults::new(vec![
            NamedResult::new("a", TestResult::skip().with_notes("why")),
            NamedResult::new("g", group),
        ]);
        let json = crate::output::json::render(&original).unwrap();
        let loaded = parse_results(std::str::from_utf8(&json).unwrap()).unwrap();
        assert_eq!(loaded, original);
    }
}
