//! JSON output formatter for check results.
//!
//! Emits an array with one object per top-level entry. A group's `result`
//! is itself an array holding every member, so like CSV this is a full,
//! unfiltered export. Keys always appear in the order `name`, `result`,
//! `notes`.

use crate::data::{ResultValue, TestResult};
use crate::results::TestResults;
use crate::utils::write_atomic;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct JsonLeaf<'a> {
    pub name: &'a str,
    pub result: &'static str,
    pub notes: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JsonResult<'a> {
    Single(&'static str),
    Group(Vec<JsonLeaf<'a>>),
}

#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub name: &'a str,
    pub result: JsonResult<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<&'a str>>,
}

fn leaf<'a>(name: &'a str, result: &'a TestResult) -> JsonLeaf<'a> {
    JsonLeaf {
        name,
        result: result.outcome.as_str(),
        notes: result.notes.as_deref(),
    }
}

/// Builds the serializable view of `results`.
pub fn entries(results: &TestResults) -> Vec<JsonEntry<'_>> {
    results
        .iter()
        .map(|entry| match &entry.result {
            ResultValue::Single(result) => JsonEntry {
                name: &entry.name,
                result: JsonResult::Single(result.outcome.as_str()),
                notes: Some(result.notes.as_deref()),
            },
            ResultValue::Group(group) => JsonEntry {
                name: &entry.name,
                result: JsonResult::Group(
                    group
                        .results()
                        .iter()
                        .map(|member| leaf(&member.name, &member.result))
                        .collect(),
                ),
                notes: None,
            },
        })
        .collect()
}

/// Renders the results as 4-space indented JSON.
///
/// # Arguments
/// * `results` - The collection to export
///
/// # Returns
/// * The JSON document followed by a newline
pub fn render(results: &TestResults) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    entries(results)
        .serialize(&mut ser)
        .context("Failed to serialize results")?;
    out.push(b'\n');
    Ok(out)
}

fn try_write(results: &TestResults, path: &Path) -> Result<()> {
    let data = render(results)?;
    write_atomic(path, &data)
}

/// Writes the JSON report to `path`.
///
/// Failures are logged, not returned; the return value only reports whether
/// the file was written.
///
/// # Arguments
/// * `results` - The collection to export
/// * `path` - Destination file, replaced atomically
///
/// # Returns
/// * `true` if the file was written, `false` if a failure was logged
pub fn write(results: &TestResults, path: &Path) -> bool {
    log::info!("Preparing to write JSON file [ {} ]", path.display());
    match try_write(results, path) {
        Ok(()) => {
            log::info!("Writing JSON file [ {} ] successful", path.display());
            true
        }
        Err(e) => {
            log::error!("Unable to write JSON file [ {} ]: {:#}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GroupResult, NamedResult};
    use serde_json::{Value, json};

    #[test]
    fn test_empty_is_empty_array() {
        let out = render(&TestResults::default()).unwrap();
        assert_eq!(out, b"[]\n");
    }

    #[test]
    fn test_shape_and_key_order() {
        let mut group = GroupResult::new();
        group.add_result("s1", TestResult::fail().with_notes("bad"));
        group.add_result("s2", TestResult::skip());
        let results = TestResults::new(vec![
            NamedResult::new("check-a", TestResult::pass()),
            NamedResult::new("check-b", group),
        ]);

        let out = String::from_utf8(render(&results).unwrap()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!([
                {"name": "check-a", "result": "PASS", "notes": null},
                {"name": "check-b", "result": [
                    {"name": "s1", "result": "FAIL", "notes": "bad"},
                    {"name": "s2", "result": "SKIP", "notes": null},
                ]},
            ])
        );

        let name = out.find("\"name\": \"check-a\"").unwrap();
        let result = out.find("\"result\": \"PASS\"").unwrap();
        assert!(name < result);
        assert!(out.contains("\n    {\n        \"name\""));
    }
}
