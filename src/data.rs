//! Data structures for representing check outcomes.
//!
//! This module defines the vocabulary shared by the whole crate: the outcome
//! of a single check, how confident the check is about it, and the verbosity
//! levels used when displaying results. It also defines the two record types
//! a check can hand back: a single [`TestResult`] or a [`GroupResult`] of
//! repeated sub-checks.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The outcome of a single check.
///
/// # Variants
/// * `Pass` - The check passed
/// * `Fail` - The check failed
/// * `Skip` - The check could not be run or did not apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

impl Outcome {
    /// Returns a string representation of the outcome.
    ///
    /// # Returns
    /// * `"PASS"`, `"FAIL"` or `"SKIP"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Skip => "SKIP",
        }
    }

    /// CSS class used for this outcome in HTML reports.
    pub fn css_class(&self) -> &'static str {
        match self {
            Outcome::Pass => "test_pass",
            Outcome::Fail => "test_fail",
            Outcome::Skip => "test_skip",
        }
    }
}

/// How certain a check is about its own outcome.
///
/// Some checks can only make an educated guess; those report `Guess`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Sure,
    Guess,
}

impl Confidence {
    /// Returns `"sure"` or `"guess"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Sure => "sure",
            Confidence::Guess => "guess",
        }
    }
}

/// Controls which results are shown by the terminal and HTML renderers.
///
/// Variants are ordered from least to most verbose, so `>=` comparisons
/// mean "at least this verbose".
///
/// # Variants
/// * `OverallOnly` - Only top-level and group summary rows
/// * `FailOnly` - Failing rows, plus their parents
/// * `NotPass` - Failing and skipped rows
/// * `All` - Every row, including passing ones
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Verbosity {
    OverallOnly = 1,
    FailOnly = 2,
    #[default]
    NotPass = 3,
    All = 4,
}

/// The result of a single check.
///
/// # Fields
/// * `outcome` - Whether the check passed, failed or was skipped
/// * `notes` - Optional remarks, typically why the check failed or skipped
/// * `confidence` - How certain the check is about `outcome`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub outcome: Outcome,
    pub notes: Option<String>,
    pub confidence: Confidence,
}

impl TestResult {
    /// Creates a result with no notes and `Sure` confidence.
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            notes: None,
            confidence: Confidence::Sure,
        }
    }

    /// Attaches notes to the result.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the confidence of the result.
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn pass() -> Self {
        Self::new(Outcome::Pass)
    }

    pub fn fail() -> Self {
        Self::new(Outcome::Fail)
    }

    pub fn skip() -> Self {
        Self::new(Outcome::Skip)
    }
}

/// A named member of a [`GroupResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub name: String,
    pub result: TestResult,
}

/// Results of a check that tests the same thing repeatedly.
///
/// The group carries an aggregate outcome derived from its members: it starts
/// as `Skip`, becomes `Pass` once a passing member is added, and becomes
/// `Fail` as soon as any failing member is added. A `Fail` aggregate is never
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResult {
    members: Vec<GroupMember>,
    outcome: Outcome,
}

impl Default for GroupResult {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupResult {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            outcome: Outcome::Skip,
        }
    }

    /// Appends a named sub-check result and updates the aggregate outcome.
    ///
    /// Names are not required to be unique.
    pub fn add_result(&mut self, name: impl Into<String>, result: TestResult) {
        match (result.outcome, self.outcome) {
            (Outcome::Fail, _) => self.outcome = Outcome::Fail,
            (Outcome::Pass, Outcome::Skip) => self.outcome = Outcome::Pass,
            _ => {}
        }
        self.members.push(GroupMember {
            name: name.into(),
            result,
        });
    }

    /// The aggregate outcome of the whole group.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Members in the order they were added.
    pub fn results(&self) -> &[GroupMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The value held by a results entry: either a single result or a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultValue {
    Single(TestResult),
    Group(GroupResult),
}

impl ResultValue {
    /// Outcome of the entry: the record's own outcome, or the group aggregate.
    pub fn outcome(&self) -> Outcome {
        match self {
            ResultValue::Single(result) => result.outcome,
            ResultValue::Group(group) => group.outcome(),
        }
    }
}

impl From<TestResult> for ResultValue {
    fn from(result: TestResult) -> Self {
        ResultValue::Single(result)
    }
}

impl From<GroupResult> for ResultValue {
    fn from(group: GroupResult) -> Self {
        ResultValue::Group(group)
    }
}

/// A named top-level entry in a results collection.
///
/// # Fields
/// * `name` - Descriptive name of the check
/// * `result` - A single result or a group of sub-check results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedResult {
    pub name: String,
    pub result: ResultValue,
}

impl NamedResult {
    pub fn new(name: impl Into<String>, result: impl Into<ResultValue>) -> Self {
        Self {
            name: name.into(),
            result: result.into(),
        }
    }
}
