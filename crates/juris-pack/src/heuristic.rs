//! # Legal Heuristics
//!
//! A heuristic is a declarative compliance rule: a `trigger` pattern that
//! says "this document is in scope" and an optional `negative_pattern` that
//! says "and the mandatory clause is present". The heuristic fires when the
//! trigger matches and the negative pattern does not, which is how a missing
//! clause is flagged.
//!
//! ## Evaluation Logic
//!
//! 1. Blank text fires nothing.
//! 2. Each heuristic is checked independently against the full text.
//! 3. `fires = trigger.is_match(text) && !negative.is_match(text)`.
//! 4. Matches are returned in declaration order. That order encodes statute
//!    importance as registered in the jurisdiction module; there is no
//!    runtime severity scoring.
//!
//! Both patterns are case-insensitive regular expressions.

use regex::{Regex, RegexBuilder};
use serde::ser::SerializeStruct;
use serde::Serialize;

use crate::error::{PackError, PackResult};

/// Static, uncompiled form of a heuristic as written in a jurisdiction module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicSpec {
    /// Stable rule key (e.g. `gh-stamp-duty`).
    pub id: &'static str,
    /// Human description of the compliance gap.
    pub issue: &'static str,
    /// Statutory citation.
    pub statute: &'static str,
    /// Suggested remedy text.
    pub fix: &'static str,
    /// Pattern that brings the document into scope.
    pub trigger: &'static str,
    /// Pattern for the mandatory clause; its absence fires the rule.
    pub negative_pattern: Option<&'static str>,
}

/// A compiled, immutable compliance heuristic.
#[derive(Debug, Clone)]
pub struct LegalHeuristic {
    id: String,
    issue: String,
    statute: String,
    fix: String,
    trigger: Regex,
    negative_pattern: Option<Regex>,
}

fn compile_pattern(heuristic_id: &str, pattern: &str) -> PackResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PackError::InvalidHeuristicPattern {
            heuristic_id: heuristic_id.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

impl LegalHeuristic {
    /// Compile a heuristic from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidHeuristicPattern`] if either pattern is
    /// not a valid regular expression.
    pub fn new(
        id: impl Into<String>,
        issue: impl Into<String>,
        statute: impl Into<String>,
        fix: impl Into<String>,
        trigger: &str,
        negative_pattern: Option<&str>,
    ) -> PackResult<Self> {
        let id = id.into();
        let trigger = compile_pattern(&id, trigger)?;
        let negative_pattern = negative_pattern
            .map(|p| compile_pattern(&id, p))
            .transpose()?;
        Ok(Self {
            id,
            issue: issue.into(),
            statute: statute.into(),
            fix: fix.into(),
            trigger,
            negative_pattern,
        })
    }

    /// Compile a heuristic from its static spec.
    pub fn compile(spec: &HeuristicSpec) -> PackResult<Self> {
        Self::new(
            spec.id,
            spec.issue,
            spec.statute,
            spec.fix,
            spec.trigger,
            spec.negative_pattern,
        )
    }

    /// Whether this heuristic fires against `text`.
    pub fn fires(&self, text: &str) -> bool {
        if !self.trigger.is_match(text) {
            return false;
        }
        match &self.negative_pattern {
            Some(negative) => !negative.is_match(text),
            None => true,
        }
    }

    /// Stable key, e.g. `gh-stamp-duty`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The compliance gap this heuristic reports.
    pub fn issue(&self) -> &str {
        &self.issue
    }

    /// Statute or regulation the gap is measured against.
    pub fn statute(&self) -> &str {
        &self.statute
    }

    /// Suggested remediation wording.
    pub fn fix(&self) -> &str {
        &self.fix
    }

    /// Source text of the trigger pattern.
    pub fn trigger(&self) -> &str {
        self.trigger.as_str()
    }

    /// Source text of the negative pattern, if any.
    pub fn negative_pattern(&self) -> Option<&str> {
        self.negative_pattern.as_ref().map(Regex::as_str)
    }
}

impl PartialEq for LegalHeuristic {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.issue == other.issue
            && self.statute == other.statute
            && self.fix == other.fix
            && self.trigger() == other.trigger()
            && self.negative_pattern() == other.negative_pattern()
    }
}

impl Eq for LegalHeuristic {}

impl Serialize for LegalHeuristic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("LegalHeuristic", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("issue", &self.issue)?;
        state.serialize_field("statute", &self.statute)?;
        state.serialize_field("fix", &self.fix)?;
        state.serialize_field("trigger", self.trigger())?;
        state.serialize_field("negativePattern", &self.negative_pattern())?;
        state.end()
    }
}

/// Evaluate `heuristics` against `text`, returning those that fire in
/// declaration order.
pub fn evaluate_heuristics<'a>(
    text: &str,
    heuristics: &'a [LegalHeuristic],
) -> Vec<&'a LegalHeuristic> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    heuristics.iter().filter(|h| h.fires(text)).collect()
}
