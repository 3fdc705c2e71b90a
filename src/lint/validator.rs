// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Pattern validation coordinator (result aggregation).
//!
//! This module runs the full pipeline for one pattern:
//! - **Normalise** (`core/normalizer.rs`): strip `/.../flags`
//! - **Extract** (`core/extractor.rs`): find every class
//! - **Analyse** (`core/tokenizer.rs`, `core/ranges.rs`, `core/overlap.rs`)
//!
//! and collects every issue into a `ValidationResult`. Callers decide
//! policy (fail a lint, block a commit, warn) from `is_valid` and
//! `issues`; the validator itself makes no such decision.
//!
//! # Issue order
//! Classes are visited in source order. Within a class, issues follow
//! pipeline order: ProblematicRange/InvalidRange, then UnescapedDash,
//! then OverlappingRange.
//!
//! # Example
//! ```
//! use charclass_lint::lint::validator::ClassValidator;
//!
//! let validator = ClassValidator::new();
//! let result = validator.validate("[a-zA-z]");
//!
//! if !result.is_valid {
//!     println!("Pattern has {} issue(s)", result.issues.len());
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    analyze_ranges, extract_classes, find_overlaps, normalize_pattern, tokenize_class,
    CharacterClass, Issue, IssueKind, Severity,
};
use crate::lint::options::AnalyzerOptions;

/// Complete validation result for one pattern
///
/// `is_valid` is false as soon as any Error-level issue is recorded.
/// `suggestions` holds one generic tip per distinct issue kind, in the
/// order the kinds were first seen.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    /// Creates an empty, valid result
    pub fn new() -> Self {
        Self {
            is_valid: true,
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Appends an issue, updating validity and the per-kind tips
    pub fn record(&mut self, issue: Issue) {
        if issue.severity == Severity::Error {
            self.is_valid = false;
        }

        let tip = issue.kind.tip();
        if !self.suggestions.iter().any(|s| s == tip) {
            self.suggestions.push(tip.to_string());
        }

        self.issues.push(issue);
    }

    /// Returns true if the result contains any Error-level issues
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    /// Number of issues of the given kind
    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    /// Issues of the given kind, in emission order
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }
}

impl Extend<Issue> for ValidationResult {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, issues: T) {
        for issue in issues {
            self.record(issue);
        }
    }
}

/// Character-class validator running the whole pipeline
///
/// Holds only its options, so one instance can be shared freely across
/// threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassValidator {
    options: AnalyzerOptions,
}

impl ClassValidator {
    /// Creates a validator with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom options
    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Validates every character class in a pattern
    ///
    /// Accepts a bare pattern or a `/pattern/flags` literal. Spans in the
    /// result are byte offsets into `pattern` as given.
    ///
    /// # Example
    ///
    /// ```
    /// use charclass_lint::lint::validator::ClassValidator;
    /// use charclass_lint::core::IssueKind;
    ///
    /// let result = ClassValidator::new().validate("/[z-a]/i");
    /// assert!(!result.is_valid);
    /// assert_eq!(result.count(IssueKind::InvalidRange), 1);
    /// ```
    pub fn validate(&self, pattern: &str) -> ValidationResult {
        let normalized = normalize_pattern(pattern);
        let classes = extract_classes(normalized.body, normalized.offset);

        let mut result = ValidationResult::new();
        for class in &classes {
            result.extend(self.check_class(class));
        }

        debug!(
            classes = classes.len(),
            issues = result.issues.len(),
            valid = result.is_valid,
            "validated pattern"
        );
        result
    }

    /// Runs tokenizing, range analysis and overlap detection on one class
    pub fn check_class(&self, class: &CharacterClass<'_>) -> Vec<Issue> {
        let tokens = tokenize_class(class.content, class.content_offset());
        let analysis = analyze_ranges(&tokens, self.options.materialize_limit);
        let overlaps = find_overlaps(&analysis.ranges, self.options.flag_containment);

        analysis
            .range_issues
            .into_iter()
            .chain(analysis.dash_issues)
            .chain(overlaps)
            .collect()
    }
}
