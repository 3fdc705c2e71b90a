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


use crate::core::{Issue, IssueKind, Severity, Span};
use crate::lint::{validate, AnalyzerOptions, ClassValidator, ValidationResult};

fn kinds(result: &ValidationResult) -> Vec<IssueKind> {
    result.issues.iter().map(|issue| issue.kind).collect()
}

// ========================================================================
// Documented properties
// ========================================================================

#[test]
fn test_validation_is_idempotent() {
    for pattern in ["[a-zA-z]", "[z-a]", "/[a-cb-d]/g", "[,-_]", "plain", ""] {
        assert_eq!(validate(pattern), validate(pattern), "'{}' must not depend on hidden state", pattern);
    }
}

#[test]
fn test_common_classes_are_valid() {
    for pattern in ["[a-z]", "[a-zA-Z]", "[0-9]", "[a]", "[]", "[-]", "[a-zA-Z0-9._-]"] {
        let result = validate(pattern);
        assert!(result.is_valid, "'{}' should be valid, got {:?}", pattern, result.issues);
        assert!(result.issues.is_empty());
        assert!(result.suggestions.is_empty());
    }
}

#[test]
fn test_mixed_case_range_is_problematic() {
    let result = validate("[a-zA-z]");

    assert!(!result.is_valid);
    assert_eq!(result.issues.len(), 1, "Only A-z is flagged: {:?}", result.issues);
    assert_eq!(result.count(IssueKind::ProblematicRange), 1);

    let message = &result.issues[0].message;
    for c in ['[', '\\', ']', '^', '_', '`'] {
        assert!(message.contains(c), "Offending list should include '{}': {}", c, message);
    }
}

#[test]
fn test_reversed_range_is_invalid() {
    let result = validate("[z-a]");

    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::InvalidRange);
    assert!(result.issues[0].suggested_fix.as_deref().unwrap_or("").contains("[a-z]"));
}

#[test]
fn test_overlapping_ranges() {
    let result = validate("[a-cb-d]");

    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::OverlappingRange);
    assert_eq!(result.issues[0].suggested_fix.as_deref(), Some("a-d"));
}

#[test]
fn test_dash_between_punctuation_is_flagged() {
    let result = validate("[a-zA-Z0-9%=.,-_]");

    assert!(result.count(IssueKind::UnescapedDash) >= 1);
    let dash = result
        .issues_of(IssueKind::UnescapedDash)
        .next()
        .unwrap();
    assert_eq!(dash.span, Span::new(14, 15), "Dash between ',' and '_'");
}

#[test]
fn test_boundary_dashes_not_flagged() {
    assert_eq!(validate("[-abc]").count(IssueKind::UnescapedDash), 0);
    assert_eq!(validate("[abc-]").count(IssueKind::UnescapedDash), 0);
}

#[test]
fn test_escaped_dash_not_flagged() {
    assert_eq!(validate(r"[a-z\-_]").count(IssueKind::UnescapedDash), 0);
}

#[test]
fn test_escaped_endpoints_skip_problematic_check() {
    assert_eq!(validate(r"[\x41-\x5A]").count(IssueKind::ProblematicRange), 0);
    assert_eq!(validate(r"[\x41-\x7A]").count(IssueKind::ProblematicRange), 0);
}

// ========================================================================
// Aggregation
// ========================================================================

#[test]
fn test_issue_order_within_class() {
    let result = validate("[z-a,-_a-cb-d]");
    assert_eq!(
        kinds(&result),
        vec![
            IssueKind::InvalidRange,
            IssueKind::UnescapedDash,
            IssueKind::OverlappingRange,
        ],
        "Pipeline order, not source order or alphabetical"
    );
}

#[test]
fn test_issue_order_across_classes() {
    let result = validate("[,-_][z-a]");
    assert_eq!(kinds(&result), vec![IssueKind::UnescapedDash, IssueKind::InvalidRange]);
}

#[test]
fn test_one_suggestion_per_kind() {
    let result = validate("[z-a][y-b][,-_]");

    assert_eq!(result.issues.len(), 3);
    assert_eq!(result.suggestions.len(), 2, "Tips are per kind, not per issue");
    assert_eq!(result.suggestions[0], IssueKind::InvalidRange.tip());
    assert_eq!(result.suggestions[1], IssueKind::UnescapedDash.tip());
}

#[test]
fn test_warning_does_not_invalidate() {
    let mut result = ValidationResult::new();
    result.record(Issue {
        kind: IssueKind::OverlappingRange,
        message: "stylistic".to_string(),
        span: Span::new(0, 1),
        severity: Severity::Warning,
        suggested_fix: None,
    });

    assert!(result.is_valid);
    assert!(!result.has_errors());
    assert_eq!(result.suggestions.len(), 1);
}

// ========================================================================
// Spans and input forms
// ========================================================================

#[test]
fn test_spans_point_into_original_input() {
    let pattern = "/[z-a]/gi";
    let result = validate(pattern);
    let span = result.issues[0].span;

    assert_eq!(span, Span::new(2, 5));
    assert_eq!(&pattern[span.start..span.end], "z-a");
}

#[test]
fn test_spans_account_for_leading_whitespace() {
    let pattern = "   x[A-z]";
    let span = validate(pattern).issues[0].span;
    assert_eq!(&pattern[span.start..span.end], "A-z");
}

#[test]
fn test_malformed_input_is_ignored() {
    for pattern in ["[a-z", "]z-a[", r"\[z-a]", "[", "]", r"\"] {
        let result = validate(pattern);
        assert!(result.is_valid, "'{}' has no terminated class", pattern);
        assert!(result.issues.is_empty());
    }
}

#[test]
fn test_negated_classes() {
    assert!(validate("[^a-z]").is_valid);
    assert!(validate("[^a-]").is_valid, "Trailing dash stays literal");

    for pattern in ["[^-a]", "[^-,]"] {
        let result = validate(pattern);
        assert_eq!(kinds(&result), vec![IssueKind::UnescapedDash], "'{}' dash sits after '^'", pattern);
    }
}

#[test]
fn test_chained_dashes_share_endpoints() {
    let result = validate("[a-z-0]");
    assert_eq!(kinds(&result), vec![IssueKind::InvalidRange]);
    assert_eq!(result.issues[0].suggested_fix.as_deref(), Some("[0-z]"));

    let result = validate("[a-c-e]");
    assert_eq!(kinds(&result), vec![IssueKind::OverlappingRange]);
    assert_eq!(result.issues[0].suggested_fix.as_deref(), Some("a-e"));
}

#[test]
fn test_unicode_letter_ranges_are_valid() {
    for pattern in ["[α-ω]", "[А-Яа-я]", "[ä-ü]"] {
        assert!(validate(pattern).is_valid, "'{}' should be valid", pattern);
    }
}

// ========================================================================
// Options
// ========================================================================

#[test]
fn test_containment_policy_is_configurable() {
    assert!(validate("[a-zb-d]").is_valid, "Containment is not flagged by default");

    let strict = ClassValidator::with_options(AnalyzerOptions::new().with_flag_containment(true));
    let result = strict.validate("[a-zb-d]");
    assert_eq!(result.count(IssueKind::OverlappingRange), 1);
}

#[test]
fn test_materialize_limit_does_not_change_results() {
    let tight = ClassValidator::with_options(AnalyzerOptions::new().with_materialize_limit(1));
    assert_eq!(tight.validate("[a-zA-z0-z]"), validate("[a-zA-z0-z]"));
}

#[test]
fn test_default_options() {
    let options = *ClassValidator::new().options();
    assert_eq!(options.materialize_limit, 4096);
    assert!(!options.flag_containment);
}
