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


//! src/core/ranges.rs
//!
//! Range and dash analysis (pipeline stage 4)
//!
//! Every bare `-` strictly inside a class body is either a range
//! operator or an ambiguous literal. Ranges are then checked in order:
//!
//! 1. **Inverted**: start sorts after end (`z-a`)
//! 2. **Problematic**: span silently covers regex punctuation (`A-z`)
//!
//! # Classification
//! A dash is a range operator when both neighbours decode to a cased
//! letter or an ASCII digit, or when either neighbour is an escape
//! sequence (an explicit endpoint states intent). Anything else is
//! reported as an unescaped dash.
//!
//! # Large ranges
//! Spans up to `materialize_limit` code points are walked character by
//! character. Wider spans test each watch-list character arithmetically
//! instead, so memory stays bounded for ranges across Unicode planes.

use crate::core::types::{class_literal, Issue, IssueKind, Range, Token};

/// Characters that an alphanumeric range should never cover by accident
pub const WATCH_LIST: [char; 16] = [
    '[', ']', '^', '_', '`', '\\', '|', '{', '}', '(', ')', '+', '*', '?', '.', '$',
];

/// ASCII blocks a split suggestion keeps
const ALNUM_BLOCKS: [(char, char); 3] = [('0', '9'), ('A', 'Z'), ('a', 'z')];

/// Fix text for an ambiguous dash
pub const DASH_FIX: &str = "escape the dash or move it to the start/end of the class";

/// Outcome of analysing one class body
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeAnalysis {
    /// Every range operator found, including inverted and escaped ones
    pub ranges: Vec<Range>,
    /// ProblematicRange and InvalidRange issues in source order
    pub range_issues: Vec<Issue>,
    /// UnescapedDash issues in source order
    pub dash_issues: Vec<Issue>,
}

/// Classifies dashes and validates the resulting ranges
pub fn analyze_ranges(tokens: &[Token<'_>], materialize_limit: u32) -> RangeAnalysis {
    let mut analysis = RangeAnalysis::default();

    for (index, token) in tokens.iter().enumerate() {
        if !token.is_unescaped_dash() || is_boundary(tokens, index) {
            continue;
        }

        let prev = &tokens[index - 1];
        let next = &tokens[index + 1];

        if !forms_range(prev, next) {
            analysis.dash_issues.push(unescaped_dash_issue(token, prev, next));
            continue;
        }

        let Some(range) = Range::from_tokens(prev, next) else {
            continue;
        };

        if range.is_inverted() {
            analysis.range_issues.push(invalid_range_issue(&range, prev, next));
        } else if !range.is_escaped {
            if let Some(issue) = problematic_range_issue(&range, materialize_limit) {
                analysis.range_issues.push(issue);
            }
        }

        analysis.ranges.push(range);
    }

    analysis
}

/// A dash first or last in the body is literal
///
/// Only the neighbours decide the rest, so in `[a-c-e]` the `c` ends one
/// range and starts the next.
fn is_boundary(tokens: &[Token<'_>], index: usize) -> bool {
    index == 0 || index + 1 >= tokens.len()
}

/// Decides whether `prev - next` reads as a range
pub fn forms_range(prev: &Token<'_>, next: &Token<'_>) -> bool {
    if prev.is_escaped || next.is_escaped {
        return true;
    }
    is_range_endpoint(prev.decoded_char) && is_range_endpoint(next.decoded_char)
}

fn is_range_endpoint(decoded: Option<char>) -> bool {
    decoded.is_some_and(|c| c.is_ascii_digit() || has_case(c))
}

/// Letters are characters whose lower and upper case forms differ
pub fn has_case(c: char) -> bool {
    !c.to_lowercase().eq(c.to_uppercase())
}

/// Watch-list characters covered by `range`, ascending by code point
pub fn offending_chars(range: &Range, materialize_limit: u32) -> Vec<char> {
    let (start, end) = (range.start_code(), range.end_code());
    if range.is_inverted() {
        return Vec::new();
    }

    if range.code_point_count() <= materialize_limit {
        (start..=end)
            .filter_map(char::from_u32)
            .filter(|c| WATCH_LIST.contains(c))
            .collect()
    } else {
        let mut hits: Vec<char> = WATCH_LIST
            .iter()
            .copied()
            .filter(|&c| (start..=end).contains(&(c as u32)))
            .collect();
        hits.sort_unstable();
        hits
    }
}

/// Proposes narrower ranges that keep the alphanumeric blocks
///
/// `A-z` becomes `A-Za-z`; `0-z` becomes `0-9A-Za-z`. A tail beyond
/// ASCII is kept as its own range. Returns `None` if nothing remains.
pub fn split_suggestion(range: &Range) -> Option<String> {
    let (start, end) = (range.start_char, range.end_char);

    let mut pieces: Vec<String> = ALNUM_BLOCKS
        .iter()
        .filter_map(|&(low, high)| {
            let (from, to) = (start.max(low), end.min(high));
            (from <= to).then(|| format_range(from, to))
        })
        .collect();

    if end > '\u{7F}' {
        pieces.push(format_range(start.max('\u{80}'), end));
    }

    (!pieces.is_empty()).then(|| pieces.concat())
}

fn format_range(from: char, to: char) -> String {
    if from == to {
        class_literal(from)
    } else {
        format!("{}-{}", class_literal(from), class_literal(to))
    }
}

fn problematic_range_issue(range: &Range, materialize_limit: u32) -> Option<Issue> {
    let offending = offending_chars(range, materialize_limit);
    if offending.is_empty() {
        return None;
    }

    let listed = offending
        .iter()
        .map(|&c| format!("'{}'", class_literal(c)))
        .collect::<Vec<_>>()
        .join(", ");

    Some(Issue::error(
        IssueKind::ProblematicRange,
        format!("Range '{}' silently includes unintended characters: {}", range, listed),
        range.span(),
        split_suggestion(range),
    ))
}

fn invalid_range_issue(range: &Range, prev: &Token<'_>, next: &Token<'_>) -> Issue {
    Issue::error(
        IssueKind::InvalidRange,
        format!(
            "Range '{}' is out of order: U+{:04X} sorts after U+{:04X}",
            range,
            range.start_code(),
            range.end_code()
        ),
        range.span(),
        Some(format!("[{}-{}]", next.source_text, prev.source_text)),
    )
}

fn unescaped_dash_issue(dash: &Token<'_>, prev: &Token<'_>, next: &Token<'_>) -> Issue {
    Issue::error(
        IssueKind::UnescapedDash,
        format!(
            "Unescaped '-' between '{}' and '{}' is ambiguous and may be read as a range",
            prev.source_text, next.source_text
        ),
        dash.span(),
        Some(DASH_FIX.to_string()),
    )
}
