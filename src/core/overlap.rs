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


//! src/core/overlap.rs
//!
//! Pairwise overlap detection (pipeline stage 5)
//!
//! Two ranges overlap when their code-point spans intersect. By default
//! a range wholly inside another is not reported; only partial overlap
//! is. Escaped and inverted ranges never take part.
//!
//! # Performance
//! O(n²) over the ranges of a single class. Real classes hold a handful
//! of ranges, so the quadratic pass is negligible.

use crate::core::types::{class_literal, Issue, IssueKind, Range, Span};

/// Reports one issue per overlapping pair of ranges
///
/// With `flag_containment` set, a range nested inside another is also
/// reported.
pub fn find_overlaps(ranges: &[Range], flag_containment: bool) -> Vec<Issue> {
    let candidates: Vec<&Range> = ranges
        .iter()
        .filter(|range| !range.is_escaped && !range.is_inverted())
        .collect();

    let mut issues = Vec::new();
    for (index, first) in candidates.iter().enumerate() {
        for second in &candidates[index + 1..] {
            if !first.intersects(second) {
                continue;
            }
            if !flag_containment && (first.contains(second) || second.contains(first)) {
                continue;
            }
            issues.push(overlap_issue(first, second));
        }
    }

    issues
}

/// Smallest single range covering both inputs
pub fn union_range(first: &Range, second: &Range) -> String {
    format!(
        "{}-{}",
        class_literal(first.start_char.min(second.start_char)),
        class_literal(first.end_char.max(second.end_char))
    )
}

fn overlap_issue(first: &Range, second: &Range) -> Issue {
    let shared_start = first.start_char.max(second.start_char);
    let shared_end = first.end_char.min(second.end_char);

    Issue::error(
        IssueKind::OverlappingRange,
        format!(
            "Ranges '{}' and '{}' overlap on '{}'-'{}'",
            first,
            second,
            class_literal(shared_start),
            class_literal(shared_end)
        ),
        Span::new(
            first.start_offset.min(second.start_offset),
            first.end_offset.max(second.end_offset),
        ),
        Some(union_range(first, second)),
    )
}
