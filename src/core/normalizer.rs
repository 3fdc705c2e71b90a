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


//! src/core/normalizer.rs
//!
//! Pattern normaliser (pipeline stage 1)
//!
//! Accepts either a bare pattern (`[a-z]+`) or a delimited literal
//! (`/[a-z]+/gi`) and returns the pattern body. Flags after the closing
//! delimiter are discarded. Input without a closing unescaped `/` is
//! passed through trimmed rather than rejected.

/// Pattern body plus its byte offset inside the caller's string
///
/// The offset lets later stages report spans against the original
/// input even after whitespace and delimiters were stripped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NormalizedPattern<'a> {
    pub body: &'a str,
    pub offset: usize,
}

/// Strips optional `/pattern/flags` delimiters
///
/// # Example
/// ```
/// use charclass_lint::core::normalizer::normalize_pattern;
///
/// let normalized = normalize_pattern("/[a-z]+/gi");
/// assert_eq!(normalized.body, "[a-z]+");
/// assert_eq!(normalized.offset, 1);
/// ```
pub fn normalize_pattern(raw: &str) -> NormalizedPattern<'_> {
    let trimmed = raw.trim();
    let leading = raw.len() - raw.trim_start().len();
    let passthrough = NormalizedPattern {
        body: trimmed,
        offset: leading,
    };

    if !trimmed.starts_with('/') {
        return passthrough;
    }

    // The opening delimiter at index 0 never counts as the closing one
    let closing = trimmed
        .char_indices()
        .rev()
        .filter(|&(index, c)| c == '/' && index > 0)
        .map(|(index, _)| index)
        .find(|&index| !is_escaped_at(trimmed, index));

    match closing {
        Some(end) => NormalizedPattern {
            body: &trimmed[1..end],
            offset: leading + 1,
        },
        None => passthrough,
    }
}

/// True if the byte at `index` is preceded by an odd run of backslashes
///
/// An `index` past the end is clamped to `text.len()`.
pub fn is_escaped_at(text: &str, index: usize) -> bool {
    text.as_bytes()[..index.min(text.len())]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count()
        % 2
        == 1
}
