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


//! src/core/extractor.rs
//!
//! Character-class extractor (pipeline stage 2)
//!
//! A single left-to-right scan with one piece of state: the offset of
//! the `[` that opened the current class, if any. A backslash always
//! consumes the character after it, so `\]` never closes a class and
//! `\[` never opens one. Unterminated classes are dropped, never
//! reported as partial results.

use tracing::trace;

/// One `[...]` span found in a pattern
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharacterClass<'a> {
    /// Body between the brackets, escapes left intact
    pub content: &'a str,
    /// Absolute offset of the opening `[`
    pub start_offset: usize,
    /// Absolute offset just past the closing `]`
    pub end_offset: usize,
}

impl CharacterClass<'_> {
    /// Absolute offset of the first byte of `content`
    pub fn content_offset(&self) -> usize {
        self.start_offset + 1
    }
}

/// Finds every terminated character class in `pattern`
///
/// `base_offset` is added to every reported offset so spans stay
/// relative to the caller's original string.
pub fn extract_classes(pattern: &str, base_offset: usize) -> Vec<CharacterClass<'_>> {
    let mut classes = Vec::new();
    let mut open: Option<usize> = None;
    let mut chars = pattern.char_indices();

    while let Some((index, c)) = chars.next() {
        match (c, open) {
            ('\\', _) => {
                chars.next();
            }
            ('[', None) => open = Some(index),
            (']', Some(start)) => {
                classes.push(CharacterClass {
                    content: &pattern[start + 1..index],
                    start_offset: base_offset + start,
                    end_offset: base_offset + index + 1,
                });
                open = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        trace!(offset = base_offset + start, "dropping unterminated character class");
    }

    classes
}
