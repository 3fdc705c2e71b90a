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

//! src/core/types.rs
//!
//! Core type definitions for character-class analysis
//!
//! This module defines the values passed between pipeline stages:
//! - `Token`: One atomic unit of a class body (raw or escaped)
//! - `Range`: A `start-end` pair built from three consecutive tokens
//! - `Issue`: A single finding with kind, severity, span and optional fix
//! - `Span`: Byte offsets into the caller's original pattern string
//!
//! Everything here is an immutable value built fresh for each call.
//! `Issue` and its parts serialise to the JSON shape consumed by lint
//! tooling and editor diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte span `[start, end)` into the original input string
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One atomic unit inside a class body
///
/// `source_text` borrows from the pattern, so concatenating the tokens
/// of a class rebuilds its body exactly. `decoded_char` is `None` for a
/// trailing lone backslash and for `\uHHHH` escapes naming a surrogate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub source_text: &'a str,
    pub start_offset: usize,
    pub end_offset: usize,
    pub decoded_char: Option<char>,
    pub is_escaped: bool,
}

impl Token<'_> {
    /// True for a bare `-`, the only token that can act as a range operator
    pub fn is_unescaped_dash(&self) -> bool {
        !self.is_escaped && self.source_text == "-"
    }

    pub fn span(&self) -> Span {
        Span::new(self.start_offset, self.end_offset)
    }
}

/// A `start-end` range inside a character class
///
/// Offsets cover the whole `prev - next` token triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Range {
    pub start_char: char,
    pub end_char: char,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Set when either endpoint was written as an escape sequence
    pub is_escaped: bool,
}

impl Range {
    /// Builds a range from the tokens on either side of a dash
    ///
    /// Returns `None` when an endpoint has no decodable character.
    pub fn from_tokens(prev: &Token<'_>, next: &Token<'_>) -> Option<Self> {
        Some(Self {
            start_char: prev.decoded_char?,
            end_char: next.decoded_char?,
            start_offset: prev.start_offset,
            end_offset: next.end_offset,
            is_escaped: prev.is_escaped || next.is_escaped,
        })
    }

    pub fn start_code(&self) -> u32 {
        self.start_char as u32
    }

    pub fn end_code(&self) -> u32 {
        self.end_char as u32
    }

    /// Start code point sorts after the end code point
    pub fn is_inverted(&self) -> bool {
        self.start_code() > self.end_code()
    }

    /// Number of code points covered, zero for inverted ranges
    pub fn code_point_count(&self) -> u32 {
        if self.is_inverted() {
            0
        } else {
            self.end_code() - self.start_code() + 1
        }
    }

    /// Code-point spans share at least one character
    pub fn intersects(&self, other: &Range) -> bool {
        self.start_char <= other.end_char && other.start_char <= self.end_char
    }

    /// `other` lies entirely within `self`
    pub fn contains(&self, other: &Range) -> bool {
        self.start_char <= other.start_char && other.end_char <= self.end_char
    }

    pub fn span(&self) -> Span {
        Span::new(self.start_offset, self.end_offset)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", class_literal(self.start_char), class_literal(self.end_char))
    }
}

/// Issue severity
///
/// Only `Error` is produced today. `Warning` is reserved for stylistic
/// checks and is already part of the serialised format.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Kind of character-class problem
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum IssueKind {
    /// Valid range that silently spans punctuation (`A-z`)
    ProblematicRange,
    /// Bare `-` between two tokens that cannot form a sensible range
    UnescapedDash,
    /// Range whose start sorts after its end (`z-a`)
    InvalidRange,
    /// Two ranges that partially overlap (`a-c` and `b-d`)
    OverlappingRange,
}

impl IssueKind {
    /// Generic advice shown once per kind in a validation result
    pub fn tip(&self) -> &'static str {
        match self {
            IssueKind::ProblematicRange => {
                "Ranges between letter cases or digits and letters include punctuation; \
                 split them into separate ranges such as A-Za-z"
            }
            IssueKind::UnescapedDash => {
                "Escape a literal dash as \\- or place it first or last in the class"
            }
            IssueKind::InvalidRange => {
                "Range endpoints must be in ascending code point order"
            }
            IssueKind::OverlappingRange => {
                "Merge overlapping ranges into a single range to keep the class readable"
            }
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::ProblematicRange => write!(f, "problematic-range"),
            IssueKind::UnescapedDash => write!(f, "unescaped-dash"),
            IssueKind::InvalidRange => write!(f, "invalid-range"),
            IssueKind::OverlappingRange => write!(f, "overlapping-range"),
        }
    }
}

/// A single finding inside a character class
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// Human-readable description of the problem
    pub message: String,
    pub span: Span,
    pub severity: Severity,
    /// Concrete replacement text, when one can be derived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl Issue {
    /// Creates an Error-level issue
    pub fn error(kind: IssueKind, message: String, span: Span, suggested_fix: Option<String>) -> Self {
        Self {
            kind,
            message,
            span,
            severity: Severity::Error,
            suggested_fix,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] at {}: {}", self.severity, self.kind, self.span, self.message)?;
        if let Some(fix) = &self.suggested_fix {
            write!(f, " (fix: {})", fix)?;
        }
        Ok(())
    }
}

/// Renders a character for use inside a message or suggested class
///
/// Control characters become `\uHHHH` so messages stay printable.
pub fn class_literal(c: char) -> String {
    if c.is_control() {
        format!("\\u{:04X}", c as u32)
    } else {
        c.to_string()
    }
}
