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


//! src/core/tokenizer.rs
//!
//! Class content tokenizer (pipeline stage 3)
//!
//! Splits a class body into atoms, longest match first:
//! 1. `\xHH` and `\uHHHH` hex escapes
//! 2. `\` followed by any other character (`\n`, `\-`, `\\`, ...)
//! 3. A trailing lone `\`
//! 4. Any other single character
//!
//! # Architecture
//! Each atom is a nom parser; `consumed` hands back the exact source
//! slice alongside the decoded character, so tokens partition the body
//! with no gaps or overlaps.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{anychar, char},
    combinator::{consumed, map, value},
    sequence::preceded,
    IResult, Parser,
};
use tracing::trace;

use crate::core::types::Token;

/// Tokenizes one class body
///
/// `base_offset` is the absolute offset of the body's first byte.
///
/// # Example
/// ```
/// use charclass_lint::core::tokenizer::tokenize_class;
///
/// let tokens = tokenize_class(r"a\x41-", 1);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].source_text, r"\x41");
/// assert_eq!(tokens[1].decoded_char, Some('A'));
/// assert_eq!(tokens[2].start_offset, 6);
/// ```
pub fn tokenize_class(content: &str, base_offset: usize) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let Ok((remaining, (source_text, decoded_char))) = class_atom(rest) else {
            break;
        };
        let start = base_offset + (content.len() - rest.len());

        tokens.push(Token {
            source_text,
            start_offset: start,
            end_offset: start + source_text.len(),
            decoded_char,
            is_escaped: source_text.starts_with('\\'),
        });
        rest = remaining;
    }

    trace!(count = tokens.len(), "tokenized class body");
    tokens
}

/// Parses one atom, returning its source slice and decoded character
pub fn class_atom(input: &str) -> IResult<&str, (&str, Option<char>)> {
    consumed(alt((hex_escape, simple_escape, lone_backslash, literal_char))).parse(input)
}

/// `\xHH` or `\uHHHH`
///
/// Surrogate code points have no `char` and decode to `None`.
pub fn hex_escape(input: &str) -> IResult<&str, Option<char>> {
    let (input, width) = alt((value(2usize, tag("\\x")), value(4usize, tag("\\u")))).parse(input)?;
    let (input, digits) = take_while_m_n(width, width, |c: char| c.is_ascii_hexdigit()).parse(input)?;

    let decoded = u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32);

    Ok((input, decoded))
}

/// `\` followed by any single character
pub fn simple_escape(input: &str) -> IResult<&str, Option<char>> {
    preceded(char('\\'), anychar)
        .map(|c| Some(decode_escape(c)))
        .parse(input)
}

/// A backslash with nothing after it
fn lone_backslash(input: &str) -> IResult<&str, Option<char>> {
    value(None, char('\\')).parse(input)
}

fn literal_char(input: &str) -> IResult<&str, Option<char>> {
    map(anychar, Some).parse(input)
}

/// Maps the character after a backslash to the character it denotes
///
/// Unknown escapes denote the escaped character itself, so `\-` is `-`
/// and `\\` is `\`.
pub fn decode_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'v' => '\u{0B}',
        '0' => '\0',
        other => other,
    }
}
