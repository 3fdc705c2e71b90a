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


//! Pattern list loading
//!
//! A pattern list is a plain text file with one pattern per line.
//! Blank lines are skipped, as are comment lines: a `#` (after leading
//! whitespace) that is alone or followed by whitespace. A pattern such as
//! `#[a-z]` is therefore kept. Patterns are kept exactly as written so
//! issue spans line up with the file contents.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::lint::error::LintError;

/// Reads and parses a pattern list file
///
/// A leading `~` in the path expands to the home directory.
pub fn load_patterns(path: &Path) -> Result<Vec<String>, LintError> {
    let raw = path
        .to_str()
        .ok_or_else(|| LintError::InvalidPath(path.to_path_buf()))?;
    let expanded = PathBuf::from(shellexpand::tilde(raw).as_ref());

    if !expanded.exists() {
        return Err(LintError::NotFound(expanded));
    }

    let content = fs::read_to_string(&expanded)?;
    let patterns = parse_pattern_list(&content);

    debug!(path = %expanded.display(), count = patterns.len(), "loaded pattern list");
    Ok(patterns)
}

/// Extracts patterns from pattern list content
pub fn parse_pattern_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !is_comment(trimmed)
        })
        .map(str::to_string)
        .collect()
}

/// `#` alone or followed by whitespace starts a comment
fn is_comment(trimmed: &str) -> bool {
    trimmed
        .strip_prefix('#')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}
