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


//! Error type for pattern-file input and JSON output

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the analyzer (file input, JSON output).
///
/// Analysis itself never fails; malformed patterns become issues.
#[derive(Debug, Error)]
pub enum LintError {
    /// Pattern list file does not exist.
    #[error("Pattern file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Results could not be rendered as JSON.
    #[error("Failed to serialise results: {0}")]
    Serialization(#[from] serde_json::Error),
}
