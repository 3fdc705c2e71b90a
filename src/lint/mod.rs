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


//! Validation front end
//!
//! Wraps the `core` pipeline into the two public entry points:
//! - `validate`: one pattern, one `ValidationResult`
//! - `validate_many`: a batch, analysed in parallel, keyed by pattern
//!
//! Also hosts the ambient pieces around them: analyzer options,
//! pattern-list loading, JSON output and the error type for those
//! fallible edges.

pub mod batch;
pub mod error;
pub mod input;
pub mod options;
pub mod output;
pub mod validator;

pub use batch::validate_many;
pub use error::LintError;
pub use options::AnalyzerOptions;
pub use validator::{ClassValidator, ValidationResult};

/// Validates one pattern with default options
///
/// # Example
/// ```
/// use charclass_lint::lint::validate;
///
/// assert!(validate("[a-zA-Z0-9._-]").is_valid);
/// assert!(!validate("[a-zA-z]").is_valid);
/// ```
pub fn validate(pattern: &str) -> ValidationResult {
    ClassValidator::new().validate(pattern)
}

#[cfg(test)]
mod tests;
