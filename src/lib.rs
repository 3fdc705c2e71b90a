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


//! Character-Class Lint
//!
//! A static analyzer for regular-expression character classes. It finds
//! bracket expressions that are syntactically valid but almost certainly
//! wrong, and reports them with byte spans and fix suggestions.
//!
//! # Features
//!
//! - **Problematic ranges:** `[A-z]` silently matches `[ \ ] ^ _` and a backtick
//! - **Unescaped dashes:** `[.,-_]` reads as a range nobody intended
//! - **Invalid ranges:** `[z-a]` has its endpoints reversed
//! - **Overlapping ranges:** `[a-cb-d]` should be `[a-d]`
//! - **Batch mode:** Many patterns analysed in parallel with rayon
//! - **JSON output:** Results serialise straight into lint or editor tooling
//!
//! # Architecture
//!
//! - **`core`:** Pure pipeline stages (normaliser, extractor, tokenizer,
//!   range/dash analysis, overlap detection) and their value types
//! - **`lint`:** Result aggregation, batch API, options, file input, JSON
//!
//! The analyzer never executes a pattern and never fails: unterminated
//! classes and stray brackets are ignored, everything else becomes an
//! `Issue`.
//!
//! # Examples
//!
//! ## Validating a pattern
//!
//! ```
//! use charclass_lint::{validate, IssueKind};
//!
//! let result = validate("[a-zA-z]");
//! assert!(!result.is_valid);
//! assert_eq!(result.count(IssueKind::ProblematicRange), 1);
//!
//! for issue in &result.issues {
//!     println!("{}", issue);
//! }
//! ```
//!
//! ## Validating a batch
//!
//! ```
//! use charclass_lint::validate_many;
//!
//! let results = validate_many(["[a-zA-z]", "[a-zA-Z]"]);
//! assert!(!results["[a-zA-z]"].is_valid);
//! assert!(results["[a-zA-Z]"].is_valid);
//! ```

pub mod core;
pub mod lint;

// Re-export commonly used types for convenience
pub use crate::core::{Issue, IssueKind, Severity, Span};
pub use crate::lint::{validate, validate_many, AnalyzerOptions, ClassValidator, LintError, ValidationResult};
