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


//! src/core/mod.rs
//!
//! Character-class analysis pipeline
//!
//! Stages, leaves first:
//! - `normalizer`: Strips optional `/pattern/flags` delimiters
//! - `extractor`: Finds every `[...]` span, escape-aware
//! - `tokenizer`: Splits a class body into raw and escaped tokens
//! - `ranges`: Classifies dashes and validates ranges
//! - `overlap`: Finds partially overlapping ranges within a class
//!
//! Every stage is a pure function over borrowed input. Aggregation into
//! a `ValidationResult` lives in the `lint` module.

pub mod extractor;
pub mod normalizer;
pub mod overlap;
pub mod ranges;
pub mod tokenizer;
pub mod types;

pub use extractor::{extract_classes, CharacterClass};
pub use normalizer::{normalize_pattern, NormalizedPattern};
pub use overlap::find_overlaps;
pub use ranges::{analyze_ranges, RangeAnalysis};
pub use tokenizer::tokenize_class;
pub use types::*;

#[cfg(test)]
mod tests;
