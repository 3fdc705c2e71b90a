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


//! Batch validation
//!
//! Patterns share no state, so each one is an independent rayon task.
//! Completion order is irrelevant; only the keys of the result map
//! matter. Duplicate inputs are analysed once.

use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use crate::lint::validator::{ClassValidator, ValidationResult};

impl ClassValidator {
    /// Validates many patterns in parallel
    ///
    /// # Example
    ///
    /// ```
    /// use charclass_lint::lint::validator::ClassValidator;
    ///
    /// let results = ClassValidator::new().validate_many(["[a-zA-z]", "[a-zA-Z]"]);
    /// assert_eq!(results.len(), 2);
    /// assert!(!results["[a-zA-z]"].is_valid);
    /// assert!(results["[a-zA-Z]"].is_valid);
    /// ```
    pub fn validate_many<I, S>(&self, patterns: I) -> HashMap<String, ValidationResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        patterns.sort_unstable();
        patterns.dedup();

        debug!(count = patterns.len(), "validating pattern batch");

        patterns
            .into_par_iter()
            .map(|pattern| {
                let result = self.validate(&pattern);
                (pattern, result)
            })
            .collect()
    }
}

/// Validates many patterns with default options
pub fn validate_many<I, S>(patterns: I) -> HashMap<String, ValidationResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ClassValidator::new().validate_many(patterns)
}
