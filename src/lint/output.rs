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


//! JSON rendering for lint tooling and editor diagnostics

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::lint::error::LintError;
use crate::lint::validator::ValidationResult;

/// Wrapper giving batch results a stable, sorted key order
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BatchReport<'a> {
    results: BTreeMap<&'a str, &'a ValidationResult>,
}

impl<'a> BatchReport<'a> {
    pub fn new(results: &'a HashMap<String, ValidationResult>) -> Self {
        Self {
            results: results
                .iter()
                .map(|(pattern, result)| (pattern.as_str(), result))
                .collect(),
        }
    }

    /// True when every pattern in the batch is valid
    pub fn all_valid(&self) -> bool {
        self.results.values().all(|result| result.is_valid)
    }
}

/// Pretty-printed JSON for a single result
pub fn result_to_json(result: &ValidationResult) -> Result<String, LintError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Pretty-printed JSON object keyed by pattern, keys sorted
pub fn batch_to_json(results: &HashMap<String, ValidationResult>) -> Result<String, LintError> {
    Ok(serde_json::to_string_pretty(&BatchReport::new(results))?)
}
