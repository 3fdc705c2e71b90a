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


//! Analyzer configuration
//!
//! Both knobs have defaults matching the documented behaviour, so most
//! callers never build one explicitly.

use serde::{Deserialize, Serialize};

/// Spans up to this many code points are checked character by character
pub const DEFAULT_MATERIALIZE_LIMIT: u32 = 4096;

/// Tunable analyzer settings
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    /// Widest range walked character by character before switching to
    /// arithmetic watch-list checks
    pub materialize_limit: u32,
    /// Also report a range fully contained in another as overlapping
    pub flag_containment: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            materialize_limit: DEFAULT_MATERIALIZE_LIMIT,
            flag_containment: false,
        }
    }
}

impl AnalyzerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_materialize_limit(mut self, limit: u32) -> Self {
        self.materialize_limit = limit;
        self
    }

    pub fn with_flag_containment(mut self, flag: bool) -> Self {
        self.flag_containment = flag;
        self
    }
}
