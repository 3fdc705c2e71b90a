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


//! Core pipeline tests
//!
//! Contains test suites for each analysis stage:
//! - Normaliser tests (delimiters, flags, offsets)
//! - Extractor tests (class boundaries, escapes, unterminated input)
//! - Tokenizer tests (escape decoding, partition invariant)
//! - Range tests (dash classification, inverted and problematic ranges)
//! - Overlap tests (partial overlap, containment policy)
