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


use crate::core::{Issue, IssueKind, Span};
use crate::lint::{
    output::{batch_to_json, result_to_json, BatchReport},
    validate, validate_many, ValidationResult,
};
use serde_json::Value;

#[test]
fn test_result_json_shape() {
    let json: Value = serde_json::to_value(validate("[z-a]")).unwrap();

    assert_eq!(json["is_valid"], Value::Bool(false));
    assert_eq!(json["issues"][0]["kind"], "InvalidRange");
    assert_eq!(json["issues"][0]["severity"], "Error");
    assert_eq!(json["issues"][0]["span"]["start"], 1);
    assert_eq!(json["issues"][0]["span"]["end"], 4);
    assert_eq!(json["issues"][0]["suggested_fix"], "[a-z]");
    assert!(json["suggestions"].as_array().is_some_and(|tips| tips.len() == 1));
}

#[test]
fn test_missing_fix_is_omitted() {
    let issue = Issue::error(IssueKind::UnescapedDash, "dash".to_string(), Span::new(0, 1), None);
    let json = serde_json::to_value(&issue).unwrap();
    assert!(json.get("suggested_fix").is_none());
}

#[test]
fn test_result_survives_json() {
    let result = validate("[a-zA-z,-_]");
    let text = result_to_json(&result).unwrap();
    let parsed: ValidationResult = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_batch_json_keyed_by_pattern() {
    let results = validate_many(["[z-a]", "[a-z]"]);
    let json: Value = serde_json::from_str(&batch_to_json(&results).unwrap()).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["[a-z]"]["is_valid"], Value::Bool(true));
    assert_eq!(object["[z-a]"]["is_valid"], Value::Bool(false));
}

#[test]
fn test_batch_report_all_valid() {
    assert!(BatchReport::new(&validate_many(["[a-z]", "[0-9]"])).all_valid());
    assert!(!BatchReport::new(&validate_many(["[a-z]", "[9-0]"])).all_valid());
}
