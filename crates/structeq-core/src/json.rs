//! Comparison through JSON serialization
//!
//! Both operands are serialized with `serde_json` and the resulting trees are
//! walked with the same path and category rules as [`crate::compare`].
//! JSON has no separate mapping type, so `allow_extra_fields` applies to
//! every object here, and object keys are joined like record fields
//! (`counts.foo` where the deep comparator reports `counts[foo]`). Keys that
//! would read as a nested path, such as `item.50`, are bracketed instead.

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::compare::{CompareOptions, DiffCategory, Difference};
use crate::error::{CompareError, CompareResult};
use crate::path;

/// Serialize both values and compare the JSON trees
pub fn compare_serialized<T: Serialize + ?Sized>(
    expected: &T,
    actual: &T,
    options: &CompareOptions,
) -> CompareResult<Vec<Difference>> {
    let expected = serde_json::to_value(expected)
        .map_err(|source| CompareError::Serialize { side: "expected", source })?;
    let actual = serde_json::to_value(actual)
        .map_err(|source| CompareError::Serialize { side: "actual", source })?;

    let mut differences = Vec::new();
    compare_json("", &expected, &actual, options, &mut differences);
    if let Some(max) = options.max_differences {
        differences.truncate(max);
    }
    Ok(differences)
}

/// Compare two JSON trees, appending differences
pub fn compare_json(
    path: &str,
    expected: &JsonValue,
    actual: &JsonValue,
    options: &CompareOptions,
    differences: &mut Vec<Difference>,
) {
    if !path.is_empty() && options.ignore_fields.contains(path) {
        trace!(path, "ignoring field");
        return;
    }

    match (expected, actual) {
        (JsonValue::Object(expected_obj), JsonValue::Object(actual_obj)) => {
            for (key, expected_value) in expected_obj {
                let new_path = object_key(path, key);
                if options.ignore_fields.contains(&new_path) {
                    continue;
                }

                match actual_obj.get(key) {
                    Some(actual_value) => {
                        compare_json(&new_path, expected_value, actual_value, options, differences);
                    }
                    None => differences.push(Difference::missing(new_path, expected_value)),
                }
            }

            if !options.allow_extra_fields {
                for (key, actual_value) in actual_obj {
                    let new_path = object_key(path, key);
                    if !expected_obj.contains_key(key) && !options.ignore_fields.contains(&new_path) {
                        differences.push(Difference::extra(new_path, actual_value));
                    }
                }
            }
        }
        (JsonValue::Array(expected_arr), JsonValue::Array(actual_arr)) => {
            if expected_arr.len() != actual_arr.len() {
                differences.push(Difference::length(
                    path::length(path),
                    expected_arr.len(),
                    actual_arr.len(),
                ));
            }

            for (i, (expected_elem, actual_elem)) in expected_arr.iter().zip(actual_arr).enumerate() {
                compare_json(&path::index(path, i), expected_elem, actual_elem, options, differences);
            }
        }
        _ => {
            if json_kind(expected) != json_kind(actual) {
                differences.push(Difference::new(
                    DiffCategory::Kind,
                    path,
                    format!("{} {}", json_kind(expected), expected),
                    format!("{} {}", json_kind(actual), actual),
                ));
            } else if expected != actual {
                differences.push(Difference::value(path, expected, actual));
            }
        }
    }
}

fn object_key(parent: &str, key: &str) -> String {
    if key.contains(['.', '[', ']', '#']) {
        path::key(parent, key)
    } else {
        path::field(parent, key)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_object_difference() {
        let expected = json!({"the_string": "some string", "complex_type": {"sub_string": "sub string"}});
        let actual = json!({"the_string": "some string", "complex_type": {"sub_string": "other"}});

        let diffs = compare_serialized(&expected, &actual, &CompareOptions::new()).unwrap();
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].path, "complex_type.sub_string");
        assert_eq!(diffs[0].expected, r#""sub string""#);
    }

    #[test]
    fn test_object_key_order_does_not_matter() {
        let expected = json!({"foo": 10, "bar": 20});
        let actual = json!({"bar": 20, "foo": 10});
        assert!(compare_serialized(&expected, &actual, &CompareOptions::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_array_order_matters() {
        let diffs = compare_serialized(&json!(["foo", "bar"]), &json!(["bar", "foo"]), &CompareOptions::new())
            .unwrap();
        let paths: Vec<&str> = diffs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["[0]", "[1]"]);
    }

    #[test]
    fn test_extra_field_tolerance() {
        let expected = json!({"the_string": "some string"});
        let actual = json!({"id": "someid", "the_string": "some string"});

        let diffs = compare_serialized(&expected, &actual, &CompareOptions::new()).unwrap();
        assert_eq!(diffs[0].category, DiffCategory::Extra);
        assert!(compare_serialized(&expected, &actual, &CompareOptions::new().with_extra_fields())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_dotted_keys_are_bracketed() {
        let expected = json!({"item.50": 50, "foo": 10});
        let actual = json!({"item.50": 51, "foo": 11});

        let diffs = compare_serialized(&expected, &actual, &CompareOptions::new()).unwrap();
        let paths: Vec<&str> = diffs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["foo", "[item.50]"]);
    }

    #[test]
    fn test_array_length_marker() {
        let expected = json!({"length": 2, "items": [1, 2]});
        let actual = json!({"length": 3, "items": [1]});

        let diffs = compare_serialized(&expected, &actual, &CompareOptions::new()).unwrap();
        let paths: Vec<&str> = diffs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["items#length", "length"]);
    }

    #[test]
    fn test_kind_mismatch() {
        let diffs = compare_serialized(&json!({"a": 1}), &json!({"a": "1"}), &CompareOptions::new()).unwrap();
        assert_eq!(diffs[0].category, DiffCategory::Kind);
        assert_eq!(diffs[0].expected, "number 1");
    }
}
