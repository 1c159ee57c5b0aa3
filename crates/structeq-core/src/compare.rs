//! Deep structural comparison with path-based diagnostics

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::path;
use crate::value::{Structural, Value};

/// Result of comparing two values
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub label: String,
    pub passed: bool,
    pub differences: Vec<Difference>,
}

/// A specific difference between two values
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub category: DiffCategory,
    pub path: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffCategory {
    /// Same kind, different value
    Value,
    /// Different kinds at the same path
    Kind,
    /// Sequences of different length
    Length,
    /// Present in expected, absent in actual
    Missing,
    /// Absent in expected, present in actual
    Extra,
}

impl fmt::Display for DiffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so callers can right-align the category column
        match self {
            DiffCategory::Value => f.pad("VALUE"),
            DiffCategory::Kind => f.pad("KIND"),
            DiffCategory::Length => f.pad("LENGTH"),
            DiffCategory::Missing => f.pad("MISSING"),
            DiffCategory::Extra => f.pad("EXTRA"),
        }
    }
}

impl Difference {
    pub fn new(
        category: DiffCategory,
        path: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self {
            category,
            path: path.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// A plain value mismatch
    pub fn value(path: impl Into<String>, expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::new(DiffCategory::Value, path, expected, actual)
    }

    pub fn missing(path: impl Into<String>, expected: impl fmt::Display) -> Self {
        Self::new(DiffCategory::Missing, path, expected, "(missing)")
    }

    pub fn extra(path: impl Into<String>, actual: impl fmt::Display) -> Self {
        Self::new(DiffCategory::Extra, path, "(not present)", actual)
    }

    pub fn length(path: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(DiffCategory::Length, path, expected, actual)
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>7}] {} : expected={} actual={}",
            self.category,
            path::display(&self.path),
            self.expected,
            self.actual
        )
    }
}

/// Options for comparing values
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Paths to skip entirely (e.g., volatile identifiers)
    pub ignore_fields: HashSet<String>,
    /// Whether record fields present only in the actual value are tolerated
    pub allow_extra_fields: bool,
    /// Stop after this many differences
    pub max_differences: Option<usize>,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that stop at the first difference
    pub fn first_only() -> Self {
        Self::default().with_max_differences(1)
    }

    pub fn ignore_field(mut self, field: &str) -> Self {
        self.ignore_fields.insert(field.to_string());
        self
    }

    pub fn with_extra_fields(mut self) -> Self {
        self.allow_extra_fields = true;
        self
    }

    pub fn with_max_differences(mut self, max: usize) -> Self {
        self.max_differences = Some(max);
        self
    }

    /// Whether `path`, or a field or entry it sits under, is ignored
    pub fn is_ignored(&self, path: &str) -> bool {
        if path.is_empty() || self.ignore_fields.is_empty() {
            return false;
        }
        self.ignore_fields.contains(path)
            || path
                .match_indices(['.', '[', '#'])
                .any(|(at, _)| at > 0 && self.ignore_fields.contains(&path[..at]))
    }
}

/// Structural equality of two values
pub fn equal<T: Structural + ?Sized>(expected: &T, actual: &T) -> bool {
    first_difference(expected, actual).is_none()
}

/// The first point where two values diverge, if any
pub fn first_difference<T: Structural + ?Sized>(expected: &T, actual: &T) -> Option<Difference> {
    first_difference_values(&expected.to_value(), &actual.to_value())
}

pub(crate) fn first_difference_values(expected: &Value, actual: &Value) -> Option<Difference> {
    compare(expected, actual, &CompareOptions::first_only())
        .into_iter()
        .next()
}

/// Compare two typed values and wrap the outcome in a labelled result
pub fn compare_structural<T: Structural + ?Sized>(
    label: &str,
    expected: &T,
    actual: &T,
    options: &CompareOptions,
) -> ComparisonResult {
    let differences = compare(&expected.to_value(), &actual.to_value(), options);
    debug!(label, differences = differences.len(), "structural comparison finished");
    ComparisonResult::new(label, differences)
}

/// Compare two values, returning every difference found
///
/// An empty result means the values are structurally equal.
pub fn compare(expected: &Value, actual: &Value, options: &CompareOptions) -> Vec<Difference> {
    let mut walker = Walker {
        options,
        differences: Vec::new(),
    };
    walker.walk("", expected, actual);
    walker.differences
}

struct Walker<'o> {
    options: &'o CompareOptions,
    differences: Vec<Difference>,
}

impl Walker<'_> {
    fn is_full(&self) -> bool {
        self.options
            .max_differences
            .is_some_and(|max| self.differences.len() >= max)
    }

    fn push(&mut self, difference: Difference) {
        if !self.is_full() {
            self.differences.push(difference);
        }
    }

    fn walk(&mut self, path: &str, expected: &Value, actual: &Value) {
        if self.is_full() || self.options.is_ignored(path) {
            return;
        }

        match (expected, actual) {
            (Value::Record(expected), Value::Record(actual)) => {
                self.walk_record(path, expected, actual);
            }
            (Value::Mapping(expected), Value::Mapping(actual)) => {
                self.walk_mapping(path, expected, actual);
            }
            (Value::Sequence(expected), Value::Sequence(actual)) => {
                self.walk_sequence(path, expected, actual);
            }
            _ if expected.kind() != actual.kind() => {
                self.push(Difference::new(
                    DiffCategory::Kind,
                    path,
                    format!("{} {}", expected.kind(), expected),
                    format!("{} {}", actual.kind(), actual),
                ));
            }
            _ => {
                if !expected.primitive_eq(actual) {
                    self.push(Difference::value(path, expected, actual));
                }
            }
        }
    }

    fn walk_record(
        &mut self,
        path: &str,
        expected: &IndexMap<String, Value>,
        actual: &IndexMap<String, Value>,
    ) {
        for (name, expected_value) in expected {
            let field_path = path::field(path, name);
            if self.options.is_ignored(&field_path) {
                continue;
            }

            match actual.get(name) {
                Some(actual_value) => self.walk(&field_path, expected_value, actual_value),
                None => self.push(Difference::missing(field_path, expected_value)),
            }
        }

        if !self.options.allow_extra_fields {
            for (name, actual_value) in actual {
                let field_path = path::field(path, name);
                if !expected.contains_key(name) && !self.options.is_ignored(&field_path) {
                    self.push(Difference::extra(field_path, actual_value));
                }
            }
        }
    }

    fn walk_mapping(
        &mut self,
        path: &str,
        expected: &BTreeMap<String, Value>,
        actual: &BTreeMap<String, Value>,
    ) {
        for (key, expected_value) in expected {
            let entry_path = path::key(path, key);
            if self.options.is_ignored(&entry_path) {
                continue;
            }

            match actual.get(key) {
                Some(actual_value) => self.walk(&entry_path, expected_value, actual_value),
                None => self.push(Difference::missing(entry_path, expected_value)),
            }
        }

        // Mapping key sets must match exactly, extra-field tolerance only
        // applies to records.
        for (key, actual_value) in actual {
            let entry_path = path::key(path, key);
            if !expected.contains_key(key) && !self.options.is_ignored(&entry_path) {
                self.push(Difference::extra(entry_path, actual_value));
            }
        }
    }

    fn walk_sequence(&mut self, path: &str, expected: &[Value], actual: &[Value]) {
        if expected.len() != actual.len() {
            self.push(Difference::length(
                path::length(path),
                expected.len(),
                actual.len(),
            ));
        }

        for (i, (expected_item, actual_item)) in expected.iter().zip(actual).enumerate() {
            self.walk(&path::index(path, i), expected_item, actual_item);
        }
    }
}

impl ComparisonResult {
    pub fn new(label: impl Into<String>, differences: Vec<Difference>) -> Self {
        Self {
            label: label.into(),
            passed: differences.is_empty(),
            differences,
        }
    }

    /// Print a summary of the comparison
    pub fn print_summary(&self) {
        if self.passed {
            println!("✅ {} - PASS", self.label);
        } else {
            println!(
                "❌ {} - FAIL ({} differences)",
                self.label,
                self.differences.len()
            );
            for diff in &self.differences {
                println!("   {}", diff);
            }
        }
    }

    /// Paths of every reported difference, in report order
    pub fn paths(&self) -> Vec<&str> {
        self.differences.iter().map(|d| d.path.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::time::Duration;

    fn sub_model(sub_string: &str, sub_float: f64) -> Value {
        Value::record()
            .field("sub_string", sub_string)
            .field("sub_float", &sub_float)
            .build()
    }

    fn request(the_string: &str, the_int: i64, complex: Value) -> Value {
        Value::record()
            .field("the_string", the_string)
            .field("the_int", &the_int)
            .field("complex_type", &complex)
            .build()
    }

    #[test]
    fn test_identical_records_are_equal() {
        let a = request("some string", 123, sub_model("sub string", 123.456));
        let b = a.clone();
        assert!(compare(&a, &b, &CompareOptions::new()).is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_field_difference_reports_path() {
        let a = request("some string", 123, sub_model("sub string", 123.456));
        let b = request("some string", 128, sub_model("sub string", 123.456));

        let diffs = compare(&a, &b, &CompareOptions::new());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].category, DiffCategory::Value);
        assert_eq!(diffs[0].path, "the_int");
        assert_eq!(diffs[0].expected, "123");
        assert_eq!(diffs[0].actual, "128");
    }

    #[test]
    fn test_nested_difference_reports_nested_path() {
        let a = request("some string", 123, sub_model("sub string", 123.456));
        let b = request("some string", 123, sub_model("sub string - not", 123.456));

        let diff = first_difference_values(&a, &b).unwrap();
        assert_eq!(diff.path, "complex_type.sub_string");
        assert_eq!(diff.expected, r#""sub string""#);
    }

    #[test]
    fn test_mapping_equality_is_order_independent() {
        let mut first = HashMap::new();
        first.insert("a".to_string(), 1i64);
        first.insert("b".to_string(), 2i64);

        let mut second = HashMap::new();
        second.insert("b".to_string(), 2i64);
        second.insert("a".to_string(), 1i64);

        assert!(equal(&first, &second));
    }

    #[test]
    fn test_mapping_key_sets_must_match() {
        let mut first = BTreeMap::new();
        first.insert("foo".to_string(), 10i64);
        let mut second = first.clone();
        second.insert("bar".to_string(), 20i64);

        let diffs = compare(&first.to_value(), &second.to_value(), &CompareOptions::new().with_extra_fields());
        assert_eq!(diffs, vec![Difference::extra("[bar]", "20")]);

        let diffs = compare(&second.to_value(), &first.to_value(), &CompareOptions::new());
        assert_eq!(diffs, vec![Difference::missing("[bar]", "20")]);
    }

    #[test]
    fn test_sequence_equality_is_order_dependent() {
        assert!(!equal(&vec![1i64, 2], &vec![2i64, 1]));
        assert!(equal(&vec![1i64, 2], &vec![1i64, 2]));
    }

    #[test]
    fn test_sequence_length_mismatch() {
        let diffs = compare(
            &vec!["foo", "bar"].to_value(),
            &vec!["foo"].to_value(),
            &CompareOptions::new(),
        );
        assert_eq!(diffs, vec![Difference::length("#length", 2, 1)]);
    }

    #[test]
    fn test_length_field_and_length_mismatch_are_distinct() {
        let expected = Value::record()
            .field("length", &2i64)
            .field("items", &vec!["foo", "bar"])
            .build();
        let actual = Value::record()
            .field("length", &1i64)
            .field("items", &vec!["foo"])
            .build();

        let diffs = compare(&expected, &actual, &CompareOptions::new());
        assert_eq!(
            diffs,
            vec![
                Difference::value("length", &Value::Int(2), &Value::Int(1)),
                Difference::length("items#length", 2, 1),
            ]
        );
    }

    #[test]
    fn test_ignored_field_covers_nested_paths() {
        let options = CompareOptions::new().ignore_field("complex_type");
        assert!(options.is_ignored("complex_type"));
        assert!(options.is_ignored("complex_type.sub_string"));
        assert!(options.is_ignored("complex_type[foo]"));
        assert!(options.is_ignored("complex_type#length"));
        assert!(!options.is_ignored("complex_type_2"));
        assert!(!options.is_ignored(""));
    }

    #[test]
    fn test_large_sequence_reports_all_scattered_mismatches() {
        let first: Vec<String> = (1..=100).map(|i| format!("item.{}", i)).collect();
        let mut second = first.clone();
        assert!(equal(&first, &second));

        second[0] = "item.-1".to_string();
        second[50] = "item.-1".to_string();
        second[99] = "item.-1".to_string();

        let result = compare_structural("large list", &first, &second, &CompareOptions::new());
        assert!(!result.passed);
        assert_eq!(result.paths(), vec!["[0]", "[50]", "[99]"]);
    }

    #[test]
    fn test_max_differences_caps_report() {
        let first: Vec<i64> = (1..=100).collect();
        let second: Vec<i64> = (1..=100).map(|i| -i).collect();

        let result = compare_structural(
            "capped",
            &first,
            &second,
            &CompareOptions::new().with_max_differences(3),
        );
        assert_eq!(result.differences.len(), 3);
        assert_eq!(first_difference(&first, &second).unwrap().path, "[0]");
    }

    #[test]
    fn test_kind_mismatch() {
        let diffs = compare(&Value::Int(1), &Value::String("1".into()), &CompareOptions::new());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].category, DiffCategory::Kind);
        assert_eq!(diffs[0].expected, "int 1");
        assert_eq!(diffs[0].actual, r#"string "1""#);
    }

    #[test]
    fn test_extra_and_ignored_fields() {
        let request = request("some string", 123, sub_model("sub string", 123.456));
        let response = Value::record()
            .field("id", "someid")
            .embed(&request)
            .build();

        let diffs = compare(&request, &response, &CompareOptions::new());
        assert_eq!(diffs, vec![Difference::extra("id", r#""someid""#)]);

        assert!(compare(&request, &response, &CompareOptions::new().with_extra_fields()).is_empty());
        assert!(compare(&request, &response, &CompareOptions::new().ignore_field("id")).is_empty());
    }

    #[test]
    fn test_projection_compares_shared_fields() {
        let request = request("some string", 123, sub_model("sub string", 123.456));
        let response = Value::record()
            .field("id", "someid")
            .embed(&request)
            .build();
        let shared = ["the_string", "the_int", "complex_type"];

        assert_eq!(request.project(&shared), response.project(&shared));
    }

    #[test]
    fn test_timestamps_and_durations_are_exact() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let later = t + chrono::Duration::nanoseconds(1);
        assert!(equal(&t, &t));
        assert!(!equal(&t, &later));

        assert!(equal(&Duration::from_secs(10), &Duration::from_secs(10)));
        let diff = first_difference(&Duration::from_secs(10), &Duration::from_secs(50)).unwrap();
        assert_eq!(diff.path, "");
        assert_eq!(diff.to_string(), "[  VALUE] (root) : expected=10s actual=50s");
    }
}
