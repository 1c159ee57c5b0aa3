//! Hand-written field-by-field comparison
//!
//! [`Fieldwise`] is the explicit counterpart to the [`Structural`] walk:
//! each type names the fields it compares, so nothing is compared that the
//! author did not list.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::compare::Difference;
use crate::path;
use crate::value::Structural;

/// Explicit field-by-field comparison
pub trait Fieldwise {
    /// Append every difference between `self` (expected) and `other` (actual)
    fn fieldwise_diff(&self, other: &Self, path: &str, differences: &mut Vec<Difference>);

    fn fieldwise_eq(&self, other: &Self) -> bool {
        let mut differences = Vec::new();
        self.fieldwise_diff(other, "", &mut differences);
        differences.is_empty()
    }
}

impl<T: Fieldwise + ?Sized> Fieldwise for &T {
    fn fieldwise_diff(&self, other: &Self, path: &str, differences: &mut Vec<Difference>) {
        (**self).fieldwise_diff(*other, path, differences);
    }
}

macro_rules! impl_fieldwise_primitive {
    ($($ty:ty),*) => {
        $(
            impl Fieldwise for $ty {
                fn fieldwise_diff(&self, other: &Self, path: &str, differences: &mut Vec<Difference>) {
                    if self != other {
                        differences.push(Difference::value(path, self.to_value(), other.to_value()));
                    }
                }
            }
        )*
    };
}

impl_fieldwise_primitive!(bool, i32, i64, u32, f64, str, String, DateTime<Utc>, Duration);

impl<T: Fieldwise + Structural> Fieldwise for [T] {
    fn fieldwise_diff(&self, other: &Self, path: &str, differences: &mut Vec<Difference>) {
        if self.len() != other.len() {
            differences.push(Difference::length(
                path::length(path),
                self.len(),
                other.len(),
            ));
        }
        for (i, (expected, actual)) in self.iter().zip(other).enumerate() {
            expected.fieldwise_diff(actual, &path::index(path, i), differences);
        }
    }
}

impl<T: Fieldwise + Structural> Fieldwise for Vec<T> {
    fn fieldwise_diff(&self, other: &Self, path: &str, differences: &mut Vec<Difference>) {
        self.as_slice().fieldwise_diff(other.as_slice(), path, differences);
    }
}

impl<T: Fieldwise + Structural, S: BuildHasher> Fieldwise for HashMap<String, T, S> {
    fn fieldwise_diff(&self, other: &Self, path: &str, differences: &mut Vec<Difference>) {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();
        for key in keys {
            let entry_path = path::key(path, key);
            match (self.get(key), other.get(key)) {
                (Some(expected), Some(actual)) => {
                    expected.fieldwise_diff(actual, &entry_path, differences);
                }
                (Some(expected), None) => {
                    differences.push(Difference::missing(entry_path, expected.to_value()));
                }
                _ => {}
            }
        }

        let mut extra: Vec<(&String, &T)> = other
            .iter()
            .filter(|(key, _)| !self.contains_key(*key))
            .collect();
        extra.sort_by(|a, b| a.0.cmp(b.0));
        for (key, actual) in extra {
            differences.push(Difference::extra(path::key(path, key), actual.to_value()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_mismatch() {
        let mut diffs = Vec::new();
        "some string".fieldwise_diff("some string - not", "the_string", &mut diffs);
        assert_eq!(
            diffs,
            vec![Difference::value(
                "the_string",
                r#""some string""#,
                r#""some string - not""#
            )]
        );
    }

    #[test]
    fn test_vec_reports_each_index() {
        let first = vec!["foo".to_string(), "bar".to_string()];
        let second = vec!["foo".to_string(), "baz".to_string()];

        let mut diffs = Vec::new();
        first.fieldwise_diff(&second, "", &mut diffs);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].path, "[1]");
        assert!(first.fieldwise_eq(&first.clone()));
    }

    #[test]
    fn test_map_missing_and_extra_keys() {
        let mut first = HashMap::new();
        first.insert("foo".to_string(), 10i64);
        first.insert("bar".to_string(), 20i64);

        let mut second = HashMap::new();
        second.insert("foo".to_string(), 15i64);
        second.insert("baz".to_string(), 20i64);

        let mut diffs = Vec::new();
        first.fieldwise_diff(&second, "", &mut diffs);
        let paths: Vec<&str> = diffs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["[bar]", "[foo]", "[baz]"]);
    }

    #[test]
    fn test_signed_zeros_are_equal() {
        assert!(0.0f64.fieldwise_eq(&-0.0));
        assert!(!f64::NAN.fieldwise_eq(&f64::NAN));
    }

    #[test]
    fn test_vec_length_mismatch() {
        let mut diffs = Vec::new();
        vec![1i64, 2].fieldwise_diff(&vec![1i64], "items", &mut diffs);
        assert_eq!(diffs, vec![Difference::length("items#length", 2, 1)]);
    }
}
