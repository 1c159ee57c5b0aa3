//! Assertion styles the scenarios are repeated with
//!
//! Each style is a different way of answering "are these two values equal,
//! and if not, where do they differ".

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use structeq_core::{
    compare, compare_serialized, CompareOptions, CompareResult, ComparisonResult, Difference,
    Fieldwise, Structural,
};
use tracing::{debug, trace};

use crate::error::ConfigError;

/// Everything a value needs so that every style can compare it
pub trait Comparable: Structural + Fieldwise + PartialEq + fmt::Debug + Serialize {}

impl<T> Comparable for T where T: Structural + Fieldwise + PartialEq + fmt::Debug + Serialize + ?Sized {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionStyle {
    /// Hand-written field-by-field walk
    Manual,
    /// Derived `PartialEq`, reported as two `Debug` renderings
    Native,
    /// Structural deep equality with per-path differences
    Deep,
    /// serde_json serialization of both sides
    Json,
}

impl AssertionStyle {
    pub const ALL: [AssertionStyle; 4] = [
        AssertionStyle::Manual,
        AssertionStyle::Native,
        AssertionStyle::Deep,
        AssertionStyle::Json,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AssertionStyle::Manual => "manual",
            AssertionStyle::Native => "native",
            AssertionStyle::Deep => "deep",
            AssertionStyle::Json => "json",
        }
    }

    /// Compare `expected` against `actual` the way this style does
    ///
    /// Inequality is reported in the returned result. An error means the
    /// values could not be prepared for comparison at all.
    ///
    /// `max_differences` applies to every style. The manual style drops
    /// differences under an ignored path; it never reports extra record
    /// fields, so `allow_extra_fields` has nothing to relax there. The native
    /// style sees only `PartialEq`, so it cannot honour `ignore_fields` or
    /// `allow_extra_fields`.
    pub fn check<T: Comparable + ?Sized>(
        &self,
        label: &str,
        expected: &T,
        actual: &T,
        options: &CompareOptions,
    ) -> CompareResult<ComparisonResult> {
        let mut differences = match self {
            AssertionStyle::Manual => {
                let mut differences = Vec::new();
                expected.fieldwise_diff(actual, "", &mut differences);
                differences.retain(|difference| !options.is_ignored(&difference.path));
                differences
            }
            AssertionStyle::Native => {
                if !options.ignore_fields.is_empty() || options.allow_extra_fields {
                    debug!(label, "native style compares whole values, ignoring field options");
                }
                if expected == actual {
                    Vec::new()
                } else {
                    vec![Difference::value(
                        "",
                        format!("{:?}", expected),
                        format!("{:?}", actual),
                    )]
                }
            }
            AssertionStyle::Deep => compare(&expected.to_value(), &actual.to_value(), options),
            AssertionStyle::Json => compare_serialized(expected, actual, options)?,
        };

        if let Some(max) = options.max_differences {
            differences.truncate(max);
        }
        trace!(style = self.name(), label, differences = differences.len(), "checked");

        Ok(ComparisonResult::new(label, differences))
    }
}

impl fmt::Display for AssertionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AssertionStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssertionStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownStyle {
                name: s.to_string(),
            })
    }
}
