//! Structural equality for structured values
//!
//! This crate lowers typed values into a [`Value`] tree and compares two
//! trees recursively, reporting the path and both sides of every place they
//! diverge.
//!
//! - Primitives compare exactly (floats bit for bit, timestamps to the
//!   nanosecond)
//! - Records compare field by field
//! - Sequences compare in order and are length-sensitive
//! - Mappings compare by key, independent of insertion order
//!
//! # Example
//!
//! ```
//! use structeq_core::{compare_structural, equal, CompareOptions};
//!
//! assert!(equal(&vec![1i64, 2], &vec![1i64, 2]));
//! assert!(!equal(&vec![1i64, 2], &vec![2i64, 1]));
//!
//! let result = compare_structural("list", &vec!["foo"], &vec!["baz"], &CompareOptions::new());
//! assert_eq!(result.paths(), vec!["[0]"]);
//! ```

mod compare;
mod error;
mod fieldwise;
mod json;
pub mod path;
mod value;

pub use compare::{
    compare, compare_structural, equal, first_difference, CompareOptions, ComparisonResult,
    DiffCategory, Difference,
};
pub use error::{CompareError, CompareResult};
pub use fieldwise::Fieldwise;
pub use json::{compare_json, compare_serialized};
pub use value::{RecordBuilder, Structural, Value, ValueKind};
