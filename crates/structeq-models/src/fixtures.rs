//! Literal sample values shared by every scenario

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::embedded::BaseModel;
use crate::request::{CreateModelRequest, SubModel};
use crate::time::ModelWithTime;

pub const THE_STRING: &str = "some string";
pub const THE_INT: i64 = 123;
pub const SUB_STRING: &str = "sub string";
pub const SUB_FLOAT: f64 = 123.456;
pub const THE_DURATION: Duration = Duration::from_secs(10);

/// Number of entries in the large map and elements in the large list
pub const LARGE_COLLECTION_SIZE: usize = 100;

/// Sample values built once per run
///
/// Scenarios never mutate these; they clone what they need.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub create_model_request: CreateModelRequest,
    pub base_model: BaseModel,
    pub model_with_time: ModelWithTime,
}

impl Fixtures {
    /// Build the fixtures, stamping the time model with the current instant
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Build the fixtures with a fixed instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            create_model_request: CreateModelRequest::new(THE_STRING, THE_INT, sub_model()),
            base_model: BaseModel::new(THE_STRING, THE_INT, sub_model()),
            model_with_time: ModelWithTime::new(now, THE_DURATION),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

fn sub_model() -> SubModel {
    SubModel::new(SUB_STRING, SUB_FLOAT)
}

/// Key used for entry `i` of the large map and element `i` of the large list
pub fn item_key(i: i64) -> String {
    format!("item.{}", i)
}

/// `{"foo": 10, "bar": 20}`
pub fn small_map() -> HashMap<String, i64> {
    HashMap::from([("foo".to_string(), 10), ("bar".to_string(), 20)])
}

/// `item.1 = 1` through `item.100 = 100`
pub fn large_map() -> HashMap<String, i64> {
    (1..=LARGE_COLLECTION_SIZE as i64)
        .map(|i| (item_key(i), i))
        .collect()
}

/// `["foo", "bar"]`
pub fn small_list() -> Vec<String> {
    vec!["foo".to_string(), "bar".to_string()]
}

/// `item.1` through `item.100`, in order
pub fn large_list() -> Vec<String> {
    (1..=LARGE_COLLECTION_SIZE as i64).map(item_key).collect()
}
