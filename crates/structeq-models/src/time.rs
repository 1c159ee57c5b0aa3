//! Model holding a timestamp and a duration

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use structeq_core::{path, Difference, Fieldwise, Structural, Value};

/// A point in time and a span, both compared exactly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelWithTime {
    pub the_time: DateTime<Utc>,
    pub the_duration: Duration,
}

impl ModelWithTime {
    pub fn new(the_time: DateTime<Utc>, the_duration: Duration) -> Self {
        Self {
            the_time,
            the_duration,
        }
    }
}

/// Copy a time model field by field
pub fn clone_model_with_time(model: &ModelWithTime) -> ModelWithTime {
    ModelWithTime {
        the_time: model.the_time,
        the_duration: model.the_duration,
    }
}

impl Structural for ModelWithTime {
    fn to_value(&self) -> Value {
        Value::record()
            .field("the_time", &self.the_time)
            .field("the_duration", &self.the_duration)
            .build()
    }
}

impl Fieldwise for ModelWithTime {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.the_time
            .fieldwise_diff(&other.the_time, &path::field(at, "the_time"), differences);
        self.the_duration
            .fieldwise_diff(&other.the_duration, &path::field(at, "the_duration"), differences);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structeq_core::first_difference;

    #[test]
    fn test_duration_difference() {
        let model = ModelWithTime::new(Utc::now(), Duration::from_secs(10));
        let mut copy = clone_model_with_time(&model);
        assert_eq!(model, copy);

        copy.the_duration = Duration::from_secs(50);
        let diff = first_difference(&model, &copy).unwrap();
        assert_eq!(diff.path, "the_duration");
        assert_eq!(diff.expected, "10s");
        assert_eq!(diff.actual, "50s");
    }

    #[test]
    fn test_one_nanosecond_is_a_difference() {
        let model = ModelWithTime::new(Utc::now(), Duration::from_secs(10));
        let mut copy = clone_model_with_time(&model);
        copy.the_time = copy.the_time + chrono::Duration::nanoseconds(1);

        assert!(!model.fieldwise_eq(&copy));
        assert_eq!(first_difference(&model, &copy).unwrap().path, "the_time");
    }
}
