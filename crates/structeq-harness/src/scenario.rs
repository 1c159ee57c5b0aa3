//! The scenario catalogue
//!
//! Every scenario builds two fresh operands from the fixtures, optionally
//! injects a mismatch into the second one, and hands both to a style.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use structeq_core::{CompareOptions, CompareResult, ComparisonResult};
use structeq_models::fixtures::{item_key, large_list, large_map, small_list, small_map};
use structeq_models::{
    clone_create_model_request, clone_model_with_time, CreateEmbeddedRequest, EmbeddedResponse,
    Embeds, Fixtures, ModelResponse, SharedFields,
};

use crate::style::AssertionStyle;

/// Suffix appended to string fields to make them differ
const MISMATCH_SUFFIX: &str = " - not";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    SimpleField,
    Struct,
    InnerStruct,
    AlmostEquivalentStruct,
    EmbeddedModel,
    AlmostEquivalentEmbeddedModel,
    StructWithTime,
    StructWithDuration,
    SmallMap,
    LargeMap,
    SmallList,
    LargeList,
}

impl Scenario {
    pub const ALL: [Scenario; 12] = [
        Scenario::SimpleField,
        Scenario::Struct,
        Scenario::InnerStruct,
        Scenario::AlmostEquivalentStruct,
        Scenario::EmbeddedModel,
        Scenario::AlmostEquivalentEmbeddedModel,
        Scenario::StructWithTime,
        Scenario::StructWithDuration,
        Scenario::SmallMap,
        Scenario::LargeMap,
        Scenario::SmallList,
        Scenario::LargeList,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::SimpleField => "should compare simple field",
            Scenario::Struct => "should compare struct",
            Scenario::InnerStruct => "should compare inner struct",
            Scenario::AlmostEquivalentStruct => "should compare almost equivalent struct",
            Scenario::EmbeddedModel => "should compare embedded model",
            Scenario::AlmostEquivalentEmbeddedModel => {
                "should compare almost equivalent embedded model"
            }
            Scenario::StructWithTime => "should compare struct with time",
            Scenario::StructWithDuration => "should compare struct with duration",
            Scenario::SmallMap => "should compare small map",
            Scenario::LargeMap => "should compare large map",
            Scenario::SmallList => "should compare small list",
            Scenario::LargeList => "should compare large list",
        }
    }

    /// Build the operands and compare them with `style`
    pub fn run(
        &self,
        style: AssertionStyle,
        fixtures: &Fixtures,
        inject_mismatch: bool,
        options: &CompareOptions,
    ) -> CompareResult<ComparisonResult> {
        let label = self.name();

        match self {
            Scenario::SimpleField => {
                let request = &fixtures.create_model_request;
                let mut request2 = clone_create_model_request(request);
                if inject_mismatch {
                    request2.the_string.push_str(MISMATCH_SUFFIX);
                }
                style.check(label, &request.the_string, &request2.the_string, options)
            }
            Scenario::Struct => {
                let request = &fixtures.create_model_request;
                let mut request2 = clone_create_model_request(request);
                if inject_mismatch {
                    request2.the_int = request.the_int + 5;
                }
                style.check(label, request, &request2, options)
            }
            Scenario::InnerStruct => {
                let request = &fixtures.create_model_request;
                let mut request2 = clone_create_model_request(request);
                if inject_mismatch {
                    request2.complex_type.sub_string.push_str(MISMATCH_SUFFIX);
                }
                style.check(label, request, &request2, options)
            }
            Scenario::AlmostEquivalentStruct => {
                let request = &fixtures.create_model_request;
                let mut response = ModelResponse::from_request(request);
                if inject_mismatch {
                    response.the_string.push_str(MISMATCH_SUFFIX);
                }
                style.check(
                    label,
                    &request.shared_fields(),
                    &response.shared_fields(),
                    options,
                )
            }
            Scenario::EmbeddedModel => {
                let request = CreateEmbeddedRequest::new(fixtures.base_model.clone());
                let mut request2 = CreateEmbeddedRequest::new(fixtures.base_model.clone());
                if inject_mismatch {
                    request2.the_string_mut().push_str(MISMATCH_SUFFIX);
                }
                style.check(label, &request, &request2, options)
            }
            Scenario::AlmostEquivalentEmbeddedModel => {
                let request = CreateEmbeddedRequest::new(fixtures.base_model.clone());
                let mut response = EmbeddedResponse::from_request(&request);
                if inject_mismatch {
                    response.the_string_mut().push_str(MISMATCH_SUFFIX);
                }
                style.check(
                    label,
                    &request.shared_fields(),
                    &response.shared_fields(),
                    options,
                )
            }
            Scenario::StructWithTime => {
                let model = &fixtures.model_with_time;
                let mut model2 = clone_model_with_time(model);
                if inject_mismatch {
                    model2.the_time = later_than(model.the_time);
                }
                style.check(label, model, &model2, options)
            }
            Scenario::StructWithDuration => {
                let model = &fixtures.model_with_time;
                let mut model2 = clone_model_with_time(model);
                if inject_mismatch {
                    model2.the_duration = Duration::from_secs(50);
                }
                style.check(label, model, &model2, options)
            }
            Scenario::SmallMap => {
                let first = small_map();
                let mut second = small_map();
                if inject_mismatch {
                    second.insert("foo".to_string(), 15);
                }
                style.check(label, &first, &second, options)
            }
            Scenario::LargeMap => {
                let first = large_map();
                let mut second = large_map();
                if inject_mismatch {
                    for i in [1, 50, 99] {
                        second.insert(item_key(i), -1);
                    }
                }
                style.check(label, &first, &second, options)
            }
            Scenario::SmallList => {
                let first = small_list();
                let mut second = small_list();
                if inject_mismatch {
                    second[1] = "baz".to_string();
                }
                style.check(label, &first, &second, options)
            }
            Scenario::LargeList => {
                let first = large_list();
                let mut second = large_list();
                if inject_mismatch {
                    for i in [0, 50, 99] {
                        second[i] = item_key(-1);
                    }
                }
                style.check(label, &first, &second, options)
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The current instant, nudged forward if the clock has not moved past `time`
fn later_than(time: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > time {
        now
    } else {
        time + chrono::Duration::nanoseconds(1)
    }
}
