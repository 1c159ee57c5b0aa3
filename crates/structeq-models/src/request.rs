//! Flat request/response pair sharing a nested sub-model

use serde::{Deserialize, Serialize};
use structeq_core::{path, Difference, Fieldwise, Structural, Value};

/// Identifier assigned to every response built from a request
pub const RESPONSE_ID: &str = "someid";

/// Nested value held by the request and response models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubModel {
    pub sub_string: String,
    pub sub_float: f64,
}

/// Request used to create a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateModelRequest {
    pub the_string: String,
    pub the_int: i64,
    pub complex_type: SubModel,
}

/// Response returned for a created model
///
/// Carries every request field plus the assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub id: String,
    pub the_string: String,
    pub the_int: i64,
    pub complex_type: SubModel,
}

impl SubModel {
    pub fn new(sub_string: impl Into<String>, sub_float: f64) -> Self {
        Self {
            sub_string: sub_string.into(),
            sub_float,
        }
    }
}

impl CreateModelRequest {
    pub fn new(the_string: impl Into<String>, the_int: i64, complex_type: SubModel) -> Self {
        Self {
            the_string: the_string.into(),
            the_int,
            complex_type,
        }
    }
}

/// Copy a request field by field
pub fn clone_create_model_request(request: &CreateModelRequest) -> CreateModelRequest {
    CreateModelRequest {
        the_string: request.the_string.clone(),
        the_int: request.the_int,
        complex_type: request.complex_type.clone(),
    }
}

impl ModelResponse {
    /// Build the response a server would return for `request`
    pub fn from_request(request: &CreateModelRequest) -> Self {
        Self {
            id: RESPONSE_ID.to_string(),
            the_string: request.the_string.clone(),
            the_int: request.the_int,
            complex_type: request.complex_type.clone(),
        }
    }
}

impl From<&CreateModelRequest> for ModelResponse {
    fn from(request: &CreateModelRequest) -> Self {
        Self::from_request(request)
    }
}

impl Structural for SubModel {
    fn to_value(&self) -> Value {
        Value::record()
            .field("sub_string", &self.sub_string)
            .field("sub_float", &self.sub_float)
            .build()
    }
}

impl Structural for CreateModelRequest {
    fn to_value(&self) -> Value {
        Value::record()
            .field("the_string", &self.the_string)
            .field("the_int", &self.the_int)
            .field("complex_type", &self.complex_type)
            .build()
    }
}

impl Structural for ModelResponse {
    fn to_value(&self) -> Value {
        Value::record()
            .field("id", &self.id)
            .field("the_string", &self.the_string)
            .field("the_int", &self.the_int)
            .field("complex_type", &self.complex_type)
            .build()
    }
}

impl Fieldwise for SubModel {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.sub_string
            .fieldwise_diff(&other.sub_string, &path::field(at, "sub_string"), differences);
        self.sub_float
            .fieldwise_diff(&other.sub_float, &path::field(at, "sub_float"), differences);
    }
}

impl Fieldwise for CreateModelRequest {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.the_string
            .fieldwise_diff(&other.the_string, &path::field(at, "the_string"), differences);
        self.the_int
            .fieldwise_diff(&other.the_int, &path::field(at, "the_int"), differences);
        self.complex_type
            .fieldwise_diff(&other.complex_type, &path::field(at, "complex_type"), differences);
    }
}

impl Fieldwise for ModelResponse {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.id
            .fieldwise_diff(&other.id, &path::field(at, "id"), differences);
        self.the_string
            .fieldwise_diff(&other.the_string, &path::field(at, "the_string"), differences);
        self.the_int
            .fieldwise_diff(&other.the_int, &path::field(at, "the_int"), differences);
        self.complex_type
            .fieldwise_diff(&other.complex_type, &path::field(at, "complex_type"), differences);
    }
}
