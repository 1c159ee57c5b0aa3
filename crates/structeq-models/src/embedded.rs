//! Models built by embedding a shared base
//!
//! Rust has no field promotion, so the base is held as a plain `base` field.
//! The promoted fields are reachable through accessors, and the structural
//! form flattens them into the composite record so a comparison sees them as
//! ordinary fields of the container.

use serde::{Deserialize, Serialize};
use structeq_core::{path, Difference, Fieldwise, Structural, Value};

use crate::request::{SubModel, RESPONSE_ID};

/// Fields shared by the embedded request and response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseModel {
    pub the_string: String,
    pub the_int: i64,
    pub complex_type: SubModel,
}

/// Request consisting only of the embedded base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmbeddedRequest {
    #[serde(flatten)]
    pub base: BaseModel,
}

/// Response consisting of the embedded base plus an identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedResponse {
    #[serde(flatten)]
    pub base: BaseModel,
    pub id: String,
}

impl BaseModel {
    pub fn new(the_string: impl Into<String>, the_int: i64, complex_type: SubModel) -> Self {
        Self {
            the_string: the_string.into(),
            the_int,
            complex_type,
        }
    }
}

/// Accessors for the fields promoted from [`BaseModel`]
pub trait Embeds {
    fn base(&self) -> &BaseModel;
    fn base_mut(&mut self) -> &mut BaseModel;

    fn the_string(&self) -> &str {
        &self.base().the_string
    }

    fn the_int(&self) -> i64 {
        self.base().the_int
    }

    fn complex_type(&self) -> &SubModel {
        &self.base().complex_type
    }

    fn the_string_mut(&mut self) -> &mut String {
        &mut self.base_mut().the_string
    }

    fn the_int_mut(&mut self) -> &mut i64 {
        &mut self.base_mut().the_int
    }

    fn complex_type_mut(&mut self) -> &mut SubModel {
        &mut self.base_mut().complex_type
    }
}

impl Embeds for CreateEmbeddedRequest {
    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }
}

impl Embeds for EmbeddedResponse {
    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }
}

impl CreateEmbeddedRequest {
    pub fn new(base: BaseModel) -> Self {
        Self { base }
    }
}

impl EmbeddedResponse {
    /// Build the response a server would return for `request`
    pub fn from_request(request: &CreateEmbeddedRequest) -> Self {
        Self {
            base: request.base.clone(),
            id: RESPONSE_ID.to_string(),
        }
    }
}

impl From<&CreateEmbeddedRequest> for EmbeddedResponse {
    fn from(request: &CreateEmbeddedRequest) -> Self {
        Self::from_request(request)
    }
}

impl Structural for BaseModel {
    fn to_value(&self) -> Value {
        Value::record()
            .field("the_string", &self.the_string)
            .field("the_int", &self.the_int)
            .field("complex_type", &self.complex_type)
            .build()
    }
}

impl Structural for CreateEmbeddedRequest {
    fn to_value(&self) -> Value {
        Value::record().embed(&self.base).build()
    }
}

impl Structural for EmbeddedResponse {
    fn to_value(&self) -> Value {
        Value::record().embed(&self.base).field("id", &self.id).build()
    }
}

impl Fieldwise for BaseModel {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.the_string
            .fieldwise_diff(&other.the_string, &path::field(at, "the_string"), differences);
        self.the_int
            .fieldwise_diff(&other.the_int, &path::field(at, "the_int"), differences);
        self.complex_type
            .fieldwise_diff(&other.complex_type, &path::field(at, "complex_type"), differences);
    }
}

// Promoted fields are reported at the container's own level, not under `base`.
impl Fieldwise for CreateEmbeddedRequest {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.base.fieldwise_diff(&other.base, at, differences);
    }
}

impl Fieldwise for EmbeddedResponse {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.base.fieldwise_diff(&other.base, at, differences);
        self.id
            .fieldwise_diff(&other.id, &path::field(at, "id"), differences);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structeq_core::{compare_serialized, equal, first_difference, CompareOptions};

    fn base() -> BaseModel {
        BaseModel::new("some string", 123, SubModel::new("sub string", 123.456))
    }

    #[test]
    fn test_same_base_is_equal() {
        let request = CreateEmbeddedRequest::new(base());
        let request2 = CreateEmbeddedRequest::new(base());
        assert!(equal(&request, &request2));

        let response = EmbeddedResponse::from_request(&request);
        let response2 = EmbeddedResponse::from_request(&request2);
        assert!(equal(&response, &response2));
    }

    #[test]
    fn test_promoted_field_difference() {
        let request = CreateEmbeddedRequest::new(base());
        let mut request2 = CreateEmbeddedRequest::new(base());
        request2.the_string_mut().push_str(" - not");

        assert_eq!(request2.the_string(), "some string - not");
        let diff = first_difference(&request, &request2).unwrap();
        assert_eq!(diff.path, "the_string");

        let mut diffs = Vec::new();
        request.fieldwise_diff(&request2, "", &mut diffs);
        assert_eq!(diffs[0].path, "the_string");
    }

    #[test]
    fn test_response_flattens_base_when_serialized() {
        let response = EmbeddedResponse::from_request(&CreateEmbeddedRequest::new(base()));
        let expected = serde_json::json!({
            "the_string": "some string",
            "the_int": 123,
            "complex_type": {"sub_string": "sub string", "sub_float": 123.456},
            "id": "someid",
        });
        let actual = serde_json::to_value(&response).unwrap();
        assert!(compare_serialized(&expected, &actual, &CompareOptions::new())
            .unwrap()
            .is_empty());
    }
}
