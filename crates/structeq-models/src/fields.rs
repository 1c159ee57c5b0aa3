//! Shared-field projection for "almost equivalent" comparisons
//!
//! A request and its response have different shapes: the response carries an
//! extra identifier. Comparing them means comparing only the fields they
//! share, so every shape that carries those fields projects into the same
//! borrowed [`ModelFields`] view and the two views are compared instead.

use serde::Serialize;
use structeq_core::{path, Difference, Fieldwise, Structural, Value};

use crate::embedded::{BaseModel, CreateEmbeddedRequest, EmbeddedResponse};
use crate::request::{CreateModelRequest, ModelResponse, SubModel};

/// The fields common to every request and response shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelFields<'a> {
    pub the_string: &'a str,
    pub the_int: i64,
    pub complex_type: &'a SubModel,
}

/// Shapes that can be projected onto [`ModelFields`]
pub trait SharedFields {
    fn shared_fields(&self) -> ModelFields<'_>;
}

impl SharedFields for CreateModelRequest {
    fn shared_fields(&self) -> ModelFields<'_> {
        ModelFields {
            the_string: &self.the_string,
            the_int: self.the_int,
            complex_type: &self.complex_type,
        }
    }
}

impl SharedFields for ModelResponse {
    fn shared_fields(&self) -> ModelFields<'_> {
        ModelFields {
            the_string: &self.the_string,
            the_int: self.the_int,
            complex_type: &self.complex_type,
        }
    }
}

impl SharedFields for BaseModel {
    fn shared_fields(&self) -> ModelFields<'_> {
        ModelFields {
            the_string: &self.the_string,
            the_int: self.the_int,
            complex_type: &self.complex_type,
        }
    }
}

impl SharedFields for CreateEmbeddedRequest {
    fn shared_fields(&self) -> ModelFields<'_> {
        self.base.shared_fields()
    }
}

impl SharedFields for EmbeddedResponse {
    fn shared_fields(&self) -> ModelFields<'_> {
        self.base.shared_fields()
    }
}

impl Structural for ModelFields<'_> {
    fn to_value(&self) -> Value {
        Value::record()
            .field("the_string", self.the_string)
            .field("the_int", &self.the_int)
            .field("complex_type", self.complex_type)
            .build()
    }
}

impl Fieldwise for ModelFields<'_> {
    fn fieldwise_diff(&self, other: &Self, at: &str, differences: &mut Vec<Difference>) {
        self.the_string
            .fieldwise_diff(other.the_string, &path::field(at, "the_string"), differences);
        self.the_int
            .fieldwise_diff(&other.the_int, &path::field(at, "the_int"), differences);
        self.complex_type
            .fieldwise_diff(other.complex_type, &path::field(at, "complex_type"), differences);
    }
}
