//! Sample data models for the equality scenarios
//!
//! - [`CreateModelRequest`] / [`ModelResponse`]: a flat pair sharing a nested
//!   [`SubModel`], the response adding an identifier
//! - [`CreateEmbeddedRequest`] / [`EmbeddedResponse`]: the same fields
//!   reached through an embedded [`BaseModel`]
//! - [`ModelWithTime`]: a timestamp and a duration
//!
//! Every model implements [`structeq_core::Structural`] and
//! [`structeq_core::Fieldwise`], and derives `PartialEq` and serde traits, so
//! each comparison style can be applied to the same values.

mod embedded;
mod fields;
pub mod fixtures;
mod request;
mod time;

pub use embedded::{BaseModel, CreateEmbeddedRequest, EmbeddedResponse, Embeds};
pub use fields::{ModelFields, SharedFields};
pub use fixtures::Fixtures;
pub use request::{
    clone_create_model_request, CreateModelRequest, ModelResponse, SubModel, RESPONSE_ID,
};
pub use time::{clone_model_with_time, ModelWithTime};
