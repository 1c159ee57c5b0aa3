//! Equality scenario harness
//!
//! Repeats one scenario catalogue under several assertion styles so their
//! verdicts and diagnostics can be compared side by side.
//!
//! ```text
//!               ┌──────────────┐
//!               │   Fixtures   │
//!               └──────┬───────┘
//!                      │ fresh operands
//!               ┌──────▼───────┐   SHOULD_FAIL=true
//!               │   Scenario   │◄── injects a mismatch
//!               └──────┬───────┘
//!        ┌─────────┬───┴─────┬─────────┐
//!   ┌────▼───┐ ┌───▼────┐ ┌──▼───┐ ┌───▼──┐
//!   │ manual │ │ native │ │ deep │ │ json │
//!   └────────┘ └────────┘ └──────┘ └──────┘
//! ```

pub mod config;
mod error;
pub mod harness;
pub mod scenario;
pub mod style;

pub use config::HarnessConfig;
pub use error::{ConfigError, ConfigResult};
pub use harness::{Harness, ScenarioResult};
pub use scenario::Scenario;
pub use style::{AssertionStyle, Comparable};
