//! Configuration for a harness run

use std::env;

use structeq_core::CompareOptions;

use crate::error::{ConfigError, ConfigResult};
use crate::style::AssertionStyle;

/// Injects a mismatch into every scenario when set to exactly `true`
pub const SHOULD_FAIL_VAR: &str = "SHOULD_FAIL";
/// Comma-separated subset of assertion styles to run
pub const STYLES_VAR: &str = "STRUCTEQ_STYLES";
/// Cap on the differences reported per comparison
pub const MAX_DIFFERENCES_VAR: &str = "STRUCTEQ_MAX_DIFFERENCES";

/// Configuration for a harness run
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Whether every scenario's second operand gets a deliberate mismatch
    pub should_fail: bool,
    /// Styles to run, in order
    pub styles: Vec<AssertionStyle>,
    /// Stop each comparison after this many differences
    pub max_differences: Option<usize>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            should_fail: false,
            styles: AssertionStyle::ALL.to_vec(),
            max_differences: None,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let should_fail = lookup(SHOULD_FAIL_VAR).as_deref() == Some("true");

        let styles = match lookup(STYLES_VAR) {
            Some(raw) => parse_styles(&raw)?,
            None => AssertionStyle::ALL.to_vec(),
        };

        let max_differences = match lookup(MAX_DIFFERENCES_VAR) {
            Some(raw) => Some(parse_max_differences(&raw)?),
            None => None,
        };

        Ok(Self {
            should_fail,
            styles,
            max_differences,
        })
    }

    pub fn with_should_fail(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    pub fn with_styles(mut self, styles: &[AssertionStyle]) -> Self {
        self.styles = styles.to_vec();
        self
    }

    /// Comparison options every scenario is checked with
    pub fn compare_options(&self) -> CompareOptions {
        match self.max_differences {
            Some(max) => CompareOptions::new().with_max_differences(max),
            None => CompareOptions::new(),
        }
    }
}

fn parse_styles(raw: &str) -> ConfigResult<Vec<AssertionStyle>> {
    let mut styles = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let style: AssertionStyle = name.parse()?;
        if !styles.contains(&style) {
            styles.push(style);
        }
    }

    if styles.is_empty() {
        return Err(ConfigError::NoStyles {
            var: STYLES_VAR.to_string(),
        });
    }
    Ok(styles)
}

fn parse_max_differences(raw: &str) -> ConfigResult<usize> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        var: MAX_DIFFERENCES_VAR.to_string(),
        reason: reason.to_string(),
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(max) => Ok(max),
        Err(e) => Err(invalid(&e.to_string())),
    }
}
