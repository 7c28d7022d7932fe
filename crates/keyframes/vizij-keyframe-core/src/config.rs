//! Interpolator configuration.

use serde::{Deserialize, Serialize};

use crate::error::KeyframeError;

/// How much of the keyframe layout is checked at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Only the keyframe count (`n >= 2`) is checked.
    #[default]
    Minimal,
    /// Also require finite fractions, first at 0, last at 1, non-decreasing order.
    Strict,
}

/// What to do when two adjacent keyframes share a fraction.
///
/// Such a segment has zero width, so its interval fraction divides by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Accept the set and let NaN/inf flow out of `evaluate`. A warning is logged.
    #[default]
    Propagate,
    /// Fail construction with [`KeyframeError::DegenerateInterval`].
    Reject,
}

/// Configuration for interpolator construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolatorConfig {
    pub validation: ValidationMode,
    pub degenerate: DegeneratePolicy,
}

impl InterpolatorConfig {
    /// Strict validation with degenerate intervals rejected.
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            degenerate: DegeneratePolicy::Reject,
        }
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, KeyframeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
