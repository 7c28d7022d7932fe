//! Error types for keyframe interpolation

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Errors raised while building or evaluating a keyframe interpolator
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyframeError {
    /// The keyframe list cannot describe an interpolation
    #[error("Invalid keyframe set ({count} keyframes): {reason}")]
    InvalidKeyframeSet { count: usize, reason: String },

    /// Two adjacent keyframes share a fraction
    #[error("Degenerate interval after keyframe {index}: fraction {fraction} repeats")]
    DegenerateInterval { index: usize, fraction: f32 },

    /// The evaluator produced a value that cannot be narrowed to a float
    #[error("Evaluator returned {actual:?}, expected a numeric value")]
    TypeMismatch { actual: ValueKind },

    /// Configuration could not be parsed
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl KeyframeError {
    /// Shorthand for [`KeyframeError::InvalidKeyframeSet`]
    pub fn invalid_set(count: usize, reason: impl Into<String>) -> Self {
        Self::InvalidKeyframeSet {
            count,
            reason: reason.into(),
        }
    }

    /// Whether the error surfaced while constructing an interpolator
    #[inline]
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyframeSet { .. } | Self::DegenerateInterval { .. } | Self::Config { .. }
        )
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidKeyframeSet { .. } | Self::DegenerateInterval { .. } => "keyframes",
            Self::TypeMismatch { .. } => "evaluator",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for KeyframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
