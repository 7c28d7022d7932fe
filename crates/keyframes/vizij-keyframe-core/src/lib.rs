//! Vizij Keyframe Core (engine-agnostic)
//!
//! Scalar keyframe interpolation over normalized progress. A
//! [`KeyframeInterpolator`] owns an ordered list of [`Keyframe`]s spanning
//! `[0, 1]` and maps a fraction to a value, optionally shaped by easing
//! functions and blended by a pluggable [`Evaluator`].
//!
//! The crate has no clock and no playback state: callers feed it the fraction
//! for the current frame.

pub mod config;
pub mod easing;
pub mod error;
pub mod evaluator;
pub mod interpolator;
pub mod keyframe;
pub mod value;

// Re-exports for consumers (adapters)
pub use config::{DegeneratePolicy, InterpolatorConfig, ValidationMode};
pub use easing::{easing_fn, EasingFn};
pub use error::KeyframeError;
pub use evaluator::{Evaluator, FloatEvaluator};
pub use interpolator::KeyframeInterpolator;
pub use keyframe::Keyframe;
pub use value::{Value, ValueKind};

/// Keyframe result type
pub type Result<T> = core::result::Result<T, KeyframeError>;
