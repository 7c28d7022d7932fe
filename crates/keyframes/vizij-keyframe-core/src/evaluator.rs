//! Value blending strategies.
//!
//! - [`Evaluator`]: blends two boundary values at an interval-local fraction
//! - [`FloatEvaluator`]: stock linear blend
//! - closures `Fn(f32, f32, f32) -> Value` implement [`Evaluator`] directly

use std::fmt;

use crate::error::KeyframeError;
use crate::value::Value;

/// Blends `start` and `end` at `fraction`.
///
/// Implementations must be pure: the interpolator may call them any number of
/// times with the same arguments and expects the same result. `fraction` is
/// not clamped and falls outside `[0, 1]` when extrapolating.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, fraction: f32, start: f32, end: f32) -> Value;

    /// Name used in debug output
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Evaluator for F
where
    F: Fn(f32, f32, f32) -> Value + Send + Sync,
{
    fn evaluate(&self, fraction: f32, start: f32, end: f32) -> Value {
        self(fraction, start, end)
    }
}

impl fmt::Debug for dyn Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evaluator({})", self.name())
    }
}

/// Linear interpolation of floats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatEvaluator;

impl Evaluator for FloatEvaluator {
    #[inline]
    fn evaluate(&self, fraction: f32, start: f32, end: f32) -> Value {
        Value::Float(start + fraction * (end - start))
    }

    fn name(&self) -> &str {
        "float"
    }
}

/// Run `evaluator` and narrow its result to `f32`.
#[inline]
pub(crate) fn evaluate_f32(
    evaluator: &dyn Evaluator,
    fraction: f32,
    start: f32,
    end: f32,
) -> Result<f32, KeyframeError> {
    let value = evaluator.evaluate(fraction, start, end);
    value.as_f32().ok_or(KeyframeError::TypeMismatch {
        actual: value.kind(),
    })
}
