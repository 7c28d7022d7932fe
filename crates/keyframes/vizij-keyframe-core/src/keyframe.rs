//! Keyframe records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::easing::EasingFn;

/// A control point at a normalized fraction.
///
/// `easing` shapes the segment that *ends* at this keyframe. It is consulted
/// only when the interpolator has three or more keyframes; with exactly two,
/// the interpolator's own easing applies instead.
#[derive(Clone, Serialize, Deserialize)]
pub struct Keyframe {
    /// Normalized position in `[0, 1]`.
    pub fraction: f32,
    pub value: f32,
    #[serde(skip)]
    pub easing: Option<EasingFn>,
}

impl Keyframe {
    pub fn new(fraction: f32, value: f32) -> Self {
        Self {
            fraction,
            value,
            easing: None,
        }
    }

    /// Attach the easing for the segment arriving at this keyframe.
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = Some(easing);
        self
    }

    #[inline]
    pub fn has_easing(&self) -> bool {
        self.easing.is_some()
    }
}

impl fmt::Debug for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyframe")
            .field("fraction", &self.fraction)
            .field("value", &self.value)
            .field("easing", &self.easing.is_some())
            .finish()
    }
}

impl PartialEq for Keyframe {
    /// Compares fraction and value; easing handles compare by identity.
    fn eq(&self, other: &Self) -> bool {
        let easing_eq = match (&self.easing, &other.easing) {
            (None, None) => true,
            (Some(a), Some(b)) => std::sync::Arc::ptr_eq(a, b),
            _ => false,
        };
        self.fraction == other.fraction && self.value == other.value && easing_eq
    }
}
