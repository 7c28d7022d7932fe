//! Easing handles.
//!
//! An easing function remaps a fraction to another fraction. Curves are
//! supplied by the caller; the crate only stores and applies them. Handles are
//! reference counted so cloned keyframes and interpolators share one curve.

use std::sync::Arc;

/// Shared easing callback (`fraction -> eased fraction`).
pub type EasingFn = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// Wrap a closure as an [`EasingFn`].
pub fn easing_fn<F>(f: F) -> EasingFn
where
    F: Fn(f32) -> f32 + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Apply an optional easing; identity when absent.
#[inline]
pub(crate) fn apply(easing: Option<&EasingFn>, fraction: f32) -> f32 {
    match easing {
        Some(ease) => ease(fraction),
        None => fraction,
    }
}
