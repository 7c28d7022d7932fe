//! Keyframe interpolation.
//!
//! Model:
//! - Keyframes are ordered by fraction, first at 0 and last at 1. The
//!   interpolator never sorts them.
//! - Exactly two keyframes take a fast path: the interpolator's global easing
//!   shapes the fraction and per-keyframe easing is ignored.
//! - Three or more keyframes pick a segment [prev, next] and apply `next`'s
//!   easing; the global easing is ignored.
//! - Fractions at or below 0 use the first segment, at or above 1 the last, so
//!   out-of-range queries extrapolate along the boundary slope.
//!
//! The two easing scopes differ by path and are never combined.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use crate::config::{DegeneratePolicy, InterpolatorConfig, ValidationMode};
use crate::easing::{self, EasingFn};
use crate::error::KeyframeError;
use crate::evaluator::{evaluate_f32, Evaluator};
use crate::keyframe::Keyframe;

/// Boundary values for the two-keyframe path, filled on first use.
#[derive(Clone, Copy, Debug, Default)]
struct FastPathCache {
    first_value: f32,
    last_value: f32,
    delta: f32,
    initialized: bool,
}

/// Maps a fraction to a value across an ordered keyframe list.
///
/// The two-keyframe cache lives in a [`Cell`], so an interpolator is `Send`
/// but not `Sync`. Give each thread its own [`Clone`].
pub struct KeyframeInterpolator {
    keyframes: Vec<Keyframe>,
    easing: Option<EasingFn>,
    evaluator: Option<Arc<dyn Evaluator>>,
    config: InterpolatorConfig,
    cache: Cell<FastPathCache>,
}

impl KeyframeInterpolator {
    /// Build with the default configuration.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self, KeyframeError> {
        Self::with_config(keyframes, InterpolatorConfig::default())
    }

    pub fn with_config(
        keyframes: Vec<Keyframe>,
        config: InterpolatorConfig,
    ) -> Result<Self, KeyframeError> {
        validate(&keyframes, &config)?;
        log::debug!(
            "keyframe interpolator: {} keyframes, validation={:?}",
            keyframes.len(),
            config.validation
        );
        Ok(Self {
            keyframes,
            easing: None,
            evaluator: None,
            config,
            cache: Cell::new(FastPathCache::default()),
        })
    }

    /// Evenly spaced keyframes: value `i` lands at `i / (len - 1)`.
    pub fn from_values(values: &[f32]) -> Result<Self, KeyframeError> {
        if values.len() < 2 {
            return Err(KeyframeError::invalid_set(
                values.len(),
                "at least two values are required",
            ));
        }
        let last = (values.len() - 1) as f32;
        let keyframes = values
            .iter()
            .enumerate()
            .map(|(i, v)| Keyframe::new(i as f32 / last, *v))
            .collect();
        Self::new(keyframes)
    }

    /// Set the global easing (two-keyframe path only).
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn set_easing(&mut self, easing: Option<EasingFn>) {
        self.easing = easing;
    }

    pub fn set_evaluator(&mut self, evaluator: Option<Arc<dyn Evaluator>>) {
        self.evaluator = evaluator;
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Pairs with [`len`](Self::len) for `clippy::len_without_is_empty`;
    /// construction requires two keyframes, so this is false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[inline]
    pub fn first(&self) -> &Keyframe {
        &self.keyframes[0]
    }

    #[inline]
    pub fn last(&self) -> &Keyframe {
        &self.keyframes[self.keyframes.len() - 1]
    }

    #[inline]
    pub fn config(&self) -> &InterpolatorConfig {
        &self.config
    }

    #[inline]
    pub fn has_easing(&self) -> bool {
        self.easing.is_some()
    }

    #[inline]
    pub fn has_evaluator(&self) -> bool {
        self.evaluator.is_some()
    }

    /// Whether the two-keyframe cache has been filled.
    #[inline]
    pub fn is_fast_path_warm(&self) -> bool {
        self.cache.get().initialized
    }

    /// Value at `fraction`. Fractions outside `[0, 1]` extrapolate.
    ///
    /// Fails only when an evaluator returns a non-numeric value.
    pub fn evaluate(&self, fraction: f32) -> Result<f32, KeyframeError> {
        let n = self.keyframes.len();
        if n == 2 {
            return self.evaluate_pair(fraction);
        }
        if fraction <= 0.0 {
            return self.evaluate_segment(0, 1, fraction);
        }
        if fraction >= 1.0 {
            return self.evaluate_segment(n - 2, n - 1, fraction);
        }
        for i in 1..n {
            if fraction < self.keyframes[i].fraction {
                return self.evaluate_segment(i - 1, i, fraction);
            }
        }
        // Only NaN, or a last keyframe below 1 under minimal validation, gets here.
        log::warn!("fraction {fraction} not bounded by any keyframe; holding last value");
        Ok(self.last().value)
    }

    fn evaluate_pair(&self, fraction: f32) -> Result<f32, KeyframeError> {
        let cache = self.warm_cache();
        let fraction = easing::apply(self.easing.as_ref(), fraction);
        match &self.evaluator {
            None => Ok(cache.first_value + fraction * cache.delta),
            Some(evaluator) => {
                evaluate_f32(evaluator.as_ref(), fraction, cache.first_value, cache.last_value)
            }
        }
    }

    fn warm_cache(&self) -> FastPathCache {
        let cache = self.cache.get();
        if cache.initialized {
            return cache;
        }
        let first_value = self.keyframes[0].value;
        let last_value = self.keyframes[1].value;
        let warmed = FastPathCache {
            first_value,
            last_value,
            delta: last_value - first_value,
            initialized: true,
        };
        log::trace!("fast path cache: {first_value} -> {last_value}");
        self.cache.set(warmed);
        warmed
    }

    fn evaluate_segment(
        &self,
        prev: usize,
        next: usize,
        fraction: f32,
    ) -> Result<f32, KeyframeError> {
        let prev = &self.keyframes[prev];
        let next = &self.keyframes[next];
        let fraction = easing::apply(next.easing.as_ref(), fraction);
        let interval = (fraction - prev.fraction) / (next.fraction - prev.fraction);
        match &self.evaluator {
            None => Ok(prev.value + interval * (next.value - prev.value)),
            Some(evaluator) => evaluate_f32(evaluator.as_ref(), interval, prev.value, next.value),
        }
    }
}

fn validate(keyframes: &[Keyframe], config: &InterpolatorConfig) -> Result<(), KeyframeError> {
    let n = keyframes.len();
    if n < 2 {
        return Err(KeyframeError::invalid_set(n, "at least two keyframes are required"));
    }

    if config.validation == ValidationMode::Strict {
        if let Some(bad) = keyframes.iter().position(|k| !k.fraction.is_finite()) {
            return Err(reject(n, format!("keyframe {bad} has a non-finite fraction")));
        }
        if keyframes[0].fraction != 0.0 {
            return Err(reject(n, "first keyframe must sit at fraction 0"));
        }
        if keyframes[n - 1].fraction != 1.0 {
            return Err(reject(n, "last keyframe must sit at fraction 1"));
        }
        if let Some(i) = keyframes
            .windows(2)
            .position(|w| w[1].fraction < w[0].fraction)
        {
            return Err(reject(n, format!("keyframe {} is out of order", i + 1)));
        }
    }

    // The two-keyframe path never divides by the segment width.
    if n > 2 {
        let degenerate = degenerate_pairs(keyframes);
        if let Some(&index) = degenerate.first() {
            if config.degenerate == DegeneratePolicy::Reject {
                let fraction = keyframes[index].fraction;
                log::warn!("rejecting keyframes: zero-width segment at {fraction}");
                return Err(KeyframeError::DegenerateInterval { index, fraction });
            }
        }
        for index in degenerate {
            log::warn!(
                "keyframes {} and {} share fraction {}; evaluate may return NaN",
                index,
                index + 1,
                keyframes[index].fraction
            );
        }
    }
    Ok(())
}

/// Indices `i` where keyframes `i` and `i + 1` share a fraction.
fn degenerate_pairs(keyframes: &[Keyframe]) -> Vec<usize> {
    keyframes
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[0].fraction == w[1].fraction)
        .map(|(i, _)| i)
        .collect()
}

fn reject(count: usize, reason: impl Into<String>) -> KeyframeError {
    let err = KeyframeError::invalid_set(count, reason);
    log::warn!("{err}");
    err
}

impl Clone for KeyframeInterpolator {
    /// Fresh keyframe records and a cold fast-path cache; easing and evaluator
    /// handles are shared.
    fn clone(&self) -> Self {
        Self {
            keyframes: self.keyframes.to_vec(),
            easing: self.easing.clone(),
            evaluator: self.evaluator.clone(),
            config: self.config,
            cache: Cell::new(FastPathCache::default()),
        }
    }
}

impl fmt::Debug for KeyframeInterpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyframeInterpolator")
            .field("keyframes", &self.keyframes)
            .field("easing", &self.easing.is_some())
            .field("evaluator", &self.evaluator)
            .field("config", &self.config)
            .finish()
    }
}

impl fmt::Display for KeyframeInterpolator {
    /// Space-separated `fraction:value` pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kf) in self.keyframes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", kf.fraction, kf.value)?;
        }
        Ok(())
    }
}
