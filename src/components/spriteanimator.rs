//! Flip-book animation state for a horizontal sprite sheet.
//!
//! A [`SpriteFrameAnimator`] turns wall-clock deltas into discrete frame
//! steps. It knows nothing about textures or rendering: callers feed it the
//! frame delta through [`SpriteFrameAnimator::advance`] and read the texture
//! offset back with [`SpriteFrameAnimator::current_offset`].
//!
//! # Catch-up policy
//!
//! The accumulator is reduced by one frame interval per step instead of being
//! zeroed. A single long delta (a stalled or dropped render frame) advances
//! as many frames as fit in it, and the fractional remainder carries over to
//! the next call. The step count is computed with one division, so the cost
//! of `advance` does not grow with the delta.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`SpriteFrameAnimator`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    /// Frame count or frame rate is not strictly positive (or not finite).
    #[error("invalid animation configuration: {0}")]
    InvalidConfiguration(String),
    /// The delta passed to `advance` is negative or not finite.
    #[error("invalid animation input: {0}")]
    InvalidInput(String),
}

/// Playback state of a single-row sprite sheet.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct SpriteFrameAnimator {
    frame_count: usize,
    frames_per_second: f32,
    elapsed: f32,
    frame_index: usize,
}

impl SpriteFrameAnimator {
    /// Create an animator positioned on frame 0 with an empty accumulator.
    pub fn new(frame_count: usize, frames_per_second: f32) -> Result<Self, AnimationError> {
        if frame_count == 0 {
            return Err(AnimationError::InvalidConfiguration(
                "frame count must be greater than zero".to_string(),
            ));
        }
        validate_rate(frames_per_second)?;
        Ok(Self {
            frame_count,
            frames_per_second,
            elapsed: 0.0,
            frame_index: 0,
        })
    }

    /// Change the playback rate.
    ///
    /// The current frame and the accumulated time are kept; only the interval
    /// used by the next [`advance`](Self::advance) changes.
    pub fn set_frames_per_second(&mut self, rate: f32) -> Result<(), AnimationError> {
        validate_rate(rate)?;
        self.frames_per_second = rate;
        Ok(())
    }

    /// Accumulate `delta_seconds` and step the frame index for every full
    /// interval available.
    ///
    /// Returns `true` if the frame index moved at least once. A negative or
    /// non-finite delta is rejected and leaves the state untouched.
    pub fn advance(&mut self, delta_seconds: f32) -> Result<bool, AnimationError> {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return Err(AnimationError::InvalidInput(format!(
                "delta must be a finite non-negative number, got {}",
                delta_seconds
            )));
        }

        let elapsed = self.elapsed as f64 + delta_seconds as f64;
        let interval = self.frame_interval() as f64;

        let mut steps = (elapsed / interval).floor();
        let mut remainder = elapsed - steps * interval;
        if remainder >= interval {
            steps += 1.0;
            remainder -= interval;
        }
        self.elapsed = remainder.max(0.0) as f32;

        if steps < 1.0 {
            return Ok(false);
        }
        // `as` saturates; only the step count modulo the frame count matters
        let frame_count = self.frame_count as u64;
        let wrapped = (steps as u64 % frame_count) as usize;
        self.frame_index = (self.frame_index + wrapped) % self.frame_count;

        Ok(true)
    }

    /// Horizontal texture offset of the current frame, in `[0, 1)`.
    pub fn current_offset(&self) -> f32 {
        self.frame_index as f32 / self.frame_count as f32
    }

    /// Width of one tile as a fraction of the sheet (texture repeat factor).
    pub fn tile_width(&self) -> f32 {
        1.0 / self.frame_count as f32
    }

    /// Seconds between two frame steps at the current rate.
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.frames_per_second
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn frames_per_second(&self) -> f32 {
        self.frames_per_second
    }

    /// Time accumulated since the last frame step.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

fn validate_rate(rate: f32) -> Result<(), AnimationError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(AnimationError::InvalidConfiguration(format!(
            "frames per second must be a positive number, got {}",
            rate
        )));
    }
    Ok(())
}
