//! Revealable element descriptors and their runtime transition state.
//!
//! This module provides:
//! - `RevealSpec`: Configuration for a single element's reveal (style pair,
//!   stagger delay, duration, easing)
//! - `ActiveReveal`: Runtime state for an in-flight reveal transition
//!
//! # Example
//!
//! ```ignore
//! use unveil_motion::element::RevealSpec;
//! use unveil_motion::types::StyleVector;
//!
//! // Rise from 30px below over 600ms, staggered 100ms after the trigger
//! let spec = RevealSpec::rise(30.0, 600.0).with_delay(100.0);
//! ```

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;
use super::interpolate::Interpolate;
use super::types::{RevealId, StyleVector};

/// Specification for a single element's reveal transition.
///
/// The style pair describes the pre-reveal offset and the settled
/// presentation; the delay sequences the element relative to its group's
/// trigger time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Pre-reveal style (e.g. transparent and offset).
    pub initial: StyleVector,
    /// Settled style reached when the reveal completes.
    pub revealed: StyleVector,
    /// Delay before the reveal starts, relative to the trigger, in milliseconds.
    pub delay_ms: f32,
    /// Duration of the reveal in milliseconds.
    pub duration_ms: f32,
    /// Easing function for the reveal timing.
    pub easing: EasingFunction,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            initial: StyleVector::offset_y(30.0),
            revealed: StyleVector::settled(),
            delay_ms: 0.0,
            duration_ms: 600.0,
            easing: EasingFunction::Ease,
        }
    }
}

impl RevealSpec {
    /// Create a reveal spec for an explicit style pair.
    pub fn new(initial: StyleVector, revealed: StyleVector) -> Self {
        Self {
            initial,
            revealed,
            ..Self::default()
        }
    }

    /// Rise-in reveal: transparent and `offset` px below the settled position.
    pub fn rise(offset: f32, duration_ms: f32) -> Self {
        Self {
            initial: StyleVector::offset_y(offset),
            revealed: StyleVector::settled(),
            duration_ms,
            ..Self::default()
        }
    }

    /// Pop-in reveal: transparent and scaled down to `scale`.
    pub fn pop(scale: f32, duration_ms: f32) -> Self {
        Self {
            initial: StyleVector::scaled(scale),
            revealed: StyleVector::settled(),
            duration_ms,
            ..Self::default()
        }
    }

    /// Set the stagger delay for this element.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the duration for this element's reveal.
    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the easing function for this element's reveal.
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

/// Internal state of an in-flight reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    /// Waiting for the stagger delay to elapse.
    Pending,
    /// Actively interpolating toward the settled style.
    Running,
    /// Completed normally.
    Finished,
    /// Cancelled before completion.
    Cancelled,
}

/// An active reveal transition in progress.
///
/// Tracks elapsed time against the element's delay and duration. Each
/// element has at most one of these at a time; retriggering a group
/// replaces the slot rather than accumulating timers.
#[derive(Debug, Clone)]
pub struct ActiveReveal {
    /// Unique identifier for this transition instance.
    pub id: RevealId,
    /// Index of the element within its group.
    pub element_index: usize,
    /// Style at the start of the transition.
    pub from: StyleVector,
    /// Settled style the transition moves toward.
    pub to: StyleVector,
    /// Delay before interpolation starts, in milliseconds.
    pub delay_ms: f32,
    /// Interpolation duration in milliseconds.
    pub duration_ms: f32,
    /// Time elapsed since the transition was scheduled, in milliseconds.
    pub elapsed_ms: f32,
    /// Easing function for timing.
    pub easing: EasingFunction,
    /// Current state of the transition.
    pub state: TransitionState,
}

impl ActiveReveal {
    /// Schedule a reveal for the given element spec.
    pub fn new(element_index: usize, spec: &RevealSpec) -> Self {
        Self {
            id: RevealId::new(),
            element_index,
            from: spec.initial,
            to: spec.revealed,
            delay_ms: spec.delay_ms,
            duration_ms: spec.duration_ms,
            elapsed_ms: 0.0,
            easing: spec.easing,
            state: if spec.delay_ms > 0.0 {
                TransitionState::Pending
            } else {
                TransitionState::Running
            },
        }
    }

    /// Get the current interpolated style of the transition.
    pub fn current_style(&self) -> StyleVector {
        match self.state {
            TransitionState::Pending => self.from,
            TransitionState::Finished => self.to,
            TransitionState::Cancelled => self.from,
            TransitionState::Running => {
                let active_elapsed = (self.elapsed_ms - self.delay_ms).max(0.0);
                let progress = if self.duration_ms > 0.0 {
                    (active_elapsed / self.duration_ms).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let eased_progress = self.easing.evaluate(progress);
                self.from.interpolate(&self.to, eased_progress)
            }
        }
    }

    /// Update the transition by advancing time.
    ///
    /// Returns `true` if the transition is still active (running or pending),
    /// `false` if it has finished or was cancelled.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        match self.state {
            TransitionState::Finished | TransitionState::Cancelled => false,
            TransitionState::Pending => {
                self.elapsed_ms += delta_ms;
                if self.elapsed_ms >= self.delay_ms {
                    self.state = TransitionState::Running;
                    // Fall through to the running check so a large delta can
                    // complete the transition in the same tick.
                    let active_elapsed = self.elapsed_ms - self.delay_ms;
                    if active_elapsed >= self.duration_ms {
                        self.state = TransitionState::Finished;
                        return false;
                    }
                }
                true
            }
            TransitionState::Running => {
                self.elapsed_ms += delta_ms;
                let active_elapsed = self.elapsed_ms - self.delay_ms;
                if active_elapsed >= self.duration_ms {
                    self.state = TransitionState::Finished;
                    false
                } else {
                    true
                }
            }
        }
    }

    /// Cancel the transition.
    pub fn cancel(&mut self) {
        self.state = TransitionState::Cancelled;
    }

    /// Check if this transition is still active.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            TransitionState::Pending | TransitionState::Running
        )
    }

    /// Check if this transition has completed successfully.
    pub fn is_finished(&self) -> bool {
        self.state == TransitionState::Finished
    }

    /// Get the progress of this transition (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        let active_elapsed = (self.elapsed_ms - self.delay_ms).max(0.0);
        if self.duration_ms > 0.0 {
            (active_elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_spec_defaults() {
        let spec = RevealSpec::default();
        assert_eq!(spec.initial, StyleVector::offset_y(30.0));
        assert_eq!(spec.revealed, StyleVector::settled());
        assert_eq!(spec.delay_ms, 0.0);
        assert_eq!(spec.duration_ms, 600.0);
        assert_eq!(spec.easing, EasingFunction::Ease);
    }

    #[test]
    fn test_reveal_spec_builders() {
        let spec = RevealSpec::rise(30.0, 800.0)
            .with_delay(100.0)
            .with_easing(EasingFunction::EaseOut);

        assert_eq!(spec.initial.translate_y, 30.0);
        assert_eq!(spec.duration_ms, 800.0);
        assert_eq!(spec.delay_ms, 100.0);
        assert_eq!(spec.easing, EasingFunction::EaseOut);

        let pop = RevealSpec::pop(0.95, 600.0);
        assert_eq!(pop.initial.scale, 0.95);
        assert_eq!(pop.initial.opacity, 0.0);
    }

    #[test]
    fn test_active_reveal_lifecycle() {
        let spec = RevealSpec::rise(30.0, 100.0).with_easing(EasingFunction::Linear);
        let mut reveal = ActiveReveal::new(0, &spec);

        // Should start running (no delay)
        assert_eq!(reveal.state, TransitionState::Running);
        assert!(reveal.is_active());

        // Update partially
        assert!(reveal.update(50.0));
        assert_eq!(reveal.state, TransitionState::Running);
        assert!((reveal.progress() - 0.5).abs() < 0.01);
        let mid = reveal.current_style();
        assert!((mid.opacity - 0.5).abs() < 0.01);
        assert!((mid.translate_y - 15.0).abs() < 0.01);

        // Update to completion
        assert!(!reveal.update(60.0));
        assert_eq!(reveal.state, TransitionState::Finished);
        assert!(reveal.is_finished());
        assert!(!reveal.is_active());
        assert_eq!(reveal.current_style(), StyleVector::settled());
    }

    #[test]
    fn test_active_reveal_with_delay() {
        let spec = RevealSpec::rise(30.0, 100.0).with_delay(50.0);
        let mut reveal = ActiveReveal::new(1, &spec);

        // Should start pending
        assert_eq!(reveal.state, TransitionState::Pending);

        // During delay, style should be the initial offset
        reveal.update(25.0);
        assert_eq!(reveal.state, TransitionState::Pending);
        assert_eq!(reveal.current_style(), StyleVector::offset_y(30.0));

        // After delay, should be running
        reveal.update(30.0);
        assert_eq!(reveal.state, TransitionState::Running);
    }

    #[test]
    fn test_active_reveal_large_tick_completes_in_one_update() {
        let spec = RevealSpec::rise(30.0, 100.0).with_delay(50.0);
        let mut reveal = ActiveReveal::new(0, &spec);

        // A single tick past delay + duration finishes the transition
        assert!(!reveal.update(200.0));
        assert!(reveal.is_finished());
        assert_eq!(reveal.current_style(), StyleVector::settled());
    }

    #[test]
    fn test_active_reveal_cancel() {
        let spec = RevealSpec::rise(30.0, 100.0);
        let mut reveal = ActiveReveal::new(0, &spec);

        reveal.update(50.0);
        reveal.cancel();

        assert!(!reveal.is_active());
        assert!(!reveal.is_finished());
        // Cancelled transitions report the initial style
        assert_eq!(reveal.current_style(), StyleVector::offset_y(30.0));
        assert!(!reveal.update(100.0));
    }

    #[test]
    fn test_zero_duration_reveal() {
        let spec = RevealSpec::rise(30.0, 0.0);
        let mut reveal = ActiveReveal::new(0, &spec);

        // Should immediately report the settled style
        assert_eq!(reveal.current_style(), StyleVector::settled());

        // First update should complete it
        assert!(!reveal.update(1.0));
        assert!(reveal.is_finished());
    }
}
