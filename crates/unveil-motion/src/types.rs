//! Core types for the reveal and feedback state machines.
//!
//! This module defines the fundamental types shared across the crate:
//! - `StyleVector`: the opaque style descriptor handed back to the host
//! - `RevealPhase`: lifecycle state of a revealable element
//! - `FeedbackState`: state of a transient feedback target
//! - `RevealId` / `SubscriptionId`: unique identifiers

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a single scheduled reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealId(pub u64);

impl RevealId {
    /// Generate a new unique reveal ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RevealId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by `RevealOrchestrator::register`.
///
/// Identifies one observed group for the lifetime of its subscription.
/// Operations on a handle that has been unregistered are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl SubscriptionId {
    /// Generate a new unique subscription ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle phase of a revealable element.
///
/// Under a `once` trigger policy, `Revealed` is terminal. Otherwise the
/// element moves back to `Hidden` whenever its group leaves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Element is at its initial offset style, waiting for a trigger.
    Hidden,
    /// A reveal is scheduled or interpolating toward the settled style.
    Revealing,
    /// Element has reached its settled style.
    Revealed,
}

impl Default for RevealPhase {
    fn default() -> Self {
        Self::Hidden
    }
}

/// State of a transient feedback target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackState {
    /// No feedback pending for this target.
    Idle,
    /// Feedback indicator is showing; it auto-reverts after the reset delay.
    Active,
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Style descriptor for a revealable element.
///
/// The orchestrator interpolates between an element's initial and settled
/// vectors but never interprets the fields beyond that; rendering them is
/// the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleVector {
    /// Opacity from 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Horizontal offset in pixels.
    pub translate_x: f32,
    /// Vertical offset in pixels (positive is down).
    pub translate_y: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Default for StyleVector {
    fn default() -> Self {
        Self::settled()
    }
}

impl StyleVector {
    /// The settled presentation: fully opaque, no offset, unit scale.
    pub fn settled() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }

    /// Transparent and vertically offset, the common pre-reveal state.
    pub fn offset_y(offset: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y: offset,
            ..Self::settled()
        }
    }

    /// Transparent and scaled down, used by pop-in reveals.
    pub fn scaled(scale: f32) -> Self {
        Self {
            opacity: 0.0,
            scale,
            ..Self::settled()
        }
    }

    /// Set the opacity component.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the horizontal offset component.
    pub fn with_translate_x(mut self, translate_x: f32) -> Self {
        self.translate_x = translate_x;
        self
    }
}
