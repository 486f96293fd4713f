//! Reveal groups: ordered element collections sharing one observation target.
//!
//! A `RevealGroup` bundles the elements of one page section with the
//! trigger policy for its shared intersection target. Elements reveal in
//! index order via non-decreasing stagger delays.

use serde::{Deserialize, Serialize};

use super::element::RevealSpec;
use super::error::MotionError;

/// Trigger policy for a reveal group's observation target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerPolicy {
    /// When true, elements never re-hide after their first reveal, even if
    /// the target leaves the viewport.
    pub once: bool,
    /// Fraction of the target's bounding box that must be visible before
    /// the group triggers, in [0, 1].
    pub threshold: f32,
}

impl Default for TriggerPolicy {
    fn default() -> Self {
        Self {
            once: true,
            threshold: 0.1,
        }
    }
}

impl TriggerPolicy {
    /// Policy that reveals once and never re-hides.
    pub fn once(threshold: f32) -> Self {
        Self {
            once: true,
            threshold,
        }
    }

    /// Policy that re-hides elements whenever the target leaves the viewport.
    pub fn repeating(threshold: f32) -> Self {
        Self {
            once: false,
            threshold,
        }
    }
}

/// An ordered sequence of revealable elements sharing one observation target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevealGroup {
    /// Elements in reveal order.
    pub elements: Vec<RevealSpec>,
    /// Trigger policy for the shared target.
    pub policy: TriggerPolicy,
}

impl RevealGroup {
    /// Create a new empty group with the given policy.
    pub fn new(policy: TriggerPolicy) -> Self {
        Self {
            elements: Vec::new(),
            policy,
        }
    }

    /// Add an element to the group.
    pub fn with(mut self, spec: RevealSpec) -> Self {
        self.elements.push(spec);
        self
    }

    /// Add `count` copies of a spec staggered by `increment_ms` each,
    /// starting from the spec's own delay.
    ///
    /// This is the card-grid pattern: identical reveals sequenced
    /// `index * increment` after the trigger.
    pub fn with_staggered(mut self, spec: RevealSpec, count: usize, increment_ms: f32) -> Self {
        let base_delay = spec.delay_ms;
        for index in 0..count {
            self.elements
                .push(spec.clone().with_delay(base_delay + index as f32 * increment_ms));
        }
        self
    }

    /// Number of elements in the group.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the group has no elements.
    ///
    /// Empty groups are accepted at registration and become no-op
    /// subscriptions.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Validate the group descriptor.
    ///
    /// Rejects negative element delays and thresholds outside [0, 1].
    pub fn validate(&self) -> Result<(), MotionError> {
        if !(0.0..=1.0).contains(&self.policy.threshold) {
            return Err(MotionError::ThresholdOutOfRange {
                value: self.policy.threshold,
            });
        }
        for (index, element) in self.elements.iter().enumerate() {
            if element.delay_ms < 0.0 {
                return Err(MotionError::NegativeDelay {
                    index,
                    delay_ms: element.delay_ms,
                });
            }
        }
        Ok(())
    }
}
