//! Transient feedback controller for short-lived confirmation state.
//!
//! Tracks a per-action "was this just triggered" indicator (the copied
//! checkmark on a copy button) that self-clears after a fixed window.
//! At most one target is active per controller at any instant; activating
//! a new target synchronously idles the previous one and cancels its
//! pending auto-reset.
//!
//! Because only one target can be active, the controller owns a single
//! pending-timer slot rather than one per target: activating is always
//! cancel existing timer, idle previous target, set new target active,
//! start new timer.

use super::events::{EventQueue, FeedbackEvent};
use super::types::FeedbackState;

/// The currently active feedback target and its remaining window.
#[derive(Debug, Clone)]
struct ActiveFeedback {
    target: String,
    remaining_ms: f32,
}

/// Controller for transient per-action feedback indicators.
///
/// Targets are lightweight and ephemeral: `activate` implicitly creates
/// them, and `query`/`reset` on an unknown target simply report idle or
/// do nothing.
#[derive(Debug)]
pub struct FeedbackController {
    /// Auto-reset window applied to every activation, in milliseconds.
    reset_delay_ms: f32,
    /// Single pending-timer slot; `None` means every target is idle.
    active: Option<ActiveFeedback>,
    /// Queue of feedback events emitted by operations and updates.
    event_queue: EventQueue<FeedbackEvent>,
}

/// Reset window used by the page's copy buttons.
pub const DEFAULT_RESET_DELAY_MS: f32 = 2000.0;

impl Default for FeedbackController {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY_MS)
    }
}

impl FeedbackController {
    /// Create a controller with the given auto-reset window.
    pub fn new(reset_delay_ms: f32) -> Self {
        Self {
            reset_delay_ms,
            active: None,
            event_queue: EventQueue::new(),
        }
    }

    /// The configured auto-reset window in milliseconds.
    pub fn reset_delay_ms(&self) -> f32 {
        self.reset_delay_ms
    }

    /// Activate a target's feedback indicator.
    ///
    /// Any other active target is idled immediately and its pending
    /// auto-reset cancelled. Re-activating the currently active target
    /// restarts its window without a transient idle.
    pub fn activate(&mut self, target: &str) {
        let refresh = self
            .active
            .as_ref()
            .is_some_and(|current| current.target == target);

        if refresh {
            // Refresh, never toggle off
            if let Some(current) = self.active.as_mut() {
                current.remaining_ms = self.reset_delay_ms;
            }
        } else {
            if let Some(previous) = self.active.take() {
                self.event_queue.push(FeedbackEvent::Superseded {
                    target: previous.target,
                });
            }
            self.active = Some(ActiveFeedback {
                target: target.to_string(),
                remaining_ms: self.reset_delay_ms,
            });
        }

        tracing::debug!(feedback_target = target, "feedback activated");
        self.event_queue.push(FeedbackEvent::Activated {
            target: target.to_string(),
        });
    }

    /// Current state of a target. Pure read, no side effects.
    pub fn query(&self, target: &str) -> FeedbackState {
        match &self.active {
            Some(active) if active.target == target => FeedbackState::Active,
            _ => FeedbackState::Idle,
        }
    }

    /// The currently active target, if any.
    pub fn active_target(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.target.as_str())
    }

    /// Force-idle a target and cancel its scheduled auto-reset.
    ///
    /// Used on unmount so a pending reset never fires against a destroyed
    /// target. Resetting an idle or unknown target is a no-op.
    pub fn reset(&mut self, target: &str) {
        if self.query(target) == FeedbackState::Active {
            self.active = None;
            self.event_queue.push(FeedbackEvent::Reset {
                target: target.to_string(),
            });
        }
    }

    /// Advance the pending auto-reset by the given delta time.
    pub fn update(&mut self, delta_ms: f32) {
        let expired = match self.active.as_mut() {
            Some(active) => {
                active.remaining_ms -= delta_ms;
                active.remaining_ms <= 0.0
            }
            None => false,
        };

        if expired {
            if let Some(finished) = self.active.take() {
                self.event_queue.push(FeedbackEvent::Expired {
                    target: finished.target,
                });
            }
        }
    }

    /// Drain all pending feedback events.
    pub fn drain_events(&mut self) -> Vec<FeedbackEvent> {
        self.event_queue.drain().collect()
    }
}
