//! Lifecycle events for reveals and feedback targets.
//!
//! Events are collected during update cycles and polled afterwards, so
//! hosts can react to state changes (re-render, log, trigger follow-ups)
//! without callbacks reaching into the state machines.
//!
//! # Usage
//!
//! ```ignore
//! use unveil_motion::{RevealOrchestrator, RevealEvent};
//!
//! let mut orchestrator = RevealOrchestrator::new();
//! // ... register groups, feed samples ...
//! orchestrator.update(16.67);
//!
//! for event in orchestrator.drain_events() {
//!     match event {
//!         RevealEvent::Revealed { subscription, element } => {
//!             println!("element {} of {:?} settled", element, subscription);
//!         }
//!         _ => {}
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::types::{RevealId, SubscriptionId};

/// Event emitted when a revealable element changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealEvent {
    /// A reveal transition was scheduled by an entry crossing.
    Scheduled {
        /// The group's subscription handle.
        subscription: SubscriptionId,
        /// Index of the element within its group.
        element: usize,
        /// The scheduled transition instance.
        reveal_id: RevealId,
    },
    /// An element reached its settled style.
    Revealed {
        /// The group's subscription handle.
        subscription: SubscriptionId,
        /// Index of the element within its group.
        element: usize,
    },
    /// An element reverted to its hidden style (exit under a repeating policy).
    Hidden {
        /// The group's subscription handle.
        subscription: SubscriptionId,
        /// Index of the element within its group.
        element: usize,
    },
    /// A scheduled transition was cancelled before completing.
    Cancelled {
        /// The group's subscription handle.
        subscription: SubscriptionId,
        /// Index of the element within its group.
        element: usize,
        /// The cancelled transition instance.
        reveal_id: RevealId,
    },
}

impl RevealEvent {
    /// Get the subscription handle for this event.
    pub fn subscription(&self) -> SubscriptionId {
        match self {
            Self::Scheduled { subscription, .. }
            | Self::Revealed { subscription, .. }
            | Self::Hidden { subscription, .. }
            | Self::Cancelled { subscription, .. } => *subscription,
        }
    }

    /// Get the element index for this event.
    pub fn element(&self) -> usize {
        match self {
            Self::Scheduled { element, .. }
            | Self::Revealed { element, .. }
            | Self::Hidden { element, .. }
            | Self::Cancelled { element, .. } => *element,
        }
    }
}

/// Event emitted when a feedback target changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedbackEvent {
    /// A target became active (or had its window refreshed).
    Activated {
        /// The action target.
        target: String,
    },
    /// A target was forced idle because another target activated.
    Superseded {
        /// The displaced target.
        target: String,
    },
    /// A target's reset window elapsed and it reverted to idle.
    Expired {
        /// The expired target.
        target: String,
    },
    /// A target was force-idled by an explicit reset.
    Reset {
        /// The reset target.
        target: String,
    },
}

impl FeedbackEvent {
    /// Get the target id for this event.
    pub fn target(&self) -> &str {
        match self {
            Self::Activated { target }
            | Self::Superseded { target }
            | Self::Expired { target }
            | Self::Reset { target } => target,
        }
    }
}

/// Queue for collecting events during update cycles.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: VecDeque<T>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl<T> EventQueue<T> {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: T) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<T> {
        self.events.pop_front()
    }

    /// Drain all events from the queue, returning an iterator.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.events.front()
    }

    /// Clear all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
