//! Viewport-triggered reveal animations and transient UI feedback.
//!
//! This crate provides the two behavioral mechanisms behind a progressive
//! landing page:
//! - **Reveal orchestration**: one-way (or repeatable) visibility
//!   transitions for groups of elements, triggered by threshold crossings
//!   of a viewport-visibility fraction and staggered per element
//! - **Transient feedback**: per-action confirmation indicators that
//!   self-clear after a fixed window, with at most one active at a time
//!
//! # Architecture
//!
//! ```text
//! RevealOrchestrator
//!   ├── Subscriptions (group → observer + per-element phases)
//!   └── Active Reveals (single pending-timer slot per element)
//!
//! FeedbackController
//!   └── Active Target (single pending-timer slot per controller)
//! ```
//!
//! Both components run on a cooperative tick: the host feeds visibility
//! fractions and click activations as they happen, then calls `update`
//! with the elapsed milliseconds each frame. Nothing blocks and nothing
//! fires after it has been cancelled.

pub mod easing;
pub mod element;
pub mod error;
pub mod events;
pub mod feedback;
pub mod group;
pub mod interpolate;
pub mod observer;
pub mod orchestrator;
pub mod types;

pub use easing::EasingFunction;
pub use element::{ActiveReveal, RevealSpec, TransitionState};
pub use error::MotionError;
pub use events::{EventQueue, FeedbackEvent, RevealEvent};
pub use feedback::{FeedbackController, DEFAULT_RESET_DELAY_MS};
pub use group::{RevealGroup, TriggerPolicy};
pub use interpolate::Interpolate;
pub use observer::{Crossing, ThresholdObserver};
pub use orchestrator::RevealOrchestrator;
pub use types::{FeedbackState, RevealId, RevealPhase, StyleVector, SubscriptionId};
