//! Reveal orchestrator coordinating viewport-triggered transitions.
//!
//! The `RevealOrchestrator` is the central coordinator for all reveal
//! groups on a page. It handles:
//! - Registering and unregistering observed groups
//! - Turning visibility samples into enter/exit crossings per group
//! - Scheduling each element's transition at `trigger + delay`
//! - Updating all in-flight transitions each tick
//! - Providing current styles and phases for rendering
//!
//! # Usage
//!
//! ```ignore
//! use unveil_motion::{RevealOrchestrator, RevealGroup, RevealSpec, TriggerPolicy};
//!
//! let mut orchestrator = RevealOrchestrator::new();
//!
//! let group = RevealGroup::new(TriggerPolicy::once(0.2))
//!     .with_staggered(RevealSpec::rise(30.0, 600.0), 6, 100.0);
//! let sub = orchestrator.register(group)?;
//!
//! // The host feeds visibility fractions however it measures them
//! orchestrator.observe(sub, 0.35);
//!
//! // Each frame, advance time and read styles
//! orchestrator.update(16.67); // ~60fps
//! if let Some(style) = orchestrator.current_style(sub, 0) {
//!     // Render the element with the interpolated style
//! }
//! ```
//!
//! Scheduling is re-entrant-safe: each element has a single pending-timer
//! slot, and a new trigger replaces the old transition instead of
//! stacking a second one.

use std::collections::HashMap;

use super::element::ActiveReveal;
use super::error::MotionError;
use super::events::{EventQueue, RevealEvent};
use super::group::RevealGroup;
use super::observer::{Crossing, ThresholdObserver};
use super::types::{RevealPhase, StyleVector, SubscriptionId};

/// Per-group observation state.
#[derive(Debug)]
struct GroupState {
    group: RevealGroup,
    observer: ThresholdObserver,
    /// Current lifecycle phase per element.
    phases: Vec<RevealPhase>,
    /// In-flight transitions, one slot per element index.
    reveals: HashMap<usize, ActiveReveal>,
}

impl GroupState {
    fn new(group: RevealGroup) -> Self {
        let element_count = group.len();
        let observer = ThresholdObserver::new(group.policy.threshold);
        Self {
            group,
            observer,
            phases: vec![RevealPhase::Hidden; element_count],
            reveals: HashMap::new(),
        }
    }
}

/// Central coordinator for all reveal groups.
#[derive(Debug, Default)]
pub struct RevealOrchestrator {
    /// Registered groups indexed by their subscription handle.
    subscriptions: HashMap<SubscriptionId, GroupState>,

    /// Queue of reveal events emitted during updates.
    event_queue: EventQueue<RevealEvent>,
}

impl RevealOrchestrator {
    /// Create a new orchestrator with no registered groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin observing a group's intersection target.
    ///
    /// The group is validated first: negative delays and thresholds outside
    /// [0, 1] are rejected with no partial registration. An empty group is
    /// accepted and becomes a no-op subscription.
    ///
    /// # Returns
    /// The subscription handle identifying this group.
    pub fn register(&mut self, group: RevealGroup) -> Result<SubscriptionId, MotionError> {
        group.validate()?;

        let id = SubscriptionId::new();
        tracing::debug!(subscription = id.0, elements = group.len(), "group registered");
        self.subscriptions.insert(id, GroupState::new(group));
        Ok(id)
    }

    /// Stop observing a group and cancel its in-flight transitions.
    ///
    /// Cancellation is synchronous: nothing scheduled for this group fires
    /// after this call returns. Safe to call repeatedly; a handle that is
    /// already unregistered is a no-op.
    pub fn unregister(&mut self, id: SubscriptionId) {
        let Some(mut state) = self.subscriptions.remove(&id) else {
            return;
        };

        let mut indices: Vec<usize> = state.reveals.keys().copied().collect();
        indices.sort_unstable();
        for index in indices {
            if let Some(mut reveal) = state.reveals.remove(&index) {
                reveal.cancel();
                self.event_queue.push(RevealEvent::Cancelled {
                    subscription: id,
                    element: index,
                    reveal_id: reveal.id,
                });
            }
        }
        tracing::debug!(subscription = id.0, "group unregistered");
    }

    /// Whether a handle still refers to a live subscription.
    pub fn is_registered(&self, id: SubscriptionId) -> bool {
        self.subscriptions.contains_key(&id)
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Feed a visibility fraction sample for a group's target.
    ///
    /// Crossing the threshold upward schedules each non-revealed element at
    /// `now + delay`; crossing downward reverts elements immediately when
    /// the policy is repeating. Samples for an unregistered handle are
    /// silently dropped so late callbacks from the host lifecycle are
    /// harmless.
    pub fn observe(&mut self, id: SubscriptionId, fraction: f32) {
        let Some(state) = self.subscriptions.get_mut(&id) else {
            tracing::warn!(subscription = id.0, "sample for unregistered handle dropped");
            return;
        };

        match state.observer.sample(fraction) {
            Some(Crossing::Enter) => Self::schedule_group(id, state, &mut self.event_queue),
            Some(Crossing::Exit) => {
                if !state.group.policy.once {
                    Self::hide_group(id, state, &mut self.event_queue);
                }
            }
            None => {}
        }
    }

    /// Trigger a group as if its target had entered the viewport.
    ///
    /// For groups that animate on mount rather than on scroll (a fixed
    /// header, for example) where the host never feeds fraction samples.
    pub fn trigger(&mut self, id: SubscriptionId) {
        let Some(state) = self.subscriptions.get_mut(&id) else {
            return;
        };
        Self::schedule_group(id, state, &mut self.event_queue);
    }

    /// Schedule a reveal for every element that has not already settled.
    ///
    /// Each element's slot is replaced, never stacked: a rapid exit and
    /// re-entry cancels the old transition and starts a fresh one.
    fn schedule_group(
        id: SubscriptionId,
        state: &mut GroupState,
        events: &mut EventQueue<RevealEvent>,
    ) {
        for (index, spec) in state.group.elements.iter().enumerate() {
            if state.phases[index] == RevealPhase::Revealed {
                continue;
            }

            if let Some(mut old) = state.reveals.remove(&index) {
                old.cancel();
                events.push(RevealEvent::Cancelled {
                    subscription: id,
                    element: index,
                    reveal_id: old.id,
                });
            }

            let reveal = ActiveReveal::new(index, spec);
            events.push(RevealEvent::Scheduled {
                subscription: id,
                element: index,
                reveal_id: reveal.id,
            });
            state.phases[index] = RevealPhase::Revealing;
            state.reveals.insert(index, reveal);
        }
    }

    /// Revert every element to hidden, cancelling pending transitions.
    ///
    /// Reverting is immediate; only the reveal direction is animated.
    fn hide_group(
        id: SubscriptionId,
        state: &mut GroupState,
        events: &mut EventQueue<RevealEvent>,
    ) {
        for index in 0..state.group.len() {
            if let Some(mut reveal) = state.reveals.remove(&index) {
                reveal.cancel();
                events.push(RevealEvent::Cancelled {
                    subscription: id,
                    element: index,
                    reveal_id: reveal.id,
                });
            }
            if state.phases[index] != RevealPhase::Hidden {
                state.phases[index] = RevealPhase::Hidden;
                events.push(RevealEvent::Hidden {
                    subscription: id,
                    element: index,
                });
            }
        }
    }

    /// Advance all in-flight transitions by the given delta time.
    ///
    /// This should be called once per frame with the elapsed time in
    /// milliseconds. Finished transitions settle their elements and are
    /// cleaned up.
    pub fn update(&mut self, delta_ms: f32) {
        for (id, state) in self.subscriptions.iter_mut() {
            if state.reveals.is_empty() {
                continue;
            }

            let mut finished: Vec<usize> = Vec::new();
            for (index, reveal) in state.reveals.iter_mut() {
                if !reveal.update(delta_ms) {
                    finished.push(*index);
                }
            }
            finished.sort_unstable();

            for index in finished {
                if let Some(reveal) = state.reveals.remove(&index) {
                    if reveal.is_finished() {
                        state.phases[index] = RevealPhase::Revealed;
                        self.event_queue.push(RevealEvent::Revealed {
                            subscription: *id,
                            element: index,
                        });
                    }
                }
            }
        }
    }

    /// Current lifecycle phase of an element.
    ///
    /// Returns `None` for unregistered handles or out-of-range indices.
    pub fn phase(&self, id: SubscriptionId, element: usize) -> Option<RevealPhase> {
        self.subscriptions
            .get(&id)
            .and_then(|state| state.phases.get(element))
            .copied()
    }

    /// Current style of an element, interpolated while a reveal is in flight.
    pub fn current_style(&self, id: SubscriptionId, element: usize) -> Option<StyleVector> {
        let state = self.subscriptions.get(&id)?;
        let spec = state.group.elements.get(element)?;

        if let Some(reveal) = state.reveals.get(&element) {
            return Some(reveal.current_style());
        }

        match state.phases[element] {
            RevealPhase::Revealed => Some(spec.revealed),
            _ => Some(spec.initial),
        }
    }

    /// Phases and styles of every element in a group, in index order.
    pub fn group_styles(&self, id: SubscriptionId) -> Option<Vec<(RevealPhase, StyleVector)>> {
        let state = self.subscriptions.get(&id)?;
        (0..state.group.len())
            .map(|index| {
                Some((
                    self.phase(id, index)?,
                    self.current_style(id, index)?,
                ))
            })
            .collect()
    }

    /// Number of in-flight transitions across all groups.
    pub fn active_reveal_count(&self) -> usize {
        self.subscriptions
            .values()
            .map(|state| state.reveals.len())
            .sum()
    }

    /// Check if any transitions are currently in flight.
    pub fn has_active_reveals(&self) -> bool {
        self.subscriptions
            .values()
            .any(|state| !state.reveals.is_empty())
    }

    /// Drain all pending reveal events.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        self.event_queue.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::RevealSpec;
    use crate::group::TriggerPolicy;

    fn staggered_group(once: bool) -> RevealGroup {
        // Three elements, delays [0, 100, 200], instant settle on fire
        let policy = if once {
            TriggerPolicy::once(0.2)
        } else {
            TriggerPolicy::repeating(0.2)
        };
        RevealGroup::new(policy)
            .with(RevealSpec::rise(30.0, 0.0))
            .with(RevealSpec::rise(30.0, 0.0).with_delay(100.0))
            .with(RevealSpec::rise(30.0, 0.0).with_delay(200.0))
    }

    #[test]
    fn test_register_rejects_invalid_group() {
        let mut orchestrator = RevealOrchestrator::new();

        let group = RevealGroup::new(TriggerPolicy::once(1.5));
        assert!(orchestrator.register(group).is_err());

        let group =
            RevealGroup::new(TriggerPolicy::default()).with(RevealSpec::default().with_delay(-1.0));
        assert!(orchestrator.register(group).is_err());

        // No partial registration
        assert_eq!(orchestrator.subscription_count(), 0);
    }

    #[test]
    fn test_empty_group_is_noop_subscription() {
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator
            .register(RevealGroup::new(TriggerPolicy::default()))
            .unwrap();

        orchestrator.observe(sub, 1.0);
        orchestrator.update(1000.0);

        assert_eq!(orchestrator.active_reveal_count(), 0);
        assert_eq!(orchestrator.group_styles(sub), Some(vec![]));
    }

    #[test]
    fn test_staggered_once_reveal_sequence() {
        // Scenario: delays [0, 100, 200], once, threshold 0.2, fraction
        // rises 0 -> 0.5 at t=0. Elements settle at t=0, 100, 200 and stay
        // revealed after the fraction later drops to 0.
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator.register(staggered_group(true)).unwrap();

        orchestrator.observe(sub, 0.5);
        orchestrator.update(0.0);
        assert_eq!(orchestrator.phase(sub, 0), Some(RevealPhase::Revealed));
        assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Revealing));
        assert_eq!(orchestrator.phase(sub, 2), Some(RevealPhase::Revealing));

        orchestrator.update(100.0); // t = 100
        assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Revealed));
        assert_eq!(orchestrator.phase(sub, 2), Some(RevealPhase::Revealing));

        orchestrator.update(100.0); // t = 200
        assert_eq!(orchestrator.phase(sub, 2), Some(RevealPhase::Revealed));

        // Leaving the viewport must not undo anything
        orchestrator.observe(sub, 0.0);
        orchestrator.update(16.0);
        for element in 0..3 {
            assert_eq!(orchestrator.phase(sub, element), Some(RevealPhase::Revealed));
            assert_eq!(
                orchestrator.current_style(sub, element),
                Some(StyleVector::settled())
            );
        }
    }

    #[test]
    fn test_repeating_group_exit_cancels_and_hides() {
        // Scenario: same group, once = false. Fraction rises to 0.5 at t=0
        // then drops to 0.0 at t=50. Element 0 reveals then reverts;
        // elements 1 and 2 never reveal.
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator.register(staggered_group(false)).unwrap();

        orchestrator.observe(sub, 0.5);
        orchestrator.update(0.0);
        assert_eq!(orchestrator.phase(sub, 0), Some(RevealPhase::Revealed));

        orchestrator.update(50.0); // t = 50
        orchestrator.observe(sub, 0.0);

        // Reverting is immediate, no delay
        for element in 0..3 {
            assert_eq!(orchestrator.phase(sub, element), Some(RevealPhase::Hidden));
            assert_eq!(
                orchestrator.current_style(sub, element),
                Some(StyleVector::offset_y(30.0))
            );
        }
        assert_eq!(orchestrator.active_reveal_count(), 0);

        // Elements 1 and 2 must never settle, even after time passes
        orchestrator.update(1000.0);
        let events = orchestrator.drain_events();
        let revealed: Vec<usize> = events
            .iter()
            .filter(|e| matches!(e, RevealEvent::Revealed { .. }))
            .map(|e| e.element())
            .collect();
        assert_eq!(revealed, vec![0]);
        let cancelled: Vec<usize> = events
            .iter()
            .filter(|e| matches!(e, RevealEvent::Cancelled { .. }))
            .map(|e| e.element())
            .collect();
        assert_eq!(cancelled, vec![1, 2]);
    }

    #[test]
    fn test_reentry_replaces_pending_slots() {
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator.register(staggered_group(false)).unwrap();

        orchestrator.observe(sub, 0.5);
        orchestrator.update(50.0); // element 1 halfway through its delay

        // Rapid exit and re-entry
        orchestrator.observe(sub, 0.1);
        orchestrator.observe(sub, 0.5);

        // One slot per element, not an accumulation of timers
        assert_eq!(orchestrator.active_reveal_count(), 3);

        // Element 1's delay restarted from the re-entry: 60ms in, it has
        // not fired yet even though 110ms have passed since the first entry
        orchestrator.update(60.0);
        assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Revealing));
        orchestrator.update(40.0);
        assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_reentry_skips_settled_elements_under_once() {
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator.register(staggered_group(true)).unwrap();

        orchestrator.observe(sub, 0.5);
        orchestrator.update(0.0); // element 0 settles

        orchestrator.observe(sub, 0.0);
        orchestrator.observe(sub, 0.5);

        // Element 0 is terminal; only 1 and 2 get fresh slots
        assert_eq!(orchestrator.active_reveal_count(), 2);
        assert_eq!(orchestrator.phase(sub, 0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_once_pending_reveal_survives_exit() {
        // A once-group that leaves the viewport mid-stagger still completes
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator.register(staggered_group(true)).unwrap();

        orchestrator.observe(sub, 0.5);
        orchestrator.update(50.0);
        orchestrator.observe(sub, 0.0);

        orchestrator.update(200.0);
        assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Revealed));
        assert_eq!(orchestrator.phase(sub, 2), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_unregister_cancels_and_is_idempotent() {
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator.register(staggered_group(true)).unwrap();

        orchestrator.observe(sub, 0.5);
        assert!(orchestrator.has_active_reveals());

        orchestrator.unregister(sub);
        assert!(!orchestrator.is_registered(sub));
        assert_eq!(orchestrator.active_reveal_count(), 0);

        // Nothing fires after cancellation
        orchestrator.update(1000.0);
        let events = orchestrator.drain_events();
        assert!(!events.iter().any(|e| matches!(e, RevealEvent::Revealed { .. })));

        // Late operations on the dead handle are no-ops
        orchestrator.unregister(sub);
        orchestrator.observe(sub, 1.0);
        orchestrator.trigger(sub);
        assert_eq!(orchestrator.phase(sub, 0), None);
        assert_eq!(orchestrator.current_style(sub, 0), None);
    }

    #[test]
    fn test_trigger_schedules_without_samples() {
        let mut orchestrator = RevealOrchestrator::new();
        let sub = orchestrator.register(staggered_group(true)).unwrap();

        orchestrator.trigger(sub);
        orchestrator.update(0.0);
        assert_eq!(orchestrator.phase(sub, 0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_interpolated_style_mid_reveal() {
        let mut orchestrator = RevealOrchestrator::new();
        let group = RevealGroup::new(TriggerPolicy::once(0.2)).with(
            RevealSpec::rise(30.0, 100.0).with_easing(crate::easing::EasingFunction::Linear),
        );
        let sub = orchestrator.register(group).unwrap();

        orchestrator.observe(sub, 0.5);
        orchestrator.update(50.0);

        let style = orchestrator.current_style(sub, 0).unwrap();
        assert!((style.opacity - 0.5).abs() < 0.01);
        assert!((style.translate_y - 15.0).abs() < 0.01);
        assert_eq!(orchestrator.phase(sub, 0), Some(RevealPhase::Revealing));
    }

    #[test]
    fn test_groups_are_independent() {
        let mut orchestrator = RevealOrchestrator::new();
        let sub_a = orchestrator.register(staggered_group(true)).unwrap();
        let sub_b = orchestrator.register(staggered_group(true)).unwrap();

        orchestrator.observe(sub_a, 0.5);
        orchestrator.update(250.0);

        assert_eq!(orchestrator.phase(sub_a, 2), Some(RevealPhase::Revealed));
        for element in 0..3 {
            assert_eq!(orchestrator.phase(sub_b, element), Some(RevealPhase::Hidden));
        }
    }
}
