//! The assembled landing page.
//!
//! `LandingPage` owns one reveal orchestrator subscription per section and
//! one feedback controller for the copy buttons, and routes host input
//! (visibility samples, copy clicks, time) to them.

use std::collections::HashMap;

use unveil_config::UnveilConfig;
use unveil_motion::{
    FeedbackController, FeedbackEvent, FeedbackState, MotionError, RevealEvent,
    RevealOrchestrator, RevealPhase, StyleVector, SubscriptionId,
};

use super::clipboard;
use super::content;
use super::sections::Section;

/// Feedback target id for the install command's copy button.
pub const INSTALL_TARGET: &str = "install-command";

/// Feedback target id for a code example's copy button.
pub fn example_target(index: usize) -> String {
    format!("example-{index}")
}

/// The landing page: every section registered for reveal plus the copy
/// feedback state.
#[derive(Debug)]
pub struct LandingPage {
    orchestrator: RevealOrchestrator,
    feedback: FeedbackController,
    subscriptions: HashMap<Section, SubscriptionId>,
}

impl LandingPage {
    /// Build the page: register every section's group and play the
    /// header's on-mount animation.
    pub fn new(config: &UnveilConfig) -> Result<Self, MotionError> {
        let mut orchestrator = RevealOrchestrator::new();
        let mut subscriptions = HashMap::new();

        for section in Section::all() {
            let group = section.build_group(&config.motion);
            let id = orchestrator.register(group)?;
            subscriptions.insert(*section, id);
        }

        // The fixed header animates at mount, not on scroll
        if let Some(&header) = subscriptions.get(&Section::Header) {
            orchestrator.trigger(header);
        }

        Ok(Self {
            orchestrator,
            feedback: FeedbackController::new(config.feedback.reset_delay_ms),
            subscriptions,
        })
    }

    /// Subscription handle for a section, while it is mounted.
    pub fn subscription(&self, section: Section) -> Option<SubscriptionId> {
        self.subscriptions.get(&section).copied()
    }

    /// Feed a visibility fraction for one section's observation target.
    pub fn observe(&mut self, section: Section, fraction: f32) {
        if let Some(&id) = self.subscriptions.get(&section) {
            self.orchestrator.observe(id, fraction);
        }
    }

    /// Advance reveal transitions and the feedback auto-reset.
    pub fn tick(&mut self, delta_ms: f32) {
        self.orchestrator.update(delta_ms);
        self.feedback.update(delta_ms);
    }

    /// Phases and styles of one section's elements, in index order.
    pub fn section_styles(&self, section: Section) -> Vec<(RevealPhase, StyleVector)> {
        self.subscriptions
            .get(&section)
            .and_then(|&id| self.orchestrator.group_styles(id))
            .unwrap_or_default()
    }

    /// Whether every element of a section has settled.
    pub fn section_settled(&self, section: Section) -> bool {
        let styles = self.section_styles(section);
        !styles.is_empty()
            && styles
                .iter()
                .all(|(phase, _)| *phase == RevealPhase::Revealed)
    }

    /// Copy the install command and flash its confirmation indicator.
    pub fn copy_install_command(&mut self) {
        self.copy(INSTALL_TARGET, content::INSTALL_COMMAND);
    }

    /// Copy one code example and flash its confirmation indicator.
    ///
    /// Out-of-range indices are ignored.
    pub fn copy_example(&mut self, index: usize) {
        let Some(example) = content::code_examples().get(index) else {
            return;
        };
        self.copy(&example_target(index), example.code);
    }

    /// Clipboard write plus feedback activation.
    ///
    /// A failed clipboard write is logged and otherwise ignored; the
    /// confirmation is cosmetic and never surfaces an error to the user.
    fn copy(&mut self, target: &str, text: &str) {
        if let Err(err) = clipboard::copy_to_clipboard(text) {
            log::warn!("copy for {target} skipped clipboard: {err:#}");
        }
        self.feedback.activate(target);
    }

    /// Feedback state of a copy target.
    pub fn copy_state(&self, target: &str) -> FeedbackState {
        self.feedback.query(target)
    }

    /// The copy target currently showing its confirmation, if any.
    pub fn active_copy_target(&self) -> Option<&str> {
        self.feedback.active_target()
    }

    /// Drain reveal events collected since the last drain.
    pub fn drain_reveal_events(&mut self) -> Vec<RevealEvent> {
        self.orchestrator.drain_events()
    }

    /// Drain feedback events collected since the last drain.
    pub fn drain_feedback_events(&mut self) -> Vec<FeedbackEvent> {
        self.feedback.drain_events()
    }

    /// Tear the page down: unregister every section and cancel any
    /// pending feedback reset so nothing fires against destroyed targets.
    pub fn unmount(&mut self) {
        for (_, id) in self.subscriptions.drain() {
            self.orchestrator.unregister(id);
        }
        if let Some(target) = self.feedback.active_target().map(str::to_string) {
            self.feedback.reset(&target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> LandingPage {
        LandingPage::new(&UnveilConfig::default()).unwrap()
    }

    #[test]
    fn test_header_reveals_on_mount() {
        let mut page = page();

        // No scroll input at all; only time passes
        page.tick(500.0);
        assert!(page.section_settled(Section::Header));

        // Scroll-triggered sections stay hidden
        assert!(!page.section_settled(Section::Features));
        let styles = page.section_styles(Section::Features);
        assert!(styles
            .iter()
            .all(|(phase, _)| *phase == RevealPhase::Hidden));
    }

    #[test]
    fn test_section_reveals_after_scrolling_into_view() {
        let mut page = page();

        page.observe(Section::Features, 0.5);
        // heading 800ms + last card at 600ms stagger + 600ms + CTA at 300+800
        page.tick(2000.0);

        assert!(page.section_settled(Section::Features));
        // Other sections are untouched
        assert!(!page.section_settled(Section::Pricing));
    }

    #[test]
    fn test_copy_flow_single_active_indicator() {
        let mut page = page();

        page.copy_install_command();
        assert_eq!(page.copy_state(INSTALL_TARGET), FeedbackState::Active);

        page.tick(500.0);
        page.copy_example(1);

        // The install indicator idles the instant the example activates
        assert_eq!(page.copy_state(INSTALL_TARGET), FeedbackState::Idle);
        assert_eq!(page.copy_state(&example_target(1)), FeedbackState::Active);

        // The example indicator expires on its own schedule
        page.tick(2000.0);
        assert_eq!(page.copy_state(&example_target(1)), FeedbackState::Idle);
        assert_eq!(page.active_copy_target(), None);
    }

    #[test]
    fn test_copy_out_of_range_example_is_ignored() {
        let mut page = page();
        page.copy_example(99);
        assert_eq!(page.active_copy_target(), None);
    }

    #[test]
    fn test_unmount_cancels_everything() {
        let mut page = page();

        page.observe(Section::Pricing, 0.9);
        page.copy_install_command();
        page.unmount();

        page.tick(5000.0);
        let reveals = page.drain_reveal_events();
        assert!(!reveals
            .iter()
            .any(|e| matches!(e, RevealEvent::Revealed { .. })));
        let feedback = page.drain_feedback_events();
        assert!(!feedback
            .iter()
            .any(|e| matches!(e, FeedbackEvent::Expired { .. })));

        // Queries on the unmounted page degrade to empty
        assert!(page.section_styles(Section::Pricing).is_empty());
    }
}
