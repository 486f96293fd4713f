//! Per-section reveal group construction.
//!
//! Each page section declares its reveal choreography here: which style
//! pair every element starts from, how long it animates, and how the
//! elements are staggered relative to the section's trigger. The numbers
//! are the page design's (800ms heading blocks, 600ms cards staggered
//! 100ms apart, call-to-action blocks trailing by 300ms) and are
//! overridable through `MotionConfig`.

use serde::{Deserialize, Serialize};
use unveil_config::MotionConfig;
use unveil_motion::{RevealGroup, RevealSpec, StyleVector, TriggerPolicy};

use super::content;

/// Vertical offset the section blocks rise from, in pixels.
const RISE_OFFSET: f32 = 30.0;
/// Smaller offset used by the footer columns.
const FOOTER_RISE_OFFSET: f32 = 20.0;
/// Offset the fixed header drops in from.
const HEADER_DROP_OFFSET: f32 = -20.0;
/// Scale the install chip pops in from.
const INSTALL_CHIP_SCALE: f32 = 0.95;
/// The header animates faster than scroll-triggered blocks.
const HEADER_DURATION_MS: f32 = 500.0;

/// The page's sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Fixed navigation header; animates on mount, not on scroll.
    Header,
    Hero,
    Features,
    CodeExamples,
    Pricing,
    Footer,
}

impl Section {
    /// All sections in document order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Header,
            Section::Hero,
            Section::Features,
            Section::CodeExamples,
            Section::Pricing,
            Section::Footer,
        ]
    }

    /// Sections observed for viewport intersection (everything but the
    /// header, which triggers at mount).
    pub fn scrollable() -> &'static [Section] {
        &[
            Section::Hero,
            Section::Features,
            Section::CodeExamples,
            Section::Pricing,
            Section::Footer,
        ]
    }

    /// Anchor id of this section.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::Features => "features",
            Section::CodeExamples => "code",
            Section::Pricing => "pricing",
            Section::Footer => "footer",
        }
    }

    /// Build this section's reveal group.
    pub fn build_group(&self, motion: &MotionConfig) -> RevealGroup {
        match self {
            Section::Header => header_group(motion),
            Section::Hero => hero_group(motion),
            Section::Features => features_group(motion),
            Section::CodeExamples => code_examples_group(motion),
            Section::Pricing => pricing_group(motion),
            Section::Footer => footer_group(motion),
        }
    }
}

fn policy(motion: &MotionConfig) -> TriggerPolicy {
    TriggerPolicy {
        once: motion.once,
        threshold: motion.threshold,
    }
}

/// Fixed header: a single element dropping in from above at mount time.
fn header_group(motion: &MotionConfig) -> RevealGroup {
    RevealGroup::new(policy(motion)).with(
        RevealSpec::new(
            StyleVector::offset_y(HEADER_DROP_OFFSET),
            StyleVector::settled(),
        )
        .with_duration(HEADER_DURATION_MS),
    )
}

/// Hero: headline, subhead and CTA row in sequence.
fn hero_group(motion: &MotionConfig) -> RevealGroup {
    let stagger = 2.0 * motion.stagger_increment_ms;
    RevealGroup::new(policy(motion))
        .with(RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms))
        .with(RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms).with_delay(stagger))
        .with(RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms).with_delay(2.0 * stagger))
}

/// Features: heading block, six staggered cards, trailing CTA.
fn features_group(motion: &MotionConfig) -> RevealGroup {
    RevealGroup::new(policy(motion))
        .with(RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms))
        .with_staggered(
            RevealSpec::rise(RISE_OFFSET, motion.card_duration_ms),
            content::features().len(),
            motion.stagger_increment_ms,
        )
        .with(
            RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms)
                .with_delay(motion.cta_delay_ms),
        )
}

/// Code examples: heading, install chip popping in, three staggered
/// sample cards, trailing CTA.
fn code_examples_group(motion: &MotionConfig) -> RevealGroup {
    RevealGroup::new(policy(motion))
        .with(RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms))
        .with(
            RevealSpec::pop(INSTALL_CHIP_SCALE, motion.card_duration_ms)
                .with_delay(2.0 * motion.stagger_increment_ms),
        )
        .with_staggered(
            RevealSpec::rise(RISE_OFFSET, motion.card_duration_ms),
            content::code_examples().len(),
            motion.stagger_increment_ms,
        )
        .with(
            RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms)
                .with_delay(motion.cta_delay_ms),
        )
}

/// Pricing: heading block and three staggered plan cards.
fn pricing_group(motion: &MotionConfig) -> RevealGroup {
    RevealGroup::new(policy(motion))
        .with(RevealSpec::rise(RISE_OFFSET, motion.heading_duration_ms))
        .with_staggered(
            RevealSpec::rise(RISE_OFFSET, motion.card_duration_ms),
            content::pricing_plans().len(),
            motion.stagger_increment_ms,
        )
}

/// Footer: brand column, link columns and bottom bar, gently staggered.
fn footer_group(motion: &MotionConfig) -> RevealGroup {
    // Brand column plus each link column, then the bottom bar
    let column_count = 1 + content::footer_columns().len();
    RevealGroup::new(policy(motion))
        .with_staggered(
            RevealSpec::rise(FOOTER_RISE_OFFSET, motion.card_duration_ms),
            column_count,
            motion.stagger_increment_ms,
        )
        .with(
            RevealSpec::rise(FOOTER_RISE_OFFSET, motion.card_duration_ms)
                .with_delay(motion.cta_delay_ms),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_match_content() {
        let motion = MotionConfig::default();

        // heading + 6 cards + CTA
        assert_eq!(Section::Features.build_group(&motion).len(), 8);
        // heading + install chip + 3 samples + CTA
        assert_eq!(Section::CodeExamples.build_group(&motion).len(), 6);
        // heading + 3 plans
        assert_eq!(Section::Pricing.build_group(&motion).len(), 5);
        // brand + 2 link columns + bottom bar
        assert_eq!(Section::Footer.build_group(&motion).len(), 4);
        assert_eq!(Section::Header.build_group(&motion).len(), 1);
    }

    #[test]
    fn test_all_groups_validate() {
        let motion = MotionConfig::default();
        for section in Section::all() {
            assert!(section.build_group(&motion).validate().is_ok(), "{:?}", section);
        }
    }

    #[test]
    fn test_cards_stagger_in_index_order() {
        let motion = MotionConfig::default();
        let group = Section::Features.build_group(&motion);

        // Cards occupy indices 1..=6, staggered 100ms apart
        for (offset, element) in group.elements[1..7].iter().enumerate() {
            assert_eq!(element.delay_ms, offset as f32 * 100.0);
        }

        // Delays never decrease within the card run
        let delays: Vec<f32> = group.elements[1..7].iter().map(|e| e.delay_ms).collect();
        let mut sorted = delays.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(delays, sorted);
    }

    #[test]
    fn test_scrollable_excludes_header() {
        assert!(!Section::scrollable().contains(&Section::Header));
        assert_eq!(Section::scrollable().len(), Section::all().len() - 1);
    }

    #[test]
    fn test_header_drops_from_above() {
        let motion = MotionConfig::default();
        let group = Section::Header.build_group(&motion);
        assert_eq!(group.elements[0].initial.translate_y, -20.0);
        assert_eq!(group.elements[0].duration_ms, 500.0);
    }
}
