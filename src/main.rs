//! Scripted tour of the landing page.
//!
//! Walks the viewport down the page at a fixed scroll speed, feeding each
//! section's visible fraction into the reveal orchestrator and ticking the
//! animation clock, then performs a couple of copy actions against the
//! code samples. Staggered reveals, one-shot trigger policies and copy
//! confirmations superseding each other all show up in the event log.

use anyhow::Result;
use unveil_config::UnveilConfig;
use unveil_motion::{FeedbackEvent, RevealEvent, RevealPhase};
use unveil_page::{LandingPage, Section};

/// Simulated viewport height in pixels.
const VIEWPORT_HEIGHT: f32 = 900.0;

/// Document heights of the scroll-observed sections, in order.
const SECTION_HEIGHTS: [(Section, f32); 5] = [
    (Section::Hero, 900.0),
    (Section::Features, 1200.0),
    (Section::CodeExamples, 1400.0),
    (Section::Pricing, 1000.0),
    (Section::Footer, 600.0),
];

/// Fraction of a section's bounding box inside the viewport.
fn visible_fraction(section_top: f32, section_height: f32, scroll_y: f32) -> f32 {
    let viewport_bottom = scroll_y + VIEWPORT_HEIGHT;
    let section_bottom = section_top + section_height;
    let overlap = viewport_bottom.min(section_bottom) - scroll_y.max(section_top);
    (overlap / section_height).clamp(0.0, 1.0)
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = UnveilConfig::load();
    let mut page = LandingPage::new(&config)?;

    let document_height: f32 = SECTION_HEIGHTS.iter().map(|(_, height)| height).sum();
    let max_scroll = (document_height - VIEWPORT_HEIGHT).max(0.0);

    let mut scroll_y = 0.0f32;
    let mut clock_ms = 0.0f32;
    let mut settled: Vec<Section> = Vec::new();
    let mut copied_install_at: Option<f32> = None;
    let mut copied_example = false;

    loop {
        // Feed current visibility fractions, section tops stacked in order
        let mut top = 0.0f32;
        for (section, height) in SECTION_HEIGHTS {
            page.observe(section, visible_fraction(top, height, scroll_y));
            top += height;
        }

        page.tick(config.tour.tick_ms);
        clock_ms += config.tour.tick_ms;
        if scroll_y < max_scroll {
            scroll_y = (scroll_y + config.tour.scroll_step).min(max_scroll);
        }

        for event in page.drain_reveal_events() {
            match event {
                RevealEvent::Revealed { subscription, element } => {
                    log::debug!("revealed element {element} of {subscription:?}");
                }
                RevealEvent::Scheduled { subscription, element, .. } => {
                    log::trace!("scheduled element {element} of {subscription:?}");
                }
                _ => {}
            }
        }
        for event in page.drain_feedback_events() {
            match event {
                FeedbackEvent::Activated { target } => log::info!("copied: {target}"),
                FeedbackEvent::Superseded { target } => {
                    log::info!("copy indicator replaced: {target}")
                }
                FeedbackEvent::Expired { target } => log::info!("copy indicator expired: {target}"),
                FeedbackEvent::Reset { target } => log::debug!("copy indicator reset: {target}"),
            }
        }

        for (section, _) in SECTION_HEIGHTS {
            if !settled.contains(&section) && page.section_settled(section) {
                settled.push(section);
                log::info!("#{} settled at t={:.0}ms", section.anchor(), clock_ms);
            }
        }

        // Once the code samples are on screen, copy the install command,
        // then half a second later copy the first example so the second
        // confirmation supersedes the first.
        if copied_install_at.is_none() && page.section_settled(Section::CodeExamples) {
            page.copy_install_command();
            copied_install_at = Some(clock_ms);
        }
        if let Some(at) = copied_install_at {
            if !copied_example && clock_ms - at >= 500.0 {
                page.copy_example(0);
                copied_example = true;
            }
        }

        let done = scroll_y >= max_scroll
            && settled.len() == SECTION_HEIGHTS.len()
            && copied_example
            && page.active_copy_target().is_none();
        if done {
            break;
        }

        // Backstop for misconfigured tours (zero scroll step, huge delays)
        if clock_ms > 600_000.0 {
            log::warn!("tour did not complete, stopping");
            break;
        }
    }

    let header_done = page
        .section_styles(Section::Header)
        .iter()
        .all(|(phase, _)| *phase == RevealPhase::Revealed);
    println!(
        "tour finished at t={:.0}ms: header {}, {} sections settled, clipboard targets exercised",
        clock_ms,
        if header_done { "settled" } else { "pending" },
        settled.len(),
    );

    page.unmount();
    Ok(())
}
