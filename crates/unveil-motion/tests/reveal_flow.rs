use unveil_motion::{
    EasingFunction, FeedbackController, FeedbackState, RevealEvent, RevealGroup, RevealSpec,
    RevealOrchestrator, RevealPhase, TriggerPolicy,
};

fn card_grid(once: bool, count: usize) -> RevealGroup {
    let policy = if once {
        TriggerPolicy::once(0.2)
    } else {
        TriggerPolicy::repeating(0.2)
    };
    RevealGroup::new(policy).with_staggered(
        RevealSpec::rise(30.0, 600.0).with_easing(EasingFunction::Linear),
        count,
        100.0,
    )
}

#[test]
fn staggered_cards_settle_in_index_order() {
    let mut orchestrator = RevealOrchestrator::new();
    let sub = orchestrator.register(card_grid(true, 6)).unwrap();

    orchestrator.observe(sub, 0.5);

    // Tick in 50ms frames until everything settles
    let mut elapsed = 0.0;
    while orchestrator.has_active_reveals() {
        orchestrator.update(50.0);
        elapsed += 50.0;
        assert!(elapsed <= 2000.0, "reveals did not settle in time");
    }

    let settled: Vec<usize> = orchestrator
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            RevealEvent::Revealed { element, .. } => Some(element),
            _ => None,
        })
        .collect();

    // delays are index * 100ms with equal durations, so settle order
    // follows index order
    assert_eq!(settled, vec![0, 1, 2, 3, 4, 5]);
    // last card: 500ms delay + 600ms duration
    assert!((1100.0..=1200.0).contains(&elapsed), "settled at {elapsed}ms");
}

#[test]
fn repeating_group_hides_and_reveals_again() {
    let mut orchestrator = RevealOrchestrator::new();
    let sub = orchestrator.register(card_grid(false, 2)).unwrap();

    // First pass: reveal fully
    orchestrator.observe(sub, 0.8);
    orchestrator.update(800.0);
    assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Revealed));

    // Scroll away: immediate revert, no animation
    orchestrator.observe(sub, 0.05);
    assert_eq!(orchestrator.phase(sub, 0), Some(RevealPhase::Hidden));
    assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Hidden));
    assert_eq!(orchestrator.active_reveal_count(), 0);

    // Scroll back: the whole choreography replays
    orchestrator.observe(sub, 0.8);
    assert_eq!(orchestrator.active_reveal_count(), 2);
    orchestrator.update(800.0);
    assert_eq!(orchestrator.phase(sub, 0), Some(RevealPhase::Revealed));
    assert_eq!(orchestrator.phase(sub, 1), Some(RevealPhase::Revealed));
}

#[test]
fn reveals_and_feedback_are_decoupled() {
    let mut orchestrator = RevealOrchestrator::new();
    let mut feedback = FeedbackController::new(2000.0);
    let sub = orchestrator.register(card_grid(true, 3)).unwrap();

    orchestrator.observe(sub, 0.5);
    feedback.activate("install-command");

    // Tearing down the scroll state leaves the confirmation untouched
    orchestrator.unregister(sub);
    orchestrator.update(1000.0);
    feedback.update(1000.0);
    assert_eq!(feedback.query("install-command"), FeedbackState::Active);

    feedback.update(1000.0);
    assert_eq!(feedback.query("install-command"), FeedbackState::Idle);
}
