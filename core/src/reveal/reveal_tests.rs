//! Tests for the reveal pipeline
//!
//! Covers one-shot entry, idempotent sweeps and stagger timing.

use folio_types::{AnimationIntent, RevealConfig};

use super::*;

fn candidate(key: u32, intent: AnimationIntent, offset_top: f64) -> Candidate {
    Candidate {
        key: ElementKey(key),
        intent,
        offset_top,
    }
}

fn pipeline() -> RevealPipeline {
    RevealPipeline::new(RevealConfig::default())
}

#[test]
fn test_stagger_delay_examples() {
    assert_eq!(stagger_delay(350.0, 300.0, 0.1), 5.0);
    assert_eq!(stagger_delay(1000.0, 300.0, 0.1), 10.0);
    assert_eq!(stagger_delay(0.0, 300.0, 0.1), 0.0);
    assert_eq!(stagger_delay(299.0, 300.0, 0.1), 29.9);
    assert_eq!(stagger_delay(600.0, 300.0, 0.1), 0.0);
}

#[test]
fn test_stagger_delay_degenerate_inputs() {
    assert_eq!(stagger_delay(-50.0, 300.0, 0.1), 25.0);
    assert_eq!(stagger_delay(f64::NAN, 300.0, 0.1), 0.0);
    assert_eq!(stagger_delay(120.0, 0.0, 0.1), 0.0);
}

#[test]
fn test_sweep_is_idempotent() {
    let mut p = pipeline();
    let first = p.sweep([
        candidate(0, AnimationIntent::FadeUp, 100.0),
        candidate(1, AnimationIntent::ZoomIn, 400.0),
    ]);
    assert_eq!(first, vec![ElementKey(0), ElementKey(1)]);

    // Resize sweep sees the same elements plus one new one
    let second = p.sweep([
        candidate(0, AnimationIntent::FadeUp, 90.0),
        candidate(1, AnimationIntent::ZoomIn, 380.0),
        candidate(2, AnimationIntent::SlideLeft, 900.0),
    ]);
    assert_eq!(second, vec![ElementKey(2)]);
    assert_eq!(p.registered(), 3);
}

#[test]
fn test_resize_refreshes_pending_offset() {
    let mut p = pipeline();
    p.sweep([candidate(0, AnimationIntent::FadeIn, 350.0)]);
    p.sweep([candidate(0, AnimationIntent::FadeIn, 1000.0)]);

    let plan = p.on_intersection(ElementKey(0), 0.5).unwrap();
    assert_eq!(plan.delay_ms, 10.0);
}

#[test]
fn test_entry_requires_threshold() {
    let mut p = pipeline();
    p.sweep([candidate(0, AnimationIntent::FadeUp, 350.0)]);

    assert!(p.on_intersection(ElementKey(0), 0.0).is_none());
    assert!(p.on_intersection(ElementKey(0), 0.05).is_none());
    assert_eq!(p.state(ElementKey(0)), Some(RevealState::Registered));

    let plan = p.on_intersection(ElementKey(0), 0.1).unwrap();
    assert_eq!(plan.delay_ms, 5.0);
    assert_eq!(plan.settle_after_ms, Some(600));
    assert_eq!(p.state(ElementKey(0)), Some(RevealState::Entered));
}

#[test]
fn test_entry_is_one_shot() {
    let mut p = pipeline();
    p.sweep([candidate(0, AnimationIntent::SlideUp, 0.0)]);

    assert!(p.on_intersection(ElementKey(0), 0.3).is_some());
    assert!(p.on_intersection(ElementKey(0), 0.9).is_none());
    assert!(p.on_intersection(ElementKey(0), 0.0).is_none());
}

#[test]
fn test_unknown_key_is_ignored() {
    let mut p = pipeline();
    assert!(p.on_intersection(ElementKey(42), 1.0).is_none());
    assert_eq!(p.state(ElementKey(42)), None);
}

#[test]
fn test_non_directional_does_not_settle() {
    let mut p = pipeline();
    p.sweep([
        candidate(0, AnimationIntent::ZoomIn, 0.0),
        candidate(1, AnimationIntent::FadeIn, 0.0),
    ]);
    assert_eq!(p.on_intersection(ElementKey(0), 1.0).unwrap().settle_after_ms, None);
    assert_eq!(p.on_intersection(ElementKey(1), 1.0).unwrap().settle_after_ms, None);
}

#[test]
fn test_revealed_flips_once_and_never_reverts() {
    let mut p = pipeline();
    p.sweep([candidate(0, AnimationIntent::SlideRight, 10.0)]);
    p.on_intersection(ElementKey(0), 1.0).unwrap();

    assert!(p.mark_revealed(ElementKey(0)));
    assert!(!p.mark_revealed(ElementKey(0)));
    assert_eq!(p.state(ElementKey(0)), Some(RevealState::Revealed));

    assert!(p.mark_settled(ElementKey(0)));
    assert!(!p.mark_settled(ElementKey(0)));
    assert!(!p.mark_revealed(ElementKey(0)));
    assert_eq!(p.state(ElementKey(0)), Some(RevealState::Settled));

    // A later sweep must not reset anything
    assert!(p.sweep([candidate(0, AnimationIntent::SlideRight, 10.0)]).is_empty());
    assert!(p.on_intersection(ElementKey(0), 1.0).is_none());
    assert_eq!(p.state(ElementKey(0)), Some(RevealState::Settled));
    assert_eq!(p.revealed(), 1);
}

#[test]
fn test_settle_requires_reveal() {
    let mut p = pipeline();
    p.sweep([candidate(0, AnimationIntent::FadeUp, 0.0)]);
    p.on_intersection(ElementKey(0), 1.0).unwrap();
    assert!(!p.mark_settled(ElementKey(0)));
}

#[test]
fn test_reveal_all_pending_degrades() {
    let mut p = pipeline();
    p.sweep([
        candidate(1, AnimationIntent::FadeUp, 350.0),
        candidate(0, AnimationIntent::ZoomIn, 1000.0),
    ]);
    p.on_intersection(ElementKey(1), 1.0).unwrap();

    let plans = p.reveal_all_pending();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].key, ElementKey(0));
    assert_eq!(plans[0].delay_ms, 0.0);
    assert_eq!(plans[0].settle_after_ms, None);
    assert!(p.reveal_all_pending().is_empty());
}

#[test]
fn test_degraded_reveal_keeps_settle_step() {
    let mut p = pipeline();
    p.sweep([candidate(0, AnimationIntent::SlideLeft, 1000.0)]);

    let plans = p.reveal_all_pending();
    assert_eq!(plans[0].delay_ms, 0.0);
    assert_eq!(plans[0].settle_after_ms, Some(600));
    assert!(p.mark_revealed(ElementKey(0)));
}

#[test]
fn test_reveal_requires_entry() {
    let mut p = pipeline();
    // Never registered
    assert!(!p.mark_revealed(ElementKey(9)));
    assert_eq!(p.state(ElementKey(9)), None);

    // Registered but still below the threshold
    p.sweep([candidate(0, AnimationIntent::FadeUp, 0.0)]);
    assert!(!p.mark_revealed(ElementKey(0)));
    assert_eq!(p.state(ElementKey(0)), Some(RevealState::Registered));
    assert_eq!(p.revealed(), 0);

    p.on_intersection(ElementKey(0), 1.0).unwrap();
    assert!(p.mark_revealed(ElementKey(0)));
    assert_eq!(p.revealed(), 1);
}

#[test]
fn test_reduced_motion_removes_stagger() {
    let mut p = pipeline();
    p.set_reduced_motion(true);
    p.sweep([candidate(0, AnimationIntent::FadeUp, 350.0)]);
    let plan = p.on_intersection(ElementKey(0), 1.0).unwrap();
    assert_eq!(plan.delay_ms, 0.0);
    assert_eq!(plan.settle_after_ms, Some(600));
}

#[test]
fn test_key_allocator_and_parse() {
    let mut keys = KeyAllocator::default();
    assert_eq!(keys.next_key(), ElementKey(0));
    assert_eq!(keys.next_key(), ElementKey(1));
    assert_eq!(ElementKey::parse(" 7 "), Some(ElementKey(7)));
    assert_eq!(ElementKey::parse("x"), None);
    assert_eq!(ElementKey(3).to_string(), "3");
}
