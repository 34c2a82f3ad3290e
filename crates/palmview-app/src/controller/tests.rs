use chrono::TimeZone;

use palmview_common::notifications::NotificationKind;

use super::messages;
use super::*;

fn controller() -> PreviewController {
    PreviewController::new("%H:%M")
}

fn loaded_controller(url: &str) -> PreviewController {
    let mut c = controller();
    let effects = c.request_load(url);
    assert!(matches!(effects[1], Effect::SetFrameSource { .. }));
    c
}

fn notification_of(effects: &[Effect]) -> &Notification {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Notify(n) => Some(n),
            _ => None,
        })
        .expect("expected a notification effect")
}

// ---------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------

#[test]
fn scheme_less_input_is_normalized_and_accepted() {
    // Scenario A
    let mut c = controller();
    let effects = c.request_load("google.com");

    assert_eq!(effects[0], Effect::SetLoadIndicator(LoadIndicator::Loading));
    assert_eq!(
        effects[1],
        Effect::SetFrameSource {
            url: "https://google.com".into(),
            attempt: 1,
        }
    );
    assert_eq!(effects[2], Effect::SetFrameVisibility(FrameVisibility::Active));

    assert_eq!(c.current_url(), "https://google.com");
    assert_eq!(c.indicator(), LoadIndicator::Loading);
    assert_eq!(c.frame_visibility(), FrameVisibility::Active);
}

#[test]
fn indicator_engages_before_frame_source_assignment() {
    let mut c = controller();
    let effects = c.request_load("https://example.com");

    let indicator_pos = effects
        .iter()
        .position(|e| matches!(e, Effect::SetLoadIndicator(_)))
        .unwrap();
    let source_pos = effects
        .iter()
        .position(|e| matches!(e, Effect::SetFrameSource { .. }))
        .unwrap();
    assert!(indicator_pos < source_pos);
}

#[test]
fn empty_input_is_rejected_without_state_change() {
    // Scenario B
    let mut c = controller();
    for raw in ["", "   ", "\t"] {
        let effects = c.request_load(raw);
        assert_eq!(effects.len(), 1);
        let n = notification_of(&effects);
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, messages::EMPTY_URL);

        assert_eq!(c.current_url(), "");
        assert_eq!(c.indicator(), LoadIndicator::Idle);
        assert_eq!(c.frame_visibility(), FrameVisibility::Placeholder);
    }
}

#[test]
fn malformed_input_is_rejected_without_state_change() {
    // Scenario C: strict parse fails, permissive pattern fails
    let mut c = controller();
    let effects = c.request_load("not a url!!");

    assert_eq!(effects.len(), 1);
    let n = notification_of(&effects);
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.message, messages::INVALID_URL);

    assert_eq!(c.current_url(), "");
    assert_eq!(c.frame_visibility(), FrameVisibility::Placeholder);
}

#[test]
fn load_completion_disengages_indicator_and_notifies() {
    let mut c = loaded_controller("https://example.com");
    let effects = c.frame_loaded(1);

    assert_eq!(effects[0], Effect::SetLoadIndicator(LoadIndicator::Idle));
    let n = notification_of(&effects);
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(n.message, messages::LOAD_SUCCESS);

    assert_eq!(c.indicator(), LoadIndicator::Idle);
    assert_eq!(c.frame_visibility(), FrameVisibility::Active);
}

#[test]
fn load_failure_reverts_to_placeholder_but_keeps_url() {
    // Scenario E
    let mut c = loaded_controller("https://example.com");
    let effects = c.frame_failed(1);

    assert_eq!(effects[0], Effect::SetLoadIndicator(LoadIndicator::Idle));
    let n = notification_of(&effects);
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.message, messages::LOAD_ERROR);
    assert!(effects.contains(&Effect::SetFrameVisibility(FrameVisibility::Placeholder)));

    assert_eq!(c.indicator(), LoadIndicator::Idle);
    assert_eq!(c.frame_visibility(), FrameVisibility::Placeholder);
    // The failing URL stays so refresh can retry it
    assert_eq!(c.current_url(), "https://example.com");
}

#[test]
fn stale_completions_are_discarded() {
    let mut c = loaded_controller("https://first.com");
    // A second load supersedes the first
    c.request_load("https://second.com");

    assert!(c.frame_loaded(1).is_empty());
    assert!(c.frame_failed(1).is_empty());
    // The live attempt still completes normally
    assert!(!c.frame_loaded(2).is_empty());
}

#[test]
fn failure_of_superseded_attempt_does_not_hide_the_new_page() {
    let mut c = loaded_controller("https://first.com");
    c.request_load("https://second.com");

    c.frame_failed(1);
    assert_eq!(c.frame_visibility(), FrameVisibility::Active);
    assert_eq!(c.indicator(), LoadIndicator::Loading);
}

// ---------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------

#[test]
fn refresh_reassigns_same_url_without_revalidation() {
    // Scenario D
    let mut c = loaded_controller("https://example.com");
    c.frame_loaded(1);

    let effects = c.refresh();
    assert_eq!(
        effects[0],
        Effect::SetFrameSource {
            url: "https://example.com".into(),
            attempt: 2,
        }
    );
    let n = notification_of(&effects);
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(n.message, messages::REFRESHED);

    // No validation effects on the refresh path: only source + toast
    assert_eq!(effects.len(), 2);
}

#[test]
fn refresh_without_url_is_an_informational_rejection() {
    // Scenario F
    let mut c = controller();
    let effects = c.refresh();

    assert_eq!(effects.len(), 1);
    let n = notification_of(&effects);
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.message, messages::NO_URL_TO_REFRESH);
    assert_eq!(c.frame_visibility(), FrameVisibility::Placeholder);
}

#[test]
fn refresh_retries_a_failed_url() {
    let mut c = loaded_controller("https://blocked.example");
    c.frame_failed(1);

    let effects = c.refresh();
    assert_eq!(
        effects[0],
        Effect::SetFrameSource {
            url: "https://blocked.example".into(),
            attempt: 2,
        }
    );
}

// ---------------------------------------------------------------------
// Shell resync
// ---------------------------------------------------------------------

#[test]
fn resync_is_empty_before_any_load() {
    let c = controller();
    assert!(c.resync_frame().is_empty());
}

#[test]
fn resync_replays_an_active_page_without_advancing_the_attempt() {
    let mut c = loaded_controller("https://example.com");
    c.frame_loaded(1);

    assert_eq!(
        c.resync_frame(),
        vec![Effect::SetFrameSource {
            url: "https://example.com".into(),
            attempt: 1,
        }]
    );
}

#[test]
fn resync_is_empty_after_a_failure_reverted_to_placeholder() {
    let mut c = loaded_controller("https://example.com");
    c.frame_failed(1);
    assert!(c.resync_frame().is_empty());
}

// ---------------------------------------------------------------------
// Fullscreen
// ---------------------------------------------------------------------

#[test]
fn fullscreen_toggle_follows_the_window_state() {
    let mut c = controller();

    let effects = c.toggle_fullscreen(false);
    assert_eq!(effects[0], Effect::SetFullscreen(true));
    assert_eq!(
        effects[1],
        Effect::SetFullscreenAffordance(FullscreenAffordance::Exit)
    );

    let effects = c.toggle_fullscreen(true);
    assert_eq!(effects[0], Effect::SetFullscreen(false));
    assert_eq!(
        effects[1],
        Effect::SetFullscreenAffordance(FullscreenAffordance::Enter)
    );
}

#[test]
fn double_toggle_restores_the_original_affordance() {
    let mut c = controller();
    let first = c.toggle_fullscreen(false);
    let second = c.toggle_fullscreen(true);

    let affordance_of = |effects: &[Effect]| {
        effects.iter().find_map(|e| match e {
            Effect::SetFullscreenAffordance(a) => Some(*a),
            _ => None,
        })
    };
    assert_eq!(affordance_of(&first), Some(FullscreenAffordance::Exit));
    assert_eq!(affordance_of(&second), Some(FullscreenAffordance::Enter));
}

// ---------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------

#[test]
fn clock_formats_hour_and_minute() {
    let c = controller();
    let now = chrono::Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 33).unwrap();
    let effects = c.clock_tick(now);
    assert_eq!(effects, vec![Effect::SetClock("14:05".into())]);
}

#[test]
fn clock_honors_the_configured_format() {
    let c = PreviewController::new("%I:%M %p");
    let now = chrono::Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 0).unwrap();
    let effects = c.clock_tick(now);
    assert_eq!(effects, vec![Effect::SetClock("02:05 PM".into())]);
}
