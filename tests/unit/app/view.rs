use super::*;

#[test]
fn idle_shows_placeholder_and_enabled_start() {
    let v = ViewModel::for_state(Phase::Idle, None);
    assert!(v.start.enabled);
    assert_eq!(v.start.label, "🎬 Generate Cat Video");
    assert!(v.stop.is_none());
    assert!(v.error_banner.is_none());
    assert!(matches!(v.stage, Stage::Placeholder { .. }));
}

#[test]
fn generating_disables_start_and_hides_stage() {
    let v = ViewModel::for_state(Phase::Generating, None);
    assert!(!v.start.enabled);
    assert_eq!(v.start.label, "🎬 Generating...");
    assert!(v.stop.is_none());
    assert_eq!(v.stage, Stage::Empty);
}

#[test]
fn playing_shows_surface_and_stop() {
    let v = ViewModel::for_state(Phase::Playing, None);
    assert!(!v.start.enabled);
    assert!(v.stop.is_some());
    assert_eq!(v.stage, Stage::Surface);
}

#[test]
fn failed_generation_shows_banner_with_placeholder() {
    let v = ViewModel::for_state(Phase::Idle, Some("Failed to generate cat video"));
    assert_eq!(v.error_banner.as_deref(), Some("Failed to generate cat video"));
    assert!(v.start.enabled);
    assert!(v.to_string().contains("! Failed to generate cat video"));
}

#[test]
fn json_shape_is_stable() {
    let v = serde_json::to_value(ViewModel::for_state(Phase::Playing, None)).unwrap();
    assert_eq!(v["stage"]["kind"], "surface");
    assert_eq!(v["start"]["enabled"], false);
    assert_eq!(v["title"], "🐱 Cat Video Generator");
}
