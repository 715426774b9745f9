use super::*;

fn opts() -> ControllerOpts {
    ControllerOpts {
        opacity_step: 20,
        opacity_interval: Duration::from_millis(40),
        progress_step: 2,
        progress_interval: Duration::from_millis(50),
    }
}

#[test]
fn first_observation_only_records_state() {
    let mut live = LivenessRegistry::new();
    let id = live.register();
    let mut c = AnimationController::new(opts());
    assert_eq!(c.state_changed(id, StateName::Normal), None);
    assert_eq!(c.state_changed(id, StateName::Normal), None);
    assert!(!c.opacity_timer().active());
    assert_eq!(c.opacity_timer().interval(), Duration::from_millis(40));
}

#[test]
fn opacity_rises_monotonically_and_entry_ends_at_100() {
    let mut live = LivenessRegistry::new();
    let id = live.register();
    let mut c = AnimationController::new(opts());
    c.state_changed(id, StateName::Normal);

    let t = c.state_changed(id, StateName::Focused).unwrap();
    assert_eq!(t.from, StateName::Normal);
    assert_eq!(t.opacity, 0);
    assert_eq!(t.direction, FadeDirection::In);
    assert!(c.opacity_timer().active());

    let mut last = 0;
    for _ in 0..4 {
        assert_eq!(c.on_opacity_tick(&live), vec![id]);
        let now = c.entry(id).unwrap().opacity;
        assert!(now > last);
        last = now;
    }
    assert_eq!(last, 80);
    assert_eq!(c.on_opacity_tick(&live), vec![id]);
    assert!(c.entry(id).is_none());
    assert!(!c.opacity_timer().active());
    assert_eq!(c.state_changed(id, StateName::Focused), None);
}

#[test]
fn returning_to_normal_fades_out() {
    let mut live = LivenessRegistry::new();
    let id = live.register();
    let mut c = AnimationController::new(opts());
    c.state_changed(id, StateName::Pressed);
    let t = c.state_changed(id, StateName::Normal).unwrap();
    assert_eq!(t.direction, FadeDirection::Out);
    assert_eq!(t.from, StateName::Pressed);
}

#[test]
fn change_mid_transition_restarts_from_recorded_state() {
    let mut live = LivenessRegistry::new();
    let id = live.register();
    let mut c = AnimationController::new(opts());
    c.state_changed(id, StateName::Normal);
    c.state_changed(id, StateName::Focused);
    c.on_opacity_tick(&live);
    let t = c.state_changed(id, StateName::Pressed).unwrap();
    assert_eq!(t.from, StateName::Focused);
    assert_eq!(t.opacity, 0);
    assert_eq!(c.entry(id).unwrap().target, StateName::Pressed);
}

#[test]
fn destroyed_widget_is_dropped_silently() {
    let mut live = LivenessRegistry::new();
    let gone = live.register();
    let kept = live.register();
    let mut c = AnimationController::new(opts());
    for id in [gone, kept] {
        c.state_changed(id, StateName::Normal);
        c.state_changed(id, StateName::Focused);
    }
    c.start_busy(gone);
    live.destroy(gone);

    assert_eq!(c.on_opacity_tick(&live), vec![kept]);
    assert!(c.entry(gone).is_none());
    assert_eq!(c.active_count(), 1);
    assert!(c.on_progress_tick(&live).is_empty());
    assert!(!c.progress_timer().active());
}

#[test]
fn busy_progress_ping_pongs_along_track() {
    let mut live = LivenessRegistry::new();
    let id = live.register();
    let mut c = AnimationController::new(opts());
    c.start_busy(id);
    assert!(c.progress_timer().active());
    assert_eq!(c.busy_position(id, 30.0, 10.0), Some(0.0));

    for _ in 0..5 {
        assert_eq!(c.on_progress_tick(&live), vec![id]);
    }
    assert_eq!(c.busy(id).unwrap().ticks, 5);
    assert_eq!(c.busy_position(id, 30.0, 10.0), Some(10.0));

    for _ in 0..10 {
        c.on_progress_tick(&live);
    }
    assert_eq!(c.busy_position(id, 30.0, 10.0), Some(10.0));

    c.stop_busy(id);
    assert_eq!(c.busy_position(id, 30.0, 10.0), None);
    assert!(!c.progress_timer().active());
}

#[test]
fn ping_pong_bounces_and_handles_degenerate_tracks() {
    assert_eq!(ping_pong(0, 2, 30.0, 10.0), 0.0);
    assert_eq!(ping_pong(10, 2, 30.0, 10.0), 20.0);
    assert_eq!(ping_pong(12, 2, 30.0, 10.0), 16.0);
    assert_eq!(ping_pong(20, 2, 30.0, 10.0), 0.0);
    assert_eq!(ping_pong(3, 2, 10.0, 10.0), 0.0);
    assert_eq!(ping_pong(3, 0, 30.0, 10.0), 0.0);
}

#[test]
fn instant_state_and_destroy_cancel_entries() {
    let mut live = LivenessRegistry::new();
    let id = live.register();
    let mut c = AnimationController::new(opts());
    c.state_changed(id, StateName::Normal);
    c.state_changed(id, StateName::Toggled);
    c.set_state_instant(id, StateName::Normal);
    assert!(c.entry(id).is_none());
    assert!(!c.opacity_timer().active());

    c.state_changed(id, StateName::Focused);
    c.widget_destroyed(id);
    assert!(c.entry(id).is_none());
    assert_eq!(c.state_changed(id, StateName::Pressed), None);
}
