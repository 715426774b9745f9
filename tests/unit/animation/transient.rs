use super::*;

const FADE: Duration = Duration::from_millis(300);

#[test]
fn fade_runs_from_start_to_end_value() {
    let mut live = LivenessRegistry::new();
    let bar = live.register();
    let mut table = TransientTable::new(Duration::from_millis(40));
    let t0 = Instant::now();
    table.start(bar, 1.0, 0.0, t0, FADE, Ease::Linear);
    assert!(table.timer().active());

    let mid = table.value(bar, t0 + Duration::from_millis(150)).unwrap();
    assert!((mid - 0.5).abs() < 1e-3, "{mid}");

    assert_eq!(table.on_transient_tick(t0 + Duration::from_millis(100), &live), vec![bar]);
    assert!(table.contains(bar));
    assert_eq!(table.on_transient_tick(t0 + FADE, &live), vec![bar]);
    assert!(table.is_empty());
    assert!(!table.timer().active());
}

#[test]
fn restart_continues_from_current_value() {
    let mut live = LivenessRegistry::new();
    let bar = live.register();
    let mut table = TransientTable::new(Duration::from_millis(40));
    let t0 = Instant::now();
    table.start(bar, 0.0, 1.0, t0, FADE, Ease::Linear);
    let t1 = t0 + Duration::from_millis(150);
    table.start(bar, 1.0, 0.0, t1, FADE, Ease::Linear);
    let v = table.value(bar, t1).unwrap();
    assert!((v - 0.5).abs() < 1e-3, "{v}");
    assert_eq!(table.len(), 1);
}

#[test]
fn destroyed_owner_is_removed() {
    let mut live = LivenessRegistry::new();
    let a = live.register();
    let b = live.register();
    let mut table = TransientTable::new(Duration::from_millis(40));
    let t0 = Instant::now();
    table.start(a, 1.0, 0.0, t0, FADE, Ease::OutQuad);
    table.start(b, 1.0, 0.0, t0, FADE, Ease::OutQuad);

    table.owner_destroyed(a);
    assert!(!table.contains(a));

    live.destroy(b);
    assert!(table.on_transient_tick(t0, &live).is_empty());
    assert!(table.is_empty());
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut live = LivenessRegistry::new();
    let a = live.register();
    let mut table = TransientTable::new(Duration::from_millis(40));
    let t0 = Instant::now();
    table.start(a, 0.0, 1.0, t0, Duration::ZERO, Ease::Linear);
    assert_eq!(table.value(a, t0), Some(1.0));
    table.on_transient_tick(t0, &live);
    assert!(table.is_empty());
}
