use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn drain(timers: &IntervalTimers, now: Duration) -> Vec<TimerId> {
    let mut out = Vec::new();
    while let Some(id) = timers.poll_due(now) {
        out.push(id);
    }
    out
}

#[test]
fn interval_fires_at_each_period() {
    let timers = IntervalTimers::new();
    let h = timers.set_interval(ms(33)).unwrap();

    assert!(drain(&timers, ms(32)).is_empty());
    assert_eq!(drain(&timers, ms(33)), vec![h.id()]);
    assert!(drain(&timers, ms(65)).is_empty());
    assert_eq!(drain(&timers, ms(66)), vec![h.id()]);
    assert_eq!(timers.now(), ms(66));
    assert_eq!(timers.next_deadline(), Some(ms(99)));
}

#[test]
fn late_poll_fires_once_and_keeps_phase() {
    let timers = IntervalTimers::new();
    let h = timers.set_interval(ms(33)).unwrap();

    assert_eq!(drain(&timers, Duration::from_secs(10)), vec![h.id()]);
    // 10_000 / 33 = 303 boundaries have passed; the next one is 304 * 33.
    assert_eq!(timers.next_deadline(), Some(ms(304 * 33)));
    assert!(drain(&timers, ms(304 * 33 - 1)).is_empty());
    assert_eq!(drain(&timers, ms(304 * 33)), vec![h.id()]);
}

#[test]
fn zero_period_is_rejected() {
    let timers = IntervalTimers::new();
    assert!(matches!(
        timers.set_interval(Duration::ZERO),
        Err(CatvidError::Validation(_))
    ));
    assert_eq!(timers.active_count(), 0);
}

#[test]
fn dropping_the_handle_cancels() {
    let timers = IntervalTimers::new();
    let h = timers.set_interval(ms(10)).unwrap();
    let id = h.id();
    assert!(timers.is_active(id));
    drop(h);
    assert!(!timers.is_active(id));
    assert!(drain(&timers, ms(1000)).is_empty());
    assert_eq!(timers.next_deadline(), None);
}

#[test]
fn cancel_between_polls_stops_already_due_firings() {
    let timers = IntervalTimers::new();
    let h = timers.set_interval(ms(10)).unwrap();
    let other = timers.set_interval(ms(10)).unwrap();
    // Both are due at t=10; take only the first.
    assert_eq!(timers.poll_due(ms(10)), Some(h.id()));
    other.cancel();
    assert_eq!(timers.poll_due(ms(10)), None);
}

#[test]
fn handle_dropped_while_registry_is_borrowed_still_cancels() {
    let timers = IntervalTimers::new();
    let h = timers.set_interval(ms(10)).unwrap();
    let id = h.id();
    {
        let _busy = timers.registry.state.borrow();
        drop(h);
    }
    assert!(!timers.is_active(id));
    assert!(drain(&timers, ms(1000)).is_empty());
    assert_eq!(timers.active_count(), 0);
}

#[test]
fn firings_interleave_in_time_order() {
    let timers = IntervalTimers::new();
    let a = timers.set_interval(ms(10)).unwrap();
    let b = timers.set_interval(ms(15)).unwrap();
    let mut fired = Vec::new();
    for t in (5..=30).step_by(5) {
        fired.extend(drain(&timers, ms(t)));
    }
    assert_eq!(fired, vec![a.id(), b.id(), a.id(), a.id(), b.id()]);
}

#[test]
fn late_poll_fires_each_timer_once_in_due_order() {
    let timers = IntervalTimers::new();
    let a = timers.set_interval(ms(10)).unwrap();
    let b = timers.set_interval(ms(15)).unwrap();
    assert_eq!(drain(&timers, ms(30)), vec![a.id(), b.id()]);
    assert_eq!(timers.next_deadline(), Some(ms(40)));
}

#[test]
fn new_interval_counts_from_current_clock() {
    let timers = IntervalTimers::new();
    timers.settle(ms(500));
    let h = timers.set_interval(ms(33)).unwrap();
    assert_eq!(timers.next_deadline(), Some(ms(533)));
    assert!(drain(&timers, ms(532)).is_empty());
    assert_eq!(drain(&timers, ms(533)), vec![h.id()]);
}

#[test]
fn handle_outliving_registry_is_harmless() {
    let h = {
        let timers = IntervalTimers::new();
        timers.set_interval(ms(5)).unwrap()
    };
    drop(h);
}
