use std::cell::{RefCell, RefMut};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::foundation::error::{CatvidError, CatvidResult};

/// Identifies one registered interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug)]
struct TimerEntry {
    id: TimerId,
    period: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct TimerState {
    now: Duration,
    next_id: u64,
    entries: Vec<TimerEntry>,
}

#[derive(Debug, Default)]
struct Registry {
    state: RefCell<TimerState>,
    // Cancels from handles dropped while `state` was borrowed; applied on next access.
    pending_cancels: RefCell<Vec<TimerId>>,
}

impl Registry {
    fn state(&self) -> RefMut<'_, TimerState> {
        let mut st = self.state.borrow_mut();
        let pending = std::mem::take(&mut *self.pending_cancels.borrow_mut());
        if !pending.is_empty() {
            st.entries.retain(|e| !pending.contains(&e.id));
        }
        st
    }

    fn cancel(&self, id: TimerId) {
        match self.state.try_borrow_mut() {
            Ok(mut st) => st.entries.retain(|e| e.id != id),
            Err(_) => self.pending_cancels.borrow_mut().push(id),
        }
    }
}

/// First multiple of `period` past `due` that lies after `now`.
fn next_due_after(due: Duration, period: Duration, now: Duration) -> Duration {
    if due > now {
        return due;
    }
    let behind = (now - due).as_nanos() / period.as_nanos() + 1;
    let skip = u32::try_from(behind).unwrap_or(u32::MAX);
    due.saturating_add(period.saturating_mul(skip))
}

/// Single-threaded interval timers on a host-driven clock.
///
/// Time only moves when the host calls [`IntervalTimers::poll_due`]. Clones share the same
/// registry. The registry is `!Send`: timers and their callbacks live on one thread.
///
/// A late host does not get a burst: firings missed while nobody polled are coalesced into one,
/// and the interval keeps its original phase.
#[derive(Clone, Debug, Default)]
pub struct IntervalTimers {
    registry: Rc<Registry>,
}

impl IntervalTimers {
    /// Empty registry with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value (the time of the last delivered firing or poll).
    pub fn now(&self) -> Duration {
        self.registry.state().now
    }

    /// Register a repeating timer first due one `period` from now.
    ///
    /// The returned handle cancels the timer when cancelled or dropped.
    pub fn set_interval(&self, period: Duration) -> CatvidResult<TimerHandle> {
        if period.is_zero() {
            return Err(CatvidError::validation("timer period must be > 0"));
        }
        let mut st = self.registry.state();
        let id = TimerId(st.next_id);
        st.next_id += 1;
        let next_due = st.now + period;
        st.entries.push(TimerEntry {
            id,
            period,
            next_due,
        });
        tracing::trace!(timer = id.0, ?period, "interval registered");
        Ok(TimerHandle {
            id,
            registry: Rc::downgrade(&self.registry),
        })
    }

    /// Number of timers still registered.
    pub fn active_count(&self) -> usize {
        self.registry.state().entries.len()
    }

    /// Whether `id` is still registered.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.registry.state().entries.iter().any(|e| e.id == id)
    }

    /// Earliest pending firing time, if any timer is registered.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.registry.state().entries.iter().map(|e| e.next_due).min()
    }

    /// Deliver the earliest firing due at or before `now`, if any.
    ///
    /// Firings come out in time order (ties by registration order), one per call, and the
    /// clock moves to each firing's time. Each timer fires at most once for a given `now`; its
    /// next firing is the first period boundary after `now`. Hosts drain with
    /// `while let Some(id) = poll_due(t)` so that a timer cancelled by one callback never fires
    /// afterwards.
    pub fn poll_due(&self, now: Duration) -> Option<TimerId> {
        let mut st = self.registry.state();
        let due = st
            .entries
            .iter_mut()
            .filter(|e| e.next_due <= now)
            .min_by_key(|e| (e.next_due, e.id))?;
        let fired_at = due.next_due;
        due.next_due = next_due_after(fired_at + due.period, due.period, now);
        let skipped = (due.next_due - fired_at).as_nanos() / due.period.as_nanos() - 1;
        let id = due.id;
        if skipped > 0 {
            tracing::debug!(
                timer = id.0,
                skipped = skipped as u64,
                "late poll; missed firings coalesced"
            );
        }
        st.now = st.now.max(fired_at);
        Some(id)
    }

    /// Move the clock forward without delivering anything.
    pub fn settle(&self, now: Duration) {
        let mut st = self.registry.state();
        st.now = st.now.max(now);
    }
}

/// Owned handle to a registered interval. Cancels the interval on drop.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    registry: Weak<Registry>,
}

impl TimerHandle {
    /// Id delivered by [`IntervalTimers::poll_due`] for this interval.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cancel now. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.cancel(self.id);
            tracing::trace!(timer = self.id.0, "interval cancelled");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/timer.rs"]
mod tests;
