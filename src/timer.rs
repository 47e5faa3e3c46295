// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot, cancellable timers behind an injectable service.
//!
//! The search session has three things that wait: the debounce delay, the
//! not-found notice and the blur-hide delay. All of them go through
//! [`TimerService`], so tests can swap in a [`VirtualClock`] and step time by
//! hand instead of sleeping.
//!
//! Everything here is single-threaded. Services take `&self` and use interior
//! mutability because they are shared (`Rc<dyn TimerService>`) between the
//! controller and the debouncer.
//!
//! Callbacks run outside the queue borrow, so a callback may schedule or
//! cancel timers on the same service.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Work to run when a timer fires.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Identifies a scheduled timer. Cancelling a stale handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// `schedule(delay, callback) → handle`, plus idempotent cancellation.
pub trait TimerService {
    /// Run `callback` once, `delay` from now, unless cancelled first.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;

    /// Cancel a pending timer. Safe after it fired or was already cancelled.
    fn cancel(&self, handle: TimerHandle);
}

/// Deadline-ordered queue shared by both clock implementations.
///
/// Keys are `(deadline, handle)`: handles increase monotonically, so timers
/// with equal deadlines fire in scheduling order.
#[derive(Default)]
struct TimerQueue {
    next_id: u64,
    entries: BTreeMap<(Duration, TimerHandle), TimerCallback>,
}

impl TimerQueue {
    fn insert(&mut self, deadline: Duration, callback: TimerCallback) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.insert((deadline, handle), callback);
        handle
    }

    fn remove(&mut self, handle: TimerHandle) -> bool {
        let key = self.entries.keys().find(|(_, h)| *h == handle).copied();
        match key {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    /// Pop the earliest entry whose deadline is `<= now`.
    fn pop_due(&mut self, now: Duration) -> Option<(Duration, TimerCallback)> {
        let (&(deadline, handle), _) = self.entries.iter().next()?;
        if deadline > now {
            return None;
        }
        self.entries
            .remove(&(deadline, handle))
            .map(|callback| (deadline, callback))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }
}

// ============================================================================
// VIRTUAL CLOCK
// ============================================================================

#[derive(Default)]
struct VirtualState {
    now: Duration,
    queue: TimerQueue,
}

/// Manually advanced clock for deterministic tests and scripted sessions.
///
/// Time only moves when [`advance`](Self::advance) is called. Clones share the
/// same clock.
///
/// ```ignore
/// let clock = VirtualClock::new();
/// clock.schedule(Duration::from_millis(400), Box::new(|| println!("fired")));
/// clock.advance(Duration::from_millis(399)); // nothing
/// clock.advance(Duration::from_millis(1));   // fired
/// ```
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<VirtualState>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time since creation.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Move time forward by `by`, firing every timer that comes due, in
    /// deadline order. Returns how many fired.
    ///
    /// Each callback observes `now()` equal to its own deadline, and timers it
    /// schedules within the window fire in the same call.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.borrow().now + by;
        let mut fired = 0;
        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                state.queue.pop_due(target).map(|(deadline, callback)| {
                    state.now = deadline;
                    callback
                })
            };
            match due {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
        fired
    }

    /// Shorthand for `advance(Duration::from_millis(ms))`.
    pub fn advance_ms(&self, ms: u64) -> usize {
        self.advance(Duration::from_millis(ms))
    }

    /// Number of timers still waiting.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Time until the earliest pending timer, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        let state = self.state.borrow();
        state
            .queue
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(state.now))
    }
}

impl TimerService for VirtualClock {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        let deadline = state.now + delay;
        state.queue.insert(deadline, callback)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.state.borrow_mut().queue.remove(handle);
    }
}

// ============================================================================
// WALL CLOCK
// ============================================================================

/// Monotonic real-time timers, fired cooperatively by [`poll`](Self::poll).
///
/// There is no background thread: the owner's event loop calls `poll()` and
/// every timer whose deadline has passed runs on that call.
#[derive(Clone)]
pub struct WallClock {
    origin: Instant,
    queue: Rc<RefCell<TimerQueue>>,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: Rc::new(RefCell::new(TimerQueue::default())),
        }
    }

    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Fire every timer that is due now. Returns how many fired.
    pub fn poll(&self) -> usize {
        let now = self.elapsed();
        let mut fired = 0;
        loop {
            let due = self.queue.borrow_mut().pop_due(now);
            match due {
                Some((_, callback)) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        fired
    }

    /// Time until the earliest pending timer, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        let now = self.elapsed();
        self.queue
            .borrow()
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService for WallClock {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let deadline = self.elapsed() + delay;
        self.queue.borrow_mut().insert(deadline, callback)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.queue.borrow_mut().remove(handle);
    }
}
