// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Last-value-wins debouncing on top of a [`TimerService`].
//!
//! This is a timing primitive, not a queue. Every `feed` cancels whatever was
//! pending and schedules the new value; only the value present when the quiet
//! period ends is ever emitted. Dropping the debouncer cancels the pending
//! emission, so nothing fires after the owning session is gone.

use crate::timer::{TimerHandle, TimerService};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Emits the most recently fed value after `delay` without further feeds.
pub struct Debouncer<T> {
    timers: Rc<dyn TimerService>,
    on_emit: Rc<dyn Fn(T)>,
    /// Shared with the scheduled callback, which clears it on fire.
    pending: Rc<Cell<Option<TimerHandle>>>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new(timers: Rc<dyn TimerService>, on_emit: impl Fn(T) + 'static) -> Self {
        Self {
            timers,
            on_emit: Rc::new(on_emit),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Replace any pending emission with `value`, due `delay` from now.
    pub fn feed(&mut self, value: T, delay: Duration) {
        self.cancel();

        let on_emit = Rc::clone(&self.on_emit);
        let pending = Rc::clone(&self.pending);
        let handle = self.timers.schedule(
            delay,
            Box::new(move || {
                pending.set(None);
                tracing::debug!("debounce emitted");
                on_emit(value);
            }),
        );
        self.pending.set(Some(handle));
        tracing::debug!(delay_ms = delay.as_millis() as u64, "debounce scheduled");
    }

    /// Drop the pending emission, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
            tracing::debug!("debounce cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
    }
}
