//! Cooperative timer queue
//!
//! A single-threaded timer service driven by the host event loop: the host
//! owns a [`TimerQueue`] and calls [`TimerQueue::advance`] as its clock moves;
//! widgets schedule and cancel timers through cloned [`TimerHandle`]s. Time is
//! measured in abstract ticks; the host decides what a tick maps to.
//!
//! [`Debouncer`] builds trailing-edge debouncing on top: a burst of calls
//! collapses into one callback invocation, fired with the last value once the
//! queue advances a full quiet interval past the last call.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Unique identifier for a scheduled timer
    pub struct TimerKey;
}

/// Callback invoked when a timer fires
pub type TimerCallback = Box<dyn FnMut() + Send>;

struct TimerEntry {
    deadline: u64,
    seq: u64,
    callback: TimerCallback,
}

struct QueueInner {
    timers: SlotMap<TimerKey, TimerEntry>,
    now: u64,
    next_seq: u64,
}

impl QueueInner {
    /// Key of the next due timer at or before `target`, honoring schedule
    /// order for equal deadlines
    fn next_due(&self, target: u64) -> Option<TimerKey> {
        self.timers
            .iter()
            .filter(|(_, entry)| entry.deadline <= target)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(key, _)| key)
    }
}

/// Owner side of the timer service
pub struct TimerQueue {
    inner: Arc<Mutex<QueueInner>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueInner {
                timers: SlotMap::with_key(),
                now: 0,
                next_seq: 0,
            })),
        }
    }

    /// Get a clonable handle for scheduling and cancelling timers
    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            inner: self.inner.clone(),
        }
    }

    /// Current queue time in ticks
    pub fn now(&self) -> u64 {
        self.inner.lock().unwrap().now
    }

    /// Number of timers currently scheduled
    pub fn pending(&self) -> usize {
        self.inner.lock().unwrap().timers.len()
    }

    /// Move the clock forward by `ticks`, firing due timers in deadline order
    pub fn advance(&self, ticks: u64) {
        let target = self.inner.lock().unwrap().now.saturating_add(ticks);
        self.advance_to(target);
    }

    /// Move the clock to `target`, firing due timers in deadline order.
    ///
    /// Callbacks run with the queue unlocked, so a firing timer may schedule
    /// or cancel other timers; timers scheduled for a point at or before
    /// `target` fire within the same advance.
    pub fn advance_to(&self, target: u64) {
        loop {
            let mut callback = {
                let mut inner = self.inner.lock().unwrap();
                if target < inner.now {
                    return;
                }
                let Some(key) = inner.next_due(target) else {
                    inner.now = target;
                    return;
                };
                let entry = inner.timers.remove(key).expect("due key valid");
                inner.now = inner.now.max(entry.deadline);
                entry.callback
            };
            callback();
        }
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Widget side of the timer service
#[derive(Clone)]
pub struct TimerHandle {
    inner: Arc<Mutex<QueueInner>>,
}

impl TimerHandle {
    /// Schedule `callback` to fire `delay` ticks from now.
    ///
    /// The returned key is an owned handle: it must be cancelled (or allowed
    /// to fire) before the owning widget is torn down.
    pub fn schedule<F>(&self, delay: u64, callback: F) -> TimerKey
    where
        F: FnMut() + Send + 'static,
    {
        let mut inner = self.inner.lock().unwrap();
        let deadline = inner.now.saturating_add(delay);
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let key = inner.timers.insert(TimerEntry {
            deadline,
            seq,
            callback: Box::new(callback),
        });
        tracing::trace!(?key, deadline, "timer scheduled");
        key
    }

    /// Cancel a scheduled timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&self, key: TimerKey) -> bool {
        let removed = self.inner.lock().unwrap().timers.remove(key).is_some();
        if removed {
            tracing::trace!(?key, "timer cancelled");
        }
        removed
    }

    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.inner.lock().unwrap().timers.contains_key(key)
    }

    pub fn now(&self) -> u64 {
        self.inner.lock().unwrap().now
    }
}

/// Trailing-edge debouncer over a timer handle.
///
/// Each [`call`](Debouncer::call) supersedes the pending firing, so a burst
/// of calls produces exactly one callback invocation carrying the burst's
/// last value. The pending timer is an owned resource: dropping the debouncer
/// cancels it, so no callback ever fires against a torn-down owner.
pub struct Debouncer<T: Clone + Send + 'static> {
    timer: TimerHandle,
    interval: u64,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Arc<Mutex<Option<TimerKey>>>,
}

impl<T: Clone + Send + 'static> Debouncer<T> {
    pub fn new(timer: TimerHandle, interval: u64, callback: Arc<dyn Fn(T) + Send + Sync>) -> Self {
        Self {
            timer,
            interval,
            callback,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Whether this debouncer was built from the same callback and interval.
    ///
    /// Used to keep the debouncer (and any in-flight quiet period) stable
    /// across widget rebuilds whose inputs did not change.
    pub fn reuses(&self, callback: &Arc<dyn Fn(T) + Send + Sync>, interval: u64) -> bool {
        Arc::ptr_eq(&self.callback, callback) && self.interval == interval
    }

    /// Record a value, restarting the quiet period
    pub fn call(&self, value: T) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(key) = pending.take() {
            self.timer.cancel(key);
        }

        let callback = self.callback.clone();
        let slot = self.pending.clone();
        let mut value = Some(value);
        let key = self.timer.schedule(self.interval, move || {
            *slot.lock().unwrap() = None;
            if let Some(value) = value.take() {
                callback(value);
            }
        });
        *pending = Some(key);
    }

    /// Discard the pending firing, if any
    pub fn cancel(&self) {
        if let Some(key) = self.pending.lock().unwrap().take() {
            self.timer.cancel(key);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.lock().unwrap().is_some()
    }
}

impl<T: Clone + Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
