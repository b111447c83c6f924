//! Deferred execution for the single-threaded event loop.
//!
//! Nothing here spawns threads or timers. Work is scheduled against an
//! [`Instant`] and the event loop drains whatever has come due on each tick,
//! sizing its poll timeout from [`DeferredQueue::next_deadline`].

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Cancellation handle for one scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Payloads keyed by deadline. Entries sharing a deadline come due in the
/// order they were scheduled.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    next_key: u64,
    entries: BTreeMap<(Instant, u64), T>,
    deadlines: HashMap<u64, Instant>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            next_key: 0,
            entries: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant, payload: T) -> TimerHandle {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.insert((at, key), payload);
        self.deadlines.insert(key, at);
        TimerHandle(key)
    }

    /// Drops a pending entry. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(at) => self.entries.remove(&(at, handle.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    pub fn deadline(&self, handle: TimerHandle) -> Option<Instant> {
        self.deadlines.get(&handle.0).copied()
    }

    /// Removes and returns every payload due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let later = self.entries.split_off(&(now, u64::MAX));
        let due = std::mem::replace(&mut self.entries, later);
        due.into_iter()
            .map(|((_, key), payload)| {
                self.deadlines.remove(&key);
                payload
            })
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(at, _)| *at)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
