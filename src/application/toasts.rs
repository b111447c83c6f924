//! Toast lifecycle: short-lived notifications with automatic expiry.
//!
//! Each toast gets an id from a counter owned by the manager, so ids never
//! repeat for the manager's lifetime. Expiry is a deferred entry keyed on the
//! toast id; removing a toast by any route cancels its entry, and an entry
//! that fires for an already removed toast does nothing.

use std::time::{Duration, Instant};

use super::scheduler::{Clock, DeferredQueue, SystemClock, TimerHandle};
use crate::domain::{Severity, Toast, ToastId};

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(4000);

/// Returned by [`ToastManager::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHandle {
    pub id: ToastId,
    expiry: TimerHandle,
}

impl ToastHandle {
    pub fn expiry(&self) -> TimerHandle {
        self.expiry
    }
}

#[derive(Debug)]
struct ToastEntry {
    toast: Toast,
    expiry: TimerHandle,
}

#[derive(Debug)]
pub struct ToastManager<C: Clock = SystemClock> {
    clock: C,
    ttl: Duration,
    last_id: u64,
    entries: Vec<ToastEntry>,
    expiries: DeferredQueue<ToastId>,
}

impl Default for ToastManager<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl ToastManager<SystemClock> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(SystemClock, ttl)
    }
}

impl<C: Clock> ToastManager<C> {
    pub fn with_clock(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            last_id: 0,
            entries: Vec::new(),
            expiries: DeferredQueue::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Appends a toast and schedules its expiry `ttl` from now.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> ToastHandle {
        self.last_id += 1;
        let id = ToastId(self.last_id);
        let expires_at = self.clock.now() + self.ttl;
        let expiry = self.expiries.schedule(expires_at, id);

        let toast = Toast {
            id,
            message: message.into(),
            severity,
        };
        tracing::debug!(%id, %severity, message = %toast.message, "toast shown");
        self.entries.push(ToastEntry { toast, expiry });

        ToastHandle { id, expiry }
    }

    /// Removes the toast if it is still live. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.toast.id == id) else {
            tracing::trace!(%id, "dismiss ignored, toast not live");
            return false;
        };
        let entry = self.entries.remove(index);
        self.expiries.cancel(entry.expiry);
        tracing::debug!(%id, "toast dismissed");
        true
    }

    /// Removes every toast whose expiry has come due. Returns the removed ids
    /// in expiry order.
    pub fn expire_due(&mut self) -> Vec<ToastId> {
        let now = self.clock.now();
        let mut expired = Vec::new();
        for id in self.expiries.pop_due(now) {
            if let Some(index) = self.entries.iter().position(|e| e.toast.id == id) {
                self.entries.remove(index);
                tracing::debug!(%id, "toast expired");
                expired.push(id);
            }
        }
        expired
    }

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> + '_ {
        self.entries.iter().map(|e| &e.toast)
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts().cloned().collect()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts().find(|t| t.id == id)
    }

    /// Most recently shown toast that is still live.
    pub fn latest(&self) -> Option<ToastId> {
        self.entries.last().map(|e| e.toast.id)
    }

    pub fn expires_at(&self, id: ToastId) -> Option<Instant> {
        self.entries
            .iter()
            .find(|e| e.toast.id == id)
            .and_then(|e| self.expiries.deadline(e.expiry))
    }

    pub fn remaining(&self, id: ToastId) -> Option<Duration> {
        self.expires_at(id)
            .map(|at| at.saturating_duration_since(self.clock.now()))
    }

    pub fn is_expiry_pending(&self, handle: &ToastHandle) -> bool {
        self.expiries.is_pending(handle.expiry)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.expiries.next_deadline()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::scheduler::ManualClock;

    fn manager() -> (ToastManager<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (ToastManager::with_clock(clock.clone(), DEFAULT_TOAST_TTL), clock)
    }

    fn ids(manager: &ToastManager<ManualClock>) -> Vec<u64> {
        manager.toasts().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_first_toast_gets_id_one() {
        let (mut toasts, _) = manager();
        let handle = toasts.show("Upload failed", Severity::Error);
        assert_eq!(handle.id, ToastId(1));
        let toast = toasts.get(ToastId(1)).unwrap();
        assert_eq!(toast.message, "Upload failed");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let (mut toasts, clock) = manager();
        let handle = toasts.show("Upload failed", Severity::Error);

        clock.advance(Duration::from_millis(3999));
        assert!(toasts.expire_due().is_empty());
        assert_eq!(toasts.len(), 1);

        clock.advance(Duration::from_millis(1));
        assert_eq!(toasts.expire_due(), vec![handle.id]);
        assert!(toasts.is_empty());

        // dismissing after expiry is a no-op
        assert!(!toasts.dismiss(handle.id));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_double_dismiss_is_noop() {
        let (mut toasts, clock) = manager();
        let handle = toasts.show("Saved", Severity::Success);
        let other = toasts.show("Syncing", Severity::Info);

        assert!(toasts.dismiss(handle.id));
        assert!(!toasts.is_expiry_pending(&handle));
        let after_first = toasts.snapshot();
        assert!(!toasts.dismiss(handle.id));
        assert_eq!(toasts.snapshot(), after_first);

        // the cancelled expiry never fires for the dismissed toast
        clock.advance(DEFAULT_TOAST_TTL);
        assert_eq!(toasts.expire_due(), vec![other.id]);
    }

    #[test]
    fn test_dismiss_keeps_other_deadlines() {
        let (mut toasts, clock) = manager();
        let first = toasts.show("one", Severity::Info);
        clock.advance(Duration::from_millis(1500));
        let second = toasts.show("two", Severity::Info);
        let second_deadline = toasts.expires_at(second.id).unwrap();

        assert!(toasts.dismiss(first.id));
        assert_eq!(toasts.expires_at(second.id), Some(second_deadline));
        assert_eq!(toasts.remaining(second.id), Some(DEFAULT_TOAST_TTL));
        assert_eq!(toasts.next_deadline(), Some(second_deadline));

        clock.advance(Duration::from_millis(3999));
        assert!(toasts.expire_due().is_empty());
        clock.advance(Duration::from_millis(1));
        assert_eq!(toasts.expire_due(), vec![second.id]);
    }

    #[test]
    fn test_expiry_of_one_keeps_the_others() {
        let (mut toasts, clock) = manager();
        toasts.show("a", Severity::Info);
        clock.advance(Duration::from_millis(1000));
        toasts.show("b", Severity::Error);
        clock.advance(Duration::from_millis(1000));
        toasts.show("c", Severity::Success);

        clock.advance(Duration::from_millis(2000));
        assert_eq!(toasts.expire_due(), vec![ToastId(1)]);
        assert_eq!(ids(&toasts), vec![2, 3]);

        clock.advance(Duration::from_millis(1000));
        assert_eq!(toasts.expire_due(), vec![ToastId(2)]);
        assert_eq!(ids(&toasts), vec![3]);
    }

    #[test]
    fn test_ids_never_repeat() {
        let (mut toasts, clock) = manager();
        let mut seen = Vec::new();
        for round in 0..4 {
            let a = toasts.show(format!("a{round}"), Severity::Info);
            let b = toasts.show(format!("b{round}"), Severity::Error);
            toasts.dismiss(a.id);
            clock.advance(DEFAULT_TOAST_TTL);
            toasts.expire_due();
            seen.push(a.id);
            seen.push(b.id);
        }
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_append_order_and_latest() {
        let (mut toasts, _) = manager();
        assert_eq!(toasts.latest(), None);
        toasts.show("first", Severity::Info);
        toasts.show("second", Severity::Info);
        let third = toasts.show("third", Severity::Info);
        assert_eq!(ids(&toasts), vec![1, 2, 3]);
        assert_eq!(toasts.latest(), Some(third.id));
        toasts.dismiss(third.id);
        assert_eq!(toasts.latest(), Some(ToastId(2)));
    }

    #[test]
    fn test_custom_ttl() {
        let clock = ManualClock::new();
        let mut toasts = ToastManager::with_clock(clock.clone(), Duration::from_millis(100));
        toasts.show("quick", Severity::Info);
        clock.advance(Duration::from_millis(100));
        assert_eq!(toasts.expire_due().len(), 1);
    }
}
