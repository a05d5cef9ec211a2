use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::foundation::core::ScrollOffset;

type Callback = Box<dyn FnMut(ScrollOffset)>;

struct Entry {
    id: u64,
    callback: Callback,
}

struct Inner {
    offset: ScrollOffset,
    next_id: u64,
    subscribers: Vec<Entry>,
    // Ids whose guard dropped while their entry was checked out of
    // `subscribers` during a `set` tick.
    retired: Vec<u64>,
}

/// Continuously updated scroll-offset signal.
///
/// The host pushes new offsets with [`ScrollSignal::set`]; every live
/// subscriber callback is invoked with the value, in subscription order, on
/// the same tick. The signal holds the last pushed value, so a host that
/// stops reporting degrades to "no update" rather than failing.
///
/// Single-threaded by design: the whole engine runs cooperatively on the UI
/// thread. Callbacks must not call back into the signal they are subscribed
/// to; a re-entrant `set` updates the stored offset but notifies nobody.
#[derive(Clone)]
pub struct ScrollSignal {
    inner: Rc<RefCell<Inner>>,
}

impl ScrollSignal {
    /// New signal at the top of the page.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                offset: ScrollOffset::TOP,
                next_id: 0,
                subscribers: Vec::new(),
                retired: Vec::new(),
            })),
        }
    }

    /// Last pushed offset.
    pub fn get(&self) -> ScrollOffset {
        self.inner.borrow().offset
    }

    /// Store a new offset and notify every live subscriber with it.
    ///
    /// Notification is unconditional; dependents that need edge semantics
    /// (e.g. [`crate::ThresholdGate`]) diff against their own previous state.
    pub fn set(&self, offset: ScrollOffset) {
        // Check the subscriber list out of the borrow so callbacks can
        // subscribe or drop guards without hitting a held RefCell.
        let mut live = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            std::mem::take(&mut inner.subscribers)
        };

        for entry in live.iter_mut() {
            let gone = self.inner.borrow().retired.contains(&entry.id);
            if !gone {
                (entry.callback)(offset);
            }
        }

        let mut inner = self.inner.borrow_mut();
        let retired = std::mem::take(&mut inner.retired);
        live.retain(|entry| !retired.contains(&entry.id));
        let added_during_tick = std::mem::take(&mut inner.subscribers);
        live.extend(added_during_tick);
        inner.subscribers = live;
    }

    /// Register `callback` and return the guard that owns the registration.
    ///
    /// Dropping the returned [`Subscription`] removes the callback; it is
    /// never invoked again after the drop, including later in the same tick.
    pub fn subscribe(&self, callback: impl FnMut(ScrollOffset) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push(Entry {
            id,
            callback: Box::new(callback),
        });
        Subscription {
            signal: Rc::downgrade(&self.inner),
            id,
            detached: false,
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollSignal")
            .field("offset", &inner.offset)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// RAII guard for one scroll subscription.
///
/// The guard is the only handle to the registration: dropping it unregisters
/// the callback, which makes stale-callback-after-teardown bugs impossible
/// by construction. Outliving the signal is fine; the drop is a no-op then.
#[must_use = "dropping the guard immediately cancels the subscription"]
pub struct Subscription {
    signal: Weak<RefCell<Inner>>,
    id: u64,
    detached: bool,
}

impl Subscription {
    /// Detach the guard, leaving the callback registered for the signal's
    /// whole lifetime. For hosts that manage teardown themselves.
    pub fn forget(mut self) {
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        let Some(inner) = self.signal.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|entry| entry.id != self.id);
        if inner.subscribers.len() == before {
            // Entry is checked out mid-tick; retire it instead.
            inner.retired.push(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("detached", &self.detached)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/scroll.rs"]
mod tests;
