//! Signal/slot event broadcasting.
//!
//! A [`Signal`] is a typed multi-subscriber callback list. Widgets own their
//! signals (`clicked`, `value_changed`, ...) and emit them synchronously from
//! event handling; interested parties subscribe with [`Signal::connect`] and
//! keep the returned [`Connection`] if they ever want to unsubscribe.
//!
//! Emission iterates a snapshot of the subscriber list in registration order:
//! - a callback connected during an emission does not run in that emission;
//! - a callback disconnected during an emission may still run if it was
//!   already snapshotted.
//!
//! Everything here is single-threaded; slots run on the caller's stack.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type SlotFn<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Entry<T: 'static> {
    id: u64,
    slot: SlotFn<T>,
}

/// A typed multi-subscriber callback broadcaster.
///
/// Subscription ids are monotonically increasing and never reused, so a stale
/// [`Connection`] can never detach somebody else's slot.
pub struct Signal<T: 'static = ()> {
    entries: Rc<RefCell<Vec<Entry<T>>>>,
    next_id: Cell<u64>,
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(1),
        }
    }

    /// Register a callback under a fresh id and return its handle.
    pub fn connect(&self, f: impl FnMut(&T) + 'static) -> Connection {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            slot: Rc::new(RefCell::new(f)),
        });

        let entries = Rc::downgrade(&self.entries);
        Connection {
            detach: Some(Box::new(move || {
                if let Some(entries) = entries.upgrade() {
                    entries.borrow_mut().retain(|e| e.id != id);
                }
            })),
        }
    }

    /// Synchronously invoke every currently-registered callback, in
    /// registration order.
    pub fn emit(&self, args: &T) {
        let snapshot: Vec<SlotFn<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|e| Rc::clone(&e.slot))
            .collect();
        for slot in snapshot {
            (slot.borrow_mut())(args);
        }
    }

    /// Number of currently connected slots.
    pub fn connection_count(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one subscription.
///
/// Holds only a weak back-reference to the signal: dropping a connection does
/// NOT disconnect the slot, and disconnecting after the signal is gone is a
/// no-op. Wrap it in a [`ScopedConnection`] for drop-time disconnection.
pub struct Connection {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Connection {
    /// Remove the subscription. Idempotent.
    pub fn disconnect(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// RAII guard that disconnects when dropped.
pub struct ScopedConnection(Connection);

impl From<Connection> for ScopedConnection {
    fn from(conn: Connection) -> Self {
        Self(conn)
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        self.0.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_invokes_in_connection_order() {
        let signal: Signal<i32> = Signal::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = Rc::clone(&order);
        let _a = signal.connect(move |v| o.borrow_mut().push(("a", *v)));
        let o = Rc::clone(&order);
        let _b = signal.connect(move |v| o.borrow_mut().push(("b", *v)));

        signal.emit(&7);
        assert_eq!(*order.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_disconnect_stops_delivery() {
        let signal: Signal<()> = Signal::new();
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        let mut conn = signal.connect(move |_| c.set(c.get() + 1));

        signal.emit(&());
        conn.disconnect();
        conn.disconnect(); // idempotent
        signal.emit(&());

        assert_eq!(count.get(), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_connect_during_emit_does_not_run_this_emission() {
        let signal: Rc<Signal<()>> = Rc::new(Signal::new());
        let late_calls = Rc::new(Cell::new(0));

        let sig = Rc::clone(&signal);
        let late = Rc::clone(&late_calls);
        let _outer = signal.connect(move |_| {
            let late = Rc::clone(&late);
            // Leak the connection on purpose; the slot stays registered.
            let mut _conn = sig.connect(move |_| late.set(late.get() + 1));
        });

        signal.emit(&());
        assert_eq!(late_calls.get(), 0);
        signal.emit(&());
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_disconnect_during_emit_may_still_fire_once() {
        let signal: Signal<()> = Signal::new();
        let second_calls = Rc::new(Cell::new(0));

        let c = Rc::clone(&second_calls);
        let second = signal.connect(move |_| c.set(c.get() + 1));

        let holder = Rc::new(RefCell::new(Some(second)));
        let h = Rc::clone(&holder);
        // The first slot disconnects the second mid-emission. The second was
        // already snapshotted, so it still runs this time - but never again.
        let _first = signal.connect(move |_| {
            if let Some(mut conn) = h.borrow_mut().take() {
                conn.disconnect();
            }
        });

        // Registration order: second, then first. Swap the check accordingly:
        // second runs before first disconnects it, so it fires this emission.
        signal.emit(&());
        assert_eq!(second_calls.get(), 1);
        signal.emit(&());
        assert_eq!(second_calls.get(), 1);
    }

    #[test]
    fn test_connection_outliving_signal_is_noop() {
        let mut conn = {
            let signal: Signal<u8> = Signal::new();
            signal.connect(|_| {})
        };
        conn.disconnect();
    }

    #[test]
    fn test_scoped_connection_disconnects_on_drop() {
        let signal: Signal<()> = Signal::new();
        let count = Rc::new(Cell::new(0));

        {
            let c = Rc::clone(&count);
            let _scoped: ScopedConnection =
                signal.connect(move |_| c.set(c.get() + 1)).into();
            signal.emit(&());
        }
        signal.emit(&());

        assert_eq!(count.get(), 1);
    }
}
