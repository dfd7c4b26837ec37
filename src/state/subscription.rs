//! Listener registry shared by the timeline stores.
//!
//! Single-threaded by design (UI event loop); interior mutability stands in
//! for locks. Listeners registered or dropped while an emit is in flight take
//! effect from the next emit.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

pub struct Subscribers<E> {
    next_id: Cell<usize>,
    entries: RefCell<Vec<(SubscriptionId, Rc<dyn Fn(&E)>)>>,
}

impl<E> Subscribers<E> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Register a listener. The `Fn` bound means a listener that drives a
    /// `&mut self` handle (such as a signal) must rebind a copy of it inside
    /// the closure body rather than mutate the capture.
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.entries.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }

    /// Notify every listener. The list is snapshotted first so a listener may
    /// subscribe or unsubscribe without poisoning the iteration.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Rc<dyn Fn(&E)>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let subs: Subscribers<i64> = Subscribers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_a = seen.clone();
        subs.subscribe(move |v| seen_a.borrow_mut().push(*v));
        let seen_b = seen.clone();
        subs.subscribe(move |v| seen_b.borrow_mut().push(*v * 10));

        subs.emit(&7);
        assert_eq!(*seen.borrow(), vec![7, 70]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let subs: Subscribers<i64> = Subscribers::new();
        let seen = Rc::new(RefCell::new(0));

        let seen_inner = seen.clone();
        let id = subs.subscribe(move |v| *seen_inner.borrow_mut() += *v);
        subs.emit(&1);
        subs.unsubscribe(id);
        subs.emit(&1);

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(subs.len(), 0);
    }

    #[test]
    fn test_fn_listener_can_drive_a_mutable_handle() {
        // Mirrors a signal handle: cheap to duplicate, writes need `&mut`.
        // Rebinding a duplicate inside the closure keeps the listener `Fn`
        // while still writing through to the shared slot.
        #[derive(Clone)]
        struct Slot(Rc<Cell<i64>>);

        impl Slot {
            fn set(&mut self, value: i64) {
                self.0.set(value);
            }
        }

        let subs: Subscribers<i64> = Subscribers::new();
        let slot = Slot(Rc::new(Cell::new(0)));

        let handle = slot.clone();
        subs.subscribe(move |v| {
            let mut handle = handle.clone();
            handle.set(*v);
        });

        subs.emit(&42);
        assert_eq!(slot.0.get(), 42);
    }

    #[test]
    fn test_listener_may_unsubscribe_during_emit() {
        let subs: Rc<Subscribers<()>> = Rc::new(Subscribers::new());
        let count = Rc::new(RefCell::new(0));

        let subs_inner = subs.clone();
        let count_inner = count.clone();
        let id = Rc::new(RefCell::new(None));
        let id_inner = id.clone();
        let registered = subs.subscribe(move |_| {
            *count_inner.borrow_mut() += 1;
            if let Some(id) = *id_inner.borrow() {
                subs_inner.unsubscribe(id);
            }
        });
        *id.borrow_mut() = Some(registered);

        subs.emit(&());
        subs.emit(&());
        assert_eq!(*count.borrow(), 1);
    }
}
