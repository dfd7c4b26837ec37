//! Shared viewport scroll store.
//!
//! One record holds the horizontal/vertical offsets every pane must agree on.
//! Changes carry a [`ScrollSource`] tag identifying the pane that produced
//! them, so subscribers can skip echoing an offset back onto its originator.

use std::cell::Cell;

use super::subscription::{Subscribers, SubscriptionId};

/// Identity of a registered scrollable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub &'static str);

/// Where a scroll change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    /// A pane pushed its own native scroll offset.
    Pane(PaneId),
    /// Anything else: host application writes, reset.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollChange {
    pub scroll_left: i64,
    pub scroll_top: i64,
    pub source: ScrollSource,
}

pub struct ViewportScroll {
    scroll_left: Cell<i64>,
    scroll_top: Cell<i64>,
    subscribers: Subscribers<ScrollChange>,
}

impl ViewportScroll {
    pub fn new() -> Self {
        Self {
            scroll_left: Cell::new(0),
            scroll_top: Cell::new(0),
            subscribers: Subscribers::new(),
        }
    }

    pub fn scroll_left(&self) -> i64 {
        self.scroll_left.get()
    }

    pub fn scroll_top(&self) -> i64 {
        self.scroll_top.get()
    }

    pub fn set_scroll_left(&self, value: i64) -> i64 {
        self.set_offsets(value, self.scroll_top.get(), ScrollSource::External);
        self.scroll_left.get()
    }

    pub fn set_scroll_top(&self, value: i64) -> i64 {
        self.set_offsets(self.scroll_left.get(), value, ScrollSource::External);
        self.scroll_top.get()
    }

    /// Write both offsets in one update. Offsets clamp at zero; panes bound
    /// the upper end through their own native scroll limits.
    pub fn set_offsets(&self, left: i64, top: i64, source: ScrollSource) {
        let left = left.max(0);
        let top = top.max(0);
        let changed = left != self.scroll_left.get() || top != self.scroll_top.get();
        self.scroll_left.set(left);
        self.scroll_top.set(top);
        if changed {
            self.subscribers.emit(&ScrollChange {
                scroll_left: left,
                scroll_top: top,
                source,
            });
        }
    }

    pub fn reset(&self) {
        self.set_offsets(0, 0, ScrollSource::External);
    }

    pub fn subscribe(&self, listener: impl Fn(&ScrollChange) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}

impl Default for ViewportScroll {
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
    fn test_offsets_clamp_at_zero() {
        let scroll = ViewportScroll::new();
        assert_eq!(scroll.set_scroll_left(-50), 0);
        assert_eq!(scroll.set_scroll_top(-1), 0);
        assert_eq!(scroll.set_scroll_left(300), 300);
    }

    #[test]
    fn test_equal_write_is_silent() {
        let scroll = ViewportScroll::new();
        let count = Rc::new(RefCell::new(0));
        let count_inner = count.clone();
        scroll.subscribe(move |_| *count_inner.borrow_mut() += 1);

        scroll.set_scroll_left(120);
        scroll.set_scroll_left(120);
        scroll.set_offsets(120, 0, ScrollSource::External);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_change_carries_source_tag() {
        let scroll = ViewportScroll::new();
        let seen = Rc::new(RefCell::new(None));
        let seen_inner = seen.clone();
        scroll.subscribe(move |change| *seen_inner.borrow_mut() = Some(*change));

        let pane = PaneId("timeline-ruler");
        scroll.set_offsets(40, 0, ScrollSource::Pane(pane));
        assert_eq!(
            *seen.borrow(),
            Some(ScrollChange {
                scroll_left: 40,
                scroll_top: 0,
                source: ScrollSource::Pane(pane),
            })
        );
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let scroll = ViewportScroll::new();
        scroll.set_offsets(300, 80, ScrollSource::External);
        scroll.reset();
        assert_eq!(scroll.scroll_left(), 0);
        assert_eq!(scroll.scroll_top(), 0);
    }
}
