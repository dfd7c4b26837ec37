//! Pane scroll synchronizer.
//!
//! Each scrollable pane registers the axes it pushes (its own native scrolls
//! are written into [`ViewportScroll`]) and the axes it pulls (store offsets
//! are applied back onto it). Pane-originated pushes are collected through
//! [`ScrollSync::pane_scrolled`] and written out once per [`ScrollSync::flush`]
//! call, giving at most one store write per pane per scheduling tick. Store
//! changes are tagged with their originating pane, so a pull is never written
//! back onto the pane that produced it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::scroll::{PaneId, ScrollChange, ScrollSource, ViewportScroll};
use super::subscription::SubscriptionId;

/// Which axes a pane pushes into and pulls from the shared store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAxes {
    pub push_horizontal: bool,
    pub pull_horizontal: bool,
    pub push_vertical: bool,
    pub pull_vertical: bool,
}

impl PaneAxes {
    pub fn both() -> Self {
        Self {
            push_horizontal: true,
            pull_horizontal: true,
            push_vertical: true,
            pull_vertical: true,
        }
    }

    pub fn horizontal() -> Self {
        Self {
            push_horizontal: true,
            pull_horizontal: true,
            push_vertical: false,
            pull_vertical: false,
        }
    }

    pub fn vertical() -> Self {
        Self {
            push_horizontal: false,
            pull_horizontal: false,
            push_vertical: true,
            pull_vertical: true,
        }
    }
}

/// Failure applying a pulled offset onto a pane. Transient (the pane may be
/// briefly unmounted); logged by the synchronizer, never propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    NotMounted,
    ChannelClosed,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NotMounted => write!(f, "pane element is not mounted"),
            SurfaceError::ChannelClosed => write!(f, "pane bridge channel is closed"),
        }
    }
}

/// A pane's scrollable surface as seen by the synchronizer.
pub trait ScrollSurface {
    fn apply_scroll_left(&self, value: i64) -> Result<(), SurfaceError>;
    fn apply_scroll_top(&self, value: i64) -> Result<(), SurfaceError>;
}

#[derive(Debug, Clone, Copy)]
struct PendingPush {
    left: i64,
    top: i64,
}

struct PaneEntry {
    id: PaneId,
    axes: PaneAxes,
    surface: Rc<dyn ScrollSurface>,
    pending: Cell<Option<PendingPush>>,
}

struct SyncInner {
    store: Rc<ViewportScroll>,
    panes: RefCell<Vec<PaneEntry>>,
}

impl SyncInner {
    fn apply_pull(&self, change: &ScrollChange) {
        for entry in self.panes.borrow().iter() {
            if change.source == ScrollSource::Pane(entry.id) {
                continue;
            }
            if entry.axes.pull_horizontal {
                if let Err(err) = entry.surface.apply_scroll_left(change.scroll_left) {
                    eprintln!(
                        "scroll sync: applying scrollLeft to pane '{}' failed: {}",
                        entry.id.0, err
                    );
                }
            }
            if entry.axes.pull_vertical {
                if let Err(err) = entry.surface.apply_scroll_top(change.scroll_top) {
                    eprintln!(
                        "scroll sync: applying scrollTop to pane '{}' failed: {}",
                        entry.id.0, err
                    );
                }
            }
        }
    }
}

pub struct ScrollSync {
    inner: Rc<SyncInner>,
    subscription: SubscriptionId,
}

impl ScrollSync {
    pub fn new(store: Rc<ViewportScroll>) -> Self {
        let inner = Rc::new(SyncInner {
            store: store.clone(),
            panes: RefCell::new(Vec::new()),
        });
        let weak: Weak<SyncInner> = Rc::downgrade(&inner);
        let subscription = store.subscribe(move |change| {
            if let Some(inner) = weak.upgrade() {
                inner.apply_pull(change);
            }
        });
        Self { inner, subscription }
    }

    pub fn register(&self, id: PaneId, axes: PaneAxes, surface: Rc<dyn ScrollSurface>) {
        self.inner.panes.borrow_mut().push(PaneEntry {
            id,
            axes,
            surface,
            pending: Cell::new(None),
        });
    }

    /// Resolve an id string (as carried by bridge messages) to the registered
    /// pane, so callers need no mapping of their own.
    pub fn find_pane(&self, name: &str) -> Option<PaneId> {
        self.inner
            .panes
            .borrow()
            .iter()
            .map(|entry| entry.id)
            .find(|id| id.0 == name)
    }

    /// Record a pane-originated scroll offset. The store write is deferred to
    /// the next [`flush`](Self::flush); a newer event replaces an unflushed one.
    pub fn pane_scrolled(&self, id: PaneId, left: i64, top: i64) {
        let panes = self.inner.panes.borrow();
        if let Some(entry) = panes.iter().find(|entry| entry.id == id) {
            entry.pending.set(Some(PendingPush { left, top }));
        }
    }

    /// Write every pending push into the store: at most one write per pane.
    /// Axes the pane does not push keep their current store value.
    pub fn flush(&self) {
        // Collect first: store writes notify pulls, which walk the pane list.
        let pushes: Vec<(PaneId, PaneAxes, PendingPush)> = self
            .inner
            .panes
            .borrow()
            .iter()
            .filter_map(|entry| entry.pending.take().map(|push| (entry.id, entry.axes, push)))
            .collect();
        for (id, axes, push) in pushes {
            let left = if axes.push_horizontal {
                push.left
            } else {
                self.inner.store.scroll_left()
            };
            let top = if axes.push_vertical {
                push.top
            } else {
                self.inner.store.scroll_top()
            };
            self.inner.store.set_offsets(left, top, ScrollSource::Pane(id));
        }
    }
}

impl Drop for ScrollSync {
    fn drop(&mut self) {
        self.inner.store.unsubscribe(self.subscription);
    }
}
