//! Timeline widget module
//!
//! Composition: `Timeline` (panel.rs) lays out the play controls, ruler,
//! track list, keyframe canvas, and playhead. The panes are passive views of
//! the two stores in `crate::state`; everything DOM-specific (scroll bridge,
//! focus/select calls) stays on this side of the boundary.

mod commit_field;
mod keyframe_list;
mod panel;
mod play_controls;
mod playhead;
mod ruler;
mod track_list;

pub use panel::Timeline;
pub use playhead::Rect;

use std::rc::Rc;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::{ScrollSurface, SurfaceError, TimelineClock};

/// Shared handles the pane components reach through context: the clock store
/// for commits, plus render-side signals mirrored from the stores.
#[derive(Clone)]
pub struct TimelineContext {
    pub clock: Rc<TimelineClock>,
    pub time: Signal<i64>,
    pub duration: Signal<i64>,
    pub scroll_left: Signal<i64>,
    pub canvas_frame: Signal<Option<Rect>>,
}

/// A pane's scroll report from the bridge script.
#[derive(Debug, Clone, Deserialize)]
pub struct PaneScrollReport {
    pub pane: String,
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Serialize)]
struct ScrollPullMessage {
    kind: &'static str,
    pane: &'static str,
    axis: &'static str,
    value: i64,
}

/// [`ScrollSurface`] backed by the scroll bridge script: pulled offsets are
/// sent as messages the script applies onto the pane element.
pub struct DomPaneSurface {
    pane: &'static str,
    bridge: Signal<Option<document::Eval>>,
}

impl DomPaneSurface {
    pub fn new(pane: &'static str, bridge: Signal<Option<document::Eval>>) -> Self {
        Self { pane, bridge }
    }

    fn send(&self, axis: &'static str, value: i64) -> Result<(), SurfaceError> {
        let Some(eval) = self.bridge.peek().clone() else {
            return Err(SurfaceError::NotMounted);
        };
        eval.send(ScrollPullMessage { kind: "pull", pane: self.pane, axis, value })
            .map_err(|_| SurfaceError::ChannelClosed)
    }
}

impl ScrollSurface for DomPaneSurface {
    fn apply_scroll_left(&self, value: i64) -> Result<(), SurfaceError> {
        self.send("left", value)
    }

    fn apply_scroll_top(&self, value: i64) -> Result<(), SurfaceError> {
        self.send("top", value)
    }
}
