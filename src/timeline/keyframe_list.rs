//! Keyframe canvas pane: one segment row per track, each spanning the full
//! duration. The pane pushes and pulls both scroll axes.

use dioxus::prelude::*;

use crate::constants::{KEYFRAME_PANE_ID, PANE_PADDING, SEGMENT_FILL};

use super::TimelineContext;

#[component]
pub(crate) fn KeyframeList() -> Element {
    let ctx = use_context::<TimelineContext>();
    let duration = ctx.duration;
    let width = duration();

    rsx! {
        div {
            id: "{KEYFRAME_PANE_ID}",
            style: "padding: 0 {PANE_PADDING}px; min-width: 0; overflow: auto;",
            for row in 0..10 {
                Segment { key: "{row}", width }
            }
        }
    }
}

/// A passive consumer of `duration`: a bar sized 1 px per time unit.
#[component]
fn Segment(width: i64) -> Element {
    rsx! {
        div {
            style: "padding: 8px 0; width: {width}px;",
            div {
                style: "height: 24px; border-radius: 6px; background-color: {SEGMENT_FILL};",
            }
        }
    }
}
