//! Ruler pane: a horizontally-scrollable bar spanning the full duration.
//!
//! Clicking seeks (1 px = 1 time unit, quantized by the store); holding the
//! button keeps seeking while the pointer moves. Scroll offsets stay in step
//! with the keyframe canvas through the shared horizontal axis.

use dioxus::prelude::*;

use crate::constants::{
    BG_ELEVATED, BORDER_DEFAULT, PANE_PADDING, RULER_BAR_FILL, RULER_PANE_ID,
};

use super::TimelineContext;

#[component]
pub(crate) fn Ruler(seeking: Signal<bool>) -> Element {
    let ctx = use_context::<TimelineContext>();
    let duration = ctx.duration;
    let width = duration();

    let clock_down = ctx.clock.clone();
    let clock_move = ctx.clock.clone();
    let mut seeking = seeking;

    rsx! {
        div {
            id: "{RULER_PANE_ID}",
            style: "
                padding: 8px {PANE_PADDING}px; min-width: 0;
                overflow-x: auto; overflow-y: hidden;
                background-color: {BG_ELEVATED};
                border-bottom: 1px solid {BORDER_DEFAULT};
            ",
            div {
                style: "
                    height: 24px; width: {width}px;
                    border-radius: 6px;
                    background-color: {RULER_BAR_FILL};
                    cursor: pointer;
                ",
                onmousedown: move |e| {
                    e.prevent_default();
                    seeking.set(true);
                    clock_down.set_time(e.element_coordinates().x);
                },
                onmousemove: move |e| {
                    if seeking() {
                        clock_move.set_time(e.element_coordinates().x);
                    }
                },
            }
        }
    }
}
