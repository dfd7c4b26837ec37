//! Timeline composition root.
//!
//! A fixed grid: play controls and ruler on the header row, track list and
//! keyframe canvas below, with the playhead overlaying the scrollable side.
//! No logic of its own beyond hosting the ruler's transient drag state.

use dioxus::prelude::*;

use crate::constants::{
    BG_BASE, BORDER_DEFAULT, CONTROL_COLUMN_WIDTH, HEADER_ROW_HEIGHT, TEXT_PRIMARY,
    TIMELINE_HEIGHT,
};

use super::keyframe_list::KeyframeList;
use super::play_controls::PlayControls;
use super::playhead::Playhead;
use super::ruler::Ruler;
use super::track_list::TrackList;

#[component]
pub fn Timeline() -> Element {
    // Ruler drag-seek state; cleared here so releasing the button anywhere
    // over the widget ends the drag.
    let mut seeking = use_signal(|| false);

    rsx! {
        div {
            style: "
                position: relative; width: 100%; height: {TIMELINE_HEIGHT}px;
                display: grid;
                grid-template-columns: {CONTROL_COLUMN_WIDTH}px 1fr;
                grid-template-rows: {HEADER_ROW_HEIGHT}px 1fr;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                border-top: 2px solid {BORDER_DEFAULT};
                overflow: clip;
            ",
            onmouseup: move |_| seeking.set(false),
            onmouseleave: move |_| seeking.set(false),

            PlayControls {}
            Ruler { seeking }
            TrackList {}
            KeyframeList {}
            Playhead {}
        }
    }
}
