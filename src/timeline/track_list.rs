//! Track list pane: placeholder lanes, vertically synchronized with the
//! keyframe canvas.

use dioxus::prelude::*;

use crate::constants::{BORDER_DEFAULT, BORDER_SUBTLE, TEXT_PRIMARY, TRACK_PANE_ID, TRACK_ROW_HEIGHT};
use crate::state::Track;

#[component]
pub(crate) fn TrackList() -> Element {
    let tracks = use_hook(Track::default_lanes);

    rsx! {
        div {
            id: "{TRACK_PANE_ID}",
            style: "
                overflow-y: auto; overflow-x: hidden;
                border-right: 1px solid {BORDER_DEFAULT};
            ",
            for track in tracks.iter() {
                div {
                    key: "{track.id}",
                    style: "
                        height: {TRACK_ROW_HEIGHT}px; box-sizing: border-box;
                        padding: 10px 8px; font-size: 12px;
                        color: {TEXT_PRIMARY};
                        border-bottom: 1px solid {BORDER_SUBTLE};
                    ",
                    "{track.name}"
                }
            }
        }
    }
}
