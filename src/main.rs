//! Keyframe Timeline
//!
//! A multi-pane timeline widget: a shared horizontal time axis across a
//! ruler, keyframe canvas, track list, and playhead, with numeric
//! commit-fields for the current time and total duration.

mod app;
mod constants;
mod state;
mod timeline;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Keyframe Timeline")
                .with_inner_size(LogicalSize::new(1100.0, 700.0))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
