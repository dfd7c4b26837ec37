//! Application shell.
//!
//! Owns the two stores, mirrors their changes into render signals, provides
//! the timeline context, and runs the DOM bridge scripts: the scroll bridge
//! (push reports in, pull commands out) and the canvas geometry reporter the
//! playhead visibility check depends on.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::constants::{
    BG_BASE, CANVAS_FRAME_SCRIPT, KEYFRAME_PANE_ID, RULER_PANE_ID, SCROLL_BRIDGE_SCRIPT,
    TEXT_PRIMARY, TRACK_PANE_ID,
};
use crate::state::{PaneAxes, PaneId, ScrollSync, TimelineClock, ViewportScroll};
use crate::timeline::{DomPaneSurface, PaneScrollReport, Rect, Timeline, TimelineContext};

#[component]
pub fn App() -> Element {
    let clock = use_hook(|| Rc::new(TimelineClock::new()));
    let scroll = use_hook(|| Rc::new(ViewportScroll::new()));

    let time = use_signal(|| clock.time());
    let duration = use_signal(|| clock.duration());
    let scroll_left = use_signal(|| scroll.scroll_left());
    let mut canvas_frame = use_signal(|| None::<Rect>);

    // Mirror store notifications into the render signals. The subscriptions
    // live for the whole app, so the returned ids are not kept. Signals are
    // `Copy`; the listeners rebind mutable copies aliasing the same slots,
    // keeping the closures `Fn`.
    use_hook(|| {
        clock.subscribe(move |change| {
            let mut time = time;
            let mut duration = duration;
            time.set(change.time);
            duration.set(change.duration);
        });
        scroll.subscribe(move |change| {
            let mut scroll_left = scroll_left;
            scroll_left.set(change.scroll_left);
        });
    });

    let mut scroll_bridge = use_signal(|| None::<document::Eval>);
    let mut canvas_eval = use_signal(|| None::<document::Eval>);

    // One synchronizer mediates the three panes. Surfaces resolve the bridge
    // handle lazily, so a pull before the script mounts is a logged no-op.
    let sync = use_hook(|| {
        let sync = Rc::new(ScrollSync::new(scroll.clone()));
        sync.register(
            PaneId(RULER_PANE_ID),
            PaneAxes::horizontal(),
            Rc::new(DomPaneSurface::new(RULER_PANE_ID, scroll_bridge)),
        );
        sync.register(
            PaneId(KEYFRAME_PANE_ID),
            PaneAxes::both(),
            Rc::new(DomPaneSurface::new(KEYFRAME_PANE_ID, scroll_bridge)),
        );
        sync.register(
            PaneId(TRACK_PANE_ID),
            PaneAxes::vertical(),
            Rc::new(DomPaneSurface::new(TRACK_PANE_ID, scroll_bridge)),
        );
        sync
    });

    use_effect(move || {
        if scroll_bridge().is_some() {
            return;
        }
        let eval = document::eval(SCROLL_BRIDGE_SCRIPT);
        scroll_bridge.set(Some(eval));
    });

    use_effect(move || {
        if canvas_eval().is_some() {
            return;
        }
        let eval = document::eval(CANVAS_FRAME_SCRIPT);
        canvas_eval.set(Some(eval));
    });

    // Pane scroll reports: the bridge script already coalesces per animation
    // frame, so each message becomes one push + flush.
    use_future(move || {
        let sync = sync.clone();
        async move {
            loop {
                let Some(eval) = scroll_bridge() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<PaneScrollReport>().await {
                        Ok(report) => {
                            let Some(pane) = sync.find_pane(report.pane.as_str()) else {
                                continue;
                            };
                            sync.pane_scrolled(pane, report.left as i64, report.top as i64);
                            sync.flush();
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Canvas geometry reports for the playhead visibility check.
    use_future(move || async move {
        loop {
            let Some(eval) = canvas_eval() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            let mut eval = eval;
            loop {
                match eval.recv::<Rect>().await {
                    Ok(rect) => {
                        if canvas_frame() != Some(rect) {
                            canvas_frame.set(Some(rect));
                        }
                    }
                    Err(_) => break,
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    use_context_provider(|| TimelineContext {
        clock: clock.clone(),
        time,
        duration,
        scroll_left,
        canvas_frame,
    });

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; justify-content: flex-end;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
            ",
            Timeline {}
        }
    }
}
