//! Playhead indicator.
//!
//! Pure derivation of the two stores: the horizontal position comes from
//! `time` (1 time unit = 1 px) offset by the shared horizontal scroll, and
//! visibility from whether the indicator's screen rectangle still intersects
//! the keyframe canvas's visible rectangle.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::constants::{
    ACCENT_PLAYHEAD, PANE_PADDING, PLAYHEAD_HANDLE_WIDTH, PLAYHEAD_LEFT_OFFSET,
};

use super::TimelineContext;

/// Screen-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Offset of the playhead anchor from the widget's left edge: the fixed
/// distance to the canvas content origin minus the shared scroll.
pub fn playhead_left(scroll_left: i64) -> f64 {
    PLAYHEAD_LEFT_OFFSET - scroll_left as f64
}

/// The indicator's screen rectangle, in the same coordinate space as the
/// measured canvas rectangle.
pub fn playhead_rect(time: i64, scroll_left: i64, canvas: &Rect) -> Rect {
    let center = canvas.left + PANE_PADDING - scroll_left as f64 + time as f64;
    Rect {
        left: center - PLAYHEAD_HANDLE_WIDTH / 2.0,
        top: canvas.top,
        width: PLAYHEAD_HANDLE_WIDTH,
        height: canvas.height,
    }
}

/// Whether the indicator still overlaps the canvas's visible rectangle.
/// While the canvas is unmeasured, falls back to the left-edge arithmetic
/// check (the content origin padding is the only boundary it can know).
pub fn playhead_visible(time: i64, scroll_left: i64, canvas: Option<&Rect>) -> bool {
    match canvas {
        Some(canvas) => playhead_rect(time, scroll_left, canvas).intersects(canvas),
        None => PANE_PADDING - scroll_left as f64 + time as f64 >= 0.0,
    }
}

#[component]
pub fn Playhead() -> Element {
    let TimelineContext { time, scroll_left, canvas_frame, .. } = use_context::<TimelineContext>();
    let time = time();
    let scroll_left = scroll_left();
    let canvas = canvas_frame();

    let left = playhead_left(scroll_left);
    let visibility = if playhead_visible(time, scroll_left, canvas.as_ref()) {
        "visible"
    } else {
        "hidden"
    };

    rsx! {
        div {
            style: "
                position: absolute; top: 0; height: 100%;
                left: {left}px;
                transform: translateX(calc({time}px - 50%));
                visibility: {visibility};
                border-left: 2px solid {ACCENT_PLAYHEAD};
                z-index: 10;
                pointer-events: none; user-select: none;
            ",
            // Triangle handle at the top of the line
            div {
                style: "
                    position: absolute;
                    border: 5px solid transparent;
                    border-top-color: {ACCENT_PLAYHEAD};
                    transform: translateX(-6px);
                ",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        // Keyframe pane mounted at x=300 in a 1000px-wide timeline.
        Rect { left: 300.0, top: 40.0, width: 700.0, height: 260.0 }
    }

    #[test]
    fn test_playhead_left_follows_scroll() {
        assert_eq!(playhead_left(0), 316.0);
        assert_eq!(playhead_left(300), 16.0);
    }

    #[test]
    fn test_visible_inside_canvas() {
        let canvas = canvas();
        assert!(playhead_visible(0, 0, Some(&canvas)));
        assert!(playhead_visible(500, 0, Some(&canvas)));
    }

    #[test]
    fn test_hidden_past_left_edge() {
        let canvas = canvas();
        // Scrolled far right while time stays near zero: the indicator sits
        // left of the canvas.
        assert!(!playhead_visible(0, 200, Some(&canvas)));
        // It flips back once time catches up with the scroll.
        assert!(playhead_visible(200, 200, Some(&canvas)));
    }

    #[test]
    fn test_hidden_past_right_edge() {
        let canvas = canvas();
        // Canvas spans [300, 1000]; content origin is 316 with no scroll.
        assert!(!playhead_visible(800, 0, Some(&canvas)));
        assert!(playhead_visible(800, 200, Some(&canvas)));
    }

    #[test]
    fn test_flip_point_at_left_edge() {
        let canvas = canvas();
        // The indicator's right edge crosses canvas.left between these two.
        assert!(playhead_visible(100, 120, Some(&canvas)));
        assert!(!playhead_visible(100, 122, Some(&canvas)));
    }

    #[test]
    fn test_arithmetic_fallback_without_measurement() {
        assert!(playhead_visible(0, 0, None));
        assert!(!playhead_visible(0, 20, None));
        assert!(playhead_visible(10, 20, None));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect { left: 0.0, top: 0.0, width: 10.0, height: 10.0 };
        let b = Rect { left: 9.0, top: 9.0, width: 10.0, height: 10.0 };
        let c = Rect { left: 10.0, top: 0.0, width: 10.0, height: 10.0 };
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
