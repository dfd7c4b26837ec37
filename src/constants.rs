//! Shared UI constants: colors, layout sizing, timeline value ranges, and the
//! DOM bridge scripts used for scroll synchronization and geometry reporting.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_MUTED: &str = "#71717a";

pub const ACCENT_PLAYHEAD: &str = "#ca8a04";
pub const RULER_BAR_FILL: &str = "rgba(255, 255, 255, 0.25)";
pub const SEGMENT_FILL: &str = "rgba(255, 255, 255, 0.10)";

// Committed time values: multiples of TIME_STEP inside [TIME_MIN, duration].
pub const TIME_INIT: i64 = 0;
pub const TIME_MIN: i64 = 0;
pub const TIME_STEP: i64 = 10;

// Committed duration values: multiples of TIME_STEP inside [DURATION_MIN, DURATION_MAX].
pub const DURATION_INIT: i64 = 2000;
pub const DURATION_MIN: i64 = 100;
pub const DURATION_MAX: i64 = 6000;

pub const TIMELINE_HEIGHT: f64 = 300.0;
pub const CONTROL_COLUMN_WIDTH: f64 = 300.0;
pub const HEADER_ROW_HEIGHT: f64 = 40.0;
pub const TRACK_ROW_HEIGHT: f64 = 40.0;
pub const PANE_PADDING: f64 = 16.0;

/// Distance from the timeline's left edge to the keyframe canvas content
/// origin: the control/track column plus the canvas padding.
pub const PLAYHEAD_LEFT_OFFSET: f64 = CONTROL_COLUMN_WIDTH + PANE_PADDING;
/// Widest part of the playhead indicator (the triangle handle).
pub const PLAYHEAD_HANDLE_WIDTH: f64 = 10.0;

pub const RULER_PANE_ID: &str = "timeline-ruler";
pub const KEYFRAME_PANE_ID: &str = "timeline-keyframes";
pub const TRACK_PANE_ID: &str = "timeline-tracks";

pub const CURRENT_TIME_INPUT_ID: &str = "current-time-input";
pub const DURATION_INPUT_ID: &str = "duration-input";

/// Scroll bridge for the three scrollable panes.
///
/// Push side: native scroll events are coalesced per animation frame
/// (a newer event cancels the pending frame) and reported as one
/// `{pane, left, top}` message. Pull side: `{kind: "pull"}` messages from the
/// synchronizer are applied straight onto the target element's scroll offsets.
pub const SCROLL_BRIDGE_SCRIPT: &str = r#"
const paneIds = ["timeline-ruler", "timeline-keyframes", "timeline-tracks"];
const frames = {};

function attach(id) {
    const el = document.getElementById(id);
    if (!el) {
        setTimeout(() => attach(id), 100);
        return;
    }
    el.addEventListener("scroll", () => {
        if (frames[id]) {
            cancelAnimationFrame(frames[id]);
        }
        frames[id] = requestAnimationFrame(() => {
            frames[id] = null;
            dioxus.send({ pane: id, left: el.scrollLeft, top: el.scrollTop });
        });
    }, { passive: true });
}

for (const id of paneIds) {
    attach(id);
}

while (true) {
    const msg = await dioxus.recv();
    if (!msg || msg.kind !== "pull") {
        continue;
    }
    const el = document.getElementById(msg.pane);
    if (!el) {
        continue;
    }
    if (msg.axis === "left") {
        el.scrollLeft = msg.value;
    } else if (msg.axis === "top") {
        el.scrollTop = msg.value;
    }
}
"#;

/// Reports the keyframe canvas's bounding rectangle whenever it changes, so
/// playhead visibility can be derived from real geometry.
pub const CANVAS_FRAME_SCRIPT: &str = r#"
const hostId = "timeline-keyframes";
let last = null;

function sendFrame() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const rect = host.getBoundingClientRect();
    const next = {
        left: rect.left,
        top: rect.top,
        width: rect.width,
        height: rect.height
    };
    if (last &&
        Math.abs(last.left - next.left) < 0.5 &&
        Math.abs(last.top - next.top) < 0.5 &&
        Math.abs(last.width - next.width) < 0.5 &&
        Math.abs(last.height - next.height) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendFrame());
    observer.observe(host);
    window.addEventListener("resize", sendFrame, { passive: true });
    sendFrame();
}

attach();
await new Promise(() => {});
"#;
