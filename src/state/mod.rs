//! State management module
//!
//! The shared mutable records behind the timeline widget:
//! - TimelineClock: the authoritative time/duration pair with validating setters
//! - ViewportScroll: the shared scroll offsets every pane converges on
//! - ScrollSync: the push/pull mediator between independently-scrolling panes
//! - Track: placeholder lanes for the track list and keyframe canvas
//!
//! Stores are plain constructor-injected objects with observer-style
//! subscription, shared behind `Rc`. Nothing here touches the DOM; the
//! `timeline` module owns that boundary.

mod clock;
mod scroll;
mod subscription;
mod sync;
mod track;

pub use clock::*;
pub use scroll::*;
pub use subscription::*;
pub use sync::*;
pub use track::*;
