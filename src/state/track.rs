//! Placeholder track lanes.
//!
//! Tracks carry no keyframe content; they exist so the track list and the
//! keyframe canvas have matching rows to keep vertically aligned.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: Uuid,
    pub name: String,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// The default set of placeholder lanes shown by the widget.
    pub fn default_lanes() -> Vec<Track> {
        ('A'..='J').map(|letter| Track::new(format!("Track {letter}"))).collect()
    }
}
