//! Commit-field controller.
//!
//! One instance drives one numeric input. The input's text is transient
//! (`display`) and only reaches the authoritative store on an explicit commit
//! action: Enter, blur, an arrow-key step, or a native stepper click. The
//! controller is a pure state machine over [`FieldInput`] events; the hosting
//! component executes the returned [`FieldUpdate`] effects (store commit,
//! select-all, focus release) against the DOM.
//!
//! Native stepper clicks arrive as the same change event as typing, so a
//! preceding pointer-down on the field arms stepper detection; any other key
//! press disarms it. An arrow-key commit sets a one-shot lock that swallows
//! the synthetic change event the native step fires right after, preventing a
//! double commit.

use crate::constants::TIME_STEP;
use crate::state::RawValue;

/// The keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    Other,
}

/// An input-side event translated from the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Focus,
    PointerDown,
    Changed(String),
    KeyDown { key: FieldKey, shift: bool },
    Blur,
    /// The authoritative value changed externally (e.g. a duration commit
    /// cascaded onto the time value).
    External(i64),
}

/// What to commit to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitRequest {
    /// Commit raw input text (validated by the store).
    Text(String),
    /// Commit an already-computed value (arrow steps).
    Value(i64),
}

impl From<CommitRequest> for RawValue {
    fn from(request: CommitRequest) -> Self {
        match request {
            CommitRequest::Text(text) => RawValue::Text(text),
            CommitRequest::Value(value) => RawValue::Number(value as f64),
        }
    }
}

/// Effects the hosting component must execute after an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdate {
    pub commit: Option<CommitRequest>,
    pub select_text: bool,
    pub release_focus: bool,
}

pub struct CommitField {
    display: String,
    committed: i64,
    commit_locked: bool,
    stepper_armed: bool,
}

impl CommitField {
    pub fn new(initial: i64) -> Self {
        Self {
            display: initial.to_string(),
            committed: initial,
            commit_locked: false,
            stepper_armed: false,
        }
    }

    /// The text currently shown in the input.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The last authoritative value this field knows about.
    pub fn committed(&self) -> i64 {
        self.committed
    }

    /// Resynchronize after the store committed a value (returned from a
    /// setter, or pushed by an external change).
    pub fn sync_committed(&mut self, value: i64) {
        self.committed = value;
        self.display = value.to_string();
    }

    pub fn apply(&mut self, input: FieldInput) -> FieldUpdate {
        match input {
            FieldInput::Focus => FieldUpdate {
                select_text: true,
                ..FieldUpdate::default()
            },
            FieldInput::PointerDown => {
                self.stepper_armed = true;
                FieldUpdate::default()
            }
            FieldInput::Changed(text) => self.changed(text),
            FieldInput::KeyDown { key, shift } => self.key_down(key, shift),
            FieldInput::Blur => FieldUpdate {
                commit: Some(CommitRequest::Text(self.display.clone())),
                ..FieldUpdate::default()
            },
            FieldInput::External(value) => {
                if value != self.committed {
                    self.sync_committed(value);
                }
                FieldUpdate::default()
            }
        }
    }

    fn changed(&mut self, text: String) -> FieldUpdate {
        if self.commit_locked {
            // Synthetic change fired by the native step right after an
            // arrow-key commit; that commit already happened.
            self.commit_locked = false;
            return FieldUpdate::default();
        }
        if self.stepper_armed {
            // Change right after pointer-down without typing: a native
            // stepper click. Commit immediately and keep the text selected.
            return FieldUpdate {
                commit: Some(CommitRequest::Text(text)),
                select_text: true,
                ..FieldUpdate::default()
            };
        }
        // Plain typing: pending edit only, the store stays untouched.
        self.display = text;
        FieldUpdate::default()
    }

    fn key_down(&mut self, key: FieldKey, shift: bool) -> FieldUpdate {
        match key {
            FieldKey::Enter => FieldUpdate {
                commit: Some(CommitRequest::Text(self.display.clone())),
                release_focus: true,
                ..FieldUpdate::default()
            },
            FieldKey::Escape => {
                // Discard the pending edit; the store stays untouched.
                self.display = self.committed.to_string();
                FieldUpdate {
                    release_focus: true,
                    ..FieldUpdate::default()
                }
            }
            FieldKey::ArrowUp | FieldKey::ArrowDown => {
                let step = if shift { TIME_STEP * 10 } else { TIME_STEP };
                let direction = if key == FieldKey::ArrowUp { 1 } else { -1 };
                self.commit_locked = true;
                FieldUpdate {
                    commit: Some(CommitRequest::Value(self.committed + step * direction)),
                    select_text: true,
                    ..FieldUpdate::default()
                }
            }
            FieldKey::Other => {
                self.stepper_armed = false;
                FieldUpdate::default()
            }
        }
    }
}
