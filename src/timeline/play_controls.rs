//! Play controls: the two numeric commit fields (current time, duration).
//!
//! Each field wraps one input with a [`CommitField`] controller. DOM events
//! are translated into controller inputs, and the returned effects are
//! executed here: committing against the clock store, re-selecting the text,
//! or releasing focus via the DOM bridge.

use dioxus::prelude::*;

use crate::constants::{
    BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, CURRENT_TIME_INPUT_ID, DURATION_INPUT_ID,
    DURATION_MAX, DURATION_MIN, TEXT_MUTED, TEXT_PRIMARY, TIME_MIN, TIME_STEP,
};
use crate::state::TimelineClock;

use super::commit_field::{CommitField, FieldInput, FieldKey, FieldUpdate};
use super::TimelineContext;

#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldKind {
    CurrentTime,
    Duration,
}

#[component]
pub(crate) fn PlayControls() -> Element {
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                gap: 4px; padding: 0 8px;
                background-color: {BG_ELEVATED};
                border-right: 1px solid {BORDER_DEFAULT};
                border-bottom: 1px solid {BORDER_DEFAULT};
            ",
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                span { style: "font-size: 11px; color: {TEXT_MUTED};", "Current" }
                TimeField { kind: FieldKind::CurrentTime }
            }
            span { style: "color: {TEXT_MUTED};", "-" }
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                TimeField { kind: FieldKind::Duration }
                span { style: "font-size: 11px; color: {TEXT_MUTED};", "Duration" }
            }
        }
    }
}

/// Run a controller update's effects: store commit, reselect, focus release.
fn run_update(
    kind: FieldKind,
    clock: &TimelineClock,
    mut field: Signal<CommitField>,
    input_id: &str,
    update: FieldUpdate,
) {
    if let Some(request) = update.commit {
        let committed = match kind {
            FieldKind::CurrentTime => clock.set_time(request),
            FieldKind::Duration => clock.set_duration(request),
        };
        field.write().sync_committed(committed);
    }
    if update.select_text {
        let _ = document::eval(&format!(
            r#"document.getElementById('{input_id}')?.select();"#
        ));
    }
    if update.release_focus {
        let _ = document::eval(&format!(
            r#"document.getElementById('{input_id}')?.blur();"#
        ));
    }
}

#[component]
fn TimeField(kind: FieldKind) -> Element {
    let ctx = use_context::<TimelineContext>();
    let clock = ctx.clock.clone();
    let value = match kind {
        FieldKind::CurrentTime => ctx.time,
        FieldKind::Duration => ctx.duration,
    };
    let duration = ctx.duration;

    let initial = match kind {
        FieldKind::CurrentTime => clock.time(),
        FieldKind::Duration => clock.duration(),
    };
    let mut field = use_signal(|| CommitField::new(initial));

    let input_id = match kind {
        FieldKind::CurrentTime => CURRENT_TIME_INPUT_ID,
        FieldKind::Duration => DURATION_INPUT_ID,
    };

    // Resync the display when the authoritative value changes underneath the
    // field (duration commits cascading onto time, reset).
    use_effect(move || {
        let current = value();
        let committed = field.peek().committed();
        if committed != current {
            field.write().apply(FieldInput::External(current));
        }
    });

    let min = match kind {
        FieldKind::CurrentTime => TIME_MIN,
        FieldKind::Duration => DURATION_MIN,
    };
    let max = match kind {
        FieldKind::CurrentTime => duration(),
        FieldKind::Duration => DURATION_MAX,
    };
    let display = field.read().display().to_string();

    let clock_focus = clock.clone();
    let clock_mousedown = clock.clone();
    let clock_input = clock.clone();
    let clock_keydown = clock.clone();
    let clock_blur = clock;

    rsx! {
        input {
            id: "{input_id}",
            r#type: "number",
            min: "{min}",
            max: "{max}",
            step: "{TIME_STEP}",
            value: "{display}",
            style: "
                width: 72px; box-sizing: border-box;
                padding: 4px 6px; font-size: 12px;
                background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                outline: none; user-select: text;
            ",
            onfocus: move |_| {
                let update = field.write().apply(FieldInput::Focus);
                run_update(kind, &clock_focus, field, input_id, update);
            },
            onmousedown: move |_| {
                let update = field.write().apply(FieldInput::PointerDown);
                run_update(kind, &clock_mousedown, field, input_id, update);
            },
            oninput: move |e| {
                let update = field.write().apply(FieldInput::Changed(e.value()));
                run_update(kind, &clock_input, field, input_id, update);
            },
            onkeydown: move |e: KeyboardEvent| {
                let key = match e.key() {
                    Key::Enter => FieldKey::Enter,
                    Key::Escape => FieldKey::Escape,
                    Key::ArrowUp => FieldKey::ArrowUp,
                    Key::ArrowDown => FieldKey::ArrowDown,
                    _ => FieldKey::Other,
                };
                let shift = e.modifiers().shift();
                let update = field.write().apply(FieldInput::KeyDown { key, shift });
                run_update(kind, &clock_keydown, field, input_id, update);
            },
            onblur: move |_| {
                let update = field.write().apply(FieldInput::Blur);
                run_update(kind, &clock_blur, field, input_id, update);
            },
        }
    }
}
