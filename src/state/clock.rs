//! Authoritative time/duration store.
//!
//! All commits pass through [`validate_and_format`]: unparseable text keeps
//! the previous value, everything else is quantized to the step grid and
//! clamped into range. Lowering the duration below the current time clamps
//! the time inside the same commit, so `time > duration` is never observable.

use std::cell::Cell;

use crate::constants::{
    DURATION_INIT, DURATION_MAX, DURATION_MIN, TIME_INIT, TIME_MIN, TIME_STEP,
};

use super::subscription::{Subscribers, SubscriptionId};

/// Raw commit input. Commit fields hand over either the text currently in the
/// input or an already-numeric value (arrow steps, ruler seeks).
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Snapshot emitted to subscribers after a committed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockChange {
    pub time: i64,
    pub duration: i64,
}

/// Normalize a raw value for commit.
///
/// Text that does not parse as a finite number returns `previous` unchanged.
/// Parsed values are rounded to the nearest multiple of [`TIME_STEP`]
/// (half away from zero) and clamped to `[min, max]`.
pub fn validate_and_format(raw: RawValue, previous: i64, max: i64, min: i64) -> i64 {
    let value = match raw {
        RawValue::Number(v) if v.is_finite() => v,
        RawValue::Number(_) => return previous,
        RawValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return previous,
        },
    };
    let step = TIME_STEP as f64;
    let stepped = (value / step).round() * step;
    (stepped as i64).clamp(min, max)
}

pub struct TimelineClock {
    time: Cell<i64>,
    duration: Cell<i64>,
    subscribers: Subscribers<ClockChange>,
}

impl TimelineClock {
    pub fn new() -> Self {
        Self {
            time: Cell::new(TIME_INIT),
            duration: Cell::new(DURATION_INIT),
            subscribers: Subscribers::new(),
        }
    }

    pub fn time(&self) -> i64 {
        self.time.get()
    }

    pub fn duration(&self) -> i64 {
        self.duration.get()
    }

    /// Commit a new current time. Returns the committed value.
    pub fn set_time(&self, raw: impl Into<RawValue>) -> i64 {
        let next = validate_and_format(raw.into(), self.time.get(), self.duration.get(), TIME_MIN);
        self.commit(next, self.duration.get());
        next
    }

    /// Commit a new total duration. Returns the committed value.
    ///
    /// If the committed duration falls below the current time, the time is
    /// clamped down through the same validation path as part of this commit.
    pub fn set_duration(&self, raw: impl Into<RawValue>) -> i64 {
        let next =
            validate_and_format(raw.into(), self.duration.get(), DURATION_MAX, DURATION_MIN);
        let time = self.time.get();
        let time = if time > next {
            validate_and_format(RawValue::Number(time as f64), time, next, TIME_MIN)
        } else {
            time
        };
        self.commit(time, next);
        next
    }

    /// Restore the initial time/duration pair atomically.
    pub fn reset(&self) {
        self.commit(TIME_INIT, DURATION_INIT);
    }

    pub fn subscribe(&self, listener: impl Fn(&ClockChange) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    fn commit(&self, time: i64, duration: i64) {
        let changed = time != self.time.get() || duration != self.duration.get();
        self.time.set(time);
        self.duration.set(duration);
        if changed {
            self.subscribers.emit(&ClockChange { time, duration });
        }
    }
}

impl Default for TimelineClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn clock_with_counter() -> (Rc<TimelineClock>, Rc<RefCell<Vec<ClockChange>>>) {
        let clock = Rc::new(TimelineClock::new());
        let changes = Rc::new(RefCell::new(Vec::new()));
        let changes_inner = changes.clone();
        clock.subscribe(move |change| changes_inner.borrow_mut().push(*change));
        (clock, changes)
    }

    #[test]
    fn test_initial_state() {
        let clock = TimelineClock::new();
        assert_eq!(clock.time(), 0);
        assert_eq!(clock.duration(), 2000);
    }

    #[test]
    fn test_time_commits_are_stepped_and_clamped() {
        let clock = TimelineClock::new();
        assert_eq!(clock.set_time("128.7"), 130);
        assert_eq!(clock.set_time("-120"), 0);
        assert_eq!(clock.set_time(15), 20);
        assert_eq!(clock.set_time(9999), 2000);
        for text in ["0", "3", "77", "1995", "2000"] {
            let committed = clock.set_time(text);
            assert_eq!(committed % TIME_STEP, 0, "input {text:?}");
            assert!((TIME_MIN..=clock.duration()).contains(&committed), "input {text:?}");
        }
    }

    #[test]
    fn test_invalid_text_keeps_previous_value() {
        let clock = TimelineClock::new();
        clock.set_time(500);
        assert_eq!(clock.set_time("abc"), 500);
        assert_eq!(clock.set_time(""), 500);
        assert_eq!(clock.set_time("   "), 500);
        assert_eq!(clock.set_time(f64::NAN), 500);
        assert_eq!(clock.time(), 500);
    }

    #[test]
    fn test_duration_commits_are_stepped_and_clamped() {
        let clock = TimelineClock::new();
        assert_eq!(clock.set_duration("3000"), 3000);
        assert_eq!(clock.set_duration(42), 100);
        assert_eq!(clock.set_duration(7000), 6000);
        assert_eq!(clock.set_duration("1234.4"), 1230);
    }

    #[test]
    fn test_lowering_duration_clamps_time_in_same_commit() {
        let (clock, changes) = clock_with_counter();
        clock.set_duration(3000);
        clock.set_time(2000);
        changes.borrow_mut().clear();

        assert_eq!(clock.set_duration("1000"), 1000);
        assert_eq!(clock.time(), 1000);
        // One notification carrying both the new duration and the clamped time.
        assert_eq!(changes.borrow().len(), 1);
        assert_eq!(
            changes.borrow()[0],
            ClockChange { time: 1000, duration: 1000 }
        );
    }

    #[test]
    fn test_recommitting_equal_value_is_silent() {
        let (clock, changes) = clock_with_counter();
        clock.set_time(300);
        assert_eq!(changes.borrow().len(), 1);
        clock.set_time(300);
        clock.set_time("300");
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_invalid_commit_does_not_notify() {
        let (clock, changes) = clock_with_counter();
        clock.set_time("not a number");
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_reset_restores_initial_pair() {
        let (clock, changes) = clock_with_counter();
        clock.set_duration(4000);
        clock.set_time(1500);
        changes.borrow_mut().clear();

        clock.reset();
        assert_eq!(clock.time(), TIME_INIT);
        assert_eq!(clock.duration(), DURATION_INIT);
        assert_eq!(changes.borrow().len(), 1);

        clock.reset();
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_time_cannot_exceed_duration() {
        let clock = TimelineClock::new();
        clock.set_duration(500);
        assert_eq!(clock.set_time(800), 500);
    }

    #[test]
    fn test_validate_and_format_rounds_half_away_from_zero() {
        assert_eq!(validate_and_format(RawValue::Number(15.0), 0, 6000, 0), 20);
        assert_eq!(validate_and_format(RawValue::Number(14.9), 0, 6000, 0), 10);
        assert_eq!(
            validate_and_format(RawValue::Number(-15.0), 0, 6000, -6000),
            -20
        );
    }
}
