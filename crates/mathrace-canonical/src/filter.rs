//! In-place normalisations of a [`RaceDict`].
//!
//! Every filter is idempotent: applying it twice leaves the race as
//! applying it once does.

use crate::race::RaceDict;
use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};
use serde_json::Value;

/// Key under which side-band attributes are stored.
pub const MATHRACE_ONLY_KEY: &str = "mathrace_only";

/// Identifier key assigned by the race database to imported objects.
pub const MATHRACE_ID_KEY: &str = "mathrace_id";

/// Sorts events by their canonical key, questions by number and teams by number.
///
/// The sort is stable, so events with identical keys keep their relative order.
pub fn reorder_lists(race: &mut RaceDict) {
    race.events.sort_by(|a, b| a.canonical_cmp(b));
    race.questions.sort_by_key(|q| q.problema);
    race.teams.sort_by_key(|t| t.num);
}

/// Truncates the sub-second part of the race start and of every event instant.
pub fn strip_milliseconds(race: &mut RaceDict) {
    if let Some(start) = race.start {
        race.start = Some(truncate_to_second(start));
    }
    for event in &mut race.events {
        let instant = truncate_to_second(event.instant());
        event.set_instant(instant);
    }
}

/// Drops trailing zeros from both bonus arrays.
pub fn strip_trailing_zero_bonus(race: &mut RaceDict) {
    trim_trailing_zeros(&mut race.fixed_bonus);
    trim_trailing_zeros(&mut race.super_mega_bonus);
}

/// Clears the side-band attributes of the race, its teams, questions and events.
pub fn strip_mathrace_only(race: &mut RaceDict) {
    race.mathrace_only.clear();
    for team in &mut race.teams {
        team.mathrace_only.clear();
    }
    for question in &mut race.questions {
        question.mathrace_only.clear();
    }
    for event in &mut race.events {
        event.mathrace_only_mut().clear();
    }
}

/// Removes every `mathrace_only` and `mathrace_id` key from a JSON document, at any depth.
pub fn strip_mathrace_only_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove(MATHRACE_ONLY_KEY);
            map.remove(MATHRACE_ID_KEY);
            for nested in map.values_mut() {
                strip_mathrace_only_value(nested);
            }
        }
        Value::Array(items) => {
            for nested in items {
                strip_mathrace_only_value(nested);
            }
        }
        _ => {}
    }
}

fn truncate_to_second(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    instant - TimeDelta::nanoseconds(i64::from(instant.nanosecond()))
}

fn trim_trailing_zeros(values: &mut Vec<u32>) {
    while values.last() == Some(&0) {
        values.pop();
    }
}
