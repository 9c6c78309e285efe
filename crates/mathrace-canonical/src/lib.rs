//! Canonical race dictionary shared by every mathrace journal revision.
//!
//! A [`RaceDict`] is what journal readers produce and journal writers
//! consume. Its serde representation matches the race database import
//! format, and the [`filter`] module holds the normalisations used to
//! compare races coming from different revisions.
//!
#![deny(missing_docs)]

/// In-place normalisations of a race dictionary.
pub mod filter;
/// Race, team, question and event types.
pub mod race;
/// Structural invariants of a race dictionary.
pub mod validation;

pub use filter::{
    reorder_lists, strip_mathrace_only, strip_mathrace_only_value, strip_milliseconds,
    strip_trailing_zero_bonus,
};
pub use race::{
    Event, EventKind, Jolly, MathraceOnly, Question, RaceDict, Submission, Team,
    DEFAULT_FIXED_BONUS, DEFAULT_SUPER_MEGA_BONUS, FIXED_BONUS_LEN, SUPER_MEGA_BONUS_LEN,
};
pub use validation::{ValidationError, MAX_ANSWER};
