//! Readers, writers and converters for the mathrace journal format.
//!
//! The race simulator logs a race as a plain-text journal. Ten revisions of
//! the format are in circulation, from `r5539` to `r25013`; they renumber
//! event codes, switch timestamp encodings and grow optional setup lines.
//! This crate provides:
//! - Detection of the oldest revision able to produce a journal
//! - A reader and a writer for every revision, sharing one canonical race dictionary
//! - Conversion between any two revisions
//! - Text filters and a live replay of completed journals
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::DateTime;
//! use mathrace_journal::{convert_journal, read_journal, JournalVersion};
//!
//! let journal = "--- 001 inizializzazione simulatore\n\
//!                --- 003 2 1 10 10 6 4 1 1 10 8 -- squadre: 2 quesiti: 1\n\
//!                --- 004 1 20 quesito 1 punteggio iniziale 20\n\
//!                0 200 inizio gara\n\
//!                90 110 1 1 1 squadra 1, quesito 1: giusto\n\
//!                600 210 termine gara\n\
//!                --- 999 fine simulatore\n";
//!
//! let start = DateTime::parse_from_rfc3339("2024-05-01T09:00:00+02:00")?;
//! let race = read_journal(journal, "gara", start)?;
//! assert_eq!(race.events.len(), 1);
//!
//! let converted = convert_journal(journal.as_bytes(), JournalVersion::R25013)?;
//! assert!(converted.contains("00:01:30.000 110 1 1 1 PROT:1"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Types
//!
//! - [`JournalVersion`] - A revision of the format
//! - [`JournalReader`] - Read a journal into a [`mathrace_canonical::RaceDict`]
//! - [`JournalWriter`] - Write a race dictionary as a journal
//! - [`LiveJournal`] - Replay a completed journal in snapshots

#![deny(missing_docs)]

/// Cross-revision conversion.
pub mod convert;
/// Revision detection.
pub mod detect;
/// Error types for journal operations.
pub mod errors;
/// Text-level filters.
pub mod filter;
/// Line splitting shared by every revision.
pub mod line;
/// Snapshot replay of completed journals.
pub mod live;
/// Journal reader implementation.
pub mod reader;
mod setup;
/// Timestamp codec.
pub mod timestamp;
/// Revisions and event vocabularies.
pub mod version;
/// Journal writer implementation.
pub mod writer;

pub use convert::convert_journal;
pub use detect::determine_journal_version;
pub use errors::JournalError;
pub use filter::{
    filter_events_by_id, filter_events_by_timestamp, strip_comments_and_unhandled_events,
};
pub use line::JournalLine;
pub use live::LiveJournal;
pub use reader::{read_journal, JournalReader, ReadOptions};
pub use timestamp::TimestampFormat;
pub use version::{
    list_journal_versions, EventCategory, IgnoredEvent, JournalVersion, Vocabulary, FILE_BEGIN,
    FILE_END,
};
pub use writer::{write_journal, JournalWriter};
