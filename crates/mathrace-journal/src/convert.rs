//! Cross-revision journal conversion.

use crate::detect::determine_journal_version;
use crate::errors::JournalError;
use crate::reader::{JournalReader, ReadOptions};
use crate::version::JournalVersion;
use crate::writer::write_journal;
use chrono::{DateTime, FixedOffset, Utc};
use mathrace_canonical::reorder_lists;
use std::io::BufRead;
use tracing::debug;

/// Race name used for the intermediate dictionary.
const CONVERTER_RACE_NAME: &str = "journal_version_converter";

/// Converts a journal of any revision into a journal of `target`.
///
/// The source revision is detected from the content. The intermediate read
/// tolerates events written out of chronological order; the dictionary is
/// reordered before it reaches the writer.
///
/// # Errors
///
/// Propagates detection and reading errors, and
/// [`JournalError::UnsupportedFeature`] when `target` cannot express the race.
pub fn convert_journal<R: BufRead>(
    mut input: R,
    target: JournalVersion,
) -> Result<String, JournalError> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;
    let source = determine_journal_version(&content)?;

    let options = ReadOptions {
        strict_timestamp_race_events: false,
    };
    let mut race = JournalReader::with_options(content.as_bytes(), source, options)
        .read(CONVERTER_RACE_NAME, conversion_start())?;
    reorder_lists(&mut race);

    let converted = write_journal(&race, target)?;
    debug!(source = %source, target = %target, "converted journal");
    Ok(converted)
}

fn conversion_start() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}
