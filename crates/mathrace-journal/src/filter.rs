//! Text-level journal filters.
//!
//! These filters work on the journal text rather than on a race dictionary,
//! so comments and events the dictionary does not model survive them (except
//! where a filter removes them on purpose).

use crate::detect::determine_journal_version;
use crate::errors::JournalError;
use crate::line::JournalLine;
use crate::timestamp::parse_millis;
use crate::version::{EventCategory, FILE_END};
use tracing::debug;

/// Removes comments, blank lines and the events the race dictionary ignores.
///
/// # Errors
///
/// Fails when the revision of `content` cannot be detected.
pub fn strip_comments_and_unhandled_events(content: &str) -> Result<String, JournalError> {
    let version = determine_journal_version(content)?;
    let vocabulary = version.vocabulary();
    let kept: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| match JournalLine::parse(line) {
            JournalLine::Blank | JournalLine::Comment(_) => false,
            JournalLine::Event { code, .. } => !vocabulary.is_ignored(code),
            JournalLine::Setup { .. } => true,
        })
        .collect();
    debug!(version = %version, lines = kept.len(), "stripped journal");
    Ok(join(kept))
}

/// Keeps the journal up to and including its `upper_bound`-th submission or jolly.
///
/// Events are counted from 1 in file order. The result ends with the
/// file-end marker, so it is itself a journal of a race still running.
///
/// # Errors
///
/// Fails when the revision of `content` cannot be detected.
pub fn filter_events_by_id(content: &str, upper_bound: usize) -> Result<String, JournalError> {
    let version = determine_journal_version(content)?;
    let vocabulary = version.vocabulary();
    let mut seen = 0;
    truncate(content, |line| {
        let JournalLine::Event { code, .. } = line else {
            return Ok(Cut::Keep);
        };
        match vocabulary.classify(code) {
            Some(EventCategory::AnswerSubmission | EventCategory::JollySelection) => {
                if seen == upper_bound {
                    return Ok(Cut::Before);
                }
                seen += 1;
                Ok(if seen == upper_bound {
                    Cut::After
                } else {
                    Cut::Keep
                })
            }
            _ => Ok(Cut::Keep),
        }
    })
}

/// Keeps the journal up to the last event not later than `upper_bound`.
///
/// The bound is read leniently: `450`, `7:30`, `450.1` and `00:07:30.000`
/// are all valid. The result ends with the file-end marker.
///
/// # Errors
///
/// - [`JournalError::MalformedTimestamp`] if the bound or an event timestamp cannot be decoded
pub fn filter_events_by_timestamp(content: &str, upper_bound: &str) -> Result<String, JournalError> {
    let bound = parse_millis(upper_bound)?;
    truncate(content, |line| match line {
        JournalLine::Event { timestamp, .. } if parse_millis(timestamp)? > bound => Ok(Cut::Before),
        _ => Ok(Cut::Keep),
    })
}

/// Decision taken on each line by [`truncate`].
enum Cut {
    /// Keep the line and continue.
    Keep,
    /// Keep the line, then stop.
    After,
    /// Stop without keeping the line.
    Before,
}

/// Copies lines until `decide` stops or the original file-end marker is met,
/// then appends a fresh file-end marker.
fn truncate<F>(content: &str, mut decide: F) -> Result<String, JournalError>
where
    F: FnMut(JournalLine<'_>) -> Result<Cut, JournalError>,
{
    let mut kept = Vec::new();
    for line in content.lines().map(str::trim_end) {
        if line == FILE_END {
            break;
        }
        match decide(JournalLine::parse(line))? {
            Cut::Keep => kept.push(line),
            Cut::After => {
                kept.push(line);
                break;
            }
            Cut::Before => break,
        }
    }
    debug!(lines = kept.len(), "truncated journal");
    kept.push(FILE_END);
    Ok(join(kept))
}

fn join(lines: Vec<&str>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
