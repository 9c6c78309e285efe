use crate::version::JournalVersion;
use mathrace_canonical::ValidationError;
use thiserror::Error;

/// Errors that can occur during journal operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The journal has no content.
    #[error("journal is empty")]
    EmptyJournal,
    /// The journal does not have the overall shape of a journal.
    #[error("malformed journal: {0}")]
    MalformedJournal(String),
    /// The first line is not the file-begin marker.
    #[error("invalid journal header at line {line}: expected '--- 001 inizializzazione simulatore'")]
    MalformedHeader {
        /// 1-based line number, 0 at end of input.
        line: usize,
    },
    /// The journal does not end with the file-end marker.
    #[error("invalid journal footer at line {line}: {reason}")]
    MalformedFooter {
        /// 1-based line number, 0 at end of input.
        line: usize,
        /// Reason for invalidity.
        reason: String,
    },
    /// Content follows the file-end marker.
    #[error("unexpected content after file end at line {line}")]
    TrailingGarbage {
        /// 1-based line number.
        line: usize,
    },
    /// A timestamp token could not be decoded.
    #[error("malformed timestamp '{0}'")]
    MalformedTimestamp(String),
    /// A race event line could not be parsed.
    #[error("malformed event at line {line}: {reason}")]
    MalformedEventLine {
        /// 1-based line number.
        line: usize,
        /// Reason for invalidity.
        reason: String,
    },
    /// A setup line could not be parsed.
    #[error("malformed setup at line {line}: {reason}")]
    MalformedSetupLine {
        /// 1-based line number, 0 at end of input.
        line: usize,
        /// Reason for invalidity.
        reason: String,
    },
    /// The event code is not part of the revision's vocabulary.
    #[error("unknown event code {code} at line {line}")]
    UnknownEventCode {
        /// 1-based line number.
        line: usize,
        /// Offending code.
        code: String,
    },
    /// Both the r5539 and the later race-start markers are present.
    #[error("journal contains both '0 002 inizio gara' and '200 inizio gara'")]
    ConflictingStartEvents,
    /// An event happens before the one preceding it.
    #[error("event at {location} happens before the previous event")]
    NonMonotonicEvents {
        /// Line number (reader) or event index (writer).
        location: String,
    },
    /// A team selected a second jolly.
    #[error("team {team} selects question {question} as jolly, but already selected {previous}")]
    DuplicateJolly {
        /// Team number.
        team: u32,
        /// Question selected by the rejected jolly.
        question: u32,
        /// Question selected by the earlier jolly.
        previous: u32,
    },
    /// The target revision cannot express a feature of the race.
    #[error("journal version {version} does not support {feature}")]
    UnsupportedFeature {
        /// Target revision.
        version: JournalVersion,
        /// Feature that cannot be expressed.
        feature: String,
    },
    /// The race carries events but has not started.
    #[error("race has not started but carries {0} events")]
    RaceNotStarted(usize),
    /// The live journal was opened more times than its budget allows.
    #[error("journal was fully read already")]
    Exhausted,
    /// A live journal needs at least one snapshot.
    #[error("live journal needs at least one snapshot")]
    ZeroSnapshotBudget,
    /// A revision identifier could not be parsed.
    #[error("unknown journal version '{0}'")]
    UnknownVersion(String),
    /// The race dictionary violates a canonical invariant.
    #[error("invalid race: {0}")]
    InvalidRace(#[from] ValidationError),
}

impl JournalError {
    pub(crate) fn event(line: usize, reason: impl Into<String>) -> Self {
        JournalError::MalformedEventLine {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn setup(line: usize, reason: impl Into<String>) -> Self {
        JournalError::MalformedSetupLine {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(version: JournalVersion, feature: impl Into<String>) -> Self {
        JournalError::UnsupportedFeature {
            version,
            feature: feature.into(),
        }
    }
}
