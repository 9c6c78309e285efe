//! Detection of the earliest revision able to produce a journal.

use crate::errors::JournalError;
use crate::line::{split_token, JournalLine};
use crate::version::{
    JournalVersion, ALTERNATIVE_RACE_DEFINITION, BONUS_DEFINITION, QUESTION_DEFINITION,
    RACE_DEFINITION, RACE_START_TEXT, SUPER_BONUS_DEFINITION, TEAM_DEFINITION,
};
use tracing::debug;

const R5539_RACE_START: &str = "0 002 inizio gara";

/// Returns the earliest revision compatible with the journal content.
///
/// The content is only scanned, so the same text can be handed to a reader
/// afterwards.
///
/// # Errors
///
/// - [`JournalError::EmptyJournal`] if the content has no non-blank line
/// - [`JournalError::MalformedJournal`] if event lines appear without a race start
/// - [`JournalError::ConflictingStartEvents`] if both start markers are present
pub fn determine_journal_version(content: &str) -> Result<JournalVersion, JournalError> {
    let lines = trimmed_lines(content);
    if lines.is_empty() {
        return Err(JournalError::EmptyJournal);
    }

    let has_race_start = lines.iter().any(|line| is_race_start(line));
    if !has_race_start {
        if let Some(line) = lines.iter().find(|line| {
            matches!(JournalLine::parse(line), JournalLine::Event { .. })
        }) {
            return Err(JournalError::MalformedJournal(format!(
                "event line '{line}' found, but the race never starts"
            )));
        }
    }

    if lines.iter().any(|line| line.trim_end() == R5539_RACE_START) {
        if lines
            .iter()
            .any(|line| line.contains(&format!("200 {RACE_START_TEXT}")))
        {
            return Err(JournalError::ConflictingStartEvents);
        }
        debug!(version = %JournalVersion::R5539, "detected journal version");
        return Ok(JournalVersion::R5539);
    }

    // Only the r5539 start line identifies r5539; setup-only journals count as r11167.
    let mut oldest = JournalVersion::R11167;
    for (introduced_by, present) in feature_markers(&lines) {
        if present && introduced_by > oldest {
            oldest = introduced_by;
        }
    }
    debug!(version = %oldest, "detected journal version");
    Ok(oldest)
}

fn trimmed_lines(content: &str) -> Vec<&str> {
    let lines: Vec<&str> = content.lines().collect();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].to_vec(),
        _ => Vec::new(),
    }
}

fn is_race_start(line: &str) -> bool {
    match JournalLine::parse(line) {
        JournalLine::Event { code, payload, .. } => {
            (code == "002" || code == "200") && payload == RACE_START_TEXT
        }
        _ => false,
    }
}

/// Each marker pairs the revision that introduced a feature with whether the feature is used.
fn feature_markers(lines: &[&str]) -> [(JournalVersion, bool); 8] {
    let parsed: Vec<JournalLine<'_>> = lines.iter().map(|line| JournalLine::parse(line)).collect();
    let any_setup = |wanted: &[&str]| {
        parsed
            .iter()
            .any(|line| matches!(line.setup_code(), Some(code) if wanted.contains(&code)))
    };

    let protocol_numbers = parsed.iter().any(|line| {
        matches!(line, JournalLine::Event { code, payload, .. }
            if (*code == "110" || *code == "120") && payload.contains("PROT:"))
    });
    let second_timer = parsed
        .iter()
        .any(|line| matches!(line, JournalLine::Event { code: "901", .. }));
    let block_k = parsed.iter().any(|line| {
        matches!(line, JournalLine::Setup { code, payload } if *code == RACE_DEFINITION && payload.contains('.'))
    });
    let clock_timestamps = parsed.iter().any(|line| {
        matches!(line, JournalLine::Event { timestamp, .. } if timestamp.contains(':'))
    });
    let question_answers = parsed.iter().any(|line| match line {
        JournalLine::Setup { code, payload } if *code == QUESTION_DEFINITION => {
            let (_, rest) = split_token(payload);
            let (_, rest) = split_token(rest);
            let (answer, _) = split_token(rest);
            answer.len() == 4 && answer.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    });

    [
        (JournalVersion::R11184, protocol_numbers),
        (JournalVersion::R11189, second_timer),
        (JournalVersion::R17497, block_k),
        (JournalVersion::R17505, any_setup(&[TEAM_DEFINITION])),
        (JournalVersion::R17548, any_setup(&[ALTERNATIVE_RACE_DEFINITION])),
        (
            JournalVersion::R20642,
            any_setup(&[BONUS_DEFINITION, SUPER_BONUS_DEFINITION]),
        ),
        (JournalVersion::R20644, clock_timestamps),
        (JournalVersion::R25013, question_answers),
    ]
}
