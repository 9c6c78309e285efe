//! Journal writer implementation.

use crate::errors::JournalError;
use crate::reader::{
    DEFAULT_QUESTION_SCORE_KEY, PROTOCOL_KEY, RACE_END_KEY, RACE_START_KEY, RESERVED_KEY,
};
use crate::setup::{
    format_fixed_bonus, format_super_bonus, QuestionDefinition, RaceDefinition, TeamDefinition,
    DEFAULT_RESERVED,
};
use crate::timestamp::{format_seconds, seconds_since, TimestampFormat};
use crate::version::{JournalVersion, FILE_BEGIN, FILE_END, RACE_END_TEXT, RACE_START_TEXT};
use mathrace_canonical::{
    Event, MathraceOnly, Question, RaceDict, DEFAULT_FIXED_BONUS, DEFAULT_SUPER_MEGA_BONUS,
    FIXED_BONUS_LEN, SUPER_MEGA_BONUS_LEN,
};
use std::io::Write;
use tracing::debug;

/// Answer marking a correct submission when the question's answer is unknown.
const CORRECT_FLAG: u32 = 1;

/// Writer of one journal revision.
///
/// The whole journal is laid out before the first byte reaches the stream,
/// so a race the revision cannot express leaves the stream untouched.
///
/// # Example
///
/// ```rust
/// use mathrace_canonical::RaceDict;
/// use mathrace_journal::{JournalVersion, JournalWriter};
///
/// let race = RaceDict::new("gara", 2, 1);
/// let bytes = JournalWriter::new(Vec::new(), JournalVersion::R5539).write(&race)?;
/// assert!(String::from_utf8(bytes)?.ends_with("--- 999 fine simulatore\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct JournalWriter<W> {
    stream: W,
    version: JournalVersion,
}

impl<W: Write> JournalWriter<W> {
    /// Creates a writer for `version` over `stream`.
    pub fn new(stream: W, version: JournalVersion) -> Self {
        Self { stream, version }
    }

    /// Revision this writer emits.
    pub fn version(&self) -> JournalVersion {
        self.version
    }

    /// Writes the race and hands the stream back.
    ///
    /// # Errors
    ///
    /// - [`JournalError::RaceNotStarted`] if events exist without a race start
    /// - [`JournalError::InvalidRace`] if the race breaks a canonical invariant
    /// - [`JournalError::UnsupportedFeature`] if the revision cannot express the race
    /// - [`JournalError::NonMonotonicEvents`] if events are not in chronological order
    pub fn write(mut self, race: &RaceDict) -> Result<W, JournalError> {
        let journal = render(race, self.version)?;
        self.stream.write_all(journal.as_bytes())?;
        self.stream.flush()?;
        Ok(self.stream)
    }
}

/// Writes `race` as a journal of revision `version`.
pub fn write_journal(race: &RaceDict, version: JournalVersion) -> Result<String, JournalError> {
    render(race, version)
}

fn render(race: &RaceDict, version: JournalVersion) -> Result<String, JournalError> {
    if race.start.is_none() && !race.events.is_empty() {
        return Err(JournalError::RaceNotStarted(race.events.len()));
    }
    race.validate()?;
    let plan = Plan::new(race, version)?;

    let mut lines = vec![FILE_BEGIN.to_string()];
    if plan.alternative {
        lines.push(plan.definition.format_alternative(version));
    } else {
        lines.push(plan.definition.format_standard(version));
    }
    if let Some(fixed_bonus) = &plan.fixed_bonus {
        lines.push(format_fixed_bonus(fixed_bonus));
    }
    if let Some(super_bonus) = &plan.super_bonus {
        lines.push(format_super_bonus(super_bonus));
    }
    for question in &race.questions {
        let definition = QuestionDefinition {
            problema: question.problema,
            initial_score: question.initial_score,
            correct_answer: question.correct_answer,
        };
        lines.push(definition.format(version));
    }
    if plan.team_definitions {
        for team in &race.teams {
            let definition = TeamDefinition {
                num: team.num,
                guest: team.guest,
                name: team.name.clone(),
            };
            lines.push(definition.format());
        }
    }
    write_race_events(race, version, &mut lines)?;
    lines.push(FILE_END.to_string());

    debug!(version = %version, lines = lines.len(), "wrote journal");
    let mut journal = lines.join("\n");
    journal.push('\n');
    Ok(journal)
}

/// Setup decisions for one race and one revision.
struct Plan {
    definition: RaceDefinition,
    alternative: bool,
    team_definitions: bool,
    fixed_bonus: Option<Vec<u32>>,
    super_bonus: Option<Vec<u32>>,
}

impl Plan {
    fn new(race: &RaceDict, version: JournalVersion) -> Result<Self, JournalError> {
        check_numbering(race, version)?;
        if race.cutoff.is_some() {
            return Err(JournalError::unsupported(version, "a cutoff"));
        }
        let Some(block_n) = race.block_n else {
            return Err(JournalError::unsupported(version, "an unbounded block_n"));
        };
        let block_k = race.block_k.unwrap_or(1);
        if block_k != 1 && !version.has_block_k() {
            return Err(JournalError::unsupported(
                version,
                format!("block_k = {block_k}"),
            ));
        }

        let team_definitions = race.teams.iter().any(|team| team.is_custom());
        if team_definitions {
            if !version.has_team_definitions() {
                return Err(JournalError::unsupported(
                    version,
                    "custom team names or guest teams",
                ));
            }
            if let Some(team) = race.teams.iter().find(|team| !is_writable_name(&team.name)) {
                return Err(JournalError::unsupported(
                    version,
                    format!("team name '{}'", team.name.escape_debug()),
                ));
            }
        }

        let fixed_bonus = padded(&race.fixed_bonus, FIXED_BONUS_LEN);
        let fixed_custom = fixed_bonus[..] != DEFAULT_FIXED_BONUS[..];
        let super_bonus = padded(&race.super_mega_bonus, SUPER_MEGA_BONUS_LEN);
        let super_empty = super_bonus.iter().all(|value| *value == 0);
        let super_default = super_bonus[..] == DEFAULT_SUPER_MEGA_BONUS[..];

        // 002 always announces six super bonus levels: a different super bonus
        // needs a 012 line, otherwise 003 + 005 carries the race.
        let alternative = team_definitions
            && version.has_alternative_race_definition()
            && (super_default || version.has_bonus_definitions());
        let super_custom = !super_default && (alternative || !super_empty);
        if (fixed_custom || super_custom) && !version.has_bonus_definitions() {
            return Err(JournalError::unsupported(version, "custom bonus levels"));
        }

        let total_score = u32::try_from(race.total_initial_score()).map_err(|_| {
            JournalError::unsupported(version, "an initial score above u32::MAX")
        })?;
        let deadline = race
            .deadline_score_increase_min
            .unwrap_or(race.duration_minutes);
        let definition = RaceDefinition {
            num_teams: race.teams.len() as u32,
            num_guests: race.teams.iter().filter(|team| team.guest).count() as u32,
            num_questions: race.num_questions,
            total_score,
            super_bonus_cardinality: if !alternative && super_empty {
                0
            } else {
                SUPER_MEGA_BONUS_LEN as u32
            },
            block_n,
            block_k,
            jolly_enabled: race.jolly_enabled,
            reserved: stashed(&race.mathrace_only, RESERVED_KEY)
                .and_then(|value| u32::try_from(value).ok())
                .unwrap_or(DEFAULT_RESERVED),
            duration: race.duration_minutes,
            deadline,
            default_question_score: alternative.then(|| {
                stashed(&race.mathrace_only, DEFAULT_QUESTION_SCORE_KEY)
                    .and_then(|value| u32::try_from(value).ok())
                    .or_else(|| race.questions.first().map(|q| q.initial_score))
                    .unwrap_or(0)
            }),
        };

        Ok(Self {
            definition,
            alternative,
            team_definitions,
            fixed_bonus: fixed_custom.then_some(fixed_bonus),
            super_bonus: super_custom.then_some(super_bonus),
        })
    }
}

fn check_numbering(race: &RaceDict, version: JournalVersion) -> Result<(), JournalError> {
    for (i, team) in race.teams.iter().enumerate() {
        if team.num as usize != i + 1 {
            return Err(JournalError::unsupported(
                version,
                format!("team number {} at position {}", team.num, i + 1),
            ));
        }
    }
    for (i, question) in race.questions.iter().enumerate() {
        if question.problema as usize != i + 1 {
            return Err(JournalError::unsupported(
                version,
                format!("question number {} at position {}", question.problema, i + 1),
            ));
        }
        if question.name != Question::default_name(question.problema) {
            return Err(JournalError::unsupported(
                version,
                format!("question name '{}'", question.name.escape_debug()),
            ));
        }
        if question.correct_answer != 0 && !version.has_question_answers() {
            return Err(JournalError::unsupported(version, "question answers"));
        }
    }
    Ok(())
}

fn write_race_events(
    race: &RaceDict,
    version: JournalVersion,
    lines: &mut Vec<String>,
) -> Result<(), JournalError> {
    let Some(start) = race.start else {
        return Ok(());
    };
    let format = TimestampFormat::for_version(version);
    let vocabulary = version.vocabulary();

    let start_second = if version == JournalVersion::R5539 {
        0
    } else {
        stashed(&race.mathrace_only, RACE_START_KEY).unwrap_or(0)
    };
    lines.push(format!(
        "{} {} {RACE_START_TEXT}",
        format_seconds(start_second, format),
        vocabulary.race_start
    ));

    let mut previous = start;
    let mut last_second = start_second;
    for (index, event) in race.events.iter().enumerate() {
        let instant = event.instant();
        if instant < previous {
            return Err(JournalError::NonMonotonicEvents {
                location: format!("event {index}"),
            });
        }
        previous = instant;
        let second = seconds_since(instant, start);
        last_second = last_second.max(second);
        let timestamp = format_seconds(second, format);
        let protocol = if version.has_protocol_numbers() {
            let number = stashed(event.mathrace_only(), PROTOCOL_KEY).unwrap_or(index as u64 + 1);
            format!(" PROT:{number}")
        } else {
            String::new()
        };
        let line = match event {
            Event::Submission(s) => {
                let correct = match race.question(s.question_num) {
                    Some(question) if question.correct_answer != 0 => {
                        question.correct_answer == s.answer
                    }
                    _ => s.answer == CORRECT_FLAG,
                };
                let verdict = if correct { "giusto" } else { "sbagliato" };
                format!(
                    "{timestamp} {code} {t} {q} {a}{protocol} squadra {t}, quesito {q}: {verdict}",
                    code = vocabulary.answer_submission,
                    t = s.team_num,
                    q = s.question_num,
                    a = s.answer,
                )
            }
            Event::Jolly(j) => format!(
                "{timestamp} {code} {t} {q}{protocol} squadra {t} sceglie {q} come jolly",
                code = vocabulary.jolly_selection,
                t = j.team_num,
                q = j.question_num,
            ),
        };
        lines.push(line);
    }

    let scheduled_end = stashed(&race.mathrace_only, RACE_END_KEY)
        .unwrap_or(u64::from(race.duration_minutes) * 60);
    lines.push(format!(
        "{} {} {RACE_END_TEXT}",
        format_seconds(scheduled_end.max(last_second), format),
        vocabulary.race_end
    ));
    Ok(())
}

fn stashed(mathrace_only: &MathraceOnly, key: &str) -> Option<u64> {
    mathrace_only.get(key).and_then(|value| value.as_u64())
}

fn padded(values: &[u32], len: usize) -> Vec<u32> {
    let mut values = values.to_vec();
    values.resize(len.max(values.len()), 0);
    values
}

fn is_writable_name(name: &str) -> bool {
    !name.is_empty() && name.trim() == name && !name.chars().any(char::is_control)
}
