//! Journal reader implementation.

use crate::detect::determine_journal_version;
use crate::errors::JournalError;
use crate::line::{JournalLine, LineCursor, NumberedLine};
use crate::setup::{
    parse_bonus, QuestionDefinition, RaceDefinition, TeamDefinition, DEFAULT_RESERVED,
};
use crate::timestamp::{self, TimestampFormat};
use crate::version::{
    EventCategory, JournalVersion, ALTERNATIVE_RACE_DEFINITION, BONUS_DEFINITION, FILE_BEGIN,
    FILE_END, QUESTION_DEFINITION, RACE_DEFINITION, RACE_START_TEXT, SUPER_BONUS_DEFINITION,
    TEAM_DEFINITION,
};
use chrono::{DateTime, FixedOffset, TimeDelta};
use mathrace_canonical::{
    Event, MathraceOnly, Question, RaceDict, Team, DEFAULT_FIXED_BONUS, DEFAULT_SUPER_MEGA_BONUS,
    FIXED_BONUS_LEN, MAX_ANSWER,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::{debug, trace};

/// Side-band key of the protocol number of a submission or jolly.
pub const PROTOCOL_KEY: &str = "protocol";
/// Side-band key of the raw lines of ignored events.
pub const UNHANDLED_EVENTS_KEY: &str = "unhandled_events";
/// Side-band key of the race-end second.
pub const RACE_END_KEY: &str = "race_end";
/// Side-band key of the race-start second, when not zero.
pub const RACE_START_KEY: &str = "race_start";
/// Side-band key of the reserved 003 field, when not 1.
pub const RESERVED_KEY: &str = "race_definition_reserved";
/// Side-band key of the question score announced by setup 002.
pub const DEFAULT_QUESTION_SCORE_KEY: &str = "default_question_score";

const PROTOCOL_PREFIX: &str = "PROT:";

/// Reader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Reject events whose timestamp is earlier than the previous event's.
    pub strict_timestamp_race_events: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            strict_timestamp_race_events: true,
        }
    }
}

/// How the race-events section ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventsEnd {
    /// A race-end event was read; the file-end marker is still to come.
    RaceEnd,
    /// The file-end marker was reached first: the race had not started or was still running.
    FileEnd,
}

/// Reader of one journal revision.
///
/// The reader takes ownership of the stream for the whole [`JournalReader::read`]
/// call; the stream is dropped when reading ends, successfully or not.
///
/// # Example
///
/// ```rust
/// use chrono::DateTime;
/// use mathrace_journal::{JournalReader, JournalVersion};
///
/// let journal = "--- 001 inizializzazione simulatore\n\
///                --- 003 2 1 10 10 1\n\
///                --- 004 1 10 quesito 1 punteggio iniziale 10\n\
///                0 002 inizio gara\n\
///                0 029 termine gara\n\
///                --- 999 fine simulatore\n";
/// let start = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")?;
/// let race = JournalReader::new(journal.as_bytes(), JournalVersion::R5539).read("gara", start)?;
/// assert_eq!(race.teams.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct JournalReader<R> {
    cursor: LineCursor<R>,
    version: JournalVersion,
    options: ReadOptions,
}

impl<R: BufRead> JournalReader<R> {
    /// Creates a reader with default options.
    pub fn new(stream: R, version: JournalVersion) -> Self {
        Self::with_options(stream, version, ReadOptions::default())
    }

    /// Creates a reader with explicit options.
    pub fn with_options(stream: R, version: JournalVersion, options: ReadOptions) -> Self {
        Self {
            cursor: LineCursor::new(stream),
            version,
            options,
        }
    }

    /// Revision this reader parses.
    pub fn version(&self) -> JournalVersion {
        self.version
    }

    /// Reads the whole journal into a race dictionary.
    ///
    /// `start` anchors event timestamps; it becomes the race start unless the
    /// journal ends before the race-start event.
    ///
    /// # Errors
    ///
    /// Fails fast on the first malformed line; no partial race is returned.
    pub fn read(
        mut self,
        name: &str,
        start: DateTime<FixedOffset>,
    ) -> Result<RaceDict, JournalError> {
        self.read_header()?;
        let (mut race, announced_guests) = self.read_race_definition(name)?;
        self.read_questions_definition(&mut race)?;
        self.read_teams_definition(&mut race, announced_guests)?;
        let end = self.read_race_events(&mut race, start)?;
        self.read_footer(end)?;
        race.validate()?;
        debug!(
            version = %self.version,
            teams = race.teams.len(),
            questions = race.questions.len(),
            events = race.events.len(),
            "read journal"
        );
        Ok(race)
    }

    fn read_header(&mut self) -> Result<(), JournalError> {
        match self.cursor.next_line()? {
            None => Err(JournalError::EmptyJournal),
            Some(line) if line.text == FILE_BEGIN => Ok(()),
            Some(line) => Err(JournalError::MalformedHeader { line: line.number }),
        }
    }

    fn expect_line(&mut self, expected: &str) -> Result<NumberedLine, JournalError> {
        self.cursor.next_line()?.ok_or_else(|| {
            JournalError::setup(0, format!("journal ends while expecting {expected}"))
        })
    }

    /// Reads setup 003 or 002, then 011 and 012; also returns the guest count announced by 002.
    fn read_race_definition(
        &mut self,
        name: &str,
    ) -> Result<(RaceDict, Option<u32>), JournalError> {
        let line = self.expect_line("the race definition")?;
        let definition = match line.fields() {
            JournalLine::Setup { code, payload } if code == RACE_DEFINITION => {
                RaceDefinition::parse_standard(payload, line.number, self.version)?
            }
            JournalLine::Setup { code, payload }
                if code == ALTERNATIVE_RACE_DEFINITION
                    && self.version.has_alternative_race_definition() =>
            {
                RaceDefinition::parse_alternative(payload, line.number, self.version)?
            }
            _ => {
                return Err(JournalError::setup(
                    line.number,
                    format!("expected the race definition, found '{}'", line.text),
                ))
            }
        };

        let mut fixed_bonus = DEFAULT_FIXED_BONUS.to_vec();
        let mut super_mega_bonus = if definition.super_bonus_cardinality == 0 {
            Vec::new()
        } else {
            DEFAULT_SUPER_MEGA_BONUS.to_vec()
        };
        if self.version.has_bonus_definitions() {
            if self.cursor.peek_setup_code()?.as_deref() == Some(BONUS_DEFINITION) {
                let line = self.expect_line("the bonus definition")?;
                fixed_bonus = parse_bonus(
                    setup_payload(&line),
                    line.number,
                    FIXED_BONUS_LEN as u32,
                )?;
            }
            if self.cursor.peek_setup_code()?.as_deref() == Some(SUPER_BONUS_DEFINITION) {
                let line = self.expect_line("the super bonus definition")?;
                super_mega_bonus = parse_bonus(
                    setup_payload(&line),
                    line.number,
                    definition.super_bonus_cardinality,
                )?;
            }
        }

        let mut mathrace_only = MathraceOnly::new();
        if definition.reserved != DEFAULT_RESERVED {
            mathrace_only.insert(RESERVED_KEY.into(), json!(definition.reserved));
        }
        if let Some(score) = definition.default_question_score {
            mathrace_only.insert(DEFAULT_QUESTION_SCORE_KEY.into(), json!(score));
        }
        debug!(
            teams = definition.num_teams,
            questions = definition.num_questions,
            duration = definition.duration,
            "read race definition"
        );

        let announced_guests = definition
            .default_question_score
            .map(|_| definition.num_guests);
        let race = RaceDict {
            name: name.to_string(),
            start: None,
            duration_minutes: definition.duration,
            num_questions: definition.num_questions,
            initial_score_per_question: definition.initial_score_per_question(),
            block_n: Some(definition.block_n),
            block_k: Some(definition.block_k),
            deadline_score_increase_min: Some(definition.deadline),
            cutoff: None,
            fixed_bonus,
            super_mega_bonus,
            jolly_enabled: definition.jolly_enabled,
            teams: (1..=definition.num_teams).map(Team::with_default_name).collect(),
            questions: Vec::new(),
            events: Vec::new(),
            mathrace_only,
        };
        Ok((race, announced_guests))
    }

    fn read_questions_definition(&mut self, race: &mut RaceDict) -> Result<(), JournalError> {
        for problema in 1..=race.num_questions {
            let line = self.expect_line("a question definition")?;
            let definition = match line.fields() {
                JournalLine::Setup { code, payload } if code == QUESTION_DEFINITION => {
                    QuestionDefinition::parse(payload, line.number, self.version)?
                }
                _ => {
                    return Err(JournalError::setup(
                        line.number,
                        format!(
                            "expected the definition of question {problema}, found '{}'",
                            line.text
                        ),
                    ))
                }
            };
            if definition.problema != problema {
                return Err(JournalError::setup(
                    line.number,
                    format!(
                        "expected the definition of question {problema}, found question {}",
                        definition.problema
                    ),
                ));
            }
            race.questions.push(Question {
                correct_answer: definition.correct_answer,
                ..Question::with_default_name(problema, definition.initial_score)
            });
        }
        Ok(())
    }

    fn read_teams_definition(
        &mut self,
        race: &mut RaceDict,
        announced_guests: Option<u32>,
    ) -> Result<(), JournalError> {
        if !self.version.has_team_definitions() {
            return Ok(());
        }

        let mut defined: Vec<Team> = Vec::new();
        let mut last_line = 0;
        while self.cursor.peek_setup_code()?.as_deref() == Some(TEAM_DEFINITION) {
            let line = self.expect_line("a team definition")?;
            last_line = line.number;
            let definition = TeamDefinition::parse(setup_payload(&line), line.number)?;
            let expected = defined.len() as u32 + 1;
            if definition.num != expected {
                return Err(JournalError::setup(
                    line.number,
                    format!(
                        "expected the definition of team {expected}, found team {}",
                        definition.num
                    ),
                ));
            }
            defined.push(Team {
                num: definition.num,
                name: definition.name,
                guest: definition.guest,
                mathrace_only: MathraceOnly::new(),
            });
        }

        if defined.is_empty() {
            return match announced_guests {
                Some(guests) if guests > 0 => Err(JournalError::setup(
                    last_line,
                    format!("{guests} guest teams announced but no team is defined"),
                )),
                _ => Ok(()),
            };
        }
        if defined.len() != race.teams.len() {
            return Err(JournalError::setup(
                last_line,
                format!(
                    "{} teams defined, {} announced",
                    defined.len(),
                    race.teams.len()
                ),
            ));
        }
        let guests = defined.iter().filter(|team| team.guest).count() as u32;
        if let Some(announced) = announced_guests {
            if guests != announced {
                return Err(JournalError::setup(
                    last_line,
                    format!("{guests} guest teams defined, {announced} announced"),
                ));
            }
        }
        race.teams = defined;
        Ok(())
    }

    fn read_race_events(
        &mut self,
        race: &mut RaceDict,
        start: DateTime<FixedOffset>,
    ) -> Result<EventsEnd, JournalError> {
        let format = TimestampFormat::for_version(self.version);
        let vocabulary = self.version.vocabulary();

        let Some(first) = self.cursor.next_line()? else {
            return Err(JournalError::MalformedFooter {
                line: 0,
                reason: "journal ends before the file-end marker".into(),
            });
        };
        if first.text == FILE_END {
            debug!("race has not started");
            return Ok(EventsEnd::FileEnd);
        }
        let start_second = match first.fields() {
            JournalLine::Event {
                timestamp,
                code,
                payload,
            } if vocabulary.classify(code) == Some(EventCategory::RaceStart)
                && payload == RACE_START_TEXT =>
            {
                timestamp::parse_seconds_as(timestamp, format)?
            }
            _ => {
                return Err(JournalError::event(
                    first.number,
                    format!(
                        "expected '{} inizio gara', found '{}'",
                        vocabulary.race_start, first.text
                    ),
                ))
            }
        };
        if start_second != 0 && self.version == JournalVersion::R5539 {
            return Err(JournalError::event(
                first.number,
                "the r5539 race start must happen at second 0",
            ));
        }
        if start_second != 0 {
            race.mathrace_only
                .insert(RACE_START_KEY.into(), json!(start_second));
        }
        race.start = Some(start);

        let mut unhandled: Vec<Value> = Vec::new();
        let mut same_second: BTreeMap<u64, i64> = BTreeMap::new();
        let mut jollies: BTreeMap<u32, u32> = BTreeMap::new();
        let mut last_second: Option<u64> = None;

        let end = loop {
            let Some(line) = self.cursor.next_line()? else {
                return Err(JournalError::MalformedFooter {
                    line: 0,
                    reason: "journal ends before the race end".into(),
                });
            };
            if line.text == FILE_END {
                debug!("race is still running");
                break EventsEnd::FileEnd;
            }
            let JournalLine::Event {
                timestamp,
                code,
                payload,
            } = line.fields()
            else {
                return Err(JournalError::event(
                    line.number,
                    format!("setup line '{}' inside the race events", line.text),
                ));
            };
            let category =
                vocabulary
                    .classify(code)
                    .ok_or_else(|| JournalError::UnknownEventCode {
                        line: line.number,
                        code: code.to_string(),
                    })?;
            let second = timestamp::parse_seconds_as(timestamp, format)?;

            let (mut event, protocol) = match category {
                EventCategory::RaceStart => {
                    return Err(JournalError::event(line.number, "race starts twice"));
                }
                EventCategory::RaceEnd => {
                    race.mathrace_only.insert(RACE_END_KEY.into(), json!(second));
                    break EventsEnd::RaceEnd;
                }
                EventCategory::Ignored(kind) => {
                    trace!(line = line.number, ?kind, "keeping unhandled event");
                    unhandled.push(Value::String(line.text.clone()));
                    continue;
                }
                EventCategory::AnswerSubmission => {
                    let mut fields = EventFields::new(payload, line.number);
                    let team = fields.team(race)?;
                    let question = fields.question(race)?;
                    let answer = fields.number("answer")?;
                    if answer > MAX_ANSWER {
                        return Err(JournalError::event(
                            line.number,
                            format!("answer {answer} exceeds {MAX_ANSWER}"),
                        ));
                    }
                    let protocol = fields.protocol(self.version)?;
                    (Event::submission(start, team, question, answer), protocol)
                }
                EventCategory::JollySelection => {
                    let mut fields = EventFields::new(payload, line.number);
                    let team = fields.team(race)?;
                    let question = fields.question(race)?;
                    if let Some(previous) = jollies.insert(team, question) {
                        return Err(JournalError::DuplicateJolly {
                            team,
                            question,
                            previous,
                        });
                    }
                    let protocol = fields.protocol(self.version)?;
                    (Event::jolly(start, team, question), protocol)
                }
            };

            if self.options.strict_timestamp_race_events {
                if let Some(last) = last_second {
                    if second < last {
                        return Err(JournalError::NonMonotonicEvents {
                            location: format!("line {}", line.number),
                        });
                    }
                }
            }
            last_second = Some(last_second.map_or(second, |last| last.max(second)));

            let tie = same_second.entry(second).or_insert(0);
            let instant = timestamp::offset(start, second)
                .ok_or_else(|| JournalError::MalformedTimestamp(timestamp.to_string()))?
                + TimeDelta::milliseconds(*tie);
            *tie += 1;
            event.set_instant(instant);
            if let Some(protocol) = protocol {
                event
                    .mathrace_only_mut()
                    .insert(PROTOCOL_KEY.into(), json!(protocol));
            }
            race.events.push(event);
        };

        if !unhandled.is_empty() {
            race.mathrace_only
                .insert(UNHANDLED_EVENTS_KEY.into(), Value::Array(unhandled));
        }
        Ok(end)
    }

    fn read_footer(&mut self, end: EventsEnd) -> Result<(), JournalError> {
        if end == EventsEnd::RaceEnd {
            match self.cursor.next_line()? {
                Some(line) if line.text == FILE_END => {}
                Some(line) => {
                    return Err(JournalError::MalformedFooter {
                        line: line.number,
                        reason: format!("expected '{FILE_END}', found '{}'", line.text),
                    })
                }
                None => {
                    return Err(JournalError::MalformedFooter {
                        line: 0,
                        reason: format!("journal ends without '{FILE_END}'"),
                    })
                }
            }
        }
        match self.cursor.next_line()? {
            Some(line) => Err(JournalError::TrailingGarbage { line: line.number }),
            None => Ok(()),
        }
    }
}

/// Payload of a setup line.
fn setup_payload(line: &NumberedLine) -> &str {
    match line.fields() {
        JournalLine::Setup { payload, .. } => payload,
        _ => "",
    }
}

/// Sequential access to the space-separated fields of an event payload.
struct EventFields<'a> {
    tokens: std::iter::Peekable<std::str::SplitWhitespace<'a>>,
    line: usize,
}

impl<'a> EventFields<'a> {
    fn new(payload: &'a str, line: usize) -> Self {
        Self {
            tokens: payload.split_whitespace().peekable(),
            line,
        }
    }

    fn number(&mut self, what: &str) -> Result<u32, JournalError> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| JournalError::event(self.line, format!("missing {what}")))?;
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JournalError::event(
                self.line,
                format!("malformed {what} '{token}'"),
            ));
        }
        token
            .parse()
            .map_err(|_| JournalError::event(self.line, format!("{what} '{token}' is too large")))
    }

    fn team(&mut self, race: &RaceDict) -> Result<u32, JournalError> {
        let team = self.number("team")?;
        if race.team(team).is_none() {
            return Err(JournalError::event(self.line, format!("unknown team {team}")));
        }
        Ok(team)
    }

    fn question(&mut self, race: &RaceDict) -> Result<u32, JournalError> {
        let question = self.number("question")?;
        if race.question(question).is_none() {
            return Err(JournalError::event(
                self.line,
                format!("unknown question {question}"),
            ));
        }
        Ok(question)
    }

    /// Optional `PROT:<n>` field following the numeric fields.
    fn protocol(&mut self, version: JournalVersion) -> Result<Option<u64>, JournalError> {
        let Some(token) = self.tokens.peek().copied() else {
            return Ok(None);
        };
        let Some(number) = token.strip_prefix(PROTOCOL_PREFIX) else {
            return Ok(None);
        };
        if !version.has_protocol_numbers() {
            return Err(JournalError::event(
                self.line,
                format!("protocol numbers are not supported by {version}"),
            ));
        }
        self.tokens.next();
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JournalError::event(
                self.line,
                format!("malformed protocol number '{token}'"),
            ));
        }
        number
            .parse()
            .map(Some)
            .map_err(|_| JournalError::event(self.line, format!("protocol number '{token}' is too large")))
    }
}

/// Detects the revision of `content` and reads it with default options.
pub fn read_journal(
    content: &str,
    name: &str,
    start: DateTime<FixedOffset>,
) -> Result<RaceDict, JournalError> {
    let version = determine_journal_version(content)?;
    JournalReader::new(content.as_bytes(), version).read(name, start)
}
