//! Setup line grammar, shared by readers and writers.
//!
//! ```text
//! --- 003 T Q S B SB N[.K] J X D L -- squadre: T quesiti: Q
//! --- 002 T+G:S Q:P N[.K];J D-B -- squadre: T+G quesiti: Q
//! --- 011 10 b1 .. b10 definizione dei 10 livelli di bonus
//! --- 012 6 s1 .. s6 definizione dei 6 livelli di superbonus
//! --- 004 P S quesito P punteggio iniziale S
//! --- 004 P S AAAA quesito P
//! --- 005 P G NAME
//! ```

use crate::errors::JournalError;
use crate::line::split_token;
use crate::version::{
    JournalVersion, ALTERNATIVE_RACE_DEFINITION, BONUS_DEFINITION, QUESTION_DEFINITION,
    RACE_DEFINITION, SUPER_BONUS_DEFINITION, TEAM_DEFINITION,
};
use mathrace_canonical::{FIXED_BONUS_LEN, SUPER_MEGA_BONUS_LEN};

/// Block size assumed by the abbreviated 003 form.
const DEFAULT_BLOCK_N: u32 = 4;
/// Duration assumed by the abbreviated 003 form.
const DEFAULT_DURATION: u32 = 120;
/// Minutes of frozen scoring assumed by the abbreviated 003 form.
const DEFAULT_FROZEN_MINUTES: u32 = 20;
/// Value of the reserved 003 field in every journal seen so far.
pub(crate) const DEFAULT_RESERVED: u32 = 1;

/// Race parameters carried by setup 003 or 002.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RaceDefinition {
    pub num_teams: u32,
    pub num_guests: u32,
    pub num_questions: u32,
    pub total_score: u32,
    pub super_bonus_cardinality: u32,
    pub block_n: u32,
    pub block_k: u32,
    pub jolly_enabled: bool,
    pub reserved: u32,
    pub duration: u32,
    pub deadline: u32,
    /// Question score announced by 002, absent for 003.
    pub default_question_score: Option<u32>,
}

impl RaceDefinition {
    /// Parses the payload of a 003 line.
    ///
    /// Besides the full ten-field form, the abbreviated `T Q S B [N]` form is
    /// accepted, with the remaining fields at their usual values.
    pub fn parse_standard(
        payload: &str,
        line: usize,
        version: JournalVersion,
    ) -> Result<Self, JournalError> {
        let fields: Vec<&str> = definition_body(payload).split_whitespace().collect();
        let abbreviated = matches!(fields.len(), 4 | 5);
        if fields.len() != 10 && !abbreviated {
            return Err(JournalError::setup(
                line,
                format!(
                    "race definition has {} fields, expected 10",
                    fields.len()
                ),
            ));
        }
        let num_teams = int(fields[0], "team count", line)?;
        let num_questions = int(fields[1], "question count", line)?;
        let total_score = int(fields[2], "initial score", line)?;
        check_bonus_cardinality(int(fields[3], "bonus cardinality", line)?, line)?;

        let definition = if abbreviated {
            let (block_n, block_k) = match fields.get(4) {
                Some(token) => block(token, line, version)?,
                None => (DEFAULT_BLOCK_N, 1),
            };
            RaceDefinition {
                num_teams,
                num_guests: 0,
                num_questions,
                total_score,
                super_bonus_cardinality: SUPER_MEGA_BONUS_LEN as u32,
                block_n,
                block_k,
                jolly_enabled: true,
                reserved: DEFAULT_RESERVED,
                duration: DEFAULT_DURATION,
                deadline: DEFAULT_DURATION - DEFAULT_FROZEN_MINUTES,
                default_question_score: None,
            }
        } else {
            let super_bonus_cardinality = int(fields[4], "super bonus cardinality", line)?;
            if super_bonus_cardinality != 0
                && super_bonus_cardinality != SUPER_MEGA_BONUS_LEN as u32
            {
                return Err(JournalError::setup(
                    line,
                    format!(
                        "super bonus cardinality must be 0 or {SUPER_MEGA_BONUS_LEN}, found {super_bonus_cardinality}"
                    ),
                ));
            }
            let (block_n, block_k) = block(fields[5], line, version)?;
            RaceDefinition {
                num_teams,
                num_guests: 0,
                num_questions,
                total_score,
                super_bonus_cardinality,
                block_n,
                block_k,
                jolly_enabled: flag(fields[6], "jolly flag", line)?,
                reserved: int(fields[7], "reserved field", line)?,
                duration: int(fields[8], "duration", line)?,
                deadline: int(fields[9], "deadline", line)?,
                default_question_score: None,
            }
        };
        definition.check(line)
    }

    /// Parses the payload of a 002 line.
    pub fn parse_alternative(
        payload: &str,
        line: usize,
        version: JournalVersion,
    ) -> Result<Self, JournalError> {
        let fields: Vec<&str> = definition_body(payload).split_whitespace().collect();
        let &[teams_score, questions_score, block_jolly, duration_frozen] = fields.as_slice() else {
            return Err(JournalError::setup(
                line,
                format!(
                    "alternative race definition has {} fields, expected 4",
                    fields.len()
                ),
            ));
        };
        let (teams, total_score) = pair(teams_score, ':', "teams", line)?;
        let (num_teams, num_guests) = pair(teams, '+', "teams", line)?;
        let (num_questions, question_score) = pair(questions_score, ':', "questions", line)?;
        let (block_field, jolly) = pair(block_jolly, ';', "block", line)?;
        let (duration, frozen) = pair(duration_frozen, '-', "duration", line)?;

        let num_teams = int(num_teams, "team count", line)?;
        let num_guests = int(num_guests, "guest count", line)?;
        let duration = int(duration, "duration", line)?;
        let frozen = int(frozen, "frozen minutes", line)?;
        if frozen > duration {
            return Err(JournalError::setup(
                line,
                format!("{frozen} frozen minutes exceed the duration of {duration}"),
            ));
        }
        let (block_n, block_k) = block(block_field, line, version)?;
        let definition = RaceDefinition {
            num_teams: num_teams
                .checked_add(num_guests)
                .ok_or_else(|| JournalError::setup(line, "team count overflows"))?,
            num_guests,
            num_questions: int(num_questions, "question count", line)?,
            total_score: int(total_score, "initial score", line)?,
            super_bonus_cardinality: SUPER_MEGA_BONUS_LEN as u32,
            block_n,
            block_k,
            jolly_enabled: flag(jolly, "jolly flag", line)?,
            reserved: DEFAULT_RESERVED,
            duration,
            deadline: duration - frozen,
            default_question_score: Some(int(question_score, "question score", line)?),
        };
        definition.check(line)
    }

    fn check(self, line: usize) -> Result<Self, JournalError> {
        if self.num_questions == 0 {
            return Err(JournalError::setup(line, "race has no questions"));
        }
        if self.total_score % self.num_questions != 0 {
            return Err(JournalError::setup(
                line,
                format!(
                    "initial score {} is not a multiple of the {} questions",
                    self.total_score, self.num_questions
                ),
            ));
        }
        if self.duration == 0 {
            return Err(JournalError::setup(line, "race duration is zero"));
        }
        if self.deadline > self.duration {
            return Err(JournalError::setup(
                line,
                format!(
                    "deadline minute {} exceeds the duration of {}",
                    self.deadline, self.duration
                ),
            ));
        }
        Ok(self)
    }

    /// Uniform initial score of each question.
    pub fn initial_score_per_question(&self) -> u32 {
        self.total_score / self.num_questions
    }

    /// Formats a 003 line.
    pub fn format_standard(&self, version: JournalVersion) -> String {
        format!(
            "--- {RACE_DEFINITION} {t} {q} {s} {b} {sb} {nk} {j} {x} {d} {l} -- squadre: {t} quesiti: {q}",
            t = self.num_teams,
            q = self.num_questions,
            s = self.total_score,
            b = FIXED_BONUS_LEN,
            sb = self.super_bonus_cardinality,
            nk = format_block(self.block_n, self.block_k, version),
            j = u8::from(self.jolly_enabled),
            x = self.reserved,
            d = self.duration,
            l = self.deadline,
        )
    }

    /// Formats a 002 line.
    pub fn format_alternative(&self, version: JournalVersion) -> String {
        format!(
            "--- {ALTERNATIVE_RACE_DEFINITION} {t}+{g}:{s} {q}:{p} {nk};{j} {d}-{f} -- squadre: {total} quesiti: {q}",
            t = self.num_teams - self.num_guests,
            g = self.num_guests,
            s = self.total_score,
            q = self.num_questions,
            p = self.default_question_score.unwrap_or(0),
            nk = format_block(self.block_n, self.block_k, version),
            j = u8::from(self.jolly_enabled),
            d = self.duration,
            f = self.duration - self.deadline,
            total = self.num_teams,
        )
    }
}

/// Parses the payload of a 011 or 012 line.
pub(crate) fn parse_bonus(
    payload: &str,
    line: usize,
    expected: u32,
) -> Result<Vec<u32>, JournalError> {
    let mut fields = payload.split_whitespace();
    let count = int(fields.next().unwrap_or(""), "bonus count", line)?;
    if count != expected {
        return Err(JournalError::setup(
            line,
            format!("{count} bonus levels defined, expected {expected}"),
        ));
    }
    (0..count)
        .map(|_| int(fields.next().unwrap_or(""), "bonus value", line))
        .collect()
}

/// Formats a 011 line.
pub(crate) fn format_fixed_bonus(values: &[u32]) -> String {
    format!(
        "--- {BONUS_DEFINITION} {} {} definizione dei {} livelli di bonus",
        values.len(),
        join(values),
        values.len()
    )
}

/// Formats a 012 line.
pub(crate) fn format_super_bonus(values: &[u32]) -> String {
    format!(
        "--- {SUPER_BONUS_DEFINITION} {} {} definizione dei {} livelli di superbonus",
        values.len(),
        join(values),
        values.len()
    )
}

/// Question parameters carried by setup 004.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuestionDefinition {
    pub problema: u32,
    pub initial_score: u32,
    pub correct_answer: u32,
}

impl QuestionDefinition {
    pub fn parse(
        payload: &str,
        line: usize,
        version: JournalVersion,
    ) -> Result<Self, JournalError> {
        let (problema, rest) = split_token(payload);
        let (initial_score, rest) = split_token(rest);
        let problema = int(problema, "question number", line)?;
        let initial_score = int(initial_score, "question score", line)?;
        let correct_answer = if version.has_question_answers() {
            let (answer, _) = split_token(rest);
            if answer.len() != 4 || !answer.bytes().all(|b| b.is_ascii_digit()) {
                return Err(JournalError::setup(
                    line,
                    format!("expected a four digit answer, found '{answer}'"),
                ));
            }
            int(answer, "answer", line)?
        } else {
            0
        };
        Ok(Self {
            problema,
            initial_score,
            correct_answer,
        })
    }

    pub fn format(&self, version: JournalVersion) -> String {
        if version.has_question_answers() {
            format!(
                "--- {QUESTION_DEFINITION} {p} {s} {a:04} quesito {p}",
                p = self.problema,
                s = self.initial_score,
                a = self.correct_answer,
            )
        } else {
            format!(
                "--- {QUESTION_DEFINITION} {p} {s} quesito {p} punteggio iniziale {s}",
                p = self.problema,
                s = self.initial_score,
            )
        }
    }
}

/// Team parameters carried by setup 005.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TeamDefinition {
    pub num: u32,
    pub guest: bool,
    pub name: String,
}

impl TeamDefinition {
    pub fn parse(payload: &str, line: usize) -> Result<Self, JournalError> {
        let (num, rest) = split_token(payload);
        let (guest, name) = split_token(rest);
        if name.is_empty() {
            return Err(JournalError::setup(line, "team name is missing"));
        }
        Ok(Self {
            num: int(num, "team number", line)?,
            guest: flag(guest, "guest flag", line)?,
            name: name.to_string(),
        })
    }

    pub fn format(&self) -> String {
        format!(
            "--- {TEAM_DEFINITION} {} {} {}",
            self.num,
            u8::from(self.guest),
            self.name
        )
    }
}

/// Part of a race definition before the `-- squadre: .. quesiti: ..` trailer.
fn definition_body(payload: &str) -> &str {
    let end = ["--", "squadre:"]
        .iter()
        .filter_map(|marker| payload.find(marker))
        .min()
        .unwrap_or(payload.len());
    &payload[..end]
}

fn block(token: &str, line: usize, version: JournalVersion) -> Result<(u32, u32), JournalError> {
    match token.split_once('.') {
        Some(_) if !version.has_block_k() => Err(JournalError::setup(
            line,
            format!("'{token}': the n.k notation requires r17497"),
        )),
        Some((n, k)) => Ok((int(n, "block n", line)?, int(k, "block k", line)?)),
        None => Ok((int(token, "block n", line)?, 1)),
    }
}

fn format_block(block_n: u32, block_k: u32, version: JournalVersion) -> String {
    if version.has_block_k() && block_k != 1 {
        format!("{block_n}.{block_k}")
    } else {
        block_n.to_string()
    }
}

fn check_bonus_cardinality(cardinality: u32, line: usize) -> Result<(), JournalError> {
    if cardinality as usize != FIXED_BONUS_LEN {
        return Err(JournalError::setup(
            line,
            format!("bonus cardinality must be {FIXED_BONUS_LEN}, found {cardinality}"),
        ));
    }
    Ok(())
}

fn pair<'a>(
    token: &'a str,
    separator: char,
    what: &str,
    line: usize,
) -> Result<(&'a str, &'a str), JournalError> {
    token.split_once(separator).ok_or_else(|| {
        JournalError::setup(
            line,
            format!("malformed {what} field '{token}', expected '{separator}'"),
        )
    })
}

fn int(token: &str, what: &str, line: usize) -> Result<u32, JournalError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(JournalError::setup(
            line,
            format!("malformed {what} '{token}'"),
        ));
    }
    token
        .parse()
        .map_err(|_| JournalError::setup(line, format!("{what} '{token}' is too large")))
}

fn flag(token: &str, what: &str, line: usize) -> Result<bool, JournalError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(JournalError::setup(
            line,
            format!("{what} must be 0 or 1, found '{token}'"),
        )),
    }
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
