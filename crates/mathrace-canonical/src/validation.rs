use crate::race::{Event, RaceDict, FIXED_BONUS_LEN, SUPER_MEGA_BONUS_LEN};
use std::collections::BTreeMap;
use thiserror::Error;

/// Largest answer a team can submit or a question can expect.
pub const MAX_ANSWER: u32 = 9999;

/// Validation errors for canonical race dictionaries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// When a numeric field exceeds its bounds.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When two fields disagree with each other.
    #[error("{field} is inconsistent: {reason}")]
    Inconsistent {
        /// Field name that failed validation.
        field: &'static str,
        /// What does not match.
        reason: String,
    },
    /// When an event refers to a team that is not part of the race.
    #[error("event {index} refers to unknown team {team}")]
    UnknownTeam {
        /// Position of the event in the event list.
        index: usize,
        /// Team number.
        team: u32,
    },
    /// When an event refers to a question that is not part of the race.
    #[error("event {index} refers to unknown question {question}")]
    UnknownQuestion {
        /// Position of the event in the event list.
        index: usize,
        /// Question number.
        question: u32,
    },
    /// When a team has more than one jolly.
    #[error("team {team} selected more than one jolly")]
    DuplicateJolly {
        /// Team number.
        team: u32,
    },
    /// When events exist although the race has no start.
    #[error("race has no start but carries {0} events")]
    EventsWithoutStart(usize),
}

impl RaceDict {
    /// Checks every structural invariant of the race dictionary.
    ///
    /// Event ordering is not checked here: readers running with
    /// relaxed timestamps may legitimately produce unsorted events.
    ///
    /// Bonus arrays may be trimmed: `fixed_bonus` and `super_mega_bonus`
    /// shorter than their full length are accepted, the missing levels
    /// being zero (writers pad them back). Longer arrays are rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration_minutes == 0 {
            return Err(out_of_bounds("durata", self.duration_minutes));
        }
        if self.num_questions == 0 {
            return Err(out_of_bounds("num_problemi", self.num_questions));
        }
        if self.questions.len() != self.num_questions as usize {
            return Err(ValidationError::Inconsistent {
                field: "soluzioni",
                reason: format!(
                    "{} questions listed, {} declared",
                    self.questions.len(),
                    self.num_questions
                ),
            });
        }
        if let Some(deadline) = self.deadline_score_increase_min {
            if deadline > self.duration_minutes {
                return Err(out_of_bounds("minuto_blocco_punteggio", deadline));
            }
        }
        if self.fixed_bonus.len() > FIXED_BONUS_LEN {
            return Err(out_of_bounds("fixed_bonus", self.fixed_bonus.len()));
        }
        if self.super_mega_bonus.len() > SUPER_MEGA_BONUS_LEN {
            return Err(out_of_bounds("super_mega_bonus", self.super_mega_bonus.len()));
        }
        strictly_increasing("squadre", self.teams.iter().map(|t| t.num))?;
        strictly_increasing("soluzioni", self.questions.iter().map(|q| q.problema))?;
        if let Some(first) = self.teams.first() {
            if first.num == 0 {
                return Err(out_of_bounds("squadre", 0));
            }
        }
        if let Some(first) = self.questions.first() {
            if first.problema == 0 {
                return Err(out_of_bounds("soluzioni", 0));
            }
        }
        for question in &self.questions {
            if question.correct_answer > MAX_ANSWER {
                return Err(out_of_bounds("risposta", question.correct_answer));
            }
        }
        if self.start.is_none() && !self.events.is_empty() {
            return Err(ValidationError::EventsWithoutStart(self.events.len()));
        }
        self.validate_events()
    }

    fn validate_events(&self) -> Result<(), ValidationError> {
        let mut jollies: BTreeMap<u32, u32> = BTreeMap::new();
        for (index, event) in self.events.iter().enumerate() {
            let team = event.team_num();
            let question = event.question_num();
            if self.team(team).is_none() {
                return Err(ValidationError::UnknownTeam { index, team });
            }
            if self.question(question).is_none() {
                return Err(ValidationError::UnknownQuestion { index, question });
            }
            match event {
                Event::Submission(s) if s.answer > MAX_ANSWER => {
                    return Err(out_of_bounds("risposta", s.answer));
                }
                Event::Jolly(_) => {
                    if jollies.insert(team, question).is_some() {
                        return Err(ValidationError::DuplicateJolly { team });
                    }
                }
                Event::Submission(_) => {}
            }
        }
        Ok(())
    }
}

fn out_of_bounds(field: &'static str, value: impl ToString) -> ValidationError {
    ValidationError::OutOfBounds {
        field,
        value: value.to_string(),
    }
}

fn strictly_increasing(
    field: &'static str,
    values: impl Iterator<Item = u32>,
) -> Result<(), ValidationError> {
    let mut previous: Option<u32> = None;
    for value in values {
        if let Some(prev) = previous {
            if value <= prev {
                return Err(ValidationError::Inconsistent {
                    field,
                    reason: format!("{value} does not follow {prev}"),
                });
            }
        }
        previous = Some(value);
    }
    Ok(())
}
