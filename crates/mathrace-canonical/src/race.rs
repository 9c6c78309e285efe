//! Race dictionary types.
//!
//! Field names on the wire follow the race database (`nome`, `inizio`,
//! `durata`, ...), so a serialized [`RaceDict`] can be imported as-is.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Side-band attributes collected from a journal but not part of the race model.
pub type MathraceOnly = BTreeMap<String, Value>;

/// Default per-rank bonus awarded to the first solvers of a question.
pub const DEFAULT_FIXED_BONUS: [u32; 10] = [20, 15, 10, 8, 6, 5, 4, 3, 2, 1];

/// Default per-rank bonus awarded to the first teams solving every question.
pub const DEFAULT_SUPER_MEGA_BONUS: [u32; 6] = [100, 60, 40, 30, 20, 10];

/// Number of fixed bonus ranks.
pub const FIXED_BONUS_LEN: usize = 10;

/// Number of super-mega bonus ranks.
pub const SUPER_MEGA_BONUS_LEN: usize = 6;

/// A race in its canonical, revision-independent form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDict {
    /// Race name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Race start; `None` while the race has not started.
    #[serde(rename = "inizio", with = "instant_opt")]
    pub start: Option<DateTime<FixedOffset>>,
    /// Wall-clock length of the race in minutes.
    #[serde(rename = "durata")]
    pub duration_minutes: u32,
    /// Number of questions.
    #[serde(rename = "num_problemi")]
    pub num_questions: u32,
    /// Initial score each question contributes to a team's total.
    #[serde(rename = "punteggio_iniziale_per_problema")]
    pub initial_score_per_question: u32,
    /// Number of correct answers that freeze a question's value.
    #[serde(rename = "n_blocco")]
    pub block_n: Option<u32>,
    /// Number of wrong answers that raise a question's value.
    #[serde(rename = "k_blocco")]
    pub block_k: Option<u32>,
    /// Minute after which question values stop changing.
    #[serde(rename = "minuto_blocco_punteggio")]
    pub deadline_score_increase_min: Option<u32>,
    /// Advancement threshold.
    pub cutoff: Option<u32>,
    /// Per-rank bonus for the first solvers of a question.
    #[serde(with = "bonus_list")]
    pub fixed_bonus: Vec<u32>,
    /// Per-rank bonus for the first teams solving the whole board.
    #[serde(with = "bonus_list")]
    pub super_mega_bonus: Vec<u32>,
    /// Whether teams may pick a jolly question.
    #[serde(rename = "jolly")]
    pub jolly_enabled: bool,
    /// Participating teams, ordered by number.
    #[serde(rename = "squadre")]
    pub teams: Vec<Team>,
    /// Questions, ordered by number.
    #[serde(rename = "soluzioni")]
    pub questions: Vec<Question>,
    /// Race events.
    #[serde(rename = "eventi")]
    pub events: Vec<Event>,
    /// Journal attributes with no canonical counterpart.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mathrace_only: MathraceOnly,
}

impl RaceDict {
    /// Creates a race with default teams and questions and no events.
    ///
    /// Teams are named `Squadra {num}`, questions `Problema {num}`, and every
    /// question starts from `initial_score_per_question`.
    pub fn new(name: impl Into<String>, num_teams: u32, num_questions: u32) -> Self {
        let initial_score_per_question = 10;
        Self {
            name: name.into(),
            start: None,
            duration_minutes: 120,
            num_questions,
            initial_score_per_question,
            block_n: Some(4),
            block_k: Some(1),
            deadline_score_increase_min: Some(100),
            cutoff: None,
            fixed_bonus: DEFAULT_FIXED_BONUS.to_vec(),
            super_mega_bonus: DEFAULT_SUPER_MEGA_BONUS.to_vec(),
            jolly_enabled: true,
            teams: (1..=num_teams).map(Team::with_default_name).collect(),
            questions: (1..=num_questions)
                .map(|p| Question::with_default_name(p, 20))
                .collect(),
            events: Vec::new(),
            mathrace_only: MathraceOnly::new(),
        }
    }

    /// Total initial score of a team, as encoded by journal setup lines.
    pub fn total_initial_score(&self) -> u64 {
        u64::from(self.initial_score_per_question) * u64::from(self.num_questions)
    }

    /// Looks up a team by number.
    pub fn team(&self, num: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.num == num)
    }

    /// Looks up a question by number.
    pub fn question(&self, problema: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.problema == problema)
    }
}

/// A participating team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// 1-based team number.
    pub num: u32,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Guest teams do not influence scoring progression.
    #[serde(rename = "ospite")]
    pub guest: bool,
    /// Journal attributes with no canonical counterpart.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mathrace_only: MathraceOnly,
}

impl Team {
    /// Name given to team `num` when the journal does not define one.
    pub fn default_name(num: u32) -> String {
        format!("Squadra {num}")
    }

    /// Creates a non-guest team with the default name.
    pub fn with_default_name(num: u32) -> Self {
        Self {
            num,
            name: Self::default_name(num),
            guest: false,
            mathrace_only: MathraceOnly::new(),
        }
    }

    /// Whether the team deviates from the synthesised defaults.
    pub fn is_custom(&self) -> bool {
        self.guest || self.name != Self::default_name(self.num)
    }
}

/// A race question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based question number.
    pub problema: u32,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Correct answer in `0..=9999`, or 0 when unknown.
    #[serde(rename = "risposta")]
    pub correct_answer: u32,
    /// Initial value of the question.
    #[serde(rename = "punteggio")]
    pub initial_score: u32,
    /// Journal attributes with no canonical counterpart.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mathrace_only: MathraceOnly,
}

impl Question {
    /// Name given to question `problema` when the journal does not define one.
    pub fn default_name(problema: u32) -> String {
        format!("Problema {problema}")
    }

    /// Creates a question with the default name and an unknown answer.
    pub fn with_default_name(problema: u32, initial_score: u32) -> Self {
        Self {
            problema,
            name: Self::default_name(problema),
            correct_answer: 0,
            initial_score,
            mathrace_only: MathraceOnly::new(),
        }
    }
}

/// Event discriminant, ordered as events sharing an instant are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// An answer submission.
    Submission,
    /// A jolly selection.
    Jolly,
}

/// A race event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "subclass")]
pub enum Event {
    /// A team answered a question.
    #[serde(rename = "Consegna")]
    Submission(Submission),
    /// A team picked its jolly question.
    #[serde(rename = "Jolly")]
    Jolly(Jolly),
}

/// Payload of [`Event::Submission`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// When the answer was submitted.
    #[serde(rename = "orario", with = "instant")]
    pub instant: DateTime<FixedOffset>,
    /// Submitting team.
    #[serde(rename = "squadra_id")]
    pub team_num: u32,
    /// Answered question.
    #[serde(rename = "problema")]
    pub question_num: u32,
    /// Submitted answer in `0..=9999`.
    #[serde(rename = "risposta")]
    pub answer: u32,
    /// Journal attributes with no canonical counterpart.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mathrace_only: MathraceOnly,
}

/// Payload of [`Event::Jolly`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jolly {
    /// When the jolly was picked.
    #[serde(rename = "orario", with = "instant")]
    pub instant: DateTime<FixedOffset>,
    /// Picking team.
    #[serde(rename = "squadra_id")]
    pub team_num: u32,
    /// Question picked as jolly.
    #[serde(rename = "problema")]
    pub question_num: u32,
    /// Journal attributes with no canonical counterpart.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mathrace_only: MathraceOnly,
}

impl Event {
    /// Creates a submission event with no side-band attributes.
    pub fn submission(
        instant: DateTime<FixedOffset>,
        team_num: u32,
        question_num: u32,
        answer: u32,
    ) -> Self {
        Event::Submission(Submission {
            instant,
            team_num,
            question_num,
            answer,
            mathrace_only: MathraceOnly::new(),
        })
    }

    /// Creates a jolly event with no side-band attributes.
    pub fn jolly(instant: DateTime<FixedOffset>, team_num: u32, question_num: u32) -> Self {
        Event::Jolly(Jolly {
            instant,
            team_num,
            question_num,
            mathrace_only: MathraceOnly::new(),
        })
    }

    /// Event discriminant.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Submission(_) => EventKind::Submission,
            Event::Jolly(_) => EventKind::Jolly,
        }
    }

    /// When the event happened.
    pub fn instant(&self) -> DateTime<FixedOffset> {
        match self {
            Event::Submission(s) => s.instant,
            Event::Jolly(j) => j.instant,
        }
    }

    /// Replaces the event instant.
    pub fn set_instant(&mut self, instant: DateTime<FixedOffset>) {
        match self {
            Event::Submission(s) => s.instant = instant,
            Event::Jolly(j) => j.instant = instant,
        }
    }

    /// Team that produced the event.
    pub fn team_num(&self) -> u32 {
        match self {
            Event::Submission(s) => s.team_num,
            Event::Jolly(j) => j.team_num,
        }
    }

    /// Question the event refers to.
    pub fn question_num(&self) -> u32 {
        match self {
            Event::Submission(s) => s.question_num,
            Event::Jolly(j) => j.question_num,
        }
    }

    /// Side-band attributes.
    pub fn mathrace_only(&self) -> &MathraceOnly {
        match self {
            Event::Submission(s) => &s.mathrace_only,
            Event::Jolly(j) => &j.mathrace_only,
        }
    }

    /// Mutable side-band attributes.
    pub fn mathrace_only_mut(&mut self) -> &mut MathraceOnly {
        match self {
            Event::Submission(s) => &mut s.mathrace_only,
            Event::Jolly(j) => &mut j.mathrace_only,
        }
    }

    /// Total ordering key: instant, then kind, team and question.
    pub fn sort_key(&self) -> (DateTime<FixedOffset>, EventKind, u32, u32) {
        (
            self.instant(),
            self.kind(),
            self.team_num(),
            self.question_num(),
        )
    }

    /// Compares two events by [`Event::sort_key`].
    pub fn canonical_cmp(&self, other: &Event) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// RFC 3339 instants, `Z` for UTC, sub-seconds only when present.
mod instant {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(D::Error::custom)
    }
}

mod instant_opt {
    use chrono::{DateTime, FixedOffset};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => super::instant::serialize(instant, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| DateTime::parse_from_rfc3339(&s))
            .transpose()
            .map_err(D::Error::custom)
    }
}

/// Bonus arrays travel as comma-separated strings, e.g. `"20,15,10"`.
mod bonus_list {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u32], serializer: S) -> Result<S::Ok, S::Error> {
        let joined = value
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&joined)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u32>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split(',')
            .map(|item| item.trim().parse::<u32>().map_err(D::Error::custom))
            .collect()
    }
}
