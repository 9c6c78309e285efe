//! Journal revisions and their event-code vocabularies.
//!
//! Revisions are totally ordered by release date, and every feature of the
//! format, once introduced, is kept by all later revisions. Feature checks
//! are therefore plain comparisons against the introducing revision.

use crate::errors::JournalError;
use std::fmt;
use std::str::FromStr;

/// First line of every journal.
pub const FILE_BEGIN: &str = "--- 001 inizializzazione simulatore";

/// Last line of every journal.
pub const FILE_END: &str = "--- 999 fine simulatore";

/// Prefix shared by every setup line.
pub const SETUP_PREFIX: &str = "---";

/// Standard race definition.
pub const RACE_DEFINITION: &str = "003";
/// Alternative race definition, carrying guest teams.
pub const ALTERNATIVE_RACE_DEFINITION: &str = "002";
/// Question definition.
pub const QUESTION_DEFINITION: &str = "004";
/// Team definition.
pub const TEAM_DEFINITION: &str = "005";
/// Fixed bonus definition.
pub const BONUS_DEFINITION: &str = "011";
/// Super-mega bonus definition.
pub const SUPER_BONUS_DEFINITION: &str = "012";

/// Payload of the race-start event.
pub const RACE_START_TEXT: &str = "inizio gara";
/// Payload of the race-end event.
pub const RACE_END_TEXT: &str = "termine gara";

/// A revision of the journal format, named after its source tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JournalVersion {
    /// First supported revision.
    R5539,
    /// Renumbered event codes.
    R11167,
    /// Protocol numbers on submissions and jollies.
    R11184,
    /// Second timer event 901.
    R11189,
    /// `n.k` block notation in setup 003.
    R17497,
    /// Team definitions in setup 005.
    R17505,
    /// Alternative race definition in setup 002.
    R17548,
    /// Bonus definitions in setup 011 and 012.
    R20642,
    /// `hh:mm:ss.fff` timestamps.
    R20644,
    /// Answer field in setup 004.
    R25013,
}

impl JournalVersion {
    /// Every revision, oldest first.
    pub const ALL: [JournalVersion; 10] = [
        JournalVersion::R5539,
        JournalVersion::R11167,
        JournalVersion::R11184,
        JournalVersion::R11189,
        JournalVersion::R17497,
        JournalVersion::R17505,
        JournalVersion::R17548,
        JournalVersion::R20642,
        JournalVersion::R20644,
        JournalVersion::R25013,
    ];

    /// Oldest supported revision.
    pub const OLDEST: JournalVersion = JournalVersion::R5539;

    /// Newest supported revision.
    pub const NEWEST: JournalVersion = JournalVersion::R25013;

    /// Source tag of the revision, e.g. `r17548`.
    pub fn as_str(self) -> &'static str {
        match self {
            JournalVersion::R5539 => "r5539",
            JournalVersion::R11167 => "r11167",
            JournalVersion::R11184 => "r11184",
            JournalVersion::R11189 => "r11189",
            JournalVersion::R17497 => "r17497",
            JournalVersion::R17505 => "r17505",
            JournalVersion::R17548 => "r17548",
            JournalVersion::R20642 => "r20642",
            JournalVersion::R20644 => "r20644",
            JournalVersion::R25013 => "r25013",
        }
    }

    /// 1-based position in [`JournalVersion::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    /// Submissions and jollies carry `PROT:<n>`.
    pub fn has_protocol_numbers(self) -> bool {
        self >= JournalVersion::R11184
    }

    /// The vocabulary includes the second timer event.
    pub fn has_second_timer(self) -> bool {
        self >= JournalVersion::R11189
    }

    /// Setup 003 may write `block_k` as `n.k`.
    pub fn has_block_k(self) -> bool {
        self >= JournalVersion::R17497
    }

    /// Teams may be defined by setup 005.
    pub fn has_team_definitions(self) -> bool {
        self >= JournalVersion::R17505
    }

    /// The race may be defined by setup 002.
    pub fn has_alternative_race_definition(self) -> bool {
        self >= JournalVersion::R17548
    }

    /// Bonus arrays may be defined by setup 011 and 012.
    pub fn has_bonus_definitions(self) -> bool {
        self >= JournalVersion::R20642
    }

    /// Timestamps are written as `hh:mm:ss.fff`.
    pub fn has_clock_timestamps(self) -> bool {
        self >= JournalVersion::R20644
    }

    /// Setup 004 carries the correct answer.
    pub fn has_question_answers(self) -> bool {
        self >= JournalVersion::R25013
    }

    /// Event codes of the revision.
    pub fn vocabulary(self) -> &'static Vocabulary {
        match self {
            JournalVersion::R5539 => &R5539_VOCABULARY,
            JournalVersion::R11167 | JournalVersion::R11184 => &R11167_VOCABULARY,
            _ => &R11189_VOCABULARY,
        }
    }
}

impl fmt::Display for JournalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JournalVersion {
    type Err = JournalError;

    /// Accepts a source tag (`r17548`) or an ordinal alias (`v7`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        if let Some(ordinal) = needle.strip_prefix('v') {
            if let Ok(ordinal) = ordinal.parse::<usize>() {
                if (1..=Self::ALL.len()).contains(&ordinal) {
                    return Ok(Self::ALL[ordinal - 1]);
                }
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|version| version.as_str() == needle)
            .ok_or_else(|| JournalError::UnknownVersion(s.to_string()))
    }
}

/// Every supported revision, oldest first.
pub fn list_journal_versions() -> &'static [JournalVersion] {
    &JournalVersion::ALL
}

/// Race events the canonical model does not represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoredEvent {
    /// The window for picking a jolly closed.
    JollyTimeout,
    /// Periodic score update.
    TimerUpdate,
    /// Extrapolated clock update.
    SecondTimerUpdate,
    /// The race was suspended.
    RaceSuspended,
    /// The race was resumed.
    RaceResumed,
    /// A bonus was assigned by hand.
    ManualBonus,
}

/// Semantic category of an event code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// The race started.
    RaceStart,
    /// A team answered a question.
    AnswerSubmission,
    /// A team picked its jolly.
    JollySelection,
    /// The race ended.
    RaceEnd,
    /// An event kept only as side-band data.
    Ignored(IgnoredEvent),
}

/// Event codes of a revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Race start.
    pub race_start: &'static str,
    /// Jolly selection.
    pub jolly_selection: &'static str,
    /// Answer submission.
    pub answer_submission: &'static str,
    /// Jolly timeout.
    pub jolly_timeout: &'static str,
    /// Timer update.
    pub timer_update: &'static str,
    /// Second timer update, when the revision has one.
    pub second_timer_update: Option<&'static str>,
    /// Race suspended.
    pub race_suspended: &'static str,
    /// Race resumed.
    pub race_resumed: &'static str,
    /// Race end.
    pub race_end: &'static str,
    /// Manual bonus.
    pub manual_bonus: &'static str,
}

const R5539_VOCABULARY: Vocabulary = Vocabulary {
    race_start: "002",
    jolly_selection: "010",
    answer_submission: "011",
    jolly_timeout: "021",
    timer_update: "022",
    second_timer_update: None,
    race_suspended: "027",
    race_resumed: "028",
    race_end: "029",
    manual_bonus: "091",
};

const R11167_VOCABULARY: Vocabulary = Vocabulary {
    race_start: "200",
    jolly_selection: "120",
    answer_submission: "110",
    jolly_timeout: "121",
    timer_update: "101",
    second_timer_update: None,
    race_suspended: "201",
    race_resumed: "202",
    race_end: "210",
    manual_bonus: "130",
};

const R11189_VOCABULARY: Vocabulary = Vocabulary {
    second_timer_update: Some("901"),
    ..R11167_VOCABULARY
};

impl Vocabulary {
    /// Maps an event code to its category.
    pub fn classify(&self, code: &str) -> Option<EventCategory> {
        let category = if code == self.race_start {
            EventCategory::RaceStart
        } else if code == self.answer_submission {
            EventCategory::AnswerSubmission
        } else if code == self.jolly_selection {
            EventCategory::JollySelection
        } else if code == self.race_end {
            EventCategory::RaceEnd
        } else if code == self.jolly_timeout {
            EventCategory::Ignored(IgnoredEvent::JollyTimeout)
        } else if code == self.timer_update {
            EventCategory::Ignored(IgnoredEvent::TimerUpdate)
        } else if Some(code) == self.second_timer_update {
            EventCategory::Ignored(IgnoredEvent::SecondTimerUpdate)
        } else if code == self.race_suspended {
            EventCategory::Ignored(IgnoredEvent::RaceSuspended)
        } else if code == self.race_resumed {
            EventCategory::Ignored(IgnoredEvent::RaceResumed)
        } else if code == self.manual_bonus {
            EventCategory::Ignored(IgnoredEvent::ManualBonus)
        } else {
            return None;
        };
        Some(category)
    }

    /// Codes of the events the canonical model does not represent.
    pub fn ignored_codes(&self) -> Vec<&'static str> {
        let mut codes = vec![
            self.jolly_timeout,
            self.timer_update,
            self.race_suspended,
            self.race_resumed,
            self.manual_bonus,
        ];
        codes.extend(self.second_timer_update);
        codes
    }

    /// Whether the code belongs to an event the canonical model does not represent.
    pub fn is_ignored(&self, code: &str) -> bool {
        matches!(self.classify(code), Some(EventCategory::Ignored(_)))
    }
}
