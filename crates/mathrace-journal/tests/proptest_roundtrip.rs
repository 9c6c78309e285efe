use chrono::{DateTime, FixedOffset, TimeDelta};
use mathrace_canonical::{
    reorder_lists, strip_mathrace_only, strip_milliseconds, strip_trailing_zero_bonus, Event,
    RaceDict, DEFAULT_FIXED_BONUS, DEFAULT_SUPER_MEGA_BONUS, FIXED_BONUS_LEN, MAX_ANSWER,
    SUPER_MEGA_BONUS_LEN,
};
use mathrace_journal::{
    convert_journal, determine_journal_version, list_journal_versions, read_journal,
    write_journal, JournalError, JournalReader, JournalVersion, LiveJournal,
};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::io::Read;

const RACE_NAME: &str = "prop";

fn start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-03-14T09:00:00+01:00").unwrap()
}

fn version_strategy() -> impl Strategy<Value = JournalVersion> {
    prop::sample::select(list_journal_versions())
}

const TEAM_NAMES: [&str; 4] = [
    "I Pitagorici",
    "Liceo Galilei",
    "Ospiti da Trieste",
    "Gli Euleriani",
];

fn bonus_strategy(
    default: &'static [u32],
    len: usize,
    max: u32,
) -> impl Strategy<Value = Vec<u32>> {
    prop_oneof![
        3 => Just(default.to_vec()),
        1 => Just(Vec::new()),
        1 => prop::collection::vec(0..=max, 0..=len),
    ]
}

fn team_strategy() -> impl Strategy<Value = (Option<usize>, bool)> {
    (
        prop::option::weighted(0.2, 0..TEAM_NAMES.len()),
        prop::bool::weighted(0.1),
    )
}

fn events_strategy() -> impl Strategy<Value = Vec<(i64, i64, bool, u32, u32, u32)>> {
    prop::collection::vec(
        (
            0i64..7200,
            0i64..1000,
            any::<bool>(),
            1u32..6,
            1u32..6,
            prop_oneof![0u32..2, 0u32..=MAX_ANSWER],
        ),
        0..20,
    )
}

/// Races of any shape, from the default one to races only r25013 can express.
fn race_strategy() -> impl Strategy<Value = RaceDict> {
    (
        (1u32..6, 1u32..6, prop::bool::weighted(0.8), prop::bool::weighted(0.9)),
        prop::collection::vec(team_strategy(), 5),
        prop::collection::vec(prop_oneof![9 => Just(0u32), 1 => 1u32..=MAX_ANSWER], 5),
        bonus_strategy(&DEFAULT_FIXED_BONUS, FIXED_BONUS_LEN, 30),
        bonus_strategy(&DEFAULT_SUPER_MEGA_BONUS, SUPER_MEGA_BONUS_LEN, 100),
        prop_oneof![3 => Just(1u32), 1 => 1u32..4],
        events_strategy(),
    )
        .prop_map(
            |(
                (num_teams, num_questions, started, jolly_enabled),
                teams,
                answers,
                fixed_bonus,
                super_mega_bonus,
                block_k,
                raw_events,
            )| {
                let mut race = RaceDict::new(RACE_NAME, num_teams, num_questions);
                race.jolly_enabled = jolly_enabled;
                race.fixed_bonus = fixed_bonus;
                race.super_mega_bonus = super_mega_bonus;
                race.block_k = Some(block_k);
                for (team, (name, guest)) in race.teams.iter_mut().zip(teams) {
                    if let Some(name) = name {
                        team.name = TEAM_NAMES[name].to_string();
                    }
                    team.guest = guest;
                }
                for (question, answer) in race.questions.iter_mut().zip(answers) {
                    question.correct_answer = answer;
                }
                if !started {
                    return race;
                }

                race.start = Some(start());
                let mut with_jolly = BTreeSet::new();
                race.events = raw_events
                    .into_iter()
                    .map(|(secs, millis, jolly, team, question, answer)| {
                        let instant =
                            start() + TimeDelta::seconds(secs) + TimeDelta::milliseconds(millis);
                        let team = team.min(num_teams);
                        let question = question.min(num_questions);
                        if jolly && with_jolly.insert(team) {
                            Event::jolly(instant, team, question)
                        } else {
                            Event::submission(instant, team, question, answer)
                        }
                    })
                    .collect();
                reorder_lists(&mut race);
                race
            },
        )
}

fn normalized(mut race: RaceDict) -> RaceDict {
    strip_mathrace_only(&mut race);
    strip_milliseconds(&mut race);
    strip_trailing_zero_bonus(&mut race);
    race
}

fn read(version: JournalVersion, journal: &str) -> RaceDict {
    JournalReader::new(journal.as_bytes(), version)
        .read(RACE_NAME, start())
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 8192,
        ..ProptestConfig::with_cases(128)
    })]

    #[test]
    fn prop_same_revision_round_trip(race in race_strategy(), version in version_strategy()) {
        let journal = write_journal(&race, version);
        prop_assume!(journal.is_ok());
        let journal = journal.unwrap();
        prop_assert_eq!(normalized(read(version, &journal)), normalized(race));
    }

    #[test]
    fn prop_cross_revision_round_trip(
        race in race_strategy(),
        source in version_strategy(),
        target in version_strategy(),
    ) {
        let journal = write_journal(&race, source);
        prop_assume!(journal.is_ok());
        let journal = journal.unwrap();

        let converted = convert_journal(journal.as_bytes(), target);
        if write_journal(&race, target).is_ok() {
            let converted = converted.unwrap();
            prop_assert_eq!(normalized(read(target, &converted)), normalized(race));
        } else {
            let is_unsupported =
                matches!(converted, Err(JournalError::UnsupportedFeature { .. }));
            prop_assert!(is_unsupported, "{} -> {}: {:?}", source, target, converted);
        }
    }

    #[test]
    fn prop_detected_revision_is_not_newer(race in race_strategy(), version in version_strategy()) {
        let journal = write_journal(&race, version);
        prop_assume!(journal.is_ok());
        let journal = journal.unwrap();

        // Without the r5539 start line a journal cannot be told apart from r11167.
        let newest = if race.start.is_some() {
            version
        } else {
            version.max(JournalVersion::R11167)
        };
        let detected = determine_journal_version(&journal).unwrap();
        prop_assert!(detected <= newest);
        prop_assert_eq!(normalized(read(detected, &journal)), normalized(race));
    }

    #[test]
    fn prop_snapshots_are_growing_prefixes(
        race in race_strategy(),
        version in version_strategy(),
        snapshots in 1usize..8,
    ) {
        prop_assume!(race.start.is_some());
        let journal = write_journal(&race, version);
        prop_assume!(journal.is_ok());
        let journal = journal.unwrap();

        let mut live = LiveJournal::new(&journal, snapshots).unwrap();
        let mut previous_events = 0;
        let mut last = String::new();
        while live.can_read() {
            let mut snapshot = String::new();
            live.open().unwrap().read_to_string(&mut snapshot).unwrap();
            let partial = read_journal(&snapshot, RACE_NAME, start()).unwrap();
            prop_assert!(partial.events.len() >= previous_events);
            previous_events = partial.events.len();
            last = snapshot;
        }
        prop_assert_eq!(last, journal);
    }
}
