//! Integration tests for the full check-in flow.
//!
//! Each test gets its own temporary data directory, so nothing touches the
//! user's real journal.

use chrono::{Duration, NaiveDate};
use lifepulse_core::streak::FeelingEntry;
use lifepulse_core::{
    select_micro_action, CheckInState, Config, CoreError, EnergyPhase, Feeling, Journal,
    SessionLog, StateStore, StreakTracker, TrendReport,
};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_two_day_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::default();
    let mut journal = Journal::open(&config, temp_dir.path()).unwrap();

    let day1 = journal
        .begin(Feeling::Energetic, EnergyPhase::Build, date(2024, 1, 1))
        .unwrap();
    assert_eq!(day1.streak.current_streak, 1);
    assert!(day1.celebration.is_none());
    assert_eq!(
        day1.content.micro_action,
        "Take 15 minutes to sketch a visual plan for a project you want to finish."
    );
    journal.confirm(day1, None).unwrap();

    let day2 = journal
        .begin(Feeling::Tired, EnergyPhase::Rest, date(2024, 1, 2))
        .unwrap();
    assert_eq!(day2.streak.current_streak, 2);
    assert!(day2.celebration.is_none());
    assert_eq!(
        day2.content.micro_action,
        select_micro_action(Feeling::Tired, EnergyPhase::Rest)
    );
    journal
        .confirm(day2, Some("Slept early".to_string()))
        .unwrap();

    let state = journal.tracker().state();
    assert_eq!(
        state.feelings_log,
        vec![
            FeelingEntry {
                date: date(2024, 1, 1),
                feeling: Feeling::Energetic
            },
            FeelingEntry {
                date: date(2024, 1, 2),
                feeling: Feeling::Tired
            },
        ]
    );

    let logged = journal.log().read_entries().unwrap();
    assert_eq!(logged.len(), 2);
    assert_eq!(logged[1].reflection.as_deref(), Some("Slept early"));
}

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::default();

    {
        let mut journal = Journal::open(&config, temp_dir.path()).unwrap();
        journal
            .begin(Feeling::Calm, EnergyPhase::Deepen, date(2024, 2, 1))
            .unwrap();
    }

    let mut journal = Journal::open(&config, temp_dir.path()).unwrap();
    let pending = journal
        .begin(Feeling::Calm, EnergyPhase::Deepen, date(2024, 2, 2))
        .unwrap();
    assert_eq!(pending.streak.previous_streak, 1);
    assert_eq!(pending.streak.current_streak, 2);
    assert_eq!(journal.tracker().state().total_check_ins, 2);
}

#[test]
fn test_consecutive_gap_and_reset() {
    let temp_dir = TempDir::new().unwrap();
    let store = StateStore::new(temp_dir.path().join("state.json"));
    let mut tracker = StreakTracker::open(store).unwrap();
    let d1 = date(2024, 3, 10);

    assert_eq!(
        tracker
            .record(Feeling::Inspired, EnergyPhase::Create, d1)
            .unwrap()
            .current_streak,
        1
    );
    assert_eq!(
        tracker
            .record(Feeling::Inspired, EnergyPhase::Create, d1 + Duration::days(1))
            .unwrap()
            .current_streak,
        2
    );
    let reset = tracker
        .record(Feeling::Inspired, EnergyPhase::Create, d1 + Duration::days(4))
        .unwrap();
    assert_eq!(reset.current_streak, 1);
    assert_eq!(reset.highest_streak, 2);
}

#[test]
fn test_milestone_reached_on_third_day() {
    let temp_dir = TempDir::new().unwrap();
    let mut journal = Journal::open(&Config::default(), temp_dir.path()).unwrap();

    let mut celebrations = Vec::new();
    for day in 1..=7 {
        let pending = journal
            .begin(Feeling::Energetic, EnergyPhase::Build, date(2024, 4, day))
            .unwrap();
        celebrations.push(pending.celebration.map(|m| m.days));
    }

    assert_eq!(
        celebrations,
        vec![None, None, Some(3), None, Some(5), None, Some(7)]
    );
}

#[test]
fn test_same_day_repeat_rejected_when_configured() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.check_in.allow_same_day_repeat = false;
    let mut journal = Journal::open(&config, temp_dir.path()).unwrap();

    journal
        .begin(Feeling::Stressed, EnergyPhase::Rest, date(2024, 5, 1))
        .unwrap();
    let err = journal
        .begin(Feeling::Stressed, EnergyPhase::Rest, date(2024, 5, 1))
        .unwrap_err();

    assert!(matches!(err, CoreError::AlreadyCheckedIn { date: d } if d == date(2024, 5, 1)));
    assert_eq!(journal.tracker().state().total_check_ins, 1);
}

#[test]
fn test_corrupt_state_blocks_open() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::default();
    std::fs::write(config.state_path(temp_dir.path()), r#"{"current_streak": "many"}"#).unwrap();

    let err = Journal::open(&config, temp_dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::MalformedState { .. }));
}

#[test]
fn test_reads_state_written_in_legacy_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("streak_data.json");
    std::fs::write(
        &path,
        r#"{
  "current_streak": 0,
  "last_check_in": "",
  "highest_streak": 0,
  "total_check_ins": 0,
  "feelings_log": [],
  "phases_log": []
}"#,
    )
    .unwrap();

    let state = StateStore::new(&path).load().unwrap();
    assert_eq!(state, CheckInState::default());
}

#[test]
fn test_trend_report_after_a_week() {
    let temp_dir = TempDir::new().unwrap();
    let mut journal = Journal::open(&Config::default(), temp_dir.path()).unwrap();
    let feelings = [
        Feeling::Tired,
        Feeling::Tired,
        Feeling::Calm,
        Feeling::Energetic,
        Feeling::Tired,
        Feeling::Inspired,
        Feeling::Calm,
    ];

    for (i, feeling) in feelings.into_iter().enumerate() {
        let pending = journal
            .begin(feeling, EnergyPhase::Rest, date(2024, 6, 1) + Duration::days(i as i64))
            .unwrap();
        journal.confirm(pending, None).unwrap();
    }

    let report = TrendReport::build(journal.tracker().state()).unwrap();
    assert_eq!(report.top_feeling, Feeling::Tired);
    assert_eq!(report.top_phase, EnergyPhase::Rest);
    assert_eq!(report.feeling_series.len(), 7);
    assert!(report.insights.iter().any(|i| i.contains("resting a lot")));
}

#[test]
fn test_log_write_failure_propagates() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.storage.log_file = "no-such-dir/log.txt".to_string();
    let mut journal = Journal::open(&config, temp_dir.path()).unwrap();

    let pending = journal
        .begin(Feeling::Calm, EnergyPhase::Build, date(2024, 7, 1))
        .unwrap();
    let err = journal.confirm(pending, None).unwrap_err();
    assert!(matches!(err, CoreError::StorageUnavailable { .. }));

    // The check-in itself is already recorded
    assert_eq!(journal.tracker().state().total_check_ins, 1);
    assert!(SessionLog::new(temp_dir.path().join("no-such-dir/log.txt"))
        .read_entries()
        .unwrap()
        .is_empty());
}
