//! Day-over-day streak tracking.
//!
//! [`CheckInState`] is the persisted singleton; [`CheckInState::record_check_in`]
//! applies the streak rule in memory and [`StreakTracker`] wraps it with a
//! [`StateStore`] so every update is saved before it becomes visible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CoreError, Result};
use crate::mood::{EnergyPhase, Feeling};
use crate::storage::StateStore;

/// Date format used in the persisted state and the session log.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One observed feeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeelingEntry {
    pub date: NaiveDate,
    pub feeling: Feeling,
}

/// One observed energy phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEntry {
    pub date: NaiveDate,
    pub phase: EnergyPhase,
}

/// Persisted check-in history and streak counters.
///
/// `feelings_log` and `phases_log` are index-aligned: entry `i` of each
/// belongs to the same check-in, and both have `total_check_ins` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInState {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default, with = "date_or_empty")]
    pub last_check_in: Option<NaiveDate>,
    #[serde(default)]
    pub highest_streak: u32,
    #[serde(default)]
    pub total_check_ins: u32,
    #[serde(default)]
    pub feelings_log: Vec<FeelingEntry>,
    #[serde(default)]
    pub phases_log: Vec<PhaseEntry>,
}

impl CheckInState {
    /// Record one check-in and return the new current streak.
    ///
    /// A same-day repeat leaves the streak unchanged but is still logged and
    /// counted. A gap of two or more days, or a `last_check_in` later than
    /// `today`, resets the streak to 1.
    pub fn record_check_in(
        &mut self,
        feeling: Feeling,
        phase: EnergyPhase,
        today: NaiveDate,
    ) -> u32 {
        self.feelings_log.push(FeelingEntry { date: today, feeling });
        self.phases_log.push(PhaseEntry { date: today, phase });
        self.total_check_ins = self.total_check_ins.saturating_add(1);

        self.current_streak = match self.last_check_in {
            None => self.current_streak.saturating_add(1),
            Some(last) if Some(last) == today.pred_opt() => self.current_streak.saturating_add(1),
            Some(last) if last == today => self.current_streak,
            Some(last) => {
                if last > today {
                    warn!(%last, %today, "last check-in is after today, resetting streak");
                }
                1
            }
        };

        self.highest_streak = self.highest_streak.max(self.current_streak);
        self.last_check_in = Some(today);
        self.current_streak
    }

    /// Whether a check-in on `today` would extend or keep the current streak.
    pub fn streak_is_alive(&self, today: NaiveDate) -> bool {
        match self.last_check_in {
            Some(last) => last == today || Some(last) == today.pred_opt(),
            None => false,
        }
    }

    pub fn checked_in_on(&self, day: NaiveDate) -> bool {
        self.last_check_in == Some(day)
    }

    /// Snapshot of the counters for display.
    pub fn summary(&self, today: NaiveDate) -> StreakSummary {
        StreakSummary {
            current_streak: self.current_streak,
            highest_streak: self.highest_streak,
            total_check_ins: self.total_check_ins,
            last_check_in: self.last_check_in,
            checked_in_today: self.checked_in_on(today),
            streak_alive: self.streak_is_alive(today),
        }
    }
}

/// Display counters derived from [`CheckInState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub highest_streak: u32,
    pub total_check_ins: u32,
    pub last_check_in: Option<NaiveDate>,
    pub checked_in_today: bool,
    pub streak_alive: bool,
}

/// Outcome of one recorded check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakUpdate {
    pub date: NaiveDate,
    pub previous_streak: u32,
    pub current_streak: u32,
    pub highest_streak: u32,
    pub total_check_ins: u32,
    /// The previous check-in was on the same date
    pub same_day_repeat: bool,
}

/// Owns the persisted state and applies check-ins to it.
#[derive(Debug)]
pub struct StreakTracker {
    store: StateStore,
    state: CheckInState,
    allow_same_day_repeat: bool,
}

impl StreakTracker {
    /// Load state from `store`.
    ///
    /// # Errors
    ///
    /// Propagates `StorageUnavailable` and `MalformedState` from the store.
    pub fn open(store: StateStore) -> Result<Self> {
        let state = store.load()?;
        Ok(Self {
            store,
            state,
            allow_same_day_repeat: true,
        })
    }

    /// Reject a second check-in on the same date when `allow` is false.
    pub fn with_same_day_repeats(mut self, allow: bool) -> Self {
        self.allow_same_day_repeat = allow;
        self
    }

    pub fn state(&self) -> &CheckInState {
        &self.state
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Apply a check-in and persist the result before returning.
    ///
    /// The in-memory state only changes once the save has succeeded.
    ///
    /// # Errors
    ///
    /// `AlreadyCheckedIn` when same-day repeats are disabled and `today`
    /// already has a check-in; `StorageUnavailable` if saving fails.
    pub fn record(
        &mut self,
        feeling: Feeling,
        phase: EnergyPhase,
        today: NaiveDate,
    ) -> Result<StreakUpdate> {
        let same_day_repeat = self.state.checked_in_on(today);
        if same_day_repeat && !self.allow_same_day_repeat {
            return Err(CoreError::AlreadyCheckedIn { date: today });
        }

        let mut next = self.state.clone();
        let previous_streak = next.current_streak;
        let current_streak = next.record_check_in(feeling, phase, today);
        self.store.save(&next)?;
        self.state = next;

        info!(
            %today,
            %feeling,
            %phase,
            previous_streak,
            current_streak,
            total_check_ins = self.state.total_check_ins,
            "recorded check-in"
        );

        Ok(StreakUpdate {
            date: today,
            previous_streak,
            current_streak,
            highest_streak: self.state.highest_streak,
            total_check_ins: self.state.total_check_ins,
            same_day_repeat,
        })
    }

    pub fn summary(&self, today: NaiveDate) -> StreakSummary {
        self.state.summary(today)
    }
}

/// `Option<NaiveDate>` stored as `"YYYY-MM-DD"` or `""`.
mod date_or_empty {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.collect_str(&d.format(DATE_FORMAT)),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_check_in_starts_streak() {
        let mut state = CheckInState::default();
        let streak =
            state.record_check_in(Feeling::Energetic, EnergyPhase::Build, date(2024, 1, 1));

        assert_eq!(streak, 1);
        assert_eq!(state.highest_streak, 1);
        assert_eq!(state.total_check_ins, 1);
        assert_eq!(state.last_check_in, Some(date(2024, 1, 1)));
    }

    #[test]
    fn consecutive_days_extend_and_gaps_reset() {
        let mut state = CheckInState::default();
        let d1 = date(2024, 1, 1);

        assert_eq!(state.record_check_in(Feeling::Calm, EnergyPhase::Rest, d1), 1);
        assert_eq!(
            state.record_check_in(Feeling::Calm, EnergyPhase::Rest, d1 + Duration::days(1)),
            2
        );
        assert_eq!(
            state.record_check_in(Feeling::Calm, EnergyPhase::Rest, d1 + Duration::days(4)),
            1
        );
        assert_eq!(state.highest_streak, 2);
    }

    #[test]
    fn same_day_repeat_keeps_streak_but_counts() {
        let mut state = CheckInState::default();
        let d = date(2024, 5, 10);

        state.record_check_in(Feeling::Tired, EnergyPhase::Build, d);
        let before = state.current_streak;
        state.record_check_in(Feeling::Stressed, EnergyPhase::Create, d);

        assert_eq!(state.current_streak, before);
        assert_eq!(state.total_check_ins, 2);
        assert_eq!(state.feelings_log.len(), 2);
        assert_eq!(state.phases_log.len(), 2);
        assert_eq!(state.feelings_log[1].feeling, Feeling::Stressed);
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        let mut state = CheckInState::default();
        state.record_check_in(Feeling::Calm, EnergyPhase::Build, date(2023, 12, 31));
        assert_eq!(
            state.record_check_in(Feeling::Calm, EnergyPhase::Build, date(2024, 1, 1)),
            2
        );
        state.record_check_in(Feeling::Calm, EnergyPhase::Build, date(2024, 2, 28));
        state.record_check_in(Feeling::Calm, EnergyPhase::Build, date(2024, 2, 29));
        assert_eq!(state.current_streak, 2);
    }

    #[test]
    fn future_dated_last_check_in_resets() {
        let mut state = CheckInState {
            current_streak: 5,
            highest_streak: 5,
            last_check_in: Some(date(2024, 6, 10)),
            ..Default::default()
        };

        let streak =
            state.record_check_in(Feeling::Inspired, EnergyPhase::Deepen, date(2024, 6, 1));
        assert_eq!(streak, 1);
        assert_eq!(state.highest_streak, 5);
    }

    #[test]
    fn streak_alive_only_today_or_yesterday() {
        let mut state = CheckInState::default();
        assert!(!state.streak_is_alive(date(2024, 1, 1)));

        state.record_check_in(Feeling::Calm, EnergyPhase::Rest, date(2024, 1, 1));
        assert!(state.streak_is_alive(date(2024, 1, 1)));
        assert!(state.streak_is_alive(date(2024, 1, 2)));
        assert!(!state.streak_is_alive(date(2024, 1, 3)));
    }

    #[test]
    fn serializes_with_empty_string_sentinel() {
        let json = serde_json::to_value(CheckInState::default()).unwrap();
        assert_eq!(json["last_check_in"], "");
        assert_eq!(json["feelings_log"], serde_json::json!([]));

        let mut state = CheckInState::default();
        state.record_check_in(Feeling::Energetic, EnergyPhase::Build, date(2024, 1, 1));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["last_check_in"], "2024-01-01");
        assert_eq!(
            json["feelings_log"],
            serde_json::json!([{"date": "2024-01-01", "feeling": "Energetic"}])
        );
        assert_eq!(
            json["phases_log"],
            serde_json::json!([{"date": "2024-01-01", "phase": "Build"}])
        );
    }

    #[test]
    fn deserializes_older_files_without_logs() {
        let state: CheckInState = serde_json::from_str(
            r#"{"current_streak": 2, "last_check_in": "2024-01-02", "highest_streak": 4, "total_check_ins": 9}"#,
        )
        .unwrap();

        assert_eq!(state.current_streak, 2);
        assert_eq!(state.last_check_in, Some(date(2024, 1, 2)));
        assert!(state.feelings_log.is_empty());
        assert!(state.phases_log.is_empty());
    }

    #[test]
    fn tracker_persists_every_update() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("state.json"));
        let mut tracker = StreakTracker::open(store.clone()).unwrap();

        let update = tracker
            .record(Feeling::Energetic, EnergyPhase::Build, date(2024, 1, 1))
            .unwrap();
        assert_eq!(update.previous_streak, 0);
        assert_eq!(update.current_streak, 1);
        assert!(!update.same_day_repeat);

        let reloaded = store.load().unwrap();
        assert_eq!(&reloaded, tracker.state());
    }

    #[test]
    fn tracker_can_reject_same_day_repeats() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("state.json"));
        let mut tracker = StreakTracker::open(store).unwrap().with_same_day_repeats(false);

        tracker
            .record(Feeling::Calm, EnergyPhase::Rest, date(2024, 1, 1))
            .unwrap();
        let err = tracker
            .record(Feeling::Calm, EnergyPhase::Rest, date(2024, 1, 1))
            .unwrap_err();

        assert!(matches!(err, CoreError::AlreadyCheckedIn { .. }));
        assert_eq!(tracker.state().total_check_ins, 1);
    }

    #[test]
    fn tracker_flags_same_day_repeat_when_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("state.json"));
        let mut tracker = StreakTracker::open(store).unwrap();

        tracker
            .record(Feeling::Calm, EnergyPhase::Rest, date(2024, 1, 1))
            .unwrap();
        let update = tracker
            .record(Feeling::Calm, EnergyPhase::Rest, date(2024, 1, 1))
            .unwrap();

        assert!(update.same_day_repeat);
        assert_eq!(update.current_streak, 1);
        assert_eq!(update.total_check_ins, 2);
    }

    #[test]
    fn failed_save_leaves_state_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let parent = temp_dir.path().join("data");
        let store = StateStore::new(parent.join("state.json"));
        let mut tracker = StreakTracker::open(store).unwrap();
        // Parent of the state path becomes a regular file, so the save must fail
        std::fs::write(&parent, "file, not a directory").unwrap();

        let err = tracker
            .record(Feeling::Calm, EnergyPhase::Rest, date(2024, 1, 1))
            .unwrap_err();

        assert!(matches!(err, CoreError::StorageUnavailable { .. }));
        assert_eq!(tracker.state(), &CheckInState::default());
    }
}
