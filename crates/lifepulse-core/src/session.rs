//! One check-in from selection to confirmation.
//!
//! [`Journal::begin`] generates the day's content, records the streak and
//! picks a celebration, returning a [`PendingCheckIn`] that the caller holds
//! while the user reads it. [`Journal::confirm`] turns it into a
//! [`CheckInEntry`] and appends it to the session log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::content::DailyContent;
use crate::error::{Result, ValidationError};
use crate::milestone::{CelebrationPolicy, Milestone};
use crate::mood::{EnergyPhase, Feeling};
use crate::storage::{Config, SessionLog, StateStore};
use crate::streak::{StreakTracker, StreakUpdate};

/// A finalized check-in as written to the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInEntry {
    pub date: NaiveDate,
    pub feeling: Feeling,
    pub phase: EnergyPhase,
    pub micro_action: String,
    pub pep_talk: String,
    pub reflection_question: String,
    pub reflection: Option<String>,
}

/// Generated content and streak outcome awaiting confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct PendingCheckIn {
    pub date: NaiveDate,
    pub feeling: Feeling,
    pub phase: EnergyPhase,
    pub content: DailyContent,
    pub streak: StreakUpdate,
    pub celebration: Option<Milestone>,
}

impl PendingCheckIn {
    /// Finalize with the user's optional reflection. Blank text counts as none.
    pub fn into_entry(self, reflection: Option<String>) -> CheckInEntry {
        let reflection = reflection
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        CheckInEntry {
            date: self.date,
            feeling: self.feeling,
            phase: self.phase,
            micro_action: self.content.micro_action,
            pep_talk: self.content.pep_talk,
            reflection_question: self.content.reflection_question,
            reflection,
        }
    }
}

/// Streak tracker, session log and policies for one data directory.
#[derive(Debug)]
pub struct Journal {
    tracker: StreakTracker,
    log: SessionLog,
    celebration: CelebrationPolicy,
}

impl Journal {
    /// Open the journal described by `config` inside `data_dir`.
    ///
    /// # Errors
    ///
    /// Fails if the persisted state is unreadable or malformed.
    pub fn open(config: &Config, data_dir: &Path) -> Result<Self> {
        let store = StateStore::new(config.state_path(data_dir));
        let tracker = StreakTracker::open(store)?
            .with_same_day_repeats(config.check_in.allow_same_day_repeat);

        Ok(Self {
            tracker,
            log: SessionLog::new(config.log_path(data_dir)),
            celebration: config.milestones.celebrate,
        })
    }

    pub fn tracker(&self) -> &StreakTracker {
        &self.tracker
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Generate content and record the check-in. State is persisted before
    /// this returns; the session log is only written on [`Journal::confirm`].
    pub fn begin(
        &mut self,
        feeling: Feeling,
        phase: EnergyPhase,
        today: NaiveDate,
    ) -> Result<PendingCheckIn> {
        let content = DailyContent::select(feeling, phase);
        let streak = self.tracker.record(feeling, phase, today)?;
        let celebration = self
            .celebration
            .celebration_for(streak.previous_streak, streak.current_streak)
            .copied();

        if let Some(milestone) = &celebration {
            info!(days = milestone.days, streak = streak.current_streak, "milestone reached");
        }

        Ok(PendingCheckIn {
            date: today,
            feeling,
            phase,
            content,
            streak,
            celebration,
        })
    }

    /// Like [`Journal::begin`] for a date the user picked rather than the
    /// clock. Dates before the last check-in are refused.
    ///
    /// # Errors
    ///
    /// `Validation` when `date` precedes the last recorded check-in, plus
    /// everything [`Journal::begin`] can return.
    pub fn begin_on(
        &mut self,
        feeling: Feeling,
        phase: EnergyPhase,
        date: NaiveDate,
    ) -> Result<PendingCheckIn> {
        if let Some(last) = self.tracker.state().last_check_in {
            if date < last {
                return Err(ValidationError::InvalidValue {
                    field: "date".to_string(),
                    message: format!("{date} is before the last check-in on {last}"),
                }
                .into());
            }
        }
        self.begin(feeling, phase, date)
    }

    /// Append the finalized entry to the session log.
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` if the log cannot be written.
    pub fn confirm(
        &self,
        pending: PendingCheckIn,
        reflection: Option<String>,
    ) -> Result<CheckInEntry> {
        let entry = pending.into_entry(reflection);
        self.log.append(&entry)?;
        Ok(entry)
    }
}
