//! # Lifepulse Core Library
//!
//! This library provides the core logic for Lifepulse, a personal daily
//! check-in journal. All operations are available through the standalone
//! `lifepulse` CLI, which is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Content**: fixed lookup tables mapping a feeling and an energy phase to
//!   a micro-action, a pep talk and a reflection question
//! - **Milestones**: streak thresholds that unlock a celebration
//! - **Streak**: day-over-day streak rule over the persisted check-in history
//! - **Storage**: JSON state file, append-only text log, TOML configuration
//! - **Trend**: aggregate views over the logged feelings and phases
//!
//! ## Key Components
//!
//! - [`Journal`]: runs one check-in from content selection to log entry
//! - [`StreakTracker`]: applies check-ins to the persisted [`CheckInState`]
//! - [`SessionLog`]: append-only log of confirmed check-ins
//! - [`Config`]: application configuration management

pub mod content;
pub mod error;
pub mod milestone;
pub mod mood;
pub mod session;
pub mod storage;
pub mod streak;
pub mod trend;

pub use content::{
    select_micro_action, select_pep_talk, select_reflection_question, DailyContent,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use milestone::{evaluate_milestone, CelebrationPolicy, Milestone};
pub use mood::{EnergyPhase, Feeling};
pub use session::{CheckInEntry, Journal, PendingCheckIn};
pub use storage::{Config, SessionLog, StateStore};
pub use streak::{CheckInState, StreakSummary, StreakTracker, StreakUpdate};
pub use trend::{TrendError, TrendReport};
