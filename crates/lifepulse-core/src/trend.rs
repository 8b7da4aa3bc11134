//! Aggregate views over the check-in history.
//!
//! Produces data only: distributions, a feeling time series, the most common
//! feeling/phase pairings and a few plain-language insights. Rendering is left
//! to the caller.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;
use tracing::warn;

use crate::mood::{EnergyPhase, Feeling};
use crate::streak::{CheckInState, FeelingEntry};

/// Minimum number of logged check-ins for a report.
pub const MIN_ENTRIES: usize = 2;

/// Number of pairings listed in [`TrendReport::top_combinations`].
pub const TOP_COMBINATIONS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendError {
    #[error("Insufficient data: need at least {required} check-ins, have {available}")]
    InsufficientData { required: usize, available: usize },
}

/// How often a value occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally<T> {
    pub value: T,
    pub count: usize,
}

/// A feeling/phase pairing and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub feeling: Feeling,
    pub phase: EnergyPhase,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub total_check_ins: u32,
    /// Sorted by count, most frequent first
    pub feeling_distribution: Vec<Tally<Feeling>>,
    /// Sorted by count, most frequent first
    pub phase_distribution: Vec<Tally<EnergyPhase>>,
    /// Feelings in log order
    pub feeling_series: Vec<FeelingEntry>,
    pub top_combinations: Vec<Combination>,
    pub top_feeling: Feeling,
    pub top_phase: EnergyPhase,
    pub insights: Vec<String>,
}

impl TrendReport {
    /// Build a report from the persisted history.
    ///
    /// # Errors
    ///
    /// `InsufficientData` when fewer than [`MIN_ENTRIES`] check-ins are logged.
    pub fn build(state: &CheckInState) -> Result<Self, TrendError> {
        let available = state.feelings_log.len().min(state.phases_log.len());
        if state.feelings_log.len() != state.phases_log.len() {
            warn!(
                feelings = state.feelings_log.len(),
                phases = state.phases_log.len(),
                "feeling and phase logs differ in length, pairing the common prefix"
            );
        }
        if available < MIN_ENTRIES {
            return Err(TrendError::InsufficientData {
                required: MIN_ENTRIES,
                available,
            });
        }

        let feeling_distribution = tally(state.feelings_log.iter().map(|e| e.feeling));
        let phase_distribution = tally(state.phases_log.iter().map(|e| e.phase));

        let mut pairs: HashMap<(Feeling, EnergyPhase), usize> = HashMap::new();
        for (f, p) in state.feelings_log.iter().zip(&state.phases_log) {
            *pairs.entry((f.feeling, p.phase)).or_default() += 1;
        }
        let mut combinations: Vec<Combination> = pairs
            .into_iter()
            .map(|((feeling, phase), count)| Combination {
                feeling,
                phase,
                count,
            })
            .collect();
        combinations.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then(a.feeling.cmp(&b.feeling))
                .then(a.phase.cmp(&b.phase))
        });
        combinations.truncate(TOP_COMBINATIONS);

        // Both distributions are non-empty once `available >= MIN_ENTRIES`.
        let top_feeling = feeling_distribution[0].value;
        let top_phase = phase_distribution[0].value;

        let insights = insights(
            state.total_check_ins,
            &combinations[0],
            &phase_distribution,
        );

        Ok(Self {
            total_check_ins: state.total_check_ins,
            feeling_distribution,
            phase_distribution,
            feeling_series: state.feelings_log.clone(),
            top_combinations: combinations,
            top_feeling,
            top_phase,
            insights,
        })
    }

    /// Share of check-ins in `phase`, between 0.0 and 1.0.
    pub fn phase_share(&self, phase: EnergyPhase) -> f64 {
        share(&self.phase_distribution, phase)
    }

    /// Share of check-ins with `feeling`, between 0.0 and 1.0.
    pub fn feeling_share(&self, feeling: Feeling) -> f64 {
        share(&self.feeling_distribution, feeling)
    }
}

fn tally<T: Copy + Ord + Hash>(values: impl Iterator<Item = T>) -> Vec<Tally<T>> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut tallies: Vec<Tally<T>> = counts
        .into_iter()
        .map(|(value, count)| Tally { value, count })
        .collect();
    tallies.sort_by(|a, b| b.count.cmp(&a.count).then(a.value.cmp(&b.value)));
    tallies
}

fn share<T: PartialEq>(tallies: &[Tally<T>], value: T) -> f64 {
    let total: usize = tallies.iter().map(|t| t.count).sum();
    if total == 0 {
        return 0.0;
    }
    let count = tallies
        .iter()
        .find(|t| t.value == value)
        .map_or(0, |t| t.count);
    count as f64 / total as f64
}

fn insights(
    total_check_ins: u32,
    top: &Combination,
    phases: &[Tally<EnergyPhase>],
) -> Vec<String> {
    let mut out = vec![
        format!(
            "You have checked in {total_check_ins} times. Every check-in builds your awareness."
        ),
        format!(
            "When you feel {}, you often choose a {} phase.",
            top.feeling.to_string().to_lowercase(),
            top.phase
        ),
    ];

    let rest_share = share(phases, EnergyPhase::Rest);
    let balance = if rest_share < 0.2 {
        "Rest phases have been rare. Consider making room for recovery."
    } else if rest_share > 0.5 {
        "You have been resting a lot lately. That may be exactly what you need."
    } else {
        "You seem to have a good balance between activity and rest."
    };
    out.push(balance.to_string());
    out
}
