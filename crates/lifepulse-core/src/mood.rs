//! Feeling and energy-phase vocabulary.
//!
//! Both sets are closed. Serialized names are the capitalized display names
//! (`"Energetic"`, `"Build"`) so the persisted history stays human-readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// How the user feels today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feeling {
    Energetic,
    Tired,
    Stressed,
    Inspired,
    Calm,
}

impl Feeling {
    /// All feelings in declaration order.
    pub const ALL: [Feeling; 5] = [
        Feeling::Energetic,
        Feeling::Tired,
        Feeling::Stressed,
        Feeling::Inspired,
        Feeling::Calm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feeling::Energetic => "Energetic",
            Feeling::Tired => "Tired",
            Feeling::Stressed => "Stressed",
            Feeling::Inspired => "Inspired",
            Feeling::Calm => "Calm",
        }
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feeling {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Feeling::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValidationError::UnknownFeeling(s.to_string()))
    }
}

/// The activity orientation the user picks for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnergyPhase {
    Build,
    Create,
    Deepen,
    Rest,
}

impl EnergyPhase {
    /// All phases in declaration order.
    pub const ALL: [EnergyPhase; 4] = [
        EnergyPhase::Build,
        EnergyPhase::Create,
        EnergyPhase::Deepen,
        EnergyPhase::Rest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnergyPhase::Build => "Build",
            EnergyPhase::Create => "Create",
            EnergyPhase::Deepen => "Deepen",
            EnergyPhase::Rest => "Rest",
        }
    }

    /// Whether this phase is a recovery phase rather than an active one.
    pub fn is_restful(&self) -> bool {
        matches!(self, EnergyPhase::Rest)
    }
}

impl fmt::Display for EnergyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnergyPhase {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        EnergyPhase::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValidationError::UnknownPhase(s.to_string()))
    }
}
