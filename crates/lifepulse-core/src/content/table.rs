//! Enumerated-key lookup tables with a single fallback default.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::mood::{EnergyPhase, Feeling};

/// Composite key for the feeling x phase cross-product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboKey {
    pub feeling: Feeling,
    pub phase: EnergyPhase,
}

impl ComboKey {
    pub fn new(feeling: Feeling, phase: EnergyPhase) -> Self {
        Self { feeling, phase }
    }

    /// Every combination, feelings outermost, in declaration order.
    pub fn all() -> impl Iterator<Item = ComboKey> {
        Feeling::ALL.into_iter().flat_map(|feeling| {
            EnergyPhase::ALL
                .into_iter()
                .map(move |phase| ComboKey::new(feeling, phase))
        })
    }
}

/// Lookup table over (feeling, phase) pairs.
///
/// Lookups never fail: a pair without an entry yields the table's default.
#[derive(Debug, Clone)]
pub struct ComboTable {
    entries: HashMap<ComboKey, &'static str>,
    default: &'static str,
}

impl ComboTable {
    /// Build a table that tolerates gaps.
    pub fn from_entries(
        entries: &[(Feeling, EnergyPhase, &'static str)],
        default: &'static str,
    ) -> Self {
        let entries = entries
            .iter()
            .map(|&(feeling, phase, text)| (ComboKey::new(feeling, phase), text))
            .collect();
        Self { entries, default }
    }

    /// Build a table and require it to cover the full cross-product.
    pub fn complete(
        name: &'static str,
        entries: &[(Feeling, EnergyPhase, &'static str)],
        default: &'static str,
    ) -> Result<Self, ValidationError> {
        let table = Self::from_entries(entries, default);
        let missing = table.missing();
        if missing.is_empty() {
            Ok(table)
        } else {
            Err(ValidationError::IncompleteTable {
                table: name.to_string(),
                missing,
            })
        }
    }

    /// Combinations without an explicit entry.
    pub fn missing(&self) -> Vec<(Feeling, EnergyPhase)> {
        ComboKey::all()
            .filter(|key| !self.entries.contains_key(key))
            .map(|key| (key.feeling, key.phase))
            .collect()
    }

    pub fn get(&self, feeling: Feeling, phase: EnergyPhase) -> &'static str {
        self.entries
            .get(&ComboKey::new(feeling, phase))
            .copied()
            .unwrap_or(self.default)
    }

}

/// Lookup table keyed by energy phase alone.
#[derive(Debug, Clone)]
pub struct PhaseTable {
    entries: HashMap<EnergyPhase, &'static str>,
    default: &'static str,
}

impl PhaseTable {
    pub fn from_entries(entries: &[(EnergyPhase, &'static str)], default: &'static str) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
            default,
        }
    }

    pub fn complete(
        name: &'static str,
        entries: &[(EnergyPhase, &'static str)],
        default: &'static str,
    ) -> Result<Self, ValidationError> {
        let table = Self::from_entries(entries, default);
        let missing: Vec<EnergyPhase> = EnergyPhase::ALL
            .into_iter()
            .filter(|phase| !table.entries.contains_key(phase))
            .collect();
        if missing.is_empty() {
            Ok(table)
        } else {
            Err(ValidationError::IncompletePhaseTable {
                table: name.to_string(),
                missing,
            })
        }
    }

    pub fn get(&self, phase: EnergyPhase) -> &'static str {
        self.entries.get(&phase).copied().unwrap_or(self.default)
    }

}
