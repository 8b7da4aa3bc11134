//! Streak milestones and celebrations.
//!
//! Thresholds form a step function: a streak maps to the largest threshold it
//! has reached. Whether that milestone is surfaced on every check-in or only
//! on the first day of a new band is decided by [`CelebrationPolicy`].

use serde::{Deserialize, Serialize};

/// A celebratory payload unlocked at a streak length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Streak length that unlocks this milestone
    pub days: u32,
    pub message: &'static str,
    pub affirmation: &'static str,
    pub challenge: &'static str,
}

/// Ascending by `days`.
const MILESTONES: [Milestone; 7] = [
    Milestone {
        days: 3,
        message: "Fantastic! You have checked in 3 days in a row. You are building a powerful habit.",
        affirmation: "I grow stronger with every day and every small step I take.",
        challenge: "Challenge: Write down one thing you are especially proud of yourself for today!",
    },
    Milestone {
        days: 5,
        message: "WOW! A 5-day streak! You are an inspiring force of focus and dedication.",
        affirmation: "My persistence is my superpower. When I keep going, I create magic.",
        challenge: "Challenge: Write down three things you are especially proud of yourself for this past week!",
    },
    Milestone {
        days: 7,
        message: "INCREDIBLE! A whole week of check-ins in a row! You are a star of consistency!",
        affirmation: "I am disciplined, I am aware, I am in touch with my inner strength every day.",
        challenge: "Challenge: Finish the sentence 'If I keep going down this path, in a year I will...'",
    },
    Milestone {
        days: 10,
        message: "MIGHTY! A 10-day streak, this is a BIG milestone! You are a force of nature!",
        affirmation: "I turn small daily actions into lifelong wonders. I am proud of my journey.",
        challenge: "Challenge: Close your eyes for a moment and picture how you celebrate yourself in 30 days. What do you see?",
    },
    Milestone {
        days: 14,
        message: "MATCHLESS! TWO WHOLE WEEKS! You are a legend of personal growth!",
        affirmation: "Every day I become more of who I am meant to be. My potential is endless.",
        challenge: "Challenge: Write a short love letter to yourself, from your future self one year from now.",
    },
    Milestone {
        days: 21,
        message: "OUT OF THIS WORLD! 21 days, you have built a deep habit that is changing your brain!",
        affirmation: "I am the creator of my reality. Every day I build it with awareness and love.",
        challenge: "Challenge: Choose one area of your life you want to see flourish and write 3 specific ways you already see small progress there.",
    },
    Milestone {
        days: 30,
        message: "WORLD CLASS! A WHOLE MONTH! You are in an elite group of mindful growers!",
        affirmation: "I follow my heart's compass. My persistence is the witness of my inner wisdom.",
        challenge: "Challenge: Reflect and write down: which 3 small changes have you noticed in your life since you started this journey?",
    },
];

/// The full milestone table, ascending by threshold.
pub fn milestones() -> &'static [Milestone] {
    &MILESTONES
}

/// Milestone for the largest threshold not exceeding `streak`.
pub fn evaluate_milestone(streak: u32) -> Option<&'static Milestone> {
    MILESTONES.iter().rev().find(|m| m.days <= streak)
}

/// First threshold the streak has not yet reached.
pub fn next_milestone(streak: u32) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.days > streak)
}

/// When a reached milestone is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationPolicy {
    /// Only on the check-in that moves the streak into a new band
    #[default]
    OnTransition,
    /// On every check-in while a milestone is reached
    EveryDay,
}

impl CelebrationPolicy {
    /// Celebration for a check-in that moved the streak from `previous` to `current`.
    pub fn celebration_for(&self, previous: u32, current: u32) -> Option<&'static Milestone> {
        let reached = evaluate_milestone(current)?;
        match self {
            CelebrationPolicy::EveryDay => Some(reached),
            CelebrationPolicy::OnTransition => {
                let before = evaluate_milestone(previous).map(|m| m.days);
                if before == Some(reached.days) {
                    None
                } else {
                    Some(reached)
                }
            }
        }
    }
}
