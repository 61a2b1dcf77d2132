//! Tasbeeh (dhikr) counter

use serde::{Deserialize, Serialize};

/// Default target for one round of dhikr
pub const DEFAULT_TARGET: u32 = 33;

/// A dhikr counter that wraps to zero after each completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasbeehCounter {
    /// Phrase being recited
    pub dhikr: String,
    /// Count within the current round
    pub count: u32,
    /// Count that completes a round
    pub target: u32,
    /// Completed rounds
    #[serde(default)]
    pub rounds: u32,
}

impl Default for TasbeehCounter {
    fn default() -> Self {
        Self::new("SubhanAllah", DEFAULT_TARGET)
    }
}

impl TasbeehCounter {
    /// Create a counter; a zero target is treated as 1
    pub fn new(dhikr: impl Into<String>, target: u32) -> Self {
        Self {
            dhikr: dhikr.into(),
            count: 0,
            target: target.max(1),
            rounds: 0,
        }
    }

    /// Count one recitation, returning true when it completes a round
    pub fn increment(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.target {
            self.count = 0;
            self.rounds += 1;
            true
        } else {
            false
        }
    }

    /// Reset count and rounds
    pub fn reset(&mut self) {
        self.count = 0;
        self.rounds = 0;
    }

    /// Total recitations across rounds
    pub fn total(&self) -> u64 {
        u64::from(self.rounds) * u64::from(self.target) + u64::from(self.count)
    }

    /// Progress through the current round (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.count as f32 / self.target as f32
    }
}
