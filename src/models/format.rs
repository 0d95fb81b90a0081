//! Scoring rules a match is played under.

use serde::{Deserialize, Serialize};

/// Length of a regular set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetType {
    /// First to 6 games by two; 7-5, or 7-6 after a tiebreak at 6-6.
    #[default]
    Standard,
    /// First to 4 games by two; 5-3, or 5-4 after a tiebreak at 4-4.
    Short,
}

impl SetType {
    /// Games needed to win the set without extension.
    pub fn games(self) -> u32 {
        match self {
            SetType::Standard => 6,
            SetType::Short => 4,
        }
    }
}

/// How the deciding set is played.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalSetType {
    #[default]
    FullSet,
    /// Race to 10 points, win by 2.
    SuperTiebreak,
}

/// Deuce handling. Not visible in a set score; carried for the players' information.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointSystem {
    #[default]
    Advantage,
    GoldenPoint,
}

/// Match format configured on a category.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchFormatConfiguration {
    pub sets_to_win: u32,
    pub set_type: SetType,
    pub final_set_type: FinalSetType,
    pub point_system: PointSystem,
}

impl Default for MatchFormatConfiguration {
    /// Best of three full sets with advantage scoring.
    fn default() -> Self {
        Self {
            sets_to_win: 2,
            set_type: SetType::Standard,
            final_set_type: FinalSetType::FullSet,
            point_system: PointSystem::Advantage,
        }
    }
}
