//! Team data structure: two players entered together in one category.

use serde::{Deserialize, Serialize};

/// Identifier of a team, unique within its category.
pub type TeamId = u32;

/// Opaque player identifier handed to us by the messaging platform that owns identities.
pub type PlayerId = String;

/// A confirmed team (two players paired and accepted).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub player_1: PlayerId,
    pub player_2: PlayerId,
    /// Skill level; only used for seeding.
    pub level: f64,
    /// Seed rank (1..=num_seeds). Assigned by the bracket generator, never taken from input.
    #[serde(default)]
    pub seed: Option<u32>,
}

impl Team {
    /// Create an unseeded team.
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        player_1: impl Into<PlayerId>,
        player_2: impl Into<PlayerId>,
        level: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            player_1: player_1.into(),
            player_2: player_2.into(),
            level,
            seed: None,
        }
    }

    /// Whether the given player plays in this team.
    pub fn has_player(&self, player: &str) -> bool {
        self.player_1 == player || self.player_2 == player
    }
}
