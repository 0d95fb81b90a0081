//! BracketMatch: one node of the single-elimination tree.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Identifier of a bracket match, unique within its category.
pub type MatchId = u32;

/// Score recorded for a match that was won by a bye.
pub const BYE_SCORE: &str = "BYE";

/// One of the two team slots of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSide {
    #[default]
    One,
    Two,
}

/// A single match in the bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: MatchId,
    /// 1-based; round 1 is the first round.
    pub round: u32,
    /// 1-based position within the round.
    pub position: u32,
    pub team_1_id: Option<TeamId>,
    pub team_2_id: Option<TeamId>,
    /// Match that consumes this match's winner. `None` for the final.
    pub next_match_id: Option<MatchId>,
    pub winner_bracket: bool,
    pub score: Option<String>,
    pub winner_team_id: Option<TeamId>,
}

impl BracketMatch {
    pub fn new(id: MatchId, round: u32, position: u32) -> Self {
        Self {
            id,
            round,
            position,
            team_1_id: None,
            team_2_id: None,
            next_match_id: None,
            winner_bracket: true,
            score: None,
            winner_team_id: None,
        }
    }

    /// Slot this match's winner occupies in the next match: first of a pair feeds slot one,
    /// second of a pair feeds slot two.
    pub fn next_side(&self) -> MatchSide {
        if self.position % 2 == 1 {
            MatchSide::One
        } else {
            MatchSide::Two
        }
    }

    pub fn team(&self, side: MatchSide) -> Option<TeamId> {
        match side {
            MatchSide::One => self.team_1_id,
            MatchSide::Two => self.team_2_id,
        }
    }

    pub fn set_team(&mut self, side: MatchSide, team: Option<TeamId>) {
        match side {
            MatchSide::One => self.team_1_id = team,
            MatchSide::Two => self.team_2_id = team,
        }
    }

    /// The only team in the match, if exactly one slot is filled.
    pub fn lone_team(&self) -> Option<TeamId> {
        match (self.team_1_id, self.team_2_id) {
            (Some(t), None) | (None, Some(t)) => Some(t),
            _ => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner_team_id.is_some()
    }

    pub fn is_bye(&self) -> bool {
        self.score.as_deref() == Some(BYE_SCORE)
    }

    pub fn is_final(&self) -> bool {
        self.next_match_id.is_none()
    }
}
