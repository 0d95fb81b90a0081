//! Data structures for padel tournaments: teams, bracket matches, formats, tournaments.

mod bracket;
mod format;
mod team;
mod tournament;

pub use bracket::{BracketMatch, MatchId, MatchSide, BYE_SCORE};
pub use format::{FinalSetType, MatchFormatConfiguration, PointSystem, SetType};
pub use team::{PlayerId, Team, TeamId};
pub use tournament::{
    Category, CategoryId, Tournament, TournamentError, TournamentId, TournamentPhase,
    TournamentStatus,
};
