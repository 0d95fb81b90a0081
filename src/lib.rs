//! Padel tournament web app: library with models, bracket engine, and tournament flows.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    advance_winner, classify_tournament, generate_bracket, generate_bracket_with_rng,
    group_by_phase, import_roster, match_format_for_round, parse_roster_csv, parse_score,
    record_match_score, round_count, seed_order, start_category, tournament_phase,
    tournament_status_by_dates, GeneratedBracket, PhaseGroups, RosterEntry, ALLOWED_SEED_COUNTS,
};
pub use models::{
    BracketMatch, Category, CategoryId, FinalSetType, MatchFormatConfiguration, MatchId,
    MatchSide, PlayerId, PointSystem, SetType, Team, TeamId, Tournament, TournamentError,
    TournamentId, TournamentPhase, TournamentStatus, BYE_SCORE,
};
pub use store::{InMemoryStore, TournamentStore};
