//! Tournament business logic: bracket generation, formats, scoring, phases, roster import.

mod bracket;
mod format;
mod phase;
mod roster;
mod scoring;
mod setup;

pub use bracket::{
    advance_winner, generate_bracket, generate_bracket_with_rng, round_count, seed_order,
    GeneratedBracket,
};
pub use format::{match_format_for_round, parse_score};
pub use phase::{
    classify_tournament, group_by_phase, tournament_phase, tournament_status_by_dates,
    PhaseGroups,
};
pub use roster::{import_roster, parse_roster_csv, RosterEntry};
pub use scoring::record_match_score;
pub use setup::{start_category, ALLOWED_SEED_COUNTS};
