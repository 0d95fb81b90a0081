//! Setup phase: draw a category (generate its bracket) and move the tournament into play.

use crate::logic::bracket::generate_bracket;
use crate::models::{CategoryId, Tournament, TournamentError, TournamentStatus};

/// Seed counts an organizer may pick. Zero draws the whole category at random.
pub const ALLOWED_SEED_COUNTS: [usize; 5] = [0, 2, 4, 8, 16];

/// Generate the bracket of a category.
///
/// The category must be full unless `force` is set, and needs at least two teams either way.
/// `num_seeds` must be one of [`ALLOWED_SEED_COUNTS`] and at most half the confirmed teams.
/// A planned tournament becomes `InProgress` with its first drawn category.
pub fn start_category(
    tournament: &mut Tournament,
    category_id: CategoryId,
    num_seeds: usize,
    force: bool,
) -> Result<(), TournamentError> {
    use TournamentStatus::*;
    if !matches!(tournament.status, Planned | InProgress) {
        return Err(TournamentError::InvalidState);
    }

    let category = tournament.category_mut(category_id)?;
    if category.started {
        return Err(TournamentError::InvalidState);
    }
    let confirmed = category.teams.len();
    if confirmed < 2 {
        return Err(TournamentError::NotEnoughTeams {
            confirmed,
            required: 2,
        });
    }
    if !force && !category.is_full() {
        return Err(TournamentError::NotEnoughTeams {
            confirmed,
            required: category.max_teams as usize,
        });
    }
    if !ALLOWED_SEED_COUNTS.contains(&num_seeds) || num_seeds > confirmed / 2 {
        return Err(TournamentError::InvalidSeedCount {
            requested: num_seeds,
            confirmed,
        });
    }

    let generated = generate_bracket(&category.teams, num_seeds);
    category.teams = generated.teams;
    category.bracket = generated.bracket;
    category.started = true;
    log::info!(
        "Drew category {} with {} teams ({} seeded, {} matches)",
        category.name,
        confirmed,
        num_seeds,
        category.bracket.len()
    );

    if tournament.status == Planned {
        tournament.status = InProgress;
        log::info!("Tournament {} is now in progress", tournament.name);
    }
    Ok(())
}
