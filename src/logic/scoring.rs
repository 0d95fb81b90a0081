//! Score recording: validate a played match, store the result, advance the winner.

use crate::logic::bracket::advance_winner;
use crate::logic::format::{match_format_for_round, parse_score};
use crate::models::{
    CategoryId, MatchId, MatchSide, TeamId, Tournament, TournamentError, TournamentStatus,
};

/// Record the score of a played match and return the winning team.
///
/// The score is validated against the format of the match's round. The winner moves into the
/// next match (slot one from the first match of a pair, slot two from the second). Once every
/// category has a champion the tournament is `Completed`.
pub fn record_match_score(
    tournament: &mut Tournament,
    category_id: CategoryId,
    match_id: MatchId,
    score: &str,
) -> Result<TeamId, TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }

    let category = tournament.category_mut(category_id)?;
    let m = category
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_decided() {
        return Err(TournamentError::MatchAlreadyDecided(match_id));
    }
    let (team_1, team_2) = match (m.team_1_id, m.team_2_id) {
        (Some(team_1), Some(team_2)) => (team_1, team_2),
        _ => return Err(TournamentError::MatchNotReady(match_id)),
    };

    let format = *match_format_for_round(category, m);
    let winner = match parse_score(score, &format)? {
        MatchSide::One => team_1,
        MatchSide::Two => team_2,
    };

    let m = category
        .bracket
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.score = Some(score.trim().to_string());
    m.winner_team_id = Some(winner);

    match advance_winner(&mut category.bracket, match_id) {
        Some(next) => log::info!(
            "Category {}: team {} won match {} ({}), advances to match {}",
            category.name,
            winner,
            match_id,
            score.trim(),
            next
        ),
        None => log::info!(
            "Category {}: team {} won the final ({})",
            category.name,
            winner,
            score.trim()
        ),
    }

    if tournament.all_categories_decided() {
        tournament.status = TournamentStatus::Completed;
        log::info!("Tournament {} completed", tournament.name);
    }

    Ok(winner)
}
