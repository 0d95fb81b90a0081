//! Round-format resolution and score validation against a match format.

use crate::logic::bracket::round_count;
use crate::models::{
    BracketMatch, Category, FinalSetType, MatchFormatConfiguration, MatchSide, SetType,
    TournamentError,
};

/// Points needed to take a super tiebreak.
const SUPER_TIEBREAK_POINTS: u32 = 10;

/// Format a match is played under.
///
/// The final format (if configured) applies to the last round of a bracket sized for the
/// category's `max_teams`; every other match uses the default format.
pub fn match_format_for_round<'a>(
    category: &'a Category,
    m: &BracketMatch,
) -> &'a MatchFormatConfiguration {
    if category.max_teams == 0 {
        return &category.default_match_format;
    }
    let max_rounds = round_count(category.max_teams as usize);
    match &category.final_match_format {
        Some(final_format) if m.round == max_rounds => final_format,
        _ => &category.default_match_format,
    }
}

/// Validate a score such as `"6-4, 3-6, 10-8"` against `format` and return the winning side.
///
/// Sets are separated by commas and/or whitespace, games by `-`, team one first.
pub fn parse_score(
    score: &str,
    format: &MatchFormatConfiguration,
) -> Result<MatchSide, TournamentError> {
    if format.sets_to_win == 0 {
        return Err(TournamentError::InvalidScore(
            "format does not require any sets".into(),
        ));
    }

    let sets = score
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(parse_set)
        .collect::<Result<Vec<_>, _>>()?;
    if sets.is_empty() {
        return Err(TournamentError::InvalidScore("score is empty".into()));
    }

    let to_win = format.sets_to_win;
    let (mut won_1, mut won_2) = (0, 0);
    for (index, &(games_1, games_2)) in sets.iter().enumerate() {
        if won_1 == to_win || won_2 == to_win {
            return Err(TournamentError::InvalidScore(format!(
                "set {} played after the match was decided",
                index + 1
            )));
        }
        let deciding = to_win > 1 && won_1 == to_win - 1 && won_2 == to_win - 1;
        let winner = if deciding && format.final_set_type == FinalSetType::SuperTiebreak {
            super_tiebreak_winner(games_1, games_2)
        } else {
            set_winner(games_1, games_2, format.set_type)
        };
        match winner {
            Some(MatchSide::One) => won_1 += 1,
            Some(MatchSide::Two) => won_2 += 1,
            None => {
                return Err(TournamentError::InvalidScore(format!(
                    "{}-{} is not a valid {}",
                    games_1,
                    games_2,
                    if deciding && format.final_set_type == FinalSetType::SuperTiebreak {
                        "super tiebreak"
                    } else {
                        "set"
                    }
                )))
            }
        }
    }

    if won_1 == to_win {
        Ok(MatchSide::One)
    } else if won_2 == to_win {
        Ok(MatchSide::Two)
    } else {
        Err(TournamentError::InvalidScore("match is not finished".into()))
    }
}

fn parse_set(set: &str) -> Result<(u32, u32), TournamentError> {
    let invalid = || TournamentError::InvalidScore(format!("cannot read set {:?}", set));
    let (games_1, games_2) = set.split_once('-').ok_or_else(invalid)?;
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_number(games_1) || !is_number(games_2) {
        return Err(invalid());
    }
    let games_1 = games_1.parse().map_err(|_| invalid())?;
    let games_2 = games_2.parse().map_err(|_| invalid())?;
    Ok((games_1, games_2))
}

fn set_winner(games_1: u32, games_2: u32, set_type: SetType) -> Option<MatchSide> {
    let target = set_type.games();
    let (high, low) = (games_1.max(games_2), games_1.min(games_2));
    let valid = (high == target && low + 2 <= target)
        || (high == target + 1 && (low == target - 1 || low == target));
    valid.then(|| side_of(games_1, games_2))
}

fn super_tiebreak_winner(points_1: u32, points_2: u32) -> Option<MatchSide> {
    let (high, low) = (points_1.max(points_2), points_1.min(points_2));
    let valid = high >= SUPER_TIEBREAK_POINTS
        && high - low >= 2
        && (high == SUPER_TIEBREAK_POINTS || high - low == 2);
    valid.then(|| side_of(points_1, points_2))
}

fn side_of(a: u32, b: u32) -> MatchSide {
    if a > b {
        MatchSide::One
    } else {
        MatchSide::Two
    }
}
