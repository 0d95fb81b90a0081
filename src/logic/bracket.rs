//! Bracket generation: seeding, slot placement, round linkage, and bye resolution.

use crate::models::{BracketMatch, MatchId, Team, TeamId, BYE_SCORE};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Slot order for an 8-team draw: slot `i` holds rank `SEED_ORDER_8[i]`.
const SEED_ORDER_8: [u32; 8] = [1, 8, 5, 4, 3, 6, 7, 2];

const SEED_ORDER_16: [u32; 16] = [1, 16, 9, 8, 5, 12, 13, 4, 3, 14, 11, 6, 7, 10, 15, 2];

const SEED_ORDER_32: [u32; 32] = [
    1, 32, 17, 16, 9, 24, 25, 8, 5, 28, 21, 12, 13, 20, 29, 4, 3, 30, 19, 14, 11, 22, 27, 6, 7,
    26, 23, 10, 15, 18, 31, 2,
];

/// Output of [`generate_bracket`]: the roster with seeds filled in and the full match tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBracket {
    /// Teams ordered by rank (descending level).
    pub teams: Vec<Team>,
    /// Matches ordered by round, then position. Match ids start at 1.
    pub bracket: Vec<BracketMatch>,
}

/// Slot order (rank per slot) for a draw of `bracket_size` slots.
///
/// Every layout pairs rank `r` with rank `bracket_size + 1 - r` in round 1, so the open slots
/// of a short roster always face the best-ranked teams. Sizes without a table fall back to
/// natural order: ranks ascend through the first slot of consecutive matches.
pub fn seed_order(bracket_size: usize) -> Vec<u32> {
    match bracket_size {
        8 => SEED_ORDER_8.to_vec(),
        16 => SEED_ORDER_16.to_vec(),
        32 => SEED_ORDER_32.to_vec(),
        _ => natural_order(bracket_size),
    }
}

fn natural_order(bracket_size: usize) -> Vec<u32> {
    if bracket_size < 2 {
        return vec![1; bracket_size];
    }
    let size = bracket_size as u32;
    (1..=size / 2).flat_map(|rank| [rank, size + 1 - rank]).collect()
}

/// Generate a seeded single-elimination bracket using the thread-local RNG for the draw.
pub fn generate_bracket(confirmed_teams: &[Team], num_seeds: usize) -> GeneratedBracket {
    generate_bracket_with_rng(confirmed_teams, num_seeds, &mut rand::thread_rng())
}

/// Generate a seeded single-elimination bracket.
///
/// 1. Rank teams by descending level (ties keep roster order); the top `num_seeds` get a seed.
/// 2. Shuffle the unseeded rest with `rng`.
/// 3. Place ranks by [`seed_order`]; slots of ranks past the roster stay empty.
/// 4. Pair adjacent slots into round 1, then halve each round down to the final.
/// 5. Resolve every round-1 match holding a single team as a bye and advance that team.
///
/// `num_seeds` is clamped to the roster size. The input slice is not modified.
pub fn generate_bracket_with_rng<R>(
    confirmed_teams: &[Team],
    num_seeds: usize,
    rng: &mut R,
) -> GeneratedBracket
where
    R: Rng + ?Sized,
{
    let num_teams = confirmed_teams.len();
    if num_teams == 0 {
        log::debug!("No confirmed teams, nothing to draw");
        return GeneratedBracket::default();
    }
    let num_seeds = num_seeds.min(num_teams);

    let mut teams = confirmed_teams.to_vec();
    teams.sort_by(|a, b| b.level.total_cmp(&a.level));
    for (rank, team) in teams.iter_mut().enumerate() {
        team.seed = (rank < num_seeds).then_some(rank as u32 + 1);
    }

    let mut unseeded: Vec<TeamId> = teams[num_seeds..].iter().map(|t| t.id).collect();
    unseeded.shuffle(rng);

    if num_teams == 1 {
        log::debug!("Single team {}: no matches to play", teams[0].id);
        return GeneratedBracket {
            teams,
            bracket: Vec::new(),
        };
    }

    let bracket_size = num_teams.next_power_of_two();
    let num_byes = bracket_size - num_teams;
    log::debug!(
        "Drawing {} teams ({} seeded) into a bracket of {} with {} byes",
        num_teams,
        num_seeds,
        bracket_size,
        num_byes
    );

    let mut slots: Vec<Option<TeamId>> = vec![None; bracket_size];
    let mut open_slots = Vec::with_capacity(unseeded.len());
    for (slot, &rank) in seed_order(bracket_size).iter().enumerate() {
        let rank = rank as usize;
        if rank <= num_seeds {
            slots[slot] = Some(teams[rank - 1].id);
        } else if rank <= num_teams {
            open_slots.push(slot);
        }
    }
    for (slot, team) in open_slots.into_iter().zip(unseeded) {
        slots[slot] = Some(team);
    }

    let mut bracket = build_rounds(&slots);

    let byes: Vec<(MatchId, TeamId)> = bracket
        .iter()
        .filter(|m| m.round == 1)
        .filter_map(|m| m.lone_team().map(|team| (m.id, team)))
        .collect();
    for &(match_id, team) in &byes {
        if let Some(m) = bracket.iter_mut().find(|m| m.id == match_id) {
            m.winner_team_id = Some(team);
            m.score = Some(BYE_SCORE.to_string());
        }
        advance_winner(&mut bracket, match_id);
    }
    log::debug!("Resolved {} byes", byes.len());

    GeneratedBracket { teams, bracket }
}

/// Build round 1 from adjacent slot pairs and link every following round down to the final.
fn build_rounds(slots: &[Option<TeamId>]) -> Vec<BracketMatch> {
    let first_round = slots.len() / 2;
    let mut bracket = Vec::with_capacity(slots.len().saturating_sub(1));

    let mut next_id: MatchId = 1;
    for (index, pair) in slots.chunks_exact(2).enumerate() {
        let mut m = BracketMatch::new(next_id, 1, index as u32 + 1);
        m.team_1_id = pair[0];
        m.team_2_id = pair[1];
        bracket.push(m);
        next_id += 1;
    }

    let mut round = 1;
    let mut round_start = 0;
    let mut round_len = first_round;
    while round_len > 1 {
        round += 1;
        let next_start = bracket.len();
        for position in 0..round_len / 2 {
            let feeder = round_start + 2 * position;
            bracket[feeder].next_match_id = Some(next_id);
            bracket[feeder + 1].next_match_id = Some(next_id);
            bracket.push(BracketMatch::new(next_id, round, position as u32 + 1));
            next_id += 1;
        }
        round_start = next_start;
        round_len /= 2;
    }

    bracket
}

/// Move the winner of `match_id` into its slot of the following match.
///
/// Returns the id of the match that received the winner, or `None` when the match is unknown,
/// undecided, or the final.
pub fn advance_winner(bracket: &mut [BracketMatch], match_id: MatchId) -> Option<MatchId> {
    let current = bracket.iter().find(|m| m.id == match_id)?;
    let winner = current.winner_team_id?;
    let next_id = current.next_match_id?;
    let side = current.next_side();

    let next = bracket.iter_mut().find(|m| m.id == next_id)?;
    next.set_team(side, Some(winner));
    Some(next_id)
}

/// Number of rounds in a bracket drawn for `num_teams` teams.
pub fn round_count(num_teams: usize) -> u32 {
    match num_teams {
        0 | 1 => 0,
        n => n.next_power_of_two().trailing_zeros(),
    }
}
