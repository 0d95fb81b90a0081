//! Current / upcoming / past classification for tournament lists.

use crate::models::{Tournament, TournamentPhase, TournamentStatus};
use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Date-only classification, ignoring the lifecycle status.
///
/// Past once the end date is over, upcoming while the start date lies ahead, current otherwise.
/// Kept for callers that predate [`classify_tournament`].
pub fn tournament_status_by_dates(tournament: &Tournament, now: NaiveDateTime) -> TournamentPhase {
    // end_of_day(end_date) < start_of_today  <=>  end_date < today
    if tournament.end_date < now.date() {
        TournamentPhase::Past
    } else if tournament.start_date.and_time(NaiveTime::MIN) > now {
        TournamentPhase::Upcoming
    } else {
        TournamentPhase::Current
    }
}

/// Canonical classification: lifecycle status first, dates for everything still scheduled.
///
/// Completed and canceled tournaments are past, a tournament in progress is current no matter
/// its dates.
pub fn classify_tournament(tournament: &Tournament, now: NaiveDateTime) -> TournamentPhase {
    match tournament.status {
        TournamentStatus::Completed | TournamentStatus::Canceled => TournamentPhase::Past,
        TournamentStatus::InProgress => TournamentPhase::Current,
        TournamentStatus::PendingApproval | TournamentStatus::Planned => {
            tournament_status_by_dates(tournament, now)
        }
    }
}

/// [`classify_tournament`] against the local clock.
pub fn tournament_phase(tournament: &Tournament) -> TournamentPhase {
    classify_tournament(tournament, Local::now().naive_local())
}

/// Tournaments bucketed for the list tabs.
#[derive(Debug, Default, Serialize)]
pub struct PhaseGroups<'a> {
    pub current: Vec<&'a Tournament>,
    pub upcoming: Vec<&'a Tournament>,
    pub past: Vec<&'a Tournament>,
}

/// Bucket tournaments by [`classify_tournament`].
///
/// Current and upcoming are sorted by start date (soonest first), past by end date (latest first).
pub fn group_by_phase<'a, I>(tournaments: I, now: NaiveDateTime) -> PhaseGroups<'a>
where
    I: IntoIterator<Item = &'a Tournament>,
{
    let mut groups = PhaseGroups::default();
    for t in tournaments {
        match classify_tournament(t, now) {
            TournamentPhase::Current => groups.current.push(t),
            TournamentPhase::Upcoming => groups.upcoming.push(t),
            TournamentPhase::Past => groups.past.push(t),
        }
    }
    groups.current.sort_by_key(|t| t.start_date);
    groups.upcoming.sort_by_key(|t| t.start_date);
    groups.past.sort_by(|a, b| b.end_date.cmp(&a.end_date));
    groups
}
