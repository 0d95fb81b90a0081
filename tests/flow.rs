//! Integration tests for the tournament flows: drawing categories, recording scores, rosters.

use chrono::NaiveDate;
use padel_tournament_web::{
    import_roster, parse_roster_csv, record_match_score, start_category, CategoryId, FinalSetType,
    MatchFormatConfiguration, PointSystem, SetType, Tournament, TournamentError,
    TournamentStatus,
};

fn final_format() -> MatchFormatConfiguration {
    MatchFormatConfiguration {
        sets_to_win: 2,
        set_type: SetType::Standard,
        final_set_type: FinalSetType::SuperTiebreak,
        point_system: PointSystem::Advantage,
    }
}

/// Approved tournament with one category of `max_teams` holding `teams` confirmed teams.
fn tournament_with_teams(max_teams: u32, teams: usize) -> (Tournament, CategoryId) {
    let day = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
    let mut t = Tournament::new("Summer Open", day, day).unwrap();
    t.approve().unwrap();
    let category_id = t
        .add_category(
            "Men's P100",
            max_teams,
            MatchFormatConfiguration::default(),
            Some(final_format()),
        )
        .unwrap();
    let category = t.category_mut(category_id).unwrap();
    for i in 0..teams {
        category
            .add_team(
                format!("Team {i}"),
                format!("player-{i}-a"),
                format!("player-{i}-b"),
                5.0 - i as f64 * 0.25,
            )
            .unwrap();
    }
    (t, category_id)
}

#[test]
fn full_category_plays_to_completion() {
    let (mut t, category_id) = tournament_with_teams(4, 4);
    start_category(&mut t, category_id, 2, false).unwrap();
    assert_eq!(t.status, TournamentStatus::InProgress);

    let category = t.category(category_id).unwrap();
    assert_eq!(category.bracket.len(), 3);
    assert!(category.bracket.iter().all(|m| !m.is_bye()));

    let winner_1 = record_match_score(&mut t, category_id, 1, "6-4 6-3").unwrap();
    let winner_2 = record_match_score(&mut t, category_id, 2, "3-6 6-4 4-6").unwrap();

    let category = t.category(category_id).unwrap();
    let semi_1 = category.get_match(1).unwrap();
    assert_eq!(semi_1.winner_team_id, semi_1.team_1_id);
    assert_eq!(semi_1.score.as_deref(), Some("6-4 6-3"));
    let semi_2 = category.get_match(2).unwrap();
    assert_eq!(semi_2.winner_team_id, semi_2.team_2_id);

    let final_match = category.get_match(3).unwrap();
    assert_eq!(final_match.team_1_id, Some(winner_1));
    assert_eq!(final_match.team_2_id, Some(winner_2));
    assert_eq!(t.status, TournamentStatus::InProgress);

    // Final is played under the super tiebreak format.
    assert!(matches!(
        record_match_score(&mut t, category_id, 3, "6-4 4-6 6-3"),
        Err(TournamentError::InvalidScore(_))
    ));
    let champion = record_match_score(&mut t, category_id, 3, "6-4 4-6 8-10").unwrap();
    assert_eq!(champion, winner_2);
    assert_eq!(t.category(category_id).unwrap().champion(), Some(winner_2));
    assert_eq!(t.status, TournamentStatus::Completed);
}

#[test]
fn results_are_recorded_once() {
    let (mut t, category_id) = tournament_with_teams(4, 4);
    start_category(&mut t, category_id, 0, false).unwrap();

    assert_eq!(
        record_match_score(&mut t, category_id, 3, "6-4 6-4"),
        Err(TournamentError::MatchNotReady(3))
    );
    record_match_score(&mut t, category_id, 1, "6-4 6-4").unwrap();
    assert_eq!(
        record_match_score(&mut t, category_id, 1, "6-0 6-0"),
        Err(TournamentError::MatchAlreadyDecided(1))
    );
    assert_eq!(
        record_match_score(&mut t, category_id, 9, "6-0 6-0"),
        Err(TournamentError::MatchNotFound(9))
    );
}

#[test]
fn bye_matches_cannot_be_scored() {
    let (mut t, category_id) = tournament_with_teams(8, 5);
    start_category(&mut t, category_id, 2, true).unwrap();

    let category = t.category(category_id).unwrap();
    let bye = category.bracket.iter().find(|m| m.is_bye()).unwrap().id;
    assert_eq!(
        record_match_score(&mut t, category_id, bye, "6-0 6-0"),
        Err(TournamentError::MatchAlreadyDecided(bye))
    );
}

#[test]
fn start_requires_full_category_unless_forced() {
    let (mut t, category_id) = tournament_with_teams(8, 5);
    assert_eq!(
        start_category(&mut t, category_id, 2, false),
        Err(TournamentError::NotEnoughTeams {
            confirmed: 5,
            required: 8
        })
    );
    assert_eq!(t.status, TournamentStatus::Planned);

    start_category(&mut t, category_id, 2, true).unwrap();
    let category = t.category(category_id).unwrap();
    assert!(category.started);
    assert_eq!(category.bracket.len(), 7);
    assert_eq!(category.bracket.iter().filter(|m| m.is_bye()).count(), 3);

    assert_eq!(
        start_category(&mut t, category_id, 2, true),
        Err(TournamentError::InvalidState)
    );
}

#[test]
fn seed_count_is_validated() {
    let (mut t, category_id) = tournament_with_teams(6, 6);
    for num_seeds in [1, 3, 4, 5] {
        assert_eq!(
            start_category(&mut t, category_id, num_seeds, false),
            Err(TournamentError::InvalidSeedCount {
                requested: num_seeds,
                confirmed: 6
            })
        );
    }
    start_category(&mut t, category_id, 2, false).unwrap();
}

#[test]
fn single_team_cannot_be_drawn() {
    let (mut t, category_id) = tournament_with_teams(4, 1);
    assert_eq!(
        start_category(&mut t, category_id, 0, true),
        Err(TournamentError::NotEnoughTeams {
            confirmed: 1,
            required: 2
        })
    );
}

#[test]
fn lifecycle_guards() {
    let day = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
    assert_eq!(
        Tournament::new("Backwards", day, day.pred_opt().unwrap()),
        Err(TournamentError::InvalidDates)
    );

    let mut pending = Tournament::new("Pending", day, day).unwrap();
    let category_id = pending
        .add_category("Open", 4, MatchFormatConfiguration::default(), None)
        .unwrap();
    assert_eq!(
        start_category(&mut pending, category_id, 0, true),
        Err(TournamentError::InvalidState)
    );

    let (mut t, category_id) = tournament_with_teams(4, 4);
    assert_eq!(
        record_match_score(&mut t, category_id, 1, "6-0 6-0"),
        Err(TournamentError::InvalidState)
    );
    start_category(&mut t, category_id, 2, false).unwrap();
    assert_eq!(
        t.add_category("Late", 4, MatchFormatConfiguration::default(), None),
        Err(TournamentError::InvalidState)
    );
    t.cancel().unwrap();
    assert_eq!(t.cancel(), Err(TournamentError::InvalidState));

    let mut fresh = Tournament::new("Fresh", day, day).unwrap();
    for max_teams in [0, 1] {
        assert_eq!(
            fresh.add_category("Tiny", max_teams, MatchFormatConfiguration::default(), None),
            Err(TournamentError::InvalidCapacity { max_teams })
        );
    }
    assert!(fresh.categories.is_empty());
}

#[test]
fn team_registration_rules() {
    let (mut t, category_id) = tournament_with_teams(3, 2);
    let category = t.category_mut(category_id).unwrap();

    assert_eq!(
        category.add_team("team 0", "x", "y", 3.0),
        Err(TournamentError::DuplicateTeamName)
    );
    assert!(matches!(
        category.add_team("Solo", "x", "x", 3.0),
        Err(TournamentError::InvalidTeam(_))
    ));
    assert!(matches!(
        category.add_team("  ", "x", "y", 3.0),
        Err(TournamentError::InvalidTeam(_))
    ));
    assert!(matches!(
        category.add_team("NaN", "x", "y", f64::NAN),
        Err(TournamentError::InvalidTeam(_))
    ));
    assert_eq!(category.add_team("Third", "x", "y", 3.0), Ok(3));
    assert_eq!(
        category.add_team("Fourth", "z", "w", 3.0),
        Err(TournamentError::CategoryFull { max_teams: 3 })
    );

    start_category(&mut t, category_id, 0, false).unwrap();
    let category = t.category_mut(category_id).unwrap();
    assert_eq!(
        category.add_team("Latecomer", "q", "r", 1.0),
        Err(TournamentError::InvalidState)
    );
}

#[test]
fn roster_import_adds_teams() {
    let (mut t, category_id) = tournament_with_teams(8, 0);
    let csv = "name,player_1,player_2,level\n\
               Smash Bros, ana, bea, 4.5\n\
               Net Gains, carl, dani, 3.75\n";
    let category = t.category_mut(category_id).unwrap();
    let ids = import_roster(category, csv.as_bytes()).unwrap();

    assert_eq!(ids, vec![1, 2]);
    let team = category.team(2).unwrap();
    assert_eq!(team.name, "Net Gains");
    assert!(team.has_player("dani"));
    assert_eq!(team.level, 3.75);
}

#[test]
fn roster_import_is_all_or_nothing() {
    let (mut t, category_id) = tournament_with_teams(8, 1);
    let category = t.category_mut(category_id).unwrap();

    let duplicate = "name,player_1,player_2,level\nNew, a, b, 3\nTeam 0, c, d, 2\n";
    let err = import_roster(category, duplicate.as_bytes()).unwrap_err();
    assert!(matches!(&err, TournamentError::Roster(msg) if msg.starts_with("line 3")));
    assert_eq!(category.teams.len(), 1);

    let missing_player = "name,player_1,player_2,level\nNew, a, , 3\n";
    assert!(matches!(
        import_roster(category, missing_player.as_bytes()),
        Err(TournamentError::Roster(_))
    ));

    let bad_level = "name,player_1,player_2,level\nNew, a, b, high\n";
    assert!(matches!(
        import_roster(category, bad_level.as_bytes()),
        Err(TournamentError::Roster(_))
    ));
    assert_eq!(category.teams.len(), 1);
}

#[test]
fn roster_errors_name_the_physical_line() {
    let (mut t, category_id) = tournament_with_teams(8, 0);
    let category = t.category_mut(category_id).unwrap();

    let gap_then_missing = "name,player_1,player_2,level\nA, a, b, 3\n\nB, c, d, 2\nC, e, , 1\n";
    let err = parse_roster_csv(gap_then_missing.as_bytes()).unwrap_err();
    assert!(
        matches!(&err, TournamentError::Roster(msg) if msg.starts_with("line 5")),
        "{err}"
    );

    let quoted_name = "name,player_1,player_2,level\n\"Long\nName\", a, b, 3\nNext, c, d, 2\n";
    let rows = parse_roster_csv(quoted_name.as_bytes()).unwrap();
    assert_eq!(rows.iter().map(|r| r.line).collect::<Vec<_>>(), vec![2, 4]);

    let gap_then_duplicate = "name,player_1,player_2,level\nA, a, b, 3\n\n\na, c, d, 2\n";
    let err = import_roster(category, gap_then_duplicate.as_bytes()).unwrap_err();
    assert!(
        matches!(&err, TournamentError::Roster(msg) if msg.starts_with("line 5")),
        "{err}"
    );
    assert!(category.teams.is_empty());
}
