//! Integration tests for valuation and ranking

use chrono::NaiveDate;
use movie_league::{
    league::compute::{
        latest_value, rank_teams, team_cost, team_value, value_on_date, GrossIndex,
    },
    storage::{MovieGrossUpdate, MovieMembership},
    MovieId, TeamId, TeamValuation, Zone,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn update(id: i64, date: NaiveDate, gross: i64, source: &str) -> MovieGrossUpdate {
    MovieGrossUpdate {
        id,
        movie_id: MovieId::new(1),
        date,
        gross,
        source: source.to_string(),
    }
}

#[test]
fn test_value_before_release_is_zero() {
    let updates = vec![update(1, d(2013, 7, 5), 500, "a")];
    assert_eq!(value_on_date(&updates, d(2013, 7, 4), None), 0);
    assert_eq!(value_on_date(&updates, d(2013, 7, 5), None), 500);
}

#[test]
fn test_sources_are_independent() {
    let updates = vec![
        update(1, d(2013, 7, 2), 1000, "a"),
        update(2, d(2013, 7, 3), 1100, "b"),
        update(3, d(2013, 7, 4), 1300, "a"),
    ];
    assert_eq!(latest_value(&updates, Some("a")), 1300);
    assert_eq!(latest_value(&updates, Some("b")), 1100);
    assert_eq!(value_on_date(&updates, d(2013, 7, 3), Some("a")), 1000);
    assert_eq!(value_on_date(&updates, d(2013, 7, 3), None), 1100);
    assert_eq!(latest_value(&updates, Some("c")), 0);
}

#[test]
fn test_team_without_grosses_is_worth_nothing() {
    let memberships = vec![MovieMembership {
        id: 1,
        movie_id: MovieId::new(5),
        team_id: TeamId::new(1),
        price: 20,
    }];
    assert_eq!(team_cost(&memberships), 20);
    assert_eq!(team_value(&memberships, &GrossIndex::new()), 0);
}

#[test]
fn test_rank_teams_assigns_ranks_and_zones() {
    let valuations = (1..=6)
        .map(|i| TeamValuation {
            team_id: TeamId::new(i),
            owner: format!("team{}", i),
            cost: 10,
            value: i * 100,
        })
        .collect();

    let standings = rank_teams(valuations, 2, 2);
    assert_eq!(standings.len(), 6);
    assert_eq!(standings[0].team_id, TeamId::new(6));
    assert_eq!(standings[5].team_id, TeamId::new(1));

    let promoted = standings.iter().filter(|s| s.zone == Zone::Promoted).count();
    let relegated = standings.iter().filter(|s| s.zone == Zone::Relegated).count();
    assert_eq!(promoted, 2);
    assert_eq!(relegated, 2);
    assert_eq!(standings[4].zone, Zone::Relegated);
    assert_eq!(standings[3].zone, Zone::Safe);
}
