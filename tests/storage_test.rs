//! Integration tests for the storage layer

use chrono::NaiveDate;
use movie_league::{
    storage::*, DateRange, LeagueError, MovieId, TeamId, Zone,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn create_test_db() -> LeagueDatabase {
    LeagueDatabase::new_in_memory().unwrap()
}

fn record(db: &mut LeagueDatabase, movie_id: MovieId, date: NaiveDate, gross: i64) {
    db.add_gross_update(&NewGrossUpdate {
        movie_id,
        date,
        gross,
        source: DEFAULT_GROSS_SOURCE.to_string(),
    })
    .unwrap();
}

#[test]
fn test_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.db");

    {
        let mut db = LeagueDatabase::open(&path).unwrap();
        let movie = db.create_movie("Persisted", d(2013, 7, 1)).unwrap();
        record(&mut db, movie.id, d(2013, 7, 2), 1000);
    }

    let db = LeagueDatabase::open(&path).unwrap();
    let movies = db.list_movies().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(db.movie_value(movies[0].id, None).unwrap(), 1000);
}

#[test]
fn test_foreign_keys_are_enforced() {
    let mut db = create_test_db();
    let user = db.create_user("test").unwrap();
    let result = db.create_team(user.id, movie_league::DivisionId::new(7));
    assert!(matches!(
        result,
        Err(LeagueError::NotFound {
            entity: "Division",
            id: 7
        })
    ));
}

#[test]
fn test_full_season_lifecycle() {
    let mut db = create_test_db();
    let commissioner = db.create_user("commish").unwrap();
    let league = db
        .create_league("Box Office League", commissioner.id, Some("short"), Some("long"))
        .unwrap();
    let season = db
        .create_season(league.id, Some("Summer"), d(2013, 5, 1), d(2013, 9, 1))
        .unwrap();

    let mut new_division = NewDivision::new(season.id, "Premier");
    new_division.currency_unit = "£".to_string();
    new_division.max_currency = Some(200);
    new_division.promotion_count = 1;
    new_division.relegation_count = 1;
    let division = db.create_division(&new_division).unwrap();

    let names = ["ann", "ben", "cat", "dan"];
    let mut teams = Vec::new();
    for name in names {
        let user = db.create_user(name).unwrap();
        db.add_league_player(league.id, user.id).unwrap();
        teams.push(db.create_team(user.id, division.id).unwrap());
    }

    let grosses = [9000, 3000, 6000, 1000];
    for (i, (team, gross)) in teams.iter().zip(grosses).enumerate() {
        let movie = db
            .create_movie(&format!("Movie {}", i), d(2013, 6, 1 + i as u32))
            .unwrap();
        db.add_movie_to_season(season.id, movie.id).unwrap();
        db.draft_movie(team.id, movie.id, 50).unwrap();
        record(&mut db, movie.id, d(2013, 7, 1), gross);
    }

    let table = db.division_standings(division.id, None).unwrap();
    let owners: Vec<&str> = table.standings.iter().map(|s| s.owner.as_str()).collect();
    assert_eq!(owners, vec!["ann", "cat", "ben", "dan"]);
    assert_eq!(table.standings[0].zone, Zone::Promoted);
    assert_eq!(table.standings[3].zone, Zone::Relegated);
    assert_eq!(table.division.currency_unit, "£");

    assert_eq!(db.league_players(league.id).unwrap().len(), 4);
    assert_eq!(db.season_movies(season.id).unwrap().len(), 4);
}

#[test]
fn test_team_value_history_tracks_updates() {
    let mut db = create_test_db();
    let user = db.create_user("test").unwrap();
    let league = db.create_league("L", user.id, None, None).unwrap();
    let season = db
        .create_season(league.id, None, d(2013, 1, 1), d(2014, 1, 1))
        .unwrap();
    let division = db
        .create_division(&NewDivision::new(season.id, "Only"))
        .unwrap();
    let team = db.create_team(user.id, division.id).unwrap();
    let movie = db.create_movie("Test Movie", d(2013, 7, 1)).unwrap();
    db.add_movie_to_season(season.id, movie.id).unwrap();
    db.draft_movie(team.id, movie.id, 10).unwrap();

    record(&mut db, movie.id, d(2013, 7, 2), 1000);
    record(&mut db, movie.id, d(2013, 7, 4), 3000);

    let range = DateRange::new(d(2013, 7, 1), d(2013, 7, 5)).unwrap();
    let values: Vec<i64> = db
        .team_value_history(team.id, range)
        .unwrap()
        .into_iter()
        .map(|p| p.value)
        .collect();
    assert_eq!(values, vec![0, 1000, 1000, 3000, 3000]);
}

#[test]
fn test_missing_team_history() {
    let db = create_test_db();
    let range = DateRange::new(d(2013, 7, 1), d(2013, 7, 5)).unwrap();
    assert!(db.team_value_history(TeamId::new(1), range).is_err());
}
