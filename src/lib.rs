//! MovieLeague Library
//!
//! A fantasy box-office league: users draft movies onto teams within
//! divisions and seasons, and each team is worth the latest box-office
//! gross of the movies it drafted.
//!
//! ## Features
//!
//! - **League Records**: Leagues, seasons, divisions, teams and movie slates in SQLite
//! - **Point-in-time Valuation**: A movie's value on any date from its gross updates
//! - **Standings**: Division tables ranked by value and cost, with promotion/relegation zones
//! - **Gross Ingestion**: Manual entry, JSON import, or fetch from an HTTP feed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use movie_league::storage::{LeagueDatabase, NewDivision, NewGrossUpdate};
//!
//! # fn example() -> movie_league::Result<()> {
//! let mut db = LeagueDatabase::new_in_memory()?;
//! let owner = db.create_user("alice")?;
//! let league = db.create_league("Summer League", owner.id, None, None)?;
//! let start = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2013, 12, 31).unwrap();
//! let season = db.create_season(league.id, None, start, end)?;
//! let division = db.create_division(&NewDivision::new(season.id, "Premier"))?;
//! let team = db.create_team(owner.id, division.id)?;
//!
//! let release = NaiveDate::from_ymd_opt(2013, 7, 1).unwrap();
//! let movie = db.create_movie("Test Movie", release)?;
//! db.add_movie_to_season(season.id, movie.id)?;
//! db.draft_movie(team.id, movie.id, 15)?;
//! db.add_gross_update(&NewGrossUpdate {
//!     movie_id: movie.id,
//!     date: NaiveDate::from_ymd_opt(2013, 7, 3).unwrap(),
//!     gross: 2500,
//!     source: "manual".to_string(),
//! })?;
//!
//! assert_eq!(db.team_value(team.id)?, 2500);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MOVIE_LEAGUE_DB=~/leagues/summer.db
//! export MOVIE_LEAGUE_FEED_URL=https://feed.example.com/grosses
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DateRange, DivisionId, LeagueId, MovieId, SeasonId, TeamId, UserId};
pub use error::{LeagueError, Result};
pub use league::types::{Standing, TeamValuation, Zone};
