//! Error types for the MovieLeague CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("Username already taken: {username}")]
    DuplicateUsername { username: String },

    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Movie {movie_id} is not on the slate for season {season_id}")]
    MovieNotInSeason { movie_id: i64, season_id: i64 },

    #[error("Movie {movie_id} is already drafted by team {team_id}")]
    AlreadyDrafted { movie_id: i64, team_id: i64 },

    #[error("Team {team_id} would spend {total} but the division cap is {cap}")]
    BudgetExceeded { team_id: i64, total: i64, cap: i64 },

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: i64 },

    #[error("Could not determine a database path; pass --db or set {env_var}")]
    MissingDatabasePath { env_var: String },

    #[error("Feed base URL not provided and {env_var} environment variable not set")]
    MissingFeedUrl { env_var: String },

    #[error("{field} total overflows a 64-bit amount")]
    AmountOverflow { field: &'static str },
}
