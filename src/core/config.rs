//! Runtime configuration resolved from flags and environment variables.

use std::path::{Path, PathBuf};

use crate::{error::LeagueError, Result};

/// Overrides the database location.
pub const DB_PATH_ENV_VAR: &str = "MOVIE_LEAGUE_DB";

/// Base URL of the box-office gross feed.
pub const FEED_URL_ENV_VAR: &str = "MOVIE_LEAGUE_FEED_URL";

/// Default database location: `<data dir>/movie-league/league.db`.
pub fn default_database_path() -> Option<PathBuf> {
    let base = dirs::data_dir().or_else(|| {
        dirs::home_dir().map(|mut home| {
            home.push(".local");
            home.push("share");
            home
        })
    })?;
    Some(base.join("movie-league").join("league.db"))
}

/// Resolve the database path from the flag, then `MOVIE_LEAGUE_DB`, then the default.
pub fn resolve_database_path(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_database_path().ok_or_else(|| LeagueError::MissingDatabasePath {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })
}

/// Resolve the feed base URL from the flag or `MOVIE_LEAGUE_FEED_URL`.
pub fn resolve_feed_url(flag: Option<String>) -> Result<String> {
    flag.or_else(|| std::env::var(FEED_URL_ENV_VAR).ok())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| LeagueError::MissingFeedUrl {
            env_var: FEED_URL_ENV_VAR.to_string(),
        })
}
