//! Database schema and connection management

use crate::{core::cache::GrossCache, core::config::default_database_path, error::LeagueError, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, warn};

/// Database connection manager for league data
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
    pub(crate) gross_cache: GrossCache,
}

impl LeagueDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = default_database_path().ok_or_else(|| LeagueError::MissingDatabasePath {
            env_var: crate::core::config::DB_PATH_ENV_VAR.to_string(),
        })?;
        Self::open(&db_path)
    }

    /// Open (creating if needed) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening league database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Fresh in-memory database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self {
            conn,
            gross_cache: GrossCache::default(),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Run `f` in one transaction.
    ///
    /// An error from `f` or from the commit rolls everything back and drops
    /// cached gross series, which may hold rows that were never committed.
    pub fn in_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        let outcome = f(self).and_then(|value| {
            self.conn.execute_batch("COMMIT")?;
            Ok(value)
        });

        if outcome.is_err() {
            if let Err(e) = self.conn.execute_batch("ROLLBACK") {
                warn!(error = %e, "rollback failed");
            }
            self.gross_cache.clear();
        }
        outcome
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                username TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS leagues (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                commissioner_id INTEGER NOT NULL REFERENCES users(id),
                short_description TEXT,
                long_description TEXT
            );

            CREATE TABLE IF NOT EXISTS league_players (
                league_id INTEGER NOT NULL REFERENCES leagues(id),
                user_id INTEGER NOT NULL REFERENCES users(id),
                PRIMARY KEY (league_id, user_id)
            );

            CREATE TABLE IF NOT EXISTS seasons (
                id INTEGER PRIMARY KEY,
                league_id INTEGER NOT NULL REFERENCES leagues(id),
                name TEXT,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                CHECK (start_date <= end_date)
            );

            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                release_date TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS season_movies (
                season_id INTEGER NOT NULL REFERENCES seasons(id),
                movie_id INTEGER NOT NULL REFERENCES movies(id),
                PRIMARY KEY (season_id, movie_id)
            );

            CREATE TABLE IF NOT EXISTS divisions (
                id INTEGER PRIMARY KEY,
                season_id INTEGER NOT NULL REFERENCES seasons(id),
                name TEXT NOT NULL,
                sort_order INTEGER NOT NULL DEFAULT 0,
                currency_unit TEXT NOT NULL DEFAULT '$',
                max_currency INTEGER,
                promotion_count INTEGER NOT NULL DEFAULT 0,
                relegation_count INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY,
                owner_id INTEGER NOT NULL REFERENCES users(id),
                division_id INTEGER NOT NULL REFERENCES divisions(id),
                UNIQUE (owner_id, division_id)
            );

            CREATE TABLE IF NOT EXISTS movie_gross_updates (
                id INTEGER PRIMARY KEY,
                movie_id INTEGER NOT NULL REFERENCES movies(id),
                date TEXT NOT NULL,
                gross INTEGER NOT NULL CHECK (gross >= 0),
                source TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS movie_external_ids (
                id INTEGER PRIMARY KEY,
                movie_id INTEGER NOT NULL REFERENCES movies(id),
                source TEXT NOT NULL,
                identifier TEXT NOT NULL,
                UNIQUE (movie_id, source)
            );

            CREATE TABLE IF NOT EXISTS movie_memberships (
                id INTEGER PRIMARY KEY,
                movie_id INTEGER NOT NULL REFERENCES movies(id),
                team_id INTEGER NOT NULL REFERENCES teams(id),
                price INTEGER NOT NULL CHECK (price >= 0),
                UNIQUE (team_id, movie_id)
            );

            CREATE INDEX IF NOT EXISTS idx_gross_movie_date
                ON movie_gross_updates(movie_id, date);

            CREATE INDEX IF NOT EXISTS idx_membership_team
                ON movie_memberships(team_id);

            CREATE INDEX IF NOT EXISTS idx_team_division
                ON teams(division_id);",
        )?;

        Ok(())
    }
}
