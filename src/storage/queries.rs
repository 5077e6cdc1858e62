//! Basic database query operations

use super::{models::*, schema::LeagueDatabase};
use crate::cli::types::{DateRange, DivisionId, LeagueId, MovieId, SeasonId, TeamId, UserId};
use crate::{error::LeagueError, Result};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: UserId::new(row.get(0)?),
        username: row.get(1)?,
    })
}

fn row_to_league(row: &Row) -> rusqlite::Result<League> {
    Ok(League {
        id: LeagueId::new(row.get(0)?),
        name: row.get(1)?,
        commissioner_id: UserId::new(row.get(2)?),
        short_description: row.get(3)?,
        long_description: row.get(4)?,
    })
}

fn row_to_season(row: &Row) -> rusqlite::Result<Season> {
    Ok(Season {
        id: SeasonId::new(row.get(0)?),
        league_id: LeagueId::new(row.get(1)?),
        name: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
    })
}

fn row_to_division(row: &Row) -> rusqlite::Result<Division> {
    Ok(Division {
        id: DivisionId::new(row.get(0)?),
        season_id: SeasonId::new(row.get(1)?),
        name: row.get(2)?,
        sort_order: row.get(3)?,
        currency_unit: row.get(4)?,
        max_currency: row.get(5)?,
        promotion_count: row.get(6)?,
        relegation_count: row.get(7)?,
    })
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        owner_id: UserId::new(row.get(1)?),
        division_id: DivisionId::new(row.get(2)?),
    })
}

fn row_to_movie(row: &Row) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: MovieId::new(row.get(0)?),
        name: row.get(1)?,
        release_date: row.get(2)?,
    })
}

fn row_to_gross_update(row: &Row) -> rusqlite::Result<MovieGrossUpdate> {
    Ok(MovieGrossUpdate {
        id: row.get(0)?,
        movie_id: MovieId::new(row.get(1)?),
        date: row.get(2)?,
        gross: row.get(3)?,
        source: row.get(4)?,
    })
}

fn row_to_membership(row: &Row) -> rusqlite::Result<MovieMembership> {
    Ok(MovieMembership {
        id: row.get(0)?,
        movie_id: MovieId::new(row.get(1)?),
        team_id: TeamId::new(row.get(2)?),
        price: row.get(3)?,
    })
}

const LEAGUE_COLUMNS: &str =
    "id, name, commissioner_id, short_description, long_description";
const SEASON_COLUMNS: &str = "id, league_id, name, start_date, end_date";
const DIVISION_COLUMNS: &str = "id, season_id, name, sort_order, currency_unit, max_currency, \
                                promotion_count, relegation_count";

fn ensure_non_negative(field: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(LeagueError::NegativeAmount { field, value });
    }
    Ok(())
}

impl LeagueDatabase {
    // ---- users ----

    /// Create a user; usernames are trimmed and must be unique
    pub fn create_user(&mut self, username: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LeagueError::EmptyUsername);
        }
        if self.find_user_by_name(username)?.is_some() {
            return Err(LeagueError::DuplicateUsername {
                username: username.to_string(),
            });
        }

        self.conn
            .execute("INSERT INTO users (username) VALUES (?)", params![username])?;
        let id = UserId::new(self.conn.last_insert_rowid());
        info!(user_id = %id, username, "created user");
        Ok(User {
            id,
            username: username.to_string(),
        })
    }

    pub fn get_user(&self, id: UserId) -> Result<User> {
        self.conn
            .query_row(
                "SELECT id, username FROM users WHERE id = ?",
                params![id.as_i64()],
                row_to_user,
            )
            .optional()?
            .ok_or(LeagueError::NotFound {
                entity: "User",
                id: id.as_i64(),
            })
    }

    fn find_user_by_name(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, username FROM users WHERE username = ?",
                params![username],
                row_to_user,
            )
            .optional()?)
    }

    pub fn user_by_name(&self, username: &str) -> Result<User> {
        self.find_user_by_name(username.trim())?
            .ok_or_else(|| LeagueError::UserNotFound {
                username: username.trim().to_string(),
            })
    }

    // ---- leagues ----

    pub fn create_league(
        &mut self,
        name: &str,
        commissioner_id: UserId,
        short_description: Option<&str>,
        long_description: Option<&str>,
    ) -> Result<League> {
        self.get_user(commissioner_id)?;

        self.conn.execute(
            "INSERT INTO leagues (name, commissioner_id, short_description, long_description)
             VALUES (?, ?, ?, ?)",
            params![
                name,
                commissioner_id.as_i64(),
                short_description,
                long_description
            ],
        )?;
        let id = LeagueId::new(self.conn.last_insert_rowid());
        info!(league_id = %id, name, "created league");
        self.get_league(id)
    }

    pub fn get_league(&self, id: LeagueId) -> Result<League> {
        self.conn
            .query_row(
                &format!("SELECT {LEAGUE_COLUMNS} FROM leagues WHERE id = ?"),
                params![id.as_i64()],
                row_to_league,
            )
            .optional()?
            .ok_or(LeagueError::NotFound {
                entity: "League",
                id: id.as_i64(),
            })
    }

    pub fn list_leagues(&self) -> Result<Vec<League>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {LEAGUE_COLUMNS} FROM leagues ORDER BY id"))?;
        let rows = stmt.query_map([], row_to_league)?;

        let mut leagues = Vec::new();
        for row in rows {
            leagues.push(row?);
        }
        Ok(leagues)
    }

    /// Add a player to a league. Returns false if they were already a member.
    pub fn add_league_player(&mut self, league_id: LeagueId, user_id: UserId) -> Result<bool> {
        self.get_league(league_id)?;
        self.get_user(user_id)?;

        let rows_affected = self.conn.execute(
            "INSERT OR IGNORE INTO league_players (league_id, user_id) VALUES (?, ?)",
            params![league_id.as_i64(), user_id.as_i64()],
        )?;
        Ok(rows_affected > 0)
    }

    pub fn league_players(&self, league_id: LeagueId) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT u.id, u.username
             FROM users u
             JOIN league_players lp ON lp.user_id = u.id
             WHERE lp.league_id = ?
             ORDER BY u.username",
        )?;
        let rows = stmt.query_map(params![league_id.as_i64()], row_to_user)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    // ---- seasons ----

    pub fn create_season(
        &mut self,
        league_id: LeagueId,
        name: Option<&str>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Season> {
        DateRange::new(start_date, end_date)?;
        self.get_league(league_id)?;

        self.conn.execute(
            "INSERT INTO seasons (league_id, name, start_date, end_date) VALUES (?, ?, ?, ?)",
            params![league_id.as_i64(), name, start_date, end_date],
        )?;
        let id = SeasonId::new(self.conn.last_insert_rowid());
        info!(season_id = %id, league_id = %league_id, "created season");
        self.get_season(id)
    }

    pub fn get_season(&self, id: SeasonId) -> Result<Season> {
        self.conn
            .query_row(
                &format!("SELECT {SEASON_COLUMNS} FROM seasons WHERE id = ?"),
                params![id.as_i64()],
                row_to_season,
            )
            .optional()?
            .ok_or(LeagueError::NotFound {
                entity: "Season",
                id: id.as_i64(),
            })
    }

    /// Seasons of a league, earliest first
    pub fn league_seasons(&self, league_id: LeagueId) -> Result<Vec<Season>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SEASON_COLUMNS} FROM seasons WHERE league_id = ? ORDER BY start_date, id"
        ))?;
        let rows = stmt.query_map(params![league_id.as_i64()], row_to_season)?;

        let mut seasons = Vec::new();
        for row in rows {
            seasons.push(row?);
        }
        Ok(seasons)
    }

    /// Put a movie on a season's slate. Returns false if it was already there.
    pub fn add_movie_to_season(&mut self, season_id: SeasonId, movie_id: MovieId) -> Result<bool> {
        self.get_season(season_id)?;
        self.get_movie(movie_id)?;

        let rows_affected = self.conn.execute(
            "INSERT OR IGNORE INTO season_movies (season_id, movie_id) VALUES (?, ?)",
            params![season_id.as_i64(), movie_id.as_i64()],
        )?;
        Ok(rows_affected > 0)
    }

    pub fn season_movies(&self, season_id: SeasonId) -> Result<Vec<Movie>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.id, m.name, m.release_date
             FROM movies m
             JOIN season_movies sm ON sm.movie_id = m.id
             WHERE sm.season_id = ?
             ORDER BY m.release_date, m.id",
        )?;
        let rows = stmt.query_map(params![season_id.as_i64()], row_to_movie)?;

        let mut movies = Vec::new();
        for row in rows {
            movies.push(row?);
        }
        Ok(movies)
    }

    pub fn is_movie_in_season(&self, season_id: SeasonId, movie_id: MovieId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM season_movies WHERE season_id = ? AND movie_id = ?",
            params![season_id.as_i64(), movie_id.as_i64()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    // ---- divisions ----

    pub fn create_division(&mut self, division: &NewDivision) -> Result<Division> {
        self.get_season(division.season_id)?;
        if let Some(cap) = division.max_currency {
            ensure_non_negative("max_currency", cap)?;
        }

        self.conn.execute(
            "INSERT INTO divisions
             (season_id, name, sort_order, currency_unit, max_currency,
              promotion_count, relegation_count)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                division.season_id.as_i64(),
                division.name,
                division.sort_order,
                division.currency_unit,
                division.max_currency,
                division.promotion_count,
                division.relegation_count
            ],
        )?;
        let id = DivisionId::new(self.conn.last_insert_rowid());
        info!(division_id = %id, name = %division.name, "created division");
        self.get_division(id)
    }

    pub fn get_division(&self, id: DivisionId) -> Result<Division> {
        self.conn
            .query_row(
                &format!("SELECT {DIVISION_COLUMNS} FROM divisions WHERE id = ?"),
                params![id.as_i64()],
                row_to_division,
            )
            .optional()?
            .ok_or(LeagueError::NotFound {
                entity: "Division",
                id: id.as_i64(),
            })
    }

    /// Divisions of a season in display order
    pub fn season_divisions(&self, season_id: SeasonId) -> Result<Vec<Division>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {DIVISION_COLUMNS} FROM divisions WHERE season_id = ? ORDER BY sort_order, id"
        ))?;
        let rows = stmt.query_map(params![season_id.as_i64()], row_to_division)?;

        let mut divisions = Vec::new();
        for row in rows {
            divisions.push(row?);
        }
        Ok(divisions)
    }

    // ---- teams ----

    pub fn create_team(&mut self, owner_id: UserId, division_id: DivisionId) -> Result<Team> {
        self.get_user(owner_id)?;
        self.get_division(division_id)?;

        self.conn.execute(
            "INSERT INTO teams (owner_id, division_id) VALUES (?, ?)",
            params![owner_id.as_i64(), division_id.as_i64()],
        )?;
        let id = TeamId::new(self.conn.last_insert_rowid());
        info!(team_id = %id, owner_id = %owner_id, division_id = %division_id, "created team");
        Ok(Team {
            id,
            owner_id,
            division_id,
        })
    }

    pub fn get_team(&self, id: TeamId) -> Result<Team> {
        self.conn
            .query_row(
                "SELECT id, owner_id, division_id FROM teams WHERE id = ?",
                params![id.as_i64()],
                row_to_team,
            )
            .optional()?
            .ok_or(LeagueError::NotFound {
                entity: "Team",
                id: id.as_i64(),
            })
    }

    pub fn division_teams(&self, division_id: DivisionId) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, owner_id, division_id FROM teams WHERE division_id = ? ORDER BY id",
        )?;
        let rows = stmt.query_map(params![division_id.as_i64()], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    // ---- movies ----

    pub fn create_movie(&mut self, name: &str, release_date: NaiveDate) -> Result<Movie> {
        self.conn.execute(
            "INSERT INTO movies (name, release_date) VALUES (?, ?)",
            params![name, release_date],
        )?;
        let id = MovieId::new(self.conn.last_insert_rowid());
        info!(movie_id = %id, name, "created movie");
        Ok(Movie {
            id,
            name: name.to_string(),
            release_date,
        })
    }

    pub fn get_movie(&self, id: MovieId) -> Result<Movie> {
        self.conn
            .query_row(
                "SELECT id, name, release_date FROM movies WHERE id = ?",
                params![id.as_i64()],
                row_to_movie,
            )
            .optional()?
            .ok_or(LeagueError::NotFound {
                entity: "Movie",
                id: id.as_i64(),
            })
    }

    /// All movies, earliest release first
    pub fn list_movies(&self) -> Result<Vec<Movie>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, release_date FROM movies ORDER BY release_date, id")?;
        let rows = stmt.query_map([], row_to_movie)?;

        let mut movies = Vec::new();
        for row in rows {
            movies.push(row?);
        }
        Ok(movies)
    }

    // ---- gross updates ----

    /// Record a gross figure and drop the movie's cached series
    pub fn add_gross_update(&mut self, update: &NewGrossUpdate) -> Result<MovieGrossUpdate> {
        ensure_non_negative("gross", update.gross)?;
        self.get_movie(update.movie_id)?;

        self.conn.execute(
            "INSERT INTO movie_gross_updates (movie_id, date, gross, source) VALUES (?, ?, ?, ?)",
            params![
                update.movie_id.as_i64(),
                update.date,
                update.gross,
                update.source
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        self.gross_cache.invalidate(update.movie_id);

        debug!(
            movie_id = %update.movie_id,
            date = %update.date,
            gross = update.gross,
            source = %update.source,
            "recorded gross update"
        );
        Ok(MovieGrossUpdate {
            id,
            movie_id: update.movie_id,
            date: update.date,
            gross: update.gross,
            source: update.source.clone(),
        })
    }

    /// All gross updates for a movie, in date then insertion order
    pub fn movie_gross_updates(&self, movie_id: MovieId) -> Result<Vec<MovieGrossUpdate>> {
        if let Some(cached) = self.gross_cache.get(movie_id) {
            return Ok(cached);
        }

        let mut stmt = self.conn.prepare(
            "SELECT id, movie_id, date, gross, source
             FROM movie_gross_updates
             WHERE movie_id = ?
             ORDER BY date, id",
        )?;
        let rows = stmt.query_map(params![movie_id.as_i64()], row_to_gross_update)?;

        let mut updates = Vec::new();
        for row in rows {
            updates.push(row?);
        }

        self.gross_cache.put(movie_id, updates.clone());
        Ok(updates)
    }

    // ---- external ids ----

    /// Set (or replace) a movie's identifier in an external source
    pub fn set_external_id(
        &mut self,
        movie_id: MovieId,
        source: &str,
        identifier: &str,
    ) -> Result<MovieExternalId> {
        self.get_movie(movie_id)?;

        self.conn.execute(
            "INSERT INTO movie_external_ids (movie_id, source, identifier) VALUES (?, ?, ?)
             ON CONFLICT(movie_id, source) DO UPDATE SET identifier = excluded.identifier",
            params![movie_id.as_i64(), source, identifier],
        )?;
        Ok(MovieExternalId {
            movie_id,
            source: source.to_string(),
            identifier: identifier.to_string(),
        })
    }

    pub fn external_ids_for_source(&self, source: &str) -> Result<Vec<MovieExternalId>> {
        let mut stmt = self.conn.prepare(
            "SELECT movie_id, source, identifier
             FROM movie_external_ids
             WHERE source = ?
             ORDER BY movie_id",
        )?;
        let rows = stmt.query_map(params![source], |row| {
            Ok(MovieExternalId {
                movie_id: MovieId::new(row.get(0)?),
                source: row.get(1)?,
                identifier: row.get(2)?,
            })
        })?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    // ---- memberships ----

    /// Draft a movie onto a team at a price.
    ///
    /// The movie must be on the team's season slate, must not already be on
    /// the team, and the team's total cost must stay within the division cap.
    pub fn draft_movie(
        &mut self,
        team_id: TeamId,
        movie_id: MovieId,
        price: i64,
    ) -> Result<MovieMembership> {
        ensure_non_negative("price", price)?;
        let team = self.get_team(team_id)?;
        let division = self.get_division(team.division_id)?;
        self.get_movie(movie_id)?;

        if !self.is_movie_in_season(division.season_id, movie_id)? {
            return Err(LeagueError::MovieNotInSeason {
                movie_id: movie_id.as_i64(),
                season_id: division.season_id.as_i64(),
            });
        }

        let memberships = self.team_memberships(team_id)?;
        if memberships.iter().any(|m| m.movie_id == movie_id) {
            return Err(LeagueError::AlreadyDrafted {
                movie_id: movie_id.as_i64(),
                team_id: team_id.as_i64(),
            });
        }

        let total = memberships
            .iter()
            .try_fold(price, |total, m| total.checked_add(m.price))
            .ok_or(LeagueError::AmountOverflow { field: "price" })?;
        if let Some(cap) = division.max_currency {
            if total > cap {
                return Err(LeagueError::BudgetExceeded {
                    team_id: team_id.as_i64(),
                    total,
                    cap,
                });
            }
        }

        self.conn.execute(
            "INSERT INTO movie_memberships (movie_id, team_id, price) VALUES (?, ?, ?)",
            params![movie_id.as_i64(), team_id.as_i64(), price],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(team_id = %team_id, movie_id = %movie_id, price, "drafted movie");
        Ok(MovieMembership {
            id,
            movie_id,
            team_id,
            price,
        })
    }

    pub fn team_memberships(&self, team_id: TeamId) -> Result<Vec<MovieMembership>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, movie_id, team_id, price
             FROM movie_memberships
             WHERE team_id = ?
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![team_id.as_i64()], row_to_membership)?;

        let mut memberships = Vec::new();
        for row in rows {
            memberships.push(row?);
        }
        Ok(memberships)
    }
}
