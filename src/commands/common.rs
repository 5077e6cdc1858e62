//! Common utilities and helper functions shared across commands.

use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::{
    core::config::resolve_database_path, league::types::Standing, storage::LeagueDatabase, Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub db: LeagueDatabase,
}

impl CommandContext {
    /// Open the league database named by `--db`, `MOVIE_LEAGUE_DB` or the default path
    pub fn new(db_flag: Option<&Path>) -> Result<Self> {
        let path = resolve_database_path(db_flag)?;
        info!(path = %path.display(), "using league database");
        Ok(Self {
            db: LeagueDatabase::open(&path)?,
        })
    }
}

/// Pretty JSON for `--json` output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print either JSON or the text rendering
pub fn emit<T: Serialize + ?Sized>(as_json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if as_json {
        println!("{}", to_json(value)?); // tarpaulin::skip
    } else {
        print!("{}", text()); // tarpaulin::skip
    }
    Ok(())
}

/// `"^ 1. alice"`-style prefix for a standings row
pub fn standing_prefix(standing: &Standing) -> String {
    format!("{} {:>2}.", standing.zone.marker(), standing.rank)
}
