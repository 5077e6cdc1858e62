//! Data models for the storage layer

use crate::cli::types::{DivisionId, LeagueId, MovieId, SeasonId, TeamId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Source recorded for gross updates entered without one.
pub const DEFAULT_GROSS_SOURCE: &str = "manual";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub commissioner_id: UserId,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

/// A date-bounded run of a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub league_id: LeagueId,
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: DivisionId,
    pub season_id: SeasonId,
    pub name: String,
    pub sort_order: i64,
    pub currency_unit: String,
    /// Spending cap per team; `None` means uncapped.
    pub max_currency: Option<i64>,
    pub promotion_count: u32,
    pub relegation_count: u32,
}

/// Fields for a division that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDivision {
    pub season_id: SeasonId,
    pub name: String,
    pub sort_order: i64,
    pub currency_unit: String,
    pub max_currency: Option<i64>,
    pub promotion_count: u32,
    pub relegation_count: u32,
}

impl NewDivision {
    /// Uncapped division with no promotion or relegation.
    pub fn new(season_id: SeasonId, name: impl Into<String>) -> Self {
        Self {
            season_id,
            name: name.into(),
            sort_order: 0,
            currency_unit: "$".to_string(),
            max_currency: None,
            promotion_count: 0,
            relegation_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub owner_id: UserId,
    pub division_id: DivisionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub release_date: NaiveDate,
}

/// A box-office gross figure for a movie on a date, from a named source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieGrossUpdate {
    pub id: i64,
    pub movie_id: MovieId,
    pub date: NaiveDate,
    pub gross: i64,
    pub source: String,
}

/// A gross update as read from an import file or typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGrossUpdate {
    pub movie_id: MovieId,
    pub date: NaiveDate,
    pub gross: i64,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    DEFAULT_GROSS_SOURCE.to_string()
}

/// Identifier of a movie in an external gross source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieExternalId {
    pub movie_id: MovieId,
    pub source: String,
    pub identifier: String,
}

/// A movie drafted onto a team at a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMembership {
    pub id: i64,
    pub movie_id: MovieId,
    pub team_id: TeamId,
    pub price: i64,
}
