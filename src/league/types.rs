use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    storage::models::{Division, Movie, Team},
    MovieId, TeamId,
};


/// Where a team finishes relative to the division's promotion/relegation cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Promoted,
    Safe,
    Relegated,
}

impl Zone {
    /// One-character marker for text standings.
    pub fn marker(&self) -> &'static str {
        match self {
            Zone::Promoted => "^",
            Zone::Safe => " ",
            Zone::Relegated => "v",
        }
    }

    pub fn is_promoted(&self) -> bool {
        matches!(self, Zone::Promoted)
    }

    pub fn is_relegated(&self) -> bool {
        matches!(self, Zone::Relegated)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Zone::Promoted => "promoted",
            Zone::Safe => "safe",
            Zone::Relegated => "relegated",
        };
        write!(f, "{}", s)
    }
}

/// A team's cost and value before ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamValuation {
    pub team_id: TeamId,
    pub owner: String,
    pub cost: i64,
    pub value: i64,
}

/// A ranked row of a division table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub team_id: TeamId,
    pub owner: String,
    pub cost: i64,
    pub value: i64,
    pub zone: Zone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionStandings {
    pub division: Division,
    /// `None` means current values.
    pub as_of: Option<NaiveDate>,
    pub standings: Vec<Standing>,
}

/// One drafted movie on a team roster, with its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub movie_id: MovieId,
    pub movie: String,
    pub release_date: NaiveDate,
    pub price: i64,
    pub value: i64,
}

/// Everything shown on a team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team: Team,
    pub owner: String,
    pub division: Division,
    pub as_of: Option<NaiveDate>,
    pub roster: Vec<RosterEntry>,
    pub cost: i64,
    pub value: i64,
}

impl TeamReport {
    /// Value gained per unit spent; `None` for a team that spent nothing.
    pub fn return_on_cost(&self) -> Option<f64> {
        if self.cost == 0 {
            None
        } else {
            Some(self.value as f64 / self.cost as f64)
        }
    }
}

/// Team value on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: i64,
}

/// A movie on a season slate with its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlateEntry {
    pub movie: Movie,
    pub value: i64,
}
