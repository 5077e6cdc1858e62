//! Type-safe wrappers for MovieLeague identifiers and dates.

pub mod ids;
pub mod time;

pub use ids::{DivisionId, LeagueId, MovieId, SeasonId, TeamId, UserId};
pub use time::{parse_date, DateRange, DATE_FORMAT};
