//! ID types for MovieLeague records.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = LeagueError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

record_id!(
    /// Type-safe wrapper for user IDs.
    UserId
);

record_id!(
    /// Type-safe wrapper for league IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use movie_league::LeagueId;
    ///
    /// let league_id = LeagueId::new(12);
    /// assert_eq!(league_id.as_i64(), 12);
    /// assert_eq!(league_id.to_string(), "12");
    /// ```
    LeagueId
);

record_id!(
    /// Type-safe wrapper for season IDs.
    SeasonId
);

record_id!(
    /// Type-safe wrapper for division IDs.
    DivisionId
);

record_id!(
    /// Type-safe wrapper for team IDs.
    TeamId
);

record_id!(
    /// Type-safe wrapper for movie IDs.
    MovieId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_through_display() {
        let id = TeamId::new(99);
        assert_eq!(id.to_string().parse::<TeamId>().unwrap(), id);
    }

    #[test]
    fn test_id_parse_trims_whitespace() {
        assert_eq!(" 5 ".parse::<MovieId>().unwrap(), MovieId::new(5));
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        match "five".parse::<SeasonId>() {
            Err(LeagueError::InvalidId(_)) => (),
            other => panic!("Expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&DivisionId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
