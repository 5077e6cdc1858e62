//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DivisionId, LeagueId, MovieId, SeasonId, TeamId};

use crate::storage::models::DEFAULT_GROSS_SOURCE;

/// Output options shared by read commands
#[derive(Debug, Args, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "movie-league", about = "Fantasy box-office league manager")]
pub struct MovieLeague {
    /// Path to the league database (or set `MOVIE_LEAGUE_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log progress to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every league.
    Leagues {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Show a league with its commissioner, players and seasons.
    League {
        league_id: LeagueId,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List the seasons of a league.
    Seasons {
        league_id: LeagueId,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Show a season's slate and division standings.
    Season {
        season_id: SeasonId,

        /// Value teams as of this date (YYYY-MM-DD) instead of today.
        #[clap(long)]
        as_of: Option<NaiveDate>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Show a team's roster, cost and value.
    Team {
        team_id: TeamId,

        /// Value the roster as of this date (YYYY-MM-DD).
        #[clap(long)]
        as_of: Option<NaiveDate>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Daily team value over a date range.
    History {
        team_id: TeamId,

        /// First day (YYYY-MM-DD); defaults to the season start.
        #[clap(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD); defaults to the season end.
        #[clap(long)]
        to: Option<NaiveDate>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Create league records.
    Add {
        #[clap(subcommand)]
        cmd: AddCmd,
    },

    /// Draft a movie onto a team at a price.
    Draft {
        #[clap(long)]
        team: TeamId,

        #[clap(long)]
        movie: MovieId,

        #[clap(long)]
        price: i64,
    },

    /// Record gross updates from a JSON file.
    ///
    /// The file holds an array of `{"movie_id", "date", "gross", "source"}`
    /// objects; `source` defaults to `manual`.
    ImportGrosses { path: PathBuf },

    /// Fetch the latest grosses for every movie with an identifier in SOURCE.
    ///
    /// Requests `{base-url}/{identifier}` and expects `{"date", "gross"}`.
    FetchGrosses {
        /// External source name, also recorded on each update.
        #[clap(long)]
        source: String,

        /// Feed base URL (or set `MOVIE_LEAGUE_FEED_URL`).
        #[clap(long)]
        base_url: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AddCmd {
    /// Register a user.
    User { username: String },

    /// Create a league run by an existing user.
    League {
        name: String,

        /// Commissioner username.
        #[clap(long)]
        commissioner: String,

        #[clap(long)]
        short_description: Option<String>,

        #[clap(long)]
        long_description: Option<String>,
    },

    /// Add a user to a league's players.
    Player {
        #[clap(long)]
        league: LeagueId,

        #[clap(long)]
        username: String,
    },

    /// Start a season of a league.
    Season {
        #[clap(long)]
        league: LeagueId,

        #[clap(long)]
        start: NaiveDate,

        #[clap(long)]
        end: NaiveDate,

        #[clap(long)]
        name: Option<String>,
    },

    /// Put a movie on a season's slate.
    Slate {
        #[clap(long)]
        season: SeasonId,

        #[clap(long)]
        movie: MovieId,
    },

    /// Create a division in a season.
    Division {
        #[clap(long)]
        season: SeasonId,

        name: String,

        /// Display order among the season's divisions (lowest first).
        #[clap(long, default_value_t = 0)]
        sort_order: i64,

        #[clap(long, default_value = "$")]
        currency_unit: String,

        /// Spending cap per team.
        #[clap(long)]
        max_currency: Option<i64>,

        /// Number of top teams promoted.
        #[clap(long, default_value_t = 0)]
        promote: u32,

        /// Number of bottom teams relegated.
        #[clap(long, default_value_t = 0)]
        relegate: u32,
    },

    /// Create a team for a user in a division.
    Team {
        /// Owner username.
        #[clap(long)]
        owner: String,

        #[clap(long)]
        division: DivisionId,
    },

    /// Register a movie.
    Movie {
        name: String,

        #[clap(long)]
        release_date: NaiveDate,
    },

    /// Record a gross figure for a movie.
    Gross {
        #[clap(long)]
        movie: MovieId,

        #[clap(long)]
        date: NaiveDate,

        #[clap(long)]
        gross: i64,

        #[clap(long, default_value = DEFAULT_GROSS_SOURCE)]
        source: String,
    },

    /// Set a movie's identifier in an external gross source.
    ExternalId {
        #[clap(long)]
        movie: MovieId,

        #[clap(long)]
        source: String,

        identifier: String,
    },
}
