//! Valuation and standings built from stored records

use super::{models::*, schema::LeagueDatabase};
use crate::cli::types::{DateRange, DivisionId, MovieId, SeasonId, TeamId};
use crate::league::{
    compute::{self, GrossIndex},
    types::{DivisionStandings, RosterEntry, SlateEntry, TeamReport, TeamValuation, ValuePoint},
};
use crate::Result;
use chrono::NaiveDate;
use tracing::debug;

impl LeagueDatabase {
    /// Load the gross series of every movie on a roster
    pub fn gross_index(&self, memberships: &[MovieMembership]) -> Result<GrossIndex> {
        let mut index = GrossIndex::with_capacity(memberships.len());
        for membership in memberships {
            if !index.contains_key(&membership.movie_id) {
                let updates = self.movie_gross_updates(membership.movie_id)?;
                index.insert(membership.movie_id, updates);
            }
        }
        Ok(index)
    }

    /// Current value of a movie, optionally restricted to one source
    pub fn movie_value(&self, movie_id: MovieId, source: Option<&str>) -> Result<i64> {
        self.get_movie(movie_id)?;
        let updates = self.movie_gross_updates(movie_id)?;
        Ok(compute::latest_value(&updates, source))
    }

    /// Value of a movie as of `date`, optionally restricted to one source
    pub fn movie_value_on_date(
        &self,
        movie_id: MovieId,
        date: NaiveDate,
        source: Option<&str>,
    ) -> Result<i64> {
        self.get_movie(movie_id)?;
        let updates = self.movie_gross_updates(movie_id)?;
        Ok(compute::value_on_date(&updates, date, source))
    }

    pub fn team_cost(&self, team_id: TeamId) -> Result<i64> {
        self.get_team(team_id)?;
        Ok(compute::team_cost(&self.team_memberships(team_id)?))
    }

    pub fn team_value(&self, team_id: TeamId) -> Result<i64> {
        Ok(self.team_valuation(team_id, None)?.value)
    }

    pub fn team_value_on_date(&self, team_id: TeamId, date: NaiveDate) -> Result<i64> {
        Ok(self.team_valuation(team_id, Some(date))?.value)
    }

    /// Cost and value of a team, current or as of a date
    pub fn team_valuation(&self, team_id: TeamId, as_of: Option<NaiveDate>) -> Result<TeamValuation> {
        let team = self.get_team(team_id)?;
        let owner = self.get_user(team.owner_id)?;
        let memberships = self.team_memberships(team_id)?;
        let index = self.gross_index(&memberships)?;

        let value = match as_of {
            Some(date) => compute::team_value_on_date(&memberships, &index, date),
            None => compute::team_value(&memberships, &index),
        };

        Ok(TeamValuation {
            team_id,
            owner: owner.username,
            cost: compute::team_cost(&memberships),
            value,
        })
    }

    /// Ranked table of one division
    pub fn division_standings(
        &self,
        division_id: DivisionId,
        as_of: Option<NaiveDate>,
    ) -> Result<DivisionStandings> {
        let division = self.get_division(division_id)?;

        let mut valuations = Vec::new();
        for team in self.division_teams(division_id)? {
            valuations.push(self.team_valuation(team.id, as_of)?);
        }
        debug!(division_id = %division_id, teams = valuations.len(), "ranking division");

        let standings = compute::rank_teams(
            valuations,
            division.promotion_count,
            division.relegation_count,
        );
        Ok(DivisionStandings {
            division,
            as_of,
            standings,
        })
    }

    /// Standings of every division in a season, in division order
    pub fn season_standings(
        &self,
        season_id: SeasonId,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<DivisionStandings>> {
        self.get_season(season_id)?;
        self.season_divisions(season_id)?
            .into_iter()
            .map(|division| self.division_standings(division.id, as_of))
            .collect()
    }

    /// Roster, cost and value of a team
    pub fn team_report(&self, team_id: TeamId, as_of: Option<NaiveDate>) -> Result<TeamReport> {
        let team = self.get_team(team_id)?;
        let owner = self.get_user(team.owner_id)?;
        let division = self.get_division(team.division_id)?;
        let memberships = self.team_memberships(team_id)?;
        let index = self.gross_index(&memberships)?;

        let mut roster = Vec::with_capacity(memberships.len());
        for membership in &memberships {
            let movie = self.get_movie(membership.movie_id)?;
            let updates = index
                .get(&membership.movie_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let value = match as_of {
                Some(date) => compute::value_on_date(updates, date, None),
                None => compute::latest_value(updates, None),
            };
            roster.push(RosterEntry {
                movie_id: movie.id,
                movie: movie.name,
                release_date: movie.release_date,
                price: membership.price,
                value,
            });
        }
        roster.sort_by(|a, b| {
            a.release_date
                .cmp(&b.release_date)
                .then_with(|| a.movie_id.cmp(&b.movie_id))
        });

        let value = compute::saturating_total(roster.iter().map(|entry| entry.value));
        Ok(TeamReport {
            team,
            owner: owner.username,
            division,
            as_of,
            roster,
            cost: compute::team_cost(&memberships),
            value,
        })
    }

    /// Daily team values across `range`
    pub fn team_value_history(&self, team_id: TeamId, range: DateRange) -> Result<Vec<ValuePoint>> {
        self.get_team(team_id)?;
        let memberships = self.team_memberships(team_id)?;
        let index = self.gross_index(&memberships)?;
        Ok(compute::value_history(&memberships, &index, range))
    }

    /// Movies on a season slate with their current values
    pub fn season_slate(&self, season_id: SeasonId) -> Result<Vec<SlateEntry>> {
        self.get_season(season_id)?;
        let mut slate = Vec::new();
        for movie in self.season_movies(season_id)? {
            let updates = self.movie_gross_updates(movie.id)?;
            slate.push(SlateEntry {
                value: compute::latest_value(&updates, None),
                movie,
            });
        }
        Ok(slate)
    }

    /// `"{league}, {start} to {end}"`, as seasons are labelled in listings
    pub fn season_label(&self, season: &Season) -> Result<String> {
        let league = self.get_league(season.league_id)?;
        Ok(format!(
            "{}, {} to {}",
            league.name, season.start_date, season.end_date
        ))
    }
}
