use chrono::NaiveDate;
use rayon::prelude::*;
use std::{cmp::Ordering, collections::HashMap};

use crate::{
    cli::types::DateRange,
    league::types::{Standing, TeamValuation, ValuePoint, Zone},
    storage::models::{MovieGrossUpdate, MovieMembership},
    MovieId,
};

#[cfg(test)]
mod tests;

/// Gross updates grouped by movie.
pub type GrossIndex = HashMap<MovieId, Vec<MovieGrossUpdate>>;

/// Gross of the latest update matching `keep`, or 0.
///
/// Latest means greatest date; among updates on the same date the one
/// recorded last (highest id) wins.
fn latest_matching<F>(updates: &[MovieGrossUpdate], keep: F) -> i64
where
    F: Fn(&MovieGrossUpdate) -> bool,
{
    updates
        .iter()
        .filter(|u| keep(u))
        .max_by_key(|u| (u.date, u.id))
        .map(|u| u.gross)
        .unwrap_or(0)
}

fn source_matches(update: &MovieGrossUpdate, source: Option<&str>) -> bool {
    source.map_or(true, |s| update.source == s)
}

/// A movie's value as of `date`: the latest gross dated on or before it.
///
/// With `source` set, only updates from that source count.
pub fn value_on_date(updates: &[MovieGrossUpdate], date: NaiveDate, source: Option<&str>) -> i64 {
    latest_matching(updates, |u| u.date <= date && source_matches(u, source))
}

/// A movie's current value: its latest gross.
pub fn latest_value(updates: &[MovieGrossUpdate], source: Option<&str>) -> i64 {
    latest_matching(updates, |u| source_matches(u, source))
}

/// Sum that saturates at `i64::MAX` instead of wrapping.
pub(crate) fn saturating_total(amounts: impl IntoIterator<Item = i64>) -> i64 {
    amounts.into_iter().fold(0, i64::saturating_add)
}

/// Total price paid for a roster.
pub fn team_cost(memberships: &[MovieMembership]) -> i64 {
    saturating_total(memberships.iter().map(|m| m.price))
}

fn series<'a>(index: &'a GrossIndex, movie_id: MovieId) -> &'a [MovieGrossUpdate] {
    index.get(&movie_id).map(Vec::as_slice).unwrap_or(&[])
}

/// Sum of the current values of every drafted movie.
pub fn team_value(memberships: &[MovieMembership], index: &GrossIndex) -> i64 {
    saturating_total(
        memberships
            .iter()
            .map(|m| latest_value(series(index, m.movie_id), None)),
    )
}

/// Sum of every drafted movie's value as of `date`.
pub fn team_value_on_date(
    memberships: &[MovieMembership],
    index: &GrossIndex,
    date: NaiveDate,
) -> i64 {
    saturating_total(
        memberships
            .iter()
            .map(|m| value_on_date(series(index, m.movie_id), date, None)),
    )
}

/// Team value for every day of `range`, computed in parallel.
pub fn value_history(
    memberships: &[MovieMembership],
    index: &GrossIndex,
    range: DateRange,
) -> Vec<ValuePoint> {
    range
        .days()
        .into_par_iter()
        .map(|date| ValuePoint {
            date,
            value: team_value_on_date(memberships, index, date),
        })
        .collect()
}

/// Higher value first, then lower cost, then lower team id.
fn compare_valuations(a: &TeamValuation, b: &TeamValuation) -> Ordering {
    b.value
        .cmp(&a.value)
        .then_with(|| a.cost.cmp(&b.cost))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Zone for a 1-based `rank` among `team_count` teams.
///
/// Promotion is checked first, so a small division whose cutoffs overlap
/// never marks a team both promoted and relegated.
pub fn zone_for_rank(
    rank: usize,
    team_count: usize,
    promotion_count: u32,
    relegation_count: u32,
) -> Zone {
    let relegation_start = team_count.saturating_sub(relegation_count as usize);
    if rank <= promotion_count as usize {
        Zone::Promoted
    } else if relegation_count > 0 && rank > relegation_start {
        Zone::Relegated
    } else {
        Zone::Safe
    }
}

/// Rank one division's teams and mark promotion/relegation zones.
pub fn rank_teams(
    mut valuations: Vec<TeamValuation>,
    promotion_count: u32,
    relegation_count: u32,
) -> Vec<Standing> {
    valuations.sort_by(compare_valuations);
    let team_count = valuations.len();

    valuations
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            let rank = i + 1;
            Standing {
                rank,
                team_id: v.team_id,
                owner: v.owner,
                cost: v.cost,
                value: v.value,
                zone: zone_for_rank(rank, team_count, promotion_count, relegation_count),
            }
        })
        .collect()
}
