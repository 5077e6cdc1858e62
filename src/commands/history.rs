//! Team value history command

use chrono::NaiveDate;
use std::fmt::Write;

use super::common::emit;
use crate::{
    cli::types::DateRange, core::format::intcomma, league::types::ValuePoint,
    storage::LeagueDatabase, Result, TeamId,
};

/// Resolve the history window, defaulting each end to the team's season bounds
pub fn history_range(
    db: &LeagueDatabase,
    team_id: TeamId,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<DateRange> {
    let team = db.get_team(team_id)?;
    let division = db.get_division(team.division_id)?;
    let season = db.get_season(division.season_id)?;
    DateRange::new(
        from.unwrap_or(season.start_date),
        to.unwrap_or(season.end_date),
    )
}

pub fn render_history(points: &[ValuePoint]) -> String {
    let mut out = String::new();
    let mut previous: Option<i64> = None;
    for point in points {
        let change = match previous {
            Some(prev) if point.value != prev => format!(" ({:+})", point.value - prev),
            _ => String::new(),
        };
        let _ = writeln!(out, "{} {:>16}{}", point.date, intcomma(point.value), change);
        previous = Some(point.value);
    }
    out
}

/// Handle the history command
pub fn handle_history(
    db: &LeagueDatabase,
    team_id: TeamId,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    as_json: bool,
) -> Result<()> {
    let range = history_range(db, team_id, from, to)?;
    let points = db.team_value_history(team_id, range)?;
    emit(as_json, &points, || render_history(&points))
}
