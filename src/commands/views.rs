//! Read-only views: leagues, seasons, standings and team rosters.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

use super::common::{emit, standing_prefix};
use crate::{
    core::format::{format_currency, intcomma},
    league::types::{DivisionStandings, SlateEntry, TeamReport},
    storage::{models::League, models::Season, LeagueDatabase},
    LeagueId, Result, SeasonId, TeamId,
};

/// A season with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonSummary {
    pub season: Season,
    pub label: String,
}

/// Everything shown on a league page.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueDetail {
    pub league: League,
    pub commissioner: String,
    pub players: Vec<String>,
    pub seasons: Vec<SeasonSummary>,
}

/// Everything shown on a season page.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonDetail {
    pub summary: SeasonSummary,
    pub slate: Vec<SlateEntry>,
    pub divisions: Vec<DivisionStandings>,
}

fn summarize_seasons(db: &LeagueDatabase, league_id: LeagueId) -> Result<Vec<SeasonSummary>> {
    db.league_seasons(league_id)?
        .into_iter()
        .map(|season| {
            Ok(SeasonSummary {
                label: db.season_label(&season)?,
                season,
            })
        })
        .collect()
}

pub fn league_detail(db: &LeagueDatabase, league_id: LeagueId) -> Result<LeagueDetail> {
    let league = db.get_league(league_id)?;
    let commissioner = db.get_user(league.commissioner_id)?.username;
    let players = db
        .league_players(league_id)?
        .into_iter()
        .map(|u| u.username)
        .collect();
    let seasons = summarize_seasons(db, league_id)?;

    Ok(LeagueDetail {
        league,
        commissioner,
        players,
        seasons,
    })
}

pub fn season_detail(
    db: &LeagueDatabase,
    season_id: SeasonId,
    as_of: Option<NaiveDate>,
) -> Result<SeasonDetail> {
    let season = db.get_season(season_id)?;
    let label = db.season_label(&season)?;
    Ok(SeasonDetail {
        summary: SeasonSummary { season, label },
        slate: db.season_slate(season_id)?,
        divisions: db.season_standings(season_id, as_of)?,
    })
}

pub fn render_leagues(leagues: &[League]) -> String {
    let mut out = String::new();
    if leagues.is_empty() {
        out.push_str("No leagues yet.\n");
        return out;
    }
    for league in leagues {
        let _ = match &league.short_description {
            Some(desc) => writeln!(out, "{} {} - {}", league.id, league.name, desc),
            None => writeln!(out, "{} {}", league.id, league.name),
        };
    }
    out
}

pub fn render_seasons(seasons: &[SeasonSummary]) -> String {
    let mut out = String::new();
    for summary in seasons {
        let _ = match &summary.season.name {
            Some(name) => writeln!(out, "{} {} ({})", summary.season.id, name, summary.label),
            None => writeln!(out, "{} {}", summary.season.id, summary.label),
        };
    }
    out
}

pub fn render_league(detail: &LeagueDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.league.name);
    if let Some(desc) = &detail.league.long_description {
        let _ = writeln!(out, "{}", desc);
    }
    let _ = writeln!(out, "Commissioner: {}", detail.commissioner);
    if !detail.players.is_empty() {
        let _ = writeln!(out, "Players: {}", detail.players.join(", "));
    }
    let _ = writeln!(out, "Seasons:");
    out.push_str(&render_seasons(&detail.seasons));
    out
}

pub fn render_standings(table: &DivisionStandings) -> String {
    let mut out = String::new();
    let unit = &table.division.currency_unit;
    match table.as_of {
        Some(date) => {
            let _ = writeln!(out, "{} (as of {})", table.division.name, date);
        }
        None => {
            let _ = writeln!(out, "{}", table.division.name);
        }
    }
    if table.standings.is_empty() {
        out.push_str("  no teams\n");
    }
    for standing in &table.standings {
        let _ = writeln!(
            out,
            "  {} {:<16} {:>10} {:>16}",
            standing_prefix(standing),
            standing.owner,
            format_currency(unit, standing.cost),
            intcomma(standing.value),
        );
    }
    out
}

pub fn render_season(detail: &SeasonDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.summary.label);
    if !detail.slate.is_empty() {
        let _ = writeln!(out, "Slate:");
        for entry in &detail.slate {
            let _ = writeln!(
                out,
                "  {:<24} {} {:>16}",
                entry.movie.name,
                entry.movie.release_date,
                intcomma(entry.value)
            );
        }
    }
    for table in &detail.divisions {
        out.push('\n');
        out.push_str(&render_standings(table));
    }
    out
}

pub fn render_team(report: &TeamReport) -> String {
    let mut out = String::new();
    let unit = &report.division.currency_unit;
    let _ = writeln!(
        out,
        "Team {} ({}) - {}",
        report.team.id, report.owner, report.division.name
    );
    for entry in &report.roster {
        let _ = writeln!(
            out,
            "  {:<24} {} {:>10} {:>16}",
            entry.movie,
            entry.release_date,
            format_currency(unit, entry.price),
            intcomma(entry.value)
        );
    }
    let _ = write!(
        out,
        "Cost: {}  Value: {}",
        format_currency(unit, report.cost),
        intcomma(report.value)
    );
    if let Some(ratio) = report.return_on_cost() {
        let _ = write!(out, "  Return: {:.1}x", ratio);
    }
    if let Some(date) = report.as_of {
        let _ = write!(out, " (as of {})", date);
    }
    out.push('\n');
    out
}

/// Handle the leagues command
pub fn handle_leagues(db: &LeagueDatabase, as_json: bool) -> Result<()> {
    let leagues = db.list_leagues()?;
    emit(as_json, &leagues, || render_leagues(&leagues))
}

/// Handle the league command
pub fn handle_league(db: &LeagueDatabase, league_id: LeagueId, as_json: bool) -> Result<()> {
    let detail = league_detail(db, league_id)?;
    emit(as_json, &detail, || render_league(&detail))
}

/// Handle the seasons command
pub fn handle_seasons(db: &LeagueDatabase, league_id: LeagueId, as_json: bool) -> Result<()> {
    db.get_league(league_id)?;
    let seasons = summarize_seasons(db, league_id)?;
    emit(as_json, &seasons, || render_seasons(&seasons))
}

/// Handle the season command
pub fn handle_season(
    db: &LeagueDatabase,
    season_id: SeasonId,
    as_of: Option<NaiveDate>,
    as_json: bool,
) -> Result<()> {
    let detail = season_detail(db, season_id, as_of)?;
    emit(as_json, &detail, || render_season(&detail))
}

/// Handle the team command
pub fn handle_team(
    db: &LeagueDatabase,
    team_id: TeamId,
    as_of: Option<NaiveDate>,
    as_json: bool,
) -> Result<()> {
    let report = db.team_report(team_id, as_of)?;
    emit(as_json, &report, || render_team(&report))
}
