//! Gross update ingestion: JSON import and feed fetch

use reqwest::Client;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::{
    error::LeagueError,
    league::http::fetch_gross,
    storage::{models::NewGrossUpdate, LeagueDatabase},
    Result,
};

/// Counts reported after an import or fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub recorded: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// Whether the update already in force for this movie, date and source
/// (the one recorded last) carries the same gross
fn already_recorded(db: &LeagueDatabase, update: &NewGrossUpdate) -> Result<bool> {
    Ok(db
        .movie_gross_updates(update.movie_id)?
        .iter()
        .filter(|u| u.date == update.date && u.source == update.source)
        .max_by_key(|u| u.id)
        .is_some_and(|u| u.gross == update.gross))
}

fn record(db: &mut LeagueDatabase, update: &NewGrossUpdate, summary: &mut IngestSummary) -> Result<()> {
    if already_recorded(db, update)? {
        summary.unchanged += 1;
    } else {
        db.add_gross_update(update)?;
        summary.recorded += 1;
    }
    Ok(())
}

/// Parse an import file: a JSON array of gross updates
pub fn parse_import(contents: &str) -> Result<Vec<NewGrossUpdate>> {
    Ok(serde_json::from_str(contents)?)
}

/// Record every update in a JSON file.
///
/// The whole file is validated first and written in one transaction, so a
/// bad row or a failed write leaves the database untouched.
pub fn import_grosses(db: &mut LeagueDatabase, path: &Path) -> Result<IngestSummary> {
    let contents = std::fs::read_to_string(path)?;
    let updates = parse_import(&contents)?;

    for update in &updates {
        if update.gross < 0 {
            return Err(LeagueError::NegativeAmount {
                field: "gross",
                value: update.gross,
            });
        }
        db.get_movie(update.movie_id)?;
    }

    let summary = db.in_transaction(|db| {
        let mut summary = IngestSummary::default();
        for update in &updates {
            record(db, update, &mut summary)?;
        }
        Ok(summary)
    })?;

    info!(
        path = %path.display(),
        recorded = summary.recorded,
        unchanged = summary.unchanged,
        "imported gross updates"
    );
    Ok(summary)
}

/// Fetch the current gross of every movie known to `source` and record it.
///
/// A failure for one movie is logged and counted; the rest still run.
pub async fn fetch_grosses(
    db: &mut LeagueDatabase,
    client: &Client,
    base_url: &str,
    source: &str,
) -> Result<IngestSummary> {
    let externals = db.external_ids_for_source(source)?;
    info!(source, movies = externals.len(), "fetching grosses");

    let mut summary = IngestSummary::default();
    for external in &externals {
        match fetch_gross(client, base_url, &external.identifier).await {
            Ok(feed) => {
                let update = feed.into_update(external);
                if update.gross < 0 {
                    warn!(movie_id = %external.movie_id, gross = update.gross, "feed returned negative gross");
                    summary.failed += 1;
                    continue;
                }
                record(db, &update, &mut summary)?;
            }
            Err(e) => {
                warn!(
                    movie_id = %external.movie_id,
                    identifier = %external.identifier,
                    error = %e,
                    "could not fetch gross"
                );
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

pub fn describe(summary: &IngestSummary) -> String {
    format!(
        "{} recorded, {} unchanged, {} failed",
        summary.recorded, summary.unchanged, summary.failed
    )
}
