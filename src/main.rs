//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use movie_league::{
    cli::{Commands, MovieLeague},
    commands::{admin, grosses, history, views, CommandContext},
    core::{config::resolve_feed_url, logging::init_logging},
    league::http::build_client,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = MovieLeague::parse();
    init_logging(app.verbose);

    let mut ctx = CommandContext::new(app.db.as_deref()).context("opening league database")?;
    let db = &mut ctx.db;

    match app.command {
        Commands::Leagues { output } => views::handle_leagues(db, output.json)?,

        Commands::League { league_id, output } => {
            views::handle_league(db, league_id, output.json)?
        }

        Commands::Seasons { league_id, output } => {
            views::handle_seasons(db, league_id, output.json)?
        }

        Commands::Season {
            season_id,
            as_of,
            output,
        } => views::handle_season(db, season_id, as_of, output.json)?,

        Commands::Team {
            team_id,
            as_of,
            output,
        } => views::handle_team(db, team_id, as_of, output.json)?,

        Commands::History {
            team_id,
            from,
            to,
            output,
        } => history::handle_history(db, team_id, from, to, output.json)?,

        Commands::Add { cmd } => println!("{}", admin::handle_add(db, cmd)?),

        Commands::Draft { team, movie, price } => {
            println!("{}", admin::handle_draft(db, team, movie, price)?)
        }

        Commands::ImportGrosses { path } => {
            let summary = grosses::import_grosses(db, &path)
                .with_context(|| format!("importing grosses from {}", path.display()))?;
            println!("{}", grosses::describe(&summary));
        }

        Commands::FetchGrosses { source, base_url } => {
            let base_url = resolve_feed_url(base_url)?;
            let client = build_client()?;
            let summary = grosses::fetch_grosses(db, &client, &base_url, &source)
                .await
                .with_context(|| format!("fetching grosses for source {}", source))?;
            println!("{}", grosses::describe(&summary));
        }
    }

    Ok(())
}
