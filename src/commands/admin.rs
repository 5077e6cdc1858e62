//! Record creation commands

use tracing::info;

use crate::{
    cli::AddCmd,
    storage::{models::NewDivision, models::NewGrossUpdate, LeagueDatabase},
    MovieId, Result, TeamId,
};

/// Apply an `add` subcommand and describe what was created
pub fn handle_add(db: &mut LeagueDatabase, cmd: AddCmd) -> Result<String> {
    let message = match cmd {
        AddCmd::User { username } => {
            let user = db.create_user(&username)?;
            format!("Created user {} ({})", user.id, user.username)
        }

        AddCmd::League {
            name,
            commissioner,
            short_description,
            long_description,
        } => {
            let commissioner = db.user_by_name(&commissioner)?;
            let league = db.create_league(
                &name,
                commissioner.id,
                short_description.as_deref(),
                long_description.as_deref(),
            )?;
            format!("Created league {} ({})", league.id, league.name)
        }

        AddCmd::Player { league, username } => {
            let user = db.user_by_name(&username)?;
            if db.add_league_player(league, user.id)? {
                format!("Added {} to league {}", user.username, league)
            } else {
                format!("{} already plays in league {}", user.username, league)
            }
        }

        AddCmd::Season {
            league,
            start,
            end,
            name,
        } => {
            let season = db.create_season(league, name.as_deref(), start, end)?;
            format!("Created season {} ({})", season.id, db.season_label(&season)?)
        }

        AddCmd::Slate { season, movie } => {
            if db.add_movie_to_season(season, movie)? {
                format!("Added movie {} to season {}", movie, season)
            } else {
                format!("Movie {} is already on season {}", movie, season)
            }
        }

        AddCmd::Division {
            season,
            name,
            sort_order,
            currency_unit,
            max_currency,
            promote,
            relegate,
        } => {
            let division = db.create_division(&NewDivision {
                season_id: season,
                name,
                sort_order,
                currency_unit,
                max_currency,
                promotion_count: promote,
                relegation_count: relegate,
            })?;
            format!("Created division {} ({})", division.id, division.name)
        }

        AddCmd::Team { owner, division } => {
            let owner = db.user_by_name(&owner)?;
            let team = db.create_team(owner.id, division)?;
            format!(
                "Created team {} for {} in division {}",
                team.id, owner.username, division
            )
        }

        AddCmd::Movie { name, release_date } => {
            let movie = db.create_movie(&name, release_date)?;
            format!("Created movie {} ({})", movie.id, movie.name)
        }

        AddCmd::Gross {
            movie,
            date,
            gross,
            source,
        } => {
            let update = db.add_gross_update(&NewGrossUpdate {
                movie_id: movie,
                date,
                gross,
                source,
            })?;
            format!(
                "Recorded gross {} for movie {} on {} ({})",
                update.gross, update.movie_id, update.date, update.source
            )
        }

        AddCmd::ExternalId {
            movie,
            source,
            identifier,
        } => {
            let external = db.set_external_id(movie, &source, &identifier)?;
            format!(
                "Movie {} is {} in {}",
                external.movie_id, external.identifier, external.source
            )
        }
    };

    info!("{}", message);
    Ok(message)
}

/// Handle the draft command
pub fn handle_draft(
    db: &mut LeagueDatabase,
    team_id: TeamId,
    movie_id: MovieId,
    price: i64,
) -> Result<String> {
    let membership = db.draft_movie(team_id, movie_id, price)?;
    let movie = db.get_movie(movie_id)?;
    let division = db.get_division(db.get_team(team_id)?.division_id)?;
    let total = db.team_cost(team_id)?;

    Ok(format!(
        "Team {} drafted {} for {} (total {})",
        membership.team_id,
        movie.name,
        crate::core::format_currency(&division.currency_unit, membership.price),
        crate::core::format_currency(&division.currency_unit, total),
    ))
}
