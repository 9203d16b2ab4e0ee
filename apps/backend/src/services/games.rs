//! Game CRUD orchestration.
//!
//! Referential checks live here so a dangling gameTypeId surfaces as a 400
//! before the insert instead of as a driver-level FK error.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::adapters::{game_types_sea, gamers_sea, games_sea};
use crate::entities::{game_types, gamers, games};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Incoming game fields, already deserialized from the wire shape.
#[derive(Debug, Clone)]
pub struct GameDraft {
    pub title: String,
    pub number_of_players: i32,
    pub description: String,
    pub game_type_id: i64,
}

/// A game joined with the rows its representation nests.
#[derive(Debug, Clone)]
pub struct GameDetails {
    pub game: games::Model,
    pub game_type: game_types::Model,
    pub gamer: gamers::Model,
}

pub async fn create_game(
    conn: &(impl ConnectionTrait + Send + Sync),
    gamer_id: i64,
    draft: GameDraft,
) -> Result<GameDetails, AppError> {
    let game_type = require_game_type(conn, draft.game_type_id).await?;
    let gamer = require_gamer(conn, gamer_id).await?;

    let game = games_sea::create_game(
        conn,
        games_sea::GameCreate {
            title: draft.title,
            number_of_players: draft.number_of_players,
            description: draft.description,
            game_type_id: game_type.id,
            gamer_id: gamer.id,
        },
    )
    .await?;

    debug!(game_id = game.id, gamer_id = gamer.id, "Created game");

    Ok(GameDetails {
        game,
        game_type,
        gamer,
    })
}

pub async fn game_detail(
    conn: &(impl ConnectionTrait + Send + Sync),
    game_id: i64,
) -> Result<GameDetails, AppError> {
    let game = games_sea::find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))?;

    details_for(conn, game).await
}

pub async fn list_games(conn: &(impl ConnectionTrait + Send + Sync)) -> Result<Vec<GameDetails>, AppError> {
    let mut all = Vec::new();
    for game in games_sea::list_all(conn).await? {
        all.push(details_for(conn, game).await?);
    }
    Ok(all)
}

/// Full replacement. The owning gamer never changes on PUT; the row keeps
/// the gamer it was created with.
pub async fn replace_game(
    conn: &(impl ConnectionTrait + Send + Sync),
    game_id: i64,
    draft: GameDraft,
) -> Result<(), AppError> {
    let existing = games_sea::find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))?;
    let game_type = require_game_type(conn, draft.game_type_id).await?;

    games_sea::replace_game(
        conn,
        games_sea::GameReplace {
            id: existing.id,
            title: draft.title,
            number_of_players: draft.number_of_players,
            description: draft.description,
            game_type_id: game_type.id,
            gamer_id: existing.gamer_id,
        },
    )
    .await?;

    Ok(())
}

pub async fn delete_game(conn: &(impl ConnectionTrait + Send + Sync), game_id: i64) -> Result<(), AppError> {
    if !games_sea::delete_game(conn, game_id).await? {
        return Err(game_not_found(game_id));
    }
    Ok(())
}

async fn details_for(
    conn: &(impl ConnectionTrait + Send + Sync),
    game: games::Model,
) -> Result<GameDetails, AppError> {
    // Both lookups are FK-backed; a miss means the data is inconsistent.
    let game_type = game_types_sea::find_by_id(conn, game.game_type_id)
        .await?
        .ok_or_else(|| {
            AppError::internal(format!(
                "game {} references missing game type {}",
                game.id, game.game_type_id
            ))
        })?;
    let gamer = gamers_sea::find_by_id(conn, game.gamer_id)
        .await?
        .ok_or_else(|| {
            AppError::internal(format!(
                "game {} references missing gamer {}",
                game.id, game.gamer_id
            ))
        })?;

    Ok(GameDetails {
        game,
        game_type,
        gamer,
    })
}

async fn require_game_type(
    conn: &(impl ConnectionTrait + Send + Sync),
    game_type_id: i64,
) -> Result<game_types::Model, AppError> {
    game_types_sea::find_by_id(conn, game_type_id)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(
                ErrorCode::GameTypeNotFound,
                format!("Game type with ID {game_type_id} does not exist"),
            )
        })
}

async fn require_gamer(
    conn: &(impl ConnectionTrait + Send + Sync),
    gamer_id: i64,
) -> Result<gamers::Model, AppError> {
    gamers_sea::find_by_id(conn, gamer_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::GamerNotFound,
                format!("Gamer with ID {gamer_id} not found"),
            )
        })
}

fn game_not_found(game_id: i64) -> AppError {
    AppError::not_found(
        ErrorCode::GameNotFound,
        format!("Game with ID {game_id} not found"),
    )
}
