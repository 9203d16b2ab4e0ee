//! SeaORM adapter for the game repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameReplace};

// Adapter functions return DbErr; services map to AppError.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or return RecordNotFound error.
///
/// Convenience helper that converts `None` into `DbErr::RecordNotFound`,
/// eliminating the repetitive `ok_or_else` pattern when a game must exist.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        number_of_players: Set(dto.number_of_players),
        description: Set(dto.description),
        game_type_id: Set(dto.game_type_id),
        gamer_id: Set(dto.gamer_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Overwrite every mutable column of an existing game.
pub async fn replace_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameReplace,
) -> Result<games::Model, sea_orm::DbErr> {
    let existing = require_game(conn, dto.id).await?;

    let mut game_active: games::ActiveModel = existing.into();
    game_active.title = Set(dto.title);
    game_active.number_of_players = Set(dto.number_of_players);
    game_active.description = Set(dto.description);
    game_active.game_type_id = Set(dto.game_type_id);
    game_active.gamer_id = Set(dto.gamer_id);
    game_active.updated_at = Set(time::OffsetDateTime::now_utc());

    game_active.update(conn).await
}

/// Delete a game; `Ok(false)` when no row had the given id.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let result = games::Entity::delete_by_id(game_id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
