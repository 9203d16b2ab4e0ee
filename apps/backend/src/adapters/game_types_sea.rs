//! SeaORM adapter for game types.
//!
//! There is no HTTP endpoint for creating game types; `create_game_type`
//! exists for seeding (tests, ops scripts).

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::game_types;

pub async fn create_game_type<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    label: impl Into<String>,
) -> Result<game_types::Model, sea_orm::DbErr> {
    let game_type_active = game_types::ActiveModel {
        id: NotSet,
        label: Set(label.into()),
    };

    game_type_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_type_id: i64,
) -> Result<Option<game_types::Model>, sea_orm::DbErr> {
    game_types::Entity::find_by_id(game_type_id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<game_types::Model>, sea_orm::DbErr> {
    game_types::Entity::find()
        .order_by_asc(game_types::Column::Id)
        .all(conn)
        .await
}
