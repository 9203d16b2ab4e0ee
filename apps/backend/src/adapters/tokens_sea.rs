//! SeaORM adapter for opaque auth tokens.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::auth_tokens;

pub async fn insert_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    token: String,
) -> Result<auth_tokens::Model, sea_orm::DbErr> {
    let token_active = auth_tokens::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        token: Set(token),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    token_active.insert(conn).await
}

pub async fn find_by_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    token: &str,
) -> Result<Option<auth_tokens::Model>, sea_orm::DbErr> {
    auth_tokens::Entity::find()
        .filter(auth_tokens::Column::Token.eq(token))
        .one(conn)
        .await
}
