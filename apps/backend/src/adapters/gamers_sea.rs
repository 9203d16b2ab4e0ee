//! SeaORM adapter for gamer profiles.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::gamers;

#[derive(Debug, Clone)]
pub struct GamerCreate {
    pub user_id: i64,
    pub bio: String,
    pub address: String,
    pub phone_number: String,
}

pub async fn create_gamer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GamerCreate,
) -> Result<gamers::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let gamer_active = gamers::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        bio: Set(dto.bio),
        address: Set(dto.address),
        phone_number: Set(dto.phone_number),
        created_at: Set(now),
        updated_at: Set(now),
    };

    gamer_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gamer_id: i64,
) -> Result<Option<gamers::Model>, sea_orm::DbErr> {
    gamers::Entity::find_by_id(gamer_id).one(conn).await
}

pub async fn find_by_user_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<gamers::Model>, sea_orm::DbErr> {
    gamers::Entity::find()
        .filter(gamers::Column::UserId.eq(user_id))
        .one(conn)
        .await
}
