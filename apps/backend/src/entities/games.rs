use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_name = "number_of_players")]
    pub number_of_players: i32,
    pub description: String,
    #[sea_orm(column_name = "game_type_id")]
    pub game_type_id: i64,
    #[sea_orm(column_name = "gamer_id")]
    pub gamer_id: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_types::Entity",
        from = "Column::GameTypeId",
        to = "super::game_types::Column::Id"
    )]
    GameType,
    #[sea_orm(
        belongs_to = "super::gamers::Entity",
        from = "Column::GamerId",
        to = "super::gamers::Column::Id"
    )]
    Gamer,
}

impl Related<super::game_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameType.def()
    }
}

impl Related<super::gamers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gamer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
