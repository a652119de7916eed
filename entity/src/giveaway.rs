use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "giveaway")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date_created: DateTimeUtc,
    pub date_end: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::giveaway_item::Entity")]
    GiveawayItem,
}

impl Related<super::giveaway_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiveawayItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
