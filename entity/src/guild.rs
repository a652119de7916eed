use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub date_created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::guild_settings::Entity")]
    GuildSettings,
    #[sea_orm(has_many = "super::guild_suggestion::Entity")]
    GuildSuggestion,
    #[sea_orm(has_many = "super::guild_support_ticket::Entity")]
    GuildSupportTicket,
    #[sea_orm(has_many = "super::guild_user::Entity")]
    GuildUser,
    #[sea_orm(has_many = "super::referral::Entity")]
    Referral,
}

impl Related<super::guild_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildSettings.def()
    }
}

impl Related<super::guild_suggestion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildSuggestion.def()
    }
}

impl Related<super::guild_support_ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildSupportTicket.def()
    }
}

impl Related<super::guild_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildUser.def()
    }
}

impl Related<super::referral::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referral.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
