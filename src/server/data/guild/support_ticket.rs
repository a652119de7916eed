//! Guild support ticket repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::guild::{
    CreateSupportTicketParam, GuildSupportTicket, UpdateSupportTicketParam,
};

pub struct GuildSupportTicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSupportTicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_guild(&self, guild_id: &str) -> Result<Vec<GuildSupportTicket>, DbErr> {
        let entities = entity::prelude::GuildSupportTicket::find()
            .filter(entity::guild_support_ticket::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::guild_support_ticket::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(GuildSupportTicket::from_entity)
            .collect())
    }

    pub async fn find_in_guild(
        &self,
        guild_id: &str,
        id: i32,
    ) -> Result<Option<GuildSupportTicket>, DbErr> {
        Ok(self
            .find_entity(guild_id, id)
            .await?
            .map(GuildSupportTicket::from_entity))
    }

    /// Opens a new ticket.
    pub async fn create(
        &self,
        param: CreateSupportTicketParam,
    ) -> Result<GuildSupportTicket, DbErr> {
        let entity = entity::guild_support_ticket::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            user_id: ActiveValue::Set(param.user_id),
            subject: ActiveValue::Set(param.subject),
            message: ActiveValue::Set(param.message),
            open: ActiveValue::Set(true),
            date_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GuildSupportTicket::from_entity(entity))
    }

    pub async fn update(
        &self,
        guild_id: &str,
        id: i32,
        param: UpdateSupportTicketParam,
    ) -> Result<Option<GuildSupportTicket>, DbErr> {
        let Some(existing) = self.find_entity(guild_id, id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.subject = ActiveValue::Set(param.subject);
        active.message = ActiveValue::Set(param.message);
        active.open = ActiveValue::Set(param.open);
        let entity = active.update(self.db).await?;

        Ok(Some(GuildSupportTicket::from_entity(entity)))
    }

    pub async fn delete(&self, guild_id: &str, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildSupportTicket::delete_many()
            .filter(entity::guild_support_ticket::Column::GuildId.eq(guild_id))
            .filter(entity::guild_support_ticket::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(
        &self,
        guild_id: &str,
        id: i32,
    ) -> Result<Option<entity::guild_support_ticket::Model>, DbErr> {
        entity::prelude::GuildSupportTicket::find_by_id(id)
            .filter(entity::guild_support_ticket::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }
}
