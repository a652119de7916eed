//! Guild suggestion repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::guild::{
    CreateSuggestionParam, GuildSuggestion, UpdateSuggestionParam,
};

pub struct GuildSuggestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSuggestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every suggestion of a guild, oldest first.
    pub async fn get_by_guild(&self, guild_id: &str) -> Result<Vec<GuildSuggestion>, DbErr> {
        let entities = entity::prelude::GuildSuggestion::find()
            .filter(entity::guild_suggestion::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::guild_suggestion::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(GuildSuggestion::from_entity)
            .collect())
    }

    /// Finds a suggestion only if it belongs to `guild_id`.
    pub async fn find_in_guild(
        &self,
        guild_id: &str,
        id: i32,
    ) -> Result<Option<GuildSuggestion>, DbErr> {
        Ok(self
            .find_entity(guild_id, id)
            .await?
            .map(GuildSuggestion::from_entity))
    }

    /// Creates a pending suggestion (`approved` is unset).
    pub async fn create(&self, param: CreateSuggestionParam) -> Result<GuildSuggestion, DbErr> {
        let entity = entity::guild_suggestion::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            user_id: ActiveValue::Set(param.user_id),
            content: ActiveValue::Set(param.content),
            approved: ActiveValue::Set(None),
            date_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GuildSuggestion::from_entity(entity))
    }

    pub async fn update(
        &self,
        guild_id: &str,
        id: i32,
        param: UpdateSuggestionParam,
    ) -> Result<Option<GuildSuggestion>, DbErr> {
        let Some(existing) = self.find_entity(guild_id, id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.content = ActiveValue::Set(param.content);
        active.approved = ActiveValue::Set(param.approved);
        let entity = active.update(self.db).await?;

        Ok(Some(GuildSuggestion::from_entity(entity)))
    }

    pub async fn delete(&self, guild_id: &str, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildSuggestion::delete_many()
            .filter(entity::guild_suggestion::Column::GuildId.eq(guild_id))
            .filter(entity::guild_suggestion::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(
        &self,
        guild_id: &str,
        id: i32,
    ) -> Result<Option<entity::guild_suggestion::Model>, DbErr> {
        entity::prelude::GuildSuggestion::find_by_id(id)
            .filter(entity::guild_suggestion::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }
}
