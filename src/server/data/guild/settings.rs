use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::guild::{GuildSettings, UpdateGuildSettingsParam};

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, guild_id: &str) -> Result<Option<GuildSettings>, DbErr> {
        let entity = entity::prelude::GuildSettings::find_by_id(guild_id)
            .one(self.db)
            .await?;

        Ok(entity.map(GuildSettings::from_entity))
    }

    /// Replaces the guild's settings, inserting the row if it is missing.
    pub async fn set(
        &self,
        guild_id: &str,
        param: UpdateGuildSettingsParam,
    ) -> Result<GuildSettings, DbErr> {
        let entity =
            entity::prelude::GuildSettings::insert(entity::guild_settings::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                prefix: ActiveValue::Set(param.prefix),
                welcome_message: ActiveValue::Set(param.welcome_message),
                suggestions_channel_id: ActiveValue::Set(param.suggestions_channel_id),
                support_channel_id: ActiveValue::Set(param.support_channel_id),
            })
            .on_conflict(
                OnConflict::column(entity::guild_settings::Column::GuildId)
                    .update_columns([
                        entity::guild_settings::Column::Prefix,
                        entity::guild_settings::Column::WelcomeMessage,
                        entity::guild_settings::Column::SuggestionsChannelId,
                        entity::guild_settings::Column::SupportChannelId,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(GuildSettings::from_entity(entity))
    }
}
