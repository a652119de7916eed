//! Guild data repositories.
//!
//! `GuildRepository` manages the guild row itself and creates its default settings
//! in the same transaction. Nested resources have their own repositories whose
//! lookups always filter on the owning guild id.

pub mod member;
pub mod settings;
pub mod suggestion;
pub mod support_ticket;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder, TransactionTrait,
};

use crate::server::model::guild::{
    CreateGuildParam, Guild, UpdateGuildParam, DEFAULT_GUILD_PREFIX,
};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    /// Creates a new GuildRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Guild>, DbErr> {
        let entities = entity::prelude::Guild::find()
            .order_by_asc(entity::guild::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guild::from_entity).collect())
    }

    /// Finds a guild by its Discord id.
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - Guild found
    /// - `Ok(None)` - No guild with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Guild>, DbErr> {
        let entity = entity::prelude::Guild::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Guild::from_entity))
    }

    /// Creates a guild and its default settings row in one transaction.
    ///
    /// # Arguments
    /// - `param` - Id, name and optional icon of the guild
    ///
    /// # Returns
    /// - `Ok(Guild)` - Created guild
    /// - `Err(DbErr)` - Insert failed, e.g. the id is already taken
    pub async fn create(&self, param: CreateGuildParam) -> Result<Guild, DbErr> {
        let txn = self.db.begin().await?;

        let guild = entity::guild::ActiveModel {
            id: ActiveValue::Set(param.id.clone()),
            name: ActiveValue::Set(param.name),
            icon_url: ActiveValue::Set(param.icon_url),
            date_created: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(param.id),
            prefix: ActiveValue::Set(DEFAULT_GUILD_PREFIX.to_string()),
            welcome_message: ActiveValue::Set(None),
            suggestions_channel_id: ActiveValue::Set(None),
            support_channel_id: ActiveValue::Set(None),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Guild::from_entity(guild))
    }

    /// Updates a guild's name and icon.
    ///
    /// # Arguments
    /// - `id` - Discord id of the guild
    /// - `param` - New name and icon
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - Updated guild
    /// - `Ok(None)` - No guild with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: &str, param: UpdateGuildParam) -> Result<Option<Guild>, DbErr> {
        let Some(existing) = entity::prelude::Guild::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.icon_url = ActiveValue::Set(param.icon_url);
        let entity = active.update(self.db).await?;

        Ok(Some(Guild::from_entity(entity)))
    }

    /// Deletes a guild. Settings, suggestions, tickets, members and referrals
    /// cascade through their foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)` - Guild deleted
    /// - `Ok(false)` - No guild with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Guild::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
