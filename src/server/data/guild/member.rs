//! Guild membership repository.
//!
//! Members are addressed by `(guild_id, user_id)`, which is unique.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::guild::{CreateGuildMemberParam, GuildMember};

pub struct GuildMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildMemberRepository<'a> {
    /// Creates a new GuildMemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildMemberRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the members of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord id of the guild
    ///
    /// # Returns
    /// - `Ok(Vec<GuildMember>)` - Members of the guild, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guild(&self, guild_id: &str) -> Result<Vec<GuildMember>, DbErr> {
        let entities = entity::prelude::GuildUser::find()
            .filter(entity::guild_user::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::guild_user::Column::DateJoined)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GuildMember::from_entity).collect())
    }

    pub async fn find(&self, guild_id: &str, user_id: &str) -> Result<Option<GuildMember>, DbErr> {
        Ok(self
            .find_entity(guild_id, user_id)
            .await?
            .map(GuildMember::from_entity))
    }

    /// Adds a user to a guild.
    ///
    /// # Arguments
    /// - `param` - Guild id, user id and optional nickname
    ///
    /// # Returns
    /// - `Ok(GuildMember)` - The new membership
    /// - `Err(DbErr)` - Insert failed, including when the user is already a member
    pub async fn create(&self, param: CreateGuildMemberParam) -> Result<GuildMember, DbErr> {
        let entity = entity::guild_user::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            user_id: ActiveValue::Set(param.user_id),
            nickname: ActiveValue::Set(param.nickname),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GuildMember::from_entity(entity))
    }

    /// Sets or clears a member's nickname.
    ///
    /// # Arguments
    /// - `guild_id` - Discord id of the guild
    /// - `user_id` - Discord id of the member
    /// - `nickname` - New nickname, `None` to clear it
    ///
    /// # Returns
    /// - `Ok(Some(GuildMember))` - Updated membership
    /// - `Ok(None)` - User is not a member of the guild
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_nickname(
        &self,
        guild_id: &str,
        user_id: &str,
        nickname: Option<String>,
    ) -> Result<Option<GuildMember>, DbErr> {
        let Some(existing) = self.find_entity(guild_id, user_id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.nickname = ActiveValue::Set(nickname);
        let entity = active.update(self.db).await?;

        Ok(Some(GuildMember::from_entity(entity)))
    }

    /// Removes a user from a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - User was not a member
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: &str, user_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildUser::delete_many()
            .filter(entity::guild_user::Column::GuildId.eq(guild_id))
            .filter(entity::guild_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<Option<entity::guild_user::Model>, DbErr> {
        entity::prelude::GuildUser::find()
            .filter(entity::guild_user::Column::GuildId.eq(guild_id))
            .filter(entity::guild_user::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
