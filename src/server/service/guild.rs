//! Guild service covering guilds and their nested settings, suggestions,
//! support tickets and members.
//!
//! Every nested operation first checks that the guild exists so a wrong guild id
//! is reported as a missing guild rather than a missing child record.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        guild::{
            member::GuildMemberRepository, settings::GuildSettingsRepository,
            suggestion::GuildSuggestionRepository, support_ticket::GuildSupportTicketRepository,
            GuildRepository,
        },
        user::UserRepository,
    },
    error::AppError,
    model::guild::{
        CreateGuildMemberParam, CreateGuildParam, CreateSuggestionParam, CreateSupportTicketParam,
        Guild, GuildMember, GuildSettings, GuildSuggestion, GuildSupportTicket, UpdateGuildParam,
        UpdateGuildSettingsParam, UpdateSuggestionParam, UpdateSupportTicketParam,
    },
};

pub struct GuildService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    /// Creates a new GuildService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Guild>, AppError> {
        Ok(GuildRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| guild_not_found(id))
    }

    /// Creates a guild together with its default settings.
    ///
    /// # Arguments
    /// - `param` - Id, name and optional icon of the guild
    ///
    /// # Returns
    /// - `Ok(Guild)` - The created guild
    /// - `Err(AppError::BadRequest)` - Empty id or name, or the id is already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGuildParam) -> Result<Guild, AppError> {
        if param.id.trim().is_empty() || param.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Guild id and name must not be empty".to_string(),
            ));
        }

        let guild_repo = GuildRepository::new(self.db);
        if guild_repo.find_by_id(&param.id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Guild {} already exists",
                param.id
            )));
        }

        Ok(guild_repo.create(param).await?)
    }

    pub async fn update(&self, id: &str, param: UpdateGuildParam) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| guild_not_found(id))
    }

    /// Deletes a guild and everything nested under it.
    ///
    /// # Returns
    /// - `Ok(())` - Guild deleted
    /// - `Err(AppError::NotFound)` - No guild with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !GuildRepository::new(self.db).delete(id).await? {
            return Err(guild_not_found(id));
        }

        Ok(())
    }

    pub async fn get_settings(&self, guild_id: &str) -> Result<GuildSettings, AppError> {
        self.ensure_exists(guild_id).await?;

        GuildSettingsRepository::new(self.db)
            .get(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} has no settings", guild_id)))
    }

    /// Stores a guild's settings.
    ///
    /// # Arguments
    /// - `guild_id` - Discord id of the guild
    /// - `param` - Prefix and the other settings fields
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The stored settings
    /// - `Err(AppError::BadRequest)` - Empty command prefix
    /// - `Err(AppError::NotFound)` - No guild with that id
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_settings(
        &self,
        guild_id: &str,
        param: UpdateGuildSettingsParam,
    ) -> Result<GuildSettings, AppError> {
        if param.prefix.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Command prefix must not be empty".to_string(),
            ));
        }
        self.ensure_exists(guild_id).await?;

        Ok(GuildSettingsRepository::new(self.db)
            .set(guild_id, param)
            .await?)
    }

    pub async fn get_suggestions(&self, guild_id: &str) -> Result<Vec<GuildSuggestion>, AppError> {
        self.ensure_exists(guild_id).await?;

        Ok(GuildSuggestionRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?)
    }

    pub async fn get_suggestion(&self, guild_id: &str, id: i32) -> Result<GuildSuggestion, AppError> {
        self.ensure_exists(guild_id).await?;

        GuildSuggestionRepository::new(self.db)
            .find_in_guild(guild_id, id)
            .await?
            .ok_or_else(|| suggestion_not_found(guild_id, id))
    }

    pub async fn create_suggestion(
        &self,
        param: CreateSuggestionParam,
    ) -> Result<GuildSuggestion, AppError> {
        if param.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Suggestion content must not be empty".to_string(),
            ));
        }
        self.ensure_exists(&param.guild_id).await?;
        self.ensure_user_exists(&param.user_id).await?;

        Ok(GuildSuggestionRepository::new(self.db)
            .create(param)
            .await?)
    }

    pub async fn update_suggestion(
        &self,
        guild_id: &str,
        id: i32,
        param: UpdateSuggestionParam,
    ) -> Result<GuildSuggestion, AppError> {
        self.ensure_exists(guild_id).await?;

        GuildSuggestionRepository::new(self.db)
            .update(guild_id, id, param)
            .await?
            .ok_or_else(|| suggestion_not_found(guild_id, id))
    }

    pub async fn delete_suggestion(&self, guild_id: &str, id: i32) -> Result<(), AppError> {
        self.ensure_exists(guild_id).await?;

        if !GuildSuggestionRepository::new(self.db)
            .delete(guild_id, id)
            .await?
        {
            return Err(suggestion_not_found(guild_id, id));
        }

        Ok(())
    }

    pub async fn get_support_tickets(
        &self,
        guild_id: &str,
    ) -> Result<Vec<GuildSupportTicket>, AppError> {
        self.ensure_exists(guild_id).await?;

        Ok(GuildSupportTicketRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?)
    }

    pub async fn get_support_ticket(
        &self,
        guild_id: &str,
        id: i32,
    ) -> Result<GuildSupportTicket, AppError> {
        self.ensure_exists(guild_id).await?;

        GuildSupportTicketRepository::new(self.db)
            .find_in_guild(guild_id, id)
            .await?
            .ok_or_else(|| ticket_not_found(guild_id, id))
    }

    /// Opens a support ticket on behalf of an existing user.
    ///
    /// # Arguments
    /// - `param` - Guild, user and subject of the ticket
    ///
    /// # Returns
    /// - `Ok(GuildSupportTicket)` - The opened ticket
    /// - `Err(AppError::BadRequest)` - Empty subject
    /// - `Err(AppError::NotFound)` - Guild or user does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_support_ticket(
        &self,
        param: CreateSupportTicketParam,
    ) -> Result<GuildSupportTicket, AppError> {
        if param.subject.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Ticket subject must not be empty".to_string(),
            ));
        }
        self.ensure_exists(&param.guild_id).await?;
        self.ensure_user_exists(&param.user_id).await?;

        Ok(GuildSupportTicketRepository::new(self.db)
            .create(param)
            .await?)
    }

    pub async fn update_support_ticket(
        &self,
        guild_id: &str,
        id: i32,
        param: UpdateSupportTicketParam,
    ) -> Result<GuildSupportTicket, AppError> {
        self.ensure_exists(guild_id).await?;

        GuildSupportTicketRepository::new(self.db)
            .update(guild_id, id, param)
            .await?
            .ok_or_else(|| ticket_not_found(guild_id, id))
    }

    pub async fn delete_support_ticket(&self, guild_id: &str, id: i32) -> Result<(), AppError> {
        self.ensure_exists(guild_id).await?;

        if !GuildSupportTicketRepository::new(self.db)
            .delete(guild_id, id)
            .await?
        {
            return Err(ticket_not_found(guild_id, id));
        }

        Ok(())
    }

    pub async fn get_members(&self, guild_id: &str) -> Result<Vec<GuildMember>, AppError> {
        self.ensure_exists(guild_id).await?;

        Ok(GuildMemberRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?)
    }

    pub async fn get_member(&self, guild_id: &str, user_id: &str) -> Result<GuildMember, AppError> {
        self.ensure_exists(guild_id).await?;

        GuildMemberRepository::new(self.db)
            .find(guild_id, user_id)
            .await?
            .ok_or_else(|| member_not_found(guild_id, user_id))
    }

    /// Adds an existing user to a guild.
    ///
    /// # Arguments
    /// - `param` - Guild id, user id and optional nickname
    ///
    /// # Returns
    /// - `Ok(GuildMember)` - The new membership
    /// - `Err(AppError::NotFound)` - Guild or user does not exist
    /// - `Err(AppError::BadRequest)` - The user is already a member
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn add_member(&self, param: CreateGuildMemberParam) -> Result<GuildMember, AppError> {
        self.ensure_exists(&param.guild_id).await?;
        self.ensure_user_exists(&param.user_id).await?;

        let member_repo = GuildMemberRepository::new(self.db);
        if member_repo
            .find(&param.guild_id, &param.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "User {} is already a member of guild {}",
                param.user_id, param.guild_id
            )));
        }

        Ok(member_repo.create(param).await?)
    }

    /// Sets or clears a member's nickname.
    ///
    /// # Arguments
    /// - `guild_id` - Discord id of the guild
    /// - `user_id` - Discord id of the member
    /// - `nickname` - New nickname, `None` to clear it
    ///
    /// # Returns
    /// - `Ok(GuildMember)` - The updated membership
    /// - `Err(AppError::NotFound)` - Guild missing or user not a member
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_member(
        &self,
        guild_id: &str,
        user_id: &str,
        nickname: Option<String>,
    ) -> Result<GuildMember, AppError> {
        self.ensure_exists(guild_id).await?;

        GuildMemberRepository::new(self.db)
            .update_nickname(guild_id, user_id, nickname)
            .await?
            .ok_or_else(|| member_not_found(guild_id, user_id))
    }

    pub async fn remove_member(&self, guild_id: &str, user_id: &str) -> Result<(), AppError> {
        self.ensure_exists(guild_id).await?;

        if !GuildMemberRepository::new(self.db)
            .delete(guild_id, user_id)
            .await?
        {
            return Err(member_not_found(guild_id, user_id));
        }

        Ok(())
    }

    async fn ensure_exists(&self, guild_id: &str) -> Result<(), AppError> {
        if GuildRepository::new(self.db)
            .find_by_id(guild_id)
            .await?
            .is_none()
        {
            return Err(guild_not_found(guild_id));
        }

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: &str) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        Ok(())
    }
}

fn guild_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Guild {} not found", id))
}

fn suggestion_not_found(guild_id: &str, id: i32) -> AppError {
    AppError::NotFound(format!("Suggestion {} not found in guild {}", id, guild_id))
}

fn ticket_not_found(guild_id: &str, id: i32) -> AppError {
    AppError::NotFound(format!(
        "Support ticket {} not found in guild {}",
        id, guild_id
    ))
}

fn member_not_found(guild_id: &str, user_id: &str) -> AppError {
    AppError::NotFound(format!(
        "User {} is not a member of guild {}",
        user_id, guild_id
    ))
}
