//! Referral service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guild::GuildRepository, referral::ReferralRepository, user::UserRepository},
    error::AppError,
    model::referral::{Referral, ReferralDetails, ReferralParam},
};

pub struct ReferralService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReferralService<'a> {
    /// Creates a new ReferralService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReferralService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Referral>, AppError> {
        Ok(ReferralRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a referral with the user and guild it links.
    pub async fn get_details(&self, id: i32) -> Result<ReferralDetails, AppError> {
        ReferralRepository::new(self.db)
            .find_details(id)
            .await?
            .ok_or_else(|| referral_not_found(id))
    }

    /// Records that a user was referred to a guild.
    ///
    /// # Arguments
    /// - `param` - Referred user and the guild they joined
    ///
    /// # Returns
    /// - `Ok(Referral)` - The created referral
    /// - `Err(AppError::NotFound)` - The user or guild does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: ReferralParam) -> Result<Referral, AppError> {
        self.ensure_targets_exist(&param).await?;

        Ok(ReferralRepository::new(self.db).create(param).await?)
    }

    /// Points a referral at another user or guild.
    ///
    /// # Arguments
    /// - `id` - Id of the referral
    /// - `param` - New user and guild
    ///
    /// # Returns
    /// - `Ok(Referral)` - The updated referral
    /// - `Err(AppError::NotFound)` - The referral, user or guild does not exist
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: ReferralParam) -> Result<Referral, AppError> {
        self.ensure_targets_exist(&param).await?;

        ReferralRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| referral_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReferralRepository::new(self.db).delete(id).await? {
            return Err(referral_not_found(id));
        }

        Ok(())
    }

    async fn ensure_targets_exist(&self, param: &ReferralParam) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(&param.user_id).await? {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                param.user_id
            )));
        }
        if GuildRepository::new(self.db)
            .find_by_id(&param.guild_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Guild {} not found",
                param.guild_id
            )));
        }

        Ok(())
    }
}

fn referral_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Referral {} not found", id))
}
