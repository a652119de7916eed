//! Referral repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::{
    guild::Guild,
    referral::{Referral, ReferralDetails, ReferralParam},
    user::User,
};

pub struct ReferralRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferralRepository<'a> {
    /// Creates a new ReferralRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReferralRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all referrals, newest first.
    pub async fn get_all(&self) -> Result<Vec<Referral>, DbErr> {
        let entities = entity::prelude::Referral::find()
            .order_by_desc(entity::referral::Column::DateCreated)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referral::from_entity).collect())
    }

    /// Finds a referral along with its user and guild.
    ///
    /// # Arguments
    /// - `id` - Id of the referral
    ///
    /// # Returns
    /// - `Ok(Some(ReferralDetails))` - Referral found
    /// - `Ok(None)` - No referral with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_details(&self, id: i32) -> Result<Option<ReferralDetails>, DbErr> {
        let Some(referral) = entity::prelude::Referral::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let user = entity::prelude::User::find_by_id(referral.user_id.as_str())
            .one(self.db)
            .await?
            .map(User::from_entity);
        let guild = entity::prelude::Guild::find_by_id(referral.guild_id.as_str())
            .one(self.db)
            .await?
            .map(Guild::from_entity);

        Ok(Some(ReferralDetails {
            referral: Referral::from_entity(referral),
            user,
            guild,
        }))
    }

    /// Creates a referral.
    ///
    /// # Arguments
    /// - `param` - Referred user and the guild they joined
    ///
    /// # Returns
    /// - `Ok(Referral)` - Created referral
    /// - `Err(DbErr)` - Insert failed, e.g. a foreign key is missing
    pub async fn create(&self, param: ReferralParam) -> Result<Referral, DbErr> {
        let entity = entity::referral::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            guild_id: ActiveValue::Set(param.guild_id),
            date_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Referral::from_entity(entity))
    }

    /// Replaces the fields of a referral.
    ///
    /// # Returns
    /// - `Ok(Some(Referral))` - Updated referral
    /// - `Ok(None)` - No referral with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: ReferralParam) -> Result<Option<Referral>, DbErr> {
        let Some(existing) = entity::prelude::Referral::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.user_id = ActiveValue::Set(param.user_id);
        active.guild_id = ActiveValue::Set(param.guild_id);
        let entity = active.update(self.db).await?;

        Ok(Some(Referral::from_entity(entity)))
    }

    /// # Returns
    /// - `Ok(true)` - Referral deleted
    /// - `Ok(false)` - No referral with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Referral::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
