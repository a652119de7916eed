//! User data repository.
//!
//! A user owns four rows (balance, level, settings, profile) which are created
//! and deleted together with it inside one transaction. Deleting a user also
//! removes the transfer receipts it appears in.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    ledger::Account,
    user::{
        CreateUserParam, UpdateUserParam, User, UserDetails, UserLevel, UserProfile,
        UserSettings, DEFAULT_PROFILE_BACKGROUND,
    },
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user row without its owned records.
    ///
    /// # Arguments
    /// - `id` - Discord id of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user together with its balance, level, settings and profile.
    ///
    /// # Arguments
    /// - `id` - Discord id of the user
    ///
    /// # Returns
    /// - `Ok(Some(UserDetails))` - User found; owned rows are `None` if missing
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_details(&self, id: &str) -> Result<Option<UserDetails>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let balance = entity::prelude::UserBalance::find_by_id(id)
            .one(self.db)
            .await?
            .map(Account::from_entity);
        let level = self.get_level(id).await?;
        let settings = self.get_settings(id).await?;
        let profile = self.get_profile(id).await?;

        Ok(Some(UserDetails {
            user,
            balance,
            level,
            settings,
            profile,
        }))
    }

    /// Creates a user with a zero balance, level 0, default settings and profile.
    ///
    /// All five rows are written in one transaction.
    ///
    /// # Arguments
    /// - `param` - Id, name and optional avatar of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, e.g. the id is already taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let txn = self.db.begin().await?;
        let user = insert_user_rows(&txn, param).await?;
        txn.commit().await?;

        Ok(user)
    }

    /// Creates the user if missing, otherwise refreshes its name and avatar.
    ///
    /// # Arguments
    /// - `param` - Id, name and avatar reported by Discord
    ///
    /// # Returns
    /// - `Ok((User, true))` - User was created along with its owned rows
    /// - `Ok((User, false))` - Existing user was updated
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: CreateUserParam) -> Result<(User, bool), DbErr> {
        let txn = self.db.begin().await?;

        let result = match entity::prelude::User::find_by_id(param.id.as_str())
            .one(&txn)
            .await?
        {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.name = ActiveValue::Set(param.name);
                active.avatar_url = ActiveValue::Set(param.avatar_url);
                (User::from_entity(active.update(&txn).await?), false)
            }
            None => (insert_user_rows(&txn, param).await?, true),
        };

        txn.commit().await?;

        Ok(result)
    }

    /// Updates name and avatar.
    ///
    /// # Arguments
    /// - `id` - Discord id of the user
    /// - `param` - New name and avatar
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: &str, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.avatar_url = ActiveValue::Set(param.avatar_url);
        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user, every row it owns and the transfer receipts naming it.
    ///
    /// Guild memberships and referrals go through the cascading foreign keys.
    ///
    /// # Arguments
    /// - `id` - Discord id of the user
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::LedgerTransfer::delete_many()
            .filter(
                Condition::any()
                    .add(entity::ledger_transfer::Column::FromUserId.eq(id))
                    .add(entity::ledger_transfer::Column::ToUserId.eq(id)),
            )
            .exec(&txn)
            .await?;
        entity::prelude::UserBalance::delete_by_id(id).exec(&txn).await?;
        entity::prelude::UserLevel::delete_by_id(id).exec(&txn).await?;
        entity::prelude::UserSettings::delete_by_id(id).exec(&txn).await?;
        entity::prelude::UserProfile::delete_by_id(id).exec(&txn).await?;
        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_level(&self, user_id: &str) -> Result<Option<UserLevel>, DbErr> {
        let entity = entity::prelude::UserLevel::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserLevel::from_entity))
    }

    /// Sets xp and level, stamping the current time.
    ///
    /// Inserts the level row if it does not exist yet. The user must exist.
    ///
    /// # Arguments
    /// - `user_id` - Discord id of the user
    /// - `xp` - Total experience
    /// - `level` - Level reached
    ///
    /// # Returns
    /// - `Ok(UserLevel)` - The stored level
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_level(&self, user_id: &str, xp: i64, level: i32) -> Result<UserLevel, DbErr> {
        let entity = entity::prelude::UserLevel::insert(entity::user_level::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            xp: ActiveValue::Set(xp),
            level: ActiveValue::Set(level),
            timestamp: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user_level::Column::UserId)
                .update_columns([
                    entity::user_level::Column::Xp,
                    entity::user_level::Column::Level,
                    entity::user_level::Column::Timestamp,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(UserLevel::from_entity(entity))
    }

    pub async fn get_settings(&self, user_id: &str) -> Result<Option<UserSettings>, DbErr> {
        let entity = entity::prelude::UserSettings::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserSettings::from_entity))
    }

    /// Stores a user's settings, inserting the row if missing.
    ///
    /// # Returns
    /// - `Ok(UserSettings)` - The stored settings
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_settings(&self, settings: UserSettings) -> Result<UserSettings, DbErr> {
        let entity = entity::prelude::UserSettings::insert(entity::user_settings::ActiveModel {
            user_id: ActiveValue::Set(settings.user_id),
            level_notifications: ActiveValue::Set(settings.level_notifications),
            direct_messages: ActiveValue::Set(settings.direct_messages),
        })
        .on_conflict(
            OnConflict::column(entity::user_settings::Column::UserId)
                .update_columns([
                    entity::user_settings::Column::LevelNotifications,
                    entity::user_settings::Column::DirectMessages,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(UserSettings::from_entity(entity))
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, DbErr> {
        let entity = entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserProfile::from_entity))
    }

    /// Stores a user's profile, inserting the row if missing.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The stored profile
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_profile(&self, profile: UserProfile) -> Result<UserProfile, DbErr> {
        let entity = entity::prelude::UserProfile::insert(entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(profile.user_id),
            bio: ActiveValue::Set(profile.bio),
            background: ActiveValue::Set(profile.background),
        })
        .on_conflict(
            OnConflict::column(entity::user_profile::Column::UserId)
                .update_columns([
                    entity::user_profile::Column::Bio,
                    entity::user_profile::Column::Background,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(UserProfile::from_entity(entity))
    }

    /// Checks whether a user with the given id exists.
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

/// Inserts the user row and its four owned rows on `conn`.
async fn insert_user_rows<C: ConnectionTrait>(
    conn: &C,
    param: CreateUserParam,
) -> Result<User, DbErr> {
    let now = Utc::now();

    let user = entity::user::ActiveModel {
        id: ActiveValue::Set(param.id.clone()),
        name: ActiveValue::Set(param.name),
        avatar_url: ActiveValue::Set(param.avatar_url),
        date_created: ActiveValue::Set(now),
    }
    .insert(conn)
    .await?;

    entity::user_balance::ActiveModel {
        user_id: ActiveValue::Set(param.id.clone()),
        balance: ActiveValue::Set(0),
        net_worth: ActiveValue::Set(0),
        version: ActiveValue::Set(0),
        date_last_claimed_dailies: ActiveValue::Set(None),
    }
    .insert(conn)
    .await?;

    entity::user_level::ActiveModel {
        user_id: ActiveValue::Set(param.id.clone()),
        xp: ActiveValue::Set(0),
        level: ActiveValue::Set(0),
        timestamp: ActiveValue::Set(now),
    }
    .insert(conn)
    .await?;

    entity::user_settings::ActiveModel {
        user_id: ActiveValue::Set(param.id.clone()),
        level_notifications: ActiveValue::Set(true),
        direct_messages: ActiveValue::Set(true),
    }
    .insert(conn)
    .await?;

    entity::user_profile::ActiveModel {
        user_id: ActiveValue::Set(param.id),
        bio: ActiveValue::Set(None),
        background: ActiveValue::Set(DEFAULT_PROFILE_BACKGROUND.to_string()),
    }
    .insert(conn)
    .await?;

    Ok(User::from_entity(user))
}
