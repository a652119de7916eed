//! User service for business logic.
//!
//! Wraps `UserRepository` with existence checks and input validation, turning
//! missing users into `AppError::NotFound` and invalid input into
//! `AppError::BadRequest`. Balance changes are not written here; they go through
//! the transfer engine so they share its versioning, including the level-up
//! reward applied by `set_level`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        ledger::BalanceUpdate,
        user::{
            CreateUserParam, SetLevelParam, UpdateUserParam, User, UserDetails, UserLevel,
            UserProfile, UserSettings,
        },
    },
    service::transfer::TransferEngine,
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a user with its balance, level, settings and profile.
    ///
    /// # Returns
    /// - `Ok(UserDetails)` - User and its owned records
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_details(&self, id: &str) -> Result<UserDetails, AppError> {
        UserRepository::new(self.db)
            .find_details(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Creates a user with a zero balance, level 0, default settings and profile.
    ///
    /// # Arguments
    /// - `param` - Id, name and optional avatar of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Empty id or name, or id already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        if param.id.trim().is_empty() || param.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "User id and name must not be empty".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.exists(&param.id).await? {
            return Err(AppError::BadRequest(format!(
                "User {} already exists",
                param.id
            )));
        }

        Ok(user_repo.create(param).await?)
    }

    /// Updates a user's name and avatar.
    ///
    /// # Arguments
    /// - `id` - Discord id of the user
    /// - `param` - New name and avatar
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: &str, param: UpdateUserParam) -> Result<User, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("User name must not be empty".to_string()));
        }

        UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Deletes a user together with its balance, level, settings and profile.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    pub async fn get_level(&self, id: &str) -> Result<UserLevel, AppError> {
        UserRepository::new(self.db)
            .get_level(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Sets experience and level, first overwriting the balance when a reward is given.
    ///
    /// The reward goes through `engine` so it is a conditional ledger commit and
    /// publishes `balanceUpdated`. Inputs are checked before anything is written,
    /// so a rejected request changes neither the level nor the balance.
    ///
    /// # Arguments
    /// - `engine` - Transfer engine applying the balance overwrite
    /// - `param` - Level, experience and optional `balance`/`net_worth` pair
    ///
    /// # Returns
    /// - `Ok(UserLevel)` - The stored level
    /// - `Err(AppError::BadRequest)` - Negative values, or only one of `balance`/`net_worth`
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::TransferErr)` - The ledger rejected or could not apply the reward
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_level(
        &self,
        engine: &TransferEngine,
        param: SetLevelParam,
    ) -> Result<UserLevel, AppError> {
        let reward = match (param.balance, param.net_worth) {
            (Some(balance), Some(net_worth)) => Some((balance, net_worth)),
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "Balance and net worth must be given together".to_string(),
                ))
            }
        };
        if param.xp < 0 || param.level < 0 || reward.is_some_and(|(balance, _)| balance < 0) {
            return Err(AppError::BadRequest(
                "Experience, level and balance must not be negative".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        self.ensure_exists(&user_repo, &param.user_id).await?;

        if let Some((balance, net_worth)) = reward {
            engine
                .update_balance(BalanceUpdate {
                    user_id: param.user_id.clone(),
                    balance,
                    net_worth,
                    date_last_claimed_dailies: None,
                    expected_version: None,
                })
                .await?;
        }

        Ok(user_repo
            .set_level(&param.user_id, param.xp, param.level)
            .await?)
    }

    pub async fn get_settings(&self, id: &str) -> Result<UserSettings, AppError> {
        UserRepository::new(self.db)
            .get_settings(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    pub async fn set_settings(&self, settings: UserSettings) -> Result<UserSettings, AppError> {
        let user_repo = UserRepository::new(self.db);
        self.ensure_exists(&user_repo, &settings.user_id).await?;

        Ok(user_repo.set_settings(settings).await?)
    }

    pub async fn get_profile(&self, id: &str) -> Result<UserProfile, AppError> {
        UserRepository::new(self.db)
            .get_profile(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    pub async fn set_profile(&self, profile: UserProfile) -> Result<UserProfile, AppError> {
        if profile.background.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Profile background must not be empty".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        self.ensure_exists(&user_repo, &profile.user_id).await?;

        Ok(user_repo.set_profile(profile).await?)
    }

    async fn ensure_exists(&self, user_repo: &UserRepository<'_>, id: &str) -> Result<(), AppError> {
        if !user_repo.exists(id).await? {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

fn user_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::server::{
        data::ledger::SeaOrmLedgerStore,
        service::{notification::SocketHub, transfer::RetryPolicy},
    };
    use test_utils::{builder::TestBuilder, factory};

    fn engine(db: &DatabaseConnection, hub: &SocketHub) -> TransferEngine {
        TransferEngine::new(
            Arc::new(SeaOrmLedgerStore::new(db.clone())),
            Arc::new(hub.clone()),
            RetryPolicy::default(),
        )
    }

    fn level_param(user_id: &str, balance: Option<i64>, net_worth: Option<i64>) -> SetLevelParam {
        SetLevelParam {
            user_id: user_id.to_string(),
            xp: 1200,
            level: 4,
            balance,
            net_worth,
        }
    }

    fn param(id: &str) -> CreateUserParam {
        CreateUserParam {
            id: id.to_string(),
            name: "Kestrel".to_string(),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn rejects_duplicate_user() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        service.create(param("100")).await.unwrap();
        let result = service.create(param("100")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rejects_blank_name() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = UserService::new(db)
            .create(CreateUserParam {
                name: "  ".to_string(),
                ..param("100")
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn reports_missing_user() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        assert!(matches!(
            service.get_details("404").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete("404").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn rejects_negative_level() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();

        let hub = SocketHub::new(8);

        let result = UserService::new(db)
            .set_level(
                &engine(db, &hub),
                SetLevelParam {
                    xp: -1,
                    ..level_param(&user.id, None, None)
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn created_user_has_default_records() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        service.create(param("100")).await.unwrap();
        let details = service.get_details("100").await.unwrap();

        assert_eq!(details.balance.unwrap().balance, 0);
        assert_eq!(details.level.unwrap().level, 0);
        assert!(details.settings.is_some());
        assert!(details.profile.is_some());
    }

    /// Expected: level stored, balance overwritten and `balanceUpdated` published
    #[tokio::test]
    async fn set_level_applies_reward() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let hub = SocketHub::new(8);
        let mut events = hub.subscribe();
        let (user, _) = factory::create_funded_user(db, 100).await.unwrap();

        let level = UserService::new(db)
            .set_level(&engine(db, &hub), level_param(&user.id, Some(150), Some(400)))
            .await
            .unwrap();

        assert_eq!((level.xp, level.level), (1200, 4));
        let details = UserService::new(db).get_details(&user.id).await.unwrap();
        let balance = details.balance.unwrap();
        assert_eq!((balance.balance, balance.net_worth), (150, 400));
        assert_eq!(balance.version, 1);

        let event = events.try_recv().unwrap();
        assert_eq!(event.event, "balanceUpdated");
        assert_eq!(event.data["balance"], 150);
    }

    /// Expected: level stored, account untouched
    #[tokio::test]
    async fn set_level_without_reward_keeps_balance() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let hub = SocketHub::new(8);
        let (user, _) = factory::create_funded_user(db, 100).await.unwrap();

        UserService::new(db)
            .set_level(&engine(db, &hub), level_param(&user.id, None, None))
            .await
            .unwrap();

        let details = UserService::new(db).get_details(&user.id).await.unwrap();
        assert_eq!(details.balance.unwrap().version, 0);
        assert_eq!(details.level.unwrap().level, 4);
    }

    /// Expected: BadRequest and neither level nor balance written
    #[tokio::test]
    async fn set_level_rejects_partial_or_negative_reward() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let hub = SocketHub::new(8);
        let engine = engine(db, &hub);
        let service = UserService::new(db);
        service.create(param("100")).await.unwrap();

        let partial = service
            .set_level(&engine, level_param("100", Some(150), None))
            .await;
        let negative = service
            .set_level(&engine, level_param("100", Some(-1), Some(0)))
            .await;

        assert!(matches!(partial, Err(AppError::BadRequest(_))));
        assert!(matches!(negative, Err(AppError::BadRequest(_))));
        let details = service.get_details("100").await.unwrap();
        assert_eq!(details.balance.unwrap().version, 0);
        assert_eq!(details.level.unwrap().level, 0);
    }

    #[tokio::test]
    async fn set_level_reports_missing_user() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let hub = SocketHub::new(8);

        let result = UserService::new(db)
            .set_level(&engine(db, &hub), level_param("404", Some(1), Some(1)))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
