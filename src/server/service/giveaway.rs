//! Giveaway service.
//!
//! Giveaways belong to a guild and carry a list of prize items. Item keys are
//! stored as given; hiding them from public output is left to the controller.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{giveaway::GiveawayRepository, guild::GuildRepository},
    error::AppError,
    model::giveaway::{CreateGiveawayParam, Giveaway, GiveawayItemParam, UpdateGiveawayParam},
};

pub struct GiveawayService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GiveawayService<'a> {
    /// Creates a new GiveawayService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GiveawayService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Giveaway>, AppError> {
        Ok(GiveawayRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Giveaway, AppError> {
        GiveawayRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| giveaway_not_found(id))
    }

    /// Creates a giveaway and its items in one transaction.
    ///
    /// # Arguments
    /// - `param` - Giveaway fields and the items to award
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The created giveaway with its items
    /// - `Err(AppError::BadRequest)` - Empty title or an item without a name
    /// - `Err(AppError::NotFound)` - The guild does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGiveawayParam) -> Result<Giveaway, AppError> {
        validate(&param.title, &param.items)?;

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

        Ok(GiveawayRepository::new(self.db).create(param).await?)
    }

    /// Updates a giveaway, replacing all of its items.
    ///
    /// # Arguments
    /// - `id` - Id of the giveaway
    /// - `param` - New fields and the full item list
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The updated giveaway with its new items
    /// - `Err(AppError::BadRequest)` - Empty title or an item without a name
    /// - `Err(AppError::NotFound)` - No giveaway with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateGiveawayParam) -> Result<Giveaway, AppError> {
        validate(&param.title, &param.items)?;

        GiveawayRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| giveaway_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !GiveawayRepository::new(self.db).delete(id).await? {
            return Err(giveaway_not_found(id));
        }

        Ok(())
    }
}

fn validate(title: &str, items: &[GiveawayItemParam]) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Giveaway title must not be empty".to_string(),
        ));
    }
    if items.iter().any(|item| item.name.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "Giveaway items must have a name".to_string(),
        ));
    }

    Ok(())
}

fn giveaway_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Giveaway {} not found", id))
}

#[cfg(test)]
mod test {
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    fn param(guild_id: &str) -> CreateGiveawayParam {
        CreateGiveawayParam {
            guild_id: guild_id.to_string(),
            title: "Summer raffle".to_string(),
            description: None,
            date_end: Utc::now() + Duration::days(3),
            items: vec![GiveawayItemParam {
                name: "Game key".to_string(),
                key: Some("AAAA-BBBB".to_string()),
            }],
        }
    }

    #[tokio::test]
    async fn rejects_giveaway_for_missing_guild() {
        let test = TestBuilder::new()
            .with_guild_tables()
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = GiveawayService::new(db).create(param("missing")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn rejects_unnamed_items() {
        let test = TestBuilder::new()
            .with_guild_tables()
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let guild = factory::create_guild(db).await.unwrap();

        let mut param = param(&guild.id);
        param.items.push(GiveawayItemParam {
            name: " ".to_string(),
            key: None,
        });
        let result = GiveawayService::new(db).create(param).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn creates_giveaway_with_items() {
        let test = TestBuilder::new()
            .with_guild_tables()
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let guild = factory::create_guild(db).await.unwrap();
        let service = GiveawayService::new(db);

        let created = service.create(param(&guild.id)).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched.items.len(), 1);
        assert_eq!(fetched.items[0].key.as_deref(), Some("AAAA-BBBB"));
    }
}
