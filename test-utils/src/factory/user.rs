//! User factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for `user` rows.
///
/// Defaults: id `"{n}"`, name `"User {n}"`, no avatar, created now.
///
/// ```rust,ignore
/// let user = UserFactory::new(&db).id("42").name("Alice").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    avatar_url: Option<String>,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: n.to_string(),
            name: format!("User {}", n),
            avatar_url: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Inserts the user.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            avatar_url: ActiveValue::Set(self.avatar_url),
            date_created: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Inserts a user with the given id.
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).id(id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.id.is_empty());
        assert!(user.name.starts_with("User "));
        assert!(user.avatar_url.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .id("123456789")
            .name("Alice")
            .avatar_url("https://cdn.example/a.png")
            .build()
            .await?;

        assert_eq!(user.id, "123456789");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example/a.png"));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_id() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        create_user_with_id(db, "1").await?;
        let result = create_user_with_id(db, "1").await;

        assert!(result.is_err());

        Ok(())
    }
}
