use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for an isolated in-memory SQLite test environment.
///
/// Tables are generated from SeaORM entities and created in the order they are
/// added, so parents must be added before the tables that reference them.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(UserBalance)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues a CREATE TABLE statement for `entity` using SQLite syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table owned by a user record.
    ///
    /// Order: User, UserBalance, LedgerTransfer, UserLevel, UserSettings,
    /// UserProfile. User creation and deletion touch all of them in one transaction.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(UserBalance)
            .with_table(LedgerTransfer)
            .with_table(UserLevel)
            .with_table(UserSettings)
            .with_table(UserProfile)
    }

    /// Adds the user tables plus Guild, GuildSettings, GuildSuggestion,
    /// GuildSupportTicket and GuildUser.
    pub fn with_guild_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Guild)
            .with_table(GuildSettings)
            .with_table(GuildSuggestion)
            .with_table(GuildSupportTicket)
            .with_table(GuildUser)
    }

    /// Adds Giveaway and GiveawayItem.
    pub fn with_giveaway_tables(self) -> Self {
        self.with_table(Giveaway).with_table(GiveawayItem)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connection or CREATE TABLE failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
