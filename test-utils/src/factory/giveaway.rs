//! Giveaway factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for a giveaway and its items.
///
/// Defaults: title `"Giveaway"`, ends one day from now, no items.
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    title: String,
    items: Vec<(String, Option<String>)>,
}

impl<'a> GiveawayFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            title: "Giveaway".to_string(),
            items: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds an item with an optional redeemable key.
    pub fn item(mut self, name: impl Into<String>, key: Option<&str>) -> Self {
        self.items.push((name.into(), key.map(str::to_string)));
        self
    }

    pub async fn build(
        self,
    ) -> Result<(entity::giveaway::Model, Vec<entity::giveaway_item::Model>), DbErr> {
        let now = Utc::now();
        let giveaway = entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            date_created: ActiveValue::Set(now),
            date_end: ActiveValue::Set(now + Duration::days(1)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (name, key) in self.items {
            let item = entity::giveaway_item::ActiveModel {
                giveaway_id: ActiveValue::Set(giveaway.id),
                name: ActiveValue::Set(name),
                key: ActiveValue::Set(key),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok((giveaway, items))
    }
}

pub async fn create_giveaway(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::giveaway::Model, DbErr> {
    let (giveaway, _) = GiveawayFactory::new(db, guild_id).build().await?;
    Ok(giveaway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::guild::create_guild;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_giveaway_with_items() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Guild)
            .with_giveaway_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let guild = create_guild(db).await?;

        let (giveaway, items) = GiveawayFactory::new(db, &guild.id)
            .title("Launch")
            .item("Game key", Some("AAAA-BBBB"))
            .item("Sticker", None)
            .build()
            .await?;

        assert_eq!(giveaway.title, "Launch");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.giveaway_id == giveaway.id));
        assert!(giveaway.date_end > giveaway.date_created);

        Ok(())
    }
}
