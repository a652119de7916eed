//! Giveaway repository.
//!
//! A giveaway and its items are always written together. Updating a giveaway
//! replaces its entire item list.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, LoaderTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::giveaway::{
    CreateGiveawayParam, Giveaway, GiveawayItemParam, UpdateGiveawayParam,
};

pub struct GiveawayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayRepository<'a> {
    /// Creates a new GiveawayRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GiveawayRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all giveaways with their items, ordered by end date.
    pub async fn get_all(&self) -> Result<Vec<Giveaway>, DbErr> {
        let giveaways = entity::prelude::Giveaway::find()
            .order_by_asc(entity::giveaway::Column::DateEnd)
            .all(self.db)
            .await?;
        let items = giveaways
            .load_many(entity::prelude::GiveawayItem, self.db)
            .await?;

        Ok(giveaways
            .into_iter()
            .zip(items)
            .map(|(giveaway, items)| Giveaway::from_entity(giveaway, items))
            .collect())
    }

    /// Finds a giveaway with its items.
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))` - Giveaway found
    /// - `Ok(None)` - No giveaway with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Giveaway>, DbErr> {
        load_giveaway(self.db, id).await
    }

    /// Creates the giveaway and all of its items in one transaction.
    ///
    /// # Arguments
    /// - `param` - Giveaway fields and the items to award
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - Created giveaway with its items
    /// - `Err(DbErr)` - Insert failed; nothing was written
    pub async fn create(&self, param: CreateGiveawayParam) -> Result<Giveaway, DbErr> {
        let txn = self.db.begin().await?;

        let giveaway = entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            date_created: ActiveValue::Set(Utc::now()),
            date_end: ActiveValue::Set(param.date_end),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let items = insert_items(&txn, giveaway.id, param.items).await?;

        txn.commit().await?;

        Ok(Giveaway::from_entity(giveaway, items))
    }

    /// Updates the giveaway fields and swaps its items for `param.items`.
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))` - Updated giveaway with its new items
    /// - `Ok(None)` - No giveaway with that id
    pub async fn update(
        &self,
        id: i32,
        param: UpdateGiveawayParam,
    ) -> Result<Option<Giveaway>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Giveaway::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);
        active.date_end = ActiveValue::Set(param.date_end);
        let giveaway = active.update(&txn).await?;

        entity::prelude::GiveawayItem::delete_many()
            .filter(entity::giveaway_item::Column::GiveawayId.eq(id))
            .exec(&txn)
            .await?;
        let items = insert_items(&txn, id, param.items).await?;

        txn.commit().await?;

        Ok(Some(Giveaway::from_entity(giveaway, items)))
    }

    /// Deletes a giveaway together with its items.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::GiveawayItem::delete_many()
            .filter(entity::giveaway_item::Column::GiveawayId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Giveaway::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn load_giveaway<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Giveaway>, DbErr> {
    let Some(giveaway) = entity::prelude::Giveaway::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let items = entity::prelude::GiveawayItem::find()
        .filter(entity::giveaway_item::Column::GiveawayId.eq(id))
        .order_by_asc(entity::giveaway_item::Column::Id)
        .all(conn)
        .await?;

    Ok(Some(Giveaway::from_entity(giveaway, items)))
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    giveaway_id: i32,
    items: Vec<GiveawayItemParam>,
) -> Result<Vec<entity::giveaway_item::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(items.len());

    for item in items {
        let entity = entity::giveaway_item::ActiveModel {
            giveaway_id: ActiveValue::Set(giveaway_id),
            name: ActiveValue::Set(item.name),
            key: ActiveValue::Set(item.key),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        inserted.push(entity);
    }

    Ok(inserted)
}
