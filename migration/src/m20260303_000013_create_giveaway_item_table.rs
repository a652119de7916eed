use sea_orm_migration::{prelude::*, schema::*};

use super::m20260303_000012_create_giveaway_table::Giveaway;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GiveawayItem::Table)
                    .if_not_exists()
                    .col(pk_auto(GiveawayItem::Id))
                    .col(integer(GiveawayItem::GiveawayId))
                    .col(string(GiveawayItem::Name))
                    .col(string_null(GiveawayItem::Key))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_giveaway_item_giveaway_id")
                            .from(GiveawayItem::Table, GiveawayItem::GiveawayId)
                            .to(Giveaway::Table, Giveaway::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiveawayItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GiveawayItem {
    Table,
    Id,
    GiveawayId,
    Name,
    Key,
}
