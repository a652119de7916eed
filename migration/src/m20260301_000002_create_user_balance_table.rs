use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBalance::Table)
                    .if_not_exists()
                    .col(string(UserBalance::UserId).primary_key())
                    .col(big_integer(UserBalance::Balance).default(0))
                    .col(big_integer(UserBalance::NetWorth).default(0))
                    .col(big_integer(UserBalance::Version).default(0))
                    .col(timestamp_with_time_zone_null(
                        UserBalance::DateLastClaimedDailies,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_balance_user_id")
                            .from(UserBalance::Table, UserBalance::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBalance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBalance {
    Table,
    UserId,
    Balance,
    NetWorth,
    Version,
    DateLastClaimedDailies,
}
