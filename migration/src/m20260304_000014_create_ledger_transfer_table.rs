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
                    .table(LedgerTransfer::Table)
                    .if_not_exists()
                    .col(string(LedgerTransfer::IdempotencyKey).primary_key())
                    .col(string(LedgerTransfer::FromUserId))
                    .col(string(LedgerTransfer::ToUserId))
                    .col(big_integer(LedgerTransfer::Amount))
                    .col(
                        timestamp_with_time_zone(LedgerTransfer::DateApplied)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ledger_transfer_from_user_id")
                            .from(LedgerTransfer::Table, LedgerTransfer::FromUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ledger_transfer_to_user_id")
                            .from(LedgerTransfer::Table, LedgerTransfer::ToUserId)
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
            .drop_table(Table::drop().table(LedgerTransfer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LedgerTransfer {
    Table,
    IdempotencyKey,
    FromUserId,
    ToUserId,
    Amount,
    DateApplied,
}
