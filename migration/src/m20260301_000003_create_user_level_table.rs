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
                    .table(UserLevel::Table)
                    .if_not_exists()
                    .col(string(UserLevel::UserId).primary_key())
                    .col(big_integer(UserLevel::Xp).default(0))
                    .col(integer(UserLevel::Level).default(0))
                    .col(
                        timestamp_with_time_zone(UserLevel::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_level_user_id")
                            .from(UserLevel::Table, UserLevel::UserId)
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
            .drop_table(Table::drop().table(UserLevel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserLevel {
    Table,
    UserId,
    Xp,
    Level,
    Timestamp,
}
