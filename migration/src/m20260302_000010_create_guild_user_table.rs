use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260302_000006_create_guild_table::Guild,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildUser::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildUser::Id))
                    .col(string(GuildUser::GuildId))
                    .col(string(GuildUser::UserId))
                    .col(string_null(GuildUser::Nickname))
                    .col(
                        timestamp_with_time_zone(GuildUser::DateJoined)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_guild_id")
                            .from(GuildUser::Table, GuildUser::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_user_id")
                            .from(GuildUser::Table, GuildUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guild_user_guild_id_user_id")
                    .table(GuildUser::Table)
                    .col(GuildUser::GuildId)
                    .col(GuildUser::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildUser {
    Table,
    Id,
    GuildId,
    UserId,
    Nickname,
    DateJoined,
}
