use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000006_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSuggestion::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildSuggestion::Id))
                    .col(string(GuildSuggestion::GuildId))
                    .col(string(GuildSuggestion::UserId))
                    .col(text(GuildSuggestion::Content))
                    .col(boolean_null(GuildSuggestion::Approved))
                    .col(
                        timestamp_with_time_zone(GuildSuggestion::DateCreated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_suggestion_guild_id")
                            .from(GuildSuggestion::Table, GuildSuggestion::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSuggestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSuggestion {
    Table,
    Id,
    GuildId,
    UserId,
    Content,
    Approved,
    DateCreated,
}
