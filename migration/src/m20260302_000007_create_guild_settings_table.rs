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
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(string(GuildSettings::GuildId).primary_key())
                    .col(string(GuildSettings::Prefix).default("!"))
                    .col(text_null(GuildSettings::WelcomeMessage))
                    .col(string_null(GuildSettings::SuggestionsChannelId))
                    .col(string_null(GuildSettings::SupportChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_settings_guild_id")
                            .from(GuildSettings::Table, GuildSettings::GuildId)
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
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    GuildId,
    Prefix,
    WelcomeMessage,
    SuggestionsChannelId,
    SupportChannelId,
}
