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
                    .table(GuildSupportTicket::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildSupportTicket::Id))
                    .col(string(GuildSupportTicket::GuildId))
                    .col(string(GuildSupportTicket::UserId))
                    .col(string(GuildSupportTicket::Subject))
                    .col(text(GuildSupportTicket::Message))
                    .col(boolean(GuildSupportTicket::Open).default(true))
                    .col(
                        timestamp_with_time_zone(GuildSupportTicket::DateCreated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_support_ticket_guild_id")
                            .from(GuildSupportTicket::Table, GuildSupportTicket::GuildId)
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
            .drop_table(Table::drop().table(GuildSupportTicket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSupportTicket {
    Table,
    Id,
    GuildId,
    UserId,
    Subject,
    Message,
    Open,
    DateCreated,
}
