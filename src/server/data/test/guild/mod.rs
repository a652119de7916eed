use crate::server::{
    data::guild::{
        member::GuildMemberRepository, settings::GuildSettingsRepository,
        suggestion::GuildSuggestionRepository, support_ticket::GuildSupportTicketRepository,
        GuildRepository,
    },
    model::guild::{
        CreateGuildMemberParam, CreateGuildParam, CreateSuggestionParam,
        CreateSupportTicketParam, UpdateGuildParam, UpdateGuildSettingsParam,
        UpdateSuggestionParam, UpdateSupportTicketParam, DEFAULT_GUILD_PREFIX,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod member;
mod settings;
mod suggestion;
mod support_ticket;
mod update;
