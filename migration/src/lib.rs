pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_user_balance_table;
mod m20260301_000003_create_user_level_table;
mod m20260301_000004_create_user_settings_table;
mod m20260301_000005_create_user_profile_table;
mod m20260302_000006_create_guild_table;
mod m20260302_000007_create_guild_settings_table;
mod m20260302_000008_create_guild_suggestion_table;
mod m20260302_000009_create_guild_support_ticket_table;
mod m20260302_000010_create_guild_user_table;
mod m20260303_000011_create_referral_table;
mod m20260303_000012_create_giveaway_table;
mod m20260303_000013_create_giveaway_item_table;
mod m20260304_000014_create_ledger_transfer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_user_balance_table::Migration),
            Box::new(m20260301_000003_create_user_level_table::Migration),
            Box::new(m20260301_000004_create_user_settings_table::Migration),
            Box::new(m20260301_000005_create_user_profile_table::Migration),
            Box::new(m20260302_000006_create_guild_table::Migration),
            Box::new(m20260302_000007_create_guild_settings_table::Migration),
            Box::new(m20260302_000008_create_guild_suggestion_table::Migration),
            Box::new(m20260302_000009_create_guild_support_ticket_table::Migration),
            Box::new(m20260302_000010_create_guild_user_table::Migration),
            Box::new(m20260303_000011_create_referral_table::Migration),
            Box::new(m20260303_000012_create_giveaway_table::Migration),
            Box::new(m20260303_000013_create_giveaway_item_table::Migration),
            Box::new(m20260304_000014_create_ledger_transfer_table::Migration),
        ]
    }
}
