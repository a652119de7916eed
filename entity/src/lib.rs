//! SeaORM entity models for the Nightwatch API database.

pub mod prelude;

pub mod giveaway;
pub mod giveaway_item;
pub mod guild;
pub mod guild_settings;
pub mod guild_suggestion;
pub mod guild_support_ticket;
pub mod guild_user;
pub mod ledger_transfer;
pub mod referral;
pub mod user;
pub mod user_balance;
pub mod user_level;
pub mod user_profile;
pub mod user_settings;
