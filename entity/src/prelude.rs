pub use super::giveaway::Entity as Giveaway;
pub use super::giveaway_item::Entity as GiveawayItem;
pub use super::guild::Entity as Guild;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::guild_suggestion::Entity as GuildSuggestion;
pub use super::guild_support_ticket::Entity as GuildSupportTicket;
pub use super::guild_user::Entity as GuildUser;
pub use super::ledger_transfer::Entity as LedgerTransfer;
pub use super::referral::Entity as Referral;
pub use super::user::Entity as User;
pub use super::user_balance::Entity as UserBalance;
pub use super::user_level::Entity as UserLevel;
pub use super::user_profile::Entity as UserProfile;
pub use super::user_settings::Entity as UserSettings;
