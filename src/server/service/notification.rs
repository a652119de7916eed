//! Post-commit event delivery to live socket clients.
//!
//! Services and controllers publish through the `NotificationSink` trait; the
//! running server wires in a `SocketHub`, tests use recording sinks. Publishing
//! never fails the operation that triggered it.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::{model::api::SocketEventDto, server::error::notify::NotifyError};

/// Socket event names.
pub mod events {
    pub const BALANCE_UPDATED: &str = "balanceUpdated";

    pub const USER_CREATED: &str = "userCreated";
    pub const USER_UPDATED: &str = "userUpdated";
    pub const USER_DELETED: &str = "userDeleted";
    pub const USER_LEVEL_UPDATED: &str = "userLevelUpdated";
    pub const USER_PROFILE_UPDATED: &str = "userProfileUpdated";
    pub const USER_SETTINGS_UPDATED: &str = "userSettingsUpdated";

    pub const GUILD_CREATED: &str = "guildCreated";
    pub const GUILD_UPDATED: &str = "guildUpdated";
    pub const GUILD_DELETED: &str = "guildDeleted";
    pub const GUILD_SETTINGS_UPDATED: &str = "guildSettingsUpdated";
    pub const GUILD_SUGGESTION_CREATED: &str = "guildSuggestionCreated";
    pub const GUILD_SUGGESTION_UPDATED: &str = "guildSuggestionUpdated";
    pub const GUILD_SUGGESTION_DELETED: &str = "guildSuggestionDeleted";
    pub const GUILD_SUPPORT_TICKET_CREATED: &str = "guildSupportTicketCreated";
    pub const GUILD_SUPPORT_TICKET_UPDATED: &str = "guildSupportTicketUpdated";
    pub const GUILD_SUPPORT_TICKET_DELETED: &str = "guildSupportTicketDeleted";
    pub const GUILD_USER_CREATED: &str = "guildUserCreated";
    pub const GUILD_USER_UPDATED: &str = "guildUserUpdated";
    pub const GUILD_USER_DELETED: &str = "guildUserDeleted";

    pub const REFERRAL_CREATED: &str = "referralCreated";
    pub const REFERRAL_UPDATED: &str = "referralUpdated";
    pub const REFERRAL_DELETED: &str = "referralDeleted";

    pub const GIVEAWAY_CREATED: &str = "giveawayCreated";
    pub const GIVEAWAY_UPDATED: &str = "giveawayUpdated";
    pub const GIVEAWAY_DELETED: &str = "giveawayDeleted";

    /// Greeting sent to each socket client right after it connects.
    pub const DEBUG: &str = "debug";
}

/// Destination for post-commit events.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, event: &str, payload: serde_json::Value) -> Result<(), NotifyError>;
}

/// Serializes `payload` and publishes it, logging instead of returning failures.
///
/// Having no connected socket client is normal and only logged at debug level.
pub fn publish_event<T: Serialize>(sink: &dyn NotificationSink, event: &str, payload: &T) {
    let result = serde_json::to_value(payload)
        .map_err(NotifyError::from)
        .and_then(|value| sink.publish(event, value));

    match result {
        Ok(()) => tracing::debug!(event, "Published event"),
        Err(NotifyError::NoSubscribers) => {
            tracing::debug!(event, "No socket subscribers for event")
        }
        Err(err) => tracing::warn!(event, "Failed to publish event: {}", err),
    }
}

/// Fan-out of events to every connected socket client.
///
/// Clients that fall more than `capacity` events behind skip the missed events.
#[derive(Clone)]
pub struct SocketHub {
    sender: broadcast::Sender<SocketEventDto>,
}

impl SocketHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SocketEventDto> {
        self.sender.subscribe()
    }
}

impl NotificationSink for SocketHub {
    fn publish(&self, event: &str, payload: serde_json::Value) -> Result<(), NotifyError> {
        self.sender
            .send(SocketEventDto {
                event: event.to_string(),
                data: payload,
            })
            .map(|_| ())
            .map_err(|_| NotifyError::NoSubscribers)
    }
}
