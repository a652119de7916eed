//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through axum's
//! state extraction. Every field is cheap to clone: the database connection is a
//! pool, the HTTP and OAuth2 clients are reference counted internally, and the
//! notification sink and ledger store sit behind `Arc`.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::{
    notification::{NotificationSink, SocketHub},
    transfer::TransferEngine,
};

/// OAuth2 client with the authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for Discord API calls; does not follow redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Destination of post-commit events published by the controllers.
    pub notifier: Arc<dyn NotificationSink>,

    /// Broadcast hub the socket handler subscribes to.
    pub socket_hub: SocketHub,

    /// Transfer engine over the SQLite ledger, publishing to `notifier`.
    pub transfer_engine: TransferEngine,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        socket_hub: SocketHub,
        transfer_engine: TransferEngine,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            notifier: Arc::new(socket_hub.clone()),
            socket_hub,
            transfer_engine,
        }
    }
}
