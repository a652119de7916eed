use std::sync::Arc;

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::ledger::SeaOrmLedgerStore,
    error::{config::ConfigError, AppError},
    service::{
        notification::SocketHub,
        transfer::{RetryPolicy, TransferEngine},
    },
    state::OAuth2Client,
};

/// Events buffered per socket client before a slow client starts skipping.
const SOCKET_EVENT_CAPACITY: usize = 256;

/// Connects to the SQLite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// HTTP client for Discord API calls. Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = oauth2::basic::BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(ConfigError::from)?)
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone()).map_err(ConfigError::from)?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(ConfigError::from)?,
        );

    Ok(client)
}

pub fn setup_socket_hub() -> SocketHub {
    SocketHub::new(SOCKET_EVENT_CAPACITY)
}

/// Builds the transfer engine over the SQLite ledger, publishing to `socket_hub`.
pub fn setup_transfer_engine(
    config: &Config,
    db: &DatabaseConnection,
    socket_hub: &SocketHub,
) -> TransferEngine {
    let policy = RetryPolicy::from_config(config);
    tracing::debug!(
        max_attempts = policy.max_attempts,
        store_timeout_ms = config.ledger_timeout_ms,
        "Configured transfer retry policy"
    );

    TransferEngine::new(
        Arc::new(SeaOrmLedgerStore::new(db.clone())),
        Arc::new(socket_hub.clone()),
        policy,
    )
}
