use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
    state::OAuth2Client,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Discord OAuth2 login flow.
///
/// Builds the consent URL, exchanges the callback code for an access token and
/// mirrors the Discord account into the local user table.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - HTTP client for the Discord API
    /// - `oauth_client` - Discord OAuth2 client
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord login URL and the CSRF state to verify on callback.
    ///
    /// Only the `identify` scope is requested.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Handles the OAuth2 callback.
    ///
    /// Exchanges the authorization code, fetches the Discord account and creates or
    /// refreshes the matching local user.
    ///
    /// # Arguments
    /// - `authorization_code` - Code Discord passed to the redirect URL
    ///
    /// # Returns
    /// - `Ok((User, true))` - First login, user and its default records created
    /// - `Ok((User, false))` - Returning user, name and avatar refreshed
    /// - `Err(AppError::AuthErr)` - Token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Discord user lookup failed
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn callback(&self, authorization_code: String) -> Result<(User, bool), AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;
        let (user, created) = UserRepository::new(self.db)
            .upsert(CreateUserParam {
                id: discord_user.id.get().to_string(),
                avatar_url: discord_user.avatar_url(),
                name: discord_user.name,
            })
            .await?;

        if created {
            tracing::info!("Created user {} on first login", user.id);
        }

        Ok((user, created))
    }

    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(DISCORD_USER_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}
