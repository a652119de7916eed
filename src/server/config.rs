use std::{fs, str::FromStr};

use serde::Deserialize;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_TRANSFER_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_TRANSFER_BASE_BACKOFF_MS: u64 = 10;
const DEFAULT_TRANSFER_MAX_BACKOFF_MS: u64 = 250;
const DEFAULT_LEDGER_TIMEOUT_MS: u64 = 2000;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub transfer_max_attempts: u32,
    pub transfer_base_backoff_ms: u64,
    pub transfer_max_backoff_ms: u64,
    pub ledger_timeout_ms: u64,
}

/// Shape of the JSON file named by `API_CONFIG_PATH`.
#[derive(Deserialize)]
struct ApiConfigFile {
    bot: BotCredentials,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BotCredentials {
    client_id: String,
    client_secret: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Discord credentials missing from the environment are read from the JSON
    /// file at `API_CONFIG_PATH` when that variable is set.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let (discord_client_id, discord_client_secret) =
            match (lookup("DISCORD_CLIENT_ID"), lookup("DISCORD_CLIENT_SECRET")) {
                (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => (id, secret),
                _ => match lookup("API_CONFIG_PATH") {
                    Some(path) => {
                        let credentials = read_api_config(&path)?;
                        (credentials.client_id, credentials.client_secret)
                    }
                    None => (
                        required("DISCORD_CLIENT_ID")?,
                        required("DISCORD_CLIENT_SECRET")?,
                    ),
                },
            };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            discord_client_id,
            discord_client_secret,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            transfer_max_attempts: parse_or(
                &lookup,
                "TRANSFER_MAX_ATTEMPTS",
                DEFAULT_TRANSFER_MAX_ATTEMPTS,
            )?,
            transfer_base_backoff_ms: parse_or(
                &lookup,
                "TRANSFER_BASE_BACKOFF_MS",
                DEFAULT_TRANSFER_BASE_BACKOFF_MS,
            )?,
            transfer_max_backoff_ms: parse_or(
                &lookup,
                "TRANSFER_MAX_BACKOFF_MS",
                DEFAULT_TRANSFER_MAX_BACKOFF_MS,
            )?,
            ledger_timeout_ms: parse_or(&lookup, "LEDGER_TIMEOUT_MS", DEFAULT_LEDGER_TIMEOUT_MS)?,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn read_api_config(path: &str) -> Result<BotCredentials, ConfigError> {
    let file_error = |reason: String| ConfigError::ConfigFile {
        path: path.to_string(),
        reason,
    };

    let contents = fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
    let config: ApiConfigFile =
        serde_json::from_str(&contents).map_err(|e| file_error(e.to_string()))?;

    Ok(config.bot)
}
