use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// The file named by `API_CONFIG_PATH` could not be read or parsed.
    #[error("Failed to load API config file {path}: {reason}")]
    ConfigFile { path: String, reason: String },

    /// One of the Discord OAuth endpoints is not a valid URL.
    #[error("Invalid OAuth URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
