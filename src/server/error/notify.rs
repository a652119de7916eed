use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// No socket client is currently listening. Not a failure for callers.
    #[error("No subscribers connected")]
    NoSubscribers,

    #[error("Failed to serialize event payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
