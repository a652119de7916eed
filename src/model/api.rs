use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Frame sent over the live update socket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocketEventDto {
    pub event: String,
    pub data: serde_json::Value,
}
