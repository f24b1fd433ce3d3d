use super::aggregate::Message;
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    /// Transcript as sent, already including the message above
    #[serde(default)]
    pub history: Vec<Message>,
}

/// Response of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}
