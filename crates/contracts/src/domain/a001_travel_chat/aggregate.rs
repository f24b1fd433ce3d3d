use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label used when a transcript is exported to text
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "사용자",
            Sender::Bot => "봇",
        }
    }
}

/// Chat message. Never mutated after creation; its position in the
/// transcript is its only identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
