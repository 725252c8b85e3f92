//! Inbound message representation.

use serde::{Deserialize, Serialize};

/// A message as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Originating address, when known. Only used for logging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Message text.
    pub body: String,
}

impl InboundMessage {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            sender: None,
            body: body.into(),
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
}

impl From<&str> for InboundMessage {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}
