//! The assistant chat client.
//!
//! Sends the user's message plus the last five history turns to the
//! chat endpoint. When the endpoint is unreachable or errors, the
//! client degrades to the scripted replies bundled with the demo
//! dataset, and says so: degradation is an explicit outcome the caller
//! can observe and test, never a silently substituted answer.

use std::sync::Arc;

use epiwatch_data::{DemoData, extract_county, extract_disease, scripted_reply};
use epiwatch_types::{ChatMessage, ChatReply, ChatRequest};

use crate::http::ApiClient;

/// Number of history turns sent with each message.
const HISTORY_WINDOW: usize = 5;

/// How a chat exchange concluded.
#[derive(Debug, Clone)]
pub enum ChatOutcome {
    /// The live endpoint answered.
    Live(ChatReply),
    /// The live endpoint failed; the reply is scripted.
    Degraded {
        /// The scripted fallback reply.
        reply: ChatReply,
        /// Why the live endpoint was not used.
        reason: String,
    },
    /// The message could not be sent at all.
    Failed {
        /// Why nothing was sent.
        reason: String,
    },
}

impl ChatOutcome {
    /// The reply, live or scripted, if there is one.
    pub const fn reply(&self) -> Option<&ChatReply> {
        match self {
            Self::Live(reply) | Self::Degraded { reply, .. } => Some(reply),
            Self::Failed { .. } => None,
        }
    }

    /// Whether the live endpoint answered.
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Whether the reply is the scripted fallback.
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Chat client with scripted fallback.
#[derive(Debug, Clone)]
pub struct ChatClient {
    api: ApiClient,
    fallback: Arc<DemoData>,
}

impl ChatClient {
    /// Wrap a client and the dataset backing the fallback replies.
    pub const fn new(api: ApiClient, fallback: Arc<DemoData>) -> Self {
        Self { api, fallback }
    }

    /// Send a message with recent history and classify the outcome.
    pub async fn send(&self, message: &str, history: &[ChatMessage]) -> ChatOutcome {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return ChatOutcome::Failed {
                reason: "message is empty".to_owned(),
            };
        }

        let recent_start = history.len().saturating_sub(HISTORY_WINDOW);
        let request = ChatRequest {
            message: trimmed.to_owned(),
            county: extract_county(trimmed),
            disease: extract_disease(trimmed),
            history: history.get(recent_start..).unwrap_or_default().to_vec(),
        };

        match self.api.post::<ChatReply, _>("/api/chat", &request).await {
            Ok(reply) => ChatOutcome::Live(reply),
            Err(err) => {
                tracing::warn!(%err, "chat endpoint unavailable, serving scripted reply");
                ChatOutcome::Degraded {
                    reply: scripted_reply(&self.fallback, trimmed),
                    reason: err.to_string(),
                }
            }
        }
    }
}
