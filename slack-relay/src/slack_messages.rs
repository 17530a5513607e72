use std::sync::Arc;

use cores::error::RelayError;
use cores::http_client::HttpClient;
use serde::Serialize;

use crate::runtime_context::RuntimeContext;

// https://api.slack.com/interactivity/handling#message_responses
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Ephemeral,
    InChannel,
}

#[derive(Serialize, Debug)]
pub struct SlackMessage {
    pub text: String,
    pub response_type: ResponseType,
}

impl SlackMessage {
    pub fn invalid_auth() -> Self {
        Self {
            text: "Invalid Auth".into(),
            response_type: ResponseType::Ephemeral,
        }
    }

    pub fn acknowledgement(command_text: &str) -> Self {
        Self {
            text: format!("ACK - Processing Command ```{}```", command_text),
            response_type: ResponseType::Ephemeral,
        }
    }

    pub fn no_matching_command() -> Self {
        Self {
            text: "ERR - No matching command".into(),
            response_type: ResponseType::InChannel,
        }
    }
}

/// Posts messages back to the `response_url` of a slash command.
pub struct SlackResponder {
    http_client: Arc<HttpClient>,
}

impl SlackResponder {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let http_client = Arc::clone(runtime_context.http_client());
        let responder = Self {
            http_client,
        };
        Arc::new(responder)
    }

    pub async fn respond(&self, response_url: &str, message: &SlackMessage) -> Result<(), RelayError> {
        self.http_client
            .post_json(response_url, message, "Could not respond to Slack")
            .await?;
        Ok(())
    }
}
