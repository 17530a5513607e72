use std::collections::BTreeMap;

use cores::error::RelayError;
use serde::{Deserialize, Serialize};

// https://api.slack.com/interactivity/slash-commands#app_command_handling
#[derive(Deserialize, Debug, Clone)]
pub struct SlashCommand {
    pub text: String,
    pub response_url: String,
    // token, team_id, channel_id, user_name, command, trigger_id, ...
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

pub fn decode_slash_command(body: &str) -> Result<SlashCommand, RelayError> {
    serde_urlencoded::from_str(body).map_err(|e| RelayError::Form(e.to_string()))
}

/// Body forwarded to an automation function: the whole slash command plus
/// the shared key.
#[derive(Serialize, Debug)]
pub struct GatewayCommand<'a> {
    text: &'a str,
    response_url: &'a str,
    #[serde(flatten)]
    fields: BTreeMap<&'a str, &'a str>,
    key: &'a str,
}

impl<'a> GatewayCommand<'a> {
    pub fn new(command: &'a SlashCommand, key: &'a str) -> Self {
        let fields = command.fields.iter()
            .filter(|(name, _)| name.as_str() != "key")
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        Self {
            text: &command.text,
            response_url: &command.response_url,
            fields,
            key,
        }
    }
}
