use std::path::Path;

use cores::error::RelayError;
use cores::lookup::JsonField;
use serde_json::Value;

/// Routing for the PagerDuty Events API, mounted as a function secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    pub routing_key: String,
    pub event_action: String,
    pub custom_details: bool,
}

/// Reads and decodes the configuration file without validating its keys.
pub async fn load_trigger_config(path: &Path) -> Result<Value, RelayError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(RelayError::ConfigUnreadable)?;
    serde_json::from_str(&content).map_err(RelayError::Json)
}

impl TriggerConfig {
    pub fn from_value(value: &Value) -> Result<Self, RelayError> {
        let root = JsonField::root(value, "configuration");
        let routing_key = root.field("routing_key")?.string()?.to_owned();
        let event_action = root.field("event_action")?.string()?.to_owned();
        let custom_details = match root.field("custom_details") {
            Ok(field) => field.boolean()?,
            Err(RelayError::MissingKey { .. }) => false,
            Err(error) => return Err(error),
        };
        Ok(Self {
            routing_key,
            event_action,
            custom_details,
        })
    }
}
