use cores::error::RelayError;
use cores::faas_response::FaasResponse;
use serde_json::Value;
use tracing::{info, warn};

/// Logs whatever the event router delivers. Nothing is forwarded.
pub fn handle_event(body: &str) -> FaasResponse {
    info!("event (raw) > {}", body);
    match serde_json::from_str::<Value>(body) {
        Ok(event) => {
            let pretty = serde_json::to_string_pretty(&event).unwrap_or_else(|_| event.to_string());
            info!("event (JSON) > {}", pretty);
            FaasResponse::ok("Event decoded")
        }
        Err(error) => {
            let error = RelayError::Json(error);
            warn!("{}", error);
            error.into()
        }
    }
}
