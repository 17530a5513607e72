use serde::{Serialize, Serializer};

use crate::error::RelayError;

/// The single observable output of a function invocation.
///
/// The watchdog marshals it as `{"status": "200", "message": "..."}`, status
/// being an HTTP-like code carried as a string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FaasResponse {
    #[serde(serialize_with = "status_as_string")]
    status: u16,
    message: String,
}

impl FaasResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(200, message)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RelayError> for FaasResponse {
    fn from(error: RelayError) -> Self {
        Self::new(error.status(), error.to_string())
    }
}

fn status_as_string<S: Serializer>(status: &u16, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(status)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_serializes_exactly_status_and_message() {
        let response = FaasResponse::ok("Successfully Executed Command");
        let value = serde_json::to_value(&response).unwrap();
        let Value::Object(map) = value else {
            panic!("expected an object");
        };
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["message", "status"]);
        assert_eq!(map["status"], "200");
        assert_eq!(map["message"], "Successfully Executed Command");
    }

    #[test]
    fn test_from_relay_error() {
        let response = FaasResponse::from(RelayError::Authentication);
        assert_eq!(response.status(), 401);
        assert_eq!(response.message(), "Invalid Auth");
    }
}
