use std::time::{Duration, SystemTime};

use cores::error::RelayError;
use envconfig::Envconfig;
use hex;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Slack request headers, handed over by the watchdog as `Http_*` variables.
#[derive(Envconfig, Clone, Debug, Default)]
pub struct SlackHeaders {
    #[envconfig(from = "Http_X_Slack_Signature")]
    pub signature: Option<String>,
    #[envconfig(from = "Http_X_Slack_Request_Timestamp")]
    pub timestamp: Option<String>,
}

// https://api.slack.com/authentication/verifying-requests-from-slack
pub fn verify_slack_request(
    signing_secret: &str,
    headers: &SlackHeaders,
    body: &str,
    max_age: Option<Duration>,
) -> Result<(), RelayError> {
    let (Some(signature), Some(timestamp)) = (headers.signature.as_deref(), headers.timestamp.as_deref()) else {
        return Err(RelayError::Authentication);
    };
    if let Some(max_age) = max_age {
        verify_timestamp(timestamp, max_age)?;
    }
    verify_signature(signing_secret, timestamp, body, signature)
}

fn verify_timestamp(timestamp: &str, max_age: Duration) -> Result<(), RelayError> {
    let timestamp: u64 = timestamp.parse().map_err(|_| RelayError::Authentication)?;
    let timestamp = Duration::from_secs(timestamp);
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| RelayError::Unexpected(e.to_string()))?;
    let delta = if now > timestamp { now - timestamp } else { timestamp - now };
    if delta > max_age {
        return Err(RelayError::Authentication);
    }
    Ok(())
}

// https://api.slack.com/authentication/verifying-requests-from-slack#making__validating-a-request
fn verify_signature(signing_secret: &str, timestamp: &str, body: &str, signature_actual: &str) -> Result<(), RelayError> {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .map_err(|e| RelayError::Unexpected(e.to_string()))?;
    let message = ["v0", timestamp, body].join(":");
    mac.update(message.as_bytes());
    let signature_actual = signature_actual
        .strip_prefix("v0=")
        .ok_or(RelayError::Authentication)?;
    let signature_actual = hex::decode(signature_actual).map_err(|_| RelayError::Authentication)?;
    // constant time
    mac.verify_slice(&signature_actual).map_err(|_| RelayError::Authentication)
}

#[cfg(test)]
pub(crate) fn sign(signing_secret: &str, timestamp: &str, body: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes()).unwrap();
    mac.update(format!("v0:{}:{}", timestamp, body).as_bytes());
    ["v0=", &hex::encode(mac.finalize().into_bytes())].join("")
}

#[cfg(test)]
mod test {
    use super::*;

    fn headers(signature: &str, timestamp: &str) -> SlackHeaders {
        SlackHeaders {
            signature: Some(signature.into()),
            timestamp: Some(timestamp.into()),
        }
    }

    fn now() -> String {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            .to_string()
    }

    #[test]
    fn test_verify_works() {
        let signature = sign("foo", "123456789", "bar");
        let result = verify_slack_request("foo", &headers(&signature, "123456789"), "bar", None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_verify_known_vector() {
        // https://api.slack.com/authentication/verifying-requests-from-slack#a_recipe_for_security
        let body = "token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN&trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c";
        let signature = "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503";
        let secret = "8f742231b10e8888abcd99yyyzzz85a5";
        let result = verify_slack_request(secret, &headers(signature, "1531420618"), body, None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_verify_bad_signature() {
        let signature = sign("not foo", "123456789", "bar");
        let result = verify_slack_request("foo", &headers(&signature, "123456789"), "bar", None);
        assert!(matches!(result, Err(RelayError::Authentication)));
    }

    #[test]
    fn test_verify_tampered_body() {
        let signature = sign("foo", "123456789", "bar");
        let result = verify_slack_request("foo", &headers(&signature, "123456789"), "baz", None);
        assert!(matches!(result, Err(RelayError::Authentication)));
    }

    #[test]
    fn test_verify_missing_headers() {
        let result = verify_slack_request("foo", &SlackHeaders::default(), "bar", None);
        assert!(matches!(result, Err(RelayError::Authentication)));
    }

    #[test]
    fn test_verify_malformed_signature() {
        let result = verify_slack_request("foo", &headers("v0=zz", "123456789"), "bar", None);
        assert!(matches!(result, Err(RelayError::Authentication)));
        let result = verify_slack_request("foo", &headers("deadbeef", "123456789"), "bar", None);
        assert!(matches!(result, Err(RelayError::Authentication)));
    }

    #[test]
    fn test_verify_stale_timestamp() {
        let signature = sign("foo", "123456789", "bar");
        let result = verify_slack_request(
            "foo",
            &headers(&signature, "123456789"),
            "bar",
            Some(Duration::from_secs(5 * 60)),
        );
        assert!(matches!(result, Err(RelayError::Authentication)));
    }

    #[test]
    fn test_verify_fresh_timestamp() {
        let timestamp = now();
        let signature = sign("foo", &timestamp, "bar");
        let result = verify_slack_request(
            "foo",
            &headers(&signature, &timestamp),
            "bar",
            Some(Duration::from_secs(5 * 60)),
        );
        assert!(result.is_ok());
    }
}
