use std::{sync::Arc, time::Duration};

use envconfig::Envconfig;
use reqwest::{self, Client, Response};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::RelayError;

#[derive(Envconfig, Clone, Debug)]
pub struct HttpSettings {
    // any non-empty value turns certificate verification off
    #[envconfig(from = "insecure_ssl")]
    pub insecure_ssl: Option<String>,
    #[envconfig(from = "HTTP_TIMEOUT_SECS", default = "30")]
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            insecure_ssl: None,
            timeout_secs: 30,
        }
    }
}

impl HttpSettings {
    pub fn accept_invalid_certs(&self) -> bool {
        self.insecure_ssl.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// The HTTP session of one invocation.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> Result<Arc<Self>, RelayError> {
        if settings.accept_invalid_certs() {
            warn!("insecure_ssl is set, TLS certificates will not be verified");
        }
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(settings.accept_invalid_certs())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RelayError::Unexpected(e.to_string()))?;
        let this = Self {
            client,
        };
        Ok(Arc::new(this))
    }

    /// POSTs `body` as JSON. Any transport failure or non-2xx status is
    /// reported as an HTTP error prefixed with `context`.
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T, context: &str) -> Result<Response, RelayError> {
        info!("POST {}", url);
        let response = self.client.post(url)
            .header("Content-type", "application/json; charset=utf-8")
            .json(body)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|source| RelayError::Http {
                context: context.to_owned(),
                source,
            })?;
        info!("POST {} responded {}", url, response.status());
        Ok(response)
    }
}
