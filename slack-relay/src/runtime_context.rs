use std::sync::Arc;

use cores::error::RelayError;
use cores::http_client::HttpClient;

use crate::settings::SlackRelaySettings;

pub struct RuntimeContext {
    settings: SlackRelaySettings,
    http_client: Arc<HttpClient>,
}

impl RuntimeContext {
    pub fn new(settings: SlackRelaySettings) -> Result<Arc<Self>, RelayError> {
        let http_client = HttpClient::new(&settings.http)?;
        let context = Self {
            settings,
            http_client,
        };
        Ok(Arc::new(context))
    }

    pub fn settings(&self) -> &SlackRelaySettings {
        &self.settings
    }

    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }
}
