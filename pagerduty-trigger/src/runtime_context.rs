use std::sync::Arc;

use cores::error::RelayError;
use cores::http_client::HttpClient;

use crate::settings::TriggerSettings;

pub struct RuntimeContext {
    settings: TriggerSettings,
    http_client: Arc<HttpClient>,
}

impl RuntimeContext {
    pub fn new(settings: TriggerSettings) -> Result<Arc<Self>, RelayError> {
        let http_client = HttpClient::new(&settings.http)?;
        let context = Self {
            settings,
            http_client,
        };
        Ok(Arc::new(context))
    }

    pub fn settings(&self) -> &TriggerSettings {
        &self.settings
    }

    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }
}
