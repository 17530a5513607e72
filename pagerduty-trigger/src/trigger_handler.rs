use std::sync::Arc;

use cores::error::RelayError;
use cores::faas_response::FaasResponse;
use cores::lookup::JsonField;
use serde_json::Value;
use tracing::info;

use crate::cloud_event::VmEvent;
use crate::pagerduty_client::{EnqueueRequest, PagerDutyClient};
use crate::runtime_context::RuntimeContext;
use crate::settings::Variant;
use crate::trigger_config::{load_trigger_config, TriggerConfig};

pub struct TriggerHandler {
    runtime_context: Arc<RuntimeContext>,
    pagerduty_client: Arc<PagerDutyClient>,
}

impl TriggerHandler {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let runtime_context = Arc::clone(runtime_context);
        let pagerduty_client = PagerDutyClient::new(&runtime_context);
        let handler = Self {
            runtime_context,
            pagerduty_client,
        };
        Arc::new(handler)
    }

    pub async fn handle_cloud_event(&self, body: &str) -> FaasResponse {
        match self.process(body).await {
            Ok(response) => response,
            Err(error) => {
                info!("pagerduty trigger error {:?}", error);
                error.into()
            }
        }
    }

    fn verbose(&self) -> bool {
        self.runtime_context.settings().variant == Variant::Verbose
    }

    fn stage(&self, title: &str) {
        if self.verbose() {
            info!("----- {} -----", title);
        }
    }

    async fn process(&self, body: &str) -> Result<FaasResponse, RelayError> {
        self.stage("Reading Cloud Event");
        info!("event > {}", body);
        let event: Value = serde_json::from_str(body).map_err(RelayError::Json)?;

        self.stage("Reading Configuration file");
        let config_path = &self.runtime_context.settings().config_path;
        info!("config file > {}", config_path.display());
        let config = load_trigger_config(config_path).await?;

        let request = self.build_request(&event, &config)?;

        self.stage("Attempting HTTP POST");
        let response = self.pagerduty_client.enqueue(&request).await?;
        info!("pagerduty accepted the event status={:?} message={:?}", response.status, response.message);
        let message = format!(
            "Successfully invoked PagerDuty API! dedup_key for this request: {}",
            response.dedup_key
        );
        Ok(FaasResponse::ok(message))
    }

    fn build_request(&self, event: &Value, config: &Value) -> Result<EnqueueRequest, RelayError> {
        match self.runtime_context.settings().variant {
            Variant::Standard => {
                let config = TriggerConfig::from_value(config)?;
                let event = VmEvent::from_value(event)?;
                Ok(EnqueueRequest::new(&event, &config))
            }
            Variant::Verbose => {
                self.stage("Validating Input data");
                info!("event > {}", pretty(event));
                info!("config > {}", pretty(&redacted(config)));
                // the event envelope first, then the configuration, then the event fields
                JsonField::root(event, "Event").field("data")?;
                let config = TriggerConfig::from_value(config)?;
                let event = VmEvent::from_value(event)?;
                let request = EnqueueRequest::new(&event, &config);
                info!("successfully built API request body > {}", pretty(&redacted(&serde_json::to_value(&request).unwrap_or_default())));
                Ok(request)
            }
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// keeps the routing key out of the logs
fn redacted(value: &Value) -> Value {
    let mut value = value.clone();
    if let Some(routing_key) = value.get_mut("routing_key") {
        *routing_key = Value::String("***".into());
    }
    value
}
