use std::sync::Arc;

use cores::error::RelayError;
use cores::http_client::HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::cloud_event::VmEvent;
use crate::runtime_context::RuntimeContext;
use crate::trigger_config::TriggerConfig;

pub const CLIENT_NAME: &str = "VMware Event Broker Appliance";
pub const SEVERITY: &str = "info";

// https://developer.pagerduty.com/docs/events-api-v2/trigger-events/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EnqueueRequest {
    pub payload: EnqueuePayload,
    pub client: String,
    pub client_url: String,
    pub routing_key: String,
    pub event_action: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EnqueuePayload {
    pub summary: String,
    pub timestamp: String,
    pub source: String,
    pub severity: String,
    pub component: String,
    pub group: String,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_details: Option<CustomDetails>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CustomDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(rename = "VM", skip_serializing_if = "Option::is_none")]
    pub vm: Option<Value>,
    #[serde(rename = "Host", skip_serializing_if = "Option::is_none")]
    pub host: Option<Value>,
    #[serde(rename = "Datacenter", skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Value>,
    #[serde(rename = "ComputeResource", skip_serializing_if = "Option::is_none")]
    pub compute_resource: Option<Value>,
}

#[derive(Deserialize, Debug)]
pub struct EnqueueResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub dedup_key: String,
}

impl EnqueueRequest {
    pub fn new(event: &VmEvent, config: &TriggerConfig) -> Self {
        let custom_details = config.custom_details.then(|| CustomDetails {
            user: event.details.user.clone(),
            vm: event.details.vm.clone(),
            host: event.details.host.clone(),
            datacenter: event.details.datacenter.clone(),
            compute_resource: event.details.compute_resource.clone(),
        });
        let payload = EnqueuePayload {
            summary: event.summary.clone(),
            timestamp: event.created_time.clone(),
            source: event.source.clone(),
            severity: SEVERITY.into(),
            component: event.vm_name.clone(),
            group: event.host_name.clone(),
            class: event.subject.clone(),
            custom_details,
        };
        Self {
            payload,
            client: CLIENT_NAME.into(),
            client_url: event.source.clone(),
            routing_key: config.routing_key.clone(),
            event_action: config.event_action.clone(),
        }
    }
}

pub struct PagerDutyClient {
    http_client: Arc<HttpClient>,
    api_url: String,
}

impl PagerDutyClient {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let http_client = Arc::clone(runtime_context.http_client());
        let api_url = runtime_context.settings().api_url.clone();
        let client = Self {
            http_client,
            api_url,
        };
        Arc::new(client)
    }

    // https://developer.pagerduty.com/api-reference/368ae3d938c9e-send-an-event-to-pager-duty
    pub async fn enqueue(&self, request: &EnqueueRequest) -> Result<EnqueueResponse, RelayError> {
        let response = self.http_client
            .post_json(&self.api_url, request, "Could not invoke PagerDuty API")
            .await?;
        let text = response.text().await.map_err(|e| RelayError::Unexpected(e.to_string()))?;
        info!("pagerduty enqueue response {:?}", text);
        serde_json::from_str(&text).map_err(|e| RelayError::Unexpected(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cloud_event::fixtures::VM_POWERED_ON;
    use serde_json::json;

    fn powered_on() -> VmEvent {
        let value: Value = serde_json::from_str(VM_POWERED_ON).unwrap();
        VmEvent::from_value(&value).unwrap()
    }

    fn config(custom_details: bool) -> TriggerConfig {
        TriggerConfig {
            routing_key: "R0UT1NGK3Y".into(),
            event_action: "trigger".into(),
            custom_details,
        }
    }

    #[test]
    fn test_request_envelope() {
        let request = EnqueueRequest::new(&powered_on(), &config(false));
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({
            "payload": {
                "summary": "Test VM on esxi01.pdotk.local in PKLAB has powered on",
                "timestamp": "2020-04-13T23:46:09.387283Z",
                "source": "https://vcsa.pdotk.local/sdk",
                "severity": "info",
                "component": "Test VM",
                "group": "esxi01.pdotk.local",
                "class": "VmPoweredOnEvent",
            },
            "client": "VMware Event Broker Appliance",
            "client_url": "https://vcsa.pdotk.local/sdk",
            "routing_key": "R0UT1NGK3Y",
            "event_action": "trigger",
        }));
    }

    #[test]
    fn test_request_custom_details() {
        let request = EnqueueRequest::new(&powered_on(), &config(true));
        let value = serde_json::to_value(&request).unwrap();
        let details = &value["payload"]["custom_details"];
        assert_eq!(details["user"], "Administrator");
        assert_eq!(details["VM"]["Vm"]["Value"], "vm-33");
        assert_eq!(details["Host"]["Name"], "esxi01.pdotk.local");
        assert_eq!(details["Datacenter"]["Name"], "PKLAB");
        assert_eq!(details["ComputeResource"]["Name"], "esxi01.pdotk.local");
    }
}
