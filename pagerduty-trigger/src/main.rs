use cores::error::RelayError;
use cores::faas_response::FaasResponse;
use cores::invocation::{emit, read_request_body};
use cores::logging::init_tracing;
use envconfig::Envconfig;

mod cloud_event;
mod pagerduty_client;
mod runtime_context;
mod settings;
mod trigger_config;
mod trigger_handler;

use runtime_context::RuntimeContext;
use settings::TriggerSettings;
use trigger_handler::TriggerHandler;

async fn function_handler(body: &str) -> Result<FaasResponse, RelayError> {
    let settings = TriggerSettings::init_from_env()?;
    tracing::info!("pagerduty trigger variant {}", settings.variant);
    let runtime_context = RuntimeContext::new(settings)?;
    let trigger_handler = TriggerHandler::new(&runtime_context);
    Ok(trigger_handler.handle_cloud_event(body).await)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let body = read_request_body().await?;
    let response = function_handler(&body).await.unwrap_or_else(|error| {
        tracing::info!("pagerduty trigger failed before handling the event {:?}", error);
        error.into()
    });
    emit(&response).await
}
