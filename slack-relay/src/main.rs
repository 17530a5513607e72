use cores::error::RelayError;
use cores::faas_response::FaasResponse;
use cores::invocation::{emit, read_request_body};
use cores::logging::init_tracing;
use envconfig::Envconfig;

mod command_routes;
mod runtime_context;
mod settings;
mod slack_messages;
mod slack_requests;
mod slack_verification;
mod slash_command;

use runtime_context::RuntimeContext;
use settings::SlackRelaySettings;
use slack_requests::SlackRequestHandler;
use slack_verification::SlackHeaders;

async fn function_handler(body: &str) -> Result<FaasResponse, RelayError> {
    let settings = SlackRelaySettings::init_from_env()?;
    let headers = SlackHeaders::init_from_env()?;
    let runtime_context = RuntimeContext::new(settings)?;
    let request_handler = SlackRequestHandler::new(&runtime_context);
    Ok(request_handler.handle_slack_request(body, &headers).await)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let body = read_request_body().await?;
    let response = function_handler(&body).await.unwrap_or_else(|error| {
        tracing::info!("slack relay failed before handling the command {:?}", error);
        error.into()
    });
    emit(&response).await
}
