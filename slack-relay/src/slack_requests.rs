use std::sync::Arc;
use std::time::Duration;

use cores::error::RelayError;
use cores::faas_response::FaasResponse;
use tracing::info;

use crate::command_routes::route_command;
use crate::runtime_context::RuntimeContext;
use crate::slack_messages::{SlackMessage, SlackResponder};
use crate::slack_verification::{verify_slack_request, SlackHeaders};
use crate::slash_command::{decode_slash_command, GatewayCommand, SlashCommand};

pub struct SlackRequestHandler {
    runtime_context: Arc<RuntimeContext>,
    responder: Arc<SlackResponder>,
}

impl SlackRequestHandler {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let runtime_context = Arc::clone(runtime_context);
        let responder = SlackResponder::new(&runtime_context);
        let handler = Self {
            runtime_context,
            responder,
        };
        Arc::new(handler)
    }

    pub async fn handle_slack_request(&self, body: &str, headers: &SlackHeaders) -> FaasResponse {
        info!("slack slash command request {}", body);
        match self.process(body, headers).await {
            Ok(response) => response,
            Err(error) => {
                info!("slack slash command error {:?}", error);
                error.into()
            }
        }
    }

    async fn process(&self, body: &str, headers: &SlackHeaders) -> Result<FaasResponse, RelayError> {
        let command = decode_slash_command(body)?;
        let settings = self.runtime_context.settings();
        let max_age = settings.max_request_age_secs.map(Duration::from_secs);
        if let Err(error) = verify_slack_request(&settings.signing_secret, headers, body, max_age) {
            info!("slack verification failed {:?}", error);
            self.responder.respond(&command.response_url, &SlackMessage::invalid_auth()).await?;
            return Err(RelayError::Authentication);
        }
        // acknowledge before handing the command over
        self.responder
            .respond(&command.response_url, &SlackMessage::acknowledgement(&command.text))
            .await?;
        self.dispatch(&command).await?;
        Ok(FaasResponse::ok("Successfully Executed Command"))
    }

    async fn dispatch(&self, command: &SlashCommand) -> Result<(), RelayError> {
        info!("attempting command {:?}", command.text);
        let Some(route) = route_command(&command.text) else {
            info!("no matching command for {:?}", command.text);
            return self.responder
                .respond(&command.response_url, &SlackMessage::no_matching_command())
                .await;
        };
        let settings = self.runtime_context.settings();
        let url = route.url(&settings.gateway_url);
        let request_body = GatewayCommand::new(command, &settings.shared_key);
        let response = self.runtime_context.http_client()
            .post_json(&url, &request_body, &route.failure_context())
            .await?;
        let text = response.text().await.map_err(|e| RelayError::Unexpected(e.to_string()))?;
        info!("{} response {:?}", route.function, text);
        Ok(())
    }
}
