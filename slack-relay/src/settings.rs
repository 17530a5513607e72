use cores::http_client::HttpSettings;
use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct SlackRelaySettings {
    #[envconfig(from = "SLACK_SIGNING_SECRET")]
    pub signing_secret: String,
    // forwarded as `key` so the automation functions can tell the call came from us
    #[envconfig(from = "SLACK_RELAY_SHARED_KEY")]
    pub shared_key: String,
    #[envconfig(from = "GATEWAY_URL", default = "http://gateway.openfaas:8080")]
    pub gateway_url: String,
    #[envconfig(from = "SLACK_MAX_REQUEST_AGE_SECS")]
    pub max_request_age_secs: Option<u64>,
    #[envconfig(nested = true)]
    pub http: HttpSettings,
}
