use std::{fmt, path::PathBuf, str::FromStr};

use cores::http_client::HttpSettings;
use envconfig::Envconfig;

/// The two flavours the trigger function ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Validates the configuration as soon as it is read.
    #[default]
    Standard,
    /// Logs every stage, the event, the configuration and the request body,
    /// and validates configuration keys while mapping the event.
    Verbose,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "verbose" => Ok(Variant::Verbose),
            other => Err(format!("unknown variant {}", other)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Standard => write!(f, "standard"),
            Variant::Verbose => write!(f, "verbose"),
        }
    }
}

#[derive(Envconfig, Clone, Debug)]
pub struct TriggerSettings {
    #[envconfig(from = "PAGERDUTY_API_URL", default = "https://events.pagerduty.com/v2/enqueue")]
    pub api_url: String,
    #[envconfig(from = "PAGERDUTY_CONFIG_PATH", default = "/var/openfaas/secrets/config")]
    pub config_path: PathBuf,
    #[envconfig(from = "PAGERDUTY_VARIANT", default = "standard")]
    pub variant: Variant,
    #[envconfig(nested = true)]
    pub http: HttpSettings,
}
