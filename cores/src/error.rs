use thiserror::Error;

/// Everything a relay stage can fail with.
///
/// Each variant knows the status it is reported with; handlers convert the
/// error into a [`crate::faas_response::FaasResponse`] exactly once.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid JSON > JSONDecodeError: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Invalid request body > DecodeError: {0}")]
    Form(String),

    #[error("Invalid Auth")]
    Authentication,

    #[error("Could not read configuration > OSError: {0}")]
    ConfigUnreadable(#[source] std::io::Error),

    #[error("Could not load settings > {0}")]
    Settings(String),

    #[error("Invalid JSON, required key not found in the provided {scope} > KeyError: '{key}'")]
    MissingKey { scope: &'static str, key: String },

    #[error("Invalid JSON, missing required data in the provided {scope} > TypeError: '{key}' is {found}, expected {expected}")]
    WrongType {
        scope: &'static str,
        key: String,
        found: &'static str,
        expected: &'static str,
    },

    #[error("{context} > HTTPError: {source}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected error occurred > Exception: {0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn status(&self) -> u16 {
        match self {
            RelayError::Json(_)
            | RelayError::Form(_)
            | RelayError::MissingKey { .. }
            | RelayError::WrongType { .. } => 400,
            RelayError::Authentication => 401,
            RelayError::ConfigUnreadable(_)
            | RelayError::Settings(_)
            | RelayError::Http { .. }
            | RelayError::Unexpected(_) => 500,
        }
    }
}

impl From<envconfig::Error> for RelayError {
    fn from(error: envconfig::Error) -> Self {
        RelayError::Settings(error.to_string())
    }
}
