pub mod error;
pub mod faas_response;
pub mod http_client;
pub mod invocation;
pub mod logging;
pub mod lookup;
