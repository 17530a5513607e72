use cores::invocation::{emit, read_request_body};
use cores::logging::init_tracing;

mod echo_handler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let body = read_request_body().await?;
    let response = echo_handler::handle_event(&body);
    emit(&response).await
}
