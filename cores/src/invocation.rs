use anyhow::Result;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

use crate::faas_response::FaasResponse;

/// Reads the raw request body the watchdog pipes to stdin.
pub async fn read_request_body() -> Result<String> {
    let mut body = String::new();
    io::stdin().read_to_string(&mut body).await?;
    Ok(body)
}

/// Writes the invocation result to stdout as a single JSON line.
pub async fn emit(response: &FaasResponse) -> Result<()> {
    let mut line = serde_json::to_string(response)?;
    line.push('\n');
    let mut stdout = io::stdout();
    stdout.write_all(line.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
