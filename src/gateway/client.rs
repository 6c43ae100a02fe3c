//! One-shot line-JSON exchange with the commentary service.

use std::time::Duration;

use anyhow::{ensure, Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::gateway::protocol::{CommentaryRequest, CommentaryResponse};

/// Send one request line and read one response line, bounded by `timeout`.
///
/// Exactly one attempt; any failure bubbles up to the caller, which falls
/// back to a canned line.
pub async fn fetch_line(
    addr: &str,
    request: &CommentaryRequest,
    timeout: Duration,
) -> Result<String> {
    tokio::time::timeout(timeout, exchange(addr, request))
        .await
        .context("commentary request timed out")?
}

async fn exchange(addr: &str, request: &CommentaryRequest) -> Result<String> {
    let mut stream = TcpStream::connect(addr)
        .await
        .context("commentary service unreachable")?;

    let mut payload = serde_json::to_vec(request)?;
    payload.push(b'\n');
    stream.write_all(&payload).await?;

    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    ensure!(n > 0, "commentary service closed the connection");

    let response: CommentaryResponse =
        serde_json::from_str(line.trim()).context("malformed commentary response")?;
    let text = response.text.trim();
    ensure!(!text.is_empty(), "empty commentary text");

    Ok(text.to_string())
}
