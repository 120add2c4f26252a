//! Response decoding.
//!
//! Turns raw responses into typed records: a status check first, then one
//! of the three body shapes (object, array, newline-delimited stream).

use std::marker::PhantomData;

use reqwest::header::RETRY_AFTER;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::error::ClientError;

/// Lichess error body.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: String,
}

/// Maps a non-success status and its body to an error.
pub(crate) fn error_for_status(
    status: StatusCode,
    retry_after: Option<u64>,
    body: &str,
    path: &str,
) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::NOT_FOUND => ClientError::NotFound(path.to_string()),
        StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited { retry_after },
        _ => {
            let message = serde_json::from_str::<ApiErrorResponse>(body)
                .map(|resp| resp.error)
                .unwrap_or_else(|_| body.trim().to_string());
            ClientError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// Short-circuits non-success responses before any decoding.
///
/// # Errors
///
/// Returns the error matching the status code.
pub(crate) async fn ensure_success(response: Response, path: &str) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok());
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!(error = %err, path, "failed to read error body");
            String::new()
        }
    };

    warn!(status = status.as_u16(), path, "request failed");
    Err(error_for_status(status, retry_after, &body, path))
}

/// Decodes a body holding one JSON value (object or array).
///
/// # Errors
///
/// Returns an error if the body cannot be read or is not valid JSON for `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| ClientError::Deserialization(e.to_string()))?;

    Ok(serde_json::from_slice(&body)?)
}

/// Decodes a newline-delimited body, consuming it to the end.
///
/// # Errors
///
/// Returns an error if a chunk cannot be read or a line is not valid JSON.
pub(crate) async fn read_ndjson<T: DeserializeOwned>(
    mut response: Response,
) -> Result<Vec<T>, ClientError> {
    let mut decoder = NdjsonDecoder::new();
    let mut records = Vec::new();

    while let Some(chunk) = response.chunk().await? {
        decoder.feed(&chunk, &mut records)?;
    }
    decoder.finish(&mut records)?;

    debug!(records = records.len(), "decoded ndjson stream");
    Ok(records)
}

/// Incremental decoder for newline-delimited JSON.
///
/// Bytes are fed in arbitrary chunks. Each complete line is decoded as soon
/// as its newline arrives; blank lines are skipped. [`finish`](Self::finish)
/// decodes a final line that has no trailing newline.
#[derive(Debug)]
pub struct NdjsonDecoder<T> {
    buffer: Vec<u8>,
    line: usize,
    _record: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Default for NdjsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> NdjsonDecoder<T> {
    /// Creates an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            line: 0,
            _record: PhantomData,
        }
    }

    /// Feeds a chunk and appends every completed record to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if a completed line is not valid JSON for `T`.
    pub fn feed(&mut self, chunk: &[u8], out: &mut Vec<T>) -> Result<(), ClientError> {
        self.buffer.extend_from_slice(chunk);

        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.decode_line(&line, out)?;
        }

        Ok(())
    }

    /// Decodes whatever is left in the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the remaining bytes are not valid JSON for `T`.
    pub fn finish(mut self, out: &mut Vec<T>) -> Result<(), ClientError> {
        let rest = std::mem::take(&mut self.buffer);
        self.decode_line(&rest, out)
    }

    /// Returns the number of bytes waiting for a newline.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    fn decode_line(&mut self, line: &[u8], out: &mut Vec<T>) -> Result<(), ClientError> {
        self.line += 1;
        let line = line.trim_ascii();
        if line.is_empty() {
            return Ok(());
        }

        let record = serde_json::from_slice(line).map_err(|e| {
            ClientError::Deserialization(format!("ndjson line {}: {}", self.line, e))
        })?;
        out.push(record);
        Ok(())
    }
}
