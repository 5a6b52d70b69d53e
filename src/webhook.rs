//! Inbound webhook decoding.
//!
//! Sendblue pushes inbound messages and delivery events to a caller-supplied
//! HTTP server; this module turns the raw body of such a request into a
//! [`Message`]. Decoding is stateless and independent of the client.

use std::io;

use crate::domain::Message;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`read_webhook`].
pub enum WebhookError {
    /// The request body could not be read to completion.
    #[error("failed to read request body: {0}")]
    Read(#[from] io::Error),

    /// The request body was not a JSON message.
    #[error("failed to decode request body into a message: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read an inbound webhook body to completion and decode it as a [`Message`].
///
/// The reader is taken by value and dropped on every exit path. The message
/// number is passed through as received; no E.164 validation happens on the
/// inbound path. The stream is single-use, so both failure modes are terminal
/// for this call.
pub fn read_webhook<R: io::Read>(mut body: R) -> Result<Message, WebhookError> {
    let mut data = Vec::new();
    body.read_to_end(&mut data)?;
    Ok(crate::transport::decode_webhook_json(&data)?)
}
