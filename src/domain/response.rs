#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Top-level status of a Sendblue reply.
///
/// Only `"ERROR"` marks a failed send; any other status string the service
/// introduces is preserved as [`Status::Other`] and treated as success.
pub enum Status {
    Ok,
    Error,
    Other(String),
}

impl Status {
    /// Whether this status is the failure sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded reply to a send-message request.
pub struct SendMessageResponse {
    pub status: Status,
    pub error_code: Option<String>,
    /// The number the service actually sent from. May differ from any
    /// display number; empty if the service omitted it.
    pub from_number: String,
    pub message_handle: Option<String>,
}
