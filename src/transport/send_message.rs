use serde::{Deserialize, Serialize};

use crate::domain::{Message, SendMessageResponse, Status};

#[derive(Debug, Clone, Serialize)]
struct SendMessageJsonRequest<'a> {
    number: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct SendMessageJsonResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    from_number: Option<String>,
    #[serde(default)]
    message_handle: Option<String>,
}

/// Encode the outbound request body (`{"number": ..., "content": ...}`).
pub fn encode_send_message_json(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendMessageJsonRequest {
        number: &message.number,
        content: &message.content,
    })
}

/// Decode a send-message reply.
///
/// Every wire field is optional: the service omits `error_code` on success
/// and may omit `from_number`/`message_handle` on failure.
pub fn decode_send_message_json_response(
    body: &str,
) -> Result<SendMessageResponse, serde_json::Error> {
    let parsed: SendMessageJsonResponse = serde_json::from_str(body)?;
    Ok(SendMessageResponse {
        status: status_from_wire(parsed.status),
        error_code: parsed.error_code,
        from_number: parsed.from_number.unwrap_or_default(),
        message_handle: parsed.message_handle,
    })
}

fn status_from_wire(value: Option<String>) -> Status {
    let Some(value) = value else {
        return Status::Other(String::new());
    };
    match value.as_str() {
        "OK" => Status::Ok,
        "ERROR" => Status::Error,
        _ => Status::Other(value),
    }
}
