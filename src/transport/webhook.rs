use serde::Deserialize;

use crate::domain::Message;

#[derive(Debug, Clone, Deserialize)]
struct WebhookJsonMessage {
    #[serde(default)]
    number: String,
    #[serde(default)]
    content: String,
}

/// Decode an inbound webhook body into a [`Message`].
///
/// Missing fields decode to empty strings; the number is passed through as
/// received, with no format validation.
pub fn decode_webhook_json(data: &[u8]) -> Result<Message, serde_json::Error> {
    let parsed: WebhookJsonMessage = serde_json::from_slice(data)?;
    Ok(Message {
        number: parsed.number,
        content: parsed.content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_message() {
        let message =
            decode_webhook_json(br#"{"number":"+15551234567","content":"hello"}"#).unwrap();
        assert_eq!(message, Message::new("+15551234567", "hello"));
    }

    #[test]
    fn missing_fields_decode_to_empty_strings() {
        let message = decode_webhook_json(b"{}").unwrap();
        assert_eq!(message, Message::new("", ""));
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(decode_webhook_json(b"").is_err());
        assert!(decode_webhook_json(b"not json").is_err());
    }
}
