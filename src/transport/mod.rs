//! Transport layer: wire-format details (serialization/deserialization).

mod send_message;
mod webhook;

pub use send_message::{decode_send_message_json_response, encode_send_message_json};
pub use webhook::decode_webhook_json;
