#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A message sent to or received from Sendblue.
///
/// For outbound sends `number` is always in E.164 form (the client normalizes
/// it before building the request). For inbound webhook messages `number` is
/// whatever the service sent and is not re-validated.
pub struct Message {
    pub number: String,
    pub content: String,
}

impl Message {
    /// Create a message value.
    pub fn new(number: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            content: content.into(),
        }
    }
}
