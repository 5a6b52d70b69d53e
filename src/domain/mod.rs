//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod response;
mod validation;
mod value;

pub use message::Message;
pub use response::{SendMessageResponse, Status};
pub use validation::ValidationError;
pub use value::{ApiKey, PhoneNumber, SecretKey};
