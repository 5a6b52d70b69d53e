//! Typed Rust client for the Sendblue messaging API.
//!
//! The crate follows a small layered design: a domain layer of strong types,
//! a transport layer for wire-format details, and a client layer orchestrating
//! the single send-message exchange. Inbound webhook bodies are decoded with
//! [`read_webhook`].
//!
//! ```rust,no_run
//! use sendblue::{Credentials, SendblueClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendblue::SendblueError> {
//!     let client = SendblueClient::new(Credentials::new("api-key", "secret-key")?);
//!     let response = client.send_message("555-123-4567", "hello").await?;
//!     println!("sent from {}", response.from_number);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;
pub mod webhook;

pub use client::{Credentials, SendblueClient, SendblueClientBuilder, SendblueError};
pub use domain::{
    ApiKey, Message, PhoneNumber, SecretKey, SendMessageResponse, Status, ValidationError,
};
pub use webhook::{WebhookError, read_webhook};
