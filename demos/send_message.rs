use std::io;

use sendblue::{Credentials, SendblueClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SENDBLUE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDBLUE_API_KEY environment variable is required",
        )
    })?;
    let secret_key = std::env::var("SENDBLUE_SECRET_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDBLUE_SECRET_KEY environment variable is required",
        )
    })?;
    let to = std::env::var("SENDBLUE_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDBLUE_TO environment variable is required",
        )
    })?;
    let body = std::env::var("SENDBLUE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sendblue example.".to_owned());

    let client = SendblueClient::new(Credentials::new(api_key, secret_key)?);
    let response = client.send_message(&to, &body).await?;
    println!(
        "sent from {} (handle: {:?})",
        response.from_number, response.message_handle
    );

    Ok(())
}
