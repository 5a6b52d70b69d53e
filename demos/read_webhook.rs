use std::io;

use sendblue::read_webhook;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message = read_webhook(io::stdin().lock())?;
    println!("from {}: {}", message.number, message.content);
    Ok(())
}
