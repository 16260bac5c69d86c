use std::io;

use signalapi::{SendMessage, SignalClient};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let base_url =
        std::env::var("SIGNAL_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned());
    let number = std::env::var("SIGNAL_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SIGNAL_NUMBER environment variable is required",
        )
    })?;
    let recipient = std::env::var("SIGNAL_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SIGNAL_RECIPIENT environment variable is required",
        )
    })?;
    let text = std::env::var("SIGNAL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the signalapi demo.".to_owned());

    let client = SignalClient::new(base_url)?;
    let message = SendMessage::new(number, vec![recipient], text);
    let response = client.send_message(&message).await?;
    println!("sent, timestamp: {}", response.timestamp);

    client.close();
    Ok(())
}
