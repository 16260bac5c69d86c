use std::io;

use signalapi::{ReceiveOptions, SignalClient};
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

    let client = SignalClient::new(base_url)?;
    let options = ReceiveOptions {
        timeout: Some(5),
        ignore_attachments: Some(true),
        ..ReceiveOptions::default()
    };
    let messages = client.receive_messages(&number, options).await?;
    println!("received {} message(s)", messages.len());
    for message in &messages {
        println!("{}", message.envelope);
    }

    client.close();
    Ok(())
}
