use std::io;

use signalapi::SignalClient;
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
    let numbers: Vec<String> = std::env::args().skip(1).collect();
    if numbers.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: search <number> [<number> ...]",
        )
        .into());
    }

    let client = SignalClient::new(base_url)?;
    for result in client.search(&number, &numbers).await? {
        let state = if result.registered { "registered" } else { "not registered" };
        println!("{}: {state}", result.number);
    }

    client.close();
    Ok(())
}
