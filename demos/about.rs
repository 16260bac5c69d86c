use signalapi::SignalClient;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let base_url =
        std::env::var("SIGNAL_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned());

    let client = SignalClient::new(base_url)?;
    let about = client.about().await?;
    println!(
        "version: {}, mode: {}, api versions: {:?}",
        about.version, about.mode, about.versions
    );
    for (endpoint, features) in &about.capabilities {
        println!("  {endpoint}: {}", features.join(", "));
    }

    client.close();
    Ok(())
}
