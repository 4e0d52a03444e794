use chaos_target::{app, config::Config};
use rand::{rngs::StdRng, SeedableRng};
use std::net::{Ipv4Addr, SocketAddr};

const PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // A malformed LATENCY_MS or ERROR_PCT fails startup rather than silently
    // changing the simulated behavior.
    let config = Config::load()?;

    // Seeded once for the whole process; every request draws from it.
    let state = app::AppState::new(config, StdRng::from_entropy())?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        base_delay_ms = config.base_delay_ms,
        failure_percent = config.failure_percent.get(),
        "listening"
    );

    axum::serve(listener, app::router(state)).await?;
    Ok(())
}
