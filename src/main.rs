use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_reports::{demo, FeedConfig, OrderStore, SimulatedOrderFeed};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean.
    // Override with RUST_LOG, e.g. RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,order_reports=info")),
        )
        .init();

    let mut store = OrderStore::seeded();
    let feed = SimulatedOrderFeed::new(FeedConfig::default());

    tracing::info!(orders = store.len(), "Starting order report demo");

    let mut stdout = std::io::stdout();
    demo::run_demo(&mut store, &feed, &mut stdout)
        .await
        .context("Failed to write order report")?;

    tracing::info!(orders = store.len(), "Demo complete");

    Ok(())
}
