#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use soundview::config;
use soundview::poller::{Poller, PollerConfig};
use soundview::render;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    config::load_configuration().context("Failed to load configuration")?;
    let config = config::get().context("Failed to get configuration")?;

    let interval = Duration::from_millis(config.poll_interval_ms);
    let poller = Arc::new(Poller::new(PollerConfig {
        endpoint: config.api_url.clone(),
        interval,
        request_timeout: Duration::from_secs(8),
    })?);

    println!(
        "📈 Watching {} every {}ms",
        config.api_url, config.poll_interval_ms
    );
    tokio::spawn(Arc::clone(&poller).run());

    // Render on the same cadence as the poller; the snapshot is whatever
    // the latest applied response holds.
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let readings = poller.snapshot();
                let line = render::sparkline(&readings);
                if !line.is_empty() {
                    println!("{}", line);
                }
                println!("{}", render::summary(&readings));
            }
            _ = tokio::signal::ctrl_c() => {
                println!("👋 Stopping watch");
                break;
            }
        }
    }

    Ok(())
}
