#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use soundview::config;
use soundview::config::load_configuration;
use soundview::http::server::run_http_server;
use soundview::http::state::HttpServerState;
use soundview::storage::{DynamoDbStore, RecordStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Level;
use tracing::event;

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    // Initialize tracing subscriber for HTTP request logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    // Load configuration
    load_configuration().context("Failed to load configuration")?;
    let config = config::get().context("Failed to get configuration")?;

    // Initialize Sentry if DSN is provided
    let _sentry = config.sentry_dsn.as_ref().map(|dsn| {
        sentry::init((
            dsn.clone(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    // The store client is built once here and shared by reference with the
    // request handlers.
    println!(
        "🗄️  Connecting to table {} in {}",
        config.table_name, config.aws_region
    );
    let store: Arc<dyn RecordStore> = Arc::new(DynamoDbStore::from_config(&config).await);

    // Exit the program if a panic occurs
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_panic(info);
        std::process::exit(1);
    }));

    let endpoint = config.endpoint;
    let port = config.port;
    let address = SocketAddr::from((endpoint, port));

    println!("📡 Starting HTTP server on {}...", address);
    match run_http_server(
        HttpServerState {
            name: Arc::new("Soundview".to_string()),
            store,
        },
        address,
    )
    .await
    {
        Ok(_) => {
            event!(Level::INFO, "HTTP server stopped gracefully");
            println!("✅ HTTP server stopped gracefully");
            Ok(())
        }
        Err(err) => {
            event!(Level::ERROR, "HTTP server failed to start: {}", err);
            Err(err)
        }
    }
}
