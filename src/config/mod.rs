use anyhow::Error;
use confique::Config;
use std::{
    net::IpAddr,
    sync::{Arc, OnceLock},
};

#[derive(Debug, Config)]
pub struct SoundviewConfig {
    #[config(env = "SOUNDVIEW_PORT", default = 3000)]
    pub port: u16,
    #[config(env = "SOUNDVIEW_ENDPOINT", default = "127.0.0.1")]
    pub endpoint: IpAddr,

    #[config(env = "SOUNDVIEW_HTTP_SERVER_TIMEOUT_SECONDS", default = 30)]
    pub http_server_timeout_seconds: u64,

    #[config(env = "SOUNDVIEW_AWS_REGION", default = "us-east-2")]
    pub aws_region: String,

    #[config(env = "SOUNDVIEW_TABLE_NAME", default = "DeviceData")]
    pub table_name: String,

    /// Tick period of the watch poller.
    #[config(env = "SOUNDVIEW_POLL_INTERVAL_MS", default = 1000)]
    pub poll_interval_ms: u64,

    /// Endpoint the watch poller fetches from.
    #[config(
        env = "SOUNDVIEW_API_URL",
        default = "http://127.0.0.1:3000/api/data"
    )]
    pub api_url: String,

    #[config(env = "SOUNDVIEW_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

impl SoundviewConfig {
    pub fn load() -> Result<SoundviewConfig, Error> {
        let c = SoundviewConfig::builder()
            .env()
            .file("settings.toml")
            .load()?;

        Ok(c)
    }
}

static SOUNDVIEW_CONFIG: OnceLock<Arc<SoundviewConfig>> = OnceLock::new();

pub fn get() -> Result<Arc<SoundviewConfig>, Error> {
    SOUNDVIEW_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

pub fn load_configuration() -> Result<(), Error> {
    // Check if the configuration has already been loaded
    if SOUNDVIEW_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = SoundviewConfig::load()?;
    SOUNDVIEW_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}

use std::sync::Mutex;

// Used by integration tests - must be always available for test compilation
#[allow(dead_code)] // Used by integration tests, not visible in cargo check
static TEST_CONFIG_INIT: Mutex<()> = Mutex::new(());

/// Test-only function to ensure configuration is loaded exactly once per test run
#[allow(dead_code)] // Used by integration tests, not visible in cargo check
pub fn load_configuration_for_tests() -> Result<(), Error> {
    let _guard = TEST_CONFIG_INIT.lock().unwrap();

    if SOUNDVIEW_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = SoundviewConfig::load()?;
    SOUNDVIEW_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config() {
        let config = SoundviewConfig::load().unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.endpoint, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.table_name, "DeviceData");
        assert_eq!(config.aws_region, "us-east-2");

        temp_env::with_var("SOUNDVIEW_PORT", Some("8080"), || {
            let config = SoundviewConfig::load().unwrap();
            assert_eq!(config.port, 8080);
        });

        temp_env::with_var("SOUNDVIEW_TABLE_NAME", Some("OtherTable"), || {
            let config = SoundviewConfig::load().unwrap();
            assert_eq!(config.table_name, "OtherTable");
        });
    }

    #[test]
    #[serial]
    fn test_poller_defaults() {
        let config = SoundviewConfig::load().unwrap();
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.api_url, "http://127.0.0.1:3000/api/data");

        temp_env::with_var("SOUNDVIEW_POLL_INTERVAL_MS", Some("250"), || {
            let config = SoundviewConfig::load().unwrap();
            assert_eq!(config.poll_interval_ms, 250);
        });
    }

    #[test]
    #[serial]
    fn test_load_configuration_populates_the_singleton() {
        load_configuration().unwrap();
        assert!(SOUNDVIEW_CONFIG.get().is_some());

        let config = get().unwrap();
        assert_eq!(config.port, 3000);
    }
}
