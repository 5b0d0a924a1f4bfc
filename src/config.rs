use dioxus::prelude::use_context;
use std::time::Duration;

const DEFAULT_IMPORTER_URL: &str = "http://localhost:5000/api";
const DEFAULT_CATALOGUE_URL: &str = "http://localhost:3000/backoffice";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the process environment directly
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the API host exposing the importer service
    pub importer_base_url: String,
    /// Base URL of the catalogue web app, used for document detail links
    pub catalogue_base_url: String,
    /// Seconds between two task status polls
    pub poll_interval_secs: u64,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Config: Dev mode activated - loaded .env file");
        }

        Self::from_env()
    }

    fn from_env() -> Self {
        let importer_base_url = std::env::var("CARREL_IMPORTER_URL")
            .unwrap_or_else(|_| DEFAULT_IMPORTER_URL.to_string());

        let catalogue_base_url = std::env::var("CARREL_CATALOGUE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOGUE_URL.to_string());

        let poll_interval_secs = std::env::var("CARREL_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Self {
            importer_base_url,
            catalogue_base_url,
            poll_interval_secs,
        }
    }

    /// Interval between two `check` calls while a task is running
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Access the loaded configuration from a component
pub fn use_config() -> Config {
    use_context::<Config>()
}
