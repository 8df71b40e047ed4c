/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use snapfeed_storage::Deadlines;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_store")]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Deadline for single-document reads and inserts
    #[serde(default = "default_operation_timeout_secs")]
    pub operation_timeout_secs: u64,

    /// Deadline for whole-collection scans
    #[serde(default = "default_scan_timeout_secs")]
    pub scan_timeout_secs: u64,
}

impl StoreSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn deadlines(&self) -> Deadlines {
        Deadlines {
            operation: Duration::from_secs(self.operation_timeout_secs),
            scan: Duration::from_secs(self.scan_timeout_secs),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to `config.toml` in the working directory; a missing
    /// default file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = Path::new("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. SNAPFEED_STORE__URI
        settings = settings.add_source(
            config::Environment::with_prefix("SNAPFEED")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.store.uri.trim().is_empty() {
            return Err(ServerError::Config(
                "Store URI is required (set SNAPFEED_STORE__URI)".to_string(),
            ));
        }

        if self.store.database.trim().is_empty() {
            return Err(ServerError::Config(
                "Database name must not be empty".to_string(),
            ));
        }

        let timeouts = [
            ("connect_timeout_secs", self.store.connect_timeout_secs),
            ("operation_timeout_secs", self.store.operation_timeout_secs),
            ("scan_timeout_secs", self.store.scan_timeout_secs),
        ];
        if let Some((name, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(ServerError::Config(format!("store.{name} must be positive")));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_store() -> StoreSettings {
    StoreSettings {
        uri: default_uri(),
        database: default_database(),
        connect_timeout_secs: default_connect_timeout_secs(),
        operation_timeout_secs: default_operation_timeout_secs(),
        scan_timeout_secs: default_scan_timeout_secs(),
    }
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "snapfeed".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_operation_timeout_secs() -> u64 {
    15
}

fn default_scan_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            store: default_store(),
        }
    }
}
