use serde::Deserialize;
use std::env;

/// Process-wide configuration, resolved once at startup and immutable
/// thereafter. Carried in the router state and passed into each operation;
/// never ambient global state.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Glob pattern the file-listing tool resolves against.
    pub root_pattern: String,
    /// Optional extension filter; when set, listing keeps only paths ending
    /// in `.<extension>`.
    #[serde(default)]
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            data: DataConfig {
                root_pattern: "data/*.csv".to_string(),
                extension: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("data.root_pattern", "data/*.csv")?
            .set_default("logging.level", "info")?;

        // Try to load from .env file
        let _ = dotenv::dotenv();

        // Load from environment variables
        if let Ok(host) = env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }

        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port.parse::<u16>().unwrap_or(3000))?;
        }

        if let Ok(root_pattern) = env::var("DATA_ROOT_PATTERN") {
            builder = builder.set_override("data.root_pattern", root_pattern)?;
        }

        if let Ok(extension) = env::var("DATA_EXTENSION") {
            builder = builder.set_override("data.extension", extension)?;
        }

        if let Ok(log_level) = env::var("RUST_LOG") {
            builder = builder.set_override("logging.level", log_level)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
