use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the catalog admin server.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// SQLite database location. Required.
    pub database_url: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path prefix every API route is mounted under.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

impl ServerConfig {
    /// Loads settings from `config/default.yaml`, `config/<APP_ENV>.yaml` and
    /// the process environment, later sources overriding earlier ones.
    ///
    /// Fails when `DATABASE_URL` is not provided by any source.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        if config.database_url.trim().is_empty() {
            return Err(ConfigError::Message("DATABASE_URL cannot be empty".to_string()));
        }
        Ok(config)
    }

    /// `api_prefix` normalised to a leading slash and no trailing slash.
    pub fn scope_prefix(&self) -> String {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}
