use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub dav: DavConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When true, server faults include the error chain in the response body.
    pub debug: bool,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DavConfig {
    /// URL subtree the DAV tree is mounted under. Empty string mounts at `/`.
    pub prefix: String,
}

impl DavConfig {
    /// ## Summary
    /// Returns the mount prefix normalized to `/<component>/`, or `/` when
    /// no prefix is configured. Request paths are stripped of this value and
    /// generated hrefs are prefixed with it.
    #[must_use]
    pub fn normalized_prefix(&self) -> String {
        let trimmed = self.prefix.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    /// ## Summary
    /// Returns the prefix as a route component with no surrounding slashes,
    /// or `None` when the tree is mounted at the root.
    #[must_use]
    pub fn route_component(&self) -> Option<&str> {
        let trimmed = self.prefix.trim_matches('/');
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    /// Basic auth is enforced only when a password is configured.
    pub password: Option<String>,
    pub realm: String,
}

impl AuthConfig {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.password.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.debug", false)?
            .set_default("dav.prefix", "")?
            .set_default("auth.username", "admin")?
            .set_default("auth.realm", "Secure Area")?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
