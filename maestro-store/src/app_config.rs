use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// "placeholder" accepts any Authorization header (the observed mock);
    /// "jwt" requires a verifiable bearer token.
    #[serde(default = "default_auth_mode")]
    pub mode: String,
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

fn default_auth_mode() -> String {
    "placeholder".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

fn default_seed() -> bool {
    true
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment variables with a MAESTRO prefix
            // e.g. MAESTRO__SERVER__PORT=8080
            .add_source(config::Environment::with_prefix("MAESTRO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
