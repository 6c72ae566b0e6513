use crate::error::config::ConfigError;

#[derive(Clone)]
pub struct Config {
    pub app_url: String,
    pub database_url: String,
    pub listen_addr: String,
    pub jwt_secret: String,
    pub jwt_ttl_seconds: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app_url: optional_var("APP_URL", "http://localhost:8080"),
            database_url: required_var("DATABASE_URL")?,
            listen_addr: optional_var("LISTEN_ADDR", "0.0.0.0:8080"),
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_ttl_seconds: parsed_var("JWT_TTL_SECONDS", 3600)?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_var(name: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: format!("expected an integer, got {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}
