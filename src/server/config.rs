use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5050;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Origins allowed by CORS; `None` allows any origin.
    pub allowed_origins: Option<Vec<HeaderValue>>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_vars(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - `PORT` or an `ALLOWED_ORIGINS` entry is malformed
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = var("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(value) => match value.parse() {
                Ok(port) => port,
                Err(_) => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "PORT".to_string(),
                        value,
                        reason: "expected a port number between 0 and 65535".to_string(),
                    })
                }
            },
        };

        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .transpose()?
            .filter(|origins| !origins.is_empty());

        Ok(Self {
            database_url,
            host,
            port,
            allowed_origins,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(origins: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "ALLOWED_ORIGINS".to_string(),
                value: origin.to_string(),
                reason: "not a valid header value".to_string(),
            })
        })
        .collect()
}
