// product_crud/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(format!("expected 'pretty' or 'json', got '{}'", other)),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,
  pub server_workers: usize,
  pub request_timeout: Duration,
  pub shutdown_timeout: Duration,
  pub max_body_bytes: usize,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from an arbitrary variable source. Unset variables fall
  /// back to their defaults; set-but-invalid ones are errors.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_host: String = setting(&lookup, "SERVER_HOST", "0.0.0.0")?;
    let server_port: u16 = setting(&lookup, "SERVER_PORT", "8000")?;
    let database_url: String = setting(&lookup, "DATABASE_URL", "sqlite://products.db")?;
    let db_max_connections: u32 = setting(&lookup, "DB_MAX_CONNECTIONS", "5")?;
    let server_workers: usize = setting(&lookup, "SERVER_WORKERS", "1")?;
    let request_timeout_secs: u64 = setting(&lookup, "REQUEST_TIMEOUT_SECS", "5")?;
    let shutdown_timeout_secs: u64 = setting(&lookup, "SHUTDOWN_TIMEOUT_SECS", "10")?;
    let max_body_bytes: usize = setting(&lookup, "MAX_BODY_BYTES", "1048576")?;
    let log_format: LogFormat = setting(&lookup, "LOG_FORMAT", "pretty")?;

    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    if server_workers == 0 {
      return Err(AppError::Config("SERVER_WORKERS must be at least 1".to_string()));
    }
    if max_body_bytes == 0 {
      return Err(AppError::Config("MAX_BODY_BYTES must be at least 1".to_string()));
    }

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      server_workers,
      request_timeout: Duration::from_secs(request_timeout_secs),
      shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
      max_body_bytes,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn setting<T, F>(lookup: &F, var_name: &str, default: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
  F: Fn(&str) -> Option<String>,
{
  let raw = lookup(var_name).unwrap_or_else(|| default.to_string());
  let raw = raw.trim();
  if raw.is_empty() {
    return Err(AppError::Config(format!("Environment variable '{}' is empty", var_name)));
  }
  raw
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e)))
}
