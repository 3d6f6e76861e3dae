// product_crud/src/main.rs

use std::sync::Arc;

use anyhow::Context;
use product_crud::config::{AppConfig, LogFormat};
use product_crud::{server, AppState, ProductStore};
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Config comes first because it picks the log format; a failure here is
  // reported by anyhow on stderr with a non-zero exit status.
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!("Starting product CRUD server...");

  let store = match ProductStore::connect(&app_config.database_url, app_config.db_max_connections).await {
    Ok(store) => {
      tracing::info!("Product store ready.");
      store
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to open the product store.");
      return Err(e).context("Database initialization error");
    }
  };

  let result = server::run(&app_config, AppState::new(store.clone(), Arc::clone(&app_config)))
    .await
    .with_context(|| format!("HTTP server error on {}", app_config.bind_address()));
  if let Err(e) = &result {
    tracing::error!(error = %e, "Server terminated with an error.");
  }

  store.close().await;
  tracing::info!("Server stopped.");
  result
}
