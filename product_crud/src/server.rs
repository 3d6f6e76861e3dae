// product_crud/src/server.rs

//! HTTP server construction and signal-driven graceful shutdown.

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::state::AppState;
use crate::web::configure_app_routes;

/// Binds the configured address and builds the server without starting
/// signal handling.
///
/// The returned [`Server`] must be awaited (or spawned) to accept connections.
pub fn build_server(config: &AppConfig, app_state: AppState) -> std::io::Result<Server> {
  let server_address = config.bind_address();
  info!("Attempting to bind server to {}...", server_address);
  let listener = TcpListener::bind(&server_address)?;
  serve_on(listener, config, app_state)
}

/// Builds the server on an already bound listener.
pub fn serve_on(listener: TcpListener, config: &AppConfig, app_state: AppState) -> std::io::Result<Server> {
  let local_address = listener.local_addr()?;

  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .workers(config.server_workers)
  .client_request_timeout(config.request_timeout)
  .client_disconnect_timeout(config.request_timeout)
  .shutdown_timeout(config.shutdown_timeout.as_secs())
  .disable_signals()
  .listen(listener)?
  .run();

  info!(address = %local_address, workers = config.server_workers, "HTTP server listening.");
  Ok(server)
}

/// Runs the server until SIGINT/SIGTERM, then stops accepting and drains
/// in-flight requests for up to `shutdown_timeout`.
pub async fn run(config: &AppConfig, app_state: AppState) -> std::io::Result<()> {
  let server = build_server(config, app_state)?;
  let handle = server.handle();

  actix_web::rt::spawn(async move {
    let signal = shutdown_signal().await;
    info!(signal, "Received shutdown signal, draining in-flight requests...");
    handle.stop(true).await;
  });

  server.await?;
  info!("HTTP server stopped.");
  Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> &'static str {
  use tokio::signal::unix::{signal, SignalKind};

  let mut terminate = match signal(SignalKind::terminate()) {
    Ok(stream) => stream,
    Err(e) => {
      warn!(error = %e, "Could not install SIGTERM handler; only Ctrl-C will stop the server.");
      wait_for_ctrl_c().await;
      return "SIGINT";
    }
  };

  tokio::select! {
    _ = wait_for_ctrl_c() => "SIGINT",
    _ = terminate.recv() => "SIGTERM",
  }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> &'static str {
  wait_for_ctrl_c().await;
  "ctrl-c"
}

async fn wait_for_ctrl_c() {
  ctrl_c_settled(tokio::signal::ctrl_c().await).await
}

/// A listener that could not be installed never fires, so the server keeps
/// running (and any other shutdown signal still works).
async fn ctrl_c_settled(outcome: std::io::Result<()>) {
  if let Err(e) = outcome {
    warn!(error = %e, "Failed to listen for Ctrl-C; it will not stop the server.");
    std::future::pending::<()>().await;
  }
}
