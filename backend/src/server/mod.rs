//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{BuiltState, build_state};

use std::future::Future;

use actix_web::dev::{Server, ServerHandle};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use hotel_api::Trace;
use hotel_api::inbound::graphql::HotelSchema;
use hotel_api::inbound::http::{self, health::HealthState};

/// Construct an Actix HTTP server serving `schema`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    schema: HotelSchema,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let schema = web::Data::new(schema);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_health_state.clone())
            .app_data(schema.clone())
            .wrap(Trace)
            .configure(http::configure)
    })
    .bind(config.bind_addr)?
    .disable_signals()
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Resolve on SIGINT, or SIGTERM on Unix.
pub async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Fail liveness once `signal` resolves, then stop the server gracefully.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        warn!(%error, "shutdown signal listener failed; draining now");
    }
    health_state.mark_unhealthy();
    info!("draining connections");
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::rt;

    #[actix_rt::test]
    async fn signal_marks_unhealthy_and_stops_the_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let server = HttpServer::new(App::new)
            .listen(listener)
            .expect("bind test server")
            .disable_signals()
            .run();
        let handle = server.handle();
        let running = rt::spawn(server);
        let health_state = web::Data::new(HealthState::new());

        drain_on(async { Ok(()) }, health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
