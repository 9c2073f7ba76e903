use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clientbook_api::config::{LogFormat, ServerConfig};
use clientbook_api::router::build_app_router;
use clientbook_api::state::AppState;
use clientbook_core::clients::ClientService;
use clientbook_db::PgClientStore;
use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    // --- Tracing ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "clientbook_api=debug,clientbook_core=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = clientbook_db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    clientbook_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    clientbook_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- App state ---
    let store = Arc::new(PgClientStore::new(pool.clone()));
    let state = AppState {
        clients: ClientService::new(store),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let stop = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let stop = Arc::clone(&stop);
        async move { stop.notified().await }
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => {
            tracing::error!(?result, "Server exited unexpectedly");
            pool.close().await;
            std::process::exit(1);
        }
        () = shutdown_signal() => {}
    }

    // --- Drain ---
    stop.notify_one();
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    match tokio::time::timeout(drain, server).await {
        Ok(Ok(Ok(()))) => tracing::info!("Server stopped accepting connections"),
        Ok(Ok(Err(err))) => tracing::error!(error = %err, "Server error during shutdown"),
        Ok(Err(err)) => tracing::error!(error = %err, "Server task failed"),
        Err(_) => tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "In-flight requests did not finish before the shutdown timeout"
        ),
    }

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
