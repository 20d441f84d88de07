//! API server entry point.

use std::time::Instant;

use api::config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_store::{InMemoryUserRepository, PostgresUserRepository, UserRepository};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn serve<R: UserRepository + 'static>(
    config: &Config,
    backend: &str,
    users: R,
    metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    started_at: Instant,
) {
    match users.count().await {
        Ok(count) => tracing::info!(backend, users = count, "user store ready"),
        Err(error) => tracing::warn!(backend, %error, "user store ready, count unavailable"),
    }

    let (service, listing) = api::create_default_state(config, users, started_at)
        .expect("failed to load templates");
    let app = api::create_app(service, listing, metrics_handle);

    let addr = config.addr();
    tracing::info!(%addr, environment = %config.environment, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

#[tokio::main]
async fn main() {
    let started_at = Instant::now();

    // 1. Load configuration once
    let config = Config::from_env();

    // 2. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 3. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 4. Pick the user store and start serving
    match config.database_url.as_deref() {
        Some(url) => {
            let users = PostgresUserRepository::connect(url)
                .await
                .expect("failed to connect to database")
                .limit(config.last_joined_limit);
            users
                .run_migrations()
                .await
                .expect("failed to run migrations");
            serve(&config, "postgres", users, metrics_handle, started_at).await;
        }
        None => {
            let users = InMemoryUserRepository::with_users(api::demo_users())
                .limit(config.last_joined_limit);
            serve(&config, "memory", users, metrics_handle, started_at).await;
        }
    }

    tracing::info!("server shut down gracefully");
}
