//! HTTP service exposing service metadata, a liveness check and a
//! content-negotiated listing of newly joined users.
//!
//! The metadata/health endpoints and the listing endpoint share nothing but
//! the router; each gets its own state.

pub mod config;
pub mod error;
pub mod negotiation;
pub mod routes;
pub mod service;
pub mod views;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::routing::get;
use chrono::{Duration, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use user_store::{User, UserRepository};

use config::Config;
use routes::users::ListingState;
use service::ServiceInfo;
use views::Views;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: UserRepository + 'static>(
    service: Arc<ServiceInfo>,
    listing: Arc<ListingState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let service_router = Router::new()
        .route("/", get(routes::meta::index))
        .route("/api", get(routes::meta::reachability))
        .route("/health", get(routes::health::check))
        .with_state(service);

    let listing_router = Router::new()
        .route("/users", get(routes::users::list::<R>))
        .with_state(listing);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    service_router
        .merge(listing_router)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the state of both components from configuration and a user
/// repository. Uptime is reported relative to `started_at`.
pub fn create_default_state<R: UserRepository + 'static>(
    config: &Config,
    users: R,
    started_at: Instant,
) -> Result<(Arc<ServiceInfo>, Arc<ListingState<R>>), tera::Error> {
    let service = Arc::new(ServiceInfo::from_config(config).started_at(started_at));
    let listing = Arc::new(ListingState::new(users, Views::new()?));
    Ok((service, listing))
}

/// A handful of users to serve when no database is configured, oldest first.
pub fn demo_users() -> Vec<User> {
    let now = Utc::now();
    ["Ann", "Bo", "Cy", "Dee"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| User::new(id, name).joined_at(now - Duration::days(5 - id)))
        .collect()
}
