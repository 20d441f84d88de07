//! Service metadata and reachability endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::service::{GREETING, ServiceInfo, VERSION, iso_timestamp};

#[derive(Debug, Serialize)]
pub struct ServiceMetadata {
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub environment: String,
}

impl ServiceMetadata {
    pub fn new(info: &ServiceInfo, now: DateTime<Utc>) -> Self {
        Self {
            message: GREETING,
            version: VERSION,
            timestamp: iso_timestamp(now),
            environment: info.environment().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Reachability {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET / — greeting, version, current time and environment label.
pub async fn index(State(info): State<Arc<ServiceInfo>>) -> Json<ServiceMetadata> {
    Json(ServiceMetadata::new(&info, Utc::now()))
}

/// GET /api — confirms the API is reachable through whatever sits in front of it.
pub async fn reachability() -> Json<Reachability> {
    Json(Reachability {
        message: "API is reachable",
        status: "OK",
    })
}
