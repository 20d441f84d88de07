//! Liveness endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::service::{ServiceInfo, iso_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthState,
    pub uptime_seconds: f64,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn new(info: &ServiceInfo, now: DateTime<Utc>) -> Self {
        Self {
            status: HealthState::Healthy,
            uptime_seconds: info.uptime().as_secs_f64(),
            timestamp: iso_timestamp(now),
        }
    }
}

/// GET /health — always healthy while the process is serving. Does no I/O.
pub async fn check(State(info): State<Arc<ServiceInfo>>) -> Json<HealthStatus> {
    Json(HealthStatus::new(&info, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_uptime() {
        let info = ServiceInfo::new("test");
        let now = "2026-10-15T08:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let json = serde_json::to_value(HealthStatus::new(&info, now)).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["timestamp"], "2026-10-15T08:30:00.000Z");
        assert!(json["uptimeSeconds"].as_f64().unwrap() >= 0.0);
    }
}
