//! Health check endpoints

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{health_router, run_health_checks, HealthCheckFuture};
use core_config::AppInfo;
use serde_json::Value;
use std::sync::Arc;

/// A dependency that must be reachable before the service reports ready
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    /// Name reported in the readiness body
    fn name(&self) -> &'static str;

    async fn check(&self) -> Result<(), String>;
}

#[async_trait]
impl ReadinessCheck for mongodb::Client {
    fn name(&self) -> &'static str {
        "mongodb"
    }

    async fn check(&self) -> Result<(), String> {
        database::mongodb::ping(self)
            .await
            .map_err(|e| e.to_string())
    }
}

type Checks = Arc<Vec<Arc<dyn ReadinessCheck>>>;

async fn ready(State(checks): State<Checks>) -> (StatusCode, Json<Value>) {
    let futures: Vec<(&str, HealthCheckFuture)> = checks
        .iter()
        .map(|check| {
            let name = check.name();
            let check = Arc::clone(check);
            let future: HealthCheckFuture = Box::pin(async move { check.check().await });
            (name, future)
        })
        .collect();

    run_health_checks(futures).await
}

/// `/health` (liveness) and `/ready` (dependency pings)
pub fn router(app_info: AppInfo, checks: Vec<Arc<dyn ReadinessCheck>>) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(Arc::new(checks))
        .merge(health_router(app_info))
}
