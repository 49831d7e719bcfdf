use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

const SERVICE_NAME: &str = "shortcut-report";

async fn database_reachable(state: &AppState) -> bool {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            log::error!("Database health check failed: {}", e);
            false
        }
    }
}

/// GET / and GET /version
pub async fn service_info() -> Response {
    let info = json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(info)).into_response()
}

/// GET /health - Health check with database status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = database_reachable(&state).await;

    let (status, label) = if database_ok {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    let health = json!({
        "status": label,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_reachable(&state).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
    }
}
