use crate::{
    AppState, attach_to_story, detach_from_story, get_story, health, list_backlog,
    reference_routes, sync_backlog_handler, sync_fields_handler, sync_labels_handler,
};

use sr_core::ReferenceKind;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let mut router = Router::new()
        // Service endpoints
        .route("/", get(health::service_info))
        .route("/version", get(health::service_info))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Backlog
        .route("/shortcut/backlog", get(list_backlog))
        // Stories
        .route("/stories/{id}", get(get_story))
        .route(
            "/stories/{id}/{association}/{assoc_id}",
            put(attach_to_story).delete(detach_from_story),
        )
        // Sync triggers
        .route("/admin/shortcut/labels", get(sync_labels_handler))
        .route("/admin/shortcut/fields", get(sync_fields_handler))
        .route(
            "/admin/shortcut/backlog",
            get(sync_backlog_handler).post(sync_backlog_handler),
        );

    // Persons, components, epic groups, products
    for kind in ReferenceKind::ALL {
        router = router.merge(reference_routes(kind));
    }

    router.with_state(state).layer(cors_layer(allowed_origins))
}

/// CORS limited to the configured origins; `*` allows any origin
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
