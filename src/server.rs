use std::sync::Arc;

use axum::{
    extract::State,
    response::Redirect,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::controllers::{self, ControllerLoad, CONTROLLER_PREFIX};
use crate::docs;
use crate::models::{HealthPayload, StatusSummary};
use crate::util::{cors_layer, AppState};

/// Build the application router.
///
/// The inline endpoints are always present, independent of the controller
/// probe outcome; a failed controller only changes what serves under
/// `/api/test`. CORS and request tracing wrap everything, the mounted
/// controller included.
pub fn build_router(state: Arc<AppState>, controller: ControllerLoad) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/swagger", get(swagger_redirect))
        .route("/health", get(health))
        .route("/docs", get(docs::swagger_ui))
        .route(docs::OPENAPI_JSON_PATH, get(docs::openapi_json))
        .with_state(state)
        .nest(CONTROLLER_PREFIX, controllers::into_router(controller))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Liveness/status summary with discovery hints.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service status summary", body = StatusSummary))
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<StatusSummary> {
    Json(StatusSummary {
        message: format!("{} is running", state.title),
        status: "ok".to_string(),
        swagger: "/docs".to_string(),
        api: CONTROLLER_PREFIX.to_string(),
    })
}

/// Convenience alias to the interactive documentation UI.
#[utoipa::path(
    get,
    path = "/swagger",
    responses((status = 307, description = "Redirect to /docs"))
)]
pub async fn swagger_redirect() -> Redirect {
    Redirect::temporary("/docs")
}

/// Liveness probe independent of any backing store.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthPayload))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthPayload> {
    Json(HealthPayload {
        status: "healthy".to_string(),
        service: state.title.clone(),
    })
}
