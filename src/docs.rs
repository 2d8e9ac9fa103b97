//! OpenAPI document and the interactive documentation UI.
//!
//! The document is generated from handler annotations via utoipa and served
//! as JSON; `/docs` is a thin Swagger UI shell that reads it.

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use utoipa::OpenApi;

use crate::controllers::ControllerFailure;
use crate::models::{HealthPayload, StatusSummary};
use crate::util::AppState;

/// Where the generated OpenAPI JSON is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Backend API",
        description = "Public bootstrap API: status, health, and the test controller."
    ),
    paths(
        crate::server::root,
        crate::server::swagger_redirect,
        crate::server::health,
    ),
    components(schemas(StatusSummary, HealthPayload, ControllerFailure))
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document, stamped with the application
/// instance's own title and version.
pub async fn openapi_json(State(state): State<Arc<AppState>>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    doc.info.title = state.title.clone();
    doc.info.version = state.version.clone();
    Json(doc)
}

/// Serve the Swagger UI page. The assets come from the swagger-ui-dist CDN so
/// no build-time bundling is needed; only the document itself is local.
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Backend API - Swagger UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "/api-docs/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_inline_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/swagger", "/health"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }

    #[test]
    fn swagger_page_points_at_the_document() {
        assert!(SWAGGER_UI_PAGE.contains(OPENAPI_JSON_PATH));
    }
}
