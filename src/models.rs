use serde::Serialize;
use utoipa::ToSchema;

/// Body of `GET /`: liveness summary with discovery hints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusSummary {
    /// Human-readable liveness message.
    #[schema(example = "Backend API is running")]
    pub message: String,
    /// Always the literal `"ok"`.
    #[schema(example = "ok")]
    pub status: String,
    /// Path of the interactive documentation UI.
    #[schema(example = "/docs")]
    pub swagger: String,
    /// Prefix the controller is mounted under.
    #[schema(example = "/api/test")]
    pub api: String,
}

/// Body of `GET /health`: liveness probe independent of any backing store.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthPayload {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "Backend API")]
    pub service: String,
}
