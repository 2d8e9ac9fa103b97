use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize dotenv and structured tracing based on RUST_LOG.
///
/// Loads a `.env` file from the working directory when present (existing
/// variables are never overwritten), then installs a fmt subscriber. Safe to
/// call more than once; later calls keep the first subscriber.
pub fn init_tracing() {
    let env_source = if dotenvy::dotenv().is_ok() { ".env" } else { "none" };

    // Respects RUST_LOG potentially provided by the env file.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!("Environment loaded from: {}", env_source);
}

/// Shared application state: the service's static metadata, constructed once
/// in `main` and handed to the router (never reached through globals).
#[derive(Debug, Clone)]
pub struct AppState {
    pub title: String,
    pub version: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            title: "Backend API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the open cross-origin policy: any origin, any method, any request
/// header, credentials allowed.
///
/// Wildcards cannot be combined with `Access-Control-Allow-Credentials` at the
/// wire level, so the requested origin/method/headers are mirrored back
/// instead, which accepts everything. This is a deliberate trade-off for a
/// public, non-sensitive API; it is not suitable where credentials guard
/// anything private.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
