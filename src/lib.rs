#![forbid(unsafe_code)]
#![doc = r#"
Backend API

Bootstrap for a small public HTTP service: permissive CORS, a fallibly mounted
controller with a diagnostic fallback, inline status/health endpoints, and a
lifecycle wrapper around the serve loop.

Crate highlights
- Library: `server::build_router` assembles the full application router from an
  explicit `AppState` and a `ControllerLoad` probe result (no ambient globals).
- Controller mounting never aborts startup: a broken controller is replaced by
  a fallback route under the same prefix that reports the load error.
- Lifecycle: startup/shutdown logging around the serve loop with graceful
  drain on SIGINT/SIGTERM.

Modules
- `config`: Listen-port configuration from the environment.
- `controllers`: Fallible controller construction and the diagnostic fallback.
- `docs`: OpenAPI document and the Swagger UI page behind `/docs`.
- `lifecycle`: Serve wrapper and lifecycle state machine.
- `models`: Response payload types.
- `server`: Axum router and inline handlers.
- `util`: Shared helpers (tracing, CORS, application state).
"#]

pub mod config;
pub mod controllers;
pub mod docs;
pub mod lifecycle;
pub mod models;
pub mod server;
pub mod util;

pub use crate::config::AppConfig;
pub use crate::controllers::{ControllerFailure, ControllerLoad};
pub use crate::lifecycle::{Lifecycle, LifecycleState};
pub use crate::server::build_router;
pub use crate::util::AppState;
