use std::net::SocketAddr;

/// Default listen port when `PORT` is unset or not an integer.
pub const DEFAULT_PORT: u16 = 8000;

/// Process configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port the listener binds on all interfaces.
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// `PORT` must parse as a `u16`; anything else (unset, empty, garbage)
    /// falls back to [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { port }
    }

    /// Bind address: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
