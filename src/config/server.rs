/// Server binding configuration.
///
/// Defaults can be overridden at startup with the `ARENA_HOST` and
/// `ARENA_PORT` environment variables.
use log::warn;

/// Default interface the HTTP server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Resolve the bind address from the environment, falling back to defaults.
pub fn bind_address() -> (String, u16) {
    let host = std::env::var("ARENA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = match std::env::var("ARENA_PORT") {
        Ok(raw) => parse_port(&raw).unwrap_or_else(|| {
            warn!("[Config] Ignoring invalid ARENA_PORT={:?}, using {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };
    (host, port)
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok().filter(|port| *port != 0)
}
