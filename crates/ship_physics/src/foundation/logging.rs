//! Logging utilities
//!
//! Library code logs through the `log` facade only; binaries pick the backend here.

/// Initialize the logging system with a default level, overridable through `RUST_LOG`
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
