/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity.
///
/// - `RUST_LOG=info` - lifecycle events and accepted orders
/// - `RUST_LOG=debug` - every session request
/// - `RUST_LOG=pos_kiosk=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
