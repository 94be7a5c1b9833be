/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via the `RUST_LOG` variable
/// - **Pretty formatting**: Human-readable output with timestamps and levels
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - Info, warn and error messages
/// - `RUST_LOG=debug` - Per-request debug output from the transport and stores
/// - `RUST_LOG=campus_store=debug` - Debug only for this crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
