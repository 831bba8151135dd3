use tracing_subscriber::EnvFilter;

/// Filter directives for launcher diagnostics, e.g. `GATHER_SHIM_LOG=debug`.
///
/// Kept separate from `RUST_LOG`, which belongs to the delegated tool.
pub const LOG_ENV: &str = "GATHER_SHIM_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout belongs to the target; a second init (tests) is ignored
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
