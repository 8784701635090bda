use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber honouring `RUST_LOG` (default: warnings only).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
