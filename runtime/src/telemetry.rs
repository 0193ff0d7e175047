use tracing_subscriber::EnvFilter;

/// Initialize a fmt tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies. Stdout is
/// left to the vault terminal itself.
pub fn init_stderr_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
