use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Reads `RUST_LOG` (after loading `.env` if present), defaulting to
/// `info` for this crate. Returns false when a subscriber was already
/// installed, by an earlier call or by the host application; that one
/// stays in place.
pub fn init_tracing() -> bool {
    let _ = dotenvy::dotenv();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portal=info,warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();
    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
    installed
}

/// Like [`init_tracing`] but writes through the test harness capture.
pub fn init_test_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("portal=debug"))
        .with_test_writer()
        .try_init()
        .is_ok()
}
