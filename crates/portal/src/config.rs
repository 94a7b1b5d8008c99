use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "portal.toml";

/// Read `portal.toml` and store the result in the global `OnceLock`.
/// Only the first call has effect.
///
/// A missing or unparseable file leaves every setting at its default.
pub fn load_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => PortalConfig::from_toml_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
            PortalConfig::default()
        }),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "config not found, using defaults");
            PortalConfig::default()
        }
    })
}

/// The loaded config, or defaults if `load_config()` hasn't run yet.
pub fn portal_config() -> &'static PortalConfig {
    static DEFAULT: OnceLock<PortalConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(PortalConfig::default))
}
