//! Runtime configuration
//!
//! Output behaviour has no knobs. The only setting is diagnostic tracing,
//! read once from the environment on first use.

use std::sync::OnceLock;

/// Enables `[stlib runtime]` tracing on stderr when set to anything other
/// than an empty string or `0`.
pub const LOG_ENV_VAR: &str = "STLIB_RUNTIME_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeConfig {
    pub log: bool,
}

impl RuntimeConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_log_value(std::env::var(LOG_ENV_VAR).ok().as_deref())
    }

    fn from_log_value(value: Option<&str>) -> Self {
        let log = match value {
            Some(v) => {
                let v = v.trim();
                !v.is_empty() && v != "0"
            }
            None => false,
        };
        Self { log }
    }
}

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Process-wide configuration, initialized on first call.
pub fn runtime_config() -> &'static RuntimeConfig {
    CONFIG.get_or_init(RuntimeConfig::from_env)
}
