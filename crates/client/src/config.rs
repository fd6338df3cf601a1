use shared_types::{AppConfig, SessionSettings};
use std::sync::OnceLock;

use crate::session::Session;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

pub const ENV_API_URI: &str = "CASEBOOK_API_URI";
pub const ENV_ID_TOKEN: &str = "CASEBOOK_ID_TOKEN";
pub const ENV_USER_ID: &str = "CASEBOOK_USER_ID";

/// Read `config.toml` (if any), apply environment overrides and store the
/// result. Only the first call has effect.
///
/// A missing or unparseable file yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let base = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::debug!(path = CONFIG_PATH, error = %e, "No config file, using defaults");
                AppConfig::default()
            }
        };
        let config = apply_overrides(base, env_lookup);
        tracing::info!(api = %config.api.base_url, session = config.session.is_some(), "Configuration loaded");
        config
    })
}

/// Session configured for development builds, if any.
pub fn configured_session(config: &AppConfig) -> Option<Session> {
    config.session.as_ref().map(Session::from)
}

pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Overlay environment values on a parsed config. A session is only taken
/// from the environment when both the token and the user id are present.
pub fn apply_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(uri) = present(ENV_API_URI) {
        config.api.base_url = uri;
    }
    if let (Some(id_token), Some(user_id)) = (present(ENV_ID_TOKEN), present(ENV_USER_ID)) {
        config.session = Some(SessionSettings { id_token, user_id });
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn env_lookup(key: &str) -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(key).ok()
}

/// Browsers have no process environment; values are baked in at build time.
#[cfg(target_arch = "wasm32")]
fn env_lookup(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_URI => option_env!("CASEBOOK_API_URI"),
        ENV_ID_TOKEN => option_env!("CASEBOOK_ID_TOKEN"),
        ENV_USER_ID => option_env!("CASEBOOK_USER_ID"),
        _ => None,
    };
    value.map(str::to_string)
}
