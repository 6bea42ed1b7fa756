//! Build-time configuration for the API endpoint and client data directory with
//! runtime overrides. Overrides come from command-line flags or their
//! environment variables so a packaged binary can target another API without
//! rebuilding. Configuration values are public; do not store secrets here.

use std::{path::PathBuf, time::Duration};

/// Default API base used when neither the build nor the runtime sets one.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Delay between a successful registration and the switch back to the login form.
const REGISTRATION_REDIRECT_DELAY_MS: u64 = 800;
/// Directory name used under the platform data directory.
const DATA_DIR_NAME: &str = "twenty20";

/// Client configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub registration_redirect_delay: Duration,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load(runtime: RuntimeConfig) -> Self {
        let api_base_url = option_env!("TWENTY20_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            data_dir: default_data_dir(),
            registration_redirect_delay: Duration::from_millis(REGISTRATION_REDIRECT_DELAY_MS),
        };

        apply_runtime_overrides(&mut config, runtime);

        config
    }
}

/// Values supplied at runtime; `None` keeps the build-time default.
#[derive(Debug, Default)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub data_dir: Option<String>,
}

impl RuntimeConfig {
    /// Builds overrides from raw strings, dropping blank values.
    #[must_use]
    pub fn new(api_base_url: Option<&str>, data_dir: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url.and_then(normalize_runtime_value),
            data_dir: data_dir.and_then(normalize_runtime_value),
        }
    }
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.data_dir {
        config.data_dir = PathBuf::from(value);
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{DATA_DIR_NAME}")),
        |dir| dir.join(DATA_DIR_NAME),
    )
}

/// Builds a URL from an explicit base URL and the provided path.
#[must_use]
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, build_url_with_base,
        normalize_runtime_value,
    };
    use std::{path::PathBuf, time::Duration};

    fn default_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            data_dir: PathBuf::from("/var/lib/twenty20"),
            registration_redirect_delay: Duration::from_millis(800),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.twenty20.dev "),
            Some("https://api.twenty20.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = default_config();
        apply_runtime_overrides(&mut config, RuntimeConfig::new(Some(""), Some("  ")));

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/twenty20"));
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = default_config();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig::new(Some("https://api.override"), Some("/tmp/override")),
        );

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/override"));
    }

    #[test]
    fn load_uses_the_fixed_registration_delay() {
        let config = AppConfig::load(RuntimeConfig::default());
        assert_eq!(config.registration_redirect_delay, Duration::from_millis(800));
    }

    #[test]
    fn build_url_with_base_joins_slashes_once() {
        assert_eq!(
            build_url_with_base("http://localhost:8000/", "/api/login"),
            "http://localhost:8000/api/login"
        );
        assert_eq!(
            build_url_with_base(" http://localhost:8000 ", "api/register"),
            "http://localhost:8000/api/register"
        );
        assert_eq!(build_url_with_base("", "/api/login"), "/api/login");
    }
}
