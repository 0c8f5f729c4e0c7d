use crate::services::logging::LogLevel;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Frontend settings, baked in at build time.
///
/// `LEDGER_API_BASE_URL` and `LEDGER_LOG_LEVEL` override the defaults when set
/// while compiling; unparseable values fall back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LEDGER_API_BASE_URL"), option_env!("LEDGER_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or_default();

        Self {
            api_base_url,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
