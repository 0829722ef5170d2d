use std::env;

use axum::http::HeaderValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Runtime configuration, read from `PELVIA_*` environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Reject questionnaire answers outside their documented ranges with 422
    /// instead of scoring them as given.
    pub strict_validation: bool,
    pub log_format: LogFormat,
    /// CORS origin. `None` allows any origin.
    pub allowed_origin: Option<HeaderValue>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            strict_validation: false,
            log_format: LogFormat::Json,
            allowed_origin: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take their defaults;
    /// malformed values are an error.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = get("PELVIA_STRICT_VALIDATION") {
            config.strict_validation = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    return Err(eyre::eyre!(
                        "PELVIA_STRICT_VALIDATION must be a boolean, got '{other}'"
                    ));
                }
            };
        }

        if let Some(raw) = get("PELVIA_LOG_FORMAT") {
            config.log_format = match raw.trim() {
                "json" | "" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                other => {
                    return Err(eyre::eyre!(
                        "PELVIA_LOG_FORMAT must be 'json' or 'pretty', got '{other}'"
                    ));
                }
            };
        }

        if let Some(raw) = get("PELVIA_ALLOWED_ORIGIN") {
            let raw = raw.trim();
            if !raw.is_empty() && raw != "*" {
                let origin = HeaderValue::from_str(raw)
                    .map_err(|e| eyre::eyre!("PELVIA_ALLOWED_ORIGIN is not a valid origin: {e}"))?;
                config.allowed_origin = Some(origin);
            }
        }

        Ok(config)
    }
}
