use chrono::{DateTime, SecondsFormat, Utc};

/// Environment variable naming the current runtime environment.
pub const ENV_VAR: &str = "NODE_ENV";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const VERSION_LABEL: &str = "15.x";

/// Values computed for a single render of the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub environment: String,
    pub version_label: String,
    pub build_time: String,
}

impl PageView {
    /// Reads the environment name and the wall clock.
    pub fn capture() -> Self {
        Self::from_parts(std::env::var(ENV_VAR).ok(), Utc::now())
    }

    pub fn from_parts(environment: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            environment: resolve_environment(environment),
            version_label: VERSION_LABEL.to_string(),
            build_time: iso_timestamp(now),
        }
    }
}

/// Absent or empty values fall back to `development`.
pub fn resolve_environment(raw: Option<String>) -> String {
    raw.filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

// 2026-10-16T08:40:00.123Z
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
