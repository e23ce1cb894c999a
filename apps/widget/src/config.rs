use anyhow::Context;
use chrono::FixedOffset;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::catalog;
use crate::models::Service;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Admin panel UX gate; see `admin` for why this is not a secret.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Tashkent (UTC+5).
const DEFAULT_UTC_OFFSET_HOURS: i32 = 5;

/// Widget settings, read from the process environment.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub api_base_url: Url,
    pub admin_password: String,
    pub request_timeout: Duration,
    pub utc_offset: FixedOffset,
    pub services_file: Option<PathBuf>,
}

impl WidgetConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source (tests pass a map).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_base_url = get("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let api_base_url = Url::parse(&api_base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: {}", api_base_url))?;

        let admin_password =
            get("ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.into());

        let timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("HTTP_TIMEOUT_SECS must be a number, got {}", v))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let offset_hours = match get("UTC_OFFSET_HOURS") {
            Some(v) => v
                .parse::<i32>()
                .with_context(|| format!("UTC_OFFSET_HOURS must be a number, got {}", v))?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };
        let utc_offset = FixedOffset::east_opt(offset_hours * 3600)
            .with_context(|| format!("UTC_OFFSET_HOURS out of range: {}", offset_hours))?;

        let services_file = get("SERVICES_FILE")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        if admin_password == DEFAULT_ADMIN_PASSWORD {
            tracing::warn!("ADMIN_PASSWORD not set, using the built-in default");
        }

        Ok(Self {
            api_base_url,
            admin_password,
            request_timeout: Duration::from_secs(timeout_secs),
            utc_offset,
            services_file,
        })
    }

    /// Services from `SERVICES_FILE`, or the built-in catalog.
    pub fn services(&self) -> anyhow::Result<Vec<Service>> {
        match &self.services_file {
            Some(path) => catalog::load_catalog(path),
            None => Ok(catalog::default_catalog()),
        }
    }
}

// ── Tests ──
