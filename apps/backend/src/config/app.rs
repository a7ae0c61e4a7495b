//! Runtime settings read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::format::DraftFormat;
use crate::error::AppError;

pub const DEFAULT_SITE_URL: &str = "http://localhost:12264";
pub const DEFAULT_PERSPECTIVE_SOCK: &str = "./r38.sock";
pub const DEFAULT_PERSPECTIVE_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_NOTIFY_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_TXN_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Chat webhook for pick notifications; `None` disables notifications.
    pub webhook_url: Option<String>,
    /// Public base URL used in notification links.
    pub site_url: String,
    pub perspective_socket: PathBuf,
    pub perspective_timeout: Duration,
    pub notify_timeout: Duration,
    pub txn_timeout: Duration,
    pub format: DraftFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            site_url: DEFAULT_SITE_URL.to_string(),
            perspective_socket: PathBuf::from(DEFAULT_PERSPECTIVE_SOCK),
            perspective_timeout: Duration::from_millis(DEFAULT_PERSPECTIVE_TIMEOUT_MS),
            notify_timeout: Duration::from_millis(DEFAULT_NOTIFY_TIMEOUT_MS),
            txn_timeout: Duration::from_millis(DEFAULT_TXN_TIMEOUT_MS),
            format: DraftFormat::STANDARD,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unset or empty variables
    /// fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let format = DraftFormat::new(
            parse_or(&get, "DRAFT_TABLE_SIZE", defaults.format.table_size)?,
            parse_or(&get, "DRAFT_CARDS_PER_PACK", defaults.format.cards_per_pack)?,
            parse_or(&get, "DRAFT_ROUND_COUNT", defaults.format.round_count)?,
        )
        .map_err(|e| AppError::config(e.to_string()))?;

        Ok(Self {
            webhook_url: get("DRAFT_WEBHOOK_URL"),
            site_url: get("DRAFT_SITE_URL").unwrap_or(defaults.site_url),
            perspective_socket: get("DRAFT_PERSPECTIVE_SOCK")
                .map(PathBuf::from)
                .unwrap_or(defaults.perspective_socket),
            perspective_timeout: millis_or(
                &get,
                "DRAFT_PERSPECTIVE_TIMEOUT_MS",
                DEFAULT_PERSPECTIVE_TIMEOUT_MS,
            )?,
            notify_timeout: millis_or(&get, "DRAFT_NOTIFY_TIMEOUT_MS", DEFAULT_NOTIFY_TIMEOUT_MS)?,
            txn_timeout: millis_or(&get, "DRAFT_TXN_TIMEOUT_MS", DEFAULT_TXN_TIMEOUT_MS)?,
            format,
        })
    }
}

fn parse_or<T, G>(get: &G, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{name}: {e}"))),
        None => Ok(default),
    }
}

fn millis_or<G>(get: &G, name: &str, default_ms: u64) -> Result<Duration, AppError>
where
    G: Fn(&str) -> Option<String>,
{
    let ms: u64 = parse_or(get, name, default_ms)?;
    if ms == 0 {
        return Err(AppError::config(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_millis(ms))
}
