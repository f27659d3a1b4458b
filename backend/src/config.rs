//! Process-wide settings, read once from the environment at start-up.
//!
//! Unset optional variables fall back to defaults (logged at `info`). The
//! WorkDrive credentials are only required when that sink is selected; a
//! missing one stops the server before it binds.

use log::info;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.zoho.eu";
const DEFAULT_API_URL: &str = "https://www.zohoapis.eu";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required for the selected storage")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where submissions end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    WorkDrive,
    Local,
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workdrive" | "zoho" => Ok(SinkKind::WorkDrive),
            "local" | "disk" => Ok(SinkKind::Local),
            other => Err(format!("unknown storage {other:?}, expected workdrive or local")),
        }
    }
}

/// Credentials and endpoints for the Zoho WorkDrive upload.
#[derive(Clone)]
pub struct WorkDriveSettings {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub folder_id: String,
    pub accounts_url: String,
    pub api_url: String,
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for WorkDriveSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkDriveSettings")
            .field("client_id", &self.client_id)
            .field("folder_id", &self.folder_id)
            .field("accounts_url", &self.accounts_url)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    pub sink: SinkKind,
    pub upload_dir: PathBuf,
    pub http_timeout: Duration,
    pub open_browser: bool,
    pub accounts_url: String,
    /// Present exactly when `sink` is `SinkKind::WorkDrive`.
    pub workdrive: Option<WorkDriveSettings>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = or_default(&lookup, "LINSEN_HOST", "127.0.0.1");
        let port: u16 = parse_or_default(&lookup, "LINSEN_PORT", "8080")?;
        let public_url = lookup("LINSEN_PUBLIC_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("http://{host}:{port}"));
        let sink: SinkKind = parse_or_default(&lookup, "LINSEN_STORAGE", "workdrive")?;
        let upload_dir = PathBuf::from(or_default(&lookup, "LINSEN_UPLOAD_DIR", "uploads"));
        let timeout_secs: u64 = parse_or_default(&lookup, "LINSEN_HTTP_TIMEOUT_SECS", "15")?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "LINSEN_HTTP_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        let open_browser: bool = parse_or_default(&lookup, "LINSEN_OPEN_BROWSER", "false")?;
        let accounts_url = or_default(&lookup, "ZOHO_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL);

        let workdrive = match sink {
            SinkKind::WorkDrive => Some(WorkDriveSettings {
                client_id: required(&lookup, "ZOHO_CLIENT_ID")?,
                client_secret: required(&lookup, "ZOHO_CLIENT_SECRET")?,
                refresh_token: required(&lookup, "ZOHO_REFRESH_TOKEN")?,
                folder_id: required(&lookup, "ZOHO_WORKDRIVE_FOLDER_ID")?,
                accounts_url: accounts_url.clone(),
                api_url: or_default(&lookup, "ZOHO_API_URL", DEFAULT_API_URL),
            }),
            SinkKind::Local => None,
        };

        Ok(Config {
            host,
            port,
            public_url: public_url.trim_end_matches('/').to_string(),
            sink,
            upload_dir,
            http_timeout: Duration::from_secs(timeout_secs),
            open_browser,
            accounts_url,
            workdrive,
        })
    }
}

fn or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
}

fn parse_or_default<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = or_default(lookup, key, default);
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}
