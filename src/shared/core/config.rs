// Process configuration read from the environment (and an optional .env file).
//
// Responsibilities
// - Collect remote credentials, the local identity, the tracker binary and the listen address.
// - Build the SyncPolicy thresholds, falling back to their defaults when unset.
//
// Testing guidance
// - Use `Config::from_lookup` with a map so tests never mutate process env.

use crate::modules::worklog_sync::core::policy::SyncPolicy;
use chrono::TimeDelta;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_TIMEWARRIOR_BIN: &str = "timew";
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraSettings {
    pub base_url: String,
    pub user: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub jira: JiraSettings,
    /// Display name or account used to recognise our own worklogs.
    pub identity: String,
    pub timewarrior_bin: String,
    pub http_addr: SocketAddr,
    pub policy: SyncPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal outside development.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let jira = JiraSettings {
            base_url: required("JIRA_URL")?.trim_end_matches('/').to_string(),
            user: required("JIRA_USER")?,
            token: required("JIRA_TOKEN")?,
        };
        let identity = get("JIRA_DISPLAY_NAME").unwrap_or_else(|| jira.user.clone());
        let timewarrior_bin =
            get("TIMEWARRIOR_BIN").unwrap_or_else(|| DEFAULT_TIMEWARRIOR_BIN.to_string());
        let http_addr: SocketAddr = match parse_optional("HTTP_ADDR", get("HTTP_ADDR"))? {
            Some(addr) => addr,
            None => DEFAULT_HTTP_ADDR
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    key: "HTTP_ADDR",
                    value: DEFAULT_HTTP_ADDR.to_string(),
                })?,
        };

        let defaults = SyncPolicy::default();
        let policy = SyncPolicy {
            start_tolerance: parse_optional(
                "SYNC_START_TOLERANCE_SECS",
                get("SYNC_START_TOLERANCE_SECS"),
            )?
            .map(TimeDelta::seconds)
            .unwrap_or(defaults.start_tolerance),
            duration_tolerance_ratio: parse_optional(
                "SYNC_DURATION_TOLERANCE_RATIO",
                get("SYNC_DURATION_TOLERANCE_RATIO"),
            )?
            .unwrap_or(defaults.duration_tolerance_ratio),
            noise_floor_seconds: parse_optional(
                "SYNC_NOISE_FLOOR_SECS",
                get("SYNC_NOISE_FLOOR_SECS"),
            )?
            .unwrap_or(defaults.noise_floor_seconds),
            note_window: parse_optional("SYNC_NOTE_WINDOW_SECS", get("SYNC_NOTE_WINDOW_SECS"))?
                .map(TimeDelta::seconds)
                .unwrap_or(defaults.note_window),
        };

        Ok(Self {
            jira,
            identity,
            timewarrior_bin,
            http_addr,
            policy,
        })
    }
}

fn parse_optional<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value })
    })
    .transpose()
}
