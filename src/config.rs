//! Configuration handling for the TUI

use crate::state::Section;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default message-delivery endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/send-email";
/// Caller-enforced wait for the endpoint
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;
/// Reference row for the active-section tracker, counted from the top of the page body
pub const DEFAULT_REFERENCE_ROW: i32 = 4;
/// Scroll offset (rows) past which the navigation bar counts as scrolled
pub const DEFAULT_SCROLLED_ROW: i32 = 1;

/// Environment variable overriding the endpoint
const ENDPOINT_ENV: &str = "PORTFOLIO_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortfolioConfig {
    /// URL the contact form posts to
    pub endpoint_url: Option<String>,
    /// Address shown in timeout and network error messages
    pub fallback_email: Option<String>,
    /// Seconds to wait for the endpoint before giving up
    pub request_timeout_secs: Option<u64>,
    /// Row at which a section counts as active
    pub reference_row: Option<i32>,
    /// Rows scrolled before the navigation bar changes background
    pub scrolled_row: Option<i32>,
    /// Section shown on startup
    pub start_section: Option<Section>,
}

impl PortfolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "portfolio", "portfolio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortfolioConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint URL: environment variable, then config file, then default
    pub fn endpoint(&self) -> String {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Fallback address, defaulting to the contact email on the page
    pub fn fallback_email_or(&self, default: &str) -> String {
        self.fallback_email
            .clone()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn reference_row(&self) -> i32 {
        self.reference_row.unwrap_or(DEFAULT_REFERENCE_ROW)
    }

    pub fn scrolled_row(&self) -> i32 {
        self.scrolled_row.unwrap_or(DEFAULT_SCROLLED_ROW)
    }
}
