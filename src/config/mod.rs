//! Configuration for the Home Assistant plugin
//!
//! The host injects [`PluginSettings`]; they can also be read from the
//! environment or a TOML file for standalone use.

use crate::error::{HassError, Result};
use serde::{Deserialize, Serialize};
use std::{env, fmt, path::Path};
use url::Url;

/// Settings needed to reach a Home Assistant instance
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginSettings {
    /// Base URL of the server (e.g., "http://homeassistant.local:8123")
    pub hass_server: Url,

    /// Long-lived access token
    pub hass_token: String,
}

impl fmt::Debug for PluginSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginSettings")
            .field("hass_server", &self.hass_server.as_str())
            .field("hass_token", &"<redacted>")
            .finish()
    }
}

impl PluginSettings {
    /// Load settings from `HASS_SERVER` and `HASS_TOKEN`
    pub fn from_env() -> Result<Self> {
        let server = env::var("HASS_SERVER")
            .map_err(|_| HassError::config("HASS_SERVER is not set"))?;
        let token =
            env::var("HASS_TOKEN").map_err(|_| HassError::config("HASS_TOKEN is not set"))?;

        let settings = Self {
            hass_server: parse_server_url(&server)?,
            hass_token: token,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| HassError::config(format!("Invalid plugin settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HassError::config(format!(
                "Failed to read settings file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.hass_server.scheme(), "http" | "https" | "ws" | "wss") {
            return Err(HassError::config(
                "hass_server must use http, https, ws or wss scheme",
            ));
        }

        if self.hass_token.trim().is_empty() {
            return Err(HassError::config("hass_token cannot be empty"));
        }

        Ok(())
    }

    /// Websocket endpoint of the server
    pub fn websocket_url(&self) -> Url {
        let mut url = self.hass_server.clone();
        let scheme = match url.scheme() {
            "https" | "wss" => "wss",
            _ => "ws",
        };
        // http(s) <-> ws(s) are all special schemes, so this cannot fail
        let _ = url.set_scheme(scheme);
        url.set_path("/api/websocket");
        url
    }
}

/// Accept a bare host as well as a full URL
fn parse_server_url(server: &str) -> Result<Url> {
    let with_scheme = if server.contains("://") {
        server.to_string()
    } else {
        format!("http://{server}")
    };
    with_scheme
        .parse()
        .map_err(|e| HassError::config(format!("Invalid HASS_SERVER: {e}")))
}
