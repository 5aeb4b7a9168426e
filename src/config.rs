use crate::error::{DeskError, Result};
use crate::tui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// File name searched for when discovering project configuration.
pub const CONFIG_FILE_NAME: &str = ".ticketdesk.yml";

/// Environment variable overriding the backend base URL.
pub const API_BASE_ENV: &str = "TICKETDESK_API_BASE_URL";

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiSettings {
    /// Theme the UI starts in. Toggling at runtime is not written back.
    #[serde(default)]
    pub theme: ThemeMode,
}

impl DeskConfig {
    /// Loads the nearest `.ticketdesk.yml` above `start_path`, falling back
    /// to defaults when there is none.
    pub fn load(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                let config = Self::load_from(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DeskError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DeskConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Applies a base URL given on the command line or through the
    /// environment, which takes precedence over the file.
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(url) = api_base {
            self.api.base_url = url;
        }
        self
    }

    /// The validated base URL without a trailing slash.
    pub fn api_base_url(&self) -> Result<String> {
        normalize_base_url(&self.api.base_url)
    }
}

/// Checks that `raw` is an absolute http(s) URL and strips trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| DeskError::InvalidUrl {
        url: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
