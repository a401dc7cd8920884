//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::SiteSelectors;
use crate::utils::parse_selector;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// nps.gov layout
    #[serde(default)]
    pub site: SiteConfig,

    /// Radius search API settings
    #[serde(default)]
    pub places: PlacesConfig,

    /// Cache file location
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }

        let base = url::Url::parse(&self.site.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation("site.base_url must be http(s)"));
        }
        if self.site.detail_index_file.trim().is_empty() {
            return Err(AppError::validation("site.detail_index_file is empty"));
        }
        for (name, selector) in self.site.selectors.entries() {
            parse_selector(selector)
                .map_err(|e| AppError::validation(format!("site.selectors.{name}: {e}")))?;
        }

        url::Url::parse(&self.places.endpoint)?;
        if self.places.radius == 0 {
            return Err(AppError::validation("places.radius must be > 0"));
        }
        if self.places.max_matches == 0 {
            return Err(AppError::validation("places.max_matches must be > 0"));
        }

        if self.cache.path.as_os_str().is_empty() {
            return Err(AppError::validation("cache.path is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; the client default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Layout of the documentation site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host every scraped path is joined onto
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the page listing every state
    #[serde(default = "defaults::index_path")]
    pub index_path: String,

    /// File name appended to each park path
    #[serde(default = "defaults::detail_index_file")]
    pub detail_index_file: String,

    /// CSS selectors
    #[serde(default)]
    pub selectors: SiteSelectors,
}

impl SiteConfig {
    /// Absolute URL of the state index page.
    pub fn index_url(&self) -> String {
        crate::utils::url::join_path(&self.base_url, &self.index_path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            index_path: defaults::index_path(),
            detail_index_file: defaults::detail_index_file(),
            selectors: SiteSelectors::default(),
        }
    }
}

/// Radius search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Search endpoint
    #[serde(default = "defaults::places_endpoint")]
    pub endpoint: String,

    /// Search radius in the API's distance unit
    #[serde(default = "defaults::radius")]
    pub radius: u32,

    /// Maximum number of places returned
    #[serde(default = "defaults::max_matches")]
    pub max_matches: u32,

    /// Ambiguity resolution mode
    #[serde(default = "defaults::ambiguities")]
    pub ambiguities: String,

    /// Response format
    #[serde(default = "defaults::out_format")]
    pub out_format: String,

    /// API credential
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::places_endpoint(),
            radius: defaults::radius(),
            max_matches: defaults::max_matches(),
            ambiguities: defaults::ambiguities(),
            out_format: defaults::out_format(),
            api_key: None,
        }
    }
}

/// Cache file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// JSON file holding every cached page and search result
    #[serde(default = "defaults::cache_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: defaults::cache_path(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; nps-sites/0.1)".into()
    }

    // Site defaults
    pub fn base_url() -> String {
        "https://www.nps.gov".into()
    }
    pub fn index_path() -> String {
        "/index.htm".into()
    }
    pub fn detail_index_file() -> String {
        "index.htm".into()
    }

    // Places defaults
    pub fn places_endpoint() -> String {
        "http://www.mapquestapi.com/search/v2/radius".into()
    }
    pub fn radius() -> u32 {
        10
    }
    pub fn max_matches() -> u32 {
        10
    }
    pub fn ambiguities() -> String {
        "ignore".into()
    }
    pub fn out_format() -> String {
        "json".into()
    }

    // Cache defaults
    pub fn cache_path() -> PathBuf {
        PathBuf::from("cache.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_index_url() {
        assert_eq!(
            Config::default().site.index_url(),
            "https://www.nps.gov/index.htm"
        );
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_selector() {
        let mut config = Config::default();
        config.site.selectors.footer = "[[invalid".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.selectors.footer"));
    }

    #[test]
    fn validate_rejects_zero_radius() {
        let mut config = Config::default();
        config.places.radius = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [cache]
            path = "data/nps_cache.json"

            [places]
            api_key = "secret"

            [site.selectors]
            site_heading = "h4"
            "#,
        )
        .unwrap();

        assert_eq!(config.cache.path, PathBuf::from("data/nps_cache.json"));
        assert_eq!(config.places.api_key.as_deref(), Some("secret"));
        assert_eq!(config.places.radius, 10);
        assert_eq!(config.site.selectors.site_heading, "h4");
        assert_eq!(config.site.selectors.site_list, "ul#list_parks");
        assert_eq!(config.http.timeout_secs, None);
    }
}
