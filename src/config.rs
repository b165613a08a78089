use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_fps: f64,
    #[serde(default)]
    pub default_page: DefaultPage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultPage {
    #[default]
    Home,
    Tweets,
    About,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_tick_rate() -> f64 {
    30.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            tick_rate_fps: default_tick_rate(),
            default_page: DefaultPage::default(),
        }
    }
}

impl AppConfig {
    /// Apply a `--backend` CLI override on top of the loaded config.
    pub fn with_backend_override(mut self, backend: Option<String>) -> Self {
        if let Some(url) = backend {
            self.backend_url = url;
        }
        self
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/crisistui/config.toml"))
}

pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };

    let Ok(contents) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };

    toml::from_str(&contents).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert!(matches!(config.default_page, DefaultPage::Home));
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend_url, "http://localhost:8000");
    }

    #[test]
    fn tick_rate_is_read_from_toml() {
        let config: AppConfig = toml::from_str("tick_rate_fps = 10.0").unwrap();
        assert_eq!(config.tick_rate_fps, 10.0);
    }

    #[test]
    fn backend_override_wins() {
        let config = AppConfig::default().with_backend_override(Some("http://10.0.0.2:9000".into()));
        assert_eq!(config.backend_url, "http://10.0.0.2:9000");
        let config = AppConfig::default().with_backend_override(None);
        assert_eq!(config.backend_url, "http://localhost:8000");
    }
}
