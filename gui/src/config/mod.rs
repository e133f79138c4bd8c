// GUI configuration module
pub mod theme; // Chart colors and pie palette

use anyhow::Context;
use feed::config::settings::DataServiceSettings;
use serde::Deserialize;
use std::path::Path;

use theme::ChartTheme;

/// Points at a JSON file that replaces the embedded default config.
pub const CONFIG_ENV_VAR: &str = "CHART_DASHBOARD_CONFIG";

// Mirrors the structure of assets/config/default.json
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub data_service: DataServiceSettings,
    #[serde(default)]
    pub charts: ChartTheme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub dashboard_title: String,
    pub landing: LandingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LandingSettings {
    pub title: String,
    pub subtitle: String,
    pub button_label: String,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        // Path relative to this .rs file
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig =
            serde_json::from_str(config_str).context("embedded default configuration is invalid")?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))?;
        Ok(config)
    }

    /// The file named by `CHART_DASHBOARD_CONFIG` if set, the embedded default otherwise.
    pub fn load() -> Result<Self, anyhow::Error> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::info!(path = ?path, "Loading configuration from {}", CONFIG_ENV_VAR);
                Self::load_from_path(Path::new(&path))
            }
            None => Self::load_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ChartKind;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.dashboard_title, "Interactive Dashboard");
        assert_eq!(config.app.landing.button_label, "Go to Dashboard");
        assert_eq!(config.data_service, DataServiceSettings::default());
        assert_eq!(
            config.data_service.endpoint_url(ChartKind::Pie),
            "http://localhost:8000/api/pie-chart-data/"
        );
    }

    #[test]
    fn test_default_config_matches_theme_defaults() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.charts, ChartTheme::default());
        assert_eq!(config.charts.pie.palette, vec!["#FF0000", "#0000FF", "#FFFF00"]);
    }

    #[test]
    fn test_missing_optional_sections_use_defaults() {
        let json = r#"{
            "version": "test",
            "app": {
                "window_title": "t", "window_width": 800, "window_height": 600,
                "dashboard_title": "d",
                "landing": { "title": "a", "subtitle": "b", "button_label": "c" }
            }
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.data_service.base_url, "http://localhost:8000");
        assert_eq!(config.charts.line.color, "#FF8042");
    }

    #[test]
    fn test_load_from_missing_path_reports_it() {
        let err = AppConfig::load_from_path(Path::new("/nonexistent/dashboard.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/dashboard.json"));
    }
}
