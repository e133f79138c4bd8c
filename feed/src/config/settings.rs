// Data service settings, deserialized from the `data_service` section of the GUI config
use serde::{Deserialize, Serialize};
use shared::models::ChartKind;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataServiceSettings {
    pub base_url: String,
    // 0 disables the request timeout.
    pub timeout_secs: u64,
    pub endpoints: EndpointPaths,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EndpointPaths {
    pub candlestick: String,
    pub line: String,
    pub bar: String,
    pub pie: String,
}

impl Default for DataServiceSettings {
    fn default() -> Self {
        DataServiceSettings {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
            endpoints: EndpointPaths::default(),
        }
    }
}

impl Default for EndpointPaths {
    fn default() -> Self {
        EndpointPaths {
            candlestick: "/api/candlestick-data/".to_string(),
            line: "/api/line-chart-data/".to_string(),
            bar: "/api/bar-chart-data/".to_string(),
            pie: "/api/pie-chart-data/".to_string(),
        }
    }
}

impl EndpointPaths {
    pub fn path(&self, kind: ChartKind) -> &str {
        match kind {
            ChartKind::Candlestick => &self.candlestick,
            ChartKind::Line => &self.line,
            ChartKind::Bar => &self.bar,
            ChartKind::Pie => &self.pie,
        }
    }
}

impl DataServiceSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the endpoint serving `kind`, joined with exactly one slash.
    pub fn endpoint_url(&self, kind: ChartKind) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoints.path(kind).trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_urls() {
        let settings = DataServiceSettings::default();
        assert_eq!(
            settings.endpoint_url(ChartKind::Candlestick),
            "http://localhost:8000/api/candlestick-data/"
        );
        assert_eq!(
            settings.endpoint_url(ChartKind::Line),
            "http://localhost:8000/api/line-chart-data/"
        );
        assert_eq!(
            settings.endpoint_url(ChartKind::Bar),
            "http://localhost:8000/api/bar-chart-data/"
        );
        assert_eq!(
            settings.endpoint_url(ChartKind::Pie),
            "http://localhost:8000/api/pie-chart-data/"
        );
    }

    #[test]
    fn test_endpoint_url_normalizes_slashes() {
        let mut settings = DataServiceSettings::with_base_url("http://example.test:9000/");
        settings.endpoints.pie = "api/pie/".to_string();
        assert_eq!(settings.endpoint_url(ChartKind::Pie), "http://example.test:9000/api/pie/");
        assert_eq!(
            settings.endpoint_url(ChartKind::Bar),
            "http://example.test:9000/api/bar-chart-data/"
        );
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let json = r#"{ "base_url": "http://10.0.0.2:8000", "endpoints": { "line": "/line/" } }"#;
        let settings: DataServiceSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.timeout_secs, 10);
        assert_eq!(settings.endpoints.line, "/line/");
        assert_eq!(settings.endpoints.bar, "/api/bar-chart-data/");
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let mut settings = DataServiceSettings::default();
        assert_eq!(settings.timeout(), Some(Duration::from_secs(10)));
        settings.timeout_secs = 0;
        assert_eq!(settings.timeout(), None);
    }
}
