// HTTP client for the external chart data service
use reqwest::Client;
use serde_json::Value;
use shared::models::ChartKind;

use super::ChartSource;
use crate::config::settings::DataServiceSettings;
use crate::error::FeedError;

/// Reads chart datasets with plain GET requests against the configured host.
#[derive(Debug, Clone)]
pub struct HttpChartSource {
    http: Client,
    settings: DataServiceSettings,
}

impl HttpChartSource {
    pub fn new(settings: DataServiceSettings) -> Result<Self, FeedError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|source| FeedError::Client { source })?;

        Ok(Self { http, settings })
    }
}

impl ChartSource for HttpChartSource {
    async fn fetch(&self, kind: ChartKind) -> Result<Value, FeedError> {
        let url = self.settings.endpoint_url(kind);
        tracing::debug!(chart = %kind, url = %url, "Requesting chart data");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FeedError::Request { kind, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                kind,
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|source| FeedError::Body { kind, source })?;
        tracing::debug!(chart = %kind, status = status.as_u16(), "Received chart data");

        Ok(body)
    }
}
