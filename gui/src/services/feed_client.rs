// Client side of the chart data service, as used by the dashboard view.
use feed::{load_dashboard, DataServiceSettings, FeedError, HttpChartSource, LoadOutcome};

/// Fetches all four datasets concurrently.
///
/// Per-chart failures are inside the returned outcome; the `Err` case only
/// covers a client that could not be built, before any request went out.
pub async fn fetch_dashboard(settings: DataServiceSettings) -> Result<LoadOutcome, FeedError> {
    tracing::info!(base_url = %settings.base_url, "Fetching dashboard data");
    let source = HttpChartSource::new(settings)?;
    Ok(load_dashboard(&source).await)
}
