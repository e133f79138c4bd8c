// Loads all four chart datasets concurrently.
//
// Each fetch is its own failure boundary: one chart failing leaves the other
// three untouched. The joined result is only produced once every fetch has
// settled, which is the point the dashboard leaves its loading state.

use shared::models::{
    CandlestickPoint, CandlestickResponse, ChartKind, SeriesRecord, SeriesResponse,
};

use crate::error::FeedError;
use crate::services::ChartSource;

/// Result of one dashboard load, one independent result per chart.
#[derive(Debug)]
pub struct LoadOutcome {
    pub candlestick: Result<Vec<CandlestickPoint>, FeedError>,
    pub line: Result<Vec<SeriesRecord>, FeedError>,
    pub bar: Result<Vec<SeriesRecord>, FeedError>,
    pub pie: Result<Vec<SeriesRecord>, FeedError>,
}

impl LoadOutcome {
    /// Errors in panel order, paired with the chart they belong to.
    pub fn errors(&self) -> Vec<(ChartKind, &FeedError)> {
        [
            (ChartKind::Candlestick, self.candlestick.as_ref().err()),
            (ChartKind::Line, self.line.as_ref().err()),
            (ChartKind::Bar, self.bar.as_ref().err()),
            (ChartKind::Pie, self.pie.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(kind, err)| err.map(|e| (kind, e)))
        .collect()
    }
}

pub async fn load_candlestick<S: ChartSource>(
    source: &S,
) -> Result<Vec<CandlestickPoint>, FeedError> {
    let kind = ChartKind::Candlestick;
    let body = source.fetch(kind).await?;
    let response = CandlestickResponse::from_value(body)
        .map_err(|source| FeedError::Decode { kind, source })?;
    Ok(response.into_points())
}

/// Fetches a labels/data endpoint and zips it into series records.
pub async fn load_series<S: ChartSource>(
    source: &S,
    kind: ChartKind,
) -> Result<Vec<SeriesRecord>, FeedError> {
    let body = source.fetch(kind).await?;
    let response = SeriesResponse::from_value(body)
        .map_err(|source| FeedError::Decode { kind, source })?;
    Ok(response.into_records())
}

/// Dispatches the four fetches at once and waits for all of them to settle.
pub async fn load_dashboard<S: ChartSource>(source: &S) -> LoadOutcome {
    tracing::info!("Loading dashboard chart data");

    let (candlestick, line, bar, pie) = tokio::join!(
        load_candlestick(source),
        load_series(source, ChartKind::Line),
        load_series(source, ChartKind::Bar),
        load_series(source, ChartKind::Pie),
    );
    let outcome = LoadOutcome {
        candlestick,
        line,
        bar,
        pie,
    };

    for (kind, err) in outcome.errors() {
        tracing::error!(chart = %kind, error = %err, "Error fetching chart data");
    }

    outcome
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Barrier;

    /// Canned source: a body per chart, or an HTTP status to fail with.
    pub(crate) struct MockSource {
        responses: HashMap<ChartKind, Result<Value, u16>>,
        barrier: Option<Arc<Barrier>>,
    }

    impl MockSource {
        pub(crate) fn new() -> Self {
            Self {
                responses: HashMap::new(),
                barrier: None,
            }
        }

        pub(crate) fn valid() -> Self {
            Self::new()
                .respond(ChartKind::Candlestick, json!({ "data": [
                    { "x": "2024-01-01", "open": 10.0, "close": 12.0 },
                    { "x": "2024-01-02", "open": 12.0, "close": 11.5 }
                ] }))
                .respond(
                    ChartKind::Line,
                    json!({ "labels": ["Jan", "Feb", "Mar"], "data": [10, 20, 30] }),
                )
                .respond(
                    ChartKind::Bar,
                    json!({ "labels": ["Product A", "Product B"], "data": [100, 150] }),
                )
                .respond(
                    ChartKind::Pie,
                    json!({ "labels": ["Red", "Blue", "Yellow"], "data": [300, 50, 100] }),
                )
        }

        pub(crate) fn respond(mut self, kind: ChartKind, body: Value) -> Self {
            self.responses.insert(kind, Ok(body));
            self
        }

        pub(crate) fn fail(mut self, kind: ChartKind, status: u16) -> Self {
            self.responses.insert(kind, Err(status));
            self
        }

        fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
            self.barrier = Some(barrier);
            self
        }
    }

    impl ChartSource for MockSource {
        async fn fetch(&self, kind: ChartKind) -> Result<Value, FeedError> {
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            match self.responses.get(&kind) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(status)) => Err(FeedError::Status {
                    kind,
                    status: *status,
                }),
                None => Err(FeedError::Status { kind, status: 404 }),
            }
        }
    }

    #[tokio::test]
    async fn test_load_dashboard_all_valid() {
        let outcome = load_dashboard(&MockSource::valid()).await;
        assert!(outcome.errors().is_empty());

        let candles = outcome.candlestick.unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].close(), Some(11.5));

        assert_eq!(
            outcome.line.unwrap(),
            vec![
                SeriesRecord::new("Jan", Some(10.0)),
                SeriesRecord::new("Feb", Some(20.0)),
                SeriesRecord::new("Mar", Some(30.0)),
            ]
        );
        assert_eq!(outcome.bar.unwrap().len(), 2);
        assert_eq!(outcome.pie.unwrap()[0], SeriesRecord::new("Red", Some(300.0)));
    }

    #[tokio::test]
    async fn test_candlestick_failure_does_not_block_other_charts() {
        let source = MockSource::valid().fail(ChartKind::Candlestick, 500);
        let outcome = load_dashboard(&source).await;

        let errors = outcome.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, ChartKind::Candlestick);
        assert!(outcome.line.as_ref().is_ok_and(|r| r.len() == 3));
        assert!(outcome.bar.as_ref().is_ok_and(|r| r.len() == 2));
        assert!(outcome.pie.as_ref().is_ok_and(|r| r.len() == 3));
    }

    #[tokio::test]
    async fn test_missing_labels_yields_empty_series() {
        let source = MockSource::valid().respond(ChartKind::Line, json!({ "data": [1, 2, 3] }));
        let outcome = load_dashboard(&source).await;
        assert_eq!(outcome.line.unwrap(), Vec::<SeriesRecord>::new());
    }

    #[tokio::test]
    async fn test_numeric_labels_are_plotted() {
        let source = MockSource::valid()
            .respond(ChartKind::Line, json!({ "labels": [2021, 2022], "data": [1, 2] }));
        let outcome = load_dashboard(&source).await;
        assert_eq!(
            outcome.line.unwrap(),
            vec![
                SeriesRecord::new("2021", Some(1.0)),
                SeriesRecord::new("2022", Some(2.0)),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_series_is_decode_error_for_that_chart_only() {
        let source = MockSource::valid()
            .respond(ChartKind::Bar, json!({ "labels": "Product A", "data": [1, 2] }));
        let outcome = load_dashboard(&source).await;
        assert!(matches!(outcome.bar, Err(FeedError::Decode { kind: ChartKind::Bar, .. })));
        assert!(outcome.line.is_ok());
        assert!(outcome.pie.is_ok());
        assert!(outcome.candlestick.is_ok());
    }

    #[tokio::test]
    async fn test_fetches_are_in_flight_together() {
        // The barrier only opens once all four fetches are waiting on it, so a
        // sequential loader would never get past the first one.
        let barrier = Arc::new(Barrier::new(ChartKind::ALL.len()));
        let source = MockSource::valid().with_barrier(barrier);
        let outcome = tokio::time::timeout(Duration::from_secs(5), load_dashboard(&source))
            .await
            .expect("fetches were not dispatched concurrently");
        assert!(outcome.errors().is_empty());
    }
}
