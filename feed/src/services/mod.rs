// Sources of raw chart data
pub mod http_source;

use crate::error::FeedError;
use serde_json::Value;
use shared::models::ChartKind;

/// Anything that can produce the raw JSON body for a chart kind.
///
/// The dashboard loader only depends on this trait, so tests can swap the HTTP
/// source for canned responses.
#[allow(async_fn_in_trait)]
pub trait ChartSource {
    async fn fetch(&self, kind: ChartKind) -> Result<Value, FeedError>;
}
