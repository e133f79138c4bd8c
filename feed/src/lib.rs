// Feed library root
// Fetches the four chart datasets from the data service and tracks the
// dashboard's loading lifecycle.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod services;

pub use config::settings::{DataServiceSettings, EndpointPaths};
pub use dashboard::loader::{load_dashboard, LoadOutcome};
pub use dashboard::state::{ChartFailure, DashboardData, DashboardState, LoadPhase};
pub use error::FeedError;
pub use services::{http_source::HttpChartSource, ChartSource};
