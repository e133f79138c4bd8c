// Data model and transforms shared by the data feed and the GUI.
pub mod models;
pub mod utils;

pub use models::{CandlestickPoint, CandlestickResponse, ChartKind, SeriesRecord, SeriesResponse};
pub use utils::{cycle_colors, zip_series};
