// SVG chart components
pub mod axes;
pub mod bar;
pub mod candlestick;
pub mod geometry;
pub mod line;
pub mod pie;

pub use bar::BarChart;
pub use candlestick::CandlestickChart;
pub use line::LineChart;
pub use pie::PieChart;
