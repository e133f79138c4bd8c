// GUI components module
pub mod chart;
pub mod panel;
pub mod spinner;

pub use panel::ChartPanel;
pub use spinner::LoadingSpinner;
