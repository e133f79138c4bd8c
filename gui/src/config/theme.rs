// Chart colors, loaded from the `charts` section of the app config
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub candlestick: CandlestickStyle,
    pub line: SeriesStyle,
    pub bar: SeriesStyle,
    pub pie: PieStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandlestickStyle {
    pub open_color: String,
    pub close_color: String,
    pub grid_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub color: String,
    pub grid_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    pub palette: Vec<String>,
    pub outer_radius: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            candlestick: CandlestickStyle::default(),
            line: SeriesStyle::default(),
            bar: SeriesStyle {
                color: "#00C49F".to_string(),
                ..SeriesStyle::default()
            },
            pie: PieStyle::default(),
        }
    }
}

impl Default for CandlestickStyle {
    fn default() -> Self {
        Self {
            open_color: "#8884d8".to_string(),
            close_color: "#82ca9d".to_string(),
            grid_color: "#eee".to_string(),
        }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: "#FF8042".to_string(),
            grid_color: "#ccc".to_string(),
        }
    }
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            palette: vec!["#FF0000".to_string(), "#0000FF".to_string(), "#FFFF00".to_string()],
            outer_radius: 100.0,
        }
    }
}
