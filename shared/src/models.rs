use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// The four datasets the dashboard shows. Each kind owns one endpoint and one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Candlestick,
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    /// Render order of the dashboard panels, also the dispatch order of the fetches.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Candlestick,
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Candlestick => "Candlestick Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Candlestick => "candlestick",
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// One label/value data point. Serialized with the keys the chart panels plot against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    #[serde(rename = "labels")]
    pub label: String,
    // `None` when the service sent fewer values than labels.
    #[serde(rename = "data")]
    pub value: Option<f64>,
}

impl SeriesRecord {
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Body of the line, bar and pie endpoints: two parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    #[serde(default, deserialize_with = "scalar_labels")]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<Vec<Option<f64>>>,
}

impl SeriesResponse {
    /// Decodes a response body. Anything that is not a JSON object carries no fields,
    /// so it decodes to the empty response instead of failing.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

// Category text: strings as-is, other scalars formatted, `null` blank.
fn label_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// Years and other numeric categories are valid labels.
fn scalar_labels<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(labels.map(|values| values.iter().map(label_text).collect()))
}

/// A candlestick point exactly as the service sent it.
///
/// The shape is not validated; accessors pull out the `x`, `open` and `close`
/// fields the candlestick panel plots and return `None` for anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandlestickPoint(pub Value);

impl CandlestickPoint {
    /// Category label for the x axis. Strings are used as-is, other scalars are formatted.
    pub fn x_label(&self) -> String {
        self.0.get("x").map(label_text).unwrap_or_default()
    }

    pub fn open(&self) -> Option<f64> {
        self.number("open")
    }

    pub fn close(&self) -> Option<f64> {
        self.number("close")
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }
}

/// Body of the candlestick endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandlestickResponse {
    #[serde(default)]
    pub data: Option<Vec<CandlestickPoint>>,
}

impl CandlestickResponse {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn into_points(self) -> Vec<CandlestickPoint> {
        self.data.unwrap_or_default()
    }
}
