// Transforms shared by the data feed and the chart components.

use crate::models::{SeriesRecord, SeriesResponse};

/// Pairs the i-th label with the i-th value.
///
/// Labels drive the output: a missing `labels` field yields no records, extra
/// values past the last label are dropped, and labels without a matching value
/// get `None`.
pub fn zip_series(
    labels: Option<&[String]>,
    data: Option<&[Option<f64>]>,
) -> Vec<SeriesRecord> {
    let labels = labels.unwrap_or_default();
    let data = data.unwrap_or_default();

    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            SeriesRecord::new(label.clone(), data.get(index).copied().flatten())
        })
        .collect()
}

impl SeriesResponse {
    pub fn into_records(self) -> Vec<SeriesRecord> {
        zip_series(self.labels.as_deref(), self.data.as_deref())
    }
}

// Color for the wedge at `index`, cycling through `palette`.
fn palette_color<'a>(palette: &'a [String], index: usize) -> Option<&'a str> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()].as_str())
}

/// Colors for `count` consecutive pie records, wrapping around `palette`.
/// Empty when the palette is.
pub fn cycle_colors<'a>(palette: &'a [String], count: usize) -> Vec<&'a str> {
    (0..count).filter_map(|i| palette_color(palette, i)).collect()
}
