// Candlestick panel: the open and close prices drawn as two overlaid lines over `x`
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::CandlestickPoint;

use super::axes::CartesianAxes;
use super::geometry::{Frame, ValueScale};
use super::line::LineSeries;

#[component]
pub fn CandlestickChart(
    points: Vec<CandlestickPoint>,
    open_color: String,
    close_color: String,
    grid_color: String,
) -> Element {
    let frame = Frame::default();
    let labels: Vec<String> = points.iter().map(CandlestickPoint::x_label).collect();
    let opens: Vec<Option<f64>> = points.iter().map(CandlestickPoint::open).collect();
    let closes: Vec<Option<f64>> = points.iter().map(CandlestickPoint::close).collect();
    // Both series share one value axis.
    let values = opens.iter().chain(closes.iter()).flatten().copied();
    let scale = ValueScale::from_values(values, false);
    let view_box = frame.view_box();

    rsx! {
        svg { class: "candlestick-chart", view_box: "{view_box}",
            CartesianAxes { labels: labels.clone(), scale: scale, grid_color: grid_color.clone() }
            LineSeries {
                values: opens,
                labels: labels.clone(),
                name: "open".to_string(),
                color: open_color.clone(),
                scale: scale,
            }
            LineSeries {
                values: closes,
                labels: labels,
                name: "close".to_string(),
                color: close_color.clone(),
                scale: scale,
            }
        }
    }
}
