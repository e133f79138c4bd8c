// Line chart over labels/data records, plus the reusable line series
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SeriesRecord;

use super::axes::{CartesianAxes, ChartTooltip};
use super::geometry::{format_value, polyline_segments, series_points, Frame, ValueScale};

/// One polyline with hoverable points. Breaks where a value is missing.
#[component]
pub fn LineSeries(
    values: Vec<Option<f64>>,
    labels: Vec<String>,
    name: String,
    color: String,
    scale: ValueScale,
) -> Element {
    let frame = Frame::default();
    let mut hovered = use_signal(|| None::<usize>);

    let segments = polyline_segments(&values, &frame, &scale);
    let dots: Vec<(usize, f64, f64)> = series_points(&values, &frame, &scale)
        .into_iter()
        .map(|p| (p.index, p.x, p.y))
        .collect();

    let hovered_index = *hovered.read();
    let tooltip = hovered_index.and_then(|index| {
        let (_, x, y) = dots.iter().find(|(i, _, _)| *i == index).copied()?;
        let value = values.get(index).copied().flatten()?;
        let label = labels.get(index).cloned().unwrap_or_default();
        Some((x, y, format!("{} | {}: {}", label, name, format_value(value))))
    });

    rsx! {
        g { class: "line-series",
            for (i, segment) in segments.iter().enumerate() {
                polyline {
                    key: "segment-{i}",
                    points: "{segment}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "2",
                }
            }
            for (index, x, y) in dots {
                circle {
                    key: "dot-{index}",
                    cx: "{x}", cy: "{y}", r: "3",
                    fill: "#fff",
                    stroke: "{color}",
                    stroke_width: "1.5",
                    onmouseenter: move |_| hovered.set(Some(index)),
                    onmouseleave: move |_| hovered.set(None),
                }
            }
            {tooltip.map(|(x, y, label)| rsx! { ChartTooltip { x: x, y: y, label: label } })}
        }
    }
}

#[component]
pub fn LineChart(records: Vec<SeriesRecord>, color: String, grid_color: String) -> Element {
    let frame = Frame::default();
    let labels: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
    let values: Vec<Option<f64>> = records.iter().map(|r| r.value).collect();
    let scale = ValueScale::from_values(values.iter().flatten().copied(), false);
    let view_box = frame.view_box();

    rsx! {
        svg { class: "line-chart", view_box: "{view_box}",
            CartesianAxes { labels: labels.clone(), scale: scale, grid_color: grid_color.clone() }
            LineSeries {
                values: values,
                labels: labels,
                name: "data".to_string(),
                color: color.clone(),
                scale: scale,
            }
        }
    }
}
