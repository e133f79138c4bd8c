// Bar chart over labels/data records
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SeriesRecord;

use super::axes::{CartesianAxes, ChartTooltip};
use super::geometry::{bar_rects, format_value, Frame, ValueScale};

#[component]
pub fn BarChart(records: Vec<SeriesRecord>, color: String, grid_color: String) -> Element {
    let frame = Frame::default();
    let mut hovered = use_signal(|| None::<usize>);

    let labels: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
    let values: Vec<Option<f64>> = records.iter().map(|r| r.value).collect();
    let scale = ValueScale::from_values(values.iter().flatten().copied(), true);
    let bars: Vec<(usize, f64, f64, f64, f64)> = bar_rects(&values, &frame, &scale)
        .into_iter()
        .map(|b| (b.index, b.x, b.y, b.width, b.height))
        .collect();
    let view_box = frame.view_box();

    let hovered_index = *hovered.read();
    let tooltip = hovered_index.and_then(|index| {
        let (_, x, y, width, _) = bars.iter().find(|bar| bar.0 == index).copied()?;
        let record = records.get(index)?;
        let value = record.value?;
        Some((x + width / 2.0, y, format!("{} | data: {}", record.label, format_value(value))))
    });

    rsx! {
        svg { class: "bar-chart", view_box: "{view_box}",
            CartesianAxes { labels: labels, scale: scale, grid_color: grid_color.clone() }
            g { class: "bar-series",
                for (index, x, y, width, height) in bars {
                    rect {
                        key: "bar-{index}",
                        x: "{x}", y: "{y}", width: "{width}", height: "{height}",
                        fill: "{color}",
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
            }
            {tooltip.map(|(x, y, label)| rsx! { ChartTooltip { x: x, y: y, label: label } })}
        }
    }
}
