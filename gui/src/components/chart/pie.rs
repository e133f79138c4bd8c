// Pie chart: one wedge per record, colors cycle through the palette by record index
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SeriesRecord;
use shared::utils::cycle_colors;

use super::axes::ChartTooltip;
use super::geometry::{format_value, pie_wedges, Frame};

const FALLBACK_COLOR: &str = "#8884d8";

#[component]
pub fn PieChart(records: Vec<SeriesRecord>, palette: Vec<String>, outer_radius: f64) -> Element {
    let frame = Frame::default();
    let (cx, cy) = (frame.width / 2.0, frame.height / 2.0);
    let mut hovered = use_signal(|| None::<usize>);

    let values: Vec<Option<f64>> = records.iter().map(|r| r.value).collect();
    let wedges = pie_wedges(&values, cx, cy, outer_radius);
    let colors = cycle_colors(&palette, records.len());
    let slices: Vec<(usize, String, String, f64, f64, &'static str, String)> = wedges
        .iter()
        .map(|w| {
            let color = colors.get(w.index).copied().unwrap_or(FALLBACK_COLOR).to_string();
            let anchor = if w.label_x < cx { "end" } else { "start" };
            (w.index, w.path.clone(), color, w.label_x, w.label_y, anchor, format_value(w.value))
        })
        .collect();
    let view_box = frame.view_box();

    let hovered_index = *hovered.read();
    let tooltip = hovered_index.and_then(|index| {
        let wedge = wedges.iter().find(|w| w.index == index)?;
        let record = records.get(index)?;
        let label = format!("{}: {}", record.label, format_value(wedge.value));
        Some((wedge.label_x, wedge.label_y, label))
    });

    rsx! {
        svg { class: "pie-chart", view_box: "{view_box}",
            g { class: "pie-wedges",
                for (index, path, color, label_x, label_y, anchor, value) in slices {
                    g { key: "wedge-{index}",
                        path {
                            d: "{path}",
                            fill: "{color}",
                            stroke: "#fff",
                            onmouseenter: move |_| hovered.set(Some(index)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                        text {
                            x: "{label_x}", y: "{label_y}",
                            text_anchor: "{anchor}",
                            dominant_baseline: "middle",
                            font_size: "12",
                            fill: "{color}",
                            "{value}"
                        }
                    }
                }
            }
            {tooltip.map(|(x, y, label)| rsx! { ChartTooltip { x: x, y: y, label: label } })}
        }
    }
}
