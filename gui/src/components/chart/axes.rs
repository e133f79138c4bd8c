// Grid, category labels and value ticks shared by the cartesian charts
#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::geometry::{format_value, Frame, ValueScale, TICK_COUNT};

#[component]
pub fn CartesianAxes(labels: Vec<String>, scale: ValueScale, grid_color: String) -> Element {
    let frame = Frame::default();
    let (left, right) = (frame.plot_left(), frame.plot_right());
    let (top, bottom) = (frame.plot_top(), frame.plot_bottom());
    let label_y = bottom + 18.0;
    let tick_x = left - 6.0;

    let ticks: Vec<(f64, String)> = scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|t| (scale.to_y(t, &frame), format_value(t)))
        .collect();
    let categories: Vec<(f64, String)> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| (frame.category_center(i, labels.len()), label.clone()))
        .collect();

    rsx! {
        g { class: "chart-axes",
            for (i, (y, _)) in ticks.iter().enumerate() {
                line {
                    key: "grid-{i}",
                    x1: "{left}", x2: "{right}", y1: "{y}", y2: "{y}",
                    stroke: "{grid_color}",
                    stroke_dasharray: "5 5",
                }
            }
            for (i, (x, _)) in categories.iter().enumerate() {
                line {
                    key: "vgrid-{i}",
                    x1: "{x}", x2: "{x}", y1: "{top}", y2: "{bottom}",
                    stroke: "{grid_color}",
                    stroke_dasharray: "5 5",
                }
            }
            line { x1: "{left}", x2: "{right}", y1: "{bottom}", y2: "{bottom}", stroke: "#666" }
            line { x1: "{left}", x2: "{left}", y1: "{top}", y2: "{bottom}", stroke: "#666" }
            for (i, (y, tick_label)) in ticks.iter().enumerate() {
                text {
                    key: "tick-{i}",
                    x: "{tick_x}", y: "{y}",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    font_size: "11",
                    fill: "#666",
                    "{tick_label}"
                }
            }
            for (i, (x, label)) in categories.iter().enumerate() {
                text {
                    key: "cat-{i}",
                    x: "{x}", y: "{label_y}",
                    text_anchor: "middle",
                    font_size: "11",
                    fill: "#666",
                    "{label}"
                }
            }
        }
    }
}

/// Hover box pinned above a data point.
#[component]
pub fn ChartTooltip(x: f64, y: f64, label: String) -> Element {
    let width = label.chars().count() as f64 * 7.0 + 16.0;
    let frame = Frame::default();
    // Keep the box inside the view box.
    let left = (x - width / 2.0).clamp(0.0, (frame.width - width).max(0.0));
    let box_top = (y - 34.0).max(0.0);
    let text_x = left + width / 2.0;
    let text_y = box_top + 16.0;

    rsx! {
        g { class: "chart-tooltip",
            rect { x: "{left}", y: "{box_top}", width: "{width}", height: "24", rx: "4" }
            text { x: "{text_x}", y: "{text_y}", text_anchor: "middle", "{label}" }
        }
    }
}
