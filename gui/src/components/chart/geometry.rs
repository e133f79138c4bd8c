// Layout math for the SVG charts. Everything here is pure so it can be tested
// without a renderer.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const VIEW_WIDTH: f64 = 600.0;
pub const VIEW_HEIGHT: f64 = 300.0;
// Room for the y-axis tick labels, left of the plot area.
pub const Y_AXIS_GUTTER: f64 = 40.0;
pub const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 20.0, right: 20.0, bottom: 40.0, left: 20.0 }
    }
}

/// The SVG viewport and the plot area inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
}

impl Default for Frame {
    fn default() -> Self {
        Self { width: VIEW_WIDTH, height: VIEW_HEIGHT, margin: Margins::default() }
    }
}

impl Frame {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn plot_left(&self) -> f64 {
        self.margin.left + Y_AXIS_GUTTER
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    /// Width of one category slot when `count` categories share the x axis.
    pub fn band_width(&self, count: usize) -> f64 {
        self.plot_width() / count.max(1) as f64
    }

    pub fn category_center(&self, index: usize, count: usize) -> f64 {
        self.plot_left() + self.band_width(count) * (index as f64 + 0.5)
    }
}

/// Linear value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// Domain covering all finite `values`.
    /// Bars pass `include_zero` so they grow from the baseline.
    pub fn from_values(values: impl IntoIterator<Item = f64>, include_zero: bool) -> Self {
        let mut bounds: Option<(f64, f64)> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }

        let (mut min, mut max) = bounds.unwrap_or((0.0, 1.0));
        if include_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        if min == max {
            // Flat domain: open it up around the single value.
            if min == 0.0 {
                max = 1.0;
            } else {
                let pad = min.abs() * 0.1;
                min -= pad;
                max += pad;
            }
        }
        Self { min, max }
    }

    pub fn to_y(&self, value: f64, frame: &Frame) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        frame.plot_bottom() - ratio * frame.plot_height()
    }

    /// Evenly spaced tick values from min to max inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (count - 1) as f64;
        (0..count).map(|i| self.min + step * i as f64).collect()
    }
}

pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Plot positions of the defined values, keeping their category index.
pub fn series_points(values: &[Option<f64>], frame: &Frame, scale: &ValueScale) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            value.map(|v| Point {
                index,
                x: frame.category_center(index, values.len()),
                y: scale.to_y(v, frame),
            })
        })
        .collect()
}

/// `points` attributes for a line series. An undefined value ends the current
/// segment instead of being interpolated over.
pub fn polyline_segments(values: &[Option<f64>], frame: &Frame, scale: &ValueScale) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (index, value) in values.iter().enumerate() {
        match value {
            Some(v) => {
                let x = frame.category_center(index, values.len());
                let y = scale.to_y(*v, frame);
                current.push(format!("{:.2},{:.2}", x, y));
            }
            None => {
                if !current.is_empty() {
                    segments.push(current.join(" "));
                    current.clear();
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current.join(" "));
    }
    segments
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One rectangle per defined value, growing from zero (clamped into the domain).
pub fn bar_rects(values: &[Option<f64>], frame: &Frame, scale: &ValueScale) -> Vec<BarRect> {
    let band = frame.band_width(values.len());
    let width = band * 0.8;
    let baseline = scale.to_y(0.0_f64.clamp(scale.min, scale.max), frame);

    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            value.map(|v| {
                let top = scale.to_y(v, frame);
                BarRect {
                    index,
                    x: frame.category_center(index, values.len()) - width / 2.0,
                    y: top.min(baseline),
                    width,
                    height: (baseline - top).abs(),
                }
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    /// Index of the record, which also picks the palette color.
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Wedges sized by each positive value, clockwise from twelve o'clock.
/// Undefined and non-positive values get no wedge but keep their index.
pub fn pie_wedges(values: &[Option<f64>], cx: f64, cy: f64, radius: f64) -> Vec<Wedge> {
    let positive = |v: &Option<f64>| v.filter(|x| x.is_finite() && *x > 0.0);
    let total: f64 = values.iter().filter_map(positive).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    let mut wedges = Vec::new();
    for (index, value) in values.iter().enumerate() {
        let Some(v) = positive(value) else { continue };
        let sweep = v / total * TAU;
        let start = angle;
        let end = angle + sweep;
        angle = end;

        let path = if sweep >= TAU - 1e-9 {
            // A full circle cannot be drawn as one arc.
            let (top, bottom, r) = (cy - radius, cy + radius, radius);
            format!(
                "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} \
                 A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z"
            )
        } else {
            let (x0, y0) = polar(cx, cy, radius, start);
            let (x1, y1) = polar(cx, cy, radius, end);
            let large_arc = if sweep > PI { 1 } else { 0 };
            let r = radius;
            format!(
                "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} \
                 A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
            )
        };

        let (label_x, label_y) = polar(cx, cy, radius + 16.0, start + sweep / 2.0);
        wedges.push(Wedge {
            index,
            value: v,
            start_angle: start,
            end_angle: end,
            path,
            label_x,
            label_y,
        });
    }
    wedges
}
