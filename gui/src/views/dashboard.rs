// Dashboard screen: loads the four datasets once on mount, then renders four chart panels
#![allow(non_snake_case)]
use chrono::Local;
use dioxus::prelude::*;
use feed::DashboardState;
use shared::models::ChartKind;

use crate::components::chart::{BarChart, CandlestickChart, LineChart, PieChart};
use crate::components::{ChartPanel, LoadingSpinner};
use crate::config::theme::ChartTheme;
use crate::config::AppConfig;
use crate::services::feed_client::fetch_dashboard;

#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<AppConfig>();
    let mut state = use_signal(DashboardState::new);

    // Runs once per mount and is dropped with the view.
    let settings = config.data_service.clone();
    use_future(move || {
        let settings = settings.clone();
        async move {
            match fetch_dashboard(settings).await {
                Ok(outcome) => {
                    state.write().settle(outcome);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error fetching chart data");
                    state.write().settle_failed(e.to_string());
                }
            }
        }
    });

    rsx! {
        DashboardContent {
            state: state.read().clone(),
            title: config.app.dashboard_title.clone(),
            charts: config.charts.clone(),
        }
    }
}

/// Spinner while `state` is loading, the titled chart grid once it has settled.
#[component]
pub fn DashboardContent(state: DashboardState, title: String, charts: ChartTheme) -> Element {
    if state.is_loading() {
        return rsx! { LoadingSpinner {} };
    }

    let data = state.data().clone();
    let updated = state
        .settled_at()
        .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string());

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-container",
                h1 { class: "dashboard-title", "{title}" }
                div { class: "chart-grid",
                    ChartPanel { title: ChartKind::Candlestick.title().to_string(),
                        CandlestickChart {
                            points: data.candlestick.clone(),
                            open_color: charts.candlestick.open_color.clone(),
                            close_color: charts.candlestick.close_color.clone(),
                            grid_color: charts.candlestick.grid_color.clone(),
                        }
                    }
                    ChartPanel { title: ChartKind::Line.title().to_string(),
                        LineChart {
                            records: data.line.clone(),
                            color: charts.line.color.clone(),
                            grid_color: charts.line.grid_color.clone(),
                        }
                    }
                    ChartPanel { title: ChartKind::Bar.title().to_string(),
                        BarChart {
                            records: data.bar.clone(),
                            color: charts.bar.color.clone(),
                            grid_color: charts.bar.grid_color.clone(),
                        }
                    }
                    ChartPanel { title: ChartKind::Pie.title().to_string(),
                        PieChart {
                            records: data.pie.clone(),
                            palette: charts.pie.palette.clone(),
                            outer_radius: charts.pie.outer_radius,
                        }
                    }
                }
                {updated.map(|at| rsx! { p { class: "updated-at", "Updated at {at}" } })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed::LoadOutcome;
    use serde_json::json;
    use shared::models::{CandlestickPoint, SeriesRecord};

    fn render(state: DashboardState) -> String {
        let props = DashboardContentProps::builder()
            .state(state)
            .title("Interactive Dashboard".to_string())
            .charts(ChartTheme::default())
            .build();
        let mut dom = VirtualDom::new_with_props(DashboardContent, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new();
        let outcome = LoadOutcome {
            candlestick: Ok(vec![
                CandlestickPoint(json!({ "x": "2024-01-01", "open": 10, "close": 12 })),
                CandlestickPoint(json!({ "x": "2024-01-02", "open": 12, "close": 11 })),
            ]),
            line: Ok(vec![
                SeriesRecord::new("Jan", Some(10.0)),
                SeriesRecord::new("Feb", Some(20.0)),
            ]),
            bar: Ok(vec![SeriesRecord::new("Product A", Some(100.0))]),
            pie: Ok(vec![
                SeriesRecord::new("Red", Some(300.0)),
                SeriesRecord::new("Blue", Some(50.0)),
            ]),
        };
        assert!(state.settle(outcome));
        state
    }

    #[test]
    fn test_loading_state_shows_only_spinner() {
        let html = render(DashboardState::new());
        assert!(html.contains("Loading charts..."));
        assert!(!html.contains("chart-panel"));
        assert!(!html.contains("Interactive Dashboard"));
    }

    #[test]
    fn test_settled_state_shows_four_titled_panels_in_order() {
        let html = render(loaded_state());
        assert!(!html.contains("Loading charts..."));
        assert!(html.contains("Interactive Dashboard"));
        assert_eq!(html.matches("class=\"chart-panel\"").count(), 4);

        let positions: Vec<usize> = ChartKind::ALL
            .iter()
            .map(|kind| html.find(kind.title()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("Updated at "));
    }

    #[test]
    fn test_failed_load_still_renders_empty_panels() {
        let mut state = DashboardState::new();
        assert!(state.settle_failed("client setup failed"));

        let html = render(state);
        assert!(!html.contains("Loading charts..."));
        assert_eq!(html.matches("class=\"chart-panel\"").count(), 4);
    }
}
