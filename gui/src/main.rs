// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod views;

use app::App;
use config::AppConfig;

const STYLE: &str = include_str!("../assets/style.css");

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Chart Dashboard GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load() {
        Ok(cfg) => {
            tracing::info!(
                version = %cfg.version,
                data_service = %cfg.data_service.base_url,
                "Loaded configuration"
            );
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}. Exiting.", e);
            std::process::exit(1);
        }
    };

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.window_title.clone())
                .with_inner_size(LogicalSize::new(
                    app_config.app.window_width as f64,
                    app_config.app.window_height as f64,
                )),
        )
        .with_custom_head(format!("<style>{}</style>", STYLE));

    // The config is provided as root context; views read it with `use_context::<AppConfig>()`.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("Chart Dashboard GUI finished.");
}
