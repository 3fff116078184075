#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use fotofolio_core::ApiConfig;

/// Global content API configuration, resolved at startup
static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Get the content API configuration (env values plus command-line overrides)
pub fn get_api_config() -> ApiConfig {
    API_CONFIG.get().cloned().unwrap_or_else(ApiConfig::from_env)
}

/// Fotofolio - photographer portfolio
#[derive(Parser, Debug)]
#[command(name = "fotofolio-desktop")]
#[command(about = "Fotofolio - photographer portfolio with a remote-backed gallery")]
struct Args {
    /// Content API base URL (overrides FOTOFOLIO_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Content API key (overrides FOTOFOLIO_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut api_config = ApiConfig::from_env();
    if let Some(url) = args.api_url {
        api_config.base_url = url;
    }
    if let Some(key) = args.api_key {
        api_config.api_key = key;
    }

    tracing::info!("Starting Fotofolio against {}", api_config.base_url);
    let _ = API_CONFIG.set(api_config);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Fotofolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);
}
