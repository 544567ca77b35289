#![allow(non_snake_case)]

mod app;
mod components;
mod confirm;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::{ChatConfig, ConfirmMode};

/// Global launch configuration, set from command line
static CONFIG: OnceLock<ChatConfig> = OnceLock::new();

/// Get the launch configuration (set from command line or default)
pub fn get_config() -> ChatConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// SwipeChat - single-screen chat with swipe actions
#[derive(Parser, Debug)]
#[command(name = "swipechat-desktop")]
#[command(about = "SwipeChat - swipe to reply, edit or delete")]
struct Args {
    /// How to confirm deletes: drawn on the screen, or a native dialog
    #[arg(short, long, value_enum, default_value_t = ConfirmMode::Inline)]
    confirm: ConfirmMode,

    /// Window title
    #[arg(short, long, default_value = "SwipeChat")]
    title: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = ChatConfig {
        title: args.title,
        confirm_mode: args.confirm,
    };
    let _ = CONFIG.set(config.clone());

    // Phone-shaped window
    let window_width = 420.0;
    let window_height = 820.0;

    tracing::info!("Starting '{}' with {:?} delete confirmation", config.title, config.confirm_mode);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
