//! Application builder and boot wiring.

use std::sync::Arc;

use iced::{Settings, Theme};

use crate::state::State;
use crate::theme::CoolstayTheme;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Assemble and run the iced application.
pub fn application(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);

    iced::application("Kodai Cool Stay", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(iced::window::Settings {
            size: bootstrap::WINDOW_SIZE,
            min_size: Some(iced::Size::new(760.0, 560.0)),
            ..Default::default()
        })
        .run_with(move || bootstrap::runtime_boot(&config))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("coolstay".to_string()),
        antialiasing: true,
        ..Default::default()
    }
}

fn app_theme(_state: &State) -> Theme {
    CoolstayTheme::theme()
}
