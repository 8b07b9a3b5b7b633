use fltk::{app, dialog, prelude::*};

use crab_folio::app::content::PortfolioContent;
use crab_folio::app::messages::Message;
use crab_folio::app::platform::detect_system_dark_mode;
use crab_folio::app::settings::AppSettings;
use crab_folio::app::state::AppState;
use crab_folio::ui::main_window::build_main_window;
use crab_folio::ui::theme;

fn main() {
    env_logger::init();

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let content = match PortfolioContent::embedded() {
        Ok(content) => content,
        Err(e) => {
            log::error!("Broken embedded portfolio content: {}", e);
            dialog::alert_default(&format!("CrabFolio cannot start: {}", e));
            return;
        }
    };

    // The theme preference is read exactly once; the system preference only
    // matters until the user toggles for the first time.
    let settings = AppSettings::load();
    let dark_mode = settings
        .theme
        .map(|t| t.is_dark())
        .unwrap_or_else(detect_system_dark_mode);

    let palette = theme::palette(dark_mode);
    let mut widgets = build_main_window(&content, palette, &sender);
    widgets.wind.show();

    let mut state = AppState::new(widgets, settings, content, sender, dark_mode);
    state.start();

    while fltk_app.wait() {
        if let Some(message) = receiver.recv() {
            state.handle(message);
        }
    }
}
