//! glassdeck — a transparent, borderless widget overlay for the desktop.
//!
//! A small always-on-top window over the wallpaper showing swipeable
//! widget panels, paged with the chevron buttons at the window edges.
//! Space closes the overlay, F toggles the FPS readout.

mod app;
mod clock;
mod settings;
mod wallpaper;
mod weather;

use app::DeckApp;
use eframe::NativeOptions;
use settings::Settings;

fn main() -> eframe::Result<()> {
    let settings = Settings::load();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(settings.size())
        .with_decorations(settings.decorated)
        .with_transparent(true)
        .with_window_level(egui::WindowLevel::AlwaysOnTop)
        .with_title("glassdeck");

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "glassdeck",
        options,
        Box::new(|cc| {
            glasscore::OverlayTheme::default().apply(&cc.egui_ctx);
            Box::new(DeckApp::new(cc, settings))
        }),
    )
}
