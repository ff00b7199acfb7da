//! Overlay theme — everything transparent except what we paint.
//!
//! The window has no chrome, no fill, and no built-in shadows; every pixel
//! that shows up is drawn explicitly onto the layer painters. The theme
//! only strips egui's defaults down to that and fixes the palette.

use egui::{Color32, Context, Style, Visuals};

/// The overlay palette.
pub struct GlassColors;

impl GlassColors {
    /// Sun glyph on the weather panel.
    pub const SUN: Color32 = Color32::from_rgb(255, 230, 0);
    /// Panel text.
    pub const TEXT: Color32 = Color32::from_rgb(255, 255, 255);
    /// Shadow copies on the shadow layer.
    pub const SHADOW: Color32 = Color32::from_rgb(0, 0, 0);
    /// Chevron buttons.
    pub const CHEVRON: Color32 = Color32::from_rgb(245, 245, 245);
}

/// Theme configuration for the overlay window.
#[derive(Default)]
pub struct OverlayTheme;

impl OverlayTheme {
    /// Apply the transparent visuals to an egui context. Called once at
    /// startup.
    pub fn apply(&self, ctx: &Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::dark();
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.window_fill = Color32::TRANSPARENT;
        visuals.extreme_bg_color = Color32::TRANSPARENT;
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        ctx.set_style(style);
    }
}
