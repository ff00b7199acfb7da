//! The overlay application shell.
//!
//! Owns the frame loop: dispatch input into the field, advance animations
//! by the frame delta, rebuild the layer painters, and draw back to front —
//! background fill, wallpaper crop, frame shadow, panels, chevrons. The
//! window itself is transparent; everything visible is painted here.

use egui::{Color32, Context, Key, Pos2, PointerButton, Stroke, pos2};
use glasscore::panel::Panel;
use glasscore::{easing, Field, GlassColors, Layers, RepaintController};
use std::path::PathBuf;

use crate::clock::ClockPanel;
use crate::settings::Settings;
use crate::wallpaper;
use crate::weather::WeatherPanel;

/// How long the chevrons take to fade after the pointer leaves the window.
const CHEVRON_FADE_MS: f32 = 600.0;

/// Chevron opacity once fully faded.
const CHEVRON_FADED_ALPHA: f32 = 0.35;

pub struct DeckApp {
    settings: Settings,
    field: Field,
    repaint: RepaintController,
    show_fps: bool,
    fps_smoothed: f32,
    /// Wallpaper path the current texture was loaded from.
    wallpaper_source: Option<PathBuf>,
    /// Last known pointer position; press/release events reuse it.
    pointer_pos: Pos2,
    /// Time since the pointer left the window bounds.
    outside_ms: f32,
}

impl DeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let size = settings.size();
        let panels: Vec<Box<dyn Panel>> = vec![
            Box::new(WeatherPanel::new("weather", pos2(0.0, 0.0), size)),
            Box::new(ClockPanel::new("clock", pos2(size.x, 0.0), size)),
        ];

        let mut app = Self {
            repaint: RepaintController::with_fps(settings.fps),
            field: Field::new(size, panels),
            settings,
            show_fps: false,
            fps_smoothed: 0.0,
            wallpaper_source: None,
            pointer_pos: Pos2::ZERO,
            outside_ms: 0.0,
        };
        app.refresh_wallpaper(&cc.egui_ctx);
        app
    }

    /// Re-query the wallpaper path and reload the texture when it changed.
    /// Any failure degrades to "no wallpaper": the background fill shows.
    fn refresh_wallpaper(&mut self, ctx: &Context) {
        let path = wallpaper::wallpaper_path();
        if path == self.wallpaper_source && self.field.has_wallpaper() == path.is_some() {
            return;
        }
        match &path {
            Some(p) => match wallpaper::load_texture(ctx, p) {
                Ok(texture) => self.field.set_wallpaper(Some(texture)),
                Err(err) => {
                    eprintln!("[glassdeck] wallpaper unavailable: {err}");
                    self.field.set_wallpaper(None);
                }
            },
            None => self.field.set_wallpaper(None),
        }
        self.wallpaper_source = path;
    }

    /// Chevron color, faded out while the pointer is away from the window.
    fn chevron_color(&self) -> Color32 {
        let t = (self.outside_ms / CHEVRON_FADE_MS).clamp(0.0, 1.0);
        let alpha = easing::ease_out(1.0, CHEVRON_FADED_ALPHA, t);
        GlassColors::CHEVRON.gamma_multiply(alpha)
    }

    /// Soft drop-shadow accents along the bottom and right window edges.
    fn draw_frame_shadow(&self, layers: &Layers) {
        let rect = layers.rect;
        let stroke = Stroke::new(3.0, Color32::from_black_alpha(90));
        layers.frame_shadow.line_segment(
            [
                pos2(rect.width() * 0.025, rect.height() * 0.96),
                pos2(rect.width() * 0.985, rect.height() * 0.96),
            ],
            stroke,
        );
        layers.frame_shadow.line_segment(
            [
                pos2(rect.width() * 0.985, rect.height() * 0.96),
                pos2(rect.width() * 0.985, rect.height() * 0.065),
            ],
            stroke,
        );
    }

    fn draw_fps(&self, layers: &Layers) {
        let rect = layers.rect;
        layers.chevrons.text(
            pos2(rect.max.x - 70.0, rect.max.y - 21.0),
            egui::Align2::LEFT_CENTER,
            format!("FPS: {:.0}", self.fps_smoothed),
            egui::FontId::proportional(14.0),
            GlassColors::TEXT,
        );
    }
}

impl eframe::App for DeckApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        // ---- input ----
        let dt_ms = ctx.input(|i| i.stable_dt) * 1000.0;
        let screen = ctx.screen_rect();

        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            self.pointer_pos = pos;
        }
        // the outermost fraction of the window counts as "outside" too, so
        // the fade starts as the pointer slides off rather than past the edge
        let pointer_inside = ctx.input(|i| i.pointer.latest_pos()).is_some_and(|p| {
            p.x / screen.width() > 0.0
                && p.x / screen.width() < 0.997
                && p.y / screen.height() > 0.0
                && p.y / screen.height() < 0.992
        });

        if ctx.input(|i| i.pointer.primary_pressed()) {
            self.refresh_wallpaper(ctx);
            self.field.click_down(self.pointer_pos);
        }
        if ctx.input(|i| i.pointer.primary_released()) {
            self.field.click_up(self.pointer_pos);
        }
        let right_click = ctx.input(|i| {
            i.events.iter().any(|e| {
                matches!(
                    e,
                    egui::Event::PointerButton {
                        button: PointerButton::Secondary,
                        pressed: true,
                        ..
                    }
                )
            })
        });
        if right_click {
            unimplemented!("right click");
        }
        if ctx.input(|i| i.pointer.is_moving()) {
            self.field.pointer_moved(self.pointer_pos);
        }

        if ctx.input(|i| i.key_pressed(Key::Space)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input(|i| i.key_pressed(Key::F)) {
            self.show_fps = !self.show_fps;
        }
        if ctx.input(|i| i.key_pressed(Key::ArrowLeft) || i.key_pressed(Key::A)) {
            unimplemented!("keyboard paging");
        }

        // ---- update ----
        self.field.update(dt_ms);
        if pointer_inside {
            self.outside_ms = 0.0;
        } else {
            self.outside_ms += dt_ms;
        }
        if dt_ms > 0.0 {
            self.fps_smoothed = self.fps_smoothed * 0.9 + (1000.0 / dt_ms) * 0.1;
        }

        // ---- draw ----
        let layers = Layers::new(ctx, screen);
        layers
            .background
            .rect_filled(screen, 0.0, self.settings.background_color());

        let (window_rect, display_size) =
            ctx.input(|i| (i.viewport().outer_rect, i.viewport().monitor_size));
        self.field
            .draw_wallpaper(&layers, window_rect, display_size, self.settings.decorated);

        self.draw_frame_shadow(&layers);
        self.field.draw(&layers);
        self.field.draw_chevrons(&layers, self.chevron_color());
        if self.show_fps {
            self.draw_fps(&layers);
        }

        // ---- schedule ----
        let fading = !pointer_inside && self.outside_ms < CHEVRON_FADE_MS;
        self.repaint
            .set_continuous(self.field.is_animating() || fading);
        self.repaint.end_frame(ctx);
    }
}
