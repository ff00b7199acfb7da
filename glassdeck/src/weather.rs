//! The weather panel.
//!
//! A placeholder for now: a sun glyph and a hardcoded temperature. The
//! label is painted twice — a black offset copy on the shadow layer first,
//! then the face copy on the panel layer — so the compositor can treat
//! shadows as their own surface below every panel face.

use egui::{Align2, FontId, Pos2, Vec2, pos2};
use glasscore::panel::{Panel, SlideMotion};
use glasscore::{GlassColors, Layers};

/// Placeholder reading until a data source exists.
const TEMPERATURE: &str = "18°C";

const SUN_RADIUS: f32 = 50.0;
const LABEL_SIZE: f32 = 100.0;
/// Offset of the shadow copy relative to the face.
const SHADOW_OFFSET: Vec2 = Vec2::new(3.0, 1.0);

pub struct WeatherPanel {
    name: String,
    motion: SlideMotion,
    /// Window size; panel layout is proportional to it.
    area: Vec2,
}

impl WeatherPanel {
    pub fn new(name: &str, pos: Pos2, area: Vec2) -> Self {
        Self {
            name: name.to_string(),
            motion: SlideMotion::new(pos, area.x),
            area,
        }
    }
}

impl Panel for WeatherPanel {
    fn name(&self) -> &str {
        &self.name
    }

    fn motion(&self) -> &SlideMotion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut SlideMotion {
        &mut self.motion
    }

    fn draw(&self, layers: &Layers) {
        let base = self.motion.pos;
        let sun = pos2(base.x + self.area.x * 0.28, base.y + self.area.y / 2.0);
        layers.panels.circle_filled(sun, SUN_RADIUS, GlassColors::SUN);

        let label = pos2(base.x + self.area.x * 0.66, base.y + self.area.y / 2.0 + 8.0);
        layers.shadow.text(
            label + SHADOW_OFFSET,
            Align2::CENTER_CENTER,
            TEMPERATURE,
            FontId::proportional(LABEL_SIZE),
            GlassColors::SHADOW,
        );
        layers.panels.text(
            label,
            Align2::CENTER_CENTER,
            TEMPERATURE,
            FontId::proportional(LABEL_SIZE),
            GlassColors::TEXT,
        );
    }
}
