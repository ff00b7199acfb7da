//! The clock panel — a big digital time readout.

use chrono::Local;
use egui::{Align2, FontId, Pos2, Vec2, pos2};
use glasscore::panel::{Panel, SlideMotion};
use glasscore::{GlassColors, Layers};

const TIME_SIZE: f32 = 90.0;
const DATE_SIZE: f32 = 16.0;
const SHADOW_OFFSET: Vec2 = Vec2::new(3.0, 1.0);

pub struct ClockPanel {
    name: String,
    motion: SlideMotion,
    area: Vec2,
}

impl ClockPanel {
    pub fn new(name: &str, pos: Pos2, area: Vec2) -> Self {
        Self {
            name: name.to_string(),
            motion: SlideMotion::new(pos, area.x),
            area,
        }
    }
}

impl Panel for ClockPanel {
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
        let now = Local::now();
        let time = now.format("%H:%M").to_string();
        let date = now.format("%A, %B %d").to_string();

        let base = self.motion.pos;
        let center = pos2(base.x + self.area.x / 2.0, base.y + self.area.y / 2.0 - 10.0);
        layers.shadow.text(
            center + SHADOW_OFFSET,
            Align2::CENTER_CENTER,
            &time,
            FontId::proportional(TIME_SIZE),
            GlassColors::SHADOW,
        );
        layers.panels.text(
            center,
            Align2::CENTER_CENTER,
            &time,
            FontId::proportional(TIME_SIZE),
            GlassColors::TEXT,
        );

        let date_pos = pos2(center.x, center.y + TIME_SIZE / 2.0 + 14.0);
        layers.panels.text(
            date_pos,
            Align2::CENTER_TOP,
            &date,
            FontId::proportional(DATE_SIZE),
            GlassColors::TEXT,
        );
    }
}
