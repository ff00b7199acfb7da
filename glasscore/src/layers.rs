//! Named drawing layers for one overlay frame.
//!
//! The overlay is composed from several transparent surfaces: the wallpaper
//! background, the window's own drop shadow, the panel drop shadows, the
//! panel faces, and the chevron buttons on top. egui paints layer orders
//! back to front, so each surface gets its own layer painter and the
//! compositing happens in the backend — the drawing code only ever names a
//! surface, never worries about stacking.
//!
//! Every painter is clipped to the window rect; panels mid-slide paint
//! partly outside it and the clip keeps that cheap.

use egui::{Context, Id, LayerId, Order, Painter, Rect};

/// The transparent surfaces of a single frame, back to front.
pub struct Layers {
    /// Window rect in points; all painters are clipped to it.
    pub rect: Rect,
    /// Background fill and wallpaper crop.
    pub background: Painter,
    /// Drop-shadow accents for the window itself.
    pub frame_shadow: Painter,
    /// Shadow copies of panel content, always below every panel face.
    pub shadow: Painter,
    /// Panel faces.
    pub panels: Painter,
    /// Chevron buttons and frame diagnostics, above everything.
    pub chevrons: Painter,
}

impl Layers {
    pub fn new(ctx: &Context, rect: Rect) -> Self {
        let layer = |order: Order, name: &'static str| {
            ctx.layer_painter(LayerId::new(order, Id::new(name)))
                .with_clip_rect(rect)
        };
        Self {
            rect,
            background: layer(Order::Background, "overlay_background"),
            frame_shadow: layer(Order::PanelResizeLine, "overlay_frame_shadow"),
            shadow: layer(Order::Middle, "overlay_panel_shadow"),
            panels: layer(Order::Foreground, "overlay_panels"),
            chevrons: layer(Order::Tooltip, "overlay_chevrons"),
        }
    }
}
