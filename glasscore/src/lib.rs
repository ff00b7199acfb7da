//! glasscore — shared library for the glassdeck desktop overlay

pub mod chevron;
pub mod easing;
pub mod field;
pub mod layers;
pub mod panel;
pub mod repaint;
pub mod theme;

pub use field::{Field, PageDirection};
pub use layers::Layers;
pub use repaint::RepaintController;
pub use theme::{GlassColors, OverlayTheme};
