//! The playground behind the overlay window.
//!
//! `Field` owns everything the window shows: the wallpaper snapshot, the
//! three chevron buttons, and the ordered panel list. It routes pointer
//! events, advances all animations by the frame delta, and issues the draw
//! calls onto the named layers. Paging logic lives here: which panel
//! becomes active and which way the outgoing and incoming panels slide.

use egui::{Color32, Pos2, Rect, TextureHandle, Vec2, pos2, vec2};

use crate::chevron::ChevronButton;
use crate::layers::Layers;
use crate::panel::{Panel, Slide};

/// Duration of a paging slide.
const SLIDE_MS: f32 = 750.0;

/// How long the incoming panel trails the outgoing one.
const TRAIL_DELAY_MS: f32 = 300.0;

/// Half-spread of the chevron arms at rest, degrees.
const REST_SPREAD: f32 = 60.0;

/// Chevron arm length in points.
const CHEVRON_SIZE: f32 = 14.0;

/// Distance of a chevron anchor from its window edge.
const EDGE_MARGIN: f32 = 18.0;

/// Horizontal crop correction while the window chrome is visible.
const CHROME_X_OFFSET: f32 = 10.0;

/// Vertical crop correction while the window chrome is visible.
const CHROME_Y_OFFSET: f32 = 30.0;

/// Which chevron was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Left,
    Right,
}

/// Composition root for the overlay content.
pub struct Field {
    /// Snapshot of the desktop wallpaper. `None` on platforms without a
    /// wallpaper query; the background fill shows through instead.
    wallpaper: Option<TextureHandle>,
    left: ChevronButton,
    right: ChevronButton,
    bottom: ChevronButton,
    panels: Vec<Box<dyn Panel>>,
    active: usize,
}

impl Field {
    /// Build the playground for a window of `size`. Panels keep whatever
    /// resting positions they were constructed with — inter-panel spacing
    /// is a construction-time choice, not animation math.
    pub fn new(size: Vec2, panels: Vec<Box<dyn Panel>>) -> Self {
        assert!(!panels.is_empty(), "the overlay needs at least one panel");
        Self {
            wallpaper: None,
            left: ChevronButton::new(0.0, REST_SPREAD, CHEVRON_SIZE, pos2(EDGE_MARGIN, size.y / 2.0)),
            right: ChevronButton::new(
                180.0,
                REST_SPREAD,
                CHEVRON_SIZE,
                pos2(size.x - EDGE_MARGIN, size.y / 2.0),
            ),
            bottom: ChevronButton::new(
                90.0,
                REST_SPREAD,
                CHEVRON_SIZE * 0.85,
                pos2(size.x / 2.0, size.y - EDGE_MARGIN),
            ),
            panels,
            active: 0,
        }
    }

    pub fn set_wallpaper(&mut self, wallpaper: Option<TextureHandle>) {
        self.wallpaper = wallpaper;
    }

    pub fn has_wallpaper(&self) -> bool {
        self.wallpaper.is_some()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn panels(&self) -> &[Box<dyn Panel>] {
        &self.panels
    }

    /// Switch to the neighboring panel, with wrap-around. The logical
    /// active index changes instantly; only the visual positions lag
    /// behind, the incoming panel trailing the outgoing one by
    /// [`TRAIL_DELAY_MS`]. Paging again mid-transition overwrites the
    /// running slides.
    pub fn page(&mut self, direction: PageDirection) {
        let count = self.panels.len();
        let (next, out_slide, in_slide) = match direction {
            PageDirection::Left => {
                ((self.active + 1) % count, Slide::OutsideToLeft, Slide::InsideFromRight)
            }
            PageDirection::Right => {
                ((self.active + count - 1) % count, Slide::OutsideToRight, Slide::InsideFromLeft)
            }
        };

        self.panels[self.active].motion_mut().start(SLIDE_MS, out_slide, 0.0);
        self.panels[next].motion_mut().start(SLIDE_MS, in_slide, TRAIL_DELAY_MS);
        self.active = next;
    }

    /// Advance every chevron and every panel, visible or not.
    pub fn update(&mut self, dt_ms: f32) {
        self.left.update(dt_ms);
        self.right.update(dt_ms);
        self.bottom.update(dt_ms);
        for panel in &mut self.panels {
            panel.motion_mut().update(dt_ms);
        }
    }

    pub fn pointer_moved(&mut self, pointer: Pos2) {
        self.left.pointer_moved(pointer);
        self.right.pointer_moved(pointer);
        self.bottom.pointer_moved(pointer);
    }

    pub fn click_down(&mut self, pointer: Pos2) {
        self.left.pointer_down(pointer);
        self.right.pointer_down(pointer);
        self.bottom.pointer_down(pointer);
    }

    pub fn click_up(&mut self, pointer: Pos2) {
        if self.left.pointer_up(pointer) {
            self.page(PageDirection::Left);
        }
        if self.right.pointer_up(pointer) {
            self.page(PageDirection::Right);
        }
        if self.bottom.pointer_up(pointer) {
            // reserved: will open the settings panel
        }
    }

    /// True while anything on screen is still moving — drives the repaint
    /// scheduler.
    pub fn is_animating(&self) -> bool {
        self.left.is_animating()
            || self.right.is_animating()
            || self.bottom.is_animating()
            || self.panels.iter().any(|p| p.motion().is_sliding())
    }

    /// Draw all panels in list order. Later panels paint over earlier
    /// ones; at rest every inactive panel sits fully outside the window,
    /// so overlap only happens transiently mid-transition.
    pub fn draw(&self, layers: &Layers) {
        for panel in &self.panels {
            panel.draw(layers);
        }
    }

    pub fn draw_chevrons(&self, layers: &Layers, color: Color32) {
        self.left.draw(&layers.chevrons, color);
        self.right.draw(&layers.chevrons, color);
        self.bottom.draw(&layers.chevrons, color);
    }

    /// Paint the slice of the desktop wallpaper the window currently
    /// covers, scaled to fill the window — the "see-through desktop"
    /// illusion. Falls back to scaling the whole bitmap when the crop
    /// cannot be computed or lands outside the texture.
    pub fn draw_wallpaper(
        &self,
        layers: &Layers,
        window_rect: Option<Rect>,
        display_size: Option<Vec2>,
        decorated: bool,
    ) {
        let Some(texture) = &self.wallpaper else {
            return;
        };
        let uv = window_rect
            .zip(display_size)
            .and_then(|(window, display)| crop_uv(window, display, decorated))
            .unwrap_or_else(|| Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
        layers
            .background
            .image(texture.id(), layers.rect, uv, Color32::WHITE);
    }
}

/// UV sub-rectangle of the wallpaper covered by a window at `window`
/// (screen coordinates) on a display of `display` size. With the window
/// chrome visible the crop shifts by a fixed correction so the content
/// region lines up. Returns `None` when the crop falls outside the
/// texture or the display size is degenerate.
pub fn crop_uv(window: Rect, display: Vec2, decorated: bool) -> Option<Rect> {
    if display.x <= 0.0 || display.y <= 0.0 {
        return None;
    }
    let mut min = pos2(window.min.x / display.x, window.min.y / display.y);
    if decorated {
        min.x += CHROME_X_OFFSET / display.x;
        min.y += CHROME_Y_OFFSET / display.y;
    }
    let uv = Rect::from_min_size(min, vec2(window.width() / display.x, window.height() / display.y));
    let unit = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    unit.contains_rect(uv).then_some(uv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::SlideMotion;

    struct TestPanel {
        motion: SlideMotion,
    }

    impl TestPanel {
        fn at(x: f32, span: f32) -> Box<dyn Panel> {
            Box::new(Self {
                motion: SlideMotion::new(pos2(x, 0.0), span),
            })
        }
    }

    impl Panel for TestPanel {
        fn name(&self) -> &str {
            "test"
        }
        fn motion(&self) -> &SlideMotion {
            &self.motion
        }
        fn motion_mut(&mut self) -> &mut SlideMotion {
            &mut self.motion
        }
        fn draw(&self, _layers: &Layers) {}
    }

    fn field() -> Field {
        // 800-wide window, two panels: active at 0, the other resting at
        // a construction-time offset
        Field::new(
            vec2(800.0, 200.0),
            vec![TestPanel::at(0.0, 800.0), TestPanel::at(500.0, 800.0)],
        )
    }

    #[test]
    fn paging_switches_active_immediately() {
        let mut f = field();
        f.page(PageDirection::Left);
        assert_eq!(f.active(), 1);
        assert_eq!(f.panels()[0].motion().slide(), Slide::OutsideToLeft);
        assert_eq!(f.panels()[1].motion().slide(), Slide::InsideFromRight);
    }

    #[test]
    fn paging_wraps_in_both_directions() {
        let mut f = field();
        f.page(PageDirection::Right);
        assert_eq!(f.active(), 1);
        f.page(PageDirection::Right);
        assert_eq!(f.active(), 0);
        f.page(PageDirection::Left);
        f.page(PageDirection::Left);
        assert_eq!(f.active(), 0);
    }

    #[test]
    fn outgoing_panel_holds_still_at_zero_elapsed() {
        let mut f = field();
        f.page(PageDirection::Left);
        f.update(0.0);
        assert_eq!(f.panels()[0].motion().pos.x, 0.0);
    }

    #[test]
    fn transition_completes_after_delay_plus_duration() {
        let mut f = field();
        f.page(PageDirection::Left);
        // 1050 ms in uneven steps: 300 delay + 750 slide
        for dt in [16.0, 234.0, 400.0, 250.0, 150.0] {
            f.update(dt);
        }
        assert_eq!(f.panels()[1].motion().pos.x, 0.0);
        assert_eq!(f.panels()[0].motion().pos.x, -800.0);
        assert_eq!(f.panels()[0].motion().slide(), Slide::Idle);
    }

    #[test]
    fn left_chevron_click_pages_left() {
        let mut f = field();
        let on_left = pos2(EDGE_MARGIN, 100.0);
        f.click_down(on_left);
        f.click_up(on_left);
        assert_eq!(f.active(), 1);
        assert_eq!(f.panels()[0].motion().slide(), Slide::OutsideToLeft);
    }

    #[test]
    fn right_chevron_click_pages_right() {
        let mut f = field();
        let on_right = pos2(800.0 - EDGE_MARGIN, 100.0);
        f.click_down(on_right);
        f.click_up(on_right);
        assert_eq!(f.active(), 1);
        assert_eq!(f.panels()[0].motion().slide(), Slide::OutsideToRight);
    }

    #[test]
    fn bottom_chevron_is_a_reserved_noop() {
        let mut f = field();
        let on_bottom = pos2(400.0, 200.0 - EDGE_MARGIN);
        f.click_down(on_bottom);
        f.click_up(on_bottom);
        assert_eq!(f.active(), 0);
        assert_eq!(f.panels()[0].motion().slide(), Slide::Idle);
    }

    #[test]
    fn release_off_button_does_not_page() {
        let mut f = field();
        f.click_down(pos2(EDGE_MARGIN, 100.0));
        f.click_up(pos2(400.0, 100.0));
        assert_eq!(f.active(), 0);
    }

    #[test]
    fn animating_while_sliding_and_settling() {
        let mut f = field();
        assert!(!f.is_animating());
        f.page(PageDirection::Left);
        assert!(f.is_animating());
        // run everything to completion (slides and chevron spread)
        for _ in 0..30 {
            f.update(100.0);
        }
        assert!(!f.is_animating());
    }

    #[test]
    fn crop_uv_centered_window() {
        let window = Rect::from_min_size(pos2(960.0, 540.0), vec2(500.0, 260.0));
        let uv = crop_uv(window, vec2(1920.0, 1080.0), false).unwrap();
        assert_eq!(uv.min, pos2(0.5, 0.5));
        assert!((uv.width() - 500.0 / 1920.0).abs() < 1e-6);
        assert!((uv.height() - 260.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn crop_uv_applies_chrome_correction() {
        let window = Rect::from_min_size(pos2(192.0, 108.0), vec2(500.0, 260.0));
        let plain = crop_uv(window, vec2(1920.0, 1080.0), false).unwrap();
        let decorated = crop_uv(window, vec2(1920.0, 1080.0), true).unwrap();
        assert!((decorated.min.x - (plain.min.x + 10.0 / 1920.0)).abs() < 1e-6);
        assert!((decorated.min.y - (plain.min.y + 30.0 / 1080.0)).abs() < 1e-6);
        assert_eq!(plain.size(), decorated.size());
    }

    #[test]
    fn crop_uv_rejects_out_of_bounds_and_degenerate() {
        // window hanging off the right edge of the display
        let window = Rect::from_min_size(pos2(1800.0, 540.0), vec2(500.0, 260.0));
        assert!(crop_uv(window, vec2(1920.0, 1080.0), false).is_none());
        // window above the display
        let window = Rect::from_min_size(pos2(100.0, -50.0), vec2(500.0, 260.0));
        assert!(crop_uv(window, vec2(1920.0, 1080.0), false).is_none());
        // no display size available
        let window = Rect::from_min_size(pos2(0.0, 0.0), vec2(500.0, 260.0));
        assert!(crop_uv(window, vec2(0.0, 0.0), false).is_none());
    }
}
