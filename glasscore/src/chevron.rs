//! Chevron side buttons — the paging controls of the overlay.
//!
//! A chevron is two thick line segments fanning out from an anchor point at
//! `center_angle ± half_spread`. Pressing it narrows the spread by 20° with
//! a quarter-second ease-out, releasing widens it back. Hover detection is
//! a point test against the bounding box of the two segments, padded by a
//! few pixels so the thin arms are not fiddly to hit.

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::easing;

/// How far the half-spread narrows while the button is held down (degrees).
const PRESS_SPREAD_DIFF: f32 = 20.0;

/// Duration of the press/release spread animation.
const PRESS_ANIM_MS: f32 = 250.0;

/// Padding around the segment bounding box for hover/click tests.
const HOVER_MARGIN: f32 = 5.0;

/// Stroke width of the chevron arms.
const STROKE_WIDTH: f32 = 6.0;

/// One of the three fixed paging controls.
pub struct ChevronButton {
    /// Orientation of the control in degrees (0 = arms pointing right).
    center_angle: f32,
    /// Half-spread of the arms at rest, in degrees.
    rest_spread: f32,
    /// Arm length in points.
    size: f32,
    /// Anchor point the arms fan out from.
    pos: Pos2,
    /// Current half-spread, derived every frame.
    half_spread: f32,
    /// Arm endpoints, recomputed whenever the spread changes.
    arms: [Pos2; 2],
    pressed: bool,
    hovered: bool,
    /// Time since the last press or release edge.
    since_edge_ms: f32,
}

impl ChevronButton {
    pub fn new(center_angle: f32, rest_spread: f32, size: f32, pos: Pos2) -> Self {
        let mut button = Self {
            center_angle,
            rest_spread,
            size,
            pos,
            half_spread: rest_spread,
            arms: [pos, pos],
            pressed: false,
            hovered: false,
            since_edge_ms: PRESS_ANIM_MS,
        };
        button.arms = button.arm_endpoints(rest_spread);
        button
    }

    fn arm_endpoints(&self, half_spread: f32) -> [Pos2; 2] {
        let a = (self.center_angle - half_spread).to_radians();
        let b = (self.center_angle + half_spread).to_radians();
        [
            self.pos + Vec2::angled(a) * self.size,
            self.pos + Vec2::angled(b) * self.size,
        ]
    }

    /// Bounding box of the two arms, padded by the hover margin.
    /// The anchor point is part of the box, so a pointer exactly on the
    /// anchor always hits.
    pub fn hover_rect(&self) -> Rect {
        Rect::from_points(&[self.pos, self.arms[0], self.arms[1]]).expand(HOVER_MARGIN)
    }

    /// Recompute the hover flag. A pure query: hovering does not start or
    /// stop any animation, only the click state does.
    pub fn pointer_moved(&mut self, pointer: Pos2) {
        self.hovered = self.hover_rect().contains(pointer);
    }

    pub fn pointer_down(&mut self, pointer: Pos2) {
        if self.hover_rect().contains(pointer) {
            self.pressed = true;
            self.since_edge_ms = 0.0;
        }
    }

    /// Release the button. Returns `true` when this release activates the
    /// button: it was pressed and the pointer is still over it.
    pub fn pointer_up(&mut self, pointer: Pos2) -> bool {
        if !self.pressed {
            return false;
        }
        let activated = self.hover_rect().contains(pointer);
        self.pressed = false;
        self.since_edge_ms = 0.0;
        activated
    }

    /// Advance the spread animation.
    ///
    /// The spread eases from the previous resting endpoint toward the
    /// current target, so a release mid-press restarts the quarter-second
    /// curve from the pressed endpoint rather than the instantaneous value.
    pub fn update(&mut self, dt_ms: f32) {
        self.since_edge_ms += dt_ms;

        let (from, to) = if self.pressed {
            (self.rest_spread, self.rest_spread - PRESS_SPREAD_DIFF)
        } else {
            (self.rest_spread - PRESS_SPREAD_DIFF, self.rest_spread)
        };

        self.half_spread = if self.since_edge_ms >= PRESS_ANIM_MS {
            to
        } else {
            easing::ease_out(from, to, self.since_edge_ms / PRESS_ANIM_MS)
        };
        self.arms = self.arm_endpoints(self.half_spread);
    }

    /// True while the spread is still moving toward its target.
    pub fn is_animating(&self) -> bool {
        self.since_edge_ms < PRESS_ANIM_MS
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[cfg(test)]
    fn current_spread(&self) -> f32 {
        self.half_spread
    }

    pub fn draw(&self, painter: &Painter, color: Color32) {
        let stroke = Stroke::new(STROKE_WIDTH, color);
        painter.line_segment([self.pos, self.arms[0]], stroke);
        painter.line_segment([self.pos, self.arms[1]], stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> ChevronButton {
        ChevronButton::new(0.0, 60.0, 14.0, Pos2::new(20.0, 100.0))
    }

    #[test]
    fn resting_spread_is_stable() {
        let mut b = button();
        b.update(16.0);
        assert_eq!(b.current_spread(), 60.0);
        b.update(1000.0);
        assert_eq!(b.current_spread(), 60.0);
    }

    #[test]
    fn press_narrows_to_target_after_duration() {
        let mut b = button();
        b.pointer_down(Pos2::new(20.0, 100.0));
        b.update(250.0);
        assert_eq!(b.current_spread(), 40.0);
        // holding longer keeps it pinned
        b.update(500.0);
        assert_eq!(b.current_spread(), 40.0);
    }

    #[test]
    fn release_widens_back_to_rest() {
        let mut b = button();
        b.pointer_down(Pos2::new(20.0, 100.0));
        b.update(300.0);
        assert!(b.pointer_up(Pos2::new(20.0, 100.0)));
        b.update(250.0);
        assert_eq!(b.current_spread(), 60.0);
    }

    #[test]
    fn release_midway_follows_ease_out_from_pressed_endpoint() {
        let mut b = button();
        b.pointer_down(Pos2::new(20.0, 100.0));
        b.update(300.0);
        b.pointer_up(Pos2::new(20.0, 100.0));
        b.update(125.0);
        // ease_out(40, 60, 0.5) = 40 + 20 * 0.75
        assert_eq!(b.current_spread(), 55.0);
        assert!(b.current_spread() > 40.0 && b.current_spread() < 60.0);
    }

    #[test]
    fn anchor_is_always_inside_hover_rect() {
        let b = button();
        assert!(b.hover_rect().contains(Pos2::new(20.0, 100.0)));
        // tiny arms still hit thanks to the margin
        let small = ChevronButton::new(180.0, 60.0, 0.5, Pos2::new(5.0, 5.0));
        assert!(small.hover_rect().contains(Pos2::new(5.0, 5.0)));
    }

    #[test]
    fn release_away_from_button_does_not_activate() {
        let mut b = button();
        b.pointer_down(Pos2::new(20.0, 100.0));
        assert!(!b.pointer_up(Pos2::new(400.0, 100.0)));
    }

    #[test]
    fn release_without_press_is_inert() {
        let mut b = button();
        b.update(1000.0);
        assert!(!b.pointer_up(Pos2::new(20.0, 100.0)));
        // the idle timer was not reset, so the spread stays at rest
        b.update(0.0);
        assert_eq!(b.current_spread(), 60.0);
    }

    #[test]
    fn hover_tracks_pointer() {
        let mut b = button();
        b.pointer_moved(Pos2::new(20.0, 100.0));
        assert!(b.is_hovered());
        b.pointer_moved(Pos2::new(300.0, 300.0));
        assert!(!b.is_hovered());
    }
}
