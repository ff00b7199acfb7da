//! Widget panels and their slide animation.
//!
//! A panel is a positioned, drawable page of the overlay. Paging slides the
//! active panel out of one edge and the next panel in from the other; the
//! shared state machine lives in [`SlideMotion`], which concrete panels
//! embed — composition instead of a base class, so every panel gets the
//! identical animation behavior and only supplies its drawing.

use egui::Pos2;

use crate::easing;
use crate::layers::Layers;

/// Slide state of a panel. Only the x coordinate ever animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Idle,
    InsideFromLeft,
    InsideFromRight,
    OutsideToLeft,
    OutsideToRight,
}

/// Shared slide-animation state machine.
///
/// `elapsed_ms` runs negative during a start delay: the motion is armed but
/// the panel sits pinned at its pre-slide position until the delay runs out,
/// so a trailing incoming panel does not pop.
pub struct SlideMotion {
    /// Panel anchor. Animation only touches `pos.x`; when the motion is
    /// idle the position is never written at all.
    pub pos: Pos2,
    slide: Slide,
    elapsed_ms: f32,
    duration_ms: f32,
    /// Distance a slide traverses — the window width.
    span: f32,
}

impl SlideMotion {
    pub fn new(pos: Pos2, span: f32) -> Self {
        Self {
            pos,
            slide: Slide::Idle,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            span,
        }
    }

    /// Arm a slide. An animation already in flight is overwritten
    /// immediately — there is no queueing.
    pub fn start(&mut self, duration_ms: f32, slide: Slide, delay_ms: f32) {
        self.slide = slide;
        self.duration_ms = duration_ms;
        self.elapsed_ms = -delay_ms;
    }

    pub fn slide(&self) -> Slide {
        self.slide
    }

    pub fn is_sliding(&self) -> bool {
        self.slide != Slide::Idle
    }

    /// Resting x position implied by the slide direction, used while the
    /// start delay runs. Outward slides rest on screen, inward slides rest
    /// one span off the edge they enter from.
    ///
    /// Note this is keyed on the direction alone: a panel whose resting
    /// offset is not 0 still pins to 0/±span here. Observed behavior of the
    /// paging design — the pin only matters for the panels taking part in a
    /// transition, which rest at exactly these positions.
    fn pre_slide_x(&self) -> f32 {
        match self.slide {
            Slide::Idle => self.pos.x,
            Slide::OutsideToLeft | Slide::OutsideToRight => 0.0,
            Slide::InsideFromLeft => -self.span,
            Slide::InsideFromRight => self.span,
        }
    }

    /// Advance the animation by `dt_ms`.
    pub fn update(&mut self, dt_ms: f32) {
        if self.slide == Slide::Idle {
            return;
        }
        self.elapsed_ms += dt_ms;

        if self.elapsed_ms < 0.0 {
            // still waiting out the start delay
            self.pos.x = self.pre_slide_x();
            return;
        }

        let mut progress = self.elapsed_ms / self.duration_ms;
        let finished = progress > 1.0;
        if finished {
            // final settle frame: land exactly on the target
            progress = 1.0;
        }

        self.pos.x = match self.slide {
            Slide::Idle => unreachable!(),
            Slide::OutsideToLeft => easing::ease_in(0.0, -self.span, progress),
            Slide::OutsideToRight => easing::ease_in(0.0, self.span, progress),
            Slide::InsideFromLeft => easing::ease_out(-self.span, 0.0, progress),
            Slide::InsideFromRight => easing::ease_out(self.span, 0.0, progress),
        };

        if finished {
            self.slide = Slide::Idle;
        }
    }
}

/// A swipeable page of the overlay.
///
/// Concrete panels embed a [`SlideMotion`] and expose it through the
/// accessors; the shared paging logic in `Field` drives it. `draw` receives
/// the frame's [`Layers`] so a panel can place shadow copies on the shadow
/// surface and its face on the panel surface.
pub trait Panel {
    fn name(&self) -> &str;
    fn motion(&self) -> &SlideMotion;
    fn motion_mut(&mut self) -> &mut SlideMotion;
    fn draw(&self, layers: &Layers);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion() -> SlideMotion {
        SlideMotion::new(Pos2::new(0.0, 0.0), 800.0)
    }

    #[test]
    fn idle_never_moves() {
        let mut m = motion();
        m.pos.x = 123.0;
        m.update(1000.0);
        assert_eq!(m.pos.x, 123.0);
        assert_eq!(m.slide(), Slide::Idle);
    }

    #[test]
    fn outward_slide_lands_exactly() {
        let mut m = motion();
        m.start(750.0, Slide::OutsideToLeft, 0.0);
        m.update(750.0);
        // progress is exactly 1: position landed, state settles next frame
        assert_eq!(m.pos.x, -800.0);
        m.update(1.0);
        assert_eq!(m.pos.x, -800.0);
        assert_eq!(m.slide(), Slide::Idle);
    }

    #[test]
    fn inward_slide_pins_offscreen_during_delay() {
        let mut m = motion();
        m.start(750.0, Slide::InsideFromRight, 300.0);
        m.update(0.0);
        assert_eq!(m.pos.x, 800.0);
        m.update(299.0);
        assert_eq!(m.pos.x, 800.0);
        // delay over, the slide begins
        m.update(376.0);
        assert!(m.pos.x < 800.0);
        assert!(m.pos.x > 0.0);
    }

    #[test]
    fn outward_slide_pins_onscreen_during_delay() {
        let mut m = motion();
        m.pos.x = 0.0;
        m.start(750.0, Slide::OutsideToRight, 200.0);
        m.update(100.0);
        assert_eq!(m.pos.x, 0.0);
    }

    #[test]
    fn overshoot_frame_settles_on_target() {
        let mut m = motion();
        m.start(750.0, Slide::InsideFromLeft, 0.0);
        // one huge frame shoots straight past the end
        m.update(5000.0);
        assert_eq!(m.pos.x, 0.0);
        assert_eq!(m.slide(), Slide::Idle);
    }

    #[test]
    fn out_then_in_round_trips_to_zero() {
        let mut m = motion();
        m.start(750.0, Slide::OutsideToLeft, 0.0);
        m.update(750.0);
        assert_eq!(m.pos.x, -800.0);
        m.start(750.0, Slide::InsideFromLeft, 0.0);
        m.update(750.0);
        assert_eq!(m.pos.x, 0.0);
    }

    #[test]
    fn restart_discards_inflight_animation() {
        let mut m = motion();
        m.start(750.0, Slide::OutsideToLeft, 0.0);
        m.update(375.0);
        let midway = m.pos.x;
        assert!(midway < 0.0);
        m.start(750.0, Slide::InsideFromRight, 0.0);
        assert_eq!(m.slide(), Slide::InsideFromRight);
        m.update(750.0);
        assert_eq!(m.pos.x, 0.0);
    }

    #[test]
    fn y_is_untouched() {
        let mut m = SlideMotion::new(Pos2::new(0.0, 42.0), 800.0);
        m.start(750.0, Slide::OutsideToRight, 100.0);
        m.update(2000.0);
        assert_eq!(m.pos.y, 42.0);
    }
}
