//! Repaint scheduling for the overlay.
//!
//! egui only redraws when asked. The overlay spends most of its life
//! completely idle — a resting panel and three resting chevrons — and then
//! animates in short bursts after a click. `RepaintController` keeps the
//! window asleep while idle and runs it at the configured frame cap while
//! anything is moving:
//!
//! 1. **Input** — pointer or key activity. egui wakes us, always paint.
//! 2. **Continuous** — an animation is running. Repaint on the cap interval.
//! 3. **Idle** — nothing moves. No repaint until the next input event.
//!
//! Call [`begin_frame`](RepaintController::begin_frame) at the top of the
//! app's `update()`, feed [`set_continuous`](RepaintController::set_continuous)
//! with "is anything animating", and call
//! [`end_frame`](RepaintController::end_frame) at the bottom.

use std::time::Duration;

/// Why the current frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// User input woke the window.
    Input,
    /// Timed repaint while animations run.
    Continuous,
}

/// Governs when the egui context schedules the next repaint.
pub struct RepaintController {
    /// Interval between frames while continuous mode is active.
    interval: Duration,
    continuous: bool,
    frame: u64,
    reason: RepaintReason,
}

impl RepaintController {
    /// A controller capped at `fps` frames per second during animation.
    pub fn with_fps(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            interval: Duration::from_micros(1_000_000 / u64::from(fps)),
            continuous: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Enable or disable timed repainting. Feed this with "is anything on
    /// screen still moving" every frame.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the start of the app's `update()`.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else {
            RepaintReason::Continuous
        };
    }

    /// Call at the end of the app's `update()`. Schedules the next frame
    /// when continuous mode is on; otherwise egui sleeps until input.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.continuous {
            ctx.request_repaint_after(self.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_cap_maps_to_interval() {
        let rc = RepaintController::with_fps(60);
        assert_eq!(rc.interval, Duration::from_micros(16_666));
        let rc = RepaintController::with_fps(30);
        assert_eq!(rc.interval, Duration::from_micros(33_333));
    }

    #[test]
    fn zero_fps_is_clamped() {
        let rc = RepaintController::with_fps(0);
        assert_eq!(rc.interval, Duration::from_secs(1));
    }
}
