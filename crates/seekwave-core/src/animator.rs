//! Waveform change animation
//!
//! The animator produces the interpolation factor that drives both the
//! grow-from-zero entrance animation and the cross-fade between a previous
//! and a current waveform. It is advanced by a host-provided per-frame tick
//! rather than by its own timer: each tick is O(1) and only moves the factor,
//! the actual per-wave render work happens in the draw pass.

use std::time::Duration;

/// Default animation duration, matching the control's config default
pub const DEFAULT_ANIM_DURATION: Duration = Duration::from_millis(200);

/// Ease-in-ease-out timing curve over `t` in `[0, 1]`
///
/// Accelerates through the first half and decelerates through the second,
/// with `ease_in_out(0) == 0` and `ease_in_out(1) == 1`.
pub fn ease_in_out(t: f32) -> f32 {
    0.5 - (t.clamp(0.0, 1.0) * std::f32::consts::PI).cos() / 2.0
}

/// Time-driven state machine for the waveform change factor
///
/// States: idle with factor 1 (fully settled), or running with the factor
/// easing from 0 to 1 over the configured duration. Cancellation freezes the
/// factor wherever it currently is so the caller can snapshot the blended
/// visual state.
#[derive(Debug, Clone)]
pub struct WaveAnimator {
    duration: Duration,
    elapsed: Duration,
    factor: f32,
    running: bool,
}

impl WaveAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            factor: 1.0,
            running: false,
        }
    }

    /// Restart the animation from factor 0
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.factor = 0.0;
        self.running = true;
    }

    /// Stop without completing; the factor keeps its current value
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Jump straight to the settled state (factor 1, not running)
    pub fn settle(&mut self) {
        self.elapsed = self.duration;
        self.factor = 1.0;
        self.running = false;
    }

    /// Advance by one frame's elapsed time
    ///
    /// Returns `true` while the animation still needs further frames. On
    /// natural completion the animator settles and returns `false`.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.duration.is_zero() || self.elapsed >= self.duration {
            self.settle();
            return false;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.factor = ease_in_out(t);
        true
    }

    /// Current eased factor in `[0, 1]`
    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration for subsequent runs
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

impl Default for WaveAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_ANIM_DURATION)
    }
}
