//! Frame-tick subscription for the waveform animation
//!
//! The core animator is advanced by the host, one tick per display frame.
//! This helper produces that tick stream while an animation is in flight and
//! shuts it off when the control settles, so an idle seek bar costs nothing.

use std::time::Duration;

use iced::time::Instant;
use iced::Subscription;

/// Tick interval approximating one display frame (~60 Hz)
const FRAME_INTERVAL_MS: u64 = 16;

/// Per-frame tick subscription, active only while `animating` is true
///
/// # Example
///
/// ```ignore
/// fn subscription(&self) -> Subscription<Message> {
///     animation_frames(self.seek_bar.is_animating()).map(Message::Tick)
/// }
///
/// // In update: track the previous instant and feed the delta
/// Message::Tick(now) => {
///     let dt = now - self.last_tick.replace(now).unwrap_or(now);
///     self.seek_bar.on_frame_tick(dt);
/// }
/// ```
pub fn animation_frames(animating: bool) -> Subscription<Instant> {
    if animating {
        iced::time::every(Duration::from_millis(FRAME_INTERVAL_MS))
    } else {
        Subscription::none()
    }
}
