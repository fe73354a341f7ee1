//! Seekwave widgets - iced adapter for the waveform seek bar
//!
//! This crate connects the host-agnostic `seekwave-core` control to iced.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns, the separation of concerns is:
//!
//! - **Control state** (`seekwave_core::SeekBar`): owned by the application,
//!   mutated only in its `update` function
//! - **View function** (`waveform_seek_bar`): takes the control + a callback
//!   closure, returns an `Element<Message>`
//! - **Canvas Program** (`SeekBarCanvas`): custom rendering and
//!   event-to-callback translation
//!
//! ## Usage
//!
//! ```ignore
//! // view:
//! let seek_bar = waveform_seek_bar(&self.seek_bar, Message::SeekBar);
//!
//! // update:
//! Message::SeekBar(input) => match input {
//!     SeekBarInput::Pointer(event) => {
//!         for event in self.seek_bar.on_pointer_event(event).events {
//!             if let SeekBarEvent::ProgressChanged { percent, from_user: true } = event {
//!                 self.player.seek(percent);
//!             }
//!         }
//!     }
//!     SeekBarInput::Resized(size) => {
//!         self.seek_bar.on_measurement_changed(size, Insets::ZERO);
//!     }
//! },
//!
//! // subscription, to drive the waveform change animation:
//! animation_frames(self.seek_bar.is_animating()).map(Message::Tick)
//! ```

pub mod seek_bar;
pub mod theme;

pub use seek_bar::{
    animation_frames, waveform_seek_bar, SeekBarCanvas, SeekBarInput, SeekBarInteraction,
};
pub use theme::{from_iced, to_iced, SEEK_BAR_HEIGHT, WAVE_BACKGROUND, WAVE_PROGRESS};
