//! Waveform seek bar widget
//!
//! Adapts the host-agnostic [`seekwave_core::SeekBar`] control to iced:
//!
//! - **Canvas Program** ([`SeekBarCanvas`]): translates mouse events into
//!   core pointer events and paints the control's draw commands
//! - **View function** ([`waveform_seek_bar`]): takes the control plus a
//!   callback closure, returns an `Element`
//! - **Subscription helper** ([`animation_frames`]): per-frame ticks while a
//!   waveform change animation is running
//!
//! The application owns the control, applies published [`SeekBarInput`]s in
//! `update`, and forwards the control's `SeekBarEvent`s wherever it needs
//! them (seeking the player, updating labels, ...).

mod canvas;
mod subscription;
mod view;

pub use canvas::{SeekBarCanvas, SeekBarInput, SeekBarInteraction};
pub use subscription::animation_frames;
pub use view::waveform_seek_bar;
