//! Seekwave Core - host-agnostic waveform seek bar control
//!
//! A waveform seek bar serves the same purpose as an ordinary seek bar,
//! except that it displays a waveform represented by an array of integer
//! amplitudes. This crate holds everything except the actual drawing and
//! event plumbing:
//!
//! - [`Waveform`]: immutable sample view with a lazily cached maximum
//! - [`layout`]: pure geometry pass (wave width, gaps, corner radius)
//! - [`progress`]: percent <-> discrete wave index mapping
//! - [`blend`]: cross-fade between two waveforms of equal length
//! - [`WaveAnimator`]: frame-tick driven animation factor
//! - [`render`]: per-wave rounded-rectangle draw commands
//! - [`SeekBar`]: the control object tying it all together
//!
//! The embedding framework drives the control through explicit entry points
//! (`on_measurement_changed`, `on_pointer_event`, `on_frame_tick`, `render`)
//! and forwards the returned [`SeekBarEvent`]s to the application. The
//! `seekwave-widgets` crate provides an iced adapter.

pub mod animator;
pub mod blend;
pub mod config;
pub mod error;
pub mod layout;
pub mod progress;
pub mod render;
pub mod seek_bar;
pub mod types;
pub mod waveform;

pub use animator::{ease_in_out, WaveAnimator, DEFAULT_ANIM_DURATION};
pub use blend::blend;
pub use config::{
    default_config_path, load_config, save_config, SeekBarConfig, DEFAULT_ANIM_DURATION_MS,
    DEFAULT_BACKGROUND_COLOR, DEFAULT_PROGRESS_COLOR,
};
pub use error::{WaveError, WaveResult};
pub use layout::{compute_geometry, corner_radius_for, CornerType, Geometry, LayoutParams};
pub use progress::{clamp_percent, percent_to_discrete, x_to_percent};
pub use render::{render_waves, RenderParams, WaveBar};
pub use seek_bar::{
    PointerEvent, PointerPhase, PointerResponse, SeekBar, SeekBarEvent, DEFAULT_EDGE_WAVE_GAP_DP,
    DEFAULT_HEIGHT_DP, DEFAULT_WIDTH_DP,
};
pub use types::{Insets, Point, Rect, Rgba, Size};
pub use waveform::Waveform;
