//! Render driver
//!
//! Turns layout geometry, the animation factor, and the discrete progress
//! position into one colored rounded-rectangle draw command per wave. The
//! host paints the commands with whatever primitives it has; the core never
//! touches a drawing surface itself.

use crate::layout::Geometry;
use crate::types::{Rect, Rgba};
use crate::waveform::Waveform;

/// One rounded-rectangle draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveBar {
    /// Wave bounds in widget-local pixels
    pub bounds: Rect,
    /// Shared corner radius from the layout pass
    pub corner_radius: f32,
    /// Progress color if the wave is covered, background color otherwise
    pub color: Rgba,
    /// Whether this wave is at or before the discrete progress position
    pub in_progress: bool,
}

/// Inputs for one render pass
#[derive(Debug, Clone, Copy)]
pub struct RenderParams<'a> {
    pub waveform: &'a Waveform,
    /// Previous waveform to cross-fade from, if an animation is in flight
    pub prev_waveform: Option<&'a Waveform>,
    pub geometry: Geometry,
    /// Animation factor in `[0, 1]`
    pub factor: f32,
    /// Index of the last covered wave, `-1` for none
    pub discrete_position: i32,
    pub content_height: f32,
    pub padding_left: f32,
    pub padding_top: f32,
    pub background_color: Rgba,
    pub progress_color: Rgba,
}

fn normalized_height(content_height: f32, value: u32, max_value: u32) -> f32 {
    if max_value == 0 {
        return 0.0;
    }
    content_height * (value as f32 / max_value as f32)
}

/// Emit one draw command per wave
///
/// While a previous waveform of equal length exists and the factor is below
/// 1, each wave's height is interpolated between the previous and current
/// normalized heights. Otherwise the height is the current normalized height
/// scaled by the factor, which produces the grow-from-zero entrance animation
/// on a fresh waveform.
pub fn render_waves(params: &RenderParams<'_>) -> Vec<WaveBar> {
    let waveform = params.waveform;
    let count = waveform.count();
    if count == 0 || params.content_height <= 0.0 {
        return Vec::new();
    }

    let max_value = waveform.max_value();
    let geometry = params.geometry;
    let half_width = geometry.wave_width / 2.0;
    let center_y = params.padding_top + params.content_height / 2.0;

    // Cross-fade only applies while a same-length previous waveform is mid-animation
    let cross_fade = params
        .prev_waveform
        .filter(|prev| params.factor < 1.0 && prev.count() == count);

    let mut bars = Vec::with_capacity(count);
    for i in 0..count {
        let height = match cross_fade {
            Some(prev) => {
                let prev_height =
                    normalized_height(params.content_height, prev.value_at(i), prev.max_value());
                let target_height =
                    normalized_height(params.content_height, waveform.value_at(i), max_value);
                prev_height + (target_height - prev_height) * params.factor
            }
            None => {
                normalized_height(params.content_height, waveform.value_at(i), max_value)
                    * params.factor
            }
        };

        let center_x = i as f32 * (geometry.wave_width + geometry.wave_gap)
            + half_width
            + params.padding_left
            + geometry.edge_wave_gap;

        let in_progress = (i as i32) <= params.discrete_position;
        bars.push(WaveBar {
            bounds: Rect::from_center(center_x, center_y, geometry.wave_width, height),
            corner_radius: geometry.corner_radius,
            color: if in_progress {
                params.progress_color
            } else {
                params.background_color
            },
            in_progress,
        });
    }
    bars
}
