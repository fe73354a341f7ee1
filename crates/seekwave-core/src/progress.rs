//! Progress mapping between continuous percent positions and discrete waves
//!
//! The seek position travels through two representations:
//!
//! - a continuous percent in `[0, 1]`, deliberately allowed to leave that
//!   range while the user drags outside the wave region, and
//! - a discrete wave index in `[-1, count - 1]`, where `-1` means "no wave
//!   reached" and `count - 1` means "all waves reached".
//!
//! The leftmost and rightmost waves sit flush against the content border
//! rather than centered between two neighbors, so they occupy only half the
//! percent-width of an interior wave. The discretizer compensates for the
//! missing outer halves with an asymmetric remapping.

/// Map a percent position to the index of the last covered wave
///
/// Percentages below 0.001 map to `-1` ("before the first wave"); above
/// 0.999 to `count - 1` ("past the last wave"), which also absorbs float
/// edge misses at exactly 1.0. Empty waveforms always map to `-1`.
pub fn percent_to_discrete(count: usize, percent: f32) -> i32 {
    if count == 0 || percent < 0.001 {
        return -1;
    }
    if percent > 0.999 {
        return count as i32 - 1;
    }
    if count == 1 {
        return 0;
    }

    // Edge wave areas have only half the percent width of a normal wave
    let normal_wave_percent = 1.0 / (count as f32 - 1.0);
    let missing_edge_percent = normal_wave_percent / 2.0;
    let adjusted = (percent + missing_edge_percent) / (1.0 + missing_edge_percent * 2.0);
    (count as f32 * adjusted) as i32
}

/// Map a pointer x coordinate to a percent position
///
/// The inverse of the spatial layout: percent 0 sits at the inner side of the
/// left edge gap, percent 1 at the inner side of the right edge gap. The
/// result is deliberately unclamped so a drag beyond the wave region yields a
/// percent below 0 or above 1; the discretizer's clamp branches consume those.
pub fn x_to_percent(x: f32, padding_left: f32, edge_gap: f32, content_width: f32) -> f32 {
    let waves_width = content_width - edge_gap * 2.0;
    if waves_width <= 0.0 {
        return 0.0;
    }
    (x - padding_left - edge_gap) / waves_width
}

/// Clamp a percent position to `[0, 1]` for external reporting
///
/// The unclamped value is retained internally so a drag that left the wave
/// region can resume smoothly.
pub fn clamp_percent(percent: f32) -> f32 {
    percent.clamp(0.0, 1.0)
}
