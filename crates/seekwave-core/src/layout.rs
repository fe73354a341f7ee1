//! Wave layout engine
//!
//! A pure geometry pass that turns a wave count plus a measured content width
//! into concrete wave dimensions: wave width, the gap between waves, the gap
//! between the edge waves and the content border, and the corner radius.
//!
//! The horizontal structure of the rendered bar is:
//!
//! `[padding] [edge gap] [wave] [gap] [wave] ... [gap] [wave] [edge gap] [padding]`
//!
//! The pass is recomputed atomically whenever the content width, wave count,
//! preferred gap, or corner policy changes; it never produces a partially
//! updated result.

use serde::{Deserialize, Serialize};

/// Corner policy for the wave rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CornerType {
    /// Square corners
    None,
    /// Pill shape: radius is half the wave width
    #[default]
    Auto,
    /// Use the preferred radius, capped at half the wave width
    Exactly,
}

/// The result of one layout pass, all values in pixels and >= 0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// Width of one wave
    pub wave_width: f32,
    /// Gap between two neighboring waves
    pub wave_gap: f32,
    /// Gap between the first/last wave and the content border
    pub edge_wave_gap: f32,
    /// Corner radius of the wave rectangles
    pub corner_radius: f32,
}

impl Geometry {
    pub const ZERO: Self = Self {
        wave_width: 0.0,
        wave_gap: 0.0,
        edge_wave_gap: 0.0,
        corner_radius: 0.0,
    };
}

/// Inputs to one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Number of waves to lay out
    pub wave_count: usize,
    /// Measured content width in pixels (may be <= 0 before the first layout)
    pub content_width: f32,
    /// Caller's preferred gap between waves; 0 lets the engine distribute the
    /// remaining space itself
    pub preferred_gap: f32,
    /// Upper bound on the wave width, `None` for unlimited
    pub max_wave_width: Option<f32>,
    /// Corner policy
    pub corner_type: CornerType,
    /// Preferred corner radius, used only with [`CornerType::Exactly`]
    pub preferred_corner_radius: f32,
    /// Upper bound on the edge gap (a density-scaled constant from the control)
    pub edge_gap_limit: f32,
}

/// Compute wave dimensions for the given parameters
///
/// An unmeasured surface (`content_width <= 0`) or an empty waveform yields
/// [`Geometry::ZERO`]; real computation is deferred to the next layout pass.
pub fn compute_geometry(params: &LayoutParams) -> Geometry {
    if params.wave_count == 0 {
        return Geometry::ZERO;
    }

    let content_width = params.content_width;
    if content_width <= 0.0 {
        // Probably not measured yet
        return Geometry::ZERO;
    }

    let wave_count = params.wave_count as f32;

    // The edge gap is capped on very narrow surfaces. There are exactly two
    // edge gaps, one on each side.
    let mut edge_gap = params.edge_gap_limit.min(content_width / 40.0);
    let gap_count = params.wave_count - 1;

    let total_gap = if params.preferred_gap > 0.0 {
        params.preferred_gap * gap_count as f32 + edge_gap * 2.0
    } else {
        0.0
    };

    let remaining_space = (content_width - total_gap).max(0.0);
    let mut wave_width = remaining_space / wave_count;

    if let Some(max_width) = params.max_wave_width {
        if max_width > 0.0 && wave_width > max_width {
            wave_width = max_width;
        }
    }
    if wave_width <= 0.0 {
        // A wave must be at least 1 pixel wide, otherwise it is invisible
        wave_width = 1.0_f32.min(content_width / wave_count);
    }

    let wave_gap = if gap_count > 0 {
        ((content_width - wave_width * wave_count - edge_gap * 2.0) / gap_count as f32).max(0.0)
    } else {
        // A lone wave is centered by moving the leftover space into the edges
        edge_gap = (content_width - wave_width * wave_count) / 2.0;
        0.0
    };

    Geometry {
        wave_width,
        wave_gap,
        edge_wave_gap: edge_gap,
        corner_radius: corner_radius_for(
            params.corner_type,
            params.preferred_corner_radius,
            wave_width,
        ),
    }
}

/// Corner radius for a given policy and wave width
///
/// The radius never exceeds half the wave width, which would distort the
/// rectangle shape.
pub fn corner_radius_for(corner_type: CornerType, preferred_radius: f32, wave_width: f32) -> f32 {
    match corner_type {
        CornerType::None => 0.0,
        CornerType::Auto => wave_width / 2.0,
        CornerType::Exactly => preferred_radius.min(wave_width / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(wave_count: usize, content_width: f32, preferred_gap: f32) -> LayoutParams {
        LayoutParams {
            wave_count,
            content_width,
            preferred_gap,
            max_wave_width: None,
            corner_type: CornerType::None,
            preferred_corner_radius: 0.0,
            edge_gap_limit: 2.0,
        }
    }

    #[test]
    fn test_zero_waves_yield_zero_geometry() {
        assert_eq!(compute_geometry(&params(0, 280.0, 4.0)), Geometry::ZERO);
    }

    #[test]
    fn test_unmeasured_surface_yields_zero_geometry() {
        assert_eq!(compute_geometry(&params(50, 0.0, 4.0)), Geometry::ZERO);
        assert_eq!(compute_geometry(&params(50, -10.0, 4.0)), Geometry::ZERO);
    }

    #[test]
    fn test_default_scenario_50_waves_280_px() {
        // 50 waves on a 280px surface with no gap preference
        let geometry = compute_geometry(&params(50, 280.0, 0.0));

        assert!(geometry.wave_width > 0.0);
        assert!(geometry.wave_gap >= 0.0);
        assert!(geometry.edge_wave_gap >= 0.0);

        // With no gap preference the waves consume the full width and only
        // the two edge gaps sit outside the distributed space
        let occupied = geometry.wave_width * 50.0
            + geometry.wave_gap * 49.0
            + geometry.edge_wave_gap * 2.0;
        assert!(
            (occupied - 280.0).abs() <= geometry.edge_wave_gap * 2.0 + 0.5,
            "occupied {} should approximate the content width",
            occupied
        );
    }

    #[test]
    fn test_wave_width_at_least_one_pixel() {
        // Whenever there is at least one pixel per wave, each wave gets it
        for &(count, width) in &[(50, 50.0), (50, 280.0), (200, 200.0), (7, 300.0)] {
            let geometry = compute_geometry(&params(count, width, 2.0));
            assert!(
                geometry.wave_width >= 1.0,
                "count={} width={} produced wave_width={}",
                count,
                width,
                geometry.wave_width
            );
        }
    }

    #[test]
    fn test_preferred_gap_is_honored_when_space_allows() {
        let geometry = compute_geometry(&params(10, 280.0, 4.0));
        // Gap is recomputed from the actual leftover space but should stay
        // close to the preferred value when nothing is clamped
        assert!(geometry.wave_gap > 0.0);
        let occupied = geometry.wave_width * 10.0
            + geometry.wave_gap * 9.0
            + geometry.edge_wave_gap * 2.0;
        assert!((occupied - 280.0).abs() < 0.01);
    }

    #[test]
    fn test_max_wave_width_clamps_and_redistributes() {
        let mut p = params(10, 280.0, 0.0);
        p.max_wave_width = Some(4.0);
        let geometry = compute_geometry(&p);
        assert_eq!(geometry.wave_width, 4.0);
        // Space freed by the clamp flows into the gaps
        assert!(geometry.wave_gap > 0.0);
    }

    #[test]
    fn test_single_wave_is_centered() {
        let geometry = compute_geometry(&params(1, 100.0, 4.0));
        assert_eq!(geometry.wave_gap, 0.0);
        // Edge gap re-centers the lone wave
        let expected = (100.0 - geometry.wave_width) / 2.0;
        assert!((geometry.edge_wave_gap - expected).abs() < 0.001);
    }

    #[test]
    fn test_edge_gap_capped_on_narrow_surfaces() {
        let geometry = compute_geometry(&params(4, 40.0, 1.0));
        // contentWidth / 40 = 1.0 < edge_gap_limit of 2.0
        assert!(geometry.edge_wave_gap <= 1.0);
    }

    #[test]
    fn test_corner_radius_policies() {
        assert_eq!(corner_radius_for(CornerType::None, 10.0, 6.0), 0.0);
        assert_eq!(corner_radius_for(CornerType::Auto, 10.0, 6.0), 3.0);
        assert_eq!(corner_radius_for(CornerType::Exactly, 2.0, 6.0), 2.0);
        // Never more than half the wave width
        assert_eq!(corner_radius_for(CornerType::Exactly, 10.0, 6.0), 3.0);
    }
}
