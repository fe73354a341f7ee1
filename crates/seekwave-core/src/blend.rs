//! Cross-fade blending between two waveforms
//!
//! Used when a new waveform arrives while the previous one is still animating
//! in: the intermediate waveform captures the visually-current state so the
//! restarted animation has no visible jump.

use crate::waveform::Waveform;

/// Compute the intermediate waveform between `start` and `end`
///
/// `factor` positions the result between the two: 0 reproduces `start`
/// (rescaled into `end`'s amplitude range), 1 reproduces `end`. The start
/// waveform is first normalized so both operate on the same scale, then each
/// sample is interpolated linearly and truncated back to an integer.
///
/// Amplitude-by-amplitude interpolation is undefined for waveforms of
/// different lengths; in that case `end` is returned unchanged. This is a
/// documented fallback, not an error.
pub fn blend(start: &Waveform, end: &Waveform, factor: f32) -> Waveform {
    let count = end.count();
    if count != start.count() {
        return end.clone();
    }

    let start_max = start.max_value();
    let normalizer = if start_max == 0 {
        0.0
    } else {
        end.max_value() as f32 / start_max as f32
    };

    let mut waves = Vec::with_capacity(count);
    for i in 0..count {
        let normalized_start = start.value_at(i) as f32 * normalizer;
        let blended = normalized_start + (end.value_at(i) as f32 - normalized_start) * factor;
        waves.push(blended as u32);
    }
    Waveform::new(waves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_one_reproduces_end() {
        // Equal max values keep the normalizer at exactly 1.0, so the
        // interpolation is exact element-wise
        let start = Waveform::new(vec![1, 4, 8, 2]);
        let end = Waveform::new(vec![8, 3, 5, 1]);
        assert_eq!(blend(&start, &end, 1.0), end);
    }

    #[test]
    fn test_factor_zero_reproduces_rescaled_start() {
        // start max 4, end max 8 -> normalizer 2.0
        let start = Waveform::new(vec![1, 2, 4]);
        let end = Waveform::new(vec![8, 0, 3]);
        let blended = blend(&start, &end, 0.0);
        assert_eq!(blended.samples(), &[2, 4, 8]);
    }

    #[test]
    fn test_midpoint_blend() {
        // Normalizer 1.0; halfway between each pair, truncated
        let start = Waveform::new(vec![0, 10]);
        let end = Waveform::new(vec![10, 0]);
        let blended = blend(&start, &end, 0.5);
        assert_eq!(blended.samples(), &[5, 5]);
    }

    #[test]
    fn test_mismatched_lengths_fall_back_to_end() {
        let start = Waveform::new(vec![1, 2, 3]);
        let end = Waveform::new(vec![9, 9]);
        assert_eq!(blend(&start, &end, 0.5), end);
    }

    #[test]
    fn test_zero_start_max_is_guarded() {
        // An all-zero start waveform would divide by zero in the normalizer;
        // it is treated as normalizer 0, so the blend grows from silence
        let start = Waveform::new(vec![0, 0, 0]);
        let end = Waveform::new(vec![10, 20, 30]);
        let blended = blend(&start, &end, 0.5);
        assert_eq!(blended.samples(), &[5, 10, 15]);
    }
}
