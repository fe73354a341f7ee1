//! Shared theme constants for seekwave widgets
//!
//! Default colors and the conversion between the core crate's framework-free
//! `Rgba` and `iced::Color`.

use iced::Color;
use seekwave_core::Rgba;

/// Default color of waves that are not yet in progress (light gray)
pub const WAVE_BACKGROUND: Color = Color::from_rgb(0.83, 0.83, 0.83);

/// Default color of waves that are in progress (gray)
pub const WAVE_PROGRESS: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Default seek bar height in pixels
pub const SEEK_BAR_HEIGHT: f32 = 72.0;

/// Convert a core color to an iced color
pub fn to_iced(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Convert an iced color to a core color
pub fn from_iced(color: Color) -> Rgba {
    Rgba::new(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_round_trips() {
        let color = Rgba::new(0.1, 0.4, 0.9, 0.5);
        assert_eq!(from_iced(to_iced(color)), color);
    }
}
