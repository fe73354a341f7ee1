//! Seek bar view function
//!
//! A plain function that takes the control state and a callback closure,
//! returning an `Element` — the recommended iced 0.14 pattern.

use iced::widget::Canvas;
use iced::{Element, Length};
use seekwave_core::SeekBar;

use super::canvas::{SeekBarCanvas, SeekBarInput};

/// Create a waveform seek bar element
///
/// # Arguments
///
/// * `state` - The [`SeekBar`] control owned by the application
/// * `on_input` - Callback closure receiving [`SeekBarInput`]s that the
///   application must apply to the control in its `update` function
///
/// # Example
///
/// ```ignore
/// // In the view function:
/// let seek_bar = waveform_seek_bar(&self.seek_bar, Message::SeekBar);
///
/// // In the update function:
/// Message::SeekBar(SeekBarInput::Pointer(event)) => {
///     let response = self.seek_bar.on_pointer_event(event);
///     for event in response.events {
///         // forward ProgressChanged / StartTrackingTouch / StopTrackingTouch
///     }
/// }
/// Message::SeekBar(SeekBarInput::Resized(size)) => {
///     self.seek_bar.on_measurement_changed(size, Insets::ZERO);
/// }
/// ```
pub fn waveform_seek_bar<'a, Message>(
    state: &'a SeekBar,
    on_input: impl Fn(SeekBarInput) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let height = state.preferred_size().height;

    Canvas::new(SeekBarCanvas { state, on_input })
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}
