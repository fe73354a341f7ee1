//! Canvas Program for the waveform seek bar
//!
//! Implements the iced canvas `Program` trait: mouse events are translated
//! into the core's [`PointerEvent`]s and published through a callback
//! closure, and the core's [`WaveBar`] draw commands are painted as rounded
//! rectangles. The application owns the [`SeekBar`] control and applies the
//! published inputs to it in its `update` function.

use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program};
use iced::{mouse, Rectangle, Theme};
use seekwave_core::{PointerEvent, PointerPhase, SeekBar};

use crate::theme;

/// Input the application must feed back into its [`SeekBar`] control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekBarInput {
    /// A pointer event in widget-local coordinates; apply with
    /// `SeekBar::on_pointer_event`
    Pointer(PointerEvent),
    /// The canvas was laid out at a new size; apply with
    /// `SeekBar::on_measurement_changed`
    Resized(seekwave_core::Size),
}

/// Canvas state tracking the mouse-capture bookkeeping for the drag gesture
///
/// The control's own tracking state decides gesture semantics; this only
/// remembers whether the left button is down so hover moves are not
/// forwarded as drags.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekBarInteraction {
    pub is_pressed: bool,
}

/// Canvas program rendering a [`SeekBar`] with drag-to-seek
pub struct SeekBarCanvas<'a, Message, F>
where
    F: Fn(SeekBarInput) -> Message,
{
    pub state: &'a SeekBar,
    pub on_input: F,
}

impl<'a, Message, F> SeekBarCanvas<'a, Message, F>
where
    F: Fn(SeekBarInput) -> Message,
{
    fn pointer(&self, position: seekwave_core::Point, phase: PointerPhase) -> Message {
        (self.on_input)(SeekBarInput::Pointer(PointerEvent::new(position, phase)))
    }
}

impl<'a, Message, F> Program<Message> for SeekBarCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(SeekBarInput) -> Message,
{
    type State = SeekBarInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        // Keep the control's measurement in sync with the actual layout
        let measured = seekwave_core::Size::new(bounds.width, bounds.height);
        if self.state.measured_size() != measured {
            log::debug!(
                "seek bar canvas resized to {}x{}",
                measured.width,
                measured.height
            );
            return Some(canvas::Action::publish((self.on_input)(
                SeekBarInput::Resized(measured),
            )));
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    interaction.is_pressed = true;
                    return Some(canvas::Action::publish(self.pointer(
                        seekwave_core::Point::new(position.x, position.y),
                        PointerPhase::Down,
                    )));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if interaction.is_pressed => {
                // While dragging, moves outside the bounds still steer the
                // control; translate the absolute position into local space
                if let Some(position) = cursor.position() {
                    return Some(canvas::Action::publish(self.pointer(
                        seekwave_core::Point::new(position.x - bounds.x, position.y - bounds.y),
                        PointerPhase::Move,
                    )));
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if interaction.is_pressed =>
            {
                interaction.is_pressed = false;
                let position = cursor
                    .position()
                    .map(|p| seekwave_core::Point::new(p.x - bounds.x, p.y - bounds.y))
                    .unwrap_or_default();
                return Some(canvas::Action::publish(self.pointer(position, PointerPhase::Up)));
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.is_pressed || cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for bar in self.state.render() {
            if bar.bounds.width <= 0.0 || bar.bounds.height <= 0.0 {
                continue;
            }
            let path = Path::rounded_rectangle(
                iced::Point::new(bar.bounds.x, bar.bounds.y),
                iced::Size::new(bar.bounds.width, bar.bounds.height),
                bar.corner_radius.into(),
            );
            frame.fill(&path, theme::to_iced(bar.color));
        }

        vec![frame.into_geometry()]
    }
}
