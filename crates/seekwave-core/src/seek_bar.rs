//! The waveform seek bar control
//!
//! A host-agnostic progress control: a horizontal strip of vertical waves
//! whose heights encode amplitude samples, with a draggable progress
//! indicator rendered by recoloring waves up to the pointer position.
//!
//! The control does not inherit any rendering or event-dispatch behavior
//! from a UI framework; it is driven by one. The host feeds it measured
//! dimensions ([`SeekBar::on_measurement_changed`]), pointer events
//! ([`SeekBar::on_pointer_event`]), and per-frame animation ticks
//! ([`SeekBar::on_frame_tick`]), and consumes the draw commands produced by
//! [`SeekBar::render`]. All computation is synchronous on the host's UI
//! thread; there is exactly one mutator and no shared state.

use std::time::Duration;

use crate::animator::WaveAnimator;
use crate::blend::blend;
use crate::config::SeekBarConfig;
use crate::layout::{compute_geometry, corner_radius_for, CornerType, Geometry, LayoutParams};
use crate::progress::{clamp_percent, percent_to_discrete, x_to_percent};
use crate::render::{render_waves, RenderParams, WaveBar};
use crate::types::{Insets, Point, Rgba, Size};
use crate::waveform::Waveform;

/// Default intrinsic width in density-independent pixels
pub const DEFAULT_WIDTH_DP: f32 = 280.0;

/// Default intrinsic height in density-independent pixels
pub const DEFAULT_HEIGHT_DP: f32 = 72.0;

/// Upper bound on the edge wave gap in density-independent pixels
pub const DEFAULT_EDGE_WAVE_GAP_DP: f32 = 2.0;

/// Phase of a pointer event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event in widget-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn new(position: Point, phase: PointerPhase) -> Self {
        Self { position, phase }
    }
}

/// Events the control reports back to its host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekBarEvent {
    /// The progress position changed; `percent` is clamped to `[0, 1]`
    ProgressChanged { percent: f32, from_user: bool },
    /// The user started dragging the progress indicator
    StartTrackingTouch,
    /// The user released the progress indicator
    StopTrackingTouch,
}

/// Outcome of feeding one pointer event to the control
#[derive(Debug, Clone, Default)]
pub struct PointerResponse {
    /// Events to forward to the host's callback
    pub events: Vec<SeekBarEvent>,
    /// `Some(true)` when the gesture starts (the host should disallow parent
    /// intercept), `Some(false)` when it ends
    pub capture: Option<bool>,
    /// Whether the visual state changed and a redraw is needed
    pub redraw: bool,
    /// Whether the control consumed the event
    pub handled: bool,
}

/// Interactive waveform-display progress control
#[derive(Debug, Clone)]
pub struct SeekBar {
    config: SeekBarConfig,
    /// Density factor for converting dp constants to pixels
    scale_factor: f32,
    size: Size,
    insets: Insets,
    geometry: Geometry,
    waveform: Waveform,
    /// Previous waveform kept for the cross-fade; may itself be an
    /// intermediate blend if an animation was superseded mid-flight
    prev_waveform: Option<Waveform>,
    animator: WaveAnimator,
    /// Unclamped percent position; leaves `[0, 1]` while the user drags
    /// outside the wave region
    percent_position: f32,
    /// Discretization of `percent_position`, `-1` when no wave is reached
    discrete_position: i32,
    /// Whether a drag gesture is in flight. Once tracking starts, moves
    /// outside the content area are still accepted until up/cancel.
    is_tracking: bool,
}

impl SeekBar {
    pub fn new() -> Self {
        Self::with_config(SeekBarConfig::default())
    }

    pub fn with_config(config: SeekBarConfig) -> Self {
        let animator = WaveAnimator::new(Duration::from_millis(config.anim_duration_ms));
        Self {
            config,
            scale_factor: 1.0,
            size: Size::ZERO,
            insets: Insets::ZERO,
            geometry: Geometry::ZERO,
            waveform: Waveform::empty(),
            prev_waveform: None,
            animator,
            percent_position: 0.0,
            discrete_position: -1,
            is_tracking: false,
        }
    }

    // ------------------------------------------------------------------
    // Measurement
    // ------------------------------------------------------------------

    /// Intrinsic size the control asks its host for, in pixels
    pub fn preferred_size(&self) -> Size {
        Size::new(
            DEFAULT_WIDTH_DP * self.scale_factor,
            DEFAULT_HEIGHT_DP * self.scale_factor,
        )
    }

    /// Set the density factor used to convert dp constants to pixels
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
        self.recompute_geometry();
    }

    /// The host measured (or re-measured) the control
    pub fn on_measurement_changed(&mut self, size: Size, insets: Insets) {
        if self.size == size && self.insets == insets {
            return;
        }
        self.size = size;
        self.insets = insets;
        self.recompute_geometry();
        self.discrete_position = percent_to_discrete(self.wave_count(), self.percent_position);
        log::debug!(
            "measurement changed to {}x{}, geometry {:?}",
            size.width,
            size.height,
            self.geometry
        );
    }

    pub fn measured_size(&self) -> Size {
        self.size
    }

    fn content_width(&self) -> f32 {
        self.size.width - self.insets.left - self.insets.right
    }

    fn content_height(&self) -> f32 {
        self.size.height - self.insets.top - self.insets.bottom
    }

    fn content_contains(&self, point: Point) -> bool {
        point.x >= self.insets.left
            && point.x <= self.size.width - self.insets.right
            && point.y >= self.insets.top
            && point.y <= self.size.height - self.insets.bottom
    }

    fn recompute_geometry(&mut self) {
        self.geometry = compute_geometry(&LayoutParams {
            wave_count: self.wave_count(),
            content_width: self.content_width(),
            preferred_gap: self.config.wave_gap,
            max_wave_width: self.config.max_wave_width,
            corner_type: self.config.corner_type,
            preferred_corner_radius: self.config.corner_radius,
            edge_gap_limit: DEFAULT_EDGE_WAVE_GAP_DP * self.scale_factor,
        });
    }

    // ------------------------------------------------------------------
    // Waveform
    // ------------------------------------------------------------------

    /// Replace the displayed samples
    pub fn set_waves(&mut self, waves: Vec<u32>, animate: bool) {
        self.set_waveform(Waveform::new(waves), animate);
    }

    /// Replace the displayed waveform
    ///
    /// With `animate` the change runs through the animation state machine:
    /// the current waveform becomes the cross-fade source, and if an
    /// animation is already in flight the source is the blended snapshot at
    /// the just-cancelled factor, so the restart has no visible jump.
    /// Without `animate` the factor snaps to 1 and no blending happens.
    pub fn set_waveform(&mut self, waveform: Waveform, animate: bool) {
        if self.waveform.count() > 0 {
            let snapshot = match &self.prev_waveform {
                Some(prev)
                    if prev.count() == self.waveform.count() && self.animator.is_running() =>
                {
                    blend(prev, &self.waveform, self.animator.factor())
                }
                _ => self.waveform.clone(),
            };
            self.prev_waveform = Some(snapshot);
        } else {
            self.prev_waveform = None;
        }

        self.waveform = waveform;
        self.animator.cancel();

        self.recompute_geometry();
        self.discrete_position = percent_to_discrete(self.wave_count(), self.percent_position);

        if animate {
            self.animator.start();
        } else {
            self.prev_waveform = None;
            self.animator.settle();
        }
        log::debug!(
            "waveform set: {} waves, animate={}",
            self.waveform.count(),
            animate
        );
    }

    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    pub fn wave_count(&self) -> usize {
        self.waveform.count()
    }

    // ------------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------------

    /// Set the progress position programmatically
    ///
    /// Returns the resulting event for the host's callback (`from_user` is
    /// false) and recomputes the discrete position.
    pub fn set_progress_percent(&mut self, percent: f32) -> SeekBarEvent {
        let (event, _redraw) = self.apply_percent(percent, false);
        event
    }

    /// Current progress, clamped to `[0, 1]`
    pub fn progress_percent(&self) -> f32 {
        clamp_percent(self.percent_position)
    }

    /// Index of the last covered wave, `-1` for none
    pub fn discrete_position(&self) -> i32 {
        self.discrete_position
    }

    fn apply_percent(&mut self, percent: f32, from_user: bool) -> (SeekBarEvent, bool) {
        self.percent_position = percent;
        let discrete = percent_to_discrete(self.wave_count(), percent);
        let redraw = discrete != self.discrete_position;
        if redraw {
            self.discrete_position = discrete;
        }
        (
            SeekBarEvent::ProgressChanged {
                percent: clamp_percent(percent),
                from_user,
            },
            redraw,
        )
    }

    // ------------------------------------------------------------------
    // Pointer handling
    // ------------------------------------------------------------------

    /// Feed one pointer event from the host
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> PointerResponse {
        let mut response = PointerResponse::default();

        if !self.is_tracking {
            // Tracking may only start while the pointer is inside the
            // content area; stray events elsewhere are left to the host
            if !self.content_contains(event.position) {
                log::debug!("pointer event outside the content area, ignored");
                return response;
            }
        }

        match event.phase {
            PointerPhase::Up | PointerPhase::Cancel => {
                self.is_tracking = false;
                response.events.push(SeekBarEvent::StopTrackingTouch);
                response.capture = Some(false);
                return response;
            }
            PointerPhase::Down => {
                self.is_tracking = true;
                response.events.push(SeekBarEvent::StartTrackingTouch);
                response.capture = Some(true);
            }
            PointerPhase::Move => {}
        }

        let percent = x_to_percent(
            event.position.x,
            self.insets.left,
            self.geometry.edge_wave_gap,
            self.content_width(),
        );
        let (progress_event, redraw) = self.apply_percent(percent, true);
        response.events.push(progress_event);
        response.redraw = redraw;
        response.handled = true;
        response
    }

    /// Whether a drag gesture is currently in flight
    pub fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    // ------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------

    /// Advance the waveform animation by one frame's elapsed time
    ///
    /// Returns `true` if the visual state changed and a redraw is needed.
    /// O(1): only the factor advances here, the per-wave work happens in
    /// [`SeekBar::render`].
    pub fn on_frame_tick(&mut self, dt: Duration) -> bool {
        let was_running = self.animator.is_running();
        self.animator.tick(dt);
        was_running
    }

    /// Whether an animation is in flight (the host should keep ticking)
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// The host surface attached; any previous animation state is settled
    /// without replaying
    pub fn on_attached(&mut self) {
        self.animator.settle();
    }

    /// The host surface detached; an in-flight animation is cancelled
    /// without completing and no further callbacks fire
    pub fn on_detached(&mut self) {
        self.animator.cancel();
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn config(&self) -> &SeekBarConfig {
        &self.config
    }

    /// Color of waves that are not yet in progress
    pub fn set_background_color(&mut self, color: Rgba) {
        self.config.background_color = color;
    }

    /// Color of waves that are in progress
    pub fn set_progress_color(&mut self, color: Rgba) {
        self.config.progress_color = color;
    }

    /// Preferred gap between waves in pixels
    pub fn set_wave_gap(&mut self, gap: f32) {
        self.config.wave_gap = gap;
        self.recompute_geometry();
    }

    /// Upper bound on the wave width in pixels, `None` for unlimited
    pub fn set_max_wave_width(&mut self, max_width: Option<f32>) {
        self.config.max_wave_width = max_width;
        self.recompute_geometry();
    }

    /// Corner policy for the wave rectangles
    pub fn set_corner_type(&mut self, corner_type: CornerType) {
        self.config.corner_type = corner_type;
        self.geometry.corner_radius = corner_radius_for(
            corner_type,
            self.config.corner_radius,
            self.geometry.wave_width,
        );
    }

    /// Preferred corner radius in pixels; effective only with
    /// [`CornerType::Exactly`]
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.config.corner_radius = radius;
        self.geometry.corner_radius = corner_radius_for(
            self.config.corner_type,
            radius,
            self.geometry.wave_width,
        );
    }

    /// Waveform change animation duration
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.config.anim_duration_ms = duration.as_millis() as u64;
        self.animator.set_duration(duration);
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Current layout geometry
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Emit one colored rounded-rectangle draw command per wave
    pub fn render(&self) -> Vec<WaveBar> {
        render_waves(&RenderParams {
            waveform: &self.waveform,
            prev_waveform: self.prev_waveform.as_ref(),
            geometry: self.geometry,
            factor: self.animator.factor(),
            discrete_position: self.discrete_position,
            content_height: self.content_height(),
            padding_left: self.insets.left,
            padding_top: self.insets.top,
            background_color: self.config.background_color,
            progress_color: self.config.progress_color,
        })
    }
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured_bar() -> SeekBar {
        let mut bar = SeekBar::new();
        bar.on_measurement_changed(Size::new(280.0, 72.0), Insets::ZERO);
        bar
    }

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(Point::new(x, y), PointerPhase::Down)
    }

    fn moved(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(Point::new(x, y), PointerPhase::Move)
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(Point::new(x, y), PointerPhase::Up)
    }

    #[test]
    fn test_unmeasured_control_renders_nothing() {
        let mut bar = SeekBar::new();
        bar.set_waves(vec![1, 2, 3], false);
        assert_eq!(bar.geometry(), Geometry::ZERO);
        assert!(bar.render().is_empty());
    }

    #[test]
    fn test_set_waveform_recomputes_geometry_and_discrete_position() {
        let mut bar = measured_bar();
        bar.set_progress_percent(1.0);
        bar.set_waves(vec![5; 50], false);
        assert!(bar.geometry().wave_width > 0.0);
        assert_eq!(bar.discrete_position(), 49);

        bar.set_waves(vec![5; 10], false);
        assert_eq!(bar.discrete_position(), 9);
    }

    #[test]
    fn test_progress_getter_is_clamped_but_internal_state_is_not() {
        let mut bar = measured_bar();
        bar.set_waves(vec![5; 10], false);

        bar.on_pointer_event(down(140.0, 36.0));
        // Drag far past the right edge
        let response = bar.on_pointer_event(moved(500.0, 36.0));
        assert!(bar.is_tracking());
        assert_eq!(bar.progress_percent(), 1.0);
        assert_eq!(bar.discrete_position(), 9);
        match response.events[0] {
            SeekBarEvent::ProgressChanged { percent, from_user } => {
                assert_eq!(percent, 1.0);
                assert!(from_user);
            }
            _ => panic!("expected ProgressChanged"),
        }
    }

    #[test]
    fn test_tracking_starts_only_inside_content_area() {
        let mut bar = measured_bar();
        bar.set_waves(vec![5; 10], false);

        let response = bar.on_pointer_event(down(-10.0, 36.0));
        assert!(!response.handled);
        assert!(response.events.is_empty());
        assert!(!bar.is_tracking());

        // Moves without a prior down inside the area are also ignored
        let response = bar.on_pointer_event(moved(-10.0, 36.0));
        assert!(!response.handled);
    }

    #[test]
    fn test_drag_gesture_lifecycle() {
        let mut bar = measured_bar();
        bar.set_waves(vec![5; 10], false);

        let response = bar.on_pointer_event(down(140.0, 36.0));
        assert_eq!(response.capture, Some(true));
        assert_eq!(response.events[0], SeekBarEvent::StartTrackingTouch);
        assert!(matches!(
            response.events[1],
            SeekBarEvent::ProgressChanged { from_user: true, .. }
        ));

        // Once tracking, moves outside the content area are accepted
        let response = bar.on_pointer_event(moved(-50.0, 200.0));
        assert!(response.handled);
        assert_eq!(bar.progress_percent(), 0.0);

        let response = bar.on_pointer_event(up(140.0, 36.0));
        assert_eq!(response.capture, Some(false));
        assert_eq!(response.events[0], SeekBarEvent::StopTrackingTouch);
        assert!(!bar.is_tracking());
    }

    #[test]
    fn test_midpoint_drag_selects_center_wave() {
        let mut bar = measured_bar();
        bar.set_waves(vec![5; 50], false);
        bar.on_pointer_event(down(140.0, 36.0));
        assert!((24..=25).contains(&bar.discrete_position()));
    }

    #[test]
    fn test_animated_waveform_grows_in() {
        let mut bar = measured_bar();
        bar.set_waves(vec![10; 10], true);
        assert!(bar.is_animating());

        // Factor 0: everything flat
        for wave_bar in bar.render() {
            assert_eq!(wave_bar.bounds.height, 0.0);
        }

        // After the full duration the waves reach their settled heights
        assert!(bar.on_frame_tick(Duration::from_millis(250)));
        assert!(!bar.is_animating());
        for wave_bar in bar.render() {
            assert!((wave_bar.bounds.height - 72.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_set_waveform_without_animation_snaps() {
        let mut bar = measured_bar();
        bar.set_waves(vec![10; 10], false);
        assert!(!bar.is_animating());
        for wave_bar in bar.render() {
            assert!((wave_bar.bounds.height - 72.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_superseding_waveform_mid_animation_has_no_height_jump() {
        let mut bar = measured_bar();
        // Both waveforms carry their max at index 0 so the blended snapshot
        // keeps the same normalization scale; amplitudes near 100 keep the
        // truncation error well under a pixel
        bar.set_waves(vec![100, 40, 70, 10], false);
        bar.set_waves(vec![100, 90, 30, 95], true);

        bar.on_frame_tick(Duration::from_millis(80));
        assert!(bar.is_animating());
        let before: Vec<f32> = bar.render().iter().map(|b| b.bounds.height).collect();

        // A third waveform arrives mid-transition; the restarted animation
        // must begin exactly at the currently rendered heights
        bar.set_waves(vec![50, 50, 50, 50], true);
        let after: Vec<f32> = bar.render().iter().map(|b| b.bounds.height).collect();

        for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
            assert!(
                (b - a).abs() < 1.5,
                "wave {} jumped from {} to {}",
                i,
                b,
                a
            );
        }
    }

    #[test]
    fn test_detach_cancels_and_attach_settles() {
        let mut bar = measured_bar();
        bar.set_waves(vec![10; 4], true);
        bar.on_frame_tick(Duration::from_millis(50));
        assert!(bar.is_animating());

        bar.on_detached();
        assert!(!bar.is_animating());
        // Ticks after detachment are inert
        assert!(!bar.on_frame_tick(Duration::from_millis(50)));

        bar.on_attached();
        assert!(!bar.is_animating());
        for wave_bar in bar.render() {
            assert!((wave_bar.bounds.height - 72.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_corner_setters_update_radius_in_place() {
        let mut bar = measured_bar();
        bar.set_waves(vec![5; 10], false);
        let wave_width = bar.geometry().wave_width;

        bar.set_corner_type(CornerType::None);
        assert_eq!(bar.geometry().corner_radius, 0.0);

        bar.set_corner_type(CornerType::Auto);
        assert!((bar.geometry().corner_radius - wave_width / 2.0).abs() < 0.001);

        bar.set_corner_type(CornerType::Exactly);
        bar.set_corner_radius(1.0);
        assert_eq!(bar.geometry().corner_radius, 1.0);
    }

    #[test]
    fn test_preferred_size_scales_with_density() {
        let mut bar = SeekBar::new();
        assert_eq!(bar.preferred_size(), Size::new(280.0, 72.0));
        bar.set_scale_factor(2.0);
        assert_eq!(bar.preferred_size(), Size::new(560.0, 144.0));
    }

    #[test]
    fn test_progress_events_from_setter_are_not_from_user() {
        let mut bar = measured_bar();
        bar.set_waves(vec![5; 10], false);
        match bar.set_progress_percent(0.5) {
            SeekBarEvent::ProgressChanged { percent, from_user } => {
                assert_eq!(percent, 0.5);
                assert!(!from_user);
            }
            _ => panic!("expected ProgressChanged"),
        }
    }
}
