// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Captured drag gestures with cumulative deltas.
//!
//! A [`DragSource`] is bound to one target (a panel body, a resize handle, …). The
//! host forwards pointer events that hit that target and the source reports the
//! gesture to a [`DragHandler`]:
//!
//! 1. `pointer_down` captures the pointer. Other pointers are ignored until the
//!    captured one is released or the capture is lost.
//! 2. Once the pointer has travelled strictly further than the configured gap, the
//!    handler receives [`DragHandler::on_drag_start`] followed by the first
//!    [`DragHandler::on_drag`]. Without a gap, the start notification fires on
//!    `pointer_down`.
//! 3. Every further move reports a [`DragState`] whose `delta` is measured from the
//!    pointer-down position.
//! 4. `pointer_up` ends the gesture; [`DragSource::cancel`] (capture loss) aborts it.
//!    A gesture that never crossed the gap ends silently.
//!
//! ## Gap threshold
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::{DragOptions, DragSource, DragState};
//!
//! let mut source = DragSource::new(DragOptions { gap: Some(5.0), ..Default::default() });
//! let mut moves = 0;
//! let mut on_drag = |_: &DragState| moves += 1;
//!
//! source.pointer_down(None, Point::ZERO, &mut on_drag);
//! source.pointer_move(None, Point::new(3.0, 4.0), &mut on_drag); // exactly 5px: suppressed
//! source.pointer_move(None, Point::new(3.0, 5.0), &mut on_drag); // past the gap
//! assert_eq!(moves, 1);
//! ```

use core::num::NonZeroU64;
use kurbo::{Point, Vec2};

/// Pointer identifier for the captured pointer.
pub type PointerId = NonZeroU64;

/// Pointer used when the host does not distinguish pointers.
pub const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// Configuration for a [`DragSource`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragOptions {
    /// Minimum travel distance before the gesture is reported. `None` or a
    /// non-positive value reports from pointer-down.
    pub gap: Option<f64>,
    /// A disabled source never captures a pointer.
    pub disabled: bool,
}

/// Snapshot of an in-progress drag, handed to [`DragHandler::on_drag`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Pointer position at pointer-down.
    pub start: Point,
    /// Latest pointer position.
    pub position: Point,
    /// Cumulative movement since pointer-down.
    pub delta: Vec2,
}

impl DragState {
    fn at(start: Point, position: Point) -> Self {
        Self {
            start,
            position,
            delta: position - start,
        }
    }
}

/// Receiver for drag gesture notifications.
///
/// Only [`on_drag`](Self::on_drag) is required. Any `FnMut(&DragState)` closure is a
/// handler that ignores start, end, and cancel.
pub trait DragHandler {
    /// Called once per gesture, before the first [`on_drag`](Self::on_drag).
    fn on_drag_start(&mut self) {}

    /// Called on every tracked movement with the cumulative state.
    fn on_drag(&mut self, state: &DragState);

    /// Called when the captured pointer is released after the gesture started.
    fn on_drag_end(&mut self, state: &DragState) {
        let _ = state;
    }

    /// Called when capture is lost after the gesture started.
    ///
    /// Defaults to [`on_drag_end`](Self::on_drag_end).
    fn on_drag_cancel(&mut self, state: &DragState) {
        self.on_drag_end(state);
    }
}

impl<F: FnMut(&DragState)> DragHandler for F {
    fn on_drag(&mut self, state: &DragState) {
        self(state);
    }
}

#[derive(Clone, Copy, Debug)]
struct Capture {
    pointer: PointerId,
    state: DragState,
    started: bool,
}

/// Single-pointer drag tracker bound to one target.
#[derive(Clone, Debug, Default)]
pub struct DragSource {
    options: DragOptions,
    capture: Option<Capture>,
}

impl DragSource {
    /// Create a source with the given options.
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            capture: None,
        }
    }

    /// Returns the current options.
    pub fn options(&self) -> DragOptions {
        self.options
    }

    /// Enable or disable capturing. An active gesture is not affected.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    /// Returns `true` while a pointer is captured, even before the gap is crossed.
    pub fn is_captured(&self) -> bool {
        self.capture.is_some()
    }

    /// Returns `true` once the captured gesture has been reported as started.
    pub fn is_dragging(&self) -> bool {
        self.capture.is_some_and(|c| c.started)
    }

    /// The captured pointer, if any.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.capture.map(|c| c.pointer)
    }

    /// The most recent drag state of the captured gesture.
    pub fn state(&self) -> Option<DragState> {
        self.capture.map(|c| c.state)
    }

    /// Record a pointer down on the bound target.
    ///
    /// Returns `true` if the pointer was captured. A down from the already captured
    /// pointer ends the previous gesture and starts a new one.
    pub fn pointer_down(
        &mut self,
        pointer_id: Option<PointerId>,
        position: Point,
        handler: &mut impl DragHandler,
    ) -> bool {
        let pointer = pointer_id.unwrap_or(PRIMARY_POINTER);
        match self.captured_pointer() {
            Some(captured) if captured != pointer => return false,
            Some(_) => {
                self.pointer_up(Some(pointer), handler);
            }
            None => {}
        }
        if self.options.disabled {
            return false;
        }

        let started = !self.has_gap();
        self.capture = Some(Capture {
            pointer,
            state: DragState::at(position, position),
            started,
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(pointer = pointer.get(), x = position.x, y = position.y, "drag captured");
        if started {
            handler.on_drag_start();
        }
        true
    }

    /// Record a pointer move.
    ///
    /// Returns `true` if the move was reported to the handler.
    pub fn pointer_move(
        &mut self,
        pointer_id: Option<PointerId>,
        position: Point,
        handler: &mut impl DragHandler,
    ) -> bool {
        let pointer = pointer_id.unwrap_or(PRIMARY_POINTER);
        let gap = self.options.gap;
        let Some(capture) = self.capture.as_mut().filter(|c| c.pointer == pointer) else {
            return false;
        };

        let state = DragState::at(capture.state.start, position);
        capture.state = state;
        if !capture.started {
            let gap = gap.unwrap_or(0.0);
            if state.delta.hypot2() <= gap * gap {
                return false;
            }
            capture.started = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(pointer = pointer.get(), gap, "drag gap exceeded");
            handler.on_drag_start();
        }
        handler.on_drag(&state);
        true
    }

    /// Record the captured pointer being released.
    ///
    /// Returns `true` if a started gesture was ended.
    pub fn pointer_up(
        &mut self,
        pointer_id: Option<PointerId>,
        handler: &mut impl DragHandler,
    ) -> bool {
        let pointer = pointer_id.unwrap_or(PRIMARY_POINTER);
        if self.captured_pointer() != Some(pointer) {
            return false;
        }
        let Some(capture) = self.capture.take() else {
            return false;
        };
        if capture.started {
            handler.on_drag_end(&capture.state);
        }
        capture.started
    }

    /// Abort the captured gesture, for example on pointer capture loss.
    ///
    /// Returns `true` if a started gesture was cancelled.
    pub fn cancel(&mut self, handler: &mut impl DragHandler) -> bool {
        let Some(capture) = self.capture.take() else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            pointer = capture.pointer.get(),
            started = capture.started,
            "drag cancelled"
        );
        if capture.started {
            handler.on_drag_cancel(&capture.state);
        }
        capture.started
    }

    fn has_gap(&self) -> bool {
        self.options.gap.is_some_and(|gap| gap > 0.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Seen {
        Start,
        Drag(Vec2),
        End(Vec2),
        Cancel(Vec2),
    }

    #[derive(Default)]
    struct Recorder(Vec<Seen>);

    impl DragHandler for Recorder {
        fn on_drag_start(&mut self) {
            self.0.push(Seen::Start);
        }

        fn on_drag(&mut self, state: &DragState) {
            self.0.push(Seen::Drag(state.delta));
        }

        fn on_drag_end(&mut self, state: &DragState) {
            self.0.push(Seen::End(state.delta));
        }

        fn on_drag_cancel(&mut self, state: &DragState) {
            self.0.push(Seen::Cancel(state.delta));
        }
    }

    fn pointer(n: u64) -> Option<PointerId> {
        NonZeroU64::new(n)
    }

    #[test]
    fn start_fires_on_down_without_gap() {
        let mut source = DragSource::default();
        let mut rec = Recorder::default();

        assert!(source.pointer_down(None, Point::new(5.0, 5.0), &mut rec));

        assert!(source.is_dragging());
        assert_eq!(rec.0, [Seen::Start]);
    }

    #[test]
    fn deltas_are_cumulative_from_down() {
        let mut source = DragSource::default();
        let mut rec = Recorder::default();

        source.pointer_down(None, Point::new(100.0, 100.0), &mut rec);
        source.pointer_move(None, Point::new(110.0, 95.0), &mut rec);
        source.pointer_move(None, Point::new(130.0, 90.0), &mut rec);
        source.pointer_up(None, &mut rec);

        assert_eq!(
            rec.0,
            [
                Seen::Start,
                Seen::Drag(Vec2::new(10.0, -5.0)),
                Seen::Drag(Vec2::new(30.0, -10.0)),
                Seen::End(Vec2::new(30.0, -10.0)),
            ]
        );
        assert!(!source.is_captured());
    }

    #[test]
    fn gap_suppresses_reporting_until_exceeded() {
        let mut source = DragSource::new(DragOptions {
            gap: Some(10.0),
            disabled: false,
        });
        let mut rec = Recorder::default();

        source.pointer_down(None, Point::ZERO, &mut rec);
        assert!(source.is_captured());
        assert!(!source.is_dragging());
        assert!(!source.pointer_move(None, Point::new(6.0, 8.0), &mut rec));
        assert!(rec.0.is_empty());

        assert!(source.pointer_move(None, Point::new(6.0, 9.0), &mut rec));
        // The first reported delta is still measured from the down position.
        assert_eq!(rec.0, [Seen::Start, Seen::Drag(Vec2::new(6.0, 9.0))]);
    }

    #[test]
    fn release_below_gap_is_silent() {
        let mut source = DragSource::new(DragOptions {
            gap: Some(10.0),
            disabled: false,
        });
        let mut rec = Recorder::default();

        source.pointer_down(None, Point::ZERO, &mut rec);
        source.pointer_move(None, Point::new(2.0, 2.0), &mut rec);
        assert!(!source.pointer_up(None, &mut rec));

        assert!(rec.0.is_empty());
        assert!(!source.is_captured());
    }

    #[test]
    fn zero_gap_behaves_like_no_gap() {
        let mut source = DragSource::new(DragOptions {
            gap: Some(0.0),
            disabled: false,
        });
        let mut rec = Recorder::default();

        source.pointer_down(None, Point::ZERO, &mut rec);
        source.pointer_move(None, Point::ZERO, &mut rec);

        assert_eq!(rec.0, [Seen::Start, Seen::Drag(Vec2::ZERO)]);
    }

    #[test]
    fn disabled_source_does_not_capture() {
        let mut source = DragSource::new(DragOptions {
            gap: None,
            disabled: true,
        });
        let mut rec = Recorder::default();

        assert!(!source.pointer_down(None, Point::ZERO, &mut rec));
        assert!(!source.pointer_move(None, Point::new(5.0, 5.0), &mut rec));
        assert!(rec.0.is_empty());
    }

    #[test]
    fn disabling_mid_gesture_keeps_the_gesture() {
        let mut source = DragSource::default();
        let mut rec = Recorder::default();

        source.pointer_down(None, Point::ZERO, &mut rec);
        source.set_disabled(true);
        assert!(source.pointer_move(None, Point::new(1.0, 0.0), &mut rec));
    }

    #[test]
    fn other_pointers_are_ignored_while_captured() {
        let mut source = DragSource::default();
        let mut rec = Recorder::default();

        source.pointer_down(pointer(1), Point::ZERO, &mut rec);
        assert!(!source.pointer_down(pointer(2), Point::new(50.0, 50.0), &mut rec));
        assert!(!source.pointer_move(pointer(2), Point::new(60.0, 60.0), &mut rec));
        assert!(!source.pointer_up(pointer(2), &mut rec));

        assert_eq!(source.captured_pointer(), pointer(1));
        assert_eq!(rec.0, [Seen::Start]);
    }

    #[test]
    fn repeated_down_restarts_the_gesture() {
        let mut source = DragSource::default();
        let mut rec = Recorder::default();

        source.pointer_down(None, Point::ZERO, &mut rec);
        source.pointer_move(None, Point::new(4.0, 0.0), &mut rec);
        source.pointer_down(None, Point::new(50.0, 50.0), &mut rec);
        source.pointer_move(None, Point::new(51.0, 50.0), &mut rec);

        assert_eq!(
            rec.0,
            [
                Seen::Start,
                Seen::Drag(Vec2::new(4.0, 0.0)),
                Seen::End(Vec2::new(4.0, 0.0)),
                Seen::Start,
                Seen::Drag(Vec2::new(1.0, 0.0)),
            ]
        );
    }

    #[test]
    fn cancel_reports_last_state() {
        let mut source = DragSource::default();
        let mut rec = Recorder::default();

        source.pointer_down(None, Point::ZERO, &mut rec);
        source.pointer_move(None, Point::new(3.0, 7.0), &mut rec);
        assert!(source.cancel(&mut rec));

        assert_eq!(rec.0.last(), Some(&Seen::Cancel(Vec2::new(3.0, 7.0))));
        assert!(!source.is_captured());
        assert!(!source.cancel(&mut rec));
    }

    #[test]
    fn cancel_defaults_to_end() {
        struct EndOnly(Option<Vec2>);
        impl DragHandler for EndOnly {
            fn on_drag(&mut self, _: &DragState) {}
            fn on_drag_end(&mut self, state: &DragState) {
                self.0 = Some(state.delta);
            }
        }

        let mut source = DragSource::default();
        let mut handler = EndOnly(None);
        source.pointer_down(None, Point::ZERO, &mut handler);
        source.pointer_move(None, Point::new(2.0, 2.0), &mut handler);
        source.cancel(&mut handler);

        assert_eq!(handler.0, Some(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn move_without_capture_is_ignored() {
        let mut source = DragSource::default();
        let mut rec = Recorder::default();

        assert!(!source.pointer_move(None, Point::new(1.0, 1.0), &mut rec));
        assert!(!source.pointer_up(None, &mut rec));
        assert!(source.state().is_none());
    }
}
