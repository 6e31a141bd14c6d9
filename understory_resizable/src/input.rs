// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer binding: routes raw pointer events to the panel's body and handles.
//!
//! [`PanelInput`] owns one [`DragSource`] for the body and one shared by the eight
//! handles (only one gesture runs at a time). On pointer-down it hit tests the
//! panel, captures the pointer on the matching source, and from then on forwards
//! the source's start/move/end/cancel notifications into the [`Panel`].
//!
//! The body source is disabled while the panel is not draggable. The handle source
//! never is, so handles keep working on a fixed-position panel.

use kurbo::Point;
use understory_event_state::drag::{
    DragHandler, DragOptions, DragSource, DragState, PRIMARY_POINTER, PointerId,
};

use crate::{Handle, Panel, Surface};

/// The part of a panel a pointer landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelTarget {
    /// A resize handle.
    Handle(Handle),
    /// The body drag region.
    Body,
}

/// Pointer event router for one [`Panel`].
#[derive(Clone, Debug)]
pub struct PanelInput {
    body: DragSource,
    handles: DragSource,
    active: Option<PanelTarget>,
}

impl PanelInput {
    /// Create a binding configured from `panel`'s drag flag and handle gap.
    pub fn new<S: Surface>(panel: &Panel<S>) -> Self {
        Self {
            body: DragSource::new(DragOptions {
                gap: None,
                disabled: !panel.is_draggable(),
            }),
            handles: DragSource::new(DragOptions {
                gap: panel.handle_gap(),
                disabled: false,
            }),
            active: None,
        }
    }

    /// The target holding pointer capture.
    pub fn active(&self) -> Option<PanelTarget> {
        self.active
    }

    /// Route a pointer down at `position` (in the panel's positioning context).
    ///
    /// Returns the target that captured the pointer. While another pointer is
    /// captured, the event is ignored.
    pub fn pointer_down<S: Surface>(
        &mut self,
        panel: &mut Panel<S>,
        pointer_id: Option<PointerId>,
        position: Point,
    ) -> Option<PanelTarget> {
        if let Some(active) = self.active {
            let pointer = pointer_id.unwrap_or(PRIMARY_POINTER);
            if self.source(active).captured_pointer() != Some(pointer) {
                return None;
            }
            self.pointer_up(panel, pointer_id);
        }

        let target = panel.hit_test(position)?;
        self.body.set_disabled(!panel.is_draggable());
        let captured = match target {
            PanelTarget::Handle(handle) => self.handles.pointer_down(
                pointer_id,
                position,
                &mut ResizeBinding { panel, handle },
            ),
            PanelTarget::Body => {
                self.body
                    .pointer_down(pointer_id, position, &mut MoveBinding { panel })
            }
        };
        if !captured {
            return None;
        }
        self.active = Some(target);
        Some(target)
    }

    /// Route a pointer move. Returns `true` if the panel received a movement.
    pub fn pointer_move<S: Surface>(
        &mut self,
        panel: &mut Panel<S>,
        pointer_id: Option<PointerId>,
        position: Point,
    ) -> bool {
        match self.active {
            Some(PanelTarget::Handle(handle)) => self.handles.pointer_move(
                pointer_id,
                position,
                &mut ResizeBinding { panel, handle },
            ),
            Some(PanelTarget::Body) => {
                self.body
                    .pointer_move(pointer_id, position, &mut MoveBinding { panel })
            }
            None => false,
        }
    }

    /// Route a pointer up. Returns `true` if a started gesture ended.
    pub fn pointer_up<S: Surface>(
        &mut self,
        panel: &mut Panel<S>,
        pointer_id: Option<PointerId>,
    ) -> bool {
        let ended = match self.active {
            Some(PanelTarget::Handle(handle)) => self
                .handles
                .pointer_up(pointer_id, &mut ResizeBinding { panel, handle }),
            Some(PanelTarget::Body) => self.body.pointer_up(pointer_id, &mut MoveBinding { panel }),
            None => return false,
        };
        self.release_if_idle();
        ended
    }

    /// Abort the active gesture, for example when pointer capture is lost.
    ///
    /// The panel keeps its last accepted geometry.
    pub fn cancel<S: Surface>(&mut self, panel: &mut Panel<S>) -> bool {
        let cancelled = match self.active {
            Some(PanelTarget::Handle(handle)) => {
                self.handles.cancel(&mut ResizeBinding { panel, handle })
            }
            Some(PanelTarget::Body) => self.body.cancel(&mut MoveBinding { panel }),
            None => return false,
        };
        self.release_if_idle();
        cancelled
    }

    fn source(&self, target: PanelTarget) -> &DragSource {
        match target {
            PanelTarget::Handle(_) => &self.handles,
            PanelTarget::Body => &self.body,
        }
    }

    fn release_if_idle(&mut self) {
        if let Some(active) = self.active {
            if !self.source(active).is_captured() {
                self.active = None;
            }
        }
    }
}

struct ResizeBinding<'a, S> {
    panel: &'a mut Panel<S>,
    handle: Handle,
}

impl<S: Surface> DragHandler for ResizeBinding<'_, S> {
    fn on_drag_start(&mut self) {
        self.panel.begin_resize(self.handle);
    }

    fn on_drag(&mut self, state: &DragState) {
        self.panel.resize(state.delta);
    }

    fn on_drag_end(&mut self, _: &DragState) {
        self.panel.end_resize();
    }
}

struct MoveBinding<'a, S> {
    panel: &'a mut Panel<S>,
}

impl<S: Surface> DragHandler for MoveBinding<'_, S> {
    fn on_drag_start(&mut self) {
        self.panel.begin_drag();
    }

    fn on_drag(&mut self, state: &DragState) {
        self.panel.drag(state.delta);
    }

    fn on_drag_end(&mut self, _: &DragState) {
        self.panel.end_drag();
    }
}
