// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The panel controller: gesture state, live geometry, and surface writes.

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::input::PanelTarget;
use crate::transform::{FrameHandle, TransformApplier, TransformOptions};
use crate::{
    Axis, Bounds, ConfigError, GeometryFields, HANDLES, Handle, HandleSpec, PanelConfig,
    PanelGeometry, PartialGeometry, RectSnapshot, Resolution, Surface,
};

/// Which gesture, if any, the panel is in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    /// No gesture.
    #[default]
    Idle,
    /// A handle is being dragged.
    Resizing {
        /// The handle that started the gesture.
        handle: Handle,
        /// Geometry captured at gesture start; all deltas are relative to it.
        snapshot: RectSnapshot,
    },
    /// The body is being dragged.
    Dragging {
        /// Top-left corner at gesture start.
        origin: Point,
    },
}

/// What one resize movement did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResizeOutcome {
    /// Per-axis results, in the handle's resolver order. Empty when idle.
    pub resolutions: SmallVec<[(Axis, Resolution); 2]>,
    /// Geometry fields written by accepted axes.
    pub changed: GeometryFields,
}

impl ResizeOutcome {
    /// The result for `axis`, if the handle drives it.
    pub fn resolution(&self, axis: Axis) -> Option<&Resolution> {
        self.resolutions
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, r)| r)
    }
}

/// A draggable, resizable panel.
///
/// Owns the live [`PanelGeometry`] and the single [`Surface`] it is presented on.
/// Geometry is tracked even while no surface is attached; surface writes are
/// simply skipped.
#[derive(Debug)]
pub struct Panel<S> {
    bounds: Bounds,
    geometry: PanelGeometry,
    interaction: Interaction,
    draggable: bool,
    drag_region: Option<Rect>,
    handle_gap: Option<f64>,
    surface: Option<S>,
    transforms: TransformApplier,
}

impl<S: Surface> Panel<S> {
    /// Create a panel from `config`, defaulting unset maximums to `viewport`.
    pub fn new(config: &PanelConfig, viewport: Size) -> Result<Self, ConfigError> {
        let (bounds, geometry) = config.resolve(viewport)?;
        Ok(Self {
            bounds,
            geometry,
            interaction: Interaction::Idle,
            draggable: config.draggable,
            drag_region: config.drag_region,
            handle_gap: config.handle_gap,
            surface: None,
            transforms: TransformApplier::new(),
        })
    }

    /// Size bounds, fixed at construction.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Live geometry.
    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Current gesture state.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Snapshot of the active resize gesture.
    pub fn snapshot(&self) -> Option<RectSnapshot> {
        match self.interaction {
            Interaction::Resizing { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// Whether body drags are allowed.
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Allow or forbid body drags. An active drag is not interrupted.
    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// Travel distance before a handle drag starts resizing.
    pub fn handle_gap(&self) -> Option<f64> {
        self.handle_gap
    }

    /// Attach the surface the panel is presented on, returning the previous one.
    ///
    /// The new surface immediately receives the full geometry.
    pub fn attach_surface(&mut self, mut surface: S) -> Option<S> {
        surface.set_geometry(&self.geometry, GeometryFields::all());
        self.surface.replace(surface)
    }

    /// Detach the surface, cancelling any transform still waiting for a frame.
    pub fn detach_surface(&mut self) -> Option<S> {
        if self.transforms.cancel_all() {
            #[cfg(feature = "tracing")]
            tracing::debug!("pending transform cancelled on detach");
        }
        self.surface.take()
    }

    /// The attached surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The attached surface, mutably.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Start a resize gesture from `handle`, capturing the snapshot.
    ///
    /// A start while already resizing replaces the snapshot. Returns `false` while a
    /// body drag is active.
    pub fn begin_resize(&mut self, handle: Handle) -> bool {
        if matches!(self.interaction, Interaction::Dragging { .. }) {
            return false;
        }
        let snapshot = match &self.surface {
            Some(surface) => surface.bounding_box(),
            None => RectSnapshot::from_geometry(&self.geometry),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?handle, ?snapshot, "resize started");
        self.interaction = Interaction::Resizing { handle, snapshot };
        true
    }

    /// Apply a cumulative resize delta.
    ///
    /// Every resolver of the active handle runs against the gesture snapshot with
    /// the same delta. Accepted axes are applied; rejected axes leave their fields
    /// untouched.
    pub fn resize(&mut self, delta: Vec2) -> ResizeOutcome {
        let Interaction::Resizing { handle, snapshot } = self.interaction else {
            return ResizeOutcome::default();
        };

        let mut outcome = ResizeOutcome::default();
        for &axis in handle.axes() {
            let resolution = axis.resolve(&snapshot, delta, &self.bounds);
            match &resolution {
                Resolution::Accepted(update) => {
                    outcome.changed |= self.geometry.apply(update);
                }
                #[cfg(feature = "tracing")]
                Resolution::Rejected { candidate } => {
                    tracing::trace!(?axis, candidate, "resize axis rejected");
                }
                #[cfg(not(feature = "tracing"))]
                Resolution::Rejected { .. } => {}
            }
            outcome.resolutions.push((axis, resolution));
        }
        self.write_geometry(outcome.changed);
        outcome
    }

    /// End the resize gesture. Geometry stays at its last accepted value.
    ///
    /// Returns `false` if no resize was active.
    pub fn end_resize(&mut self) -> bool {
        if !matches!(self.interaction, Interaction::Resizing { .. }) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(geometry = ?self.geometry, "resize ended");
        self.interaction = Interaction::Idle;
        true
    }

    /// Start a body drag.
    ///
    /// Returns `false` if body dragging is disabled or a resize is active.
    pub fn begin_drag(&mut self) -> bool {
        if !self.draggable || matches!(self.interaction, Interaction::Resizing { .. }) {
            return false;
        }
        let origin = self.geometry.origin();
        #[cfg(feature = "tracing")]
        tracing::debug!(x = origin.x, y = origin.y, "drag started");
        self.interaction = Interaction::Dragging { origin };
        true
    }

    /// Move the panel by a cumulative delta from the drag origin.
    ///
    /// Returns `false` if no drag is active.
    pub fn drag(&mut self, delta: Vec2) -> bool {
        let Interaction::Dragging { origin } = self.interaction else {
            return false;
        };
        let target = origin + delta;
        let changed = self.geometry.apply(&PartialGeometry {
            top: Some(target.y),
            left: Some(target.x),
            ..PartialGeometry::default()
        });
        self.write_geometry(changed);
        true
    }

    /// End the body drag. Returns `false` if no drag was active.
    pub fn end_drag(&mut self) -> bool {
        if !matches!(self.interaction, Interaction::Dragging { .. }) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(geometry = ?self.geometry, "drag ended");
        self.interaction = Interaction::Idle;
        true
    }

    /// Abort whichever gesture is active. Identical to ending it: nothing is rolled back.
    pub fn cancel_gesture(&mut self) -> bool {
        self.end_resize() || self.end_drag()
    }

    /// What sits under `point`, given in the panel's positioning context.
    ///
    /// Handles are checked before the body drag region.
    pub fn hit_test(&self, point: Point) -> Option<PanelTarget> {
        let local = point - self.geometry.origin().to_vec2();
        let size = self.geometry.size();
        if let Some(handle) = Handle::hit_test(size, local) {
            return Some(PanelTarget::Handle(handle));
        }
        let region = self
            .drag_region
            .unwrap_or_else(|| Rect::from_origin_size(Point::ZERO, size));
        region.contains(local).then_some(PanelTarget::Body)
    }

    /// Handle hit regions in the panel's positioning context, in table order.
    pub fn handle_regions(&self) -> impl Iterator<Item = (&'static HandleSpec, Rect)> {
        let size = self.geometry.size();
        let offset = self.geometry.origin().to_vec2();
        HANDLES
            .iter()
            .map(move |spec| (spec, spec.placement(size) + offset))
    }

    /// Schedule a translate transform for the next frame.
    pub fn translate(&mut self, options: TransformOptions) -> FrameHandle {
        self.transforms.to(options)
    }

    /// Schedule a transform reset for the next frame.
    pub fn clear_transform(&mut self) -> FrameHandle {
        self.transforms.clear()
    }

    /// Cancel a scheduled transform command.
    pub fn cancel_frame(&mut self, handle: FrameHandle) -> bool {
        self.transforms.cancel(handle)
    }

    /// Run the pending transform command. Call from the host's frame callback.
    pub fn run_frame(&mut self) -> bool {
        self.transforms.run_frame(self.surface.as_mut())
    }

    /// The transform scheduler.
    pub fn transforms(&self) -> &TransformApplier {
        &self.transforms
    }

    fn write_geometry(&mut self, changed: GeometryFields) {
        if changed.is_empty() {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.set_geometry(&self.geometry, changed);
        }
    }
}
