// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host element a panel draws into.

use alloc::string::String;
use kurbo::Vec2;

use crate::transform::Transition;
use crate::{GeometryFields, PanelGeometry, RectSnapshot};

/// Live presentation of a panel.
///
/// A [`Panel`](crate::Panel) owns exactly one surface at a time, attached with
/// [`Panel::attach_surface`](crate::Panel::attach_surface). Code that needs the
/// surface for other purposes borrows it through
/// [`Panel::surface`](crate::Panel::surface) rather than holding its own handle.
pub trait Surface {
    /// Current on-screen box model, in the same coordinate space as the panel's
    /// `top`/`left`.
    ///
    /// Report `width` and `height` as the host measures them rather than deriving
    /// them from the edges; resize gestures start from these values.
    fn bounding_box(&self) -> RectSnapshot;

    /// Write the live geometry. `changed` names the fields that differ from the
    /// previous write; a freshly attached surface receives [`GeometryFields::all`].
    fn set_geometry(&mut self, geometry: &PanelGeometry, changed: GeometryFields);

    /// Write a CSS transform and its transition timing.
    fn set_transform(&mut self, transform: &str, transition: &Transition);

    /// Reset the transform and transition timing.
    fn clear_transform(&mut self);
}

/// A headless surface that keeps the last written inline style.
///
/// Its bounding box is the written geometry offset by the last translation
/// requested through [`InlineStyle::set_translation`]; transforms written as CSS
/// text are stored but not interpreted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    /// Last written geometry.
    pub geometry: PanelGeometry,
    /// CSS `transform`, empty when cleared.
    pub transform: String,
    /// Transition timing written with the transform.
    pub transition: Transition,
    /// `will-change` is set to `transform` once a transform has been written.
    pub will_change_transform: bool,
    /// Visual offset applied on top of the geometry.
    pub translation: Vec2,
    /// Number of geometry writes received.
    pub geometry_writes: usize,
}

impl InlineStyle {
    /// Set the visual offset reported by [`Surface::bounding_box`].
    pub fn set_translation(&mut self, offset: Vec2) {
        self.translation = offset;
    }
}

impl Surface for InlineStyle {
    fn bounding_box(&self) -> RectSnapshot {
        RectSnapshot::from_origin_size(
            self.geometry.origin() + self.translation,
            self.geometry.size(),
        )
    }

    fn set_geometry(&mut self, geometry: &PanelGeometry, changed: GeometryFields) {
        if changed.contains(GeometryFields::TOP) {
            self.geometry.top = geometry.top;
        }
        if changed.contains(GeometryFields::LEFT) {
            self.geometry.left = geometry.left;
        }
        if changed.contains(GeometryFields::WIDTH) {
            self.geometry.width = geometry.width;
        }
        if changed.contains(GeometryFields::HEIGHT) {
            self.geometry.height = geometry.height;
        }
        self.geometry_writes += 1;
    }

    fn set_transform(&mut self, transform: &str, transition: &Transition) {
        self.will_change_transform = true;
        self.transform.clear();
        self.transform.push_str(transform);
        // Unset timings leave the previous value in place.
        if let Some(ms) = transition.duration() {
            self.transition.duration_ms = Some(ms);
        }
        if let Some(ms) = transition.delay() {
            self.transition.delay_ms = Some(ms);
        }
        if let Some(timing) = transition.timing_function() {
            self.transition.timing_function = Some(timing.into());
        }
        if let Some(property) = transition.property() {
            self.transition.property = Some(property.into());
        }
    }

    fn clear_transform(&mut self) {
        self.transform.clear();
        self.transition = Transition::default();
    }
}
