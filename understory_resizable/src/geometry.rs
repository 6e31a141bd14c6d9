// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry records: gesture snapshots, live panel geometry, bounds, and partial updates.

use kurbo::{Point, Rect, Size};

/// Bounding box of the panel captured when a resize gesture starts.
///
/// Stored verbatim from the surface; immutable for the rest of the gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectSnapshot {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
    /// Width at capture time.
    pub width: f64,
    /// Height at capture time.
    pub height: f64,
}

impl RectSnapshot {
    /// Capture a snapshot from a bounding box given by its edges.
    ///
    /// Width and height are derived from the edges. Hosts that know the box size
    /// directly should prefer [`RectSnapshot::from_origin_size`].
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            right: rect.x1,
            bottom: rect.y1,
            left: rect.x0,
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Capture a snapshot from a top-left corner and a size.
    ///
    /// `width` and `height` are stored as given rather than recomputed from the
    /// edges, so a snapshot of an unchanged box reproduces its size exactly.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
            left: origin.x,
            width: size.width,
            height: size.height,
        }
    }

    /// Capture a snapshot from the panel's live geometry.
    pub fn from_geometry(geometry: &PanelGeometry) -> Self {
        Self::from_origin_size(geometry.origin(), geometry.size())
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Live position and size of the panel in its positioning context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelGeometry {
    /// Distance of the top edge from the context origin.
    pub top: f64,
    /// Distance of the left edge from the context origin.
    pub left: f64,
    /// Panel width.
    pub width: f64,
    /// Panel height.
    pub height: f64,
}

impl PanelGeometry {
    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Panel size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The panel as a rectangle in its positioning context.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Merge the fields present in `update`, returning which fields were written.
    pub fn apply(&mut self, update: &PartialGeometry) -> GeometryFields {
        let mut fields = GeometryFields::empty();
        if let Some(top) = update.top {
            self.top = top;
            fields |= GeometryFields::TOP;
        }
        if let Some(left) = update.left {
            self.left = left;
            fields |= GeometryFields::LEFT;
        }
        if let Some(width) = update.width {
            self.width = width;
            fields |= GeometryFields::WIDTH;
        }
        if let Some(height) = update.height {
            self.height = height;
            fields |= GeometryFields::HEIGHT;
        }
        fields
    }
}

/// Minimum and maximum panel size. Fixed for the panel's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest allowed width.
    pub min_width: f64,
    /// Smallest allowed height.
    pub min_height: f64,
    /// Largest allowed width.
    pub max_width: f64,
    /// Largest allowed height.
    pub max_height: f64,
}

impl Bounds {
    /// Bounds of `0..=viewport` on both axes.
    pub fn from_viewport(viewport: Size) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            max_width: viewport.width,
            max_height: viewport.height,
        }
    }

    /// Returns `true` if `width` lies in `min_width..=max_width`.
    pub fn allows_width(&self, width: f64) -> bool {
        self.min_width <= width && width <= self.max_width
    }

    /// Returns `true` if `height` lies in `min_height..=max_height`.
    pub fn allows_height(&self, height: f64) -> bool {
        self.min_height <= height && height <= self.max_height
    }

    /// Returns `true` if both dimensions of `size` are allowed.
    pub fn contains(&self, size: Size) -> bool {
        self.allows_width(size.width) && self.allows_height(size.height)
    }
}

bitflags::bitflags! {
    /// Live geometry properties touched by an update.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GeometryFields: u8 {
        /// `top` changed.
        const TOP    = 0b0001;
        /// `left` changed.
        const LEFT   = 0b0010;
        /// `width` changed.
        const WIDTH  = 0b0100;
        /// `height` changed.
        const HEIGHT = 0b1000;
    }
}

/// A subset of [`PanelGeometry`] produced by an axis resolver or a body drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialGeometry {
    /// New top edge, if changed.
    pub top: Option<f64>,
    /// New left edge, if changed.
    pub left: Option<f64>,
    /// New width, if changed.
    pub width: Option<f64>,
    /// New height, if changed.
    pub height: Option<f64>,
}

impl PartialGeometry {
    /// Fields this update carries.
    pub fn fields(&self) -> GeometryFields {
        let mut fields = GeometryFields::empty();
        fields.set(GeometryFields::TOP, self.top.is_some());
        fields.set(GeometryFields::LEFT, self.left.is_some());
        fields.set(GeometryFields::WIDTH, self.width.is_some());
        fields.set(GeometryFields::HEIGHT, self.height.is_some());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_verbatim_box_model() {
        let snap = RectSnapshot::from_rect(Rect::new(100.0, 50.0, 300.5, 250.25));
        assert_eq!(snap.left, 100.0);
        assert_eq!(snap.top, 50.0);
        assert_eq!(snap.right, 300.5);
        assert_eq!(snap.bottom, 250.25);
        assert_eq!(snap.width, 200.5);
        assert_eq!(snap.height, 200.25);
    }

    #[test]
    fn geometry_snapshot_keeps_exact_size() {
        let geometry = PanelGeometry {
            top: 0.1,
            left: 1e9,
            width: 0.3,
            height: 0.7,
        };
        let snap = RectSnapshot::from_geometry(&geometry);
        assert_eq!(snap.width, 0.3);
        assert_eq!(snap.height, 0.7);
        assert_eq!(snap.left, 1e9);
    }

    #[test]
    fn origin_size_snapshot_keeps_fractional_size() {
        let snap = RectSnapshot::from_origin_size(Point::new(0.1, 1234.7), Size::new(0.2, 333.3));
        assert_eq!(snap.width, 0.2);
        assert_eq!(snap.height, 333.3);
        assert_eq!(snap.origin(), Point::new(0.1, 1234.7));
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut geometry = PanelGeometry {
            top: 10.0,
            left: 20.0,
            width: 30.0,
            height: 40.0,
        };
        let update = PartialGeometry {
            top: Some(5.0),
            height: Some(45.0),
            ..PartialGeometry::default()
        };

        let fields = geometry.apply(&update);

        assert_eq!(fields, GeometryFields::TOP | GeometryFields::HEIGHT);
        assert_eq!(fields, update.fields());
        assert_eq!(
            geometry,
            PanelGeometry {
                top: 5.0,
                left: 20.0,
                width: 30.0,
                height: 45.0,
            }
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds {
            min_width: 50.0,
            min_height: 60.0,
            max_width: 500.0,
            max_height: 600.0,
        };
        assert!(bounds.allows_width(50.0));
        assert!(bounds.allows_width(500.0));
        assert!(!bounds.allows_width(49.9));
        assert!(bounds.allows_height(600.0));
        assert!(!bounds.allows_height(600.1));
        assert!(bounds.contains(Size::new(50.0, 600.0)));
    }

    #[test]
    fn viewport_bounds_start_at_zero() {
        let bounds = Bounds::from_viewport(Size::new(1280.0, 720.0));
        assert_eq!(bounds.min_width, 0.0);
        assert_eq!(bounds.min_height, 0.0);
        assert_eq!(bounds.max_width, 1280.0);
        assert_eq!(bounds.max_height, 720.0);
    }
}
