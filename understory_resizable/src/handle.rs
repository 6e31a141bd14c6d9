// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The eight resize handles as one data table.
//!
//! Every handle is described by a [`HandleSpec`]: where its hit region sits relative
//! to the panel, which cursor it shows, and which [`Axis`] resolvers it drives. Edges
//! drive one resolver; corners drive two, always in the table's order.

use kurbo::{Point, Rect, Size};

use crate::Axis;

/// Visual thickness of an edge handle. Corner handles are squares of twice this size.
pub const HANDLE_THICKNESS: f64 = 8.0;

const T: f64 = HANDLE_THICKNESS;
const HALF_T: f64 = HANDLE_THICKNESS / 2.0;

/// One of the eight resize handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Right edge.
    Right,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom edge.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Left edge.
    Left,
    /// Top-left corner.
    TopLeft,
}

/// Cursor shown while hovering or dragging a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorIcon {
    /// Vertical double arrow.
    NsResize,
    /// Horizontal double arrow.
    EwResize,
    /// Diagonal double arrow, north-east to south-west.
    NeswResize,
    /// Diagonal double arrow, north-west to south-east.
    NwseResize,
}

impl CursorIcon {
    /// CSS `cursor` keyword.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::NsResize => "ns-resize",
            Self::EwResize => "ew-resize",
            Self::NeswResize => "nesw-resize",
            Self::NwseResize => "nwse-resize",
        }
    }
}

/// Position of a hit region along one panel dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Anchor {
    /// Offset from the leading edge.
    Start(f64),
    /// Offset back from the trailing edge.
    End(f64),
}

impl Anchor {
    fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Start(offset) => offset,
            Self::End(offset) => extent - offset,
        }
    }
}

/// Length of a hit region along one panel dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Span {
    /// Fixed length.
    Fixed(f64),
    /// Panel extent minus an inset.
    Inset(f64),
}

impl Span {
    fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Fixed(len) => len,
            Self::Inset(inset) => (extent - inset).max(0.0),
        }
    }
}

/// Table entry describing one handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleSpec {
    /// The handle described.
    pub handle: Handle,
    /// Cursor affordance.
    pub cursor: CursorIcon,
    /// Resolvers run for each movement, in order.
    pub axes: &'static [Axis],
    x: Anchor,
    y: Anchor,
    width: Span,
    height: Span,
}

impl HandleSpec {
    /// Hit region in panel-local coordinates for a panel of `size`.
    ///
    /// Regions straddle the border: edges are centred on it and corners are
    /// centred on the corner point.
    pub fn placement(&self, size: Size) -> Rect {
        let origin = Point::new(self.x.resolve(size.width), self.y.resolve(size.height));
        Rect::from_origin_size(
            origin,
            Size::new(self.width.resolve(size.width), self.height.resolve(size.height)),
        )
    }

    /// Returns `true` for the four corner handles.
    pub fn is_corner(&self) -> bool {
        self.axes.len() == 2
    }
}

/// All handles, clockwise from the top edge.
pub static HANDLES: [HandleSpec; 8] = [
    HandleSpec {
        handle: Handle::Top,
        cursor: CursorIcon::NsResize,
        axes: &[Axis::Top],
        x: Anchor::Start(HALF_T),
        y: Anchor::Start(-HALF_T),
        width: Span::Inset(T),
        height: Span::Fixed(T),
    },
    HandleSpec {
        handle: Handle::TopRight,
        cursor: CursorIcon::NeswResize,
        axes: &[Axis::Top, Axis::Right],
        x: Anchor::End(T),
        y: Anchor::Start(-T),
        width: Span::Fixed(2.0 * T),
        height: Span::Fixed(2.0 * T),
    },
    HandleSpec {
        handle: Handle::Right,
        cursor: CursorIcon::EwResize,
        axes: &[Axis::Right],
        x: Anchor::End(HALF_T),
        y: Anchor::Start(HALF_T),
        width: Span::Fixed(T),
        height: Span::Inset(T),
    },
    HandleSpec {
        handle: Handle::BottomRight,
        cursor: CursorIcon::NwseResize,
        axes: &[Axis::Right, Axis::Bottom],
        x: Anchor::End(T),
        y: Anchor::End(T),
        width: Span::Fixed(2.0 * T),
        height: Span::Fixed(2.0 * T),
    },
    HandleSpec {
        handle: Handle::Bottom,
        cursor: CursorIcon::NsResize,
        axes: &[Axis::Bottom],
        x: Anchor::Start(HALF_T),
        y: Anchor::End(HALF_T),
        width: Span::Inset(T),
        height: Span::Fixed(T),
    },
    HandleSpec {
        handle: Handle::BottomLeft,
        cursor: CursorIcon::NeswResize,
        axes: &[Axis::Bottom, Axis::Left],
        x: Anchor::Start(-T),
        y: Anchor::End(T),
        width: Span::Fixed(2.0 * T),
        height: Span::Fixed(2.0 * T),
    },
    HandleSpec {
        handle: Handle::Left,
        cursor: CursorIcon::EwResize,
        axes: &[Axis::Left],
        x: Anchor::Start(-HALF_T),
        y: Anchor::Start(HALF_T),
        width: Span::Fixed(T),
        height: Span::Inset(T),
    },
    HandleSpec {
        handle: Handle::TopLeft,
        cursor: CursorIcon::NwseResize,
        axes: &[Axis::Top, Axis::Left],
        x: Anchor::Start(-T),
        y: Anchor::Start(-T),
        width: Span::Fixed(2.0 * T),
        height: Span::Fixed(2.0 * T),
    },
];

impl Handle {
    /// Every handle, in table order.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// This handle's table entry.
    pub fn spec(self) -> &'static HandleSpec {
        &HANDLES[self as usize]
    }

    /// Resolvers driven by this handle, in order.
    pub fn axes(self) -> &'static [Axis] {
        self.spec().axes
    }

    /// Cursor affordance.
    pub fn cursor(self) -> CursorIcon {
        self.spec().cursor
    }

    /// Find the handle under `point`, given in panel-local coordinates.
    ///
    /// Corner regions overlap the ends of the edge regions and take priority.
    pub fn hit_test(size: Size, point: Point) -> Option<Self> {
        let corners = HANDLES.iter().filter(|spec| spec.is_corner());
        let edges = HANDLES.iter().filter(|spec| !spec.is_corner());
        corners
            .chain(edges)
            .find(|spec| spec.placement(size).contains(point))
            .map(|spec| spec.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(200.0, 100.0);

    #[test]
    fn table_is_indexed_by_handle() {
        for handle in Handle::ALL {
            assert_eq!(handle.spec().handle, handle);
        }
    }

    #[test]
    fn edges_drive_one_axis_and_corners_two() {
        assert_eq!(Handle::Top.axes(), &[Axis::Top]);
        assert_eq!(Handle::Right.axes(), &[Axis::Right]);
        assert_eq!(Handle::Bottom.axes(), &[Axis::Bottom]);
        assert_eq!(Handle::Left.axes(), &[Axis::Left]);
        assert_eq!(Handle::TopRight.axes(), &[Axis::Top, Axis::Right]);
        assert_eq!(Handle::BottomRight.axes(), &[Axis::Right, Axis::Bottom]);
        assert_eq!(Handle::BottomLeft.axes(), &[Axis::Bottom, Axis::Left]);
        assert_eq!(Handle::TopLeft.axes(), &[Axis::Top, Axis::Left]);
    }

    #[test]
    fn corners_combine_one_vertical_and_one_horizontal_axis() {
        for spec in HANDLES.iter().filter(|spec| spec.is_corner()) {
            let vertical = spec.axes.iter().filter(|a| a.is_vertical()).count();
            assert_eq!(vertical, 1, "{:?}", spec.handle);
        }
    }

    #[test]
    fn cursors_match_direction() {
        assert_eq!(Handle::Top.cursor().as_css(), "ns-resize");
        assert_eq!(Handle::Left.cursor().as_css(), "ew-resize");
        assert_eq!(Handle::TopRight.cursor(), Handle::BottomLeft.cursor());
        assert_eq!(Handle::TopLeft.cursor().as_css(), "nwse-resize");
        assert_eq!(Handle::BottomRight.cursor(), CursorIcon::NwseResize);
    }

    #[test]
    fn edge_placements_straddle_the_border() {
        assert_eq!(
            Handle::Top.spec().placement(SIZE),
            Rect::new(4.0, -4.0, 196.0, 4.0)
        );
        assert_eq!(
            Handle::Right.spec().placement(SIZE),
            Rect::new(196.0, 4.0, 204.0, 96.0)
        );
        assert_eq!(
            Handle::Bottom.spec().placement(SIZE),
            Rect::new(4.0, 96.0, 196.0, 104.0)
        );
        assert_eq!(
            Handle::Left.spec().placement(SIZE),
            Rect::new(-4.0, 4.0, 4.0, 96.0)
        );
    }

    #[test]
    fn corner_placements_are_centred_squares() {
        let tl = Handle::TopLeft.spec().placement(SIZE);
        assert_eq!(tl, Rect::new(-8.0, -8.0, 8.0, 8.0));
        assert_eq!(tl.center(), Point::ZERO);

        let br = Handle::BottomRight.spec().placement(SIZE);
        assert_eq!(br.center(), Point::new(200.0, 100.0));
        assert_eq!(br.width(), 2.0 * HANDLE_THICKNESS);
        assert_eq!(
            Handle::TopRight.spec().placement(SIZE).center(),
            Point::new(200.0, 0.0)
        );
        assert_eq!(
            Handle::BottomLeft.spec().placement(SIZE).center(),
            Point::new(0.0, 100.0)
        );
    }

    #[test]
    fn hit_test_prefers_corners() {
        // Inside both the top edge strip and the top-right square.
        assert_eq!(
            Handle::hit_test(SIZE, Point::new(194.0, 0.0)),
            Some(Handle::TopRight)
        );
        assert_eq!(
            Handle::hit_test(SIZE, Point::new(100.0, 0.0)),
            Some(Handle::Top)
        );
        assert_eq!(
            Handle::hit_test(SIZE, Point::new(-3.0, 50.0)),
            Some(Handle::Left)
        );
        assert_eq!(
            Handle::hit_test(SIZE, Point::new(201.0, 101.0)),
            Some(Handle::BottomRight)
        );
    }

    #[test]
    fn hit_test_misses_interior_and_far_outside() {
        assert_eq!(Handle::hit_test(SIZE, Point::new(100.0, 50.0)), None);
        assert_eq!(Handle::hit_test(SIZE, Point::new(-20.0, 50.0)), None);
    }

    #[test]
    fn tiny_panels_do_not_produce_negative_edge_regions() {
        let rect = Handle::Top.spec().placement(Size::new(4.0, 4.0));
        assert_eq!(rect.width(), 0.0);
    }
}
