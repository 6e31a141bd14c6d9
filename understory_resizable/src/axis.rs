// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge axis resolvers.
//!
//! Each resolver is a pure function of the gesture snapshot, the cumulative pointer
//! delta, and the bounds. A resolver either accepts and returns the fields it owns,
//! or rejects the whole update. Rejected updates are never clamped to the nearest
//! bound; the previously applied value stays in place.

use kurbo::Vec2;

use crate::{Bounds, PartialGeometry, RectSnapshot};

/// One edge of the panel that a handle can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Moves the top edge: writes `top` and `height`.
    Top,
    /// Moves the right edge: writes `width`.
    Right,
    /// Moves the bottom edge: writes `height`.
    Bottom,
    /// Moves the left edge: writes `left` and `width`.
    Left,
}

/// Result of running one [`Axis`] resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// The candidate is within bounds.
    Accepted(PartialGeometry),
    /// The candidate dimension fell outside the bounds and was dropped.
    Rejected {
        /// The width or height that would have resulted.
        candidate: f64,
    },
}

impl Resolution {
    /// Returns the accepted update, if any.
    pub fn accepted(&self) -> Option<&PartialGeometry> {
        match self {
            Self::Accepted(update) => Some(update),
            Self::Rejected { .. } => None,
        }
    }

    /// Returns `true` if the resolver rejected the update.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl Axis {
    /// Returns `true` for the axes that change the panel's height.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Compute the candidate geometry for this edge.
    pub fn resolve(self, snapshot: &RectSnapshot, delta: Vec2, bounds: &Bounds) -> Resolution {
        match self {
            Self::Top => {
                let height = snapshot.height - delta.y;
                if !bounds.allows_height(height) {
                    return Resolution::Rejected { candidate: height };
                }
                Resolution::Accepted(PartialGeometry {
                    top: Some(snapshot.top + delta.y),
                    height: Some(height),
                    ..PartialGeometry::default()
                })
            }
            Self::Right => {
                let width = snapshot.width + delta.x;
                if !bounds.allows_width(width) {
                    return Resolution::Rejected { candidate: width };
                }
                Resolution::Accepted(PartialGeometry {
                    width: Some(width),
                    ..PartialGeometry::default()
                })
            }
            Self::Bottom => {
                let height = snapshot.height + delta.y;
                if !bounds.allows_height(height) {
                    return Resolution::Rejected { candidate: height };
                }
                Resolution::Accepted(PartialGeometry {
                    height: Some(height),
                    ..PartialGeometry::default()
                })
            }
            Self::Left => {
                let width = snapshot.width - delta.x;
                if !bounds.allows_width(width) {
                    return Resolution::Rejected { candidate: width };
                }
                Resolution::Accepted(PartialGeometry {
                    left: Some(snapshot.left + delta.x),
                    width: Some(width),
                    ..PartialGeometry::default()
                })
            }
        }
    }
}
