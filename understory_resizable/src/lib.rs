// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_resizable --heading-base-level=0

//! Understory Resizable: headless drag-to-move and eight-handle resize for floating panels.
//!
//! This crate owns the geometry of a rectangular panel that the user can reposition by
//! dragging its body and resize from any of eight edge/corner handles, while keeping
//! its size within configured minimum and maximum bounds.
//!
//! It does not render anything. Hosts present the panel on a [`Surface`] (a DOM
//! element, a retained widget, a box in an Understory box tree…), feed pointer events
//! into a [`PanelInput`], and draw the handle regions reported by
//! [`Panel::handle_regions`] with the cursors from [`HandleSpec::cursor`].
//!
//! ## Resize model
//!
//! - When a resize gesture starts, the panel captures a [`RectSnapshot`] of the
//!   surface's bounding box.
//! - Every movement carries the cumulative pointer delta since the gesture started.
//!   The handle's [`Axis`] resolvers compute a candidate from the snapshot and that
//!   delta, so a gesture never accumulates error from earlier events or gestures.
//! - Each resolver accepts or rejects on its own. A rejected axis keeps its last
//!   accepted value; it is never clamped to the bound. Corner handles run two
//!   resolvers with the same snapshot and delta, so one axis can keep growing while
//!   the other is pinned.
//!
//! ## API overview
//!
//! - [`PanelConfig`]: construction options; [`PanelConfig::resolve`] validates them
//!   into [`Bounds`] and the initial [`PanelGeometry`].
//! - [`Panel`]: the controller. [`Panel::begin_resize`] / [`Panel::resize`] /
//!   [`Panel::end_resize`], [`Panel::begin_drag`] / [`Panel::drag`] /
//!   [`Panel::end_drag`], and [`Panel::cancel_gesture`].
//! - [`Handle`] / [`HANDLES`]: the data table of handles, placements, cursors, and
//!   resolvers.
//! - [`PanelInput`]: binds [`understory_event_state::drag::DragSource`]s to the body
//!   and handles, including the optional handle gap.
//! - [`transform::TransformApplier`]: frame-deferred translate transforms with
//!   cancellable [`transform::FrameHandle`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_resizable::{Handle, InlineStyle, Panel, PanelConfig};
//!
//! let config = PanelConfig::new(100.0, 100.0, 200.0, 200.0)
//!     .with_min_size(50.0, 50.0)
//!     .with_max_size(500.0, 500.0);
//! let mut panel = Panel::new(&config, Size::new(1280.0, 720.0)).unwrap();
//! panel.attach_surface(InlineStyle::default());
//!
//! panel.begin_resize(Handle::BottomRight);
//! // Width grows; the height would drop to -200 and is rejected outright.
//! panel.resize(Vec2::new(50.0, -400.0));
//! panel.end_resize();
//!
//! assert_eq!(panel.geometry().width, 250.0);
//! assert_eq!(panel.geometry().height, 200.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `tracing`: emits `tracing` events for gesture start/end and rejected axes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod geometry;
mod handle;
mod input;
mod panel;
mod surface;
pub mod transform;

pub use axis::{Axis, Resolution};
pub use config::{ConfigError, PanelConfig};
pub use geometry::{Bounds, GeometryFields, PanelGeometry, PartialGeometry, RectSnapshot};
pub use handle::{CursorIcon, HANDLE_THICKNESS, HANDLES, Handle, HandleSpec};
pub use input::{PanelInput, PanelTarget};
pub use panel::{Interaction, Panel, ResizeOutcome};
pub use surface::{InlineStyle, Surface};
