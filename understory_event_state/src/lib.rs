// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: small state machines that turn raw pointer events into gestures.
//!
//! The crate does not route events or hit test; callers decide which target a pointer
//! event belongs to and then feed it into the matching state helper.
//!
//! - [`drag::DragSource`]: captures one pointer per gesture and reports cumulative
//!   movement deltas since the gesture started, with an optional minimum travel
//!   distance ("gap") before anything is reported.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::{DragOptions, DragSource, DragState};
//!
//! let mut source = DragSource::new(DragOptions::default());
//! let mut seen = Vec::new();
//! let mut on_drag = |state: &DragState| seen.push(state.delta);
//!
//! source.pointer_down(None, Point::new(10.0, 10.0), &mut on_drag);
//! source.pointer_move(None, Point::new(14.0, 13.0), &mut on_drag);
//! source.pointer_move(None, Point::new(20.0, 10.0), &mut on_drag);
//! source.pointer_up(None, &mut on_drag);
//!
//! // Deltas are measured from the gesture start, not from the previous event.
//! assert_eq!(seen, vec![Vec2::new(4.0, 3.0), Vec2::new(10.0, 0.0)]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
