// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-deferred translate transforms.
//!
//! [`TransformApplier`] queues a translate (or a reset) for the next paint frame.
//! It holds at most one pending command: a newer request replaces the older one and
//! invalidates its [`FrameHandle`]. The host calls [`TransformApplier::run_frame`]
//! from its frame callback; pending work can also be cancelled explicitly, which is
//! what [`Panel::detach_surface`](crate::Panel::detach_surface) does on teardown.
//!
//! ```
//! use understory_resizable::transform::{Length, TransformApplier, TransformOptions};
//!
//! let mut applier = TransformApplier::new();
//! let first = applier.to(TransformOptions::translate(Length::Px(10.0), Length::Px(0.0)));
//! let second = applier.clear();
//!
//! // Only the latest request is still scheduled.
//! assert!(!applier.cancel(first));
//! assert!(applier.cancel(second));
//! assert!(!applier.is_pending());
//! ```

use alloc::string::String;
use core::fmt;

use crate::Surface;

/// A CSS length for one translate component.
#[derive(Clone, Debug, PartialEq)]
pub enum Length {
    /// Pixels. Zero renders as `0`.
    Px(f64),
    /// Any CSS length, used verbatim. An empty string renders as `0`.
    Css(String),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) if *px == 0.0 => f.write_str("0"),
            Self::Px(px) => write!(f, "{px}px"),
            Self::Css(css) if css.is_empty() => f.write_str("0"),
            Self::Css(css) => f.write_str(css),
        }
    }
}

/// CSS transition timing written alongside a transform.
///
/// Zero durations and delays are treated as unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    /// `transition-property`.
    pub property: Option<String>,
    /// `transition-duration` in milliseconds.
    pub duration_ms: Option<u32>,
    /// `transition-delay` in milliseconds.
    pub delay_ms: Option<u32>,
    /// `transition-timing-function`.
    pub timing_function: Option<String>,
}

impl Transition {
    /// Duration, if set and non-zero.
    pub fn duration(&self) -> Option<u32> {
        self.duration_ms.filter(|ms| *ms != 0)
    }

    /// Delay, if set and non-zero.
    pub fn delay(&self) -> Option<u32> {
        self.delay_ms.filter(|ms| *ms != 0)
    }

    /// Property list, if set and non-empty.
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref().filter(|p| !p.is_empty())
    }

    /// Timing function, if set and non-empty.
    pub fn timing_function(&self) -> Option<&str> {
        self.timing_function.as_deref().filter(|t| !t.is_empty())
    }
}

/// Arguments to [`TransformApplier::to`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformOptions {
    /// Horizontal translation.
    pub x: Option<Length>,
    /// Vertical translation.
    pub y: Option<Length>,
    /// Depth translation.
    pub z: Option<Length>,
    /// Transition timing.
    pub transition: Transition,
}

impl TransformOptions {
    /// A 2D translation without transition.
    pub fn translate(x: Length, y: Length) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Set the transition duration.
    #[must_use]
    pub fn with_duration(mut self, ms: u32) -> Self {
        self.transition.duration_ms = Some(ms);
        self
    }

    /// Set the transition timing function.
    #[must_use]
    pub fn with_timing_function(mut self, timing: impl Into<String>) -> Self {
        self.transition.timing_function = Some(timing.into());
        self
    }

    /// The CSS `transform` value, e.g. `translate3d(10px, 0, 0)`.
    pub fn css_transform(&self) -> String {
        struct Component<'a>(Option<&'a Length>);
        impl fmt::Display for Component<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Some(len) => fmt::Display::fmt(len, f),
                    None => f.write_str("0"),
                }
            }
        }

        alloc::format!(
            "translate3d({}, {}, {})",
            Component(self.x.as_ref()),
            Component(self.y.as_ref()),
            Component(self.z.as_ref()),
        )
    }
}

/// Work queued for the next frame.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformCommand {
    /// Write a transform and its transition timing.
    Apply(TransformOptions),
    /// Reset the transform and transition timing.
    Clear,
}

/// Ticket for a scheduled [`TransformCommand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Single-slot, frame-deferred transform scheduler for one surface.
#[derive(Clone, Debug, Default)]
pub struct TransformApplier {
    next_ticket: u64,
    pending: Option<(FrameHandle, TransformCommand)>,
}

impl TransformApplier {
    /// Create an applier with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a translate for the next frame.
    pub fn to(&mut self, options: TransformOptions) -> FrameHandle {
        self.schedule(TransformCommand::Apply(options))
    }

    /// Schedule a transform reset for the next frame.
    pub fn clear(&mut self) -> FrameHandle {
        self.schedule(TransformCommand::Clear)
    }

    /// Returns `true` while a command waits for a frame.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The command waiting for the next frame.
    pub fn pending(&self) -> Option<&TransformCommand> {
        self.pending.as_ref().map(|(_, command)| command)
    }

    /// Cancel the command scheduled under `handle`.
    ///
    /// Returns `false` if it already ran, was replaced, or was cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.pending.as_ref().is_some_and(|(h, _)| *h == handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop whatever is pending, returning `true` if anything was.
    pub fn cancel_all(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Run the pending command against `surface`.
    ///
    /// With no surface attached the command is dropped. Returns `true` if a command
    /// was written to a surface.
    pub fn run_frame<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>) -> bool {
        let Some((_, command)) = self.pending.take() else {
            return false;
        };
        let Some(surface) = surface else {
            return false;
        };
        match &command {
            TransformCommand::Apply(options) => {
                surface.set_transform(&options.css_transform(), &options.transition);
            }
            TransformCommand::Clear => surface.clear_transform(),
        }
        true
    }

    fn schedule(&mut self, command: TransformCommand) -> FrameHandle {
        self.next_ticket += 1;
        let handle = FrameHandle(self.next_ticket);
        #[cfg(feature = "tracing")]
        if let Some((replaced, _)) = &self.pending {
            tracing::trace!(replaced = replaced.0, "pending transform replaced");
        }
        self.pending = Some((handle, command));
        handle
    }
}
