// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel construction options and their validation.

use core::fmt;

use kurbo::{Rect, Size};

use crate::{Bounds, PanelGeometry};

/// Construction options for a [`Panel`](crate::Panel).
///
/// Unset maximum sizes default to the viewport size passed to
/// [`PanelConfig::resolve`]. The viewport is read once; later viewport changes do
/// not re-bound an existing panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelConfig {
    /// Initial left edge.
    pub x: f64,
    /// Initial top edge.
    pub y: f64,
    /// Initial width.
    pub initial_width: f64,
    /// Initial height.
    pub initial_height: f64,
    /// Smallest allowed width. Defaults to zero.
    pub min_width: Option<f64>,
    /// Smallest allowed height. Defaults to zero.
    pub min_height: Option<f64>,
    /// Largest allowed width. Defaults to the viewport width.
    pub max_width: Option<f64>,
    /// Largest allowed height. Defaults to the viewport height.
    pub max_height: Option<f64>,
    /// Travel distance before a handle drag starts resizing.
    pub handle_gap: Option<f64>,
    /// Whether the panel body can be dragged to reposition it.
    ///
    /// Resize handles stay operable either way.
    pub draggable: bool,
    /// Panel-local region that starts a body drag. `None` uses the whole panel.
    pub drag_region: Option<Rect>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            initial_width: 0.0,
            initial_height: 0.0,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            handle_gap: None,
            draggable: true,
            drag_region: None,
        }
    }
}

impl PanelConfig {
    /// A panel at `(x, y)` with the given initial size and default bounds.
    pub fn new(x: f64, y: f64, initial_width: f64, initial_height: f64) -> Self {
        Self {
            x,
            y,
            initial_width,
            initial_height,
            ..Self::default()
        }
    }

    /// Set the minimum size.
    #[must_use]
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    /// Set the maximum size.
    #[must_use]
    pub fn with_max_size(mut self, width: f64, height: f64) -> Self {
        self.max_width = Some(width);
        self.max_height = Some(height);
        self
    }

    /// Set the handle drag threshold.
    #[must_use]
    pub fn with_handle_gap(mut self, gap: f64) -> Self {
        self.handle_gap = Some(gap);
        self
    }

    /// Enable or disable body dragging.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Restrict body drags to a panel-local region, such as a title bar.
    #[must_use]
    pub fn with_drag_region(mut self, region: Rect) -> Self {
        self.drag_region = Some(region);
        self
    }

    /// Resolve defaults against `viewport` and validate.
    ///
    /// Returns the bounds and initial geometry the panel starts with.
    pub fn resolve(&self, viewport: Size) -> Result<(Bounds, PanelGeometry), ConfigError> {
        let bounds = Bounds {
            min_width: self.min_width.unwrap_or(0.0),
            min_height: self.min_height.unwrap_or(0.0),
            max_width: self.max_width.unwrap_or(viewport.width),
            max_height: self.max_height.unwrap_or(viewport.height),
        };
        let geometry = PanelGeometry {
            top: self.y,
            left: self.x,
            width: self.initial_width,
            height: self.initial_height,
        };

        let finite = [
            bounds.min_width,
            bounds.min_height,
            bounds.max_width,
            bounds.max_height,
            geometry.top,
            geometry.left,
            geometry.width,
            geometry.height,
        ];
        if !finite.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if bounds.min_width > bounds.max_width {
            return Err(ConfigError::InvertedWidth {
                min: bounds.min_width,
                max: bounds.max_width,
            });
        }
        if bounds.min_height > bounds.max_height {
            return Err(ConfigError::InvertedHeight {
                min: bounds.min_height,
                max: bounds.max_height,
            });
        }
        if let Some(gap) = self.handle_gap {
            if !gap.is_finite() || gap < 0.0 {
                return Err(ConfigError::InvalidGap { gap });
            }
        }
        if !bounds.contains(geometry.size()) {
            return Err(ConfigError::InitialOutOfBounds {
                width: geometry.width,
                height: geometry.height,
            });
        }
        Ok((bounds, geometry))
    }
}

/// Reasons a [`PanelConfig`] cannot produce a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A position, size, or bound is NaN or infinite.
    NonFinite,
    /// `min_width` exceeds `max_width`.
    InvertedWidth {
        /// Configured minimum.
        min: f64,
        /// Configured or defaulted maximum.
        max: f64,
    },
    /// `min_height` exceeds `max_height`.
    InvertedHeight {
        /// Configured minimum.
        min: f64,
        /// Configured or defaulted maximum.
        max: f64,
    },
    /// The handle gap is negative or not finite.
    InvalidGap {
        /// Configured gap.
        gap: f64,
    },
    /// The initial size violates the bounds.
    InitialOutOfBounds {
        /// Initial width.
        width: f64,
        /// Initial height.
        height: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "panel geometry and bounds must be finite"),
            Self::InvertedWidth { min, max } => {
                write!(f, "minimum width {min} exceeds maximum width {max}")
            }
            Self::InvertedHeight { min, max } => {
                write!(f, "minimum height {min} exceeds maximum height {max}")
            }
            Self::InvalidGap { gap } => write!(f, "handle gap {gap} must be a non-negative number"),
            Self::InitialOutOfBounds { width, height } => {
                write!(f, "initial size {width}x{height} is outside the panel bounds")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    #[test]
    fn defaults_come_from_viewport() {
        let (bounds, geometry) = PanelConfig::new(300.0, 400.0, 200.0, 100.0)
            .resolve(VIEWPORT)
            .unwrap();

        assert_eq!(bounds, Bounds::from_viewport(VIEWPORT));
        assert_eq!(
            geometry,
            PanelGeometry {
                top: 400.0,
                left: 300.0,
                width: 200.0,
                height: 100.0,
            }
        );
    }

    #[test]
    fn explicit_bounds_override_viewport() {
        let (bounds, _) = PanelConfig::new(0.0, 0.0, 200.0, 200.0)
            .with_min_size(200.0, 150.0)
            .with_max_size(500.0, 400.0)
            .resolve(VIEWPORT)
            .unwrap();

        assert_eq!(
            bounds,
            Bounds {
                min_width: 200.0,
                min_height: 150.0,
                max_width: 500.0,
                max_height: 400.0,
            }
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = PanelConfig::new(0.0, 0.0, 100.0, 100.0)
            .with_min_size(600.0, 0.0)
            .with_max_size(500.0, 500.0)
            .resolve(VIEWPORT)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvertedWidth {
                min: 600.0,
                max: 500.0,
            }
        );

        // A minimum above the defaulted viewport maximum is just as inconsistent.
        let err = PanelConfig {
            min_height: Some(800.0),
            ..PanelConfig::new(0.0, 0.0, 100.0, 900.0)
        }
        .resolve(VIEWPORT)
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedHeight { .. }));
    }

    #[test]
    fn initial_size_must_respect_bounds() {
        let err = PanelConfig::new(0.0, 0.0, 100.0, 100.0)
            .with_min_size(200.0, 200.0)
            .resolve(VIEWPORT)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InitialOutOfBounds {
                width: 100.0,
                height: 100.0,
            }
        );
    }

    #[test]
    fn gap_and_finiteness_are_checked() {
        let err = PanelConfig::new(0.0, 0.0, 10.0, 10.0)
            .with_handle_gap(-1.0)
            .resolve(VIEWPORT)
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidGap { gap: -1.0 });

        let err = PanelConfig::new(f64::NAN, 0.0, 10.0, 10.0)
            .resolve(VIEWPORT)
            .unwrap_err();
        assert_eq!(err, ConfigError::NonFinite);
    }

    #[test]
    fn errors_render_readably() {
        let err = ConfigError::InvertedWidth {
            min: 600.0,
            max: 500.0,
        };
        assert_eq!(
            err.to_string(),
            "minimum width 600 exceeds maximum width 500"
        );
    }
}
