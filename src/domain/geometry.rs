// SPDX-License-Identifier: MPL-2.0
//! Geometry value objects shared by the overlay math.
//!
//! All values are CSS pixels. No unit conversion or validation happens here:
//! zero and negative dimensions are representable on purpose, since layout
//! measurements can briefly report them while an image is still loading.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Size
// =============================================================================

/// Pixel dimensions of an image asset, its rendered footprint, or its container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A size with both dimensions set to zero.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero, negative, or NaN.
    ///
    /// An empty size cannot host a visible overlay.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error returned when a `WIDTHxHEIGHT` string cannot be parsed into a [`Size`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSizeError {
    /// No `x`, `X` or `×` separator between the two dimensions.
    MissingSeparator,
    /// One of the dimensions is not a number.
    InvalidNumber(String),
}

impl fmt::Display for ParseSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSizeError::MissingSeparator => {
                write!(f, "expected WIDTHxHEIGHT (e.g. 1280x720)")
            }
            ParseSizeError::InvalidNumber(value) => write!(f, "invalid dimension: '{}'", value),
        }
    }
}

impl std::error::Error for ParseSizeError {}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .trim()
            .split_once(['x', 'X', '×'])
            .ok_or(ParseSizeError::MissingSeparator)?;

        let parse = |raw: &str| -> Result<f64, ParseSizeError> {
            let raw = raw.trim();
            raw.parse::<f64>()
                .map_err(|_| ParseSizeError::InvalidNumber(raw.to_string()))
        };

        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

// =============================================================================
// BoundingBox
// =============================================================================

/// Axis-aligned rectangle in the natural (unscaled) coordinate space of an image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

// =============================================================================
// OverlayRect
// =============================================================================

/// A rectangle in on-screen coordinates, relative to the container's top-left
/// corner. Fields map one-to-one onto absolute-position styling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OverlayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl OverlayRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Snaps the rectangle to whole pixels.
    ///
    /// Edges are rounded independently so that adjacent overlays sharing an
    /// edge stay adjacent after snapping.
    #[must_use]
    pub fn snapped(self) -> Self {
        let left = self.left.round();
        let top = self.top.round();
        Self {
            left,
            top,
            width: self.right().round() - left,
            height: self.bottom().round() - top,
        }
    }
}
