// SPDX-License-Identifier: MPL-2.0
//! Overlay placement for a rendered screenshot.
//!
//! This is the glue between live layout measurements and the pure mapping in
//! [`crate::domain::overlay`]. Overlays are only placed once the image has
//! loaded and both the image and its container have a visible size; before
//! that, placement yields nothing rather than NaN-filled rectangles.

use crate::detection::DetectedBox;
use crate::domain::{compute_overlay_transform, OverlayRect, OverlayTransform, Size};
use serde::Serialize;

/// Options applied when placing overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayOptions {
    /// Round placed rectangles to whole pixels.
    pub snap_to_pixels: bool,
}

/// A detection box positioned in container coordinates.
///
/// Serializes flat, as `{left, top, width, height, tag}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOverlay {
    #[serde(flatten)]
    pub rect: OverlayRect,
    pub tag: String,
}

/// The three sizes a screenshot overlay depends on, as last measured.
///
/// `natural` stays `None` until the image asset has been decoded. The display
/// and container sizes change independently on resize, so every call derives a
/// fresh transform from whatever is stored right now.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayMeasurements {
    pub natural: Option<Size>,
    pub display: Size,
    pub container: Size,
}

impl OverlayMeasurements {
    #[must_use]
    pub fn new(natural: Option<Size>, display: Size, container: Size) -> Self {
        Self {
            natural,
            display,
            container,
        }
    }

    /// Returns true once every size needed to place overlays is known and visible.
    #[must_use]
    pub fn is_ready(self) -> bool {
        self.natural.is_some_and(|natural| !natural.is_empty())
            && !self.display.is_empty()
            && !self.container.is_empty()
    }

    /// The current transform, or `None` while measurements are incomplete.
    #[must_use]
    pub fn transform(self) -> Option<OverlayTransform> {
        if !self.is_ready() {
            return None;
        }
        let natural = self.natural?;
        Some(compute_overlay_transform(
            natural,
            self.display,
            self.container,
        ))
    }

    /// Places every box with default options.
    #[must_use]
    pub fn place(self, boxes: &[DetectedBox]) -> Vec<PlacedOverlay> {
        self.place_with(boxes, &OverlayOptions::default())
    }

    /// Places every box, in input order. Returns an empty list while the
    /// measurements are not ready.
    #[must_use]
    pub fn place_with(self, boxes: &[DetectedBox], options: &OverlayOptions) -> Vec<PlacedOverlay> {
        if boxes.is_empty() {
            return Vec::new();
        }
        let Some(transform) = self.transform() else {
            log::debug!(
                "Skipping {} overlay(s): measurements not ready ({:?})",
                boxes.len(),
                self
            );
            return Vec::new();
        };
        log::trace!("Placing {} overlay(s) with {:?}", boxes.len(), transform);

        boxes
            .iter()
            .map(|detected| {
                let rect = transform.apply(&detected.bounding_box());
                PlacedOverlay {
                    rect: if options.snap_to_pixels {
                        rect.snapped()
                    } else {
                        rect
                    },
                    tag: detected.tag.clone(),
                }
            })
            .collect()
    }
}
