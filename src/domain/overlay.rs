// SPDX-License-Identifier: MPL-2.0
//! Natural-to-display coordinate mapping for screenshot overlays.
//!
//! The caller measures the image after layout (object-contain, cover, stretch,
//! whatever was applied) and passes the actual rendered size. Scale factors are
//! taken per axis from those measurements rather than derived from a layout
//! rule, and the rendered image is assumed to be centered in its container.
//!
//! Nothing here validates input. A zero natural dimension yields an infinite or
//! NaN scale, and an image larger than its container yields a negative offset.
//! Both are returned as-is.

use super::geometry::{BoundingBox, OverlayRect, Size};

/// Linear mapping from natural image coordinates to container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl OverlayTransform {
    /// Unit scale, no offset. Boxes pass through unchanged.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Maps a box into container coordinates.
    #[must_use]
    pub fn apply(self, bbox: &BoundingBox) -> OverlayRect {
        apply_overlay_transform(bbox, &self)
    }

    /// Returns true when every component is a finite number.
    ///
    /// A transform computed from a zero natural size is not finite; it can
    /// still be applied, but its output is meaningless.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.offset_x.is_finite()
            && self.offset_y.is_finite()
    }
}

impl Default for OverlayTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the transform for an image of `natural` size, rendered at
/// `display` size and centered inside a `container`.
///
/// Must be recomputed whenever any of the three sizes changes.
#[must_use]
pub fn compute_overlay_transform(natural: Size, display: Size, container: Size) -> OverlayTransform {
    OverlayTransform {
        scale_x: display.width / natural.width,
        scale_y: display.height / natural.height,
        offset_x: (container.width - display.width) / 2.0,
        offset_y: (container.height - display.height) / 2.0,
    }
}

/// Projects a natural-space box into container space. No rounding is applied.
#[must_use]
pub fn apply_overlay_transform(bbox: &BoundingBox, transform: &OverlayTransform) -> OverlayRect {
    OverlayRect {
        left: transform.offset_x + bbox.x * transform.scale_x,
        top: transform.offset_y + bbox.y * transform.scale_y,
        width: bbox.w * transform.scale_x,
        height: bbox.h * transform.scale_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F64_EPSILON, SCENARIO_EPSILON};

    fn transform(scale_x: f64, scale_y: f64, offset_x: f64, offset_y: f64) -> OverlayTransform {
        OverlayTransform {
            scale_x,
            scale_y,
            offset_x,
            offset_y,
        }
    }

    #[test]
    fn centered_image_in_larger_container() {
        let result = compute_overlay_transform(
            Size::new(1280.0, 720.0),
            Size::new(640.0, 360.0),
            Size::new(700.0, 400.0),
        );
        assert_eq!(result, transform(0.5, 0.5, 30.0, 20.0));
    }

    #[test]
    fn image_exactly_fills_container() {
        let result = compute_overlay_transform(
            Size::new(800.0, 600.0),
            Size::new(400.0, 300.0),
            Size::new(400.0, 300.0),
        );
        assert_eq!(result, transform(0.5, 0.5, 0.0, 0.0));
    }

    #[test]
    fn zero_display_size_gives_zero_scale_and_half_container_offset() {
        let result = compute_overlay_transform(
            Size::new(1000.0, 1000.0),
            Size::ZERO,
            Size::new(500.0, 500.0),
        );
        assert_eq!(result, transform(0.0, 0.0, 250.0, 250.0));
    }

    #[test]
    fn overflowing_image_yields_negative_offset() {
        let result = compute_overlay_transform(
            Size::new(1000.0, 500.0),
            Size::new(1200.0, 600.0),
            Size::new(1000.0, 500.0),
        );
        assert_abs_diff_eq!(result.offset_x, -100.0);
        assert_abs_diff_eq!(result.offset_y, -50.0);
    }

    #[test]
    fn zero_natural_size_propagates_non_finite_scale() {
        let result = compute_overlay_transform(
            Size::ZERO,
            Size::new(640.0, 0.0),
            Size::new(700.0, 400.0),
        );
        assert!(result.scale_x.is_infinite());
        assert!(result.scale_y.is_nan());
        assert_abs_diff_eq!(result.offset_x, 30.0);
        assert!(!result.is_finite());
    }

    #[test]
    fn non_uniform_display_scales_axes_independently() {
        let result = compute_overlay_transform(
            Size::new(100.0, 100.0),
            Size::new(300.0, 50.0),
            Size::new(300.0, 50.0),
        );
        assert_abs_diff_eq!(result.scale_x, 3.0);
        assert_abs_diff_eq!(result.scale_y, 0.5);
    }

    #[test]
    fn compute_is_deterministic() {
        let natural = Size::new(1366.0, 768.0);
        let display = Size::new(733.3, 412.1);
        let container = Size::new(801.7, 519.9);
        let first = compute_overlay_transform(natural, display, container);
        let second = compute_overlay_transform(natural, display, container);
        assert_eq!(first.scale_x.to_bits(), second.scale_x.to_bits());
        assert_eq!(first.scale_y.to_bits(), second.scale_y.to_bits());
        assert_eq!(first.offset_x.to_bits(), second.offset_x.to_bits());
        assert_eq!(first.offset_y.to_bits(), second.offset_y.to_bits());
    }

    #[test]
    fn apply_scales_and_offsets_box() {
        let rect = apply_overlay_transform(
            &BoundingBox::new(100.0, 200.0, 150.0, 50.0),
            &transform(0.5, 0.5, 30.0, 20.0),
        );
        assert_eq!(rect, OverlayRect::new(80.0, 120.0, 75.0, 25.0));
    }

    #[test]
    fn apply_with_zero_offsets() {
        let rect = apply_overlay_transform(
            &BoundingBox::new(50.0, 100.0, 200.0, 100.0),
            &transform(2.0, 1.5, 0.0, 0.0),
        );
        assert_eq!(rect, OverlayRect::new(100.0, 150.0, 400.0, 150.0));
    }

    #[test]
    fn apply_handles_fractional_coordinates() {
        let rect = apply_overlay_transform(
            &BoundingBox::new(33.3, 66.7, 99.9, 77.5),
            &transform(0.75, 0.6, 12.5, 8.2),
        );
        assert_abs_diff_eq!(rect.left, 37.475, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(rect.top, 48.22, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(rect.width, 74.925, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(rect.height, 46.5, epsilon = SCENARIO_EPSILON);
    }

    #[test]
    fn apply_is_linear_in_box_extent() {
        let t = transform(0.37, 1.9, 4.0, -2.0);
        let single = t.apply(&BoundingBox::new(10.0, 10.0, 25.0, 40.0));
        let doubled = t.apply(&BoundingBox::new(10.0, 10.0, 50.0, 80.0));
        assert_relative_eq!(doubled.width, single.width * 2.0);
        assert_relative_eq!(doubled.height, single.height * 2.0);
        assert_abs_diff_eq!(doubled.left, single.left, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(doubled.top, single.top, epsilon = F64_EPSILON);
    }

    #[test]
    fn identity_leaves_box_unchanged() {
        let bbox = BoundingBox::new(12.0, 34.0, 56.0, 78.0);
        let rect = OverlayTransform::default().apply(&bbox);
        assert_eq!(rect, OverlayRect::new(12.0, 34.0, 56.0, 78.0));
        assert!(OverlayTransform::IDENTITY.is_finite());
    }

    #[test]
    fn method_and_free_function_agree() {
        let t = transform(0.25, 0.75, -3.5, 9.0);
        let bbox = BoundingBox::new(7.0, 11.0, 13.0, 17.0);
        assert_eq!(t.apply(&bbox), apply_overlay_transform(&bbox, &t));
    }
}
