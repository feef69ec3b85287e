// SPDX-License-Identifier: MPL-2.0
//! `phishintel_overlay` places AI-detected screenshot regions over the
//! screenshot as it is actually rendered.
//!
//! The detection service reports boxes in the screenshot's natural pixel
//! space. Once the screenshot has been laid out (scaled to fit and centered in
//! its container), those boxes are mapped into container coordinates so they
//! can be drawn as absolutely positioned overlays.
//!
//! # Example
//!
//! ```
//! use phishintel_overlay::domain::{
//!     apply_overlay_transform, compute_overlay_transform, BoundingBox, OverlayRect, Size,
//! };
//!
//! let transform = compute_overlay_transform(
//!     Size::new(1280.0, 720.0),
//!     Size::new(640.0, 360.0),
//!     Size::new(700.0, 400.0),
//! );
//! let rect = apply_overlay_transform(&BoundingBox::new(100.0, 200.0, 150.0, 50.0), &transform);
//! assert_eq!(rect, OverlayRect::new(80.0, 120.0, 75.0, 25.0));
//! ```

pub mod config;
pub mod detection;
pub mod domain;
pub mod error;
pub mod overlay;

#[cfg(test)]
mod test_utils;
