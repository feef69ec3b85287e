// SPDX-License-Identifier: MPL-2.0
//! Domain layer - overlay geometry with no runtime dependencies.
//!
//! This module contains pure value objects and the coordinate mapping used to
//! place detection boxes over a rendered screenshot. Apart from a `serde`
//! derive on [`OverlayRect`](geometry::OverlayRect) for reporting, it only
//! depends on `std`, so it can be reused from any rendering environment.
//!
//! # Modules
//!
//! - [`geometry`]: Value objects ([`Size`](geometry::Size),
//!   [`BoundingBox`](geometry::BoundingBox), [`OverlayRect`](geometry::OverlayRect))
//! - [`overlay`]: The mapping itself ([`OverlayTransform`](overlay::OverlayTransform),
//!   [`compute_overlay_transform`](overlay::compute_overlay_transform),
//!   [`apply_overlay_transform`](overlay::apply_overlay_transform))

pub mod geometry;
pub mod overlay;

pub use geometry::{BoundingBox, OverlayRect, ParseSizeError, Size};
pub use overlay::{apply_overlay_transform, compute_overlay_transform, OverlayTransform};
