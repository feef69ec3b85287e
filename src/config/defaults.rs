// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Placed overlays keep fractional coordinates unless snapping is requested.
pub const DEFAULT_SNAP_TO_PIXELS: bool = false;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `env_logger` filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
