// SPDX-License-Identifier: MPL-2.0
//! Decoding of the box-detection service's screenshot payload.
//!
//! The service reports suspicious regions of a scan's screenshot in the
//! image's natural coordinate space. Transport is the caller's business: this
//! module only interprets an HTTP status and response body.

mod image_url;

pub use image_url::{is_likely_image_url, IMAGE_EXTENSIONS};

use crate::domain::BoundingBox;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// HTTP status for a successful payload.
pub const STATUS_OK: u16 = 200;
/// HTTP status returned when the service has no boxes for the scan yet.
pub const STATUS_NO_CONTENT: u16 = 204;
/// HTTP status returned when the scan has no screenshot analysis at all.
pub const STATUS_NOT_FOUND: u16 = 404;

/// A region flagged by the detector, e.g. a credential form or fake download button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Short label rendered above the overlay.
    #[serde(default)]
    pub tag: String,
}

impl DetectedBox {
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.w, self.h)
    }
}

/// Body of a successful detection response. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxesResponse {
    #[serde(default)]
    pub boxes: Vec<DetectedBox>,
}

/// Interprets a detection response.
///
/// "No data" statuses and any other non-success status yield an empty list:
/// a missing analysis means there is nothing to overlay, not a failure. Only a
/// successful response with an undecodable body is reported as an error.
pub fn parse_boxes_response(status: u16, body: &[u8]) -> Result<Vec<DetectedBox>> {
    match status {
        STATUS_OK => {
            let response: BoxesResponse = serde_json::from_slice(body)?;
            log::debug!("Detection payload carries {} box(es)", response.boxes.len());
            Ok(response.boxes)
        }
        STATUS_NO_CONTENT | STATUS_NOT_FOUND => {
            log::debug!("No detection boxes available (HTTP {status})");
            Ok(Vec::new())
        }
        other => {
            log::warn!("Detection service answered HTTP {other}; showing no overlays");
            Ok(Vec::new())
        }
    }
}
