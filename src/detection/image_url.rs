// SPDX-License-Identifier: MPL-2.0
//! Heuristic for manually pasted screenshot links.

/// Raster extensions accepted as screenshot links.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Returns true if `url` looks like a direct link to a raster image.
///
/// Requires an `http` or `https` scheme, a host, and a path whose last segment
/// ends in one of [`IMAGE_EXTENSIONS`]. Query string and fragment are ignored.
#[must_use]
pub fn is_likely_image_url(url: &str) -> bool {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();

    let Some(rest) = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
    else {
        return false;
    };

    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let Some((host, path)) = rest.split_once('/') else {
        return false;
    };
    if host.is_empty() {
        return false;
    }

    let file_name = path.rsplit('/').next().unwrap_or_default();
    match file_name.rsplit_once('.') {
        Some((stem, extension)) => !stem.is_empty() && IMAGE_EXTENSIONS.contains(&extension),
        None => false,
    }
}
