// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Catalog**: Where the project list and its assets are read from
//! - **Slider**: Auto-advance interval and swipe threshold
//! - **Resume**: The downloadable CV asset
//! - **Images**: Remote image cache sizing

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Default location of the project list, relative to the working directory.
pub const DEFAULT_CATALOG_SOURCE: &str = "assets/projects.json";

/// Default directory that relative image paths are resolved against.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Default auto-advance interval for image sliders (milliseconds).
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 3000;

/// Minimum auto-advance interval (milliseconds).
pub const MIN_SLIDE_INTERVAL_MS: u64 = 500;

/// Maximum auto-advance interval (milliseconds).
pub const MAX_SLIDE_INTERVAL_MS: u64 = 60_000;

/// Horizontal displacement a swipe must exceed to change slides (pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold (pixels).
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold (pixels).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Polling period of the tick subscription driving slider timers (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Resume Defaults
// ==========================================================================

/// CV asset, relative to the assets location.
pub const DEFAULT_RESUME_FILE: &str = "aydin_cv.pdf";

/// File name suggested in the save dialog.
pub const DEFAULT_RESUME_FILE_NAME: &str = "aydin_cv.pdf";

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Maximum number of remote images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLIDE_INTERVAL_MS > 0);
    assert!(MIN_SLIDE_INTERVAL_MS > TICK_INTERVAL_MS);
    assert!(MAX_SLIDE_INTERVAL_MS >= MIN_SLIDE_INTERVAL_MS);
    assert!(DEFAULT_SLIDE_INTERVAL_MS >= MIN_SLIDE_INTERVAL_MS);
    assert!(DEFAULT_SLIDE_INTERVAL_MS <= MAX_SLIDE_INTERVAL_MS);

    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(DEFAULT_IMAGE_CACHE_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDE_INTERVAL_MS, 3000);
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
    }

    #[test]
    fn catalog_source_lives_in_assets_dir() {
        assert!(DEFAULT_CATALOG_SOURCE.starts_with(DEFAULT_ASSETS_DIR));
    }
}
