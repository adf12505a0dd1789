//! Settings for the headless layout host.
//!
//! Values can be loaded from environment variables or constructed
//! programmatically.

use crate::ViewportMetrics;
use std::env;

/// Initial viewport size for a [`HeadlessDom`](crate::HeadlessDom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostSettings {
    /// Viewport width in pixels
    pub viewport_width: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            viewport_width: 1024.0,
            viewport_height: 768.0,
        }
    }
}

impl HostSettings {
    /// Load settings from environment variables.
    ///
    /// Reads `STICK_TO_VIEWPORT_WIDTH` and `STICK_TO_VIEWPORT_HEIGHT`; missing
    /// or unparsable values fall back to 1024x768.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: f64| {
            lookup(key)
                .and_then(|val| val.trim().parse::<f64>().ok())
                .filter(|px| px.is_finite() && *px >= 0.0)
                .unwrap_or(fallback)
        };
        Self {
            viewport_width: read("STICK_TO_VIEWPORT_WIDTH", defaults.viewport_width),
            viewport_height: read("STICK_TO_VIEWPORT_HEIGHT", defaults.viewport_height),
        }
    }

    pub const fn viewport(&self) -> ViewportMetrics {
        ViewportMetrics::uniform(self.viewport_width, self.viewport_height)
    }
}
