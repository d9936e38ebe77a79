// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::constants::{DEFAULT_ANIMATION_MS, DEFAULT_MAX_OVER_SCROLL, DEFAULT_MAX_SCALE};

/// Immutable controller configuration, passed at construction.
///
/// Every gesture-handling branch in the controller switches on these fields;
/// they never change over the controller's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Master switch. When `false`, gesture input is ignored entirely;
    /// programmatic mutators still work.
    pub enable_transform: bool,
    /// Allow pinch and double-tap scaling.
    pub enable_scale: bool,
    /// Allow panning and release flings.
    pub enable_translate: bool,
    /// Hard-clamp pan deltas so content never moves past a viewport edge.
    /// Takes precedence over resistance.
    pub enable_limits: bool,
    /// Dampen pan deltas that push content further past an overscrolled
    /// edge. Only consulted when limits are disabled.
    pub enable_resistance: bool,
    /// Extra distance a fling may carry content past the viewport edge.
    pub max_over_scroll_distance: f64,
    /// Upper bound on the content scale; scales beyond it bounce back.
    pub max_scale: f64,
    /// Content scale at construction.
    pub initial_scale: f64,
    /// Width over height of the content. When set, the content rect is the
    /// largest rect of this aspect centered in the viewport; when `None`,
    /// the content rect is the viewport itself.
    pub content_aspect_ratio: Option<f64>,
    /// Native pixel size of the high-resolution overlay layer. `None`
    /// disables the overlay: no overlay transform is maintained and the
    /// overlay coordinate conversions become identities.
    pub overlay_size: Option<Size>,
    /// Duration handed to the timing collaborator for zoom/bounce
    /// animations.
    pub animation_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_transform: true,
            enable_scale: true,
            enable_translate: true,
            enable_limits: false,
            enable_resistance: true,
            max_over_scroll_distance: DEFAULT_MAX_OVER_SCROLL,
            max_scale: DEFAULT_MAX_SCALE,
            initial_scale: 1.0,
            content_aspect_ratio: None,
            overlay_size: None,
            animation_duration_ms: DEFAULT_ANIMATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_are_interactive() {
        let config = Config::default();
        assert!(config.enable_transform);
        assert!(config.enable_scale);
        assert!(config.enable_translate);
        assert!(!config.enable_limits);
        assert!(config.enable_resistance);
        assert_eq!(config.initial_scale, 1.0);
        assert!(config.content_aspect_ratio.is_none());
        assert!(config.overlay_size.is_none());
    }
}
