// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared gesture tuning constants.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling the pixel thresholds by the device's DPI factor; the
//! defaults here work well for typical desktop/mobile displays.

/// Tap slop in logical pixels.
///
/// A release whose total travel from the press position stays under this
/// distance (with no pinch in between) is reported as a confirmed single
/// tap. 8.0 matches common platform touch-slop conventions and is large
/// enough to absorb finger jitter while staying responsive.
pub const TAP_SLOP: f64 = 8.0;

/// Ratio at which a near-axis-aligned drag snaps to a single axis.
///
/// When one delta component exceeds the other by more than this factor, the
/// smaller component is zeroed, preventing unintended diagonal drift.
pub const AXIS_LOCK_RATIO: f64 = 2.0;

/// Divisor applied to pan deltas that push content further past an edge it
/// has already overscrolled.
pub const RESISTANCE_DIVISOR: f64 = 3.0;

/// Default extra distance, in pixels, a fling may carry content past the
/// viewport edge.
pub const DEFAULT_MAX_OVER_SCROLL: f64 = 100.0;

/// Default upper bound on the content scale factor.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Default duration for double-tap zoom and bounce animations.
pub const DEFAULT_ANIMATION_MS: u64 = 250;
