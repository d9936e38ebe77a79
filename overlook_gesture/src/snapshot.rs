// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Per-event gesture state delivered by the host's gesture recognizer.
///
/// Positions are in the host's global (page) coordinate space; the
/// controller subtracts its measured page offset where it needs
/// viewport-local pivots. The controller only reads these fields and keeps
/// no reference to the snapshot after the call returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSnapshot {
    /// Current gesture centroid.
    pub move_pos: Point,
    /// Centroid at the previous move event.
    pub previous_move_pos: Point,
    /// Current distance between the two pinch touches, if two are down.
    pub pinch: Option<f64>,
    /// Pinch distance at the previous move event.
    pub previous_pinch: Option<f64>,
    /// Gesture velocity at release, in pixels per second.
    pub velocity: Vec2,
    /// Position where the gesture started.
    pub start_pos: Point,
    /// Whether the recognizer confirmed this release as a double tap.
    pub double_tap_up: bool,
}

impl Default for GestureSnapshot {
    fn default() -> Self {
        Self {
            move_pos: Point::ZERO,
            previous_move_pos: Point::ZERO,
            pinch: None,
            previous_pinch: None,
            velocity: Vec2::ZERO,
            start_pos: Point::ZERO,
            double_tap_up: false,
        }
    }
}
