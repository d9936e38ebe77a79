// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::snapshot::GestureSnapshot;

/// Whether a policy consumed a gesture event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intercept {
    /// The policy handled the event; the controller's default response for
    /// it is skipped entirely.
    Handled,
    /// The controller applies its default response.
    Pass,
}

/// Interception hook consulted before the controller's default gesture
/// handling.
///
/// This is the sole extension point: returning [`Intercept::Handled`]
/// short-circuits before any controller state mutation for that event. The
/// unit type `()` is the no-op policy that passes everything through.
pub trait GesturePolicy {
    /// Called for each move event while a gesture is active.
    fn on_move(&mut self, snapshot: &GestureSnapshot) -> Intercept {
        let _ = snapshot;
        Intercept::Pass
    }

    /// Called when the gesture is released or terminated.
    fn on_release(&mut self, snapshot: &GestureSnapshot) -> Intercept {
        let _ = snapshot;
        Intercept::Pass
    }
}

impl GesturePolicy for () {}
