// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Cancellation token for an in-flight animation or fling.
///
/// Every controller state transition that cancels an asynchronous process
/// bumps an internal generation counter; tick calls carrying a ticket from
/// a previous generation are ignored. This guarantees no tick can act after
/// cancellation without any listener bookkeeping on the host side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriveTicket(pub(crate) u64);

/// Request for the host's inertial fling collaborator.
///
/// The collaborator integrates from a cumulative delta of zero with the
/// given initial velocity, keeps the cumulative screen-pixel delta within
/// `[min, max]` per axis, and feeds increments back through
/// [`Controller::fling_tick`](crate::Controller::fling_tick) together with a
/// finished flag on the last tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingRequest {
    /// Token the collaborator must pass back with every tick.
    pub ticket: DriveTicket,
    /// Initial velocity in pixels per second.
    pub velocity: Vec2,
    /// Lower bound on the cumulative delta per axis (≤ 0).
    pub min: Vec2,
    /// Upper bound on the cumulative delta per axis (≥ 0).
    pub max: Vec2,
}

/// Request for the host's timing collaborator.
///
/// The collaborator runs an ease-in-out interpolation over the given
/// duration and reports progress in `[0, 1]` through
/// [`Controller::animation_tick`](crate::Controller::animation_tick),
/// finishing with a progress of exactly `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRequest {
    /// Token the collaborator must pass back with every tick.
    pub ticket: DriveTicket,
    /// Animation duration in milliseconds.
    pub duration_ms: u64,
}

/// Effects produced by a controller entry point.
///
/// The controller is headless: instead of invoking callbacks it reports
/// what happened, and the host reacts — re-rendering on `transformed`,
/// starting its fling/timing collaborators on the requests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Update {
    /// The content transform (and overlay state) changed.
    pub transformed: bool,
    /// A gesture that may transform the view has begun.
    pub transform_started: bool,
    /// The release was a confirmed single tap.
    pub single_tap_confirmed: bool,
    /// Hand this to the fling collaborator.
    pub fling: Option<FlingRequest>,
    /// Hand this to the timing collaborator.
    pub animation: Option<AnimationRequest>,
}
