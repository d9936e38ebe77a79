// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-driven pan/zoom control for a 2D content viewport.
//!
//! This crate turns raw gesture state into a live content transform. A
//! [`Controller`] owns a [`ViewTransform`](overlook_transform::ViewTransform)
//! over an aspect-fitted content rect, and updates it in response to pan,
//! pinch, double-tap, and fling input, keeping a configured overlay layer's
//! transform in lock-step.
//!
//! The controller is headless and host-agnostic. It never draws, never
//! blocks, and owns no timers: anything asynchronous is delegated back to
//! the host through request values. A release that should fling returns a
//! [`FlingRequest`]; a double-tap zoom or bounce-back returns an
//! [`AnimationRequest`]; the host runs its own physics/timing and feeds
//! progress back through [`Controller::fling_tick`] and
//! [`Controller::animation_tick`]. Each request carries a [`DriveTicket`]
//! so ticks from a cancelled process are ignored without any unsubscription
//! protocol.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use overlook_gesture::{Config, Controller, GestureSnapshot};
//!
//! let mut controller = Controller::new(Config {
//!     content_aspect_ratio: Some(0.75),
//!     ..Config::default()
//! });
//! controller.set_viewport_size(Size::new(300.0, 400.0));
//!
//! controller.gesture_grant(&GestureSnapshot::default());
//! let update = controller.gesture_move(
//!     &GestureSnapshot {
//!         move_pos: Point::new(150.0, 200.0),
//!         previous_move_pos: Point::new(150.0, 200.0),
//!         pinch: Some(200.0),
//!         previous_pinch: Some(100.0),
//!         ..GestureSnapshot::default()
//!     },
//!     &mut (),
//! );
//! assert!(update.transformed);
//! assert_eq!(controller.transform().scale, 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
pub mod constants;
mod controller;
mod drive;
mod policy;
mod snapshot;

pub use config::Config;
pub use controller::{CenterAt, Controller, ControllerDebugInfo, OverlayState, Phase, TransformPatch};
pub use drive::{AnimationRequest, DriveTicket, FlingRequest, Update};
pub use policy::{GesturePolicy, Intercept};
pub use snapshot::GestureSnapshot;
