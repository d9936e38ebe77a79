// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Convert: conversion between the three Overlook coordinate spaces.
//!
//! A zoomable view deals with three spaces at once:
//! - **Normalized coordinates**: positions on the content in `[0, 1]` units
//!   (nominally; values outside the range address content beyond the clip).
//! - **Screen points**: on-screen pixels in viewport-local coordinates.
//! - **Drawing points**: pixels of an optional high-resolution overlay layer
//!   with its own native size, independent of the content.
//!
//! [`SpaceConverter`] provides the six point conversions between these
//! spaces, the two scalar (length) conversions, and the visible clip rect in
//! normalized or drawing units. It is a stateless value constructed from the
//! current viewport rect, the transformed content rect, and the overlay's
//! native size; a live controller hands out a fresh converter per query.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use overlook_convert::SpaceConverter;
//!
//! let viewport = Rect::new(0.0, 0.0, 300.0, 450.0);
//! let convert = SpaceConverter::new(viewport, viewport, Some(Size::new(2000.0, 3000.0)));
//!
//! assert!((convert.drawing_scale() - 0.15).abs() < 1e-12);
//! let screen = convert.drawing_point_to_screen_point(Point::new(1000.0, 1500.0));
//! assert!((screen.x - 150.0).abs() < 1e-9);
//! assert!((screen.y - 225.0).abs() < 1e-9);
//! ```
//!
//! When no overlay is configured, drawing space coincides with normalized
//! space (an implicit 1×1 overlay): the coordinate↔drawing conversions are
//! the identity and the remaining functions stay meaningful.
//!
//! This crate is `no_std`.

#![no_std]

mod converter;

pub use converter::SpaceConverter;
