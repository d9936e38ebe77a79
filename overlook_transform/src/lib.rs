// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Transform: scale/translate transform algebra over rectangles.
//!
//! This crate provides the small geometric core that the rest of Overlook is
//! built on:
//! - [`ViewTransform`]: a uniform scale + translate transform with an
//!   optional pivot (the fixed point under scaling).
//! - [`ViewTransform::between`]: the fit-rect solver, recovering the unique
//!   origin-pivot transform that maps one rectangle onto another.
//! - [`fit_center_rect`]: aspect-preserving letterbox fitting.
//! - [`aligned_rect`]: per-axis centering of undersized content.
//! - [`available_translate_space`]: signed per-edge pan headroom of a
//!   content rect inside a viewport.
//!
//! It does **not** interpret gestures or own any animation state; see the
//! `overlook_gesture` crate for the controller layered on top of these
//! primitives.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use overlook_transform::ViewTransform;
//!
//! let content = Rect::new(0.0, 0.0, 300.0, 400.0);
//!
//! // Zoom in 2x about the origin, shifted right by 10 content units.
//! let t = ViewTransform::new(2.0, 10.0, 0.0);
//! let zoomed = t.apply(content);
//! assert_eq!(zoomed, Rect::new(20.0, 0.0, 620.0, 800.0));
//!
//! // The solver recovers the same transform from the rect pair.
//! let solved = ViewTransform::between(content, zoomed);
//! assert!((solved.scale - t.scale).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod transform;

pub use fit::{TranslateSpace, aligned_rect, available_translate_space, fit_center_rect};
pub use transform::ViewTransform;
