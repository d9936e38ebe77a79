// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Uniform scale + translate transform with a pivot.
///
/// Applying the transform to a rectangle moves it by `translate` in the
/// rect's own (pre-scale) space and then scales it about `pivot`, so the
/// pivot is the fixed point under scaling. The default pivot is the origin,
/// in which case the transform reduces to `x' = (x + tx) * scale`.
///
/// The translate-then-scale ordering is load-bearing: it is what keeps a
/// pinch zoom anchored under the fingers instead of drifting.
///
/// Equality is exact field equality. Consumers rely on this to short-circuit
/// no-op updates and zero-length animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor. Must be positive.
    pub scale: f64,
    /// Translation applied before scaling, in pre-scale units.
    pub translate: Vec2,
    /// Fixed point of the scale.
    pub pivot: Point,
}

impl ViewTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
        pivot: Point::ZERO,
    };

    /// Creates a transform with the pivot at the origin.
    #[must_use]
    pub fn new(scale: f64, tx: f64, ty: f64) -> Self {
        Self {
            scale,
            translate: Vec2::new(tx, ty),
            pivot: Point::ZERO,
        }
    }

    /// Creates a transform that scales about `pivot`.
    #[must_use]
    pub fn with_pivot(scale: f64, tx: f64, ty: f64, pivot: Point) -> Self {
        Self {
            scale,
            translate: Vec2::new(tx, ty),
            pivot,
        }
    }

    /// Applies the transform to all four edges of `rect`.
    ///
    /// Translation happens first in rect-local space, then the scale is
    /// applied about the pivot point.
    #[must_use]
    pub fn apply(&self, rect: Rect) -> Rect {
        let Vec2 { x: tx, y: ty } = self.translate;
        let Point { x: px, y: py } = self.pivot;
        Rect::new(
            px + (rect.x0 + tx - px) * self.scale,
            py + (rect.y0 + ty - py) * self.scale,
            px + (rect.x1 + tx - px) * self.scale,
            py + (rect.y1 + ty - py) * self.scale,
        )
    }

    /// Solves for the origin-pivot transform mapping `from` onto `to`.
    ///
    /// This assumes `to` preserves `from`'s aspect ratio: the scale is
    /// derived from the width ratio alone, and the translation is solved
    /// from the scaled centers. Applying the result to `from` yields `to`.
    ///
    /// This single mechanism derives a new content transform from any
    /// desired target content rect, and keeps a dependent overlay transform
    /// mapped exactly onto the content rect.
    #[must_use]
    pub fn between(from: Rect, to: Rect) -> Self {
        let scale = to.width() / from.width().max(f64::MIN_POSITIVE);
        let divisor = scale.max(f64::MIN_POSITIVE);
        let translate = Vec2::new(
            to.center().x / divisor - from.center().x,
            to.center().y / divisor - from.center().y,
        );
        Self {
            scale,
            translate,
            pivot: Point::ZERO,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
