// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Signed per-edge pan headroom of a content rect inside a viewport.
///
/// Each field is the distance in pixels the corresponding content edge may
/// still travel before meeting the matching viewport edge. A negative value
/// means the content has already been panned past that edge.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TranslateSpace {
    /// Headroom before the content's left edge meets the viewport's left edge.
    pub left: f64,
    /// Headroom before the content's top edge meets the viewport's top edge.
    pub top: f64,
    /// Headroom before the content's right edge meets the viewport's right edge.
    pub right: f64,
    /// Headroom before the content's bottom edge meets the viewport's bottom edge.
    pub bottom: f64,
}

/// Returns the largest rect with the given aspect ratio centered in `container`.
///
/// `aspect_ratio` is width over height. When the container is wider than the
/// requested aspect the result is height-limited (pillarboxed); when it is
/// taller, width-limited (letterboxed). A degenerate container or
/// non-positive aspect ratio returns `container` unchanged.
#[must_use]
pub fn fit_center_rect(aspect_ratio: f64, container: Rect) -> Rect {
    let cw = container.width();
    let ch = container.height();
    if aspect_ratio <= 0.0 || cw <= 0.0 || ch <= 0.0 {
        return container;
    }
    let (w, h) = if cw / ch > aspect_ratio {
        (aspect_ratio * ch, ch)
    } else {
        (cw, cw / aspect_ratio)
    };
    let center = container.center();
    Rect::new(
        center.x - w * 0.5,
        center.y - h * 0.5,
        center.x + w * 0.5,
        center.y + h * 0.5,
    )
}

/// Centers `rect` inside `viewport` on every axis where it does not exceed it.
///
/// Axes on which `rect` is larger than `viewport` are left unchanged. This
/// feeds bounce-back animation targets: undersized (or exactly fitting)
/// content snaps to the middle while oversized content keeps its pan.
#[must_use]
pub fn aligned_rect(rect: Rect, viewport: Rect) -> Rect {
    let (x0, x1) = if rect.width() <= viewport.width() {
        let half = rect.width() * 0.5;
        let cx = viewport.center().x;
        (cx - half, cx + half)
    } else {
        (rect.x0, rect.x1)
    };
    let (y0, y1) = if rect.height() <= viewport.height() {
        let half = rect.height() * 0.5;
        let cy = viewport.center().y;
        (cy - half, cy + half)
    } else {
        (rect.y0, rect.y1)
    };
    Rect::new(x0, y0, x1, y1)
}

/// Computes the signed pan headroom of `content` inside `viewport`.
#[must_use]
pub fn available_translate_space(content: Rect, viewport: Rect) -> TranslateSpace {
    TranslateSpace {
        left: viewport.x0 - content.x0,
        top: viewport.y0 - content.y0,
        right: content.x1 - viewport.x1,
        bottom: content.y1 - viewport.y1,
    }
}
