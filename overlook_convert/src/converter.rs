// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Converter between normalized, screen, and overlay/drawing coordinates.
///
/// Built from the current viewport rect, the transformed content rect (the
/// content rect after the live transform), and the overlay's native pixel
/// size. All conversions are pure; construct a fresh converter whenever the
/// underlying transform changes.
#[derive(Clone, Copy, Debug)]
pub struct SpaceConverter {
    viewport: Rect,
    transformed: Rect,
    overlay: Option<Size>,
}

impl SpaceConverter {
    /// Creates a converter for the given rects and optional overlay size.
    ///
    /// An overlay with a non-positive width or height is treated as absent.
    #[must_use]
    pub fn new(viewport: Rect, transformed: Rect, overlay: Option<Size>) -> Self {
        let overlay = overlay.filter(|s| s.width > 0.0 && s.height > 0.0);
        Self {
            viewport,
            transformed,
            overlay,
        }
    }

    /// Native overlay size used by this converter, if any.
    #[must_use]
    pub fn overlay_size(&self) -> Option<Size> {
        self.overlay
    }

    /// Uniform drawing-pixel to screen-pixel ratio.
    ///
    /// This is the transformed content rect width over the overlay's native
    /// width. Without an overlay, drawing space is normalized space and the
    /// ratio degrades to the transformed rect width.
    #[must_use]
    pub fn drawing_scale(&self) -> f64 {
        match self.overlay {
            Some(size) => self.transformed.width() / size.width,
            None => self.transformed.width(),
        }
    }

    /// Converts a normalized coordinate to a drawing point.
    ///
    /// Identity when no overlay is configured.
    #[must_use]
    pub fn coordinate_to_drawing_point(&self, coord: Point) -> Point {
        match self.overlay {
            Some(size) => Point::new(coord.x * size.width, coord.y * size.height),
            None => coord,
        }
    }

    /// Converts a drawing point to a normalized coordinate.
    ///
    /// Identity when no overlay is configured.
    #[must_use]
    pub fn drawing_point_to_coordinate(&self, point: Point) -> Point {
        match self.overlay {
            Some(size) => Point::new(point.x / size.width, point.y / size.height),
            None => point,
        }
    }

    /// Converts a drawing point to a screen point.
    ///
    /// The transformed content rect's min corner is the drawing-space origin
    /// on screen; lengths scale by [`SpaceConverter::drawing_scale`]. This is
    /// the conversion used to place a screen-space control exactly over an
    /// overlay-space position.
    #[must_use]
    pub fn drawing_point_to_screen_point(&self, point: Point) -> Point {
        let ds = self.drawing_scale();
        Point::new(
            self.transformed.x0 + point.x * ds,
            self.transformed.y0 + point.y * ds,
        )
    }

    /// Converts a screen point to a drawing point.
    ///
    /// Inverse of [`SpaceConverter::drawing_point_to_screen_point`]; used to
    /// hit-test a touch against overlay content.
    #[must_use]
    pub fn screen_point_to_drawing_point(&self, point: Point) -> Point {
        let ds = self.drawing_scale().max(f64::MIN_POSITIVE);
        Point::new(
            (point.x - self.transformed.x0) / ds,
            (point.y - self.transformed.y0) / ds,
        )
    }

    /// Converts a normalized coordinate to a screen point.
    #[must_use]
    pub fn coordinate_to_screen_point(&self, coord: Point) -> Point {
        self.drawing_point_to_screen_point(self.coordinate_to_drawing_point(coord))
    }

    /// Converts a screen point to a normalized coordinate.
    ///
    /// Values outside `[0, 1]` address content beyond the visible clip.
    #[must_use]
    pub fn screen_point_to_coordinate(&self, point: Point) -> Point {
        let w = self.transformed.width().max(f64::MIN_POSITIVE);
        let h = self.transformed.height().max(f64::MIN_POSITIVE);
        Point::new(
            (point.x - self.transformed.x0) / w,
            (point.y - self.transformed.y0) / h,
        )
    }

    /// Converts a drawing-space length to a screen-space length.
    ///
    /// Not the inverse of [`SpaceConverter::screen_scalar_to_drawing_scalar`]:
    /// this direction scales by the larger transformed-rect extent. Callers
    /// that need an exact round trip should compose the point conversions
    /// instead.
    #[must_use]
    pub fn drawing_scalar_to_screen_scalar(&self, scalar: f64) -> f64 {
        scalar * self.transformed.width().max(self.transformed.height())
    }

    /// Converts a screen-space length to a drawing-space length.
    #[must_use]
    pub fn screen_scalar_to_drawing_scalar(&self, scalar: f64) -> f64 {
        scalar / self.drawing_scale().max(f64::MIN_POSITIVE)
    }

    /// Visible content region in normalized coordinates.
    ///
    /// Each edge is clamped to `[0, 1]`; the rect shrinks toward the zoom
    /// window as the content grows past the viewport.
    #[must_use]
    pub fn clip_rect_coordinates(&self) -> Rect {
        let tr = self.transformed;
        let w = tr.width().max(f64::MIN_POSITIVE);
        let h = tr.height().max(f64::MIN_POSITIVE);
        Rect::new(
            ((self.viewport.x0 - tr.x0) / w).clamp(0.0, 1.0),
            ((self.viewport.y0 - tr.y0) / h).clamp(0.0, 1.0),
            ((self.viewport.x1 - tr.x0) / w).clamp(0.0, 1.0),
            ((self.viewport.y1 - tr.y0) / h).clamp(0.0, 1.0),
        )
    }

    /// Visible content region in drawing pixels.
    #[must_use]
    pub fn clip_rect(&self) -> Rect {
        let clip = self.clip_rect_coordinates();
        match self.overlay {
            Some(size) => Rect::new(
                clip.x0 * size.width,
                clip.y0 * size.height,
                clip.x1 * size.width,
                clip.y1 * size.height,
            ),
            None => clip,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::SpaceConverter;

    fn assert_point_near(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "x: {a:?} vs {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "y: {a:?} vs {b:?}");
    }

    fn converter_2x() -> SpaceConverter {
        // 300x450 viewport, content zoomed 2x and centered.
        SpaceConverter::new(
            Rect::new(0.0, 0.0, 300.0, 450.0),
            Rect::new(-150.0, -225.0, 450.0, 675.0),
            Some(Size::new(2000.0, 3000.0)),
        )
    }

    #[test]
    fn drawing_scale_is_width_ratio() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 450.0);
        let convert = SpaceConverter::new(viewport, viewport, Some(Size::new(2000.0, 3000.0)));
        assert!((convert.drawing_scale() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn drawing_point_maps_to_screen_offset_from_rect_origin() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 450.0);
        let transformed = Rect::new(20.0, -10.0, 320.0, 440.0);
        let convert = SpaceConverter::new(viewport, transformed, Some(Size::new(2000.0, 3000.0)));
        let screen = convert.drawing_point_to_screen_point(Point::new(1000.0, 1500.0));
        assert_point_near(screen, Point::new(20.0 + 150.0, -10.0 + 225.0));
    }

    #[test]
    fn screen_and_drawing_points_roundtrip() {
        let convert = converter_2x();
        let screen = Point::new(123.0, 371.5);
        let drawing = convert.screen_point_to_drawing_point(screen);
        assert_point_near(convert.drawing_point_to_screen_point(drawing), screen);
    }

    #[test]
    fn coordinate_screen_roundtrip_inside_transformed_rect() {
        let convert = converter_2x();
        for coord in [
            Point::new(0.5, 0.5),
            Point::new(0.1, 0.9),
            Point::new(0.33, 0.67),
        ] {
            let screen = convert.coordinate_to_screen_point(coord);
            assert_point_near(convert.screen_point_to_coordinate(screen), coord);
        }
    }

    #[test]
    fn screen_point_to_coordinate_is_transform_inverse() {
        let convert = converter_2x();
        // The transformed rect's min corner is coordinate (0, 0), its max
        // corner is (1, 1), and the viewport origin sits a quarter in.
        assert_point_near(
            convert.screen_point_to_coordinate(Point::new(-150.0, -225.0)),
            Point::new(0.0, 0.0),
        );
        assert_point_near(
            convert.screen_point_to_coordinate(Point::new(0.0, 0.0)),
            Point::new(0.25, 0.25),
        );
        assert_point_near(
            convert.screen_point_to_coordinate(Point::new(450.0, 675.0)),
            Point::new(1.0, 1.0),
        );
    }

    #[test]
    fn no_overlay_uses_normalized_drawing_space() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 450.0);
        let convert = SpaceConverter::new(viewport, viewport, None);
        let coord = Point::new(0.25, 0.75);
        assert_eq!(convert.coordinate_to_drawing_point(coord), coord);
        assert_eq!(convert.drawing_point_to_coordinate(coord), coord);
        // coordinate → screen still lands on the transformed rect.
        let screen = convert.coordinate_to_screen_point(Point::new(0.5, 0.0));
        assert!((screen.x - 150.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_overlay_size_is_ignored() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 450.0);
        let convert = SpaceConverter::new(viewport, viewport, Some(Size::new(0.0, 3000.0)));
        assert!(convert.overlay_size().is_none());
    }

    #[test]
    fn scalar_conversions_use_their_own_factors() {
        let convert = converter_2x();
        // Screen-bound lengths scale by the larger transformed extent (900),
        // drawing-bound lengths divide by the drawing scale (600 / 2000).
        assert!((convert.drawing_scalar_to_screen_scalar(1.0) - 900.0).abs() < 1e-9);
        assert!((convert.screen_scalar_to_drawing_scalar(0.3) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn clip_rect_coordinates_window_under_zoom() {
        let convert = converter_2x();
        // 2x zoom centered: the middle half of the content is visible.
        let clip = convert.clip_rect_coordinates();
        assert!((clip.x0 - 0.25).abs() < 1e-9);
        assert!((clip.y0 - 0.25).abs() < 1e-9);
        assert!((clip.x1 - 0.75).abs() < 1e-9);
        assert!((clip.y1 - 0.75).abs() < 1e-9);
    }

    #[test]
    fn clip_rect_coordinates_clamps_to_unit_range() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 450.0);
        // Content smaller than the viewport: everything is visible.
        let transformed = Rect::new(75.0, 100.0, 225.0, 325.0);
        let convert = SpaceConverter::new(viewport, transformed, None);
        assert_eq!(convert.clip_rect_coordinates(), Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn clip_rect_rescales_to_overlay_pixels() {
        let convert = converter_2x();
        let clip = convert.clip_rect();
        assert!((clip.x0 - 500.0).abs() < 1e-6);
        assert!((clip.y0 - 750.0).abs() < 1e-6);
        assert!((clip.x1 - 1500.0).abs() < 1e-6);
        assert!((clip.y1 - 2250.0).abs() < 1e-6);
    }
}
