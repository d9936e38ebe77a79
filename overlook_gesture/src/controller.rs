// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use overlook_convert::SpaceConverter;
use overlook_transform::{
    TranslateSpace, ViewTransform, aligned_rect, available_translate_space, fit_center_rect,
};

use crate::config::Config;
use crate::constants::{AXIS_LOCK_RATIO, RESISTANCE_DIVISOR, TAP_SLOP};
use crate::drive::{AnimationRequest, DriveTicket, FlingRequest, Update};
use crate::policy::{GesturePolicy, Intercept};
use crate::snapshot::GestureSnapshot;

/// Interaction phase of the controller.
///
/// At most one of `Gesturing`, `Animating`, and `Flinging` is active at a
/// time; entering any of them cancels the others synchronously.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// No gesture or asynchronous process is active.
    #[default]
    Idle,
    /// A touch gesture is being tracked.
    Gesturing,
    /// A timed interpolation toward a target rect is running.
    Animating,
    /// Inertial fling deltas are being applied.
    Flinging,
}

/// Overlay layer state, derived from the content transform.
///
/// Recomputed on every transform or layout change so the overlay can never
/// render a frame behind the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayState {
    /// Transform mapping the overlay's native rect exactly onto the
    /// transformed content rect.
    pub transform: ViewTransform,
    /// Overlay-pixel to screen-pixel ratio (transformed content width over
    /// overlay native width).
    pub drawing_scale: f64,
}

/// Partial transform update for the programmatic mutators.
///
/// `None` fields keep their current value. A non-positive or non-finite
/// scale is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformPatch {
    /// New scale factor, if any.
    pub scale: Option<f64>,
    /// New horizontal translation, if any.
    pub translate_x: Option<f64>,
    /// New vertical translation, if any.
    pub translate_y: Option<f64>,
}

/// Programmatic pan/zoom request: place a normalized content coordinate at
/// the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterAt {
    /// Content position in normalized `[0, 1]` coordinates.
    pub coordinate: Point,
    /// Target scale; `None` keeps the current scale.
    pub scale: Option<f64>,
    /// Animate over this duration instead of jumping.
    pub animation_duration_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    from: Rect,
    to: Rect,
}

/// Gesture-driven viewport transform controller.
///
/// Owns the live content transform and the derived overlay state, and turns
/// gesture snapshots, layout updates, and collaborator ticks into new
/// transforms. All entry points return an [`Update`] describing what the
/// host should do next; the controller itself never blocks, allocates, or
/// calls out.
///
/// The controller is single-threaded and event-driven: the host delivers
/// gesture, layout, animation, and fling callbacks serially. Re-entry by a
/// new gesture at any tick is tolerated — the in-flight process is cancelled
/// synchronously via its [`DriveTicket`] before new input is accepted.
#[derive(Clone, Debug)]
pub struct Controller {
    config: Config,
    viewport_size: Size,
    page_offset: Point,
    transform: ViewTransform,
    overlay: Option<OverlayState>,
    phase: Phase,
    generation: u64,
    animation: Option<Animation>,
    pinched: bool,
}

impl Controller {
    /// Creates a controller with the given configuration.
    ///
    /// The viewport starts at zero size; feed layout through
    /// [`Controller::set_viewport_size`] before interpreting gestures. A
    /// non-positive `initial_scale` or degenerate `overlay_size` is
    /// sanitized away.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut config = config;
        config.overlay_size = config
            .overlay_size
            .filter(|s| s.width > 0.0 && s.height > 0.0);
        let initial = config.initial_scale;
        let scale = if initial.is_finite() && initial > 0.0 {
            initial
        } else {
            1.0
        };
        let mut controller = Self {
            config,
            viewport_size: Size::ZERO,
            page_offset: Point::ZERO,
            transform: ViewTransform::new(scale, 0.0, 0.0),
            overlay: None,
            phase: Phase::Idle,
            generation: 0,
            animation: None,
            pinched: false,
        };
        controller.recompute_overlay();
        controller
    }

    /// Returns the configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Updates the viewport size from the host's layout callback.
    ///
    /// Returns `true` when the size changed; the overlay state is
    /// recomputed in that case.
    pub fn set_viewport_size(&mut self, size: Size) -> bool {
        if self.viewport_size == size {
            return false;
        }
        self.viewport_size = size;
        self.recompute_overlay();
        true
    }

    /// Updates the viewport's absolute on-screen offset.
    ///
    /// Measurement resolves asynchronously and may arrive after gesture
    /// events have already been delivered; until then, pivot-dependent
    /// gestures use the last known offset, which may be stale on the very
    /// first gesture after mount.
    pub fn set_page_offset(&mut self, offset: Point) {
        self.page_offset = offset;
    }

    /// Current viewport rect in viewport-local coordinates.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.viewport_size)
    }

    /// Content rect before the live transform: the viewport rect,
    /// aspect-fitted when a content aspect ratio is configured.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        let viewport = self.viewport_rect();
        match self.config.content_aspect_ratio {
            Some(aspect) => fit_center_rect(aspect, viewport),
            None => viewport,
        }
    }

    /// Content rect after the live transform — what is actually visible.
    #[must_use]
    pub fn transformed_content_rect(&self) -> Rect {
        self.transform.apply(self.content_rect())
    }

    /// Current content transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Current overlay state, if an overlay is configured.
    #[must_use]
    pub fn overlay(&self) -> Option<OverlayState> {
        self.overlay
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a timed animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Signed pan headroom of the transformed content inside the viewport.
    #[must_use]
    pub fn available_translate_space(&self) -> TranslateSpace {
        available_translate_space(self.transformed_content_rect(), self.viewport_rect())
    }

    /// Coordinate-space converter over the current state.
    #[must_use]
    pub fn converter(&self) -> SpaceConverter {
        SpaceConverter::new(
            self.viewport_rect(),
            self.transformed_content_rect(),
            self.config.overlay_size,
        )
    }

    /// Visible content region in normalized coordinates, clamped to `[0, 1]`.
    #[must_use]
    pub fn clip_rect_coordinates(&self) -> Rect {
        self.converter().clip_rect_coordinates()
    }

    /// Visible content region in overlay pixels.
    #[must_use]
    pub fn clip_rect(&self) -> Rect {
        self.converter().clip_rect()
    }

    /// Applies a partial transform update.
    ///
    /// Returns `true` when the transform changed; the overlay state is
    /// recomputed in that case. Does not affect the current phase — cancel
    /// a running animation first if that is intended.
    pub fn update_transform(&mut self, patch: TransformPatch) -> bool {
        let mut next = self.transform;
        if let Some(scale) = patch.scale
            && scale.is_finite()
            && scale > 0.0
        {
            next.scale = scale;
        }
        if let Some(tx) = patch.translate_x {
            next.translate.x = tx;
        }
        if let Some(ty) = patch.translate_y {
            next.translate.y = ty;
        }
        self.set_transform(next)
    }

    /// Alias of [`Controller::update_transform`].
    pub fn force_update_transform(&mut self, patch: TransformPatch) -> bool {
        self.update_transform(patch)
    }

    /// Programmatically pans/zooms so a normalized content coordinate lands
    /// on the viewport center, aligned to viewport bounds.
    pub fn center_at_point(&mut self, request: CenterAt) -> Update {
        let content = self.content_rect();
        let viewport = self.viewport_rect();
        let mut scale = request.scale.unwrap_or(self.transform.scale);
        if !scale.is_finite() || scale <= 0.0 {
            scale = self.transform.scale;
        }
        let w = content.width() * scale;
        let h = content.height() * scale;
        let center = viewport.center();
        let x0 = center.x - request.coordinate.x * w;
        let y0 = center.y - request.coordinate.y * h;
        let target = aligned_rect(Rect::new(x0, y0, x0 + w, y0 + h), viewport);

        if let Some(duration_ms) = request.animation_duration_ms {
            Update {
                animation: self.start_animation_over(target, duration_ms),
                ..Update::default()
            }
        } else {
            self.cancel_animation();
            Update {
                transformed: self.set_transform(ViewTransform::between(content, target)),
                ..Update::default()
            }
        }
    }

    /// Cancels any running animation or fling and returns to `Idle`.
    ///
    /// The cancelled process's ticket is invalidated synchronously; ticks
    /// that still arrive with it are ignored.
    pub fn cancel_animation(&mut self) {
        if matches!(self.phase, Phase::Animating | Phase::Flinging) {
            self.generation += 1;
            self.animation = None;
            self.phase = Phase::Idle;
        }
    }

    /// Handles a gesture grant.
    ///
    /// Cancels any in-flight animation or fling before accepting the
    /// gesture.
    pub fn gesture_grant(&mut self, _snapshot: &GestureSnapshot) -> Update {
        if !self.config.enable_transform {
            return Update::default();
        }
        self.generation += 1;
        self.animation = None;
        self.pinched = false;
        self.phase = Phase::Gesturing;
        Update {
            transform_started: true,
            ..Update::default()
        }
    }

    /// Handles a gesture move event.
    pub fn gesture_move(
        &mut self,
        snapshot: &GestureSnapshot,
        policy: &mut impl GesturePolicy,
    ) -> Update {
        if !self.config.enable_transform || self.phase != Phase::Gesturing {
            return Update::default();
        }
        if policy.on_move(snapshot) == Intercept::Handled {
            return Update::default();
        }

        let delta = snapshot.move_pos - snapshot.previous_move_pos;
        let pinching = snapshot.pinch.is_some() && snapshot.previous_pinch.is_some();
        if pinching && self.config.enable_scale {
            self.perform_pinch(snapshot, delta)
        } else {
            self.perform_pan(delta)
        }
    }

    /// Handles a gesture release or termination.
    pub fn gesture_release(
        &mut self,
        snapshot: &GestureSnapshot,
        policy: &mut impl GesturePolicy,
    ) -> Update {
        if !self.config.enable_transform || self.phase != Phase::Gesturing {
            return Update::default();
        }
        if policy.on_release(snapshot) == Intercept::Handled {
            self.pinched = false;
            self.phase = Phase::Idle;
            return Update::default();
        }
        let was_pinched = self.pinched;
        self.pinched = false;

        let travel = snapshot.move_pos - snapshot.start_pos;
        let is_tap = !was_pinched && !snapshot.double_tap_up && travel.hypot2() < TAP_SLOP * TAP_SLOP;
        let mut update = Update {
            single_tap_confirmed: is_tap,
            ..Update::default()
        };

        if snapshot.double_tap_up {
            if self.config.enable_scale {
                let pivot = self.viewport_local(snapshot.move_pos);
                update.animation = self.start_animation(self.double_tap_target(pivot));
            } else if self.scale_out_of_bounds() {
                update.animation = self.start_animation(self.bounce_target());
            } else {
                self.phase = Phase::Idle;
            }
        } else if self.scale_out_of_bounds() {
            update.animation = self.start_animation(self.bounce_target());
        } else if self.config.enable_translate {
            update.fling = Some(self.start_fling(snapshot.velocity));
        } else {
            self.phase = Phase::Idle;
        }
        update
    }

    /// Applies one animation progress tick from the timing collaborator.
    ///
    /// Ticks with a stale ticket or out-of-phase arrival are ignored.
    pub fn animation_tick(&mut self, ticket: DriveTicket, progress: f64) -> Update {
        if ticket.0 != self.generation || self.phase != Phase::Animating {
            return Update::default();
        }
        let Some(animation) = self.animation else {
            return Update::default();
        };
        let t = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let rect = lerp_rect(animation.from, animation.to, t);
        let transformed = self.set_transform(ViewTransform::between(self.content_rect(), rect));
        if t >= 1.0 {
            self.phase = Phase::Idle;
            self.animation = None;
        }
        Update {
            transformed,
            ..Update::default()
        }
    }

    /// Applies one incremental fling delta from the fling collaborator.
    ///
    /// When the collaborator reports `finished`, the controller returns to
    /// `Idle` — or starts a bounce animation if the scale has been left
    /// outside `[1, max_scale]`.
    pub fn fling_tick(&mut self, ticket: DriveTicket, delta: Vec2, finished: bool) -> Update {
        if ticket.0 != self.generation || self.phase != Phase::Flinging {
            return Update::default();
        }
        let target = ViewTransform::new(1.0, delta.x, delta.y).apply(self.transformed_content_rect());
        let transformed = self.set_transform(ViewTransform::between(self.content_rect(), target));
        let mut update = Update {
            transformed,
            ..Update::default()
        };
        if finished {
            if self.scale_out_of_bounds() {
                update.animation = self.start_animation(self.bounce_target());
            } else {
                self.phase = Phase::Idle;
            }
        }
        update
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            phase: self.phase,
            transform: self.transform,
            overlay: self.overlay,
            viewport_rect: self.viewport_rect(),
            page_offset: self.page_offset,
            content_rect: self.content_rect(),
            transformed_content_rect: self.transformed_content_rect(),
        }
    }

    fn perform_pinch(&mut self, snapshot: &GestureSnapshot, delta: Vec2) -> Update {
        self.pinched = true;
        let previous = snapshot.previous_pinch.unwrap_or(0.0);
        let current = snapshot.pinch.unwrap_or(0.0);
        let mut scale_by = if previous > 0.0 { current / previous } else { 1.0 };
        if !scale_by.is_finite() || scale_by <= 0.0 {
            scale_by = 1.0;
        }
        let pivot = self.viewport_local(snapshot.move_pos);
        let pinch = ViewTransform::with_pivot(scale_by, delta.x, delta.y, pivot);
        let target = pinch.apply(self.transformed_content_rect());
        Update {
            transformed: self.set_transform(ViewTransform::between(self.content_rect(), target)),
            ..Update::default()
        }
    }

    fn perform_pan(&mut self, delta: Vec2) -> Update {
        if !self.config.enable_translate {
            return Update::default();
        }
        let mut dx = delta.x;
        let mut dy = delta.y;
        // Snap near-axis-aligned drags to a single axis.
        if dx.abs() > AXIS_LOCK_RATIO * dy.abs() {
            dy = 0.0;
        } else if dy.abs() > AXIS_LOCK_RATIO * dx.abs() {
            dx = 0.0;
        }
        let delta = if self.config.enable_limits {
            self.apply_limits(dx, dy)
        } else if self.config.enable_resistance {
            self.apply_resistance(dx, dy)
        } else {
            Vec2::new(dx, dy)
        };
        let target =
            ViewTransform::new(1.0, delta.x, delta.y).apply(self.transformed_content_rect());
        Update {
            transformed: self.set_transform(ViewTransform::between(self.content_rect(), target)),
            ..Update::default()
        }
    }

    /// Hard-clamps a pan delta so content never moves past a viewport edge.
    ///
    /// The branches differ on purpose: content larger than the viewport may
    /// move until its near edge reaches the viewport's near edge, while
    /// smaller content is kept fully inside the viewport.
    fn apply_limits(&self, dx: f64, dy: f64) -> Vec2 {
        let transformed = self.transformed_content_rect();
        let viewport = self.viewport_rect();
        let space = available_translate_space(transformed, viewport);
        let dx = if transformed.width() > viewport.width() {
            dx.max(-space.right).min(space.left)
        } else {
            dx.max(space.left).min(-space.right)
        };
        let dy = if transformed.height() > viewport.height() {
            dy.max(-space.bottom).min(space.top)
        } else {
            dy.max(space.top).min(-space.bottom)
        };
        Vec2::new(dx, dy)
    }

    /// Dampens the delta on axes being pushed further past an already
    /// overscrolled edge.
    fn apply_resistance(&self, dx: f64, dy: f64) -> Vec2 {
        let space = self.available_translate_space();
        let mut dx = dx;
        let mut dy = dy;
        if (dx > 0.0 && space.left < 0.0) || (dx < 0.0 && space.right < 0.0) {
            dx /= RESISTANCE_DIVISOR;
        }
        if (dy > 0.0 && space.top < 0.0) || (dy < 0.0 && space.bottom < 0.0) {
            dy /= RESISTANCE_DIVISOR;
        }
        Vec2::new(dx, dy)
    }

    fn double_tap_target(&self, pivot: Point) -> Rect {
        let scale = self.transform.scale;
        let midpoint = (1.0 + self.config.max_scale) * 0.5;
        let scale_by = if scale > midpoint {
            1.0 / scale
        } else {
            self.config.max_scale / scale
        };
        let viewport = self.viewport_rect();
        let zoomed =
            ViewTransform::with_pivot(scale_by, 0.0, 0.0, pivot).apply(self.transformed_content_rect());
        // Bring the tapped point to the viewport center, then align.
        let recenter = viewport.center() - pivot;
        let shifted = Rect::new(
            zoomed.x0 + recenter.x,
            zoomed.y0 + recenter.y,
            zoomed.x1 + recenter.x,
            zoomed.y1 + recenter.y,
        );
        aligned_rect(shifted, viewport)
    }

    fn bounce_target(&self) -> Rect {
        let scale = self.transform.scale;
        let clamped = scale.clamp(1.0, self.config.max_scale);
        let viewport = self.viewport_rect();
        let zoomed = ViewTransform::with_pivot(clamped / scale, 0.0, 0.0, viewport.center())
            .apply(self.transformed_content_rect());
        aligned_rect(zoomed, viewport)
    }

    fn start_fling(&mut self, velocity: Vec2) -> FlingRequest {
        let space = self.available_translate_space();
        let over = self.config.max_over_scroll_distance.max(0.0);
        let max = Vec2::new((space.left + over).max(0.0), (space.top + over).max(0.0));
        let min = Vec2::new(
            -((space.right + over).max(0.0)),
            -((space.bottom + over).max(0.0)),
        );
        self.generation += 1;
        self.animation = None;
        self.phase = Phase::Flinging;
        FlingRequest {
            ticket: DriveTicket(self.generation),
            velocity,
            min,
            max,
        }
    }

    fn start_animation(&mut self, target: Rect) -> Option<AnimationRequest> {
        self.start_animation_over(target, self.config.animation_duration_ms)
    }

    /// Starts a timed animation toward `target`, cancelling whatever was
    /// running. Returns `None` (and goes `Idle`) when the target equals the
    /// current rect exactly, avoiding zero-length tick storms.
    fn start_animation_over(&mut self, target: Rect, duration_ms: u64) -> Option<AnimationRequest> {
        self.generation += 1;
        self.animation = None;
        let from = self.transformed_content_rect();
        if from == target {
            self.phase = Phase::Idle;
            return None;
        }
        self.animation = Some(Animation { from, to: target });
        self.phase = Phase::Animating;
        Some(AnimationRequest {
            ticket: DriveTicket(self.generation),
            duration_ms,
        })
    }

    /// Every transform mutation funnels through here: the overlay state is
    /// recomputed unconditionally after any change so it can never lag the
    /// content transform.
    fn set_transform(&mut self, transform: ViewTransform) -> bool {
        if !transform.scale.is_finite() || transform.scale <= 0.0 {
            return false;
        }
        if transform == self.transform {
            return false;
        }
        self.transform = transform;
        self.recompute_overlay();
        true
    }

    fn recompute_overlay(&mut self) {
        self.overlay = self.config.overlay_size.map(|size| {
            let overlay_rect = Rect::from_origin_size(Point::ZERO, size);
            let transformed = self.transformed_content_rect();
            OverlayState {
                transform: ViewTransform::between(overlay_rect, transformed),
                drawing_scale: transformed.width() / size.width,
            }
        });
    }

    fn scale_out_of_bounds(&self) -> bool {
        self.transform.scale < 1.0 || self.transform.scale > self.config.max_scale
    }

    fn viewport_local(&self, global: Point) -> Point {
        Point::new(global.x - self.page_offset.x, global.y - self.page_offset.y)
    }
}

/// Debug snapshot of a [`Controller`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Current interaction phase.
    pub phase: Phase,
    /// Current content transform.
    pub transform: ViewTransform,
    /// Current overlay state, if configured.
    pub overlay: Option<OverlayState>,
    /// Viewport rect in viewport-local coordinates.
    pub viewport_rect: Rect,
    /// Last known absolute on-screen offset of the viewport.
    pub page_offset: Point,
    /// Aspect-fitted content rect.
    pub content_rect: Rect,
    /// Content rect after the live transform.
    pub transformed_content_rect: Rect,
}

fn lerp_rect(from: Rect, to: Rect, t: f64) -> Rect {
    Rect::new(
        from.x0 + (to.x0 - from.x0) * t,
        from.y0 + (to.y0 - from.y0) * t,
        from.x1 + (to.x1 - from.x1) * t,
        from.y1 + (to.y1 - from.y1) * t,
    )
}
