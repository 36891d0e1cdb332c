//! Viewport pan/zoom transform and its animation glue.
//!
//! [`Viewport`] maps virtual coordinates to project (on-screen) coordinates
//! for one rendering surface: multiply by the zoom factor, add the pan
//! translation. The interesting operation is [`Viewport::set_zoom_factor`],
//! which re-solves the translation so an arbitrary anchor point keeps its
//! on-screen position across the zoom change.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::animate::{self, AnimationHandle, Easing, FrameScheduler, Transition};
use crate::consts::{MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, PAN_ANIMATION_MS};
use crate::coord::{Axis, ProjectCoord, VirtualCoord};
use crate::point::ProjectPoint;

/// Pan/zoom state for one rendering surface.
///
/// Translations are kept in project units so the host can hand them straight
/// to its surface transform. The zoom factor is always inside
/// `[MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR]` — clamped on construction and on
/// every set.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom_factor: f64,
    translation_x: f64,
    translation_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl Viewport {
    #[must_use]
    pub fn new(initial_zoom: f64, translation_x: f64, translation_y: f64) -> Self {
        Self {
            zoom_factor: initial_zoom.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR),
            translation_x,
            translation_y,
        }
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn translation_x(&self) -> f64 {
        self.translation_x
    }

    #[must_use]
    pub fn translation_y(&self) -> f64 {
        self.translation_y
    }

    fn translation(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.translation_x,
            Axis::Y => self.translation_y,
        }
    }

    /// Convert one project coordinate to virtual space: remove the axis
    /// translation, then undo the zoom.
    #[must_use]
    pub fn to_virtual(&self, coord: ProjectCoord, axis: Axis) -> VirtualCoord {
        let centered = coord.0 - self.translation(axis);
        VirtualCoord(centered / self.zoom_factor)
    }

    /// Convert one virtual coordinate to project space: apply the zoom, then
    /// add the axis translation. Exact algebraic inverse of
    /// [`Self::to_virtual`].
    #[must_use]
    pub fn to_project(&self, coord: VirtualCoord, axis: Axis) -> ProjectCoord {
        ProjectCoord(coord.0 * self.zoom_factor + self.translation(axis))
    }

    /// Set the zoom factor, keeping `anchor`'s on-screen position fixed.
    ///
    /// `new_zoom` is clamped into `[MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR]`; an
    /// out-of-range request is never an error. The correction works on the
    /// *ratio* of new to current zoom, because zoom composes
    /// multiplicatively: going 0.8 → 1.2 means scaling by 1.5, not
    /// adjusting by 0.4. Each axis distance from the anchor to the
    /// translation offset scales by that ratio, and the translation is
    /// re-solved so the anchor stays put. The zoom factor is committed
    /// last, after both translations are computed from the old value.
    pub fn set_zoom_factor(&mut self, new_zoom: f64, anchor: ProjectPoint) {
        let clamped = new_zoom.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
        let relative_zoom = clamped / self.zoom_factor;

        // Distances from the anchor to each translation offset, pre-zoom.
        let distance_x = anchor.x.0 - self.translation_x;
        let distance_y = anchor.y.0 - self.translation_y;

        // newTranslation = anchor - distance * relativeZoom keeps the
        // anchor's projection unchanged while everything around it scales.
        self.translation_x = anchor.x.0 - distance_x * relative_zoom;
        self.translation_y = anchor.y.0 - distance_y * relative_zoom;
        self.zoom_factor = clamped;
    }

    /// Replace both translation offsets.
    pub fn set_translation(&mut self, x: f64, y: f64) {
        self.translation_x = x;
        self.translation_y = y;
    }

    /// Pan by a pixel delta on both axes.
    pub fn translate(&mut self, delta_x: f64, delta_y: f64) {
        self.translation_x += delta_x;
        self.translation_y += delta_y;
    }
}

/// Animate the viewport to `new_zoom` around `anchor` over `duration_ms`.
///
/// Each tick re-enters [`Viewport::set_zoom_factor`] with a linearly
/// interpolated zoom value and the same anchor; the terminal tick commits
/// the final clamped zoom. Every tick fully commits state; there is no
/// separate pending animation state, and a second animation started on the
/// same viewport races this one tick for tick (last write wins). Cancel the
/// returned handle first when that is not wanted.
pub fn animate_zoom(
    viewport: &Rc<RefCell<Viewport>>,
    scheduler: &Rc<dyn FrameScheduler>,
    new_zoom: f64,
    anchor: ProjectPoint,
    duration_ms: f64,
) -> AnimationHandle {
    let initial_zoom = viewport.borrow().zoom_factor();
    let final_zoom = new_zoom.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
    let transition = Transition::new(scheduler.now_ms(), duration_ms, Easing::Linear);

    let viewport = Rc::clone(viewport);
    animate::run(scheduler, transition, move |progress| {
        let zoom = initial_zoom + progress * (final_zoom - initial_zoom);
        viewport.borrow_mut().set_zoom_factor(zoom, anchor);
    })
}

/// Animate a pan by `(delta_x, delta_y)` from the current translation.
///
/// Interpolates the offset magnitude (not a destination) over a fixed
/// 500 ms with the cubic ease, committing an absolute translation each
/// tick.
pub fn animate_translate(
    viewport: &Rc<RefCell<Viewport>>,
    scheduler: &Rc<dyn FrameScheduler>,
    delta_x: f64,
    delta_y: f64,
) -> AnimationHandle {
    let (initial_x, initial_y) = {
        let viewport = viewport.borrow();
        (viewport.translation_x(), viewport.translation_y())
    };
    let transition = Transition::new(scheduler.now_ms(), PAN_ANIMATION_MS, Easing::CubicBezier);

    let viewport = Rc::clone(viewport);
    animate::run(scheduler, transition, move |progress| {
        viewport
            .borrow_mut()
            .set_translation(initial_x + progress * delta_x, initial_y + progress * delta_y);
    })
}
