//! Per-surface owning context tying scale, viewport and surface together.
//!
//! One [`ProjectGrid`] exists per rendering surface. It owns the
//! pixels-per-unit [`GridScale`], shares the pan/zoom [`Viewport`] with any
//! in-flight animations, and, once bound, holds the surface whose bounding
//! box anchors every screen-relative conversion.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::animate::{AnimationHandle, FrameScheduler};
use crate::coord::Axis;
use crate::input::PointerSample;
use crate::point::{ProjectPoint, ScreenPoint, VirtualPoint};
use crate::scale::GridScale;
use crate::surface::{ElementLookup, Rect, Surface, VirtualRect};
use crate::viewport::{self, Viewport};

/// Error raised by surface-relative conversions.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A screen or element conversion was attempted before `bind_surface`.
    #[error("project grid is not bound to a rendering surface")]
    SurfaceNotBound,
    /// The element lookup collaborator could not locate the element.
    #[error("element with id `{0}` cannot be found")]
    ElementNotFound(String),
}

/// Coordinate context for one rendering surface.
pub struct ProjectGrid {
    scale: GridScale,
    viewport: Rc<RefCell<Viewport>>,
    surface: Option<Box<dyn Surface>>,
}

impl ProjectGrid {
    /// Create a grid with the given initial zoom and translation and the
    /// default pixels-per-unit scale. No surface is bound yet.
    #[must_use]
    pub fn new(initial_zoom: f64, translation_x: f64, translation_y: f64) -> Self {
        Self {
            scale: GridScale::default(),
            viewport: Rc::new(RefCell::new(Viewport::new(initial_zoom, translation_x, translation_y))),
            surface: None,
        }
    }

    /// Bind the rendering surface. Must precede any screen-relative query.
    pub fn bind_surface(&mut self, surface: Box<dyn Surface>) {
        self.surface = Some(surface);
    }

    #[must_use]
    pub fn scale(&self) -> &GridScale {
        &self.scale
    }

    #[must_use]
    pub fn scale_mut(&mut self) -> &mut GridScale {
        &mut self.scale
    }

    /// Shared handle to the pan/zoom state, as animations hold it.
    #[must_use]
    pub fn viewport(&self) -> Rc<RefCell<Viewport>> {
        Rc::clone(&self.viewport)
    }

    // --- Pan/zoom delegation ---

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.viewport.borrow().zoom_factor()
    }

    #[must_use]
    pub fn translation_x(&self) -> f64 {
        self.viewport.borrow().translation_x()
    }

    #[must_use]
    pub fn translation_y(&self) -> f64 {
        self.viewport.borrow().translation_y()
    }

    /// Set the zoom factor around `anchor` immediately. See
    /// [`Viewport::set_zoom_factor`].
    pub fn set_zoom_factor(&self, new_zoom: f64, anchor: ProjectPoint) {
        self.viewport.borrow_mut().set_zoom_factor(new_zoom, anchor);
    }

    /// Animate the zoom factor to `new_zoom` around `anchor`.
    pub fn animate_zoom(
        &self,
        scheduler: &Rc<dyn FrameScheduler>,
        new_zoom: f64,
        anchor: ProjectPoint,
        duration_ms: f64,
    ) -> AnimationHandle {
        viewport::animate_zoom(&self.viewport, scheduler, new_zoom, anchor, duration_ms)
    }

    /// Pan by a pixel delta immediately.
    pub fn translate(&self, delta_x: f64, delta_y: f64) {
        self.viewport.borrow_mut().translate(delta_x, delta_y);
    }

    /// Animate a pan by `(delta_x, delta_y)` from the current translation.
    pub fn animate_translate(
        &self,
        scheduler: &Rc<dyn FrameScheduler>,
        delta_x: f64,
        delta_y: f64,
    ) -> AnimationHandle {
        viewport::animate_translate(&self.viewport, scheduler, delta_x, delta_y)
    }

    /// Replace both translation offsets.
    pub fn set_translation(&self, x: f64, y: f64) {
        self.viewport.borrow_mut().set_translation(x, y);
    }

    // --- Surface-relative conversions ---

    fn surface_rect(&self) -> Result<Rect, GridError> {
        self.surface
            .as_ref()
            .map(|surface| surface.bounding_rect())
            .ok_or(GridError::SurfaceNotBound)
    }

    /// Convert a raw screen point into project space, relative to the bound
    /// surface's top-left corner.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceNotBound`] when no surface has been bound.
    pub fn screen_to_project(&self, point: ScreenPoint) -> Result<ProjectPoint, GridError> {
        let rect = self.surface_rect()?;
        Ok(ProjectPoint::new(point.x.0 - rect.left, point.y.0 - rect.top))
    }

    /// Convert a project point down to a virtual point at the current
    /// transform state.
    #[must_use]
    pub fn project_to_virtual_point(&self, point: ProjectPoint) -> VirtualPoint {
        let viewport = self.viewport.borrow();
        VirtualPoint::from_virtual(
            viewport.to_virtual(point.x, Axis::X),
            viewport.to_virtual(point.y, Axis::Y),
            &self.scale,
        )
    }

    /// Project a virtual point to viewport space at the current transform
    /// state. The result goes stale when the transform changes; the virtual
    /// point stays authoritative.
    #[must_use]
    pub fn virtual_to_project_point(&self, point: &VirtualPoint) -> ProjectPoint {
        let viewport = self.viewport.borrow();
        ProjectPoint {
            x: viewport.to_project(point.x(&self.scale), Axis::X),
            y: viewport.to_project(point.y(&self.scale), Axis::Y),
        }
    }

    /// Screen → project → virtual in one step.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceNotBound`] when no surface has been bound.
    pub fn screen_to_virtual_point(&self, point: ScreenPoint) -> Result<VirtualPoint, GridError> {
        Ok(self.project_to_virtual_point(self.screen_to_project(point)?))
    }

    /// Virtual-space bounding box of an externally looked-up element:
    /// top-left and bottom-right corners converted independently.
    ///
    /// # Errors
    ///
    /// [`GridError::ElementNotFound`] when the lookup collaborator returns
    /// no rectangle, [`GridError::SurfaceNotBound`] when no surface has
    /// been bound.
    pub fn virtual_bounding_box_of_element(
        &self,
        lookup: &dyn ElementLookup,
        id: &str,
    ) -> Result<VirtualRect, GridError> {
        let rect = lookup
            .bounding_rect_of(id)
            .ok_or_else(|| GridError::ElementNotFound(id.to_owned()))?;

        let top_left = self.screen_to_virtual_point(ScreenPoint::new(rect.left, rect.top))?;
        let bottom_right = self
            .screen_to_virtual_point(ScreenPoint::new(rect.left + rect.width, rect.top + rect.height))?;

        let x = top_left.x(&self.scale).0;
        let y = top_left.y(&self.scale).0;
        Ok(VirtualRect {
            x,
            y,
            width: bottom_right.x(&self.scale).0 - x,
            height: bottom_right.y(&self.scale).0 - y,
        })
    }

    /// Virtual position of a pointer event, from its page-relative pair.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceNotBound`] when no surface has been bound.
    pub fn virtual_position_of_pointer(&self, sample: &PointerSample) -> Result<VirtualPoint, GridError> {
        self.screen_to_virtual_point(sample.page_point())
    }

    /// Project position of a pointer event, from its viewport-relative pair.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceNotBound`] when no surface has been bound.
    pub fn project_position_of_pointer(&self, sample: &PointerSample) -> Result<ProjectPoint, GridError> {
        self.screen_to_project(sample.client_point())
    }

    // --- Surface geometry ---

    /// Width of the bound surface in device pixels.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceNotBound`] when no surface has been bound.
    pub fn surface_width(&self) -> Result<f64, GridError> {
        Ok(self.surface_rect()?.width)
    }

    /// Height of the bound surface in device pixels.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceNotBound`] when no surface has been bound.
    pub fn surface_height(&self) -> Result<f64, GridError> {
        Ok(self.surface_rect()?.height)
    }

    /// Project-space center of the bound surface.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceNotBound`] when no surface has been bound.
    pub fn middle_point(&self) -> Result<ProjectPoint, GridError> {
        let rect = self.surface_rect()?;
        Ok(ProjectPoint::new(rect.width / 2.0, rect.height / 2.0))
    }
}
