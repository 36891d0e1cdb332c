//! Pointer input snapshot consumed by the grid conversions.

use crate::point::ScreenPoint;

/// A pointer/mouse event snapshot carrying both coordinate pairs the grid
/// cares about: page-relative (document origin) and client-relative
/// (viewport origin). Built from a DOM event via
/// [`PointerSample::from_mouse_event`] in the browser, or directly in
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub page_x: f64,
    pub page_y: f64,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(page_x: f64, page_y: f64, client_x: f64, client_y: f64) -> Self {
        Self { page_x, page_y, client_x, client_y }
    }

    /// The page-relative pair as a screen point.
    #[must_use]
    pub fn page_point(&self) -> ScreenPoint {
        ScreenPoint::new(self.page_x, self.page_y)
    }

    /// The viewport-relative pair as a screen point.
    #[must_use]
    pub fn client_point(&self) -> ScreenPoint {
        ScreenPoint::new(self.client_x, self.client_y)
    }
}
