//! Browser-backed implementations of the host collaborator seams.
//!
//! Every `web-sys` touch in the crate lives here, so the math modules stay
//! testable natively. Wire-up is one call each: wrap the surface element in
//! [`DomSurface`], pass [`DocumentLookup`] for element queries, and hand an
//! `Rc<RafScheduler>` to the animation entry points.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::animate::FrameScheduler;
use crate::input::PointerSample;
use crate::surface::{ElementLookup, Rect, Surface};

fn rect_from_dom(rect: &web_sys::DomRect) -> Rect {
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// A DOM element acting as the bound rendering surface.
pub struct DomSurface {
    element: web_sys::Element,
}

impl DomSurface {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl Surface for DomSurface {
    fn bounding_rect(&self) -> Rect {
        rect_from_dom(&self.element.get_bounding_client_rect())
    }
}

/// Element lookup backed by `document.getElementById`.
#[derive(Default)]
pub struct DocumentLookup;

impl ElementLookup for DocumentLookup {
    fn bounding_rect_of(&self, id: &str) -> Option<Rect> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        Some(rect_from_dom(&element.get_bounding_client_rect()))
    }
}

impl PointerSample {
    /// Snapshot the coordinate pairs of a DOM mouse event.
    #[must_use]
    pub fn from_mouse_event(event: &web_sys::MouseEvent) -> Self {
        Self {
            page_x: f64::from(event.page_x()),
            page_y: f64::from(event.page_y()),
            client_x: f64::from(event.client_x()),
            client_y: f64::from(event.client_y()),
        }
    }
}

/// Frame scheduler backed by `window.requestAnimationFrame`.
///
/// When the window or the registration is unavailable the tick runs
/// synchronously instead, so a started animation still terminates.
#[derive(Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn request_frame(&self, tick: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window for requestAnimationFrame; running animation tick synchronously");
            tick();
            return;
        };

        // The pending tick is shared between the RAF callback and the
        // failure fallback below; whichever runs first takes it. The holder
        // keeps the closure alive until the callback fires.
        let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(tick)));
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let pending_for_cb = Rc::clone(&pending);
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(tick) = pending_for_cb.borrow_mut().take() {
                tick();
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok()
        {
            *holder.borrow_mut() = Some(cb);
        } else {
            log::warn!("requestAnimationFrame failed; running animation tick synchronously");
            if let Some(tick) = pending.borrow_mut().take() {
                tick();
            }
        }
    }
}
