#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

struct FakeSurface {
    rect: Rect,
}

impl Surface for FakeSurface {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Default)]
struct FakeLookup {
    rects: HashMap<String, Rect>,
}

impl FakeLookup {
    fn with(id: &str, rect: Rect) -> Self {
        let mut rects = HashMap::new();
        rects.insert(id.to_owned(), rect);
        Self { rects }
    }
}

impl ElementLookup for FakeLookup {
    fn bounding_rect_of(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }
}

fn bound_grid(initial_zoom: f64, tx: f64, ty: f64) -> ProjectGrid {
    let mut grid = ProjectGrid::new(initial_zoom, tx, ty);
    grid.bind_surface(Box::new(FakeSurface {
        rect: Rect { left: 100.0, top: 100.0, width: 800.0, height: 600.0 },
    }));
    grid
}

// --- Unbound surface ---

#[test]
fn screen_conversion_requires_a_bound_surface() {
    let grid = ProjectGrid::new(1.0, 0.0, 0.0);
    let result = grid.screen_to_project(ScreenPoint::new(0.0, 0.0));
    assert!(matches!(result, Err(GridError::SurfaceNotBound)));
}

#[test]
fn surface_geometry_requires_a_bound_surface() {
    let grid = ProjectGrid::new(1.0, 0.0, 0.0);
    assert!(matches!(grid.surface_width(), Err(GridError::SurfaceNotBound)));
    assert!(matches!(grid.surface_height(), Err(GridError::SurfaceNotBound)));
    assert!(matches!(grid.middle_point(), Err(GridError::SurfaceNotBound)));
}

#[test]
fn element_bounding_box_requires_a_bound_surface() {
    let grid = ProjectGrid::new(1.0, 0.0, 0.0);
    let lookup = FakeLookup::with("panel", Rect { left: 0.0, top: 0.0, width: 10.0, height: 10.0 });
    let result = grid.virtual_bounding_box_of_element(&lookup, "panel");
    assert!(matches!(result, Err(GridError::SurfaceNotBound)));
}

#[test]
fn unbound_error_names_the_missing_binding() {
    let grid = ProjectGrid::new(1.0, 0.0, 0.0);
    let err = grid.screen_to_project(ScreenPoint::new(0.0, 0.0)).unwrap_err();
    assert_eq!(err.to_string(), "project grid is not bound to a rendering surface");
}

// --- Screen conversions ---

#[test]
fn screen_to_project_subtracts_the_surface_origin() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    let point = grid.screen_to_project(ScreenPoint::new(150.0, 120.0)).unwrap();
    assert_eq!(point, ProjectPoint::new(50.0, 20.0));
}

#[test]
fn screen_to_virtual_applies_the_full_chain() {
    let grid = bound_grid(0.5, 10.0, 20.0);
    let point = grid.screen_to_virtual_point(ScreenPoint::new(160.0, 180.0)).unwrap();
    // screen (160, 180) → project (60, 80) → virtual ((60-10)/0.5, (80-20)/0.5).
    assert!(approx_eq(point.x(grid.scale()).0, 100.0));
    assert!(approx_eq(point.y(grid.scale()).0, 120.0));
}

#[test]
fn project_virtual_round_trip() {
    let grid = bound_grid(1.7, -12.0, 33.0);
    let original = ProjectPoint::new(42.0, -7.5);
    let virtual_point = grid.project_to_virtual_point(original);
    let back = grid.virtual_to_project_point(&virtual_point);
    assert!(approx_eq(back.x.0, original.x.0));
    assert!(approx_eq(back.y.0, original.y.0));
}

#[test]
fn project_points_go_stale_but_virtual_points_do_not() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    let virtual_point = grid.project_to_virtual_point(ProjectPoint::new(50.0, 50.0));

    grid.translate(25.0, 0.0);

    let reprojected = grid.virtual_to_project_point(&virtual_point);
    assert!(approx_eq(reprojected.x.0, 75.0));
    assert!(approx_eq(reprojected.y.0, 50.0));
}

// --- Element bounding boxes ---

#[test]
fn element_box_converts_both_corners() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    let lookup = FakeLookup::with("panel", Rect { left: 110.0, top: 120.0, width: 50.0, height: 60.0 });

    let rect = grid.virtual_bounding_box_of_element(&lookup, "panel").unwrap();
    assert!(approx_eq(rect.x, 10.0));
    assert!(approx_eq(rect.y, 20.0));
    assert!(approx_eq(rect.width, 50.0));
    assert!(approx_eq(rect.height, 60.0));
}

#[test]
fn element_box_scales_with_zoom() {
    let grid = bound_grid(0.5, 0.0, 0.0);
    let lookup = FakeLookup::with("panel", Rect { left: 110.0, top: 120.0, width: 50.0, height: 60.0 });

    let rect = grid.virtual_bounding_box_of_element(&lookup, "panel").unwrap();
    assert!(approx_eq(rect.x, 20.0));
    assert!(approx_eq(rect.y, 40.0));
    assert!(approx_eq(rect.width, 100.0));
    assert!(approx_eq(rect.height, 120.0));
}

#[test]
fn missing_element_is_an_error() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    let lookup = FakeLookup::default();
    let err = grid.virtual_bounding_box_of_element(&lookup, "ghost").unwrap_err();
    assert!(matches!(&err, GridError::ElementNotFound(id) if id == "ghost"));
    assert_eq!(err.to_string(), "element with id `ghost` cannot be found");
}

// --- Pointer helpers ---

#[test]
fn virtual_pointer_position_uses_the_page_pair() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    let sample = PointerSample::new(150.0, 150.0, 90.0, 90.0);
    let point = grid.virtual_position_of_pointer(&sample).unwrap();
    assert!(approx_eq(point.x(grid.scale()).0, 50.0));
    assert!(approx_eq(point.y(grid.scale()).0, 50.0));
}

#[test]
fn project_pointer_position_uses_the_client_pair() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    let sample = PointerSample::new(150.0, 150.0, 190.0, 160.0);
    let point = grid.project_position_of_pointer(&sample).unwrap();
    assert_eq!(point, ProjectPoint::new(90.0, 60.0));
}

// --- Surface geometry ---

#[test]
fn surface_dimensions_come_from_the_bounding_rect() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    assert_eq!(grid.surface_width().unwrap(), 800.0);
    assert_eq!(grid.surface_height().unwrap(), 600.0);
}

#[test]
fn middle_point_is_the_surface_center() {
    let grid = bound_grid(1.0, 0.0, 0.0);
    assert_eq!(grid.middle_point().unwrap(), ProjectPoint::new(400.0, 300.0));
}

// --- Scale ownership ---

#[test]
fn scale_mutation_changes_later_conversions() {
    let mut grid = bound_grid(1.0, 0.0, 0.0);
    let before = grid.screen_to_virtual_point(ScreenPoint::new(200.0, 200.0)).unwrap();
    assert_eq!(before.base_point().x.0, 10.0);

    grid.scale_mut().set_px_per_unit(20.0).unwrap();
    let after = grid.screen_to_virtual_point(ScreenPoint::new(200.0, 200.0)).unwrap();
    assert_eq!(after.base_point().x.0, 5.0);
}

#[test]
fn existing_virtual_points_read_through_the_new_scale() {
    let mut grid = bound_grid(1.0, 0.0, 0.0);
    let point = grid.screen_to_virtual_point(ScreenPoint::new(200.0, 200.0)).unwrap();
    assert_eq!(point.x(grid.scale()).0, 100.0);

    grid.scale_mut().set_px_per_unit(5.0).unwrap();
    assert_eq!(point.x(grid.scale()).0, 50.0);
}

// --- Pan/zoom delegation ---

#[test]
fn pan_zoom_reads_reflect_viewport_state() {
    let grid = ProjectGrid::new(0.25, 5.0, -5.0);
    assert_eq!(grid.zoom_factor(), 0.25);
    assert_eq!(grid.translation_x(), 5.0);
    assert_eq!(grid.translation_y(), -5.0);

    grid.set_zoom_factor(9.0, ProjectPoint::new(0.0, 0.0));
    assert_eq!(grid.zoom_factor(), 2.0);

    grid.set_translation(1.0, 2.0);
    grid.translate(1.0, 1.0);
    assert_eq!(grid.translation_x(), 2.0);
    assert_eq!(grid.translation_y(), 3.0);
}

#[test]
fn viewport_handle_shares_state_with_the_grid() {
    let grid = ProjectGrid::new(1.0, 0.0, 0.0);
    let handle = grid.viewport();
    handle.borrow_mut().translate(11.0, 0.0);
    assert_eq!(grid.translation_x(), 11.0);
}

// --- Animated delegation ---

struct ManualScheduler {
    now: Cell<f64>,
    frame_step_ms: f64,
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl ManualScheduler {
    fn new(frame_step_ms: f64) -> Rc<Self> {
        Rc::new(Self {
            now: Cell::new(0.0),
            frame_step_ms,
            queue: RefCell::new(VecDeque::new()),
        })
    }

    fn run_to_completion(&self) {
        while !self.queue.borrow().is_empty() {
            self.now.set(self.now.get() + self.frame_step_ms);
            let ticks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for tick in ticks {
                tick();
            }
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn request_frame(&self, tick: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(tick);
    }
}

#[test]
fn grid_animated_translate_runs_to_the_target() {
    let scheduler = ManualScheduler::new(100.0);
    let scheduler_dyn: Rc<dyn FrameScheduler> = scheduler.clone();
    let grid = ProjectGrid::new(1.0, 0.0, 0.0);

    let _handle = grid.animate_translate(&scheduler_dyn, 100.0, 0.0);
    scheduler.run_to_completion();

    assert_eq!(grid.translation_x(), 100.0);
    assert_eq!(grid.translation_y(), 0.0);
}

#[test]
fn grid_animated_zoom_runs_to_the_clamped_target() {
    let scheduler = ManualScheduler::new(100.0);
    let scheduler_dyn: Rc<dyn FrameScheduler> = scheduler.clone();
    let grid = ProjectGrid::new(1.0, 0.0, 0.0);

    let _handle = grid.animate_zoom(&scheduler_dyn, 7.0, ProjectPoint::new(0.0, 0.0), 400.0);
    scheduler.run_to_completion();

    assert_eq!(grid.zoom_factor(), 2.0);
}
