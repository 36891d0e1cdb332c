//! Time-bounded interpolation driven by a host frame scheduler.
//!
//! An animation is an explicit task: a [`Transition`] describing start,
//! duration and easing, a tick callback, and a cancellation handle. The
//! host supplies the clock and the "call me on the next display refresh"
//! capability through [`FrameScheduler`]; the browser implementation is
//! [`crate::dom::RafScheduler`].

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Host capability: a clock plus a per-display-refresh callback slot.
pub trait FrameScheduler {
    /// Current time in milliseconds.
    fn now_ms(&self) -> f64;

    /// Run `tick` on the next display refresh.
    fn request_frame(&self, tick: Box<dyn FnOnce()>);
}

/// Easing curve applied to raw progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Progress maps straight through.
    #[default]
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    CubicBezier,
}

/// Cubic ease-in-out approximation: `4t³` below the midpoint, the mirrored
/// `1 + 4(t-1)³` above it. Maps 0 to 0 and 1 to exactly 1.
#[must_use]
pub fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = t - 1.0;
        1.0 + 4.0 * u * u * u
    }
}

/// One time-bounded interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn new(start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { start_ms, duration_ms, easing }
    }

    /// Eased progress in `[0, 1]` at `now_ms`.
    ///
    /// A non-positive duration reports 1 immediately.
    #[must_use]
    pub fn progress_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let raw = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        match self.easing {
            Easing::Linear => raw,
            Easing::CubicBezier => cubic_ease_in_out(raw),
        }
    }

    /// Whether the transition has run its full duration at `now_ms`.
    #[must_use]
    pub fn is_complete_at(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms - self.start_ms >= self.duration_ms
    }
}

/// Cancellation token for a running animation.
///
/// Cancellation is checked at the start of every tick; a cancelled task
/// delivers no further ticks and schedules nothing.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

type TickFn = Rc<RefCell<dyn FnMut(f64)>>;

/// Drive `on_tick` with eased progress: once immediately, then once per
/// scheduled frame until the transition completes or the handle is
/// cancelled.
///
/// The final tick always reports progress exactly 1, and nothing is
/// scheduled after it. Ticks are strictly time-ordered and each one fully
/// commits before the next is scheduled, so readers never observe a torn
/// update. Two animations mutating the same target are not coordinated:
/// their ticks interleave and the last write wins. Cancel the older handle
/// first when that is not wanted.
pub fn run(
    scheduler: &Rc<dyn FrameScheduler>,
    transition: Transition,
    on_tick: impl FnMut(f64) + 'static,
) -> AnimationHandle {
    let handle = AnimationHandle::default();
    let on_tick: TickFn = Rc::new(RefCell::new(on_tick));
    step(scheduler, transition, &on_tick, &handle);
    handle
}

fn step(
    scheduler: &Rc<dyn FrameScheduler>,
    transition: Transition,
    on_tick: &TickFn,
    handle: &AnimationHandle,
) {
    if handle.is_cancelled() {
        return;
    }
    let now = scheduler.now_ms();
    (&mut *on_tick.borrow_mut())(transition.progress_at(now));
    if transition.is_complete_at(now) {
        return;
    }

    let sched = Rc::clone(scheduler);
    let on_tick = Rc::clone(on_tick);
    let handle = handle.clone();
    scheduler.request_frame(Box::new(move || {
        step(&sched, transition, &on_tick, &handle);
    }));
}
