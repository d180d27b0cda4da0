//! Deterministic stand-ins for the browser capabilities.

use crate::animator::{FrameScheduler, RenderSurface, SurfaceError, ViewportSource};
use crate::carousel::TimerService;
use crate::clock::Clock;
use crate::gradient::{GradientSpec, ViewportSize};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

#[derive(Clone)]
pub struct ManualClock {
    seconds: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(seconds: f64) -> Self {
        Self {
            seconds: Rc::new(Cell::new(seconds)),
        }
    }

    pub fn advance_seconds(&self, delta: f64) {
        self.seconds.set(self.seconds.get() + delta);
    }

    pub fn set_seconds(&self, seconds: f64) {
        self.seconds.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.seconds.get()
    }
}

#[derive(Default)]
struct FrameQueue {
    next_id: u64,
    pending: Vec<(u64, Box<dyn FnOnce()>)>,
    cancelled: usize,
}

/// Frame requests queue up until a test fires them.
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<FrameQueue>>,
}

pub struct ManualFrameHandle {
    id: u64,
    queue: Weak<RefCell<FrameQueue>>,
}

impl Drop for ManualFrameHandle {
    fn drop(&mut self) {
        let Some(queue) = self.queue.upgrade() else {
            return;
        };
        let mut queue = queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|(id, _)| *id != self.id);
        if queue.pending.len() < before {
            queue.cancelled += 1;
        }
    }
}

impl ManualFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }

    /// Runs the oldest pending frame callback. Returns false if none was queued.
    pub fn fire_next(&self) -> bool {
        let next = {
            let mut queue = self.queue.borrow_mut();
            if queue.pending.is_empty() {
                None
            } else {
                Some(queue.pending.remove(0))
            }
        };

        match next {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl FrameScheduler for ManualFrames {
    type Handle = ManualFrameHandle;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.pending.push((id, callback));

        ManualFrameHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

struct ViewportState {
    size: Cell<ViewportSize>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Rc<dyn Fn(ViewportSize)>)>>,
}

#[derive(Clone)]
pub struct ManualViewport {
    state: Rc<ViewportState>,
}

pub struct ManualSubscription {
    id: u64,
    state: Weak<ViewportState>,
}

impl Drop for ManualSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl ManualViewport {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            state: Rc::new(ViewportState {
                size: Cell::new(size),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn listeners(&self) -> usize {
        self.state.listeners.borrow().len()
    }

    pub fn resize_to(&self, size: ViewportSize) {
        self.state.size.set(size);
        let listeners: Vec<_> = self
            .state
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(size);
        }
    }
}

impl ViewportSource for ManualViewport {
    type Subscription = ManualSubscription;

    fn current_size(&self) -> ViewportSize {
        self.state.size.get()
    }

    fn subscribe(&self, on_resize: Box<dyn Fn(ViewportSize)>) -> Self::Subscription {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state
            .listeners
            .borrow_mut()
            .push((id, Rc::from(on_resize)));

        ManualSubscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

#[derive(Default)]
pub struct SurfaceLog {
    pub sizes: Vec<ViewportSize>,
    pub paints: Vec<GradientSpec>,
    pub fail_paints: bool,
}

/// Records every resize and paint; the test keeps a clone to inspect.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn paint_count(&self) -> usize {
        self.log.borrow().paints.len()
    }

    pub fn last_paint(&self) -> Option<GradientSpec> {
        self.log.borrow().paints.last().copied()
    }

    pub fn last_size(&self) -> Option<ViewportSize> {
        self.log.borrow().sizes.last().copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn resize(&mut self, size: ViewportSize) {
        self.log.borrow_mut().sizes.push(size);
    }

    fn paint(&mut self, gradient: &GradientSpec) -> Result<(), SurfaceError> {
        let mut log = self.log.borrow_mut();
        if log.fail_paints {
            return Err(SurfaceError::Paint("gradient rejected".to_string()));
        }
        log.paints.push(*gradient);
        Ok(())
    }
}

struct TimerEntry {
    id: u64,
    period: Duration,
    next_due: Duration,
    callback: Rc<RefCell<Box<dyn FnMut()>>>,
}

#[derive(Default)]
struct TimerQueue {
    now: Duration,
    next_id: u64,
    timers: Vec<TimerEntry>,
}

/// Fixed-period timers driven by virtual time.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<TimerQueue>>,
}

pub struct ManualTimerHandle {
    id: u64,
    queue: Weak<RefCell<TimerQueue>>,
}

impl Drop for ManualTimerHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().timers.retain(|timer| timer.id != self.id);
        }
    }
}

impl ManualTimers {
    pub fn active(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.queue.borrow().now + by;

        loop {
            let due = {
                let mut guard = self.queue.borrow_mut();
                let queue = &mut *guard;
                let next = queue
                    .timers
                    .iter_mut()
                    .filter(|timer| timer.next_due <= target)
                    .min_by_key(|timer| (timer.next_due, timer.id));
                match next {
                    Some(timer) => {
                        let fired_at = timer.next_due;
                        timer.next_due += timer.period;
                        let callback = Rc::clone(&timer.callback);
                        queue.now = fired_at;
                        Some(callback)
                    }
                    None => None,
                }
            };

            match due {
                Some(callback) => (&mut *callback.borrow_mut())(),
                None => break,
            }
        }

        self.queue.borrow_mut().now = target;
    }
}

impl TimerService for ManualTimers {
    type Handle = ManualTimerHandle;

    fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let next_due = queue.now + period;
        queue.timers.push(TimerEntry {
            id,
            period,
            next_due,
            callback: Rc::new(RefCell::new(callback)),
        });

        ManualTimerHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}
