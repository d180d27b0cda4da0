//! Frame-paced repaint loop for the page background.
//!
//! The animator only talks to its environment through the capability traits
//! below, so the loop itself runs the same against the browser adapters in
//! `web` and against scripted doubles in tests.

use crate::clock::{AnimationClock, Clock};
use crate::gradient::{GradientSpec, ViewportSize};
use crate::logging::log_event;
use log::Level;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("drawing surface has no 2d rendering context")]
    ContextUnavailable,
    #[error("paint failed: {0}")]
    Paint(String),
}

pub trait RenderSurface {
    fn resize(&mut self, size: ViewportSize);
    fn paint(&mut self, gradient: &GradientSpec) -> Result<(), SurfaceError>;
}

/// "Call me when the display is ready to repaint". Dropping the returned
/// handle cancels the request if it has not fired yet.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Dropping the subscription stops further notifications.
pub trait ViewportSource {
    type Subscription;

    fn current_size(&self) -> ViewportSize;
    fn subscribe(&self, on_resize: Box<dyn Fn(ViewportSize)>) -> Self::Subscription;
}

struct AnimatorInner<S, F: FrameScheduler, V: ViewportSource, C> {
    surface: RefCell<S>,
    scheduler: F,
    viewport_source: V,
    clock: AnimationClock<C>,
    viewport: Cell<ViewportSize>,
    running: Cell<bool>,
    pending_frame: RefCell<Option<F::Handle>>,
    resize_subscription: RefCell<Option<V::Subscription>>,
    frames_painted: Cell<u64>,
}

/// One animation session. `start` begins painting every frame, `stop` (or
/// dropping the animator) cancels the pending frame and the resize listener.
pub struct BackgroundAnimator<S, F, V, C>
where
    S: RenderSurface + 'static,
    F: FrameScheduler + 'static,
    V: ViewportSource + 'static,
    C: Clock + 'static,
{
    inner: Rc<AnimatorInner<S, F, V, C>>,
}

impl<S, F, V, C> BackgroundAnimator<S, F, V, C>
where
    S: RenderSurface + 'static,
    F: FrameScheduler + 'static,
    V: ViewportSource + 'static,
    C: Clock + 'static,
{
    pub fn new(surface: S, scheduler: F, viewport_source: V, clock: C) -> Self {
        let viewport = viewport_source.current_size();

        Self {
            inner: Rc::new(AnimatorInner {
                surface: RefCell::new(surface),
                scheduler,
                viewport_source,
                clock: AnimationClock::new(clock),
                viewport: Cell::new(viewport),
                running: Cell::new(false),
                pending_frame: RefCell::new(None),
                resize_subscription: RefCell::new(None),
                frames_painted: Cell::new(0),
            }),
        }
    }

    pub fn start(&self) {
        let inner = &self.inner;
        if inner.running.replace(true) {
            return;
        }

        let size = inner.viewport_source.current_size();
        inner.viewport.set(size);
        inner.surface.borrow_mut().resize(size);

        let weak = Rc::downgrade(inner);
        let subscription = inner
            .viewport_source
            .subscribe(Box::new(move |size| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_resize(size);
                }
            }));
        *inner.resize_subscription.borrow_mut() = Some(subscription);

        log_event(
            Level::Debug,
            "background_started",
            json!({ "width": size.width, "height": size.height }),
        );

        inner.render_frame();
    }

    pub fn stop(&self) {
        self.inner.halt();
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    pub fn viewport(&self) -> ViewportSize {
        self.inner.viewport.get()
    }

    pub fn frames_painted(&self) -> u64 {
        self.inner.frames_painted.get()
    }
}

impl<S, F, V, C> Drop for BackgroundAnimator<S, F, V, C>
where
    S: RenderSurface + 'static,
    F: FrameScheduler + 'static,
    V: ViewportSource + 'static,
    C: Clock + 'static,
{
    fn drop(&mut self) {
        self.inner.halt();
    }
}

impl<S, F, V, C> AnimatorInner<S, F, V, C>
where
    S: RenderSurface + 'static,
    F: FrameScheduler + 'static,
    V: ViewportSource + 'static,
    C: Clock + 'static,
{
    fn handle_resize(&self, size: ViewportSize) {
        if !self.running.get() {
            return;
        }
        self.viewport.set(size);
        self.surface.borrow_mut().resize(size);
    }

    fn render_frame(self: &Rc<Self>) {
        self.pending_frame.borrow_mut().take();
        if !self.running.get() {
            return;
        }

        let time = self.clock.tick();
        let gradient = GradientSpec::at(time, self.viewport.get());
        let painted = self.surface.borrow_mut().paint(&gradient);

        if let Err(error) = painted {
            log_event(
                Level::Warn,
                "background_paint_failed",
                json!({
                    "error": error.to_string(),
                    "frames_painted": self.frames_painted.get(),
                }),
            );
            self.halt();
            return;
        }
        self.frames_painted.set(self.frames_painted.get() + 1);

        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = self.scheduler.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.render_frame();
            }
        }));
        *self.pending_frame.borrow_mut() = Some(handle);
    }

    fn halt(&self) {
        if !self.running.replace(false) {
            return;
        }
        let pending = self.pending_frame.borrow_mut().take();
        drop(pending);
        let subscription = self.resize_subscription.borrow_mut().take();
        drop(subscription);

        log_event(
            Level::Debug,
            "background_stopped",
            json!({ "frames_painted": self.frames_painted.get() }),
        );
    }
}
