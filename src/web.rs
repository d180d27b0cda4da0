//! Browser implementations of the capabilities the animator, the carousel
//! and the navbar depend on.

use crate::age::CalendarDate;
use crate::animator::{FrameScheduler, RenderSurface, SurfaceError, ViewportSource};
use crate::carousel::TimerService;
use crate::gradient::{GradientSpec, ViewportSize};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

pub fn viewport_size() -> ViewportSize {
    let Some(win) = window() else {
        return ViewportSize::FALLBACK;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(ViewportSize::FALLBACK.width);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(ViewportSize::FALLBACK.height);

    ViewportSize::new(width, height)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Today's date on the visitor's local calendar.
pub fn today() -> CalendarDate {
    let now = js_sys::Date::new_0();
    CalendarDate::new(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

/// Bottom edge of the `#hero` section relative to the viewport.
pub fn hero_bottom() -> Option<f64> {
    let hero = window()?.document()?.get_element_by_id("hero")?;
    Some(hero.get_bounding_client_rect().bottom())
}

pub fn on_window_scroll(mut callback: impl FnMut() + 'static) -> Option<EventListener> {
    let win = window()?;
    Some(EventListener::new(&win, "scroll", move |_| callback()))
}

fn js_error(value: JsValue) -> SurfaceError {
    SurfaceError::Paint(format!("{value:?}"))
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;

        Ok(Self { canvas, context })
    }
}

impl RenderSurface for CanvasSurface {
    fn resize(&mut self, size: ViewportSize) {
        self.canvas.set_width(size.width.max(0.0).round() as u32);
        self.canvas.set_height(size.height.max(0.0).round() as u32);
    }

    fn paint(&mut self, gradient: &GradientSpec) -> Result<(), SurfaceError> {
        let fill = self
            .context
            .create_radial_gradient(
                gradient.inner.x,
                gradient.inner.y,
                gradient.inner.radius,
                gradient.outer.x,
                gradient.outer.y,
                gradient.outer.radius,
            )
            .map_err(js_error)?;

        for stop in gradient.stops {
            fill.add_color_stop(stop.offset as f32, stop.color)
                .map_err(js_error)?;
        }

        self.context.set_fill_style_canvas_gradient(&fill);
        self.context.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        Ok(())
    }
}

#[derive(Clone, Copy, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle {
        request_animation_frame(move |_timestamp| callback())
    }
}

#[derive(Clone, Copy, Default)]
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
    type Subscription = Option<EventListener>;

    fn current_size(&self) -> ViewportSize {
        viewport_size()
    }

    fn subscribe(&self, on_resize: Box<dyn Fn(ViewportSize)>) -> Self::Subscription {
        let win = window()?;
        Some(EventListener::new(&win, "resize", move |_| {
            on_resize(viewport_size())
        }))
    }
}

#[derive(Clone, Copy, Default)]
pub struct IntervalTimers;

impl TimerService for IntervalTimers {
    type Handle = Interval;

    fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, callback)
    }
}
