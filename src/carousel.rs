//! Project carousel: which entry is focused, which indicator segment is
//! hovered, and the fixed-period autoplay timer that advances the focus.

use crate::logging::log_event;
use log::Level;
use serde_json::json;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Tick,
    Select(usize),
    HoverEnter(usize),
    HoverLeave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentAppearance {
    Current,
    Hovered,
    Idle,
}

impl SegmentAppearance {
    pub fn class(self) -> &'static str {
        match self {
            Self::Current => "is-current",
            Self::Hovered => "is-hovered",
            Self::Idle => "is-idle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current_index: usize,
    hovered_index: Option<usize>,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current_index: 0,
            hovered_index: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    /// `-1` when nothing is hovered.
    pub fn hovered_index_or_sentinel(&self) -> isize {
        self.hovered_index
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(-1)
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Tick => {
                if self.len > 0 {
                    self.current_index = (self.current_index + 1) % self.len;
                }
            }
            CarouselAction::Select(index) => {
                if index < self.len {
                    self.current_index = index;
                }
            }
            CarouselAction::HoverEnter(index) => {
                if index < self.len {
                    self.hovered_index = Some(index);
                }
            }
            CarouselAction::HoverLeave => self.hovered_index = None,
        }
    }

    /// Horizontal translation of the slide track, in percent of its width.
    pub fn track_offset_percent(&self) -> f64 {
        -(self.current_index as f64) * 100.0
    }

    pub fn segment_width_percent(&self) -> Option<f64> {
        (self.len > 0).then(|| 100.0 / self.len as f64)
    }

    pub fn segment_appearance(&self, index: usize) -> SegmentAppearance {
        if index == self.current_index {
            SegmentAppearance::Current
        } else if self.hovered_index == Some(index) {
            SegmentAppearance::Hovered
        } else {
            SegmentAppearance::Idle
        }
    }
}

/// Recurring timer capability. Dropping the handle cancels the timer.
pub trait TimerService {
    type Handle;

    fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Owns the autoplay timer between `attach` and `detach`. Manual selection
/// never goes through here, so it cannot shift the next tick.
pub struct Autoplay<T: TimerService> {
    timers: T,
    period: Duration,
    handle: Option<T::Handle>,
}

impl<T: TimerService> Autoplay<T> {
    pub fn new(timers: T, period: Duration) -> Self {
        Self {
            timers,
            period,
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts ticking. Re-attaching replaces the previous timer.
    pub fn attach(&mut self, on_tick: impl FnMut() + 'static) {
        self.detach();
        self.handle = Some(
            self.timers
                .schedule_repeating(self.period, Box::new(on_tick)),
        );
        log_event(
            Level::Debug,
            "autoplay_attached",
            json!({ "period_ms": self.period.as_millis() as u64 }),
        );
    }

    pub fn detach(&mut self) {
        if self.handle.take().is_some() {
            log_event(Level::Debug, "autoplay_detached", json!({}));
        }
    }
}

impl<T: TimerService> Drop for Autoplay<T> {
    fn drop(&mut self) {
        self.detach();
    }
}
