use std::cell::Cell;

/// Source of "now" in seconds. Readings only need to be comparable with each
/// other, the epoch is arbitrary.
pub trait Clock {
    fn now_seconds(&self) -> f64;
}

/// Wall clock in seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now_seconds(&self) -> f64 {
        unix_millis() / 1_000.0
    }
}

#[cfg(target_arch = "wasm32")]
pub fn unix_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn unix_millis() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs_f64() * 1_000.0)
        .unwrap_or(0.0)
}

/// Clock readings as seen by a running animation: never goes backwards, even
/// if the underlying wall clock is adjusted.
pub struct AnimationClock<C> {
    source: C,
    last: Cell<Option<f64>>,
}

impl<C: Clock> AnimationClock<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            last: Cell::new(None),
        }
    }

    pub fn tick(&self) -> f64 {
        let now = self.source.now_seconds();
        let now = match self.last.get() {
            Some(previous) if now < previous || now.is_nan() => previous,
            _ => now,
        };
        self.last.set(Some(now));
        now
    }
}
