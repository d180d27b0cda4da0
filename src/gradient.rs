//! Time-varying radial gradient painted behind the page.

pub const INNER_COLOR: &str = "#680d25";
pub const MIDDLE_COLOR: &str = "#111825";
pub const OUTER_COLOR: &str = "#000000";

const AMPLITUDE_RATIO: f64 = 0.2;
const INNER_ANGULAR_SPEED: f64 = 0.5;
const OUTER_ANGULAR_SPEED: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const FALLBACK: Self = Self {
        width: 1280.0,
        height: 720.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn half_diagonal(self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt() / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: &'static str,
}

pub const COLOR_STOPS: [ColorStop; 3] = [
    ColorStop {
        offset: 0.0,
        color: INNER_COLOR,
    },
    ColorStop {
        offset: 0.5,
        color: MIDDLE_COLOR,
    },
    ColorStop {
        offset: 1.0,
        color: OUTER_COLOR,
    },
];

/// Two-circle radial gradient for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSpec {
    pub inner: FocalCircle,
    pub outer: FocalCircle,
    pub stops: [ColorStop; 3],
}

impl GradientSpec {
    /// Both focal points orbit the viewport centre on ellipses sized at a
    /// fifth of each dimension, at different speeds and phases.
    pub fn at(time_seconds: f64, viewport: ViewportSize) -> Self {
        let (center_x, center_y) = viewport.center();
        let amplitude_x = viewport.width * AMPLITUDE_RATIO;
        let amplitude_y = viewport.height * AMPLITUDE_RATIO;

        let inner_phase = time_seconds * INNER_ANGULAR_SPEED;
        let outer_phase = time_seconds * OUTER_ANGULAR_SPEED;

        Self {
            inner: FocalCircle {
                x: center_x + amplitude_x * inner_phase.sin(),
                y: center_y + amplitude_y * inner_phase.cos(),
                radius: 0.0,
            },
            outer: FocalCircle {
                x: center_x + amplitude_x * outer_phase.cos(),
                y: center_y + amplitude_y * outer_phase.sin(),
                radius: viewport.half_diagonal(),
            },
            stops: COLOR_STOPS,
        }
    }
}
