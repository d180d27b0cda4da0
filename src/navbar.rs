/// Whether the floating navigation bar is shown. It stays visible while any
/// part of the hero section is still on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarVisibility {
    visible: bool,
}

impl Default for NavbarVisibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl NavbarVisibility {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// `hero_bottom` is the hero's bounding-rect bottom edge relative to the
    /// viewport, or `None` if the hero is not in the document. Returns whether
    /// visibility changed.
    pub fn observe(&mut self, hero_bottom: Option<f64>) -> bool {
        let Some(bottom) = hero_bottom else {
            return false;
        };
        let visible = bottom > 0.0;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn class(self) -> &'static str {
        if self.visible {
            "navbar is-visible"
        } else {
            "navbar is-hidden"
        }
    }
}
