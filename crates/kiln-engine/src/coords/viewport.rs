/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height; `1.0` for degenerate (minimized) viewports.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_exercise_window() {
        let vp = Viewport::new(800.0, 600.0);
        assert!((vp.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_viewport_has_unit_aspect() {
        assert_eq!(Viewport::new(0.0, 600.0).aspect_ratio(), 1.0);
        assert_eq!(Viewport::new(800.0, 0.0).aspect_ratio(), 1.0);
        assert_eq!(Viewport::new(f32::NAN, 600.0).aspect_ratio(), 1.0);
    }
}
