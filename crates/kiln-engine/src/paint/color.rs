/// Premultiplied RGBA color.
///
/// Components reach the framebuffer unconverted, so on the non-sRGB swapchain the
/// tasks use they are display values, as with a GL default framebuffer.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    /// Opaque color from `[0, 1]` components.
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_straight(r, g, b, 1.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Layout used by shader uniforms.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let c = Color::rgb(0.2, 0.3, 0.3);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.to_array(), [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn out_of_range_components_are_clamped() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 3.0);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.5, 1.0));
    }
}
