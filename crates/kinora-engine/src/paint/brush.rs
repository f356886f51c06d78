use super::Color;

/// Fill and outline style for a primitive.
///
/// Opacities are kept separate from the colors so a widget can fade without
/// touching its palette.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Brush {
    pub fill: Color,
    pub outline: Color,
    pub fill_opacity: f32,
    pub outline_opacity: f32,
    /// Outline stroke width in canvas units. `0.0` = no outline.
    pub outline_width: f32,
}

impl Brush {
    /// Opaque fill with no outline.
    #[inline]
    pub fn solid(fill: Color) -> Self {
        Self { fill, outline: fill, fill_opacity: 1.0, outline_opacity: 1.0, outline_width: 0.0 }
    }

    /// Outline only.
    #[inline]
    pub fn stroke(outline: Color, width: f32) -> Self {
        Self {
            fill: Color::transparent(),
            outline,
            fill_opacity: 0.0,
            outline_opacity: 1.0,
            outline_width: width,
        }
    }

    #[inline]
    pub fn with_outline(mut self, outline: Color, width: f32) -> Self {
        self.outline = outline;
        self.outline_width = width;
        self
    }

    /// Multiplies both opacities by `factor`.
    #[inline]
    pub fn faded(mut self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        self.fill_opacity *= f;
        self.outline_opacity *= f;
        self
    }

    /// Returns `true` if neither the fill nor the outline would be visible.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        let fill = self.fill_opacity <= 0.0 || self.fill.a <= 0.0;
        let outline = self.outline_width <= 0.0 || self.outline_opacity <= 0.0 || self.outline.a <= 0.0;
        fill && outline
    }
}

impl Default for Brush {
    /// White fill with a one-unit white outline.
    fn default() -> Self {
        Self::solid(Color::WHITE).with_outline(Color::WHITE, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_both_opacities() {
        let b = Brush::solid(Color::BLACK).with_outline(Color::WHITE, 2.0).faded(0.5);
        assert_eq!(b.fill_opacity, 0.5);
        assert_eq!(b.outline_opacity, 0.5);
    }

    #[test]
    fn zero_opacity_is_invisible() {
        assert!(Brush::default().faded(0.0).is_invisible());
        assert!(!Brush::default().is_invisible());
        assert!(Brush::stroke(Color::WHITE, 0.0).is_invisible());
    }
}
