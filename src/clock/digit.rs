use crate::domain::constants::{DOT_HEIGHT, DOT_WIDTH, MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::domain::glyphs::PixelMask;
use crate::render::{Renderer, Rgba};
use crate::simulation::Simulation;

/// One 4 x 7 dot-matrix digit at a fixed spot on the face
#[derive(Clone, Debug)]
pub struct ClockDigit {
    left: f64,
    top: f64,
    /// Mask shown last frame; `None` until the first draw
    current: Option<PixelMask>,
}

impl ClockDigit {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top, current: None }
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    #[inline]
    pub fn dot_position(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.left + col as f64 * DOT_WIDTH,
            self.top + row as f64 * DOT_HEIGHT,
        )
    }

    /// Show `mask`: dots lit before and dark now are handed to the simulation
    /// as free particles, lit dots are drawn as static circles.
    ///
    /// Returns how many dots were freed.
    pub fn draw<R: Renderer + ?Sized>(
        &mut self,
        mask: &PixelMask,
        sim: &mut Simulation,
        renderer: &mut R,
        dot_radius: f64,
        color: Rgba,
    ) -> u32 {
        let mut freed = 0;
        for row in 0..MATRIX_HEIGHT {
            for col in 0..MATRIX_WIDTH {
                let (x, y) = self.dot_position(row, col);
                if let Some(prev) = &self.current {
                    if prev.is_lit(row, col) && !mask.is_lit(row, col) {
                        sim.activate(x, y);
                        freed += 1;
                    }
                }
                if mask.is_lit(row, col) {
                    renderer.draw_circle(x, y, dot_radius, color);
                }
            }
        }
        self.current = Some(*mask);
        freed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::glyphs::GlyphSet;
    use crate::render::RecordingRenderer;

    #[test]
    fn first_draw_frees_nothing() {
        let glyphs = GlyphSet::standard();
        let mut sim = Simulation::new(800.0, 400.0);
        let mut r = RecordingRenderer::new();
        let mut digit = ClockDigit::new(100.0, 50.0);

        let freed = digit.draw(glyphs.mask(8).unwrap(), &mut sim, &mut r, 7.0, Rgba::DOT);

        assert_eq!(freed, 0);
        assert_eq!(sim.active_count(), 0);
        assert_eq!(r.circles().count(), 20);
    }

    #[test]
    fn change_frees_only_dropped_dots() {
        let glyphs = GlyphSet::standard();
        let mut sim = Simulation::new(800.0, 400.0);
        let mut r = RecordingRenderer::new();
        let mut digit = ClockDigit::new(100.0, 50.0);

        digit.draw(glyphs.mask(8).unwrap(), &mut sim, &mut r, 7.0, Rgba::DOT);
        r.clear();
        // 8 -> 0 drops the two inner dots of the middle bar
        let freed = digit.draw(glyphs.mask(0).unwrap(), &mut sim, &mut r, 7.0, Rgba::DOT);

        assert_eq!(freed, 2);
        assert_eq!(sim.active_count(), 2);
        assert_eq!(sim.pool().position(0), digit.dot_position(3, 1));
        assert_eq!(sim.pool().position(1), digit.dot_position(3, 2));
        assert_eq!(r.circles().count(), 18);
    }

    #[test]
    fn same_digit_again_frees_nothing() {
        let glyphs = GlyphSet::standard();
        let mut sim = Simulation::new(800.0, 400.0);
        let mut r = RecordingRenderer::new();
        let mut digit = ClockDigit::new(0.0, 0.0);

        digit.draw(glyphs.mask(5).unwrap(), &mut sim, &mut r, 7.0, Rgba::DOT);
        let freed = digit.draw(glyphs.mask(5).unwrap(), &mut sim, &mut r, 7.0, Rgba::DOT);
        assert_eq!(freed, 0);
    }
}
