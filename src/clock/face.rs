use crate::domain::constants::{DOT_HEIGHT, DOT_WIDTH, MATRIX_HEIGHT, MATRIX_WIDTH, NUMBER_SPACING};
use crate::domain::glyphs::GlyphSet;
use crate::render::{Renderer, Rgba};
use crate::simulation::Simulation;

use super::digit::ClockDigit;
use super::time::ClockTime;

/// Colon dots sit this far right of the gap start
const COLON_OFFSET: f64 = 8.0;

/// Six digits (HH MM SS) and two colons laid out on a `width` x `height` scene.
pub struct ClockFace {
    width: f64,
    height: f64,
    top: f64,
    glyphs: GlyphSet,
    digits: [ClockDigit; 6],
    colon_x: [f64; 2],
}

impl ClockFace {
    pub fn new(width: f64, height: f64) -> Self {
        let digit_pitch = DOT_WIDTH * MATRIX_WIDTH as f64 + NUMBER_SPACING;
        let colon_gap = DOT_WIDTH + 2.0 * NUMBER_SPACING;

        let face_width = digit_pitch * 6.0 + (DOT_WIDTH + NUMBER_SPACING) * 2.0 - NUMBER_SPACING;
        let face_height = DOT_HEIGHT * MATRIX_HEIGHT as f64;

        let top = (height - face_height) * 0.33;
        let mut x = (width - face_width) * 0.4;

        let mut origins = [0.0f64; 6];
        let mut colon_x = [0.0f64; 2];
        for pair in 0..3 {
            origins[pair * 2] = x;
            origins[pair * 2 + 1] = x + digit_pitch;
            x += digit_pitch * 2.0;
            if pair < 2 {
                colon_x[pair] = x + COLON_OFFSET;
                x += colon_gap;
            }
        }

        Self {
            width,
            height,
            top,
            glyphs: GlyphSet::standard(),
            digits: origins.map(|left| ClockDigit::new(left, top)),
            colon_x,
        }
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn set_glyphs(&mut self, glyphs: GlyphSet) {
        self.glyphs = glyphs;
    }

    pub fn digit_origins(&self) -> [(f64, f64); 6] {
        let mut out = [(0.0, 0.0); 6];
        for (slot, digit) in out.iter_mut().zip(self.digits.iter()) {
            *slot = digit.origin();
        }
        out
    }

    /// Centres of the four colon dots
    pub fn colon_dots(&self) -> [(f64, f64); 4] {
        let upper = self.top + 2.0 * DOT_HEIGHT;
        let lower = self.top + 4.0 * DOT_HEIGHT;
        [
            (self.colon_x[0], upper),
            (self.colon_x[0], lower),
            (self.colon_x[1], upper),
            (self.colon_x[1], lower),
        ]
    }

    /// Draw all six digits for `time`, freeing dots that went dark.
    /// Returns the number of freed dots.
    pub fn show_time<R: Renderer + ?Sized>(
        &mut self,
        time: ClockTime,
        sim: &mut Simulation,
        renderer: &mut R,
    ) -> u32 {
        let radius = sim.scene().radius * 0.5;
        let color = sim.dot_color();
        let mut freed = 0;
        for (digit, value) in self.digits.iter_mut().zip(time.digits()) {
            match self.glyphs.mask(value) {
                Some(mask) => freed += digit.draw(mask, sim, renderer, radius, color),
                None => log::warn!("no glyph for digit value {}", value),
            }
        }
        freed
    }

    /// One animation frame: fade the previous image, draw the colons and
    /// digits, then advance and draw the free dots.
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        time: ClockTime,
        timestamp_ms: f64,
        sim: &mut Simulation,
        renderer: &mut R,
    ) {
        let fade = Rgba::BLACK.with_alpha(sim.config().trail_fade_alpha);
        renderer.fill_rect(0.0, 0.0, self.width, self.height, fade);

        let radius = sim.scene().radius * 0.5;
        let color = sim.dot_color();
        for (x, y) in self.colon_dots() {
            renderer.draw_circle(x, y, radius, color);
        }

        self.show_time(time, sim, renderer);
        sim.tick(timestamp_ms, renderer);
    }
}
