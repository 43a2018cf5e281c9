//! Drawing seam between the particle core and whatever paints pixels.
//!
//! The core only ever issues three primitives. `CanvasRenderer` forwards them
//! to a 2D canvas; `RecordingRenderer` keeps them in memory for headless runs.

mod canvas;
mod recording;

pub use canvas::CanvasRenderer;
pub use recording::{DrawCommand, RecordingRenderer};

use crate::domain::constants::DOT_COLOR;

/// Straight (non-premultiplied) colour with alpha in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const DOT: Rgba = Rgba::rgb(DOT_COLOR.0, DOT_COLOR.1, DOT_COLOR.2);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(0, 0, 0, 0.1)`
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Renderer {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    /// Round-capped line segment
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stroke_width: f64, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        assert_eq!(Rgba::DOT.to_css(), "rgba(68, 68, 255, 1)");
        assert_eq!(Rgba::BLACK.with_alpha(0.1).to_css(), "rgba(0, 0, 0, 0.1)");
    }
}
