use super::{Renderer, Rgba};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Rgba },
    Circle { x: f64, y: f64, radius: f64, color: Rgba },
    Line { x0: f64, y0: f64, x1: f64, y1: f64, stroke_width: f64, color: Rgba },
}

/// Renderer that remembers every primitive instead of drawing it
#[derive(Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stroke_width: f64, color: Rgba) {
        self.commands.push(DrawCommand::Line { x0, y0, x1, y1, stroke_width, color });
    }
}
