//! Drawing primitives used by entity `draw` operations.
//!
//! The core never talks to a concrete graphics library. Entities issue
//! primitive calls against a [`Canvas`] in world coordinates; the terminal
//! layer rasterizes them, tests record them.

use crate::types::Rgb;

/// A drawable target with a current pen (color + stroke width) and a
/// transform stack.
///
/// Ellipses are addressed by their bounding box. `save`/`restore` push and pop
/// the transform, color and stroke width together.
pub trait Canvas {
    fn set_color(&mut self, color: Rgb);
    fn set_stroke_width(&mut self, width: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn fill_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn fill_polygon(&mut self, points: &[(f64, f64)]);
    fn stroke_polygon(&mut self, points: &[(f64, f64)]);

    fn save(&mut self);
    fn restore(&mut self);

    /// Rotate subsequent drawing by `radians` (clockwise, y-down) about `(cx, cy)`.
    fn rotate_about(&mut self, radians: f64, cx: f64, cy: f64);
}

/// A single recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetColor(Rgb),
    SetStrokeWidth(f64),
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    FillEllipse { x: f64, y: f64, w: f64, h: f64 },
    StrokeEllipse { x: f64, y: f64, w: f64, h: f64 },
    FillPolygon(Vec<(f64, f64)>),
    StrokePolygon(Vec<(f64, f64)>),
    Save,
    Restore,
    Rotate { radians: f64, cx: f64, cy: f64 },
}

/// Canvas that records every call, for headless inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Rotation angles applied, in call order.
    pub fn rotations(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rotate { radians, .. } => Some(*radians),
                _ => None,
            })
            .collect()
    }

    /// Every filled rectangle as `(x, y, w, h)`.
    pub fn filled_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillRect { x, y, w, h } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    /// Every filled ellipse bounding box as `(x, y, w, h)`.
    pub fn filled_ellipses(&self) -> Vec<(f64, f64, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillEllipse { x, y, w, h } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    /// Net save/restore depth; zero for balanced drawing.
    pub fn save_depth(&self) -> i32 {
        self.commands.iter().fold(0, |depth, c| match c {
            DrawCommand::Save => depth + 1,
            DrawCommand::Restore => depth - 1,
            _ => depth,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn set_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetStrokeWidth(width));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::StrokeRect { x, y, w, h });
    }

    fn fill_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::FillEllipse { x, y, w, h });
    }

    fn stroke_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::StrokeEllipse { x, y, w, h });
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)]) {
        self.commands.push(DrawCommand::FillPolygon(points.to_vec()));
    }

    fn stroke_polygon(&mut self, points: &[(f64, f64)]) {
        self.commands.push(DrawCommand::StrokePolygon(points.to_vec()));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn rotate_about(&mut self, radians: f64, cx: f64, cy: f64) {
        self.commands.push(DrawCommand::Rotate { radians, cx, cy });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_canvas_keeps_call_order() {
        let mut c = RecordingCanvas::new();
        c.save();
        c.set_color(Rgb::WHITE);
        c.fill_rect(1.0, 2.0, 3.0, 4.0);
        c.restore();

        assert_eq!(
            c.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::SetColor(Rgb::WHITE),
                DrawCommand::FillRect {
                    x: 1.0,
                    y: 2.0,
                    w: 3.0,
                    h: 4.0
                },
                DrawCommand::Restore,
            ]
        );
        assert_eq!(c.save_depth(), 0);
    }

    #[test]
    fn recording_canvas_clear_drops_commands() {
        let mut c = RecordingCanvas::new();
        c.fill_ellipse(0.0, 0.0, 1.0, 1.0);
        c.clear();
        assert!(c.commands().is_empty());
    }
}
