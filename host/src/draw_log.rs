use serde::Serialize;
use snake_core::render::{Color, Renderer};
use snake_core::Position;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCall {
    Quad {
        position: Position,
        size: f32,
        color: Color,
    },
    SegmentLine {
        from: Position,
        to: Position,
        color: Color,
    },
}

/// Renderer that keeps every draw request of a frame instead of rasterising it.
#[derive(Debug, Default)]
pub struct DrawLog {
    calls: Vec<DrawCall>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn quad_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Quad { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.calls.len() - self.quad_count()
    }
}

impl Renderer for DrawLog {
    fn draw_quad(&mut self, position: Position, size: f32, color: Color) {
        tracing::trace!(x = position.x, y = position.y, size, "quad");
        self.calls.push(DrawCall::Quad {
            position,
            size,
            color,
        });
    }

    fn draw_segment_line(&mut self, from: Position, to: Position, color: Color) {
        tracing::trace!(x0 = from.x, y0 = from.y, x1 = to.x, y1 = to.y, "segment");
        self.calls.push(DrawCall::SegmentLine { from, to, color });
    }
}
