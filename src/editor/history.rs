use super::stroke::BrushStroke;

/// Ordered list of committed strokes.
///
/// Append-only except for the two host-facing mutations: undo-last and
/// clear-all. Order matters only for overlay layering; mask coverage is a
/// set union and order-independent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokeHistory {
    strokes: Vec<BrushStroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stroke: BrushStroke) {
        self.strokes.push(stroke);
    }

    /// Removes the most recent stroke. No-op on an empty history.
    pub fn undo(&mut self) -> bool {
        self.strokes.pop().is_some()
    }

    /// Removes every stroke. No-op on an empty history.
    pub fn clear(&mut self) -> bool {
        if self.strokes.is_empty() {
            return false;
        }
        self.strokes.clear();
        true
    }

    pub fn strokes(&self) -> &[BrushStroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
