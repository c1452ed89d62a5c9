use super::history::StrokeHistory;
use super::stroke::{ActiveStroke, BrushStroke};
use crate::geometry::ImagePoint;

/// Gesture capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Drawing,
}

/// Captures pointer gestures as strokes and owns the committed history.
///
/// Two-state machine: `Idle -> Drawing` on gesture-start, `Drawing ->
/// Drawing` on each move, `Drawing -> Idle` on gesture-end (pointer-up,
/// pointer-leave, or focus loss). Points arrive already mapped to native
/// image space; they are recorded as received, neither deduplicated nor
/// resampled.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    active: Option<ActiveStroke>,
    history: StrokeHistory,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        if self.active.is_some() {
            GesturePhase::Drawing
        } else {
            GesturePhase::Idle
        }
    }

    /// Starts a gesture with its first point and the radius frozen for the
    /// whole stroke. A gesture-start while already drawing should not occur;
    /// the running stroke is committed first so no paint is lost.
    pub fn begin_stroke(&mut self, start: ImagePoint, radius: f64) {
        if self.active.is_some() {
            tracing::warn!("gesture-start while drawing; committing running stroke");
            self.end_stroke();
        }
        tracing::debug!(?start, radius, "gesture start");
        self.active = Some(ActiveStroke::new(start, radius));
    }

    /// Appends a point to the in-progress stroke. No-op while idle.
    pub fn append_point(&mut self, point: ImagePoint) {
        match self.active.as_mut() {
            Some(stroke) => stroke.append_point(point),
            None => tracing::debug!(?point, "move without active gesture ignored"),
        }
    }

    /// Ends the gesture and commits the in-progress stroke to the history.
    /// Returns `true` if a stroke was committed. Idle gesture-ends are
    /// no-ops, so pointer-up, pointer-leave, and focus loss can all funnel
    /// here unconditionally.
    pub fn end_stroke(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        tracing::debug!(points = active.points().len(), "gesture end");
        self.history.push(active.commit());
        true
    }

    /// Removes the last committed stroke. Never touches an in-progress
    /// gesture. Returns `true` if a stroke was removed.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Removes every committed stroke. Never touches an in-progress
    /// gesture. Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        self.history.clear()
    }

    /// Discards the in-progress stroke and the whole history, for image
    /// reload. Strokes must never bleed across source images.
    pub fn reset(&mut self) {
        self.active = None;
        self.history = StrokeHistory::new();
    }

    pub fn active_stroke(&self) -> Option<&ActiveStroke> {
        self.active.as_ref()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn committed_strokes(&self) -> &[BrushStroke] {
        self.history.strokes()
    }
}
