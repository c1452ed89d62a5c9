use crate::geometry::ImagePoint;

/// One committed paint gesture: an ordered, non-empty point sequence in
/// native image space plus the brush radius frozen at gesture start.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushStroke {
    points: Vec<ImagePoint>,
    radius: f64,
}

impl BrushStroke {
    /// Test and host convenience; gesture capture goes through
    /// [`ActiveStroke`]. Returns `None` for an empty point list.
    pub fn from_points(points: Vec<ImagePoint>, radius: f64) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, radius })
    }

    pub fn points(&self) -> &[ImagePoint] {
        &self.points
    }

    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

/// The in-progress stroke: an append-only point buffer that is moved into
/// an immutable [`BrushStroke`] when the gesture ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveStroke {
    points: Vec<ImagePoint>,
    radius: f64,
}

impl ActiveStroke {
    pub fn new(start: ImagePoint, radius: f64) -> Self {
        Self {
            points: vec![start],
            radius,
        }
    }

    pub fn append_point(&mut self, point: ImagePoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[ImagePoint] {
        &self.points
    }

    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Consumes the buffer into a committed stroke. An active stroke always
    /// holds at least its starting point, so this cannot produce an empty
    /// stroke.
    pub fn commit(self) -> BrushStroke {
        BrushStroke {
            points: self.points,
            radius: self.radius,
        }
    }
}
