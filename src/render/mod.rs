//! Deterministic CPU rasterization of brush strokes.
//!
//! The overlay renderer and the mask compositor both reduce a stroke to the
//! same coverage question: which pixels does its polyline touch? A pixel is
//! covered when its center lies within half the brush radius of the
//! polyline, i.e. each segment contributes a capsule and the capsule ends
//! give the round caps and joins. A single-point stroke covers a disc of
//! diameter equal to the brush radius.

pub mod mask;
pub mod overlay;

use crate::geometry::ImagePoint;

/// Boolean per-pixel coverage at native image resolution.
#[derive(Debug, Clone)]
pub struct CoverageMap {
    width: u32,
    height: u32,
    covered: Vec<bool>,
}

impl CoverageMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            covered: vec![false; width as usize * height as usize],
        }
    }

    pub fn clear(&mut self) {
        self.covered.fill(false);
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn is_covered(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.covered[self.index(x, y)]
    }

    pub fn covered_count(&self) -> usize {
        self.covered.iter().filter(|&&covered| covered).count()
    }

    /// Marks every pixel within `radius / 2` of the stroke polyline.
    /// Marking only ever adds coverage, so unioning strokes into one map is
    /// order-independent.
    pub fn mark_stroke(&mut self, points: &[ImagePoint], radius: f64) {
        let half_width = radius / 2.0;
        match points {
            [] => {}
            [only] => self.mark_segment(*only, *only, half_width),
            _ => {
                for pair in points.windows(2) {
                    self.mark_segment(pair[0], pair[1], half_width);
                }
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Capsule coverage of one segment, scanned over its bounding box only.
    fn mark_segment(&mut self, a: ImagePoint, b: ImagePoint, half_width: f64) {
        if half_width <= 0.0 {
            return;
        }

        let min_x = (a.x.min(b.x) - half_width).floor();
        let max_x = (a.x.max(b.x) + half_width).ceil();
        let min_y = (a.y.min(b.y) - half_width).floor();
        let max_y = (a.y.max(b.y) + half_width).ceil();

        let x0 = clamp_axis(min_x, self.width);
        let x1 = clamp_axis(max_x, self.width);
        let y0 = clamp_axis(min_y, self.height);
        let y1 = clamp_axis(max_y, self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let center_x = f64::from(x) + 0.5;
                let center_y = f64::from(y) + 0.5;
                if distance_to_segment(center_x, center_y, a, b) <= half_width {
                    let index = self.index(x, y);
                    self.covered[index] = true;
                }
            }
        }
    }
}

fn clamp_axis(value: f64, limit: u32) -> u32 {
    if value <= 0.0 {
        return 0;
    }
    if value >= f64::from(limit) {
        return limit;
    }
    value as u32
}

/// Distance from `(px, py)` to the closed segment `a..b`. Degenerates to
/// point distance when the segment has zero length.
fn distance_to_segment(px: f64, py: f64, a: ImagePoint, b: ImagePoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_squared = dx * dx + dy * dy;

    let (nearest_x, nearest_y) = if length_squared == 0.0 {
        (a.x, a.y)
    } else {
        let t = (((px - a.x) * dx + (py - a.y) * dy) / length_squared).clamp(0.0, 1.0);
        (a.x + t * dx, a.y + t * dy)
    };

    let offset_x = px - nearest_x;
    let offset_y = py - nearest_y;
    (offset_x * offset_x + offset_y * offset_y).sqrt()
}
