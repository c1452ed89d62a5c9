//! Coordinate mapping between display space and native image space.
//!
//! Strokes are recorded in native image coordinates so the same stroke list
//! drives both the scaled-down on-screen overlay and the full-resolution
//! mask. Display space only exists at the pointer-input boundary.

/// A point in native image space. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

impl ImagePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maximum display extents available to the image, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub max_width: f64,
    pub max_height: f64,
}

impl ViewportBounds {
    pub const fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
        }
    }
}

/// Display-pixels per image-pixel, with the display origin of the image.
///
/// `scale` is always in `(0, 1]`: images smaller than the viewport bounds
/// are shown at native size, never upscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl ViewTransform {
    pub const fn new(scale: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            scale,
            origin_x,
            origin_y,
        }
    }

    pub fn fitting(image_width: u32, image_height: u32, bounds: ViewportBounds) -> Self {
        Self::new(
            compute_scale(
                image_width,
                image_height,
                bounds.max_width,
                bounds.max_height,
            ),
            0.0,
            0.0,
        )
    }

    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a pointer position in display space to native image space.
    pub fn to_image_space(&self, pointer_x: f64, pointer_y: f64) -> ImagePoint {
        ImagePoint::new(
            (pointer_x - self.origin_x) / self.scale,
            (pointer_y - self.origin_y) / self.scale,
        )
    }

    /// Inverse of [`to_image_space`](Self::to_image_space).
    pub fn to_display_space(&self, point: ImagePoint) -> (f64, f64) {
        (
            point.x * self.scale + self.origin_x,
            point.y * self.scale + self.origin_y,
        )
    }
}

/// Largest scale in `(0, 1]` such that the image fits the given bounds.
pub fn compute_scale(image_width: u32, image_height: u32, max_width: f64, max_height: f64) -> f64 {
    if image_width == 0 || image_height == 0 {
        return 1.0;
    }

    let fit_x = max_width / f64::from(image_width);
    let fit_y = max_height / f64::from(image_height);
    fit_x.min(fit_y).min(1.0).max(f64::MIN_POSITIVE)
}
