//! The source raster for one editing session.

use image::RgbaImage;

/// Decoded source image plus its native dimensions, or nothing yet.
///
/// A frame is replaced wholesale when a new image is loaded, never mutated
/// in place. Every drawing and compositing operation is a silent no-op
/// while the frame is `Unloaded`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageFrame {
    #[default]
    Unloaded,
    Loaded(RgbaImage),
}

impl ImageFrame {
    pub fn from_raster(raster: RgbaImage) -> Self {
        if raster.width() == 0 || raster.height() == 0 {
            tracing::warn!("refusing zero-dimension raster; frame stays unloaded");
            return Self::Unloaded;
        }
        Self::Loaded(raster)
    }

    /// The raster, when loaded with positive dimensions.
    pub fn raster(&self) -> Option<&RgbaImage> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(raster) => Some(raster),
        }
    }

    /// Native `(width, height)`, when loaded.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.raster().map(RgbaImage::dimensions)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unloaded_frame_exposes_no_raster_or_dimensions() {
        let frame = ImageFrame::default();
        assert!(!frame.is_loaded());
        assert!(frame.raster().is_none());
        assert!(frame.dimensions().is_none());
    }

    #[test]
    fn loaded_frame_reports_native_dimensions() {
        let frame = ImageFrame::from_raster(RgbaImage::new(320, 180));
        assert!(frame.is_loaded());
        assert_eq!(frame.dimensions(), Some((320, 180)));
    }

    #[test]
    fn zero_dimension_raster_is_rejected() {
        let frame = ImageFrame::from_raster(RgbaImage::new(0, 180));
        assert!(!frame.is_loaded());
    }
}
