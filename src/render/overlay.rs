//! The visible editing overlay: source image plus translucent highlight
//! along every stroke.

use image::{Rgba, RgbaImage};

use super::CoverageMap;
use crate::editor::{ActiveStroke, StrokeHistory};
use crate::frame::ImageFrame;

/// Default highlight: translucent red.
pub const DEFAULT_HIGHLIGHT: [u8; 4] = [255, 0, 0, 128];

/// Renders the overlay surface at the image's native resolution; scaling to
/// the viewport is a presentation concern and never resamples this raster.
///
/// Committed strokes are layered in history order, then the in-progress
/// stroke. Each stroke blends its highlight exactly once per covered pixel,
/// so self-overlap inside one gesture stays uniform while separate strokes
/// deepen where they cross.
pub fn render(
    frame: &ImageFrame,
    history: &StrokeHistory,
    active: Option<&ActiveStroke>,
    highlight: [u8; 4],
) -> Option<RgbaImage> {
    let source = frame.raster()?;
    let mut surface = source.clone();
    let mut coverage = CoverageMap::new(source.width(), source.height());

    for stroke in history.strokes() {
        coverage.clear();
        coverage.mark_stroke(stroke.points(), stroke.radius());
        blend_highlight(&mut surface, &coverage, highlight);
    }

    if let Some(stroke) = active {
        coverage.clear();
        coverage.mark_stroke(stroke.points(), stroke.radius());
        blend_highlight(&mut surface, &coverage, highlight);
    }

    Some(surface)
}

fn blend_highlight(surface: &mut RgbaImage, coverage: &CoverageMap, highlight: [u8; 4]) {
    for (x, y, pixel) in surface.enumerate_pixels_mut() {
        if coverage.is_covered(x, y) {
            *pixel = blend_over(*pixel, highlight);
        }
    }
}

/// Source-over blend of the highlight onto one pixel, with round-to-nearest
/// integer arithmetic.
fn blend_over(under: Rgba<u8>, over: [u8; 4]) -> Rgba<u8> {
    let alpha = u16::from(over[3]);
    let inverse = 255 - alpha;

    let channel = |top: u8, bottom: u8| -> u8 {
        ((u16::from(top) * alpha + u16::from(bottom) * inverse + 127) / 255) as u8
    };

    Rgba([
        channel(over[0], under[0]),
        channel(over[1], under[1]),
        channel(over[2], under[2]),
        (alpha + u16::from(under[3]) * inverse / 255).min(255) as u8,
    ])
}
