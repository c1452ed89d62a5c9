//! The exportable alpha mask: every painted pixel cut fully transparent.

use image::RgbaImage;

use super::CoverageMap;
use crate::editor::StrokeHistory;
use crate::frame::ImageFrame;

/// Rasterizes the mask at the image's native resolution: a copy of the
/// source in which every pixel covered by any committed stroke has alpha
/// zero and unchanged RGB. This is the "cut a hole" operation, not "paint
/// black": erasing only consumes alpha coverage, so strokes union
/// monotonically and no stroke can restore opacity erased by another.
///
/// An empty history yields a byte-identical copy of the source. Returns
/// `None` when no image is loaded; the compositor is never run without
/// positive native dimensions.
pub fn composite(frame: &ImageFrame, history: &StrokeHistory) -> Option<RgbaImage> {
    let source = frame.raster()?;
    let mut raster = source.clone();
    if history.is_empty() {
        return Some(raster);
    }

    let mut coverage = CoverageMap::new(source.width(), source.height());
    for stroke in history.strokes() {
        coverage.mark_stroke(stroke.points(), stroke.radius());
    }

    for (x, y, pixel) in raster.enumerate_pixels_mut() {
        if coverage.is_covered(x, y) {
            pixel.0[3] = 0;
        }
    }

    Some(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::stroke::BrushStroke;
    use crate::geometry::ImagePoint;
    use image::Rgba;

    fn checkered_frame(width: u32, height: u32) -> ImageFrame {
        ImageFrame::from_raster(RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([200, 30, 60, 255])
            } else {
                Rgba([10, 90, 160, 255])
            }
        }))
    }

    fn history_of(strokes: Vec<BrushStroke>) -> StrokeHistory {
        let mut history = StrokeHistory::new();
        for stroke in strokes {
            history.push(stroke);
        }
        history
    }

    fn click(x: f64, y: f64, radius: f64) -> BrushStroke {
        BrushStroke::from_points(vec![ImagePoint::new(x, y)], radius)
            .expect("single-point stroke should build")
    }

    fn transparent_pixels(raster: &RgbaImage) -> Vec<(u32, u32)> {
        raster
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel[3] == 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn unloaded_frame_is_never_composited() {
        assert!(composite(&ImageFrame::Unloaded, &StrokeHistory::new()).is_none());
    }

    #[test]
    fn empty_history_yields_byte_identical_source() {
        let frame = checkered_frame(24, 18);
        let mask = composite(&frame, &StrokeHistory::new()).expect("frame loaded");
        assert_eq!(&mask, frame.raster().expect("frame loaded"));
    }

    #[test]
    fn click_cuts_a_circular_hole_with_rgb_untouched() {
        let frame = checkered_frame(200, 200);
        let history = history_of(vec![click(100.0, 100.0, 40.0)]);
        let mask = composite(&frame, &history).expect("frame loaded");
        let source = frame.raster().expect("frame loaded");

        // Inside the disc of radius 20: transparent, RGB preserved.
        let center = mask.get_pixel(100, 100);
        let original = source.get_pixel(100, 100);
        assert_eq!(center[3], 0);
        assert_eq!(&center.0[..3], &original.0[..3]);
        assert_eq!(mask.get_pixel(100, 81)[3], 0);
        assert_eq!(mask.get_pixel(119, 100)[3], 0);

        // Outside: fully opaque and identical to the source.
        assert_eq!(mask.get_pixel(100, 79)[3], 255);
        assert_eq!(mask.get_pixel(0, 0), source.get_pixel(0, 0));
        assert_eq!(mask.get_pixel(115, 115)[3], 255);
    }

    #[test]
    fn erase_is_monotonic_when_strokes_are_appended() {
        let frame = checkered_frame(80, 80);
        let mut history = history_of(vec![click(20.0, 20.0, 16.0)]);
        let before = transparent_pixels(&composite(&frame, &history).expect("frame loaded"));

        history.push(
            BrushStroke::from_points(
                vec![ImagePoint::new(15.0, 15.0), ImagePoint::new(60.0, 60.0)],
                12.0,
            )
            .expect("stroke should build"),
        );
        let after = transparent_pixels(&composite(&frame, &history).expect("frame loaded"));

        assert!(after.len() >= before.len());
        for pixel in &before {
            assert!(after.contains(pixel), "erased pixel {pixel:?} reappeared");
        }
    }

    #[test]
    fn transparent_set_is_independent_of_stroke_order() {
        let frame = checkered_frame(60, 60);
        let strokes = [
            click(15.0, 15.0, 14.0),
            click(30.0, 30.0, 20.0),
            BrushStroke::from_points(
                vec![ImagePoint::new(5.0, 50.0), ImagePoint::new(55.0, 50.0)],
                8.0,
            )
            .expect("stroke should build"),
        ];

        let forward = history_of(strokes.to_vec());
        let reversed = history_of(strokes.iter().rev().cloned().collect());

        assert_eq!(
            transparent_pixels(&composite(&frame, &forward).expect("frame loaded")),
            transparent_pixels(&composite(&frame, &reversed).expect("frame loaded")),
        );
    }

    #[test]
    fn undo_restores_the_single_stroke_mask() {
        let frame = checkered_frame(64, 64);
        let stroke_a = click(16.0, 16.0, 10.0);

        let mut history = history_of(vec![stroke_a.clone(), click(48.0, 48.0, 10.0)]);
        assert!(history.undo());

        let after_undo = composite(&frame, &history).expect("frame loaded");
        let only_a = composite(&frame, &history_of(vec![stroke_a])).expect("frame loaded");
        assert_eq!(after_undo, only_a);
    }

    #[test]
    fn clear_yields_the_untouched_source() {
        let frame = checkered_frame(64, 64);
        let mut history = history_of(vec![click(16.0, 16.0, 10.0), click(40.0, 30.0, 18.0)]);
        assert!(history.clear());

        let mask = composite(&frame, &history).expect("frame loaded");
        assert_eq!(&mask, frame.raster().expect("frame loaded"));
    }
}
