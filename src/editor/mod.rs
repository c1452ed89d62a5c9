//! Stroke capture model and the editing session facade.

pub mod history;
pub mod recorder;
pub mod stroke;

use image::RgbaImage;

pub use history::StrokeHistory;
pub use recorder::{GesturePhase, StrokeRecorder};
pub use stroke::{ActiveStroke, BrushStroke};

use crate::config::EditorConfig;
use crate::export::{self, ExportError};
use crate::frame::ImageFrame;
use crate::geometry::{ImagePoint, ViewTransform, ViewportBounds};
use crate::render::{mask, overlay};

/// One masking session: the source frame, the gesture recorder, the view
/// transform, and the current overlay and mask rasters.
///
/// Every mutation is applied atomically on the calling thread and the
/// affected rasters are recomputed synchronously before the call returns,
/// so [`overlay`](Self::overlay) and [`mask`](Self::mask) always observe a
/// self-consistent state. Pointer input arrives in display space and is
/// mapped to native image space before it touches stroke state. All
/// drawing operations are silent no-ops until an image is loaded.
#[derive(Debug, Clone)]
pub struct MaskEditor {
    config: EditorConfig,
    frame: ImageFrame,
    recorder: StrokeRecorder,
    viewport: ViewportBounds,
    transform: ViewTransform,
    brush_radius: f64,
    overlay: Option<RgbaImage>,
    mask: Option<RgbaImage>,
}

impl Default for MaskEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskEditor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        // Until the host reports its viewport, only the configured maximum
        // display height constrains the scale.
        let viewport = ViewportBounds::new(f64::INFINITY, config.max_display_height);
        Self {
            brush_radius: config.brush_radius_default,
            config,
            frame: ImageFrame::Unloaded,
            recorder: StrokeRecorder::new(),
            viewport,
            transform: ViewTransform::new(1.0, 0.0, 0.0),
            overlay: None,
            mask: None,
        }
    }

    /// Replaces the source image wholesale and starts a fresh session:
    /// any in-progress gesture and the whole stroke history are discarded
    /// before the new frame is rendered for the first time.
    pub fn load_image(&mut self, raster: RgbaImage) {
        self.recorder.reset();
        self.frame = ImageFrame::from_raster(raster);
        self.refit();
        tracing::debug!(dimensions = ?self.frame.dimensions(), "image loaded");
        self.refresh_overlay();
        self.refresh_mask();
    }

    /// Updates the display bounds (e.g. on window resize) and recomputes
    /// the view transform. Stroke state and rasters are unaffected; the
    /// overlay is already at native resolution and only its presentation
    /// scale changes.
    pub fn set_viewport(&mut self, bounds: ViewportBounds) {
        self.viewport = bounds;
        self.refit();
    }

    /// Convenience for hosts that track only the available width: derives
    /// the bounds from the configured padding and maximum display height.
    pub fn fit_to_viewport_width(&mut self, viewport_width: f64) {
        self.set_viewport(self.config.display_bounds(viewport_width));
    }

    pub const fn view_transform(&self) -> ViewTransform {
        self.transform
    }

    pub const fn brush_radius(&self) -> f64 {
        self.brush_radius
    }

    /// Sets the radius used by the next gesture. The brush control owns
    /// validation; out-of-range values are clamped here defensively and
    /// never alter a stroke already in progress.
    pub fn set_brush_radius(&mut self, radius: f64) {
        let clamped = self.config.clamp_brush_radius(radius);
        if clamped != radius {
            tracing::warn!(radius, clamped, "brush radius outside configured range");
        }
        self.brush_radius = clamped;
    }

    /// Gesture start at a display-space pointer position.
    pub fn pointer_down(&mut self, display_x: f64, display_y: f64) {
        let Some(point) = self.map_pointer(display_x, display_y) else {
            return;
        };
        self.recorder.begin_stroke(point, self.brush_radius);
        self.refresh_overlay();
    }

    /// Gesture move; appends to the in-progress stroke and re-renders the
    /// overlay for live feedback. No-op while idle.
    pub fn pointer_move(&mut self, display_x: f64, display_y: f64) {
        if self.recorder.phase() != GesturePhase::Drawing {
            return;
        }
        let Some(point) = self.map_pointer(display_x, display_y) else {
            return;
        };
        self.recorder.append_point(point);
        self.refresh_overlay();
    }

    /// Gesture end: commits the in-progress stroke and recomputes both
    /// rasters.
    pub fn pointer_up(&mut self) {
        if self.recorder.end_stroke() {
            self.refresh_overlay();
            self.refresh_mask();
        }
    }

    /// Pointer leaving the surface or focus loss ends the gesture exactly
    /// like pointer-up.
    pub fn cancel_gesture(&mut self) {
        self.pointer_up();
    }

    /// Removes the last committed stroke. Never affects an in-progress
    /// gesture.
    pub fn undo(&mut self) {
        if self.recorder.undo() {
            self.refresh_overlay();
            self.refresh_mask();
        }
    }

    /// Removes every committed stroke.
    pub fn clear(&mut self) {
        if self.recorder.clear() {
            self.refresh_overlay();
            self.refresh_mask();
        }
    }

    pub fn frame(&self) -> &ImageFrame {
        &self.frame
    }

    pub fn history(&self) -> &StrokeHistory {
        self.recorder.history()
    }

    pub fn active_stroke(&self) -> Option<&ActiveStroke> {
        self.recorder.active_stroke()
    }

    /// The current overlay raster at native resolution, when loaded.
    pub fn overlay(&self) -> Option<&RgbaImage> {
        self.overlay.as_ref()
    }

    /// The current exportable mask at native resolution, when loaded.
    pub fn mask(&self) -> Option<&RgbaImage> {
        self.mask.as_ref()
    }

    /// Encodes the current mask as a lossless PNG byte-stream for the
    /// generation service adapter.
    pub fn export_mask_png(&self) -> Result<Vec<u8>, ExportError> {
        let mask = self.mask.as_ref().ok_or(ExportError::ImageNotLoaded)?;
        export::encode_png(mask)
    }

    fn map_pointer(&self, display_x: f64, display_y: f64) -> Option<ImagePoint> {
        if !self.frame.is_loaded() {
            tracing::debug!("pointer event before image load ignored");
            return None;
        }
        Some(self.transform.to_image_space(display_x, display_y))
    }

    fn refit(&mut self) {
        let Some((width, height)) = self.frame.dimensions() else {
            self.transform = ViewTransform::new(1.0, 0.0, 0.0);
            return;
        };
        self.transform = ViewTransform::fitting(width, height, self.viewport);
    }

    fn refresh_overlay(&mut self) {
        self.overlay = overlay::render(
            &self.frame,
            self.recorder.history(),
            self.recorder.active_stroke(),
            self.config.highlight,
        );
    }

    fn refresh_mask(&mut self) {
        self.mask = mask::composite(&self.frame, self.recorder.history());
    }
}
