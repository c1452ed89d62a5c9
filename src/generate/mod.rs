//! Seam to the external image-generation service.
//!
//! The core hands the adapter a masked PNG plus the user's prompt and gets
//! filled image bytes back. Transport, auth, and response parsing live
//! behind [`GenerationBackend`]; any failure there surfaces as one opaque
//! human-readable message, with no recovery or retry in the core — the user
//! re-triggers generation manually.

use thiserror::Error;

use crate::editor::MaskEditor;
use crate::export::ExportError;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("a generation request is already in flight")]
    AlreadyInFlight,
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("{0}")]
    Backend(String),
}

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// The masked image and prompt handed to the adapter.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub masked_png: &'a [u8],
    pub prompt: &'a str,
}

/// Encoded image bytes returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
}

/// Adapter to the remote fill service. Implementations own transport and
/// credentials; errors they return are shown to the user verbatim.
pub trait GenerationBackend {
    fn generate(&self, request: GenerationRequest<'_>) -> anyhow::Result<GeneratedImage>;
}

/// Tracks the single allowed in-flight generation call. Hosts driving the
/// backend asynchronously hold `begin` for the duration of the call and
/// `finish` when the result or failure arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationState {
    in_flight: bool,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn begin(&mut self) -> GenerationResult<()> {
        if self.in_flight {
            return Err(GenerationError::AlreadyInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

/// Exports the editor's current mask and runs one generation call. The
/// backend is invoked at most once; a failure is returned as-is, never
/// retried.
pub fn run_generation<B: GenerationBackend>(
    editor: &MaskEditor,
    prompt: &str,
    state: &mut GenerationState,
    backend: &B,
) -> GenerationResult<GeneratedImage> {
    state.begin()?;
    let result = generate_once(editor, prompt, backend);
    state.finish();
    result
}

fn generate_once<B: GenerationBackend>(
    editor: &MaskEditor,
    prompt: &str,
    backend: &B,
) -> GenerationResult<GeneratedImage> {
    let masked_png = editor.export_mask_png()?;
    tracing::debug!(bytes = masked_png.len(), prompt, "dispatching generation request");

    backend
        .generate(GenerationRequest {
            masked_png: &masked_png,
            prompt,
        })
        .map_err(|err| {
            tracing::warn!(?err, "generation backend failed");
            GenerationError::Backend(format!("{err:#}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ViewportBounds;
    use image::{Rgba, RgbaImage};
    use std::cell::Cell;

    struct MockBackend {
        calls: Cell<usize>,
        fail_with: Option<&'static str>,
    }

    impl MockBackend {
        fn succeeding() -> Self {
            Self {
                calls: Cell::new(0),
                fail_with: None,
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                calls: Cell::new(0),
                fail_with: Some(message),
            }
        }
    }

    impl GenerationBackend for MockBackend {
        fn generate(&self, request: GenerationRequest<'_>) -> anyhow::Result<GeneratedImage> {
            self.calls.set(self.calls.get() + 1);
            if let Some(message) = self.fail_with {
                anyhow::bail!("{message}");
            }
            assert_eq!(&request.masked_png[..8], b"\x89PNG\r\n\x1a\n");
            Ok(GeneratedImage {
                bytes: request.masked_png.to_vec(),
            })
        }
    }

    fn editor_with_mask() -> MaskEditor {
        let mut editor = MaskEditor::new();
        editor.set_viewport(ViewportBounds::new(32.0, 32.0));
        editor.load_image(RgbaImage::from_pixel(32, 32, Rgba([5, 5, 5, 255])));
        editor.pointer_down(16.0, 16.0);
        editor.pointer_up();
        editor
    }

    #[test]
    fn successful_generation_passes_the_masked_png_once() {
        let editor = editor_with_mask();
        let backend = MockBackend::succeeding();
        let mut state = GenerationState::new();

        let generated = run_generation(&editor, "fill with clouds", &mut state, &backend)
            .expect("generation should succeed");
        assert!(!generated.bytes.is_empty());
        assert_eq!(backend.calls.get(), 1);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn backend_failure_surfaces_one_opaque_message_without_retry() {
        let editor = editor_with_mask();
        let backend = MockBackend::failing("missing API key");
        let mut state = GenerationState::new();

        let error = run_generation(&editor, "fill", &mut state, &backend)
            .expect_err("backend failure should surface");
        assert_eq!(error.to_string(), "missing API key");
        assert_eq!(backend.calls.get(), 1);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn second_call_while_in_flight_is_rejected() {
        let editor = editor_with_mask();
        let backend = MockBackend::succeeding();
        let mut state = GenerationState::new();
        state.begin().expect("first begin should succeed");

        let error = run_generation(&editor, "fill", &mut state, &backend)
            .expect_err("in-flight call should reject");
        assert!(matches!(error, GenerationError::AlreadyInFlight));
        assert_eq!(backend.calls.get(), 0);

        state.finish();
        run_generation(&editor, "fill", &mut state, &backend)
            .expect("generation should succeed after finish");
    }

    #[test]
    fn generation_without_a_loaded_image_reports_export_failure() {
        let editor = MaskEditor::new();
        let backend = MockBackend::succeeding();
        let mut state = GenerationState::new();

        let error = run_generation(&editor, "fill", &mut state, &backend)
            .expect_err("missing image should fail");
        assert!(matches!(error, GenerationError::Export(_)));
        assert_eq!(backend.calls.get(), 0);
        assert!(!state.is_in_flight());
    }
}
